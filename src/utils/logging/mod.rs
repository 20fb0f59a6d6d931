//! Logging utilities
//!
//! This module provides standardized logging for dataset loading and comparison runs.

pub mod log;

// Re-export commonly used functions for convenience
pub use self::log::{log_operation_complete, log_operation_start, log_warning};
