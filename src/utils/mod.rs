//! Shared helpers for logging and formatting

pub mod format;
pub mod logging;

pub use format::{format_currency, join_names};
pub use logging::{log_operation_complete, log_operation_start, log_warning};
