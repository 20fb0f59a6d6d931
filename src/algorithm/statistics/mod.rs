//! Salary statistics
//!
//! One five-number summary rule (linear interpolation, Type 7) shared by every
//! comparison, plus the descriptive numbers quoted in narrative text.

pub mod descriptive;
pub mod five_number;

pub use descriptive::GroupStatistics;
pub use five_number::{FiveNumberSummary, summarize, summarize_salaries};
