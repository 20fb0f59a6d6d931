//! Comparison group resolution
//!
//! Selections are plain values describing which titles and scopes to compare.
//! The resolver crosses them against an institution's salary records using
//! composable record filters.

pub mod criteria;
pub mod resolver;
pub mod selection;

pub use criteria::{FilterCriteria, RecordFilter};
pub use resolver::{collect_group, group_label, highlight_positions, resolve};
pub use selection::{GroupOrdering, Scope, Selection};
