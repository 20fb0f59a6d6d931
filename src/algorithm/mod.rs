//! Salary comparison algorithms
//!
//! Statistics over salary samples, resolution of selections into comparison
//! groups, and the comparisons built on top of them.

pub mod comparison;
pub mod grouping;
pub mod statistics;
