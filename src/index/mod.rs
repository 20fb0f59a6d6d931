//! Job title lookup
//!
//! Each institution publishes its own job-code to title mapping. Several codes
//! can share one title, so "everyone with this title" is always answered
//! through the reverse title to code-set index.

pub mod title_index;

pub use title_index::TitleIndex;
