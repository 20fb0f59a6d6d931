//! Salary comparison engine
//!
//! Loads per-institution salary datasets and turns user selections (job
//! titles, institutions, schools, departments or a named person) into
//! comparison groups with five-number summaries, plot points and narrative
//! text ready for a renderer.
//!
//! ```no_run
//! use salary_compare::{ComparisonConfig, PersonQuery, compare_individual, load_from_dir};
//!
//! # fn main() -> salary_compare::Result<()> {
//! let datasets = load_from_dir(std::path::Path::new("data"))?;
//! let data = datasets.get("State University")?;
//! let query = PersonQuery::new("Jane", "Doe");
//! let outcome = compare_individual(data, &query, &ComparisonConfig::default());
//! if let Some(payload) = outcome.payload() {
//!     println!("{}", payload.narrative);
//! }
//! # Ok(())
//! # }
//! ```

pub mod algorithm;
pub mod config;
pub mod error;
pub mod index;
pub mod loader;
pub mod models;
pub mod utils;

// Core types
pub use config::{ComparisonConfig, ComparisonConfigBuilder, PersonTieBreak};
pub use error::{Result, SalaryCompareError};
pub use index::TitleIndex;
pub use models::{
    ComparisonGroup, Datasets, FacetLevel, InstitutionData, PersonName, RangeBound,
    SalaryRangeBand, SalaryRecord,
};

// Statistics and grouping
pub use algorithm::grouping::{GroupOrdering, Scope, Selection, resolve};
pub use algorithm::statistics::{FiveNumberSummary, GroupStatistics, summarize};

// Comparisons
pub use algorithm::comparison::{
    ComparisonOutcome, ComparisonPayload, EmptyReason, EmptyState, InstitutionTitles, PersonQuery,
    compare_across_institutions, compare_individual, compare_job_titles,
    compare_title_across_institutions, suggest_titles,
};

// Loading
pub use loader::{from_json_strs, load_from_dir, load_from_dir_async};
