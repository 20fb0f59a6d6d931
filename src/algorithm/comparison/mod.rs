//! Comparison orchestration
//!
//! Three comparisons share one pipeline (resolve groups, summarize, present):
//!
//! - [`individual`]: one person against colleagues with the same title
//! - [`cross_institution`]: chosen titles across institutions
//! - [`multi_title`]: several titles across several facets of one institution
//!
//! Each run returns a fresh [`ComparisonOutcome`], either a ready payload or
//! an explicit empty state.

pub mod cross_institution;
pub mod individual;
pub mod multi_title;
pub mod narrative;
pub mod outcome;
pub mod presentation;

pub use cross_institution::{
    InstitutionTitles, compare_across_institutions, compare_title_across_institutions,
};
pub use individual::{PersonQuery, compare_individual, find_person};
pub use multi_title::compare_job_titles;
pub use narrative::{Narrative, range_sentence};
pub use outcome::{ComparisonOutcome, EmptyReason, EmptyState};
pub use presentation::{
    BoxSummary, CategoryAxis, ComparisonPayload, LegendEntry, PlotData, RangeOverlay, ValueExtent,
};

use crate::config::ComparisonConfig;
use crate::models::InstitutionData;

/// Title suggestions for a search box, capped at the configured limit
#[must_use]
pub fn suggest_titles<'a>(
    data: &'a InstitutionData,
    query: &str,
    config: &ComparisonConfig,
) -> Vec<&'a str> {
    data.titles
        .search_limited(query, config.min_query_len, config.suggestion_limit)
}
