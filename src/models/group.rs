//! Comparison groups
//!
//! A comparison group is a labelled, non-empty set of salary records sharing
//! one facet combination (job title x scope). Groups are built fresh for each
//! comparison run and never mutated afterwards.

use serde::Serialize;
use smallvec::SmallVec;

use crate::algorithm::statistics::{FiveNumberSummary, GroupStatistics, summarize_salaries};
use crate::models::salary::SalaryRecord;

/// Level at which a comparison group was computed
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum FacetLevel {
    /// Every employee of the institution
    InstitutionWide,
    /// Employees in one or more schools/colleges (names in selection order)
    School(Vec<String>),
    /// Employees in one or more departments (names in selection order)
    Department(Vec<String>),
    /// Every employee of a named institution, used when comparing institutions
    Institution(String),
    /// The queried person on their own
    Individual,
}

impl FacetLevel {
    /// Label used after the job title in group labels and for ordering
    #[must_use]
    pub fn name(&self) -> String {
        match self {
            Self::InstitutionWide => "Institution-wide".to_string(),
            Self::School(names) | Self::Department(names) => names.join(", "),
            Self::Institution(name) => name.clone(),
            Self::Individual => "Individual".to_string(),
        }
    }

    /// Whether this is the institution-wide level
    #[must_use]
    pub const fn is_institution_wide(&self) -> bool {
        matches!(self, Self::InstitutionWide)
    }
}

impl std::fmt::Display for FacetLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name())
    }
}

/// A labelled, non-empty subset of salary records
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonGroup {
    /// Display label, `"<title>"` or `"<title> - <scope>"`
    pub label: String,
    /// Facet level the group was computed at
    pub facet_level: FacetLevel,
    /// Job title (or fallback label) shared by the members
    pub job_title: String,
    /// Members in dataset order
    pub members: Vec<SalaryRecord>,
    /// Positions in `members` of records belonging to the queried person
    pub highlighted: SmallVec<[usize; 1]>,
}

impl ComparisonGroup {
    /// Create a group without highlighted members
    #[must_use]
    pub fn new(
        label: impl Into<String>,
        facet_level: FacetLevel,
        job_title: impl Into<String>,
        members: Vec<SalaryRecord>,
    ) -> Self {
        Self {
            label: label.into(),
            facet_level,
            job_title: job_title.into(),
            members,
            highlighted: SmallVec::new(),
        }
    }

    /// Set the highlighted member positions
    #[must_use]
    pub fn with_highlighted(mut self, highlighted: SmallVec<[usize; 1]>) -> Self {
        self.highlighted = highlighted;
        self
    }

    /// Number of members
    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Whether the group has no members
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Salaries of the members in member order
    #[must_use]
    pub fn salaries(&self) -> Vec<f64> {
        self.members.iter().map(|m| m.annual_salary).collect()
    }

    /// First highlighted member, for a single "you" badge
    #[must_use]
    pub fn highlight_index(&self) -> Option<usize> {
        self.highlighted.first().copied()
    }

    /// Whether the member at `index` is highlighted
    #[must_use]
    pub fn is_highlighted(&self, index: usize) -> bool {
        self.highlighted.contains(&index)
    }

    /// Five-number summary of the member salaries
    #[must_use]
    pub fn summary(&self) -> Option<FiveNumberSummary> {
        summarize_salaries(&self.salaries())
    }

    /// Count, mean, median and extremes of the member salaries
    #[must_use]
    pub fn statistics(&self) -> Option<GroupStatistics> {
        GroupStatistics::from_salaries(&self.label, &self.salaries())
    }
}
