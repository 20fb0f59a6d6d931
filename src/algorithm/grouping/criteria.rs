//! Record filtering criteria
//!
//! Predicates used to carve comparison groups out of an institution's salary
//! records: job-code membership, school or department membership, and
//! person match.

use rustc_hash::FxHashSet;

use super::selection::Scope;
use crate::models::{PersonName, SalaryRecord};

/// Defines a criterion for filtering records
pub trait FilterCriteria<T> {
    /// Determine if an entity meets the filter criteria
    fn meets_criteria(&self, entity: &T) -> bool;
}

/// A filter that can be applied to a salary record
#[derive(Debug, Clone)]
pub enum RecordFilter {
    /// Job code is in the set (exact membership)
    JobCodes(FxHashSet<String>),
    /// School/college is in the set
    Schools(FxHashSet<String>),
    /// Department is in the set
    Departments(FxHashSet<String>),
    /// Record belongs to the named person
    Person(PersonName),
    /// Combined filter that requires all criteria to be met
    All(Vec<RecordFilter>),
    /// Combined filter that requires any criterion to be met
    Any(Vec<RecordFilter>),
}

impl RecordFilter {
    /// Filter on a set of job codes
    pub fn job_codes<I, S>(codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::JobCodes(codes.into_iter().map(Into::into).collect())
    }

    /// Filter matching every record
    #[must_use]
    pub const fn everything() -> Self {
        Self::All(Vec::new())
    }

    /// Filter for a scope's membership predicate
    #[must_use]
    pub fn for_scope(scope: &Scope) -> Self {
        match scope {
            Scope::InstitutionWide => Self::everything(),
            Scope::Schools(names) => Self::Schools(names.iter().cloned().collect()),
            Scope::Departments(names) => Self::Departments(names.iter().cloned().collect()),
        }
    }

    /// Combine with another filter, both must hold
    #[must_use]
    pub fn and(self, other: Self) -> Self {
        match self {
            Self::All(mut filters) => {
                filters.push(other);
                Self::All(filters)
            }
            first => Self::All(vec![first, other]),
        }
    }

    /// Clone the records that pass this filter, keeping dataset order
    #[must_use]
    pub fn select(&self, records: &[SalaryRecord]) -> Vec<SalaryRecord> {
        records
            .iter()
            .filter(|record| self.meets_criteria(record))
            .cloned()
            .collect()
    }
}

impl FilterCriteria<SalaryRecord> for RecordFilter {
    fn meets_criteria(&self, record: &SalaryRecord) -> bool {
        match self {
            Self::JobCodes(codes) => codes.contains(&record.job_code),
            Self::Schools(schools) => schools.contains(&record.school_college),
            Self::Departments(departments) => departments.contains(&record.department),
            Self::Person(person) => record.is_person(person),
            Self::All(filters) => filters.iter().all(|f| f.meets_criteria(record)),
            Self::Any(filters) => filters.iter().any(|f| f.meets_criteria(record)),
        }
    }
}
