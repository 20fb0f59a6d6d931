//! Per-institution datasets
//!
//! All datasets of an institution are materialized together; the comparison
//! code never sees partially loaded data.

use std::collections::BTreeMap;

use rustc_hash::FxHashMap;

use crate::error::{Result, SalaryCompareError};
use crate::index::TitleIndex;
use crate::models::salary::SalaryRecord;
use crate::models::salary_range::SalaryRangeBand;

/// Everything loaded for one institution
#[derive(Debug, Clone, Default)]
pub struct InstitutionData {
    /// Institution name
    pub name: String,
    /// Salary records in published order
    pub salaries: Vec<SalaryRecord>,
    /// Job code to title mapping
    pub titles: TitleIndex,
    /// Published salary-range bands keyed by job category (title)
    pub salary_ranges: FxHashMap<String, SalaryRangeBand>,
    /// Distinct school/college names
    pub schools: Vec<String>,
    /// Distinct department names
    pub divisions: Vec<String>,
}

impl InstitutionData {
    /// Create institution data from salaries and titles
    #[must_use]
    pub fn new(name: impl Into<String>, salaries: Vec<SalaryRecord>, titles: TitleIndex) -> Self {
        Self {
            name: name.into(),
            salaries,
            titles,
            ..Self::default()
        }
    }

    /// Attach published salary-range bands
    #[must_use]
    pub fn with_salary_ranges(
        mut self,
        ranges: impl IntoIterator<Item = (String, SalaryRangeBand)>,
    ) -> Self {
        self.salary_ranges = ranges.into_iter().collect();
        self
    }

    /// Attach the school/college list
    #[must_use]
    pub fn with_schools(mut self, schools: Vec<String>) -> Self {
        self.schools = schools;
        self
    }

    /// Attach the department list
    #[must_use]
    pub fn with_divisions(mut self, divisions: Vec<String>) -> Self {
        self.divisions = divisions;
        self
    }

    /// Title of a record's job code, if mapped
    #[must_use]
    pub fn title_of(&self, record: &SalaryRecord) -> Option<&str> {
        self.titles.title_for_code(&record.job_code)
    }

    /// Published band for a job category
    #[must_use]
    pub fn salary_range(&self, category: &str) -> Option<&SalaryRangeBand> {
        self.salary_ranges.get(category)
    }
}

/// Datasets for every loaded institution
#[derive(Debug, Clone, Default)]
pub struct Datasets {
    institutions: BTreeMap<String, InstitutionData>,
}

impl Datasets {
    /// Create an empty set of datasets
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace an institution
    pub fn insert(&mut self, data: InstitutionData) {
        self.institutions.insert(data.name.clone(), data);
    }

    /// Institution names in sorted order
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.institutions.keys().map(String::as_str).collect()
    }

    /// Look up an institution
    pub fn get(&self, institution: &str) -> Result<&InstitutionData> {
        self.institutions
            .get(institution)
            .ok_or_else(|| SalaryCompareError::UnknownInstitution(institution.to_string()))
    }

    /// Iterate institutions in sorted order
    pub fn iter(&self) -> impl Iterator<Item = &InstitutionData> {
        self.institutions.values()
    }

    /// Number of institutions
    #[must_use]
    pub fn len(&self) -> usize {
        self.institutions.len()
    }

    /// Whether no institution is loaded
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.institutions.is_empty()
    }

    /// Total number of salary records across institutions
    #[must_use]
    pub fn record_count(&self) -> usize {
        self.institutions.values().map(|d| d.salaries.len()).sum()
    }
}

impl FromIterator<InstitutionData> for Datasets {
    fn from_iter<I: IntoIterator<Item = InstitutionData>>(iter: I) -> Self {
        let mut datasets = Self::new();
        for data in iter {
            datasets.insert(data);
        }
        datasets
    }
}
