//! Descriptive statistics quoted alongside each comparison group

use serde::Serialize;

use super::five_number::{FiveNumberSummary, summarize_salaries};
use crate::utils::format_currency;

/// Headline numbers for one group
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupStatistics {
    /// Group label
    pub label: String,
    /// Number of employees
    pub count: usize,
    /// Arithmetic mean salary
    pub mean: f64,
    /// Median salary
    pub median: f64,
    /// Lowest salary
    pub min: f64,
    /// Highest salary
    pub max: f64,
}

impl GroupStatistics {
    /// Compute statistics for a labelled set of salaries; `None` if empty
    #[must_use]
    pub fn from_salaries(label: &str, salaries: &[f64]) -> Option<Self> {
        let summary: FiveNumberSummary = summarize_salaries(salaries)?;
        let finite: Vec<f64> = salaries.iter().copied().filter(|v| v.is_finite()).collect();
        let mean = finite.iter().sum::<f64>() / finite.len() as f64;

        Some(Self {
            label: label.to_string(),
            count: finite.len(),
            mean,
            median: summary.median,
            min: summary.min,
            max: summary.max,
        })
    }

    /// One-line description, e.g.
    /// `Analyst: 4 employee(s), Mean: $57,500, Median: $57,500, Range: $50,000 - $65,000`
    #[must_use]
    pub fn describe(&self) -> String {
        format!(
            "{}: {} employee(s), Mean: {}, Median: {}, Range: {} - {}",
            self.label,
            self.count,
            format_currency(self.mean),
            format_currency(self.median),
            format_currency(self.min),
            format_currency(self.max)
        )
    }
}
