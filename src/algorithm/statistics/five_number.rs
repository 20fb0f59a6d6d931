//! Five-number summaries
//!
//! Quartiles use linear interpolation between order statistics (Hyndman-Fan
//! Type 7): for `n` sorted values the lower quartile sits at position
//! `q = (n - 1) * 0.25`, interpolated between `x[floor(q)]` and the next
//! value. The upper quartile is the mirror image taken from the tail with the
//! same fraction, which is the same as position `(n - 1) * 0.75`.

use serde::Serialize;

/// Minimum, quartiles, median and maximum of a sample
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FiveNumberSummary {
    /// Smallest value
    pub min: f64,
    /// 25th percentile
    pub lower_quartile: f64,
    /// 50th percentile
    pub median: f64,
    /// 75th percentile
    pub upper_quartile: f64,
    /// Largest value
    pub max: f64,
}

impl FiveNumberSummary {
    /// Degenerate summary of a single value
    #[must_use]
    pub const fn single(value: f64) -> Self {
        Self {
            min: value,
            lower_quartile: value,
            median: value,
            upper_quartile: value,
            max: value,
        }
    }

    /// The statistics as `[min, q1, median, q3, max]`
    #[must_use]
    pub const fn as_array(&self) -> [f64; 5] {
        [
            self.min,
            self.lower_quartile,
            self.median,
            self.upper_quartile,
            self.max,
        ]
    }

    /// Interquartile range
    #[must_use]
    pub fn iqr(&self) -> f64 {
        self.upper_quartile - self.lower_quartile
    }
}

/// Summarize a sample that may contain missing entries
///
/// Missing (`None`) and non-finite values are dropped first. Returns `None`
/// when nothing is left, which callers must treat as "no data".
#[must_use]
pub fn summarize<I>(values: I) -> Option<FiveNumberSummary>
where
    I: IntoIterator<Item = Option<f64>>,
{
    let mut sorted: Vec<f64> = values
        .into_iter()
        .flatten()
        .filter(|v| v.is_finite())
        .collect();

    match sorted.len() {
        0 => None,
        1 => Some(FiveNumberSummary::single(sorted[0])),
        n => {
            sorted.sort_unstable_by(f64::total_cmp);

            let median = if n % 2 == 1 {
                sorted[(n - 1) / 2]
            } else {
                (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0
            };

            let position = (n - 1) as f64 * 0.25;
            let below = position.floor() as usize;
            let frac = position - below as f64;

            let lower_quartile = sorted[below] * (1.0 - frac) + sorted[below + 1] * frac;
            let upper_quartile =
                sorted[n - 1 - below] * (1.0 - frac) + sorted[n - 2 - below] * frac;

            Some(FiveNumberSummary {
                min: sorted[0],
                lower_quartile,
                median,
                upper_quartile,
                max: sorted[n - 1],
            })
        }
    }
}

/// Summarize a slice of salaries with no missing entries
#[must_use]
pub fn summarize_salaries(salaries: &[f64]) -> Option<FiveNumberSummary> {
    summarize(salaries.iter().copied().map(Some))
}
