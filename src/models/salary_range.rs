//! Published salary-range bands
//!
//! Institutions publish an approximate minimum and maximum per job category.
//! Either end may be missing ("NA" in the source data); a missing end is an
//! open-ended range, never zero.

use serde::{Deserialize, Serialize, Serializer};

/// One end of a salary-range band
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RangeBound {
    /// A published amount in dollars
    Amount(f64),
    /// No published bound; the range is open at this end
    NotAvailable,
}

impl RangeBound {
    /// The amount, if one was published
    #[must_use]
    pub const fn amount(self) -> Option<f64> {
        match self {
            Self::Amount(value) => Some(value),
            Self::NotAvailable => None,
        }
    }

    /// Whether the bound is missing
    #[must_use]
    pub const fn is_open(self) -> bool {
        matches!(self, Self::NotAvailable)
    }

    /// Use the published amount or fall back to `fallback`
    #[must_use]
    pub fn or(self, fallback: f64) -> f64 {
        self.amount().unwrap_or(fallback)
    }
}

impl From<Option<f64>> for RangeBound {
    fn from(value: Option<f64>) -> Self {
        value.map_or(Self::NotAvailable, Self::Amount)
    }
}

impl Serialize for RangeBound {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Amount(value) => serializer.serialize_f64(*value),
            Self::NotAvailable => serializer.serialize_str("NA"),
        }
    }
}

impl<'de> Deserialize<'de> for RangeBound {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawBound {
            Number(f64),
            Text(String),
            Missing(()),
            Other(serde::de::IgnoredAny),
        }

        Ok(match RawBound::deserialize(deserializer)? {
            RawBound::Number(value) if value.is_finite() => Self::Amount(value),
            RawBound::Text(text) => text
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|value| value.is_finite())
                .into(),
            RawBound::Number(_) | RawBound::Missing(()) | RawBound::Other(_) => Self::NotAvailable,
        })
    }
}

/// Approximate published salary range for one job category
///
/// Construction normalizes the ordering: when both bounds are present and
/// `min > max` they are swapped.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawBand")]
pub struct SalaryRangeBand {
    min: RangeBound,
    max: RangeBound,
}

#[derive(Deserialize)]
struct RawBand {
    #[serde(default = "not_available")]
    min: RangeBound,
    #[serde(default = "not_available")]
    max: RangeBound,
}

const fn not_available() -> RangeBound {
    RangeBound::NotAvailable
}

impl From<RawBand> for SalaryRangeBand {
    fn from(raw: RawBand) -> Self {
        Self::new(raw.min, raw.max)
    }
}

impl SalaryRangeBand {
    /// Create a band, swapping the bounds if they are out of order
    #[must_use]
    pub fn new(min: RangeBound, max: RangeBound) -> Self {
        match (min, max) {
            (RangeBound::Amount(low), RangeBound::Amount(high)) if low > high => Self {
                min: RangeBound::Amount(high),
                max: RangeBound::Amount(low),
            },
            _ => Self { min, max },
        }
    }

    /// A band with neither bound published
    #[must_use]
    pub const fn unavailable() -> Self {
        Self {
            min: RangeBound::NotAvailable,
            max: RangeBound::NotAvailable,
        }
    }

    /// Band spanning an observed set of salaries; unavailable if there are none
    #[must_use]
    pub fn observed<I: IntoIterator<Item = f64>>(salaries: I) -> Self {
        let (low, high) = salaries
            .into_iter()
            .filter(|value| value.is_finite())
            .fold((None, None), |(low, high): (Option<f64>, Option<f64>), value| {
                (
                    Some(low.map_or(value, |l| l.min(value))),
                    Some(high.map_or(value, |h| h.max(value))),
                )
            });
        Self::new(low.into(), high.into())
    }

    /// Lower bound
    #[must_use]
    pub const fn min(&self) -> RangeBound {
        self.min
    }

    /// Upper bound
    #[must_use]
    pub const fn max(&self) -> RangeBound {
        self.max
    }

    /// Whether neither bound is published
    #[must_use]
    pub const fn is_unavailable(&self) -> bool {
        self.min.is_open() && self.max.is_open()
    }
}
