//! Narrative text accompanying a comparison
//!
//! Plain structured text: an optional heading and a list of paragraphs. Turning
//! it into markup is left to whatever renders the payload.

use std::fmt;

use serde::Serialize;

use crate::models::SalaryRangeBand;
use crate::utils::format_currency;

/// Heading and paragraphs describing one comparison
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Narrative {
    /// Optional heading, e.g. `Summary Statistics`
    pub heading: Option<String>,
    /// Paragraphs in display order
    pub paragraphs: Vec<String>,
}

impl Narrative {
    /// Create an empty narrative
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the heading
    #[must_use]
    pub fn with_heading(mut self, heading: impl Into<String>) -> Self {
        self.heading = Some(heading.into());
        self
    }

    /// Append a paragraph
    #[must_use]
    pub fn paragraph(mut self, text: impl Into<String>) -> Self {
        self.paragraphs.push(text.into());
        self
    }

    /// Append several paragraphs
    #[must_use]
    pub fn paragraphs<I, S>(mut self, texts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.paragraphs.extend(texts.into_iter().map(Into::into));
        self
    }
}

impl fmt::Display for Narrative {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(heading) = &self.heading {
            writeln!(f, "{heading}")?;
        }
        for paragraph in &self.paragraphs {
            writeln!(f, "{paragraph}")?;
        }
        Ok(())
    }
}

/// Sentence describing an institution's salary range for a title
///
/// Missing bounds are stated as "no minimum" / "no maximum", never as zero.
#[must_use]
pub fn range_sentence(band: &SalaryRangeBand) -> String {
    if band.is_unavailable() {
        return "No salary range information available.".to_string();
    }

    let start = band.min().amount().map_or_else(
        || "There is no minimum salary at your institution;".to_string(),
        |min| {
            format!(
                "The approximate minimum salary at your institution is {};",
                format_currency(min)
            )
        },
    );
    let end = band.max().amount().map_or_else(
        || " there is no maximum salary at your institution.".to_string(),
        |max| {
            format!(
                " the approximate maximum salary at your institution is {}.",
                format_currency(max)
            )
        },
    );
    format!("{start}{end}")
}

/// Legend paragraphs for an individual comparison
#[must_use]
pub fn individual_legend() -> [&'static str; 3] {
    [
        "On top, the plot shows the actual salaries of all other employees (blue dots) \
         that have the same job title as you \
         (across the institution, in your school/college, and in your department).",
        "The green boxes represent the range from the 25th to 75th percentile with \
         a central line at the median, across the institution, within your school/college, \
         and within your department.",
        RANGE_LEGEND,
    ]
}

/// Legend paragraphs for the all-positions fallback
#[must_use]
pub fn all_positions_legend() -> [&'static str; 3] {
    [
        "The plot shows the actual salaries of all employees (blue dots) in the selected school(s).",
        "The green box represents the range from the 25th to 75th percentile with a central line at the median.",
        RANGE_LEGEND,
    ]
}

/// Legend paragraph for a cross-institution comparison
pub const INSTITUTION_LEGEND: &str = "The colored dots represent individual employees, with each \
     color corresponding to an institution. The colored boxes show the interquartile range \
     (25th to 75th percentile) for each institution, with the median line inside.";

const RANGE_LEGEND: &str = "The orange line indicates the approximate salary range at your \
     institution; arrowheads on the left or right indicate no minimum or maximum salary, \
     respectively.";
