//! Configuration for salary comparisons.

use std::fmt;

use crate::algorithm::grouping::GroupOrdering;

/// How to pick one employee when several share the queried first and last name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PersonTieBreak {
    /// Take the first match in stored order
    #[default]
    FirstMatch,
    /// Pick uniformly among the matches with a seeded generator
    Seeded(u64),
}

/// Configuration for comparison runs
#[derive(Debug, Clone)]
pub struct ComparisonConfig {
    /// Maximum number of title suggestions handed to the search box
    pub suggestion_limit: usize,
    /// Minimum query length (in characters) before title search returns anything
    pub min_query_len: usize,
    /// Multiplier applied to the lower end of the plotted salary extent
    pub axis_lower_padding: f64,
    /// Multiplier applied to the upper end of the plotted salary extent
    pub axis_upper_padding: f64,
    /// Tie-break for ambiguous person lookups
    pub person_tie_break: PersonTieBreak,
    /// Label used when a person lookup falls back to every position in scope
    pub all_positions_label: String,
    /// Default secondary ordering for multi-title comparisons
    pub group_ordering: GroupOrdering,
}

impl Default for ComparisonConfig {
    fn default() -> Self {
        Self {
            suggestion_limit: 20,
            min_query_len: 2,
            axis_lower_padding: 0.95,
            axis_upper_padding: 1.05,
            person_tie_break: PersonTieBreak::FirstMatch,
            all_positions_label: "All Positions".to_string(),
            group_ordering: GroupOrdering::ByLevelThenTitle,
        }
    }
}

impl ComparisonConfig {
    /// Create a new configuration with default values
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new builder for constructing a configuration
    #[must_use]
    pub fn builder() -> ComparisonConfigBuilder {
        ComparisonConfigBuilder::new()
    }
}

impl fmt::Display for ComparisonConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Comparison Configuration:")?;
        writeln!(f, "  Suggestion Limit: {}", self.suggestion_limit)?;
        writeln!(f, "  Minimum Query Length: {}", self.min_query_len)?;
        writeln!(
            f,
            "  Axis Padding: x{} / x{}",
            self.axis_lower_padding, self.axis_upper_padding
        )?;
        match self.person_tie_break {
            PersonTieBreak::FirstMatch => writeln!(f, "  Person Tie-Break: first match")?,
            PersonTieBreak::Seeded(seed) => writeln!(f, "  Person Tie-Break: seeded ({seed})")?,
        }
        writeln!(f, "  All Positions Label: {}", self.all_positions_label)?;
        writeln!(f, "  Group Ordering: {:?}", self.group_ordering)?;
        Ok(())
    }
}

/// Builder for constructing comparison configuration
#[derive(Debug, Clone)]
pub struct ComparisonConfigBuilder {
    config: ComparisonConfig,
}

impl Default for ComparisonConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ComparisonConfigBuilder {
    /// Create a new builder with default configuration
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: ComparisonConfig::default(),
        }
    }

    /// Set the suggestion limit
    #[must_use]
    pub const fn suggestion_limit(mut self, limit: usize) -> Self {
        self.config.suggestion_limit = limit;
        self
    }

    /// Set the minimum query length for title search
    #[must_use]
    pub const fn min_query_len(mut self, len: usize) -> Self {
        self.config.min_query_len = len;
        self
    }

    /// Set the axis padding multipliers
    #[must_use]
    pub const fn axis_padding(mut self, lower: f64, upper: f64) -> Self {
        self.config.axis_lower_padding = lower;
        self.config.axis_upper_padding = upper;
        self
    }

    /// Set the person tie-break policy
    #[must_use]
    pub const fn person_tie_break(mut self, tie_break: PersonTieBreak) -> Self {
        self.config.person_tie_break = tie_break;
        self
    }

    /// Set the label of the all-positions fallback group
    #[must_use]
    pub fn all_positions_label(mut self, label: impl Into<String>) -> Self {
        self.config.all_positions_label = label.into();
        self
    }

    /// Set the default group ordering
    #[must_use]
    pub const fn group_ordering(mut self, ordering: GroupOrdering) -> Self {
        self.config.group_ordering = ordering;
        self
    }

    /// Build the configuration
    #[must_use]
    pub fn build(self) -> ComparisonConfig {
        self.config
    }
}
