//! Result of one comparison run

use serde::Serialize;

use super::presentation::ComparisonPayload;

/// Why a comparison has nothing to plot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EmptyReason {
    /// No job title (or person) was selected
    NothingSelected,
    /// Selections were made but no record matched them
    NoMatchingData,
    /// The person was not found and the requested scope holds no records
    NoDataInScope,
}

/// User-facing "nothing to show" state
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmptyState {
    /// Why nothing is shown
    pub reason: EmptyReason,
    /// Message to display instead of a chart
    pub message: String,
}

impl EmptyState {
    /// Create an empty state
    #[must_use]
    pub fn new(reason: EmptyReason, message: impl Into<String>) -> Self {
        Self {
            reason,
            message: message.into(),
        }
    }
}

/// Outcome of a comparison run; every run builds a fresh one
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum ComparisonOutcome {
    /// Groups were found and a payload assembled
    Ready(ComparisonPayload),
    /// Nothing to plot
    Empty(EmptyState),
}

impl ComparisonOutcome {
    /// Shorthand for an empty outcome
    #[must_use]
    pub fn empty(reason: EmptyReason, message: impl Into<String>) -> Self {
        Self::Empty(EmptyState::new(reason, message))
    }

    /// The payload, if one was assembled
    #[must_use]
    pub const fn payload(&self) -> Option<&ComparisonPayload> {
        match self {
            Self::Ready(payload) => Some(payload),
            Self::Empty(_) => None,
        }
    }

    /// The empty state, if nothing was found
    #[must_use]
    pub const fn empty_state(&self) -> Option<&EmptyState> {
        match self {
            Self::Ready(_) => None,
            Self::Empty(state) => Some(state),
        }
    }

    /// Whether nothing is to be plotted
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty(_))
    }
}
