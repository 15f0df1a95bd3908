//! Error types shared by the planning core.

use thiserror::Error;

use crate::athletes::Sport;
use crate::performance::TestType;

/// Errors surfaced by plan generation, adaptation and result recording.
///
/// Every variant is a per-request failure. None of them leaves a partially
/// built plan or a half-applied log mutation behind.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoachError {
    /// Profile field missing or outside the plausible range.
    #[error("Invalid profile: {field} {reason}")]
    InvalidProfile {
        /// Offending field name
        field: &'static str,
        /// What is wrong with it
        reason: String,
    },

    /// No exercise template exists for the sport and strict mode is on.
    #[error("Unsupported sport: {0} has no exercise template")]
    UnsupportedSport(Sport),

    /// Not enough history to classify a test type.
    #[error("Insufficient data for {test_type}: {message}")]
    InsufficientData {
        /// Test type lacking history
        test_type: TestType,
        /// What is missing
        message: String,
    },

    /// No results inside a requested week span.
    #[error("Insufficient data: no results between week {from_week} and week {to_week}")]
    EmptySpan {
        /// First week of the span
        from_week: u32,
        /// Last week of the span
        to_week: u32,
    },

    /// Week numbers start at 1.
    #[error("Invalid week number: {0}")]
    InvalidWeek(u32),

    /// Test result value cannot be used.
    #[error("Invalid test result: {0}")]
    InvalidResult(String),

    /// Result submitted for a week earlier than the latest recorded one.
    #[error("Out-of-order result: week {week} submitted after week {latest}")]
    OutOfOrderResult {
        /// Submitted week
        week: u32,
        /// Latest recorded week
        latest: u32,
    },

    /// A result for this week and test type is already recorded.
    #[error("Duplicate result: {test_type} already recorded for week {week}")]
    DuplicateResult {
        /// Week of the existing result
        week: u32,
        /// Test type of the existing result
        test_type: TestType,
    },

    /// Result belongs to another athlete than the log.
    #[error("Result for athlete {found} cannot be recorded in the log of {expected}")]
    AthleteMismatch {
        /// Owner of the log
        expected: uuid::Uuid,
        /// Athlete on the submitted result
        found: uuid::Uuid,
    },
}

impl CoachError {
    /// Shorthand for an [`CoachError::InvalidProfile`] error.
    pub fn invalid_profile(field: &'static str, reason: impl Into<String>) -> Self {
        CoachError::InvalidProfile {
            field,
            reason: reason.into(),
        }
    }

    /// Whether the caller can recover without changing its input.
    ///
    /// Unsupported sports fall back to the general template and insufficient
    /// data only excludes one test type from aggregation.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            CoachError::UnsupportedSport(_) | CoachError::InsufficientData { .. }
        )
    }
}

/// Result type for planning operations.
pub type CoachResult<T> = Result<T, CoachError>;
