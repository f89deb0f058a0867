//! Error types for sequencing and allocation.

use crate::validation::{ValidationError, ValidationErrorKind};

/// Errors raised by the sequencer and the partitioners.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ScheduleError {
    /// Malformed input, detected before any computation starts.
    #[error("invalid argument ({kind:?}): {message}")]
    InvalidArgument {
        kind: ValidationErrorKind,
        message: String,
    },

    /// Closed-form and recurrence completion times disagree for the same
    /// sequence. Always an internal defect.
    #[error("consistency fault: closed-form objective {closed_form} != recurrence objective {recurrence}")]
    ConsistencyFault { closed_form: i64, recurrence: i64 },

    /// The exhaustive and DP partitioners reported different objectives.
    #[error("solver mismatch: exhaustive objective {exhaustive} != DP objective {dp}")]
    SolverMismatch { exhaustive: i64, dp: i64 },
}

impl ScheduleError {
    /// Builds an [`ScheduleError::InvalidArgument`].
    pub fn invalid(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            kind,
            message: message.into(),
        }
    }
}

impl From<ValidationError> for ScheduleError {
    fn from(e: ValidationError) -> Self {
        Self::InvalidArgument {
            kind: e.kind,
            message: e.message,
        }
    }
}
