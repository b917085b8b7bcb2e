//! Execution outcome types.

use serde::{Deserialize, Serialize};

/// Result of executing one instruction against a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome {
    /// The instruction ran; `affected_count` elements accepted the mutation.
    Success {
        affected_count: usize,
        message: String,
    },

    /// The instruction could not be carried out.
    Failure { reason: String },
}

impl Outcome {
    /// Create a successful outcome.
    pub fn success(affected_count: usize, message: impl Into<String>) -> Self {
        Self::Success {
            affected_count,
            message: message.into(),
        }
    }

    /// Create a failed outcome.
    pub fn failure(reason: impl Into<String>) -> Self {
        Self::Failure {
            reason: reason.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Number of affected elements; `None` for failures.
    pub fn affected_count(&self) -> Option<usize> {
        match self {
            Self::Success { affected_count, .. } => Some(*affected_count),
            Self::Failure { .. } => None,
        }
    }

    /// Success message or failure reason.
    pub fn text(&self) -> &str {
        match self {
            Self::Success { message, .. } => message,
            Self::Failure { reason } => reason,
        }
    }
}
