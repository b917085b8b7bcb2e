//! Instruction execution errors.

use thiserror::Error;

use super::DocumentError;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExecutionError {
    #[error("Invalid selector '{selector}': {message}")]
    SelectorResolution { selector: String, message: String },

    #[error("No text elements found to modify font size")]
    ZeroElementsForSizeAdjustment { selector: String },

    #[error("{0}")]
    TreeAccess(String),

    #[error("Instruction cannot be executed: {0}")]
    NotExecutable(String),
}

impl From<DocumentError> for ExecutionError {
    fn from(err: DocumentError) -> Self {
        match err {
            DocumentError::InvalidSelector { selector, message } => {
                ExecutionError::SelectorResolution { selector, message }
            }
            other => ExecutionError::TreeAccess(other.to_string()),
        }
    }
}
