//! Document access errors.

use thiserror::Error;

use crate::document::ElementId;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DocumentError {
    #[error("Invalid selector '{selector}': {message}")]
    InvalidSelector { selector: String, message: String },

    #[error("Unknown element: {0}")]
    UnknownElement(ElementId),

    #[error("Element {element} rejected {property}: {message}")]
    StyleRejected {
        element: ElementId,
        property: String,
        message: String,
    },

    #[error("Document has no body element")]
    MissingBody,

    #[error("Document unavailable: {0}")]
    Unavailable(String),
}

impl DocumentError {
    /// Create an invalid selector error.
    pub fn invalid_selector(selector: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidSelector {
            selector: selector.into(),
            message: message.into(),
        }
    }
}
