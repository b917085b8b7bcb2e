//! Fixture loading errors.

use thiserror::Error;

/// Errors that can occur while loading a page fixture.
#[derive(Debug, Error)]
pub enum LoadError {
    /// IO error while reading the fixture file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The fixture is not valid page JSON.
    #[error("Invalid page fixture: {0}")]
    Parse(#[from] serde_json::Error),
}
