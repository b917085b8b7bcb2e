//! Command shell: turns raw user text into a status line.

use std::fmt;

use thiserror::Error;
use tracing::{debug, info};

use pagetweak_classifier::Classifier;
use pagetweak_protocols::Outcome;

use crate::page::{PageError, PageHandle};

/// Commands offered to users who do not know where to start.
pub(crate) const EXAMPLE_COMMANDS: &[&str] = &[
    "change background to light blue",
    "increase font size",
    "decrease text size",
    "set font size to 18",
    "change text color to dark gray",
    "hide images",
    "show images",
    "increase line height",
    "high contrast",
    "dark mode",
    "light mode",
    "reset page",
];

const RESET_COMMAND: &str = "reset page";

#[derive(Debug, Error)]
pub(crate) enum ShellError {
    #[error("Please enter a command.")]
    EmptyInput,

    #[error(
        "Command not recognized. Try something like \"change background to blue\" or \"increase font size\""
    )]
    NotRecognized,

    #[error("Error during page modification: {0}")]
    Modification(String),

    #[error("Error accessing current page: {0}")]
    PageAccess(#[from] PageError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum StatusKind {
    Success,
    Error,
}

/// What the user sees after a submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct StatusMessage {
    pub kind: StatusKind,
    pub text: String,
    /// Executor message behind a success, for verbose output.
    pub detail: Option<String>,
}

impl StatusMessage {
    fn success(detail: String) -> Self {
        Self {
            kind: StatusKind::Success,
            text: "Changes applied successfully!".to_string(),
            detail: Some(detail),
        }
    }

    fn error(err: ShellError) -> Self {
        Self {
            kind: StatusKind::Error,
            text: err.to_string(),
            detail: None,
        }
    }

    pub fn is_success(&self) -> bool {
        self.kind == StatusKind::Success
    }
}

impl fmt::Display for StatusMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            StatusKind::Success => write!(f, "[ok] {}", self.text),
            StatusKind::Error => write!(f, "[error] {}", self.text),
        }
    }
}

/// Classifies commands and forwards them to the page host.
///
/// Submissions are awaited one at a time, so at most one instruction is in
/// flight.
pub(crate) struct Shell {
    classifier: Classifier,
    page: PageHandle,
}

impl Shell {
    pub fn new(classifier: Classifier, page: PageHandle) -> Self {
        Self { classifier, page }
    }

    pub fn page(&self) -> &PageHandle {
        &self.page
    }

    pub async fn submit(&mut self, raw: &str) -> StatusMessage {
        match self.try_submit(raw).await {
            Ok(detail) => StatusMessage::success(detail),
            Err(err) => {
                debug!(error = %err, "Submission failed");
                StatusMessage::error(err)
            }
        }
    }

    /// Put the page back the way it loaded.
    pub async fn reset(&mut self) -> StatusMessage {
        self.submit(RESET_COMMAND).await
    }

    async fn try_submit(&mut self, raw: &str) -> Result<String, ShellError> {
        let command = raw.trim();
        if command.is_empty() {
            return Err(ShellError::EmptyInput);
        }

        let instruction = self.classifier.classify(command);
        if !instruction.is_executable() {
            return Err(ShellError::NotRecognized);
        }
        info!(command, %instruction, "Submitting instruction");

        match self.page.execute(instruction).await? {
            Outcome::Success { message, .. } => Ok(message),
            Outcome::Failure { reason } => Err(ShellError::Modification(reason)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page;
    use pagetweak_classifier::classify;
    use pagetweak_document_memory::{Document, ElementSpec, PageSpec};
    use pagetweak_executor::{DisplayMode, Executor};

    fn shell_for(body: Option<ElementSpec>) -> Shell {
        let doc = Document::from_spec(PageSpec {
            title: "test".to_string(),
            body,
        });
        let (handle, _task) = page::spawn(doc, Executor::default());
        Shell::new(Classifier::default(), handle)
    }

    fn shell() -> Shell {
        shell_for(Some(
            ElementSpec::new("body")
                .with_style("font-size", "16px")
                .with_child(ElementSpec::new("p")),
        ))
    }

    #[tokio::test]
    async fn test_success_message() {
        let mut shell = shell();
        let status = shell.submit("change background to light blue").await;
        assert!(status.is_success());
        assert_eq!(status.text, "Changes applied successfully!");
        assert_eq!(status.detail.as_deref(), Some("Applied style to 1 elements"));
    }

    #[tokio::test]
    async fn test_empty_input_is_rejected() {
        let mut shell = shell();
        for raw in ["", "   ", "\n\t"] {
            let status = shell.submit(raw).await;
            assert_eq!(status.kind, StatusKind::Error);
            assert_eq!(status.text, "Please enter a command.");
        }
    }

    #[tokio::test]
    async fn test_unrecognized_command() {
        let mut shell = shell();
        let status = shell.submit("make it pop").await;
        assert_eq!(status.kind, StatusKind::Error);
        assert!(status.text.starts_with("Command not recognized."));
        assert!(status.text.contains("\"increase font size\""));
    }

    #[tokio::test]
    async fn test_failure_is_wrapped() {
        let mut shell = shell_for(Some(ElementSpec::new("body")));
        let status = shell.submit("increase font size").await;
        assert_eq!(status.kind, StatusKind::Error);
        assert_eq!(
            status.text,
            "Error during page modification: No text elements found to modify font size"
        );
    }

    #[tokio::test]
    async fn test_reset_restores_light_mode() {
        let mut shell = shell();
        assert!(shell.submit("dark mode").await.is_success());
        assert_eq!(shell.page().snapshot().await.unwrap().mode, DisplayMode::Dark);

        let status = shell.reset().await;
        assert_eq!(status.detail.as_deref(), Some("Page reloaded"));

        let snapshot = shell.page().snapshot().await.unwrap();
        assert_eq!(snapshot.mode, DisplayMode::Light);
        assert!(snapshot.page.style_blocks.is_empty());
        assert_eq!(snapshot.page.reload_count, 1);
    }

    #[tokio::test]
    async fn test_page_access_error() {
        let doc = Document::from_spec(PageSpec::new(ElementSpec::new("body")));
        let (handle, task) = page::spawn(doc, Executor::default());
        task.abort();
        let _ = task.await;

        let mut shell = Shell::new(Classifier::default(), handle);
        let status = shell.submit("dark mode").await;
        assert_eq!(status.kind, StatusKind::Error);
        assert!(status.text.starts_with("Error accessing current page: "));
    }

    #[test]
    fn test_examples_all_classify() {
        for command in EXAMPLE_COMMANDS {
            assert!(classify(command).is_executable(), "{command} did not classify");
        }
    }

    #[test]
    fn test_status_display() {
        let status = StatusMessage::error(ShellError::EmptyInput);
        assert_eq!(status.to_string(), "[error] Please enter a command.");
    }
}
