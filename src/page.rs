//! Page host: owns the document and executor on a dedicated task.
//!
//! The shell talks to it only through [`PageHandle`]; every request carries a
//! oneshot reply channel and gets exactly one answer.

use serde::Serialize;
use thiserror::Error;
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tracing::{debug, info};

use pagetweak_document_memory::{Document, PageState};
use pagetweak_executor::{DisplayMode, Executor};
use pagetweak_protocols::{Instruction, Outcome};

const REQUEST_BUFFER: usize = 16;

/// Transport errors between the shell and the page host.
#[derive(Debug, Error)]
pub(crate) enum PageError {
    #[error("page host is not running")]
    Closed,

    #[error("page host dropped the request")]
    NoReply,
}

/// Live page state plus the executor's display mode.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct PageSnapshot {
    pub mode: DisplayMode,

    #[serde(flatten)]
    pub page: PageState,
}

enum PageRequest {
    Execute {
        instruction: Instruction,
        reply: oneshot::Sender<Outcome>,
    },
    Snapshot {
        reply: oneshot::Sender<PageSnapshot>,
    },
}

/// Sending side of the page host.
#[derive(Debug, Clone)]
pub(crate) struct PageHandle {
    tx: mpsc::Sender<PageRequest>,
}

impl PageHandle {
    /// Run `instruction` against the page and wait for its outcome.
    pub async fn execute(&self, instruction: Instruction) -> Result<Outcome, PageError> {
        let (reply, rx) = oneshot::channel();
        self.tx
            .send(PageRequest::Execute { instruction, reply })
            .await
            .map_err(|_| PageError::Closed)?;
        rx.await.map_err(|_| PageError::NoReply)
    }

    pub async fn snapshot(&self) -> Result<PageSnapshot, PageError> {
        let (reply, rx) = oneshot::channel();
        self.tx
            .send(PageRequest::Snapshot { reply })
            .await
            .map_err(|_| PageError::Closed)?;
        rx.await.map_err(|_| PageError::NoReply)
    }
}

/// Start the page host task.
///
/// The task ends once every handle is dropped and returns the document.
pub(crate) fn spawn(doc: Document, executor: Executor) -> (PageHandle, JoinHandle<Document>) {
    let (tx, rx) = mpsc::channel(REQUEST_BUFFER);
    let task = tokio::spawn(run(doc, executor, rx));
    (PageHandle { tx }, task)
}

async fn run(
    mut doc: Document,
    mut executor: Executor,
    mut rx: mpsc::Receiver<PageRequest>,
) -> Document {
    executor.sync_mode(&doc);
    info!(title = %doc.title(), mode = %executor.mode(), "Page host started");

    while let Some(request) = rx.recv().await {
        match request {
            PageRequest::Execute { instruction, reply } => {
                let outcome = executor.execute(&instruction, &mut doc);
                debug!(action = instruction.action(), ?outcome, "Instruction handled");
                // The shell may have given up waiting; nothing to do then.
                let _ = reply.send(outcome);
            }
            PageRequest::Snapshot { reply } => {
                let _ = reply.send(PageSnapshot {
                    mode: executor.mode(),
                    page: doc.state(),
                });
            }
        }
    }

    info!("Page host stopped");
    doc
}
