//! Live document abstraction the executor mutates.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::DocumentError;

/// Opaque handle to an element of a document.
///
/// Handles are only meaningful for the document that produced them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ElementId(pub usize);

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A named global style rule set living in the document head.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleBlock {
    /// Stable identifier; at most one block per id exists in a document.
    pub id: String,

    /// Stylesheet text.
    pub css: String,
}

impl StyleBlock {
    pub fn new(id: impl Into<String>, css: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            css: css.into(),
        }
    }
}

/// Capabilities the executor needs from a live document.
///
/// All calls are synchronous. Property names are CSS names (`font-size`).
pub trait DocumentTree {
    /// All elements matching `selector`, in document order.
    fn query_selector_all(&self, selector: &str) -> Result<Vec<ElementId>, DocumentError>;

    /// The root content element (`<body>`).
    fn body(&self) -> Result<ElementId, DocumentError>;

    /// Resolved value of `property` after cascading.
    fn computed_style(
        &self,
        element: ElementId,
        property: &str,
    ) -> Result<Option<String>, DocumentError>;

    /// The element's own inline declaration for `property`.
    fn inline_style(&self, element: ElementId, property: &str)
        -> Result<Option<String>, DocumentError>;

    /// Write an inline declaration. Elements may reject the write.
    fn set_inline_style(
        &mut self,
        element: ElementId,
        property: &str,
        value: &str,
    ) -> Result<(), DocumentError>;

    /// Insert a style block, replacing any block with the same id.
    fn insert_style_block(&mut self, block: StyleBlock);

    /// Remove the block with `id`. Returns whether one existed.
    fn remove_style_block(&mut self, id: &str) -> bool;

    fn style_block(&self, id: &str) -> Option<&StyleBlock>;

    /// Ids of every style block, in insertion order.
    fn style_block_ids(&self) -> Vec<String>;

    /// Reload the document, discarding every mutation.
    fn reload(&mut self) -> Result<(), DocumentError>;
}
