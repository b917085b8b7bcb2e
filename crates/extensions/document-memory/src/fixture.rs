//! Serializable page descriptions.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use pagetweak_protocols::StyleBlock;

/// An element and its subtree as written in a page fixture.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementSpec {
    /// Tag name (lowercased on load).
    pub tag: String,

    /// Attributes such as `id`, `class`, `role`.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub attributes: BTreeMap<String, String>,

    /// Declarations from page stylesheets, keyed by CSS property name.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub styles: BTreeMap<String, String>,

    /// Inline declarations (`style="..."`).
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub inline: BTreeMap<String, String>,

    /// Rejects inline style writes.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub locked: bool,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<ElementSpec>,
}

impl ElementSpec {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attributes: BTreeMap::new(),
            styles: BTreeMap::new(),
            inline: BTreeMap::new(),
            locked: false,
            children: Vec::new(),
        }
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// Add a page stylesheet declaration.
    pub fn with_style(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.styles.insert(property.into(), value.into());
        self
    }

    /// Add an inline declaration.
    pub fn with_inline(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.inline.insert(property.into(), value.into());
        self
    }

    pub fn locked(mut self) -> Self {
        self.locked = true;
        self
    }

    pub fn with_child(mut self, child: ElementSpec) -> Self {
        self.children.push(child);
        self
    }

    pub fn with_children(mut self, children: impl IntoIterator<Item = ElementSpec>) -> Self {
        self.children.extend(children);
        self
    }
}

/// A whole page fixture.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageSpec {
    #[serde(default)]
    pub title: String,

    /// The `<body>` element. Pages without one are allowed.
    #[serde(default)]
    pub body: Option<ElementSpec>,
}

impl PageSpec {
    pub fn new(body: ElementSpec) -> Self {
        Self {
            title: String::new(),
            body: Some(body),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }
}

/// Snapshot of a live document, for inspection and output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageState {
    pub title: String,

    pub body: Option<ElementSpec>,

    /// Global style blocks in head order.
    pub style_blocks: Vec<StyleBlock>,

    /// How many times the page has been reloaded.
    pub reload_count: u32,
}
