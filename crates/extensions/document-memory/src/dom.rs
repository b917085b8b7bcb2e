//! Element arena and the `DocumentTree` implementation.

use std::collections::BTreeMap;
use std::path::Path;

use tracing::debug;

use pagetweak_protocols::{DocumentError, DocumentTree, ElementId, StyleBlock};

use crate::computed::{format_px, initial_value, resolve_font_size, INHERITED};
use crate::error::LoadError;
use crate::fixture::{ElementSpec, PageSpec, PageState};
use crate::selector::{self, Combinator, ComplexSelector};

const HTML: usize = 0;
const HEAD: usize = 1;

#[derive(Debug, Clone)]
struct Node {
    tag: String,
    attributes: BTreeMap<String, String>,
    styles: BTreeMap<String, String>,
    inline: BTreeMap<String, String>,
    locked: bool,
    parent: Option<usize>,
    children: Vec<usize>,
}

impl Node {
    fn new(tag: &str, parent: Option<usize>) -> Self {
        Self {
            tag: tag.to_ascii_lowercase(),
            attributes: BTreeMap::new(),
            styles: BTreeMap::new(),
            inline: BTreeMap::new(),
            locked: false,
            parent,
            children: Vec::new(),
        }
    }

    fn declared(&self, property: &str) -> Option<&str> {
        self.inline
            .get(property)
            .or_else(|| self.styles.get(property))
            .map(|v| v.trim())
    }
}

/// A page held in memory.
///
/// The arena is `html > head, body > ...`; nodes are stored in document
/// order, so arena index order is query order.
#[derive(Debug, Clone)]
pub struct Document {
    title: String,
    nodes: Vec<Node>,
    body: Option<usize>,
    style_blocks: Vec<StyleBlock>,
    pristine: PageSpec,
    reload_count: u32,
}

impl Document {
    /// Build a document from a page description.
    ///
    /// The root of `page.body` always becomes a `<body>` element.
    pub fn from_spec(page: PageSpec) -> Self {
        let mut doc = Self {
            title: page.title.clone(),
            nodes: vec![Node::new("html", None), Node::new("head", Some(HTML))],
            body: None,
            style_blocks: Vec::new(),
            pristine: page,
            reload_count: 0,
        };
        doc.nodes[HTML].children.push(HEAD);

        if let Some(body) = doc.pristine.body.clone() {
            let index = doc.push_tree(&body, HTML);
            doc.nodes[index].tag = "body".to_string();
            doc.body = Some(index);
        }

        debug!(title = %doc.title, elements = doc.nodes.len(), "Document built");
        doc
    }

    /// Parse a JSON page fixture.
    pub fn from_json(json: &str) -> Result<Self, LoadError> {
        let page: PageSpec = serde_json::from_str(json)?;
        Ok(Self::from_spec(page))
    }

    /// Load a JSON page fixture from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_json(&content)
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn reload_count(&self) -> u32 {
        self.reload_count
    }

    /// Export the live page: body tree with current inline styles, blocks.
    pub fn state(&self) -> PageState {
        PageState {
            title: self.title.clone(),
            body: self.body.map(|index| self.export(index)),
            style_blocks: self.style_blocks.clone(),
            reload_count: self.reload_count,
        }
    }

    /// First element whose `id` attribute equals `id`.
    pub fn find_by_id(&self, id: &str) -> Option<ElementId> {
        self.nodes
            .iter()
            .position(|node| node.attributes.get("id").is_some_and(|v| v == id))
            .map(ElementId)
    }

    pub fn tag(&self, element: ElementId) -> Option<&str> {
        self.nodes.get(element.0).map(|node| node.tag.as_str())
    }

    /// Inline declarations as `style` attribute text, e.g. `color: red; font-size: 12px`.
    pub fn inline_style_text(&self, element: ElementId) -> Option<String> {
        let node = self.nodes.get(element.0)?;
        let text = node
            .inline
            .iter()
            .map(|(property, value)| format!("{}: {}", property, value))
            .collect::<Vec<_>>()
            .join("; ");
        Some(text)
    }

    fn push_tree(&mut self, spec: &ElementSpec, parent: usize) -> usize {
        let index = self.nodes.len();
        let mut node = Node::new(&spec.tag, Some(parent));
        node.attributes = lowercase_keys(&spec.attributes);
        node.styles = lowercase_keys(&spec.styles);
        node.inline = lowercase_keys(&spec.inline);
        node.locked = spec.locked;
        self.nodes.push(node);
        self.nodes[parent].children.push(index);

        for child in &spec.children {
            self.push_tree(child, index);
        }
        index
    }

    fn export(&self, index: usize) -> ElementSpec {
        let node = &self.nodes[index];
        ElementSpec {
            tag: node.tag.clone(),
            attributes: node.attributes.clone(),
            styles: node.styles.clone(),
            inline: node.inline.clone(),
            locked: node.locked,
            children: node.children.iter().map(|&c| self.export(c)).collect(),
        }
    }

    fn node(&self, element: ElementId) -> Result<&Node, DocumentError> {
        self.nodes
            .get(element.0)
            .ok_or(DocumentError::UnknownElement(element))
    }

    fn ancestors(&self, index: usize) -> impl Iterator<Item = usize> + '_ {
        std::iter::successors(self.nodes[index].parent, move |&p| self.nodes[p].parent)
    }

    /// Right-to-left match of `complex` ending at compound `position`.
    fn matches_at(&self, index: usize, complex: &ComplexSelector, position: usize) -> bool {
        let node = &self.nodes[index];
        if !complex.compounds[position].matches(&node.tag, &node.attributes) {
            return false;
        }
        if position == 0 {
            return true;
        }

        match complex.combinators[position - 1] {
            Combinator::Child => node
                .parent
                .is_some_and(|parent| self.matches_at(parent, complex, position - 1)),
            Combinator::Descendant => self
                .ancestors(index)
                .any(|ancestor| self.matches_at(ancestor, complex, position - 1)),
        }
    }

    fn computed_value(&self, index: usize, property: &str) -> Option<String> {
        let node = &self.nodes[index];
        match node.declared(property) {
            Some(value) if value.eq_ignore_ascii_case("inherit") => {
                self.parent_value(index, property)
            }
            Some(value) if property == "font-size" => {
                // Unresolvable sizes (keywords, calc) are reported as declared.
                let resolved = resolve_font_size(value, self.parent_font_px(index));
                Some(resolved.map(format_px).unwrap_or_else(|| value.to_string()))
            }
            Some(value) => Some(value.to_string()),
            None if INHERITED.contains(&property) => self.parent_value(index, property),
            None => initial_value(property, &node.tag),
        }
    }

    fn parent_value(&self, index: usize, property: &str) -> Option<String> {
        match self.nodes[index].parent {
            Some(parent) => self.computed_value(parent, property),
            None => initial_value(property, &self.nodes[index].tag),
        }
    }

    fn parent_font_px(&self, index: usize) -> Option<f64> {
        self.nodes[index]
            .parent
            .and_then(|parent| self.computed_value(parent, "font-size"))
            .and_then(|value| resolve_font_size(&value, None))
    }
}

impl DocumentTree for Document {
    fn query_selector_all(&self, selector: &str) -> Result<Vec<ElementId>, DocumentError> {
        let list = selector::parse(selector)?;
        let matched: Vec<ElementId> = (0..self.nodes.len())
            .filter(|&index| {
                list.selectors
                    .iter()
                    .any(|complex| self.matches_at(index, complex, complex.compounds.len() - 1))
            })
            .map(ElementId)
            .collect();
        debug!(selector, matched = matched.len(), "Selector resolved");
        Ok(matched)
    }

    fn body(&self) -> Result<ElementId, DocumentError> {
        self.body.map(ElementId).ok_or(DocumentError::MissingBody)
    }

    fn computed_style(
        &self,
        element: ElementId,
        property: &str,
    ) -> Result<Option<String>, DocumentError> {
        self.node(element)?;
        Ok(self.computed_value(element.0, &property.to_ascii_lowercase()))
    }

    fn inline_style(
        &self,
        element: ElementId,
        property: &str,
    ) -> Result<Option<String>, DocumentError> {
        let node = self.node(element)?;
        Ok(node.inline.get(&property.to_ascii_lowercase()).cloned())
    }

    fn set_inline_style(
        &mut self,
        element: ElementId,
        property: &str,
        value: &str,
    ) -> Result<(), DocumentError> {
        let node = self
            .nodes
            .get_mut(element.0)
            .ok_or(DocumentError::UnknownElement(element))?;

        let rejected = |message: &str| DocumentError::StyleRejected {
            element,
            property: property.to_string(),
            message: message.to_string(),
        };
        if node.locked {
            return Err(rejected("element is locked"));
        }
        let property_name = property.trim().to_ascii_lowercase();
        if property_name.is_empty() {
            return Err(rejected("empty property name"));
        }

        let value = value.trim();
        if value.is_empty() {
            node.inline.remove(&property_name);
        } else {
            node.inline.insert(property_name, value.to_string());
        }
        Ok(())
    }

    fn insert_style_block(&mut self, block: StyleBlock) {
        self.style_blocks.retain(|existing| existing.id != block.id);
        debug!(id = %block.id, "Style block inserted");
        self.style_blocks.push(block);
    }

    fn remove_style_block(&mut self, id: &str) -> bool {
        let before = self.style_blocks.len();
        self.style_blocks.retain(|block| block.id != id);
        self.style_blocks.len() != before
    }

    fn style_block(&self, id: &str) -> Option<&StyleBlock> {
        self.style_blocks.iter().find(|block| block.id == id)
    }

    fn style_block_ids(&self) -> Vec<String> {
        self.style_blocks.iter().map(|block| block.id.clone()).collect()
    }

    fn reload(&mut self) -> Result<(), DocumentError> {
        let reload_count = self.reload_count + 1;
        *self = Self::from_spec(self.pristine.clone());
        self.reload_count = reload_count;
        debug!(reload_count, "Document reloaded");
        Ok(())
    }
}

fn lowercase_keys(map: &BTreeMap<String, String>) -> BTreeMap<String, String> {
    map.iter()
        .map(|(key, value)| (key.to_ascii_lowercase(), value.clone()))
        .collect()
}

#[cfg(test)]
#[path = "dom_tests.rs"]
mod tests;
