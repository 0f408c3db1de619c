//! DOM Node
//!
//! Nodes link to each other by `NodeId` rather than pointers so the whole
//! tree lives in one arena.

use iuai_css::{StyleDeclaration, StyleSheet};

use crate::events::{EventHandler, Listener};
use crate::{AttributeList, NodeId};

/// DOM Node - Core structure
#[derive(Debug)]
pub struct Node {
    /// Parent node (NONE if detached or root)
    pub parent: NodeId,
    pub first_child: NodeId,
    /// Last child (for O(1) append)
    pub last_child: NodeId,
    pub prev_sibling: NodeId,
    pub next_sibling: NodeId,
    pub data: NodeData,
}

impl Node {
    fn with_data(data: NodeData) -> Self {
        Self {
            parent: NodeId::NONE,
            first_child: NodeId::NONE,
            last_child: NodeId::NONE,
            prev_sibling: NodeId::NONE,
            next_sibling: NodeId::NONE,
            data,
        }
    }

    /// Create a new element node; `tag` must already be validated
    pub fn element(tag: &str) -> Self {
        Self::with_data(NodeData::Element(ElementData::new(tag)))
    }

    /// Create a new text node
    pub fn text(content: impl Into<String>) -> Self {
        Self::with_data(NodeData::Text(content.into()))
    }

    /// Create a document fragment node
    pub fn fragment() -> Self {
        Self::with_data(NodeData::Fragment)
    }

    /// Create a document node
    pub fn document() -> Self {
        Self::with_data(NodeData::Document)
    }

    #[inline]
    pub fn is_element(&self) -> bool {
        matches!(self.data, NodeData::Element(_))
    }

    #[inline]
    pub fn is_text(&self) -> bool {
        matches!(self.data, NodeData::Text(_))
    }

    #[inline]
    pub fn is_fragment(&self) -> bool {
        matches!(self.data, NodeData::Fragment)
    }

    /// Whether this node type may have children
    #[inline]
    pub fn is_container(&self) -> bool {
        !self.is_text()
    }

    #[inline]
    pub fn as_element(&self) -> Option<&ElementData> {
        match &self.data {
            NodeData::Element(e) => Some(e),
            _ => None,
        }
    }

    #[inline]
    pub fn as_element_mut(&mut self) -> Option<&mut ElementData> {
        match &mut self.data {
            NodeData::Element(e) => Some(e),
            _ => None,
        }
    }

    #[inline]
    pub fn as_text(&self) -> Option<&str> {
        match &self.data {
            NodeData::Text(t) => Some(t),
            _ => None,
        }
    }
}

/// Node-specific data
#[derive(Debug)]
pub enum NodeData {
    /// Document root
    Document,
    Element(ElementData),
    Text(String),
    /// Document fragment; its children move out when it is appended
    Fragment,
}

/// Element-specific data
pub struct ElementData {
    /// Lowercase tag name
    pub tag: String,
    pub attrs: AttributeList,
    /// Inline style (serialized as the `style` attribute)
    pub style: StyleDeclaration,
    /// Owned stylesheet, `<style>` elements only
    pub(crate) sheet: Option<StyleSheet>,
    pub(crate) listeners: Vec<Listener>,
    /// `on<type>` property handlers keyed by event type
    pub(crate) handlers: Vec<(String, EventHandler)>,
}

impl ElementData {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            attrs: AttributeList::new(),
            style: StyleDeclaration::new(),
            sheet: (tag == "style").then(StyleSheet::new),
            listeners: Vec::new(),
            handlers: Vec::new(),
        }
    }

    /// `id` attribute, if any
    pub fn id(&self) -> Option<&str> {
        self.attrs.get("id")
    }

    /// Whether the `class` attribute contains `class`
    pub fn has_class(&self, class: &str) -> bool {
        self.attrs
            .get("class")
            .is_some_and(|list| list.split_whitespace().any(|c| c == class))
    }
}

impl std::fmt::Debug for ElementData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ElementData")
            .field("tag", &self.tag)
            .field("attrs", &self.attrs)
            .field("style", &self.style)
            .field("sheet", &self.sheet)
            .field("listeners", &self.listeners.len())
            .field("handlers", &self.handlers.len())
            .finish()
    }
}
