//! iuai DOM - Document Object Model
//!
//! Arena-based DOM tree: elements, text, fragments, attributes, reflected
//! properties, inline style, selector queries and event listeners.

mod attributes;
mod document;
mod events;
mod node;
pub mod properties;
pub mod selector;
mod tree;

pub use attributes::AttributeList;
pub use document::Document;
pub use events::{Event, EventHandler, ListenerId};
pub use node::{ElementData, Node, NodeData};
pub use properties::{PropValue, PropertyKind};
pub use selector::SelectorList;
pub use tree::{Children, DomTree};

/// Node identifier (index into arena)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    /// Root (document) node ID
    pub const ROOT: NodeId = NodeId(0);
    /// Sentinel for "no node"
    pub const NONE: NodeId = NodeId(u32::MAX);

    #[inline]
    pub fn is_valid(self) -> bool {
        self != Self::NONE
    }

    /// Convert the sentinel into `None`
    #[inline]
    pub fn to_option(self) -> Option<NodeId> {
        self.is_valid().then_some(self)
    }

    /// Arena index
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Result type for DOM operations
pub type DomResult<T> = Result<T, DomError>;

/// DOM operation errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomError {
    #[error("Node not found")]
    NotFound,

    #[error("Hierarchy request error: {0}")]
    HierarchyRequest(&'static str),

    #[error("Invalid node type: expected {0}")]
    InvalidNodeType(&'static str),

    #[error("Invalid character in name `{0}`")]
    InvalidCharacter(String),

    #[error("Invalid selector `{selector}`: {message}")]
    Syntax { selector: String, message: String },

    #[error(transparent)]
    Css(#[from] iuai_css::CssError),
}
