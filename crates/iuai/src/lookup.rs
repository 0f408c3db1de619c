//! Lookup helpers
//!
//! Each helper finds a candidate element and runs it through the same
//! existence and tag check. Only elements connected to the document are
//! found.

use iuai_dom::NodeId;

use crate::{LookupError, Page, TagMismatch};

impl Page {
    /// Element with the given id
    pub fn get_elem(&self, id: &str, tag: Option<&str>) -> Result<NodeId, LookupError> {
        self.assert_element(self.document.get_element_by_id(id), tag)
    }

    /// First element matching `selector`
    pub fn query_elem(&self, selector: &str, tag: Option<&str>) -> Result<NodeId, LookupError> {
        let found = self.document.query_selector(selector)?;
        self.assert_element(found, tag)
    }

    /// First element child of the element with the given id
    pub fn get_child(&self, id: &str, tag: Option<&str>) -> Result<NodeId, LookupError> {
        let found = self
            .document
            .get_element_by_id(id)
            .and_then(|node| self.document.tree.first_element_child(node));
        self.assert_element(found, tag)
    }

    /// Parent element of the element with the given id
    pub fn get_parent(&self, id: &str, tag: Option<&str>) -> Result<NodeId, LookupError> {
        let found = self
            .document
            .get_element_by_id(id)
            .and_then(|node| self.document.tree.parent_element(node));
        self.assert_element(found, tag)
    }

    fn assert_element(&self, node: Option<NodeId>, tag: Option<&str>) -> Result<NodeId, LookupError> {
        let node = node.ok_or(LookupError::NotFound)?;
        let Some(expected) = tag.filter(|t| !t.is_empty()) else {
            return Ok(node);
        };
        let found = self.document.tree.tag_name(node).unwrap_or_default();
        if found.eq_ignore_ascii_case(expected) {
            return Ok(node);
        }
        match self.config.tag_mismatch {
            TagMismatch::Error => Err(LookupError::TagMismatch {
                expected: expected.to_string(),
                found: found.to_string(),
            }),
            TagMismatch::Warn => {
                tracing::warn!("Expected <{}> but found <{}>", expected, found);
                Ok(node)
            }
        }
    }
}
