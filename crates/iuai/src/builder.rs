//! Element Builder
//!
//! Creates the element (or a fragment for the empty tag), applies its
//! attributes and appends children depth-first.

use iuai_dom::{DomError, DomResult, DomTree, NodeId};

use crate::attribute::apply_attribute;
use crate::{AttrMap, Issue, Value};

/// Result of `elem`
#[derive(Debug, Clone, PartialEq)]
pub enum Built {
    /// The constructed element or fragment
    Node(NodeId),
    /// A non-node value returned by a component
    Value(Value),
    /// Construction failed (the empty-string sentinel)
    Failed,
    /// A component failed and produced nothing
    Undefined,
}

impl Built {
    pub fn node(&self) -> Option<NodeId> {
        match self {
            Self::Node(node) => Some(*node),
            _ => None,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed)
    }
}

/// Built values can be passed straight back in as children.
///
/// A failed build becomes `""`, which the builder skips.
impl From<Built> for Value {
    fn from(built: Built) -> Self {
        match built {
            Built::Node(node) => Value::Node(node),
            Built::Value(value) => value,
            Built::Failed => Value::Str(String::new()),
            Built::Undefined => Value::Null,
        }
    }
}

impl From<&Built> for Value {
    fn from(built: &Built) -> Self {
        built.clone().into()
    }
}

pub(crate) fn create_elem(tree: &mut DomTree, tag: &str, attributes: &AttrMap, issues: &mut Vec<Issue>) -> DomResult<NodeId> {
    if tag.is_empty() {
        return Ok(tree.create_fragment());
    }
    let node = tree.create_element(tag)?;
    for (name, value) in attributes.iter() {
        apply_attribute(tree, node, name, value, issues);
    }
    Ok(node)
}

pub(crate) fn append_children(tree: &mut DomTree, parent: NodeId, children: &[Value], issues: &mut Vec<Issue>) {
    for child in children {
        let node = match child {
            Value::Null | Value::Bool(_) | Value::Func(_) | Value::Ref(_) => continue,
            Value::Str(text) if text.is_empty() => continue,
            Value::List(nested) => {
                append_children(tree, parent, nested, issues);
                continue;
            }
            Value::Str(_) | Value::Number(_) => Ok(tree.create_text(&child.to_display_string())),
            Value::Node(node) => Ok(*node),
            Value::Map(_) => Err(DomError::InvalidNodeType("node")),
        };
        if let Err(e) = node.and_then(|node| tree.append_child(parent, node)) {
            tracing::warn!("Skipping child of {:?}: {}", parent, e);
            issues.push(Issue::Child(e));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fragment_ignores_attributes() {
        let mut tree = DomTree::new();
        let mut issues = Vec::new();
        let node = create_elem(&mut tree, "", &AttrMap::from([("id", "x")]), &mut issues).unwrap();
        assert!(tree.is_fragment(node));
        assert!(issues.is_empty());
    }

    #[test]
    fn test_invalid_tag_fails() {
        let mut tree = DomTree::new();
        let mut issues = Vec::new();
        assert!(create_elem(&mut tree, "1nope", &AttrMap::new(), &mut issues).is_err());
    }

    #[test]
    fn test_flatten_and_skip() {
        let mut tree = DomTree::new();
        let mut issues = Vec::new();
        let div = tree.create_element("div").unwrap();
        let children = vec![
            Value::from("a"),
            Value::Null,
            Value::from(vec![Value::from(true), Value::from(vec![Value::from(1)]), Value::from("")]),
            Value::func(|_| {}),
            Value::from("b"),
        ];
        append_children(&mut tree, div, &children, &mut issues);
        assert!(issues.is_empty());
        let texts: Vec<String> = tree.child_nodes(div).into_iter().map(|n| tree.text_content(n)).collect();
        assert_eq!(texts, vec!["a", "1", "b"]);
    }

    #[test]
    fn test_bad_child_does_not_stop_siblings() {
        let mut tree = DomTree::new();
        let mut issues = Vec::new();
        let div = tree.create_element("div").unwrap();
        let children = vec![Value::from(AttrMap::new()), Value::Node(div), Value::from("ok")];
        append_children(&mut tree, div, &children, &mut issues);
        assert_eq!(issues.len(), 2);
        assert_eq!(issues[0], Issue::Child(DomError::InvalidNodeType("node")));
        assert_eq!(tree.text_content(div), "ok");
    }

    #[test]
    fn test_failed_build_is_skipped_child() {
        assert_eq!(Value::from(Built::Failed), Value::from(""));
        assert_eq!(Value::from(Built::Undefined), Value::Null);
    }
}
