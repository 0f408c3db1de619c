//! Attribute application
//!
//! `style` goes to the inline style, names the element exposes as
//! properties (`className`, `hidden`, `onclick`) are assigned directly,
//! everything else becomes an attribute.

use iuai_dom::{DomResult, DomTree, NodeId};

use crate::style::{apply_style, style_value};
use crate::{Issue, Value};

/// Apply one attribute; a failure is recorded and not propagated
pub(crate) fn apply_attribute(tree: &mut DomTree, node: NodeId, name: &str, value: &Value, issues: &mut Vec<Issue>) {
    if let Err(e) = set_attribute(tree, node, name, value, issues) {
        tracing::warn!("Skipping attribute {}: {}", name, e);
        issues.push(Issue::Attribute {
            name: name.to_string(),
            source: e,
        });
    }
}

fn set_attribute(tree: &mut DomTree, node: NodeId, name: &str, value: &Value, issues: &mut Vec<Issue>) -> DomResult<()> {
    if name == "style" {
        let style = tree.style_mut(node)?;
        match value {
            Value::Map(properties) => issues.extend(apply_style(style, properties)),
            other => style.set_css_text(&style_value(other)),
        }
        Ok(())
    } else if tree.has_property(node, name) {
        tree.set_property(node, name, value.to_prop_value())
    } else {
        tree.set_attribute(node, name, &value.to_display_string())
    }
}
