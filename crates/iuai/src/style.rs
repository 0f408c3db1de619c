//! Style application
//!
//! Applies a property map onto a [`StyleDeclaration`], either an element's
//! inline style or a stylesheet rule's style.

use iuai_css::properties::field_property;
use iuai_css::{IMPORTANT, StyleDeclaration};

use crate::{AttrMap, Issue, Value};

/// Marker that raises a value to `important` priority
pub const IMPORTANT_MARKER: &str = "!important";

/// Apply every property in `properties`; failures are returned and the
/// remaining properties still apply.
pub fn apply_style(style: &mut StyleDeclaration, properties: &AttrMap) -> Vec<Issue> {
    let mut issues = Vec::new();
    for (name, value) in properties.iter() {
        let (value, priority) = split_priority(style_value(value));

        let result = if priority.is_empty() && style.has_field(name) {
            style.set_field(name, &value)
        } else {
            let property = field_property(name).unwrap_or_else(|| name.to_string());
            style.set_property(&property, &value, priority)
        };

        if let Err(e) = result {
            tracing::warn!("Skipping style property {}: {}", name, e);
            issues.push(Issue::StyleProperty {
                name: name.to_string(),
                source: e,
            });
        }
    }
    issues
}

/// Style value text; `null` clears the property
pub(crate) fn style_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        other => other.to_display_string(),
    }
}

/// Strip the first `!important` marker
fn split_priority(value: String) -> (String, &'static str) {
    match value.find(IMPORTANT_MARKER) {
        Some(at) => {
            let mut stripped = value;
            stripped.replace_range(at..at + IMPORTANT_MARKER.len(), "");
            (stripped, IMPORTANT)
        }
        None => (value, ""),
    }
}
