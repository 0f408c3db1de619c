//! CSS Property Names
//!
//! Which property names a style declaration accepts, plus the camelCase
//! field spelling scripts use for them (`backgroundColor` for
//! `background-color`). lightningcss decides what counts as a property.

use lightningcss::properties::PropertyId;

/// Standard properties lightningcss keeps as raw token lists rather than
/// typed values. They are still real properties and must be accepted.
pub const UNTYPED_PROPERTIES: &[&str] = &[
    // Generated content & lists
    "content", "quotes", "counter-reset", "counter-increment", "counter-set",

    // Layout
    "float", "clear", "vertical-align", "table-layout", "border-collapse",
    "border-spacing", "caption-side", "empty-cells", "aspect-ratio", "contain",
    "content-visibility", "isolation", "object-fit", "object-position",

    // Multi-column & fragmentation
    "columns", "column-count", "column-width", "column-rule", "column-rule-color",
    "column-rule-style", "column-rule-width", "column-span", "column-fill",
    "break-before", "break-after", "break-inside", "orphans", "widows",
    "page-break-before", "page-break-after", "page-break-inside",

    // Text & fonts
    "writing-mode", "text-orientation", "text-underline-offset",
    "text-underline-position", "text-wrap", "font-feature-settings",
    "font-variation-settings", "font-kerning", "font-optical-sizing",
    "hyphenate-character", "line-clamp",

    // Interaction & scrolling
    "pointer-events", "touch-action", "scroll-behavior", "scroll-margin",
    "scroll-padding", "scroll-snap-type", "scroll-snap-align",
    "overscroll-behavior", "overflow-anchor", "will-change",

    // Rendering
    "mix-blend-mode", "background-blend-mode", "image-rendering", "shape-outside",
];

/// Check whether a lowercase name is a property the engine recognizes
pub fn is_known(name: &str) -> bool {
    !matches!(PropertyId::from(name), PropertyId::Custom(_)) || UNTYPED_PROPERTIES.contains(&name)
}

/// Check for a custom property name (`--name`)
#[inline]
pub fn is_custom(name: &str) -> bool {
    name.starts_with("--")
}

/// Convert a camelCase field name to kebab-case.
///
/// Names that already contain a hyphen (custom properties, kebab names)
/// are returned unchanged.
pub fn kebab_case(name: &str) -> String {
    if name.contains('-') {
        return name.to_string();
    }
    let mut result = String::with_capacity(name.len() + 4);
    for c in name.chars() {
        if c.is_ascii_uppercase() {
            result.push('-');
            result.push(c.to_ascii_lowercase());
        } else {
            result.push(c);
        }
    }
    result
}

/// Convert a kebab-case property name to its camelCase field name
pub fn camel_case(name: &str) -> String {
    if name == "float" {
        return "cssFloat".to_string();
    }
    let mut result = String::with_capacity(name.len());
    let mut upper_next = false;
    for c in name.chars() {
        if c == '-' {
            upper_next = true;
        } else if upper_next {
            result.push(c.to_ascii_uppercase());
            upper_next = false;
        } else {
            result.push(c);
        }
    }
    result
}

/// Resolve a declaration field (`backgroundColor`, `background-color`,
/// `cssFloat`) to the property it stands for.
///
/// Returns `None` for custom properties and unknown names: those are not
/// fields and must go through `set_property`.
pub fn field_property(field: &str) -> Option<String> {
    if field == "cssFloat" {
        return Some("float".to_string());
    }
    if is_custom(field) {
        return None;
    }
    let name = kebab_case(field);
    is_known(&name).then_some(name)
}
