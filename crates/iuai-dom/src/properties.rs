//! Reflected Element Properties
//!
//! The settable properties an element exposes in addition to its
//! attributes: `className` reflects `class`, `hidden` toggles an attribute,
//! `textContent` replaces children, `onclick` installs a handler.

use crate::{DomError, DomResult, DomTree, EventHandler, NodeId};

/// How a property maps onto the element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyKind {
    /// String property reflecting an attribute
    Reflect(&'static str),
    /// Boolean property reflecting attribute presence
    Flag(&'static str),
    /// Integer property reflecting an attribute
    Integer(&'static str),
    /// `textContent` / `innerText`
    TextContent,
    /// `on<type>` event handler property; holds the event type
    Handler(&'static str),
}

/// Value assigned to or read from a property
#[derive(Clone)]
pub enum PropValue {
    Null,
    Bool(bool),
    Number(f64),
    Str(String),
    Handler(EventHandler),
}

impl PropValue {
    /// String conversion with script semantics (`null`, `true`, `1.5`)
    pub fn to_display_string(&self) -> String {
        match self {
            Self::Null => "null".to_string(),
            Self::Bool(b) => b.to_string(),
            Self::Number(n) => format_number(*n),
            Self::Str(s) => s.clone(),
            Self::Handler(_) => "function".to_string(),
        }
    }

    /// Truthiness with script semantics
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Null => false,
            Self::Bool(b) => *b,
            Self::Number(n) => *n != 0.0 && !n.is_nan(),
            Self::Str(s) => !s.is_empty(),
            Self::Handler(_) => true,
        }
    }

    fn to_integer(&self) -> i64 {
        let n = match self {
            Self::Null | Self::Handler(_) => 0.0,
            Self::Bool(b) => f64::from(u8::from(*b)),
            Self::Number(n) => *n,
            Self::Str(s) if s.trim().is_empty() => 0.0,
            Self::Str(s) => s.trim().parse().unwrap_or(f64::NAN),
        };
        if n.is_finite() { n.trunc() as i64 } else { 0 }
    }
}

impl std::fmt::Debug for PropValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Null => write!(f, "Null"),
            Self::Bool(b) => f.debug_tuple("Bool").field(b).finish(),
            Self::Number(n) => f.debug_tuple("Number").field(n).finish(),
            Self::Str(s) => f.debug_tuple("Str").field(s).finish(),
            Self::Handler(_) => write!(f, "Handler(..)"),
        }
    }
}

impl PartialEq for PropValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Null, Self::Null) => true,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Number(a), Self::Number(b)) => a == b,
            (Self::Str(a), Self::Str(b)) => a == b,
            (Self::Handler(a), Self::Handler(b)) => std::rc::Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

/// Format a number the way scripts stringify it (`1`, `1.5`, `NaN`)
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n.is_infinite() {
        if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string()
    } else if n == 0.0 {
        "0".to_string()
    } else if n.fract() == 0.0 && n.abs() < 1e21 {
        format!("{n:.0}")
    } else {
        format!("{}", n)
    }
}

const EVENT_TYPES: &[&str] = &[
    "click", "dblclick", "mousedown", "mouseup", "mouseover", "mouseout",
    "mousemove", "mouseenter", "mouseleave", "keydown", "keyup", "keypress",
    "input", "change", "submit", "reset", "focus", "blur", "load", "error",
    "scroll", "resize", "wheel", "contextmenu", "pointerdown", "pointerup",
    "touchstart", "touchend",
];

/// Look up the property `name` on an element with tag `tag`
pub fn property_kind(tag: &str, name: &str) -> Option<PropertyKind> {
    use PropertyKind::*;

    if let Some(kind) = name.strip_prefix("on") {
        return EVENT_TYPES.iter().find(|&&t| t == kind).map(|&t| Handler(t));
    }

    let global = match name {
        "id" => Some(Reflect("id")),
        "className" => Some(Reflect("class")),
        "title" => Some(Reflect("title")),
        "lang" => Some(Reflect("lang")),
        "dir" => Some(Reflect("dir")),
        "slot" => Some(Reflect("slot")),
        "role" => Some(Reflect("role")),
        "accessKey" => Some(Reflect("accesskey")),
        "ariaLabel" => Some(Reflect("aria-label")),
        "ariaHidden" => Some(Reflect("aria-hidden")),
        "ariaLive" => Some(Reflect("aria-live")),
        "hidden" => Some(Flag("hidden")),
        "inert" => Some(Flag("inert")),
        "tabIndex" => Some(Integer("tabindex")),
        "textContent" | "innerText" => Some(TextContent),
        _ => None,
    };
    if global.is_some() {
        return global;
    }

    let is = |tags: &[&str]| tags.contains(&tag);
    match name {
        "href" if is(&["a", "area", "link", "base"]) => Some(Reflect("href")),
        "rel" if is(&["a", "area", "link"]) => Some(Reflect("rel")),
        "target" if is(&["a", "area", "base", "form"]) => Some(Reflect("target")),
        "download" if is(&["a", "area"]) => Some(Reflect("download")),
        "src" if is(&["img", "script", "iframe", "video", "audio", "source", "input", "embed", "track"]) => {
            Some(Reflect("src"))
        }
        "alt" if is(&["img", "area", "input"]) => Some(Reflect("alt")),
        "name" if is(&["input", "button", "select", "textarea", "form", "iframe", "output", "fieldset", "meta", "map"]) => {
            Some(Reflect("name"))
        }
        "type" if is(&["input", "button", "script", "link", "source", "ol", "style", "embed", "object"]) => {
            Some(Reflect("type"))
        }
        "value" if is(&["input", "button", "option", "textarea", "select", "li", "data", "output", "param", "progress", "meter"]) => {
            Some(Reflect("value"))
        }
        "placeholder" if is(&["input", "textarea"]) => Some(Reflect("placeholder")),
        "htmlFor" if is(&["label", "output"]) => Some(Reflect("for")),
        "action" if is(&["form"]) => Some(Reflect("action")),
        "method" if is(&["form"]) => Some(Reflect("method")),
        "disabled" if is(&["input", "button", "select", "textarea", "fieldset", "optgroup", "option", "link"]) => {
            Some(Flag("disabled"))
        }
        "checked" if is(&["input"]) => Some(Flag("checked")),
        "selected" if is(&["option"]) => Some(Flag("selected")),
        "required" if is(&["input", "select", "textarea"]) => Some(Flag("required")),
        "readOnly" if is(&["input", "textarea"]) => Some(Flag("readonly")),
        "multiple" if is(&["input", "select"]) => Some(Flag("multiple")),
        "autofocus" if is(&["input", "button", "select", "textarea"]) => Some(Flag("autofocus")),
        "open" if is(&["details", "dialog"]) => Some(Flag("open")),
        "width" if is(&["img", "canvas", "video", "iframe", "embed", "object", "input"]) => Some(Integer("width")),
        "height" if is(&["img", "canvas", "video", "iframe", "embed", "object", "input"]) => Some(Integer("height")),
        "rows" if is(&["textarea"]) => Some(Integer("rows")),
        "cols" if is(&["textarea"]) => Some(Integer("cols")),
        "colSpan" if is(&["td", "th"]) => Some(Integer("colspan")),
        "rowSpan" if is(&["td", "th"]) => Some(Integer("rowspan")),
        _ => None,
    }
}

impl DomTree {
    /// Whether `name` is a settable property of the element
    pub fn has_property(&self, node: NodeId, name: &str) -> bool {
        self.tag_name(node).is_some_and(|tag| property_kind(tag, name).is_some())
    }

    /// Assign a reflected property
    pub fn set_property(&mut self, node: NodeId, name: &str, value: PropValue) -> DomResult<()> {
        let tag = self.tag_name(node).ok_or(DomError::InvalidNodeType("element"))?;
        let kind = property_kind(tag, name).ok_or(DomError::NotFound)?;
        match kind {
            PropertyKind::Reflect(attr) => self.set_attribute(node, attr, &value.to_display_string()),
            PropertyKind::Flag(attr) => {
                self.element_mut(node)?.attrs.toggle(attr, value.is_truthy());
                Ok(())
            }
            PropertyKind::Integer(attr) => self.set_attribute(node, attr, &value.to_integer().to_string()),
            PropertyKind::TextContent => {
                let text = match value {
                    PropValue::Null => String::new(),
                    other => other.to_display_string(),
                };
                self.set_text_content(node, &text)
            }
            PropertyKind::Handler(kind) => {
                let handler = match value {
                    PropValue::Handler(h) => Some(h),
                    _ => None,
                };
                self.set_handler(node, kind, handler)
            }
        }
    }

    /// Read a reflected property
    pub fn get_property(&self, node: NodeId, name: &str) -> DomResult<PropValue> {
        let tag = self.tag_name(node).ok_or(DomError::InvalidNodeType("element"))?;
        let kind = property_kind(tag, name).ok_or(DomError::NotFound)?;
        let attr = |a: &str| self.get_attribute(node, a);
        Ok(match kind {
            PropertyKind::Reflect(a) => PropValue::Str(attr(a).unwrap_or_default()),
            PropertyKind::Flag(a) => PropValue::Bool(attr(a).is_some()),
            PropertyKind::Integer(a) => {
                PropValue::Number(attr(a).and_then(|v| v.trim().parse::<f64>().ok()).unwrap_or(0.0))
            }
            PropertyKind::TextContent => PropValue::Str(self.text_content(node)),
            PropertyKind::Handler(kind) => self.handler(node, kind).map(PropValue::Handler).unwrap_or(PropValue::Null),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_property_kind_lookup() {
        assert_eq!(property_kind("div", "className"), Some(PropertyKind::Reflect("class")));
        assert_eq!(property_kind("a", "href"), Some(PropertyKind::Reflect("href")));
        assert_eq!(property_kind("div", "href"), None);
        assert_eq!(property_kind("button", "onclick"), Some(PropertyKind::Handler("click")));
        assert_eq!(property_kind("div", "onbogus"), None);
        assert_eq!(property_kind("div", "aria-label"), None);
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(1.0), "1");
        assert_eq!(format_number(-3.0), "-3");
        assert_eq!(format_number(1.5), "1.5");
        assert_eq!(format_number(f64::NAN), "NaN");
        assert_eq!(format_number(f64::NEG_INFINITY), "-Infinity");
        assert_eq!(format_number(-0.0), "0");
    }

    #[test]
    fn test_format_large_integral_number() {
        assert_eq!(format_number(1e20), "100000000000000000000");
        assert_eq!(format_number(-1e19), "-10000000000000000000");
    }

    #[test]
    fn test_reflected_properties() {
        let mut tree = DomTree::new();
        let input = tree.create_element("input").unwrap();

        tree.set_property(input, "className", PropValue::Str("field wide".into())).unwrap();
        tree.set_property(input, "disabled", PropValue::Bool(true)).unwrap();
        tree.set_property(input, "tabIndex", PropValue::Str("3.7".into())).unwrap();

        assert_eq!(tree.get_attribute(input, "class").as_deref(), Some("field wide"));
        assert_eq!(tree.get_property(input, "disabled").unwrap(), PropValue::Bool(true));
        assert_eq!(tree.get_attribute(input, "tabindex").as_deref(), Some("3"));

        tree.set_property(input, "disabled", PropValue::Str(String::new())).unwrap();
        assert!(!tree.has_attribute(input, "disabled"));
    }

    #[test]
    fn test_text_content_property() {
        let mut tree = DomTree::new();
        let p = tree.create_element("p").unwrap();
        let old = tree.create_element("b").unwrap();
        tree.append_child(p, old).unwrap();

        tree.set_property(p, "textContent", PropValue::Number(42.0)).unwrap();
        assert_eq!(tree.text_content(p), "42");
        assert_eq!(tree.child_nodes(p).len(), 1);
        assert!(tree.first_element_child(p).is_none());
    }

    #[test]
    fn test_unknown_property() {
        let mut tree = DomTree::new();
        let div = tree.create_element("div").unwrap();
        assert!(!tree.has_property(div, "href"));
        assert_eq!(tree.set_property(div, "href", PropValue::Null), Err(DomError::NotFound));
    }
}
