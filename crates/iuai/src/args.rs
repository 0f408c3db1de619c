//! Argument resolution
//!
//! Turns `elem(tag_like, positional...)` into a tag, an attribute map and a
//! borrowed child list. Shapes are checked in a fixed order:
//!
//! 1. two or more positionals: everything after the first is children
//! 2. text or number: a single text child
//! 3. list: the children
//! 4. map: the attributes, with an optional `children` list
//!
//! A descriptor id is merged into the attributes last.

use crate::{AttrMap, Component, RefHandle, Value};

/// First argument of `elem`
#[derive(Clone)]
pub enum TagLike {
    /// Bare tag name; `""` builds a fragment
    Tag(String),
    /// Tag plus an id to assign
    Descriptor { tag: String, id: Option<String> },
    /// Build the element a reference points at
    Ref(RefHandle),
    /// Delegate to a render function
    Component(Component),
}

impl TagLike {
    pub fn descriptor(tag: impl Into<String>, id: impl Into<String>) -> Self {
        Self::Descriptor {
            tag: tag.into(),
            id: Some(id.into()),
        }
    }

    /// `(tag, id)` pair, or `None` for a component
    pub(crate) fn tag_and_id(&self) -> Option<(&str, &str)> {
        match self {
            Self::Tag(tag) => Some((tag.as_str(), "")),
            Self::Descriptor { tag, id } => Some((tag.as_str(), id.as_deref().unwrap_or(""))),
            Self::Ref(r) => Some((r.tag(), r.id())),
            Self::Component(_) => None,
        }
    }
}

impl std::fmt::Debug for TagLike {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Tag(tag) => f.debug_tuple("Tag").field(tag).finish(),
            Self::Descriptor { tag, id } => f.debug_struct("Descriptor").field("tag", tag).field("id", id).finish(),
            Self::Ref(r) => f.debug_tuple("Ref").field(r).finish(),
            Self::Component(_) => f.write_str("Component(..)"),
        }
    }
}

impl From<&str> for TagLike {
    fn from(tag: &str) -> Self {
        Self::Tag(tag.to_string())
    }
}

impl From<String> for TagLike {
    fn from(tag: String) -> Self {
        Self::Tag(tag)
    }
}

impl From<(&str, &str)> for TagLike {
    fn from((tag, id): (&str, &str)) -> Self {
        Self::descriptor(tag, id)
    }
}

impl From<RefHandle> for TagLike {
    fn from(r: RefHandle) -> Self {
        Self::Ref(r)
    }
}

impl From<&RefHandle> for TagLike {
    fn from(r: &RefHandle) -> Self {
        Self::Ref(r.clone())
    }
}

impl From<Component> for TagLike {
    fn from(component: Component) -> Self {
        Self::Component(component)
    }
}

impl From<&Component> for TagLike {
    fn from(component: &Component) -> Self {
        Self::Component(component.clone())
    }
}

/// Resolved element arguments
#[derive(Debug)]
pub(crate) struct ElemArgs<'a> {
    pub attributes: AttrMap,
    pub children: &'a [Value],
}

pub(crate) fn resolve_args<'a>(id: &str, args: &'a [Value]) -> ElemArgs<'a> {
    let mut attributes = match args.first() {
        Some(Value::Map(map)) => map.without("children"),
        _ => AttrMap::new(),
    };
    if !id.is_empty() {
        attributes.insert("id", id);
    }
    ElemArgs {
        attributes,
        children: children_of(args),
    }
}

fn children_of(args: &[Value]) -> &[Value] {
    if args.len() >= 2 {
        return &args[1..];
    }
    match args.first() {
        Some(text @ (Value::Str(_) | Value::Number(_))) => std::slice::from_ref(text),
        Some(Value::List(list)) => list.as_slice(),
        Some(Value::Map(map)) => match map.get("children") {
            Some(Value::List(list)) => list.as_slice(),
            _ => &[],
        },
        _ => &[],
    }
}
