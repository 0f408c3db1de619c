//! Selector Matching
//!
//! The subset of selectors `querySelector` supports: type, universal, id,
//! class and attribute selectors, compounds of those, the four
//! combinators and comma-separated lists. Pseudo-classes are rejected.

use crate::{DomError, DomResult, DomTree, NodeId};

/// Parsed selector list (`a, b > c`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorList(Vec<ComplexSelector>);

/// Compounds joined by combinators, left to right
#[derive(Debug, Clone, PartialEq, Eq)]
struct ComplexSelector {
    compounds: Vec<Compound>,
    /// `combinators[i]` sits between `compounds[i]` and `compounds[i + 1]`
    combinators: Vec<Combinator>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct Compound(Vec<SimpleSelector>);

/// Simple selector for matching
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimpleSelector {
    Tag(String),
    Class(String),
    Id(String),
    Universal,
    Attribute { name: String, op: AttrOp, value: String },
}

/// Attribute selector operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttrOp {
    Exists,     // [attr]
    Equals,     // [attr=value]
    Includes,   // [attr~=value]
    DashMatch,  // [attr|=value]
    StartsWith, // [attr^=value]
    EndsWith,   // [attr$=value]
    Contains,   // [attr*=value]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Combinator {
    Descendant,
    Child,
    NextSibling,
    SubsequentSibling,
}

impl SelectorList {
    /// Parse a selector list
    pub fn parse(selector: &str) -> DomResult<Self> {
        let syntax = |message: &str| DomError::Syntax {
            selector: selector.to_string(),
            message: message.to_string(),
        };
        let mut list = Vec::new();
        for part in split_top_level_commas(selector) {
            list.push(parse_complex(part).map_err(|m| syntax(&m))?);
        }
        if list.is_empty() {
            return Err(syntax("empty selector"));
        }
        Ok(Self(list))
    }

    /// Whether an element matches any selector in the list
    pub fn matches(&self, tree: &DomTree, node: NodeId) -> bool {
        self.0.iter().any(|complex| {
            let last = complex.compounds.len() - 1;
            match_from(tree, node, complex, last)
        })
    }
}

fn match_from(tree: &DomTree, node: NodeId, complex: &ComplexSelector, index: usize) -> bool {
    if !matches_compound(tree, node, &complex.compounds[index]) {
        return false;
    }
    if index == 0 {
        return true;
    }
    match complex.combinators[index - 1] {
        Combinator::Child => tree
            .parent_element(node)
            .is_some_and(|p| match_from(tree, p, complex, index - 1)),
        Combinator::Descendant => {
            let mut current = tree.parent_element(node);
            while let Some(ancestor) = current {
                if match_from(tree, ancestor, complex, index - 1) {
                    return true;
                }
                current = tree.parent_element(ancestor);
            }
            false
        }
        Combinator::NextSibling => tree
            .previous_element_sibling(node)
            .is_some_and(|s| match_from(tree, s, complex, index - 1)),
        Combinator::SubsequentSibling => {
            let mut current = tree.previous_element_sibling(node);
            while let Some(sibling) = current {
                if match_from(tree, sibling, complex, index - 1) {
                    return true;
                }
                current = tree.previous_element_sibling(sibling);
            }
            false
        }
    }
}

fn matches_compound(tree: &DomTree, node: NodeId, compound: &Compound) -> bool {
    let Ok(element) = tree.element(node) else {
        return false;
    };
    compound.0.iter().all(|simple| match simple {
        SimpleSelector::Universal => true,
        SimpleSelector::Tag(tag) => element.tag.eq_ignore_ascii_case(tag),
        SimpleSelector::Id(id) => element.id() == Some(id.as_str()),
        SimpleSelector::Class(class) => element.has_class(class),
        SimpleSelector::Attribute { name, op, value } => {
            let Some(actual) = tree.get_attribute(node, name) else {
                return false;
            };
            match op {
                AttrOp::Exists => true,
                AttrOp::Equals => actual == *value,
                AttrOp::Includes => actual.split_whitespace().any(|t| t == value),
                AttrOp::DashMatch => actual == *value || actual.starts_with(&format!("{}-", value)),
                AttrOp::StartsWith => !value.is_empty() && actual.starts_with(value.as_str()),
                AttrOp::EndsWith => !value.is_empty() && actual.ends_with(value.as_str()),
                AttrOp::Contains => !value.is_empty() && actual.contains(value.as_str()),
            }
        }
    })
}

fn split_top_level_commas(selector: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut quote = None;
    let mut start = 0;
    for (i, c) in selector.char_indices() {
        match (quote, c) {
            (Some(q), c) if c == q => quote = None,
            (Some(_), _) => {}
            (None, '"' | '\'') => quote = Some(c),
            (None, '[') => depth += 1,
            (None, ']') => depth = depth.saturating_sub(1),
            (None, ',') if depth == 0 => {
                parts.push(&selector[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    parts.push(&selector[start..]);
    parts
}

type Chars<'a> = std::iter::Peekable<std::str::Chars<'a>>;

fn parse_complex(input: &str) -> Result<ComplexSelector, String> {
    let mut chars = input.trim().chars().peekable();
    let mut compounds = vec![parse_compound(&mut chars)?];
    let mut combinators = Vec::new();

    loop {
        let mut saw_space = false;
        while chars.peek().is_some_and(|c| c.is_whitespace()) {
            chars.next();
            saw_space = true;
        }
        let combinator = match chars.peek() {
            None => break,
            Some('>') => Combinator::Child,
            Some('+') => Combinator::NextSibling,
            Some('~') => Combinator::SubsequentSibling,
            Some(_) if saw_space => Combinator::Descendant,
            Some(c) => return Err(format!("unexpected `{}`", c)),
        };
        if combinator != Combinator::Descendant {
            chars.next();
            while chars.peek().is_some_and(|c| c.is_whitespace()) {
                chars.next();
            }
        }
        combinators.push(combinator);
        compounds.push(parse_compound(&mut chars)?);
    }

    Ok(ComplexSelector { compounds, combinators })
}

fn parse_compound(chars: &mut Chars<'_>) -> Result<Compound, String> {
    let mut compound = Compound::default();
    loop {
        match chars.peek().copied() {
            Some('*') if compound.0.is_empty() => {
                chars.next();
                compound.0.push(SimpleSelector::Universal);
            }
            Some('#') => {
                chars.next();
                compound.0.push(SimpleSelector::Id(read_ident(chars)?));
            }
            Some('.') => {
                chars.next();
                compound.0.push(SimpleSelector::Class(read_ident(chars)?));
            }
            Some('[') => {
                chars.next();
                compound.0.push(parse_attribute(chars)?);
            }
            Some(':') => return Err("pseudo-classes are not supported".to_string()),
            Some(c) if compound.0.is_empty() && is_ident_char(c) => {
                compound.0.push(SimpleSelector::Tag(read_ident(chars)?.to_ascii_lowercase()));
            }
            Some(c) if c.is_whitespace() || matches!(c, '>' | '+' | '~') => break,
            None => break,
            Some(c) => return Err(format!("unexpected `{}`", c)),
        }
    }
    if compound.0.is_empty() {
        return Err("expected a selector".to_string());
    }
    Ok(compound)
}

fn parse_attribute(chars: &mut Chars<'_>) -> Result<SimpleSelector, String> {
    let mut body = String::new();
    let mut quote = None;
    loop {
        let c = chars.next().ok_or("unterminated attribute selector")?;
        match (quote, c) {
            (None, ']') => break,
            (None, '"' | '\'') => quote = Some(c),
            (Some(q), c) if c == q => quote = None,
            _ => {}
        }
        body.push(c);
    }

    const OPS: &[(&str, AttrOp)] = &[
        ("~=", AttrOp::Includes),
        ("|=", AttrOp::DashMatch),
        ("^=", AttrOp::StartsWith),
        ("$=", AttrOp::EndsWith),
        ("*=", AttrOp::Contains),
        ("=", AttrOp::Equals),
    ];
    let found = OPS
        .iter()
        .filter_map(|&(token, op)| body.find(token).map(|at| (at, token, op)))
        .min_by_key(|&(at, _, _)| at);

    let (name, op, value) = match found {
        Some((at, token, op)) => {
            let value = body[at + token.len()..].trim();
            let value = value
                .strip_prefix('"')
                .and_then(|v| v.strip_suffix('"'))
                .or_else(|| value.strip_prefix('\'').and_then(|v| v.strip_suffix('\'')))
                .unwrap_or(value);
            (body[..at].trim(), op, value.to_string())
        }
        None => (body.trim(), AttrOp::Exists, String::new()),
    };
    if name.is_empty() || !name.chars().all(is_ident_char) {
        return Err(format!("invalid attribute name `{}`", name));
    }
    Ok(SimpleSelector::Attribute {
        name: name.to_ascii_lowercase(),
        op,
        value,
    })
}

fn is_ident_char(c: char) -> bool {
    c.is_alphanumeric() || c == '-' || c == '_' || !c.is_ascii()
}

fn read_ident(chars: &mut Chars<'_>) -> Result<String, String> {
    let mut ident = String::new();
    while let Some(&c) = chars.peek() {
        if !is_ident_char(c) {
            break;
        }
        ident.push(c);
        chars.next();
    }
    if ident.is_empty() {
        Err("expected an identifier".to_string())
    } else {
        Ok(ident)
    }
}

impl DomTree {
    /// First element under `root` (document order) matching `selector`
    pub fn query_selector(&self, root: NodeId, selector: &str) -> DomResult<Option<NodeId>> {
        let list = SelectorList::parse(selector)?;
        Ok(self.descendants(root).into_iter().find(|&n| list.matches(self, n)))
    }

    /// All elements under `root` matching `selector`
    pub fn query_selector_all(&self, root: NodeId, selector: &str) -> DomResult<Vec<NodeId>> {
        let list = SelectorList::parse(selector)?;
        Ok(self.descendants(root).into_iter().filter(|&n| list.matches(self, n)).collect())
    }
}
