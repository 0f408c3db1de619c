//! Rule Lists and Stylesheets
//!
//! CSSOM-style rule storage: a stylesheet owns a rule list, a media rule
//! owns a nested rule list, and rules are addressed by `RulePath`.

use crate::parser::parse_rule;
use crate::{CssError, CssResult, StyleDeclaration};

/// A rule inside a rule list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CssRule {
    Style(StyleRule),
    Media(MediaRule),
}

impl CssRule {
    pub fn as_style(&self) -> Option<&StyleRule> {
        match self {
            Self::Style(rule) => Some(rule),
            _ => None,
        }
    }

    pub fn as_style_mut(&mut self) -> Option<&mut StyleRule> {
        match self {
            Self::Style(rule) => Some(rule),
            _ => None,
        }
    }

    pub fn as_media(&self) -> Option<&MediaRule> {
        match self {
            Self::Media(rule) => Some(rule),
            _ => None,
        }
    }

    pub fn as_media_mut(&mut self) -> Option<&mut MediaRule> {
        match self {
            Self::Media(rule) => Some(rule),
            _ => None,
        }
    }

    /// Serialized rule text
    pub fn css_text(&self) -> String {
        match self {
            Self::Style(rule) => rule.css_text(),
            Self::Media(rule) => rule.css_text(),
        }
    }
}

/// `selector { declarations }`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleRule {
    selector_text: String,
    pub style: StyleDeclaration,
}

impl StyleRule {
    pub fn new(selector_text: impl Into<String>, style: StyleDeclaration) -> Self {
        Self {
            selector_text: selector_text.into(),
            style,
        }
    }

    pub fn selector_text(&self) -> &str {
        &self.selector_text
    }

    pub fn css_text(&self) -> String {
        if self.style.is_empty() {
            format!("{} {{ }}", self.selector_text)
        } else {
            format!("{} {{ {} }}", self.selector_text, self.style.css_text())
        }
    }
}

/// `@media condition { rules }`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaRule {
    condition_text: String,
    rules: RuleList,
}

impl MediaRule {
    pub fn new(condition_text: impl Into<String>, rules: RuleList) -> Self {
        Self {
            condition_text: condition_text.into(),
            rules,
        }
    }

    pub fn condition_text(&self) -> &str {
        &self.condition_text
    }

    pub fn css_rules(&self) -> &RuleList {
        &self.rules
    }

    pub fn css_rules_mut(&mut self) -> &mut RuleList {
        &mut self.rules
    }

    /// Insert a nested rule at `index`
    pub fn insert_rule(&mut self, text: &str, index: usize) -> CssResult<usize> {
        self.rules.insert_rule(text, index)
    }

    pub fn css_text(&self) -> String {
        let mut out = format!("@media {} {{", self.condition_text);
        for rule in self.rules.iter() {
            out.push_str("\n  ");
            out.push_str(&rule.css_text());
        }
        out.push_str("\n}");
        out
    }
}

/// Ordered list of rules
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleList {
    rules: Vec<CssRule>,
}

impl RuleList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn item(&self, index: usize) -> Option<&CssRule> {
        self.rules.get(index)
    }

    pub fn item_mut(&mut self, index: usize) -> Option<&mut CssRule> {
        self.rules.get_mut(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CssRule> {
        self.rules.iter()
    }

    /// Parse `text` as one rule and insert it at `index` (0..=len)
    pub fn insert_rule(&mut self, text: &str, index: usize) -> CssResult<usize> {
        if index > self.rules.len() {
            return Err(CssError::IndexSize {
                index,
                len: self.rules.len(),
            });
        }
        let rule = parse_rule(text)?;
        self.rules.insert(index, rule);
        Ok(index)
    }

    /// Resolve a path of indices through nested media rules
    pub fn get(&self, path: &RulePath) -> Option<&CssRule> {
        let (last, parents) = path.0.split_last()?;
        let mut list = self;
        for &i in parents {
            list = list.item(i)?.as_media()?.css_rules();
        }
        list.item(*last)
    }

    pub fn get_mut(&mut self, path: &RulePath) -> Option<&mut CssRule> {
        let (last, parents) = path.0.split_last()?;
        let mut list = self;
        for &i in parents {
            list = list.item_mut(i)?.as_media_mut()?.css_rules_mut();
        }
        list.item_mut(*last)
    }
}

/// Location of a rule: top-level index, then one index per nested media rule
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RulePath(pub Vec<usize>);

impl RulePath {
    /// Path of a top-level rule
    pub fn top(index: usize) -> Self {
        Self(vec![index])
    }

    /// Path of a rule nested inside this one
    pub fn child(&self, index: usize) -> Self {
        let mut path = self.0.clone();
        path.push(index);
        Self(path)
    }
}

/// A stylesheet and its rule list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleSheet {
    rules: RuleList,
}

impl StyleSheet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn css_rules(&self) -> &RuleList {
        &self.rules
    }

    pub fn css_rules_mut(&mut self) -> &mut RuleList {
        &mut self.rules
    }

    pub fn insert_rule(&mut self, text: &str, index: usize) -> CssResult<usize> {
        self.rules.insert_rule(text, index)
    }

    /// Number of top-level rules
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn rule(&self, path: &RulePath) -> Option<&CssRule> {
        self.rules.get(path)
    }

    pub fn rule_mut(&mut self, path: &RulePath) -> Option<&mut CssRule> {
        self.rules.get_mut(path)
    }

    /// Serialize every rule, one per line
    pub fn to_css(&self) -> String {
        self.rules.iter().map(CssRule::css_text).collect::<Vec<_>>().join("\n")
    }
}
