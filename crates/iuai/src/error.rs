//! Errors and per-operation outcomes
//!
//! Structural failures (lookups, the stylesheet) are returned as errors.
//! Best-effort failures (one attribute, one style property, one child, one
//! nested rule) are collected as [`Issue`]s on an [`Outcome`] so a single
//! bad input never stops the rest of the batch.

use iuai_css::CssError;
use iuai_dom::DomError;

/// Lookup failures from `get_elem` and friends
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LookupError {
    #[error("Element not found.")]
    NotFound,

    #[error("tag parameter and element's tag do not match: expected `{expected}`, found `{found}`")]
    TagMismatch { expected: String, found: String },

    #[error(transparent)]
    Dom(#[from] DomError),
}

/// Stylesheet failures
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SheetError {
    #[error("Unable to add style rule.")]
    Unavailable,

    #[error("Rule `{0}` has no style declaration")]
    NotStyleRule(String),

    #[error(transparent)]
    Css(#[from] CssError),

    #[error(transparent)]
    Dom(#[from] DomError),
}

/// Whole-call build failures
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BuildError {
    #[error("Failed to create `{tag}`: {source}")]
    CreateElement { tag: String, source: DomError },

    #[error("Component failed: {0}")]
    Component(String),
}

/// A failure that was skipped while the operation carried on
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Issue {
    #[error("Failed to set attribute `{name}`: {source}")]
    Attribute { name: String, source: DomError },

    #[error("Failed to set style property `{name}`: {source}")]
    StyleProperty { name: String, source: CssError },

    #[error("Failed to append child: {0}")]
    Child(DomError),

    #[error("Failed to insert rule `{selector}`: {source}")]
    Rule { selector: String, source: SheetError },

    #[error(transparent)]
    Build(#[from] BuildError),
}

/// Result of a best-effort operation
#[derive(Debug, Clone, PartialEq)]
#[must_use]
pub struct Outcome<T> {
    pub value: T,
    pub issues: Vec<Issue>,
}

impl<T> Outcome<T> {
    pub fn new(value: T) -> Self {
        Self { value, issues: Vec::new() }
    }

    pub fn with_issues(value: T, issues: Vec<Issue>) -> Self {
        Self { value, issues }
    }

    /// True when nothing was skipped
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn into_value(self) -> T {
        self.value
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
        Outcome {
            value: f(self.value),
            issues: self.issues,
        }
    }
}
