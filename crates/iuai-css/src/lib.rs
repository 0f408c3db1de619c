//! iuai CSS Object Model
//!
//! Style declarations, rule lists and stylesheets that rules can be inserted
//! into at runtime. Rule text is validated with lightningcss before it is
//! accepted into a rule list.

mod declaration;
mod parser;
pub mod properties;
mod rules;

pub use declaration::{StyleDeclaration, StyleEntry, IMPORTANT};
pub use parser::parse_rule;
pub use rules::{CssRule, MediaRule, RuleList, RulePath, StyleRule, StyleSheet};

/// Result type for CSSOM operations
pub type CssResult<T> = Result<T, CssError>;

/// CSSOM errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CssError {
    #[error("Syntax error in rule `{text}`: {message}")]
    Syntax { text: String, message: String },

    #[error("Unsupported rule: {0}")]
    UnsupportedRule(String),

    #[error("Unknown property: {0}")]
    UnknownProperty(String),

    #[error("Invalid value for {property}: {value}")]
    InvalidValue { property: String, value: String },

    #[error("Invalid priority `{0}`")]
    InvalidPriority(String),

    #[error("Rule index {index} out of bounds (length {len})")]
    IndexSize { index: usize, len: usize },
}
