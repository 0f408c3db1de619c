//! Page Configuration

use anyhow::{Context, bail};
use serde::Deserialize;

/// How reference selectors are formed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RefSelector {
    /// `tag#id`
    #[default]
    TagAndId,
    /// `#id`
    IdOnly,
}

/// What a lookup does when the element's tag differs from the requested one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TagMismatch {
    /// Fail with `LookupError::TagMismatch`
    #[default]
    Error,
    /// Log a warning and return the element anyway
    Warn,
}

/// Page configuration options
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Document URL
    pub url: String,

    /// Leading letter(s) of generated reference ids
    pub ref_prefix: String,

    pub ref_selector: RefSelector,

    pub tag_mismatch: TagMismatch,
}

impl Config {
    /// Parse a JSON config; missing fields keep their defaults
    pub fn from_json(text: &str) -> anyhow::Result<Self> {
        let config: Self = serde_json::from_str(text).context("Invalid iuai config")?;
        config.validate()?;
        Ok(config)
    }

    /// Generated ids must start with a letter to be usable in selectors
    pub fn validate(&self) -> anyhow::Result<()> {
        match self.ref_prefix.chars().next() {
            Some(c) if c.is_ascii_alphabetic() => {}
            _ => bail!("ref_prefix must start with an ASCII letter, got `{}`", self.ref_prefix),
        }
        if !self.ref_prefix.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_') {
            bail!("ref_prefix `{}` is not a valid identifier", self.ref_prefix);
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            url: "about:blank".to_string(),
            ref_prefix: "e".to_string(),
            ref_selector: RefSelector::TagAndId,
            tag_mismatch: TagMismatch::Error,
        }
    }
}
