//! Style Declaration
//!
//! An ordered declaration block: what an element's inline `style` and a
//! style rule's `style` both expose.

use crate::parser::{is_single_declaration, parse_declarations};
use crate::properties::{field_property, is_custom, is_known};
use crate::{CssError, CssResult};

/// The only non-empty priority a declaration can carry
pub const IMPORTANT: &str = "important";

/// Single declaration (property: value [!important])
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleEntry {
    pub name: String,
    pub value: String,
    pub important: bool,
}

/// Declaration block
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleDeclaration {
    entries: Vec<StyleEntry>,
}

impl StyleDeclaration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a declaration block from `a: b; c: d` text
    pub fn from_css_text(text: &str) -> Self {
        parse_declarations(text)
    }

    /// Number of declarations
    pub fn length(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Property name at index
    pub fn item(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(|e| e.name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &StyleEntry> {
        self.entries.iter()
    }

    /// Value of a property, empty when unset
    pub fn get_property_value(&self, name: &str) -> &str {
        self.find(name).map(|e| e.value.as_str()).unwrap_or("")
    }

    /// `"important"` or empty
    pub fn get_property_priority(&self, name: &str) -> &str {
        match self.find(name) {
            Some(e) if e.important => IMPORTANT,
            _ => "",
        }
    }

    /// Set a property with an explicit priority.
    ///
    /// An empty value removes the property. The value is stored as given
    /// once lightningcss accepts it as a single declaration.
    pub fn set_property(&mut self, name: &str, value: &str, priority: &str) -> CssResult<()> {
        let name = normalize_name(name)?;
        let important = if priority.is_empty() {
            false
        } else if priority.eq_ignore_ascii_case(IMPORTANT) {
            true
        } else {
            return Err(CssError::InvalidPriority(priority.to_string()));
        };

        let value = value.trim();
        if value.is_empty() {
            self.remove_property(&name);
            return Ok(());
        }
        if !is_single_declaration(&name, value) {
            return Err(CssError::InvalidValue {
                property: name,
                value: value.to_string(),
            });
        }

        match self.entries.iter_mut().find(|e| e.name == name) {
            Some(entry) => {
                entry.value = value.to_string();
                entry.important = important;
            }
            None => self.entries.push(StyleEntry {
                name,
                value: value.to_string(),
                important,
            }),
        }
        Ok(())
    }

    /// Remove a property, returning its old value
    pub fn remove_property(&mut self, name: &str) -> Option<String> {
        let name = normalize_name(name).ok()?;
        let index = self.entries.iter().position(|e| e.name == name)?;
        Some(self.entries.remove(index).value)
    }

    /// Whether `field` is a directly assignable field (`color`,
    /// `backgroundColor`, `background-color`). Custom properties are not.
    pub fn has_field(&self, field: &str) -> bool {
        field_property(field).is_some()
    }

    /// Read a field (`style.backgroundColor`)
    pub fn field(&self, field: &str) -> &str {
        match field_property(field) {
            Some(name) => self.get_property_value(&name),
            None => "",
        }
    }

    /// Assign a field; always clears any `important` priority
    pub fn set_field(&mut self, field: &str, value: &str) -> CssResult<()> {
        let name = field_property(field).ok_or_else(|| CssError::UnknownProperty(field.to_string()))?;
        self.set_property(&name, value, "")
    }

    /// Serialize as `a: b; c: d !important;`
    pub fn css_text(&self) -> String {
        self.entries
            .iter()
            .map(|e| {
                if e.important {
                    format!("{}: {} !important;", e.name, e.value)
                } else {
                    format!("{}: {};", e.name, e.value)
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Replace every declaration with those parsed from `text`.
    ///
    /// Declarations the block rejects are dropped. Values read back as
    /// lightningcss serializes them.
    pub fn set_css_text(&mut self, text: &str) {
        *self = parse_declarations(text);
    }

    fn find(&self, name: &str) -> Option<&StyleEntry> {
        let name = normalize_name(name).ok()?;
        self.entries.iter().find(|e| e.name == name)
    }
}

/// Custom properties are case-sensitive; everything else is lowercased and
/// must be a property the engine recognizes.
fn normalize_name(name: &str) -> CssResult<String> {
    let name = name.trim();
    if is_custom(name) && name.len() > 2 {
        return Ok(name.to_string());
    }
    let lower = name.to_ascii_lowercase();
    if is_known(&lower) {
        Ok(lower)
    } else {
        Err(CssError::UnknownProperty(name.to_string()))
    }
}
