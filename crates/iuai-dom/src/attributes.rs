//! Element Attributes
//!
//! Lowercased name to string value, kept in the order attributes were
//! first set so serialization is stable.

use indexmap::IndexMap;

/// Attribute list of one element
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributeList {
    values: IndexMap<String, String>,
}

impl AttributeList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Set a value; an existing attribute keeps its position
    pub fn set(&mut self, name: &str, value: &str) -> Option<String> {
        self.values.insert(name.to_string(), value.to_string())
    }

    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.values.shift_remove(name)
    }

    /// Boolean attribute: present as `""` when `on`, absent otherwise
    pub fn toggle(&mut self, name: &str, on: bool) {
        if !on {
            self.remove(name);
        } else if !self.contains(name) {
            self.set(name, "");
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_keeps_position() {
        let mut attrs = AttributeList::new();
        attrs.set("class", "btn");
        attrs.set("id", "submit");
        assert_eq!(attrs.set("class", "link").as_deref(), Some("btn"));

        assert_eq!(attrs.iter().collect::<Vec<_>>(), [("class", "link"), ("id", "submit")]);
    }

    #[test]
    fn test_remove_keeps_order() {
        let mut attrs = AttributeList::new();
        attrs.set("a", "1");
        attrs.set("b", "2");
        attrs.set("c", "3");

        assert_eq!(attrs.remove("a").as_deref(), Some("1"));
        assert_eq!(attrs.iter().map(|(name, _)| name).collect::<Vec<_>>(), ["b", "c"]);
    }

    #[test]
    fn test_toggle() {
        let mut attrs = AttributeList::new();
        attrs.set("disabled", "disabled");
        attrs.toggle("disabled", true);
        assert_eq!(attrs.get("disabled"), Some("disabled"));

        attrs.toggle("disabled", false);
        attrs.toggle("hidden", true);
        assert!(!attrs.contains("disabled"));
        assert_eq!(attrs.get("hidden"), Some(""));
        assert_eq!(attrs.len(), 1);
    }
}
