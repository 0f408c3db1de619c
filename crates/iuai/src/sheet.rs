//! Stylesheet Engine
//!
//! One `<style>` element per page, created in `<head>` on first use.
//! Rules are only ever appended.

use iuai_css::{CssError, CssRule, RuleList, RulePath, StyleDeclaration, StyleRule, StyleSheet};

use crate::style::{apply_style, style_value};
use crate::{AttrMap, Issue, Outcome, Page, SheetError, Value};

impl Page {
    /// Append a style rule for `selector`.
    ///
    /// A `content` entry seeds the rule text as given, so string contents
    /// need their own quotes (`"'→'"`). Returns the rule's path, or `None`
    /// when the rule could not be inserted.
    pub fn style(&mut self, selector: &str, properties: &AttrMap) -> Outcome<Option<RulePath>> {
        let mut issues = Vec::new();
        let inserted = self
            .style_sheet()
            .and_then(|sheet| insert_style_rule(sheet.css_rules_mut(), selector, properties, &mut issues));
        match inserted {
            Ok(index) => {
                tracing::debug!("Inserted rule {} at {}", selector, index);
                Outcome::with_issues(Some(RulePath::top(index)), issues)
            }
            Err(e) => {
                tracing::error!("Failed to insert rule {}: {}", selector, e);
                issues.push(Issue::Rule {
                    selector: selector.to_string(),
                    source: e,
                });
                Outcome::with_issues(None, issues)
            }
        }
    }

    /// Append an `@media` block holding one rule per `rules` entry.
    ///
    /// Each entry maps a selector to a property map. A nested rule that
    /// fails is skipped; the block is still returned.
    pub fn media(&mut self, condition: &str, rules: &AttrMap) -> Outcome<Option<RulePath>> {
        let mut issues = Vec::new();
        let block = format!("@media {condition}");
        let inserted = self.style_sheet().and_then(|sheet| {
            let index = init_rule(sheet.css_rules_mut(), &block, None)?;
            let media = sheet
                .css_rules_mut()
                .item_mut(index)
                .and_then(CssRule::as_media_mut)
                .ok_or_else(|| SheetError::Css(CssError::UnsupportedRule(block.clone())))?;

            for (selector, properties) in rules.iter() {
                let nested = match properties {
                    Value::Map(properties) => insert_style_rule(media.css_rules_mut(), selector, properties, &mut issues),
                    _ => Err(SheetError::NotStyleRule(selector.to_string())),
                };
                if let Err(e) = nested {
                    tracing::warn!("Skipping rule {} in {}: {}", selector, block, e);
                    issues.push(Issue::Rule {
                        selector: selector.to_string(),
                        source: e,
                    });
                }
            }
            Ok(index)
        });

        match inserted {
            Ok(index) => {
                tracing::debug!("Inserted {} at {}", block, index);
                Outcome::with_issues(Some(RulePath::top(index)), issues)
            }
            Err(e) => {
                tracing::error!("Failed to insert {}: {}", block, e);
                issues.push(Issue::Rule { selector: block, source: e });
                Outcome::with_issues(None, issues)
            }
        }
    }

    /// Serialize `selector { ... }` without touching the stylesheet
    pub fn css(&self, selector: &str, properties: &AttrMap) -> Outcome<String> {
        let mut style = StyleDeclaration::new();
        let issues = apply_style(&mut style, properties);
        Outcome::with_issues(StyleRule::new(selector, style).css_text(), issues)
    }

    /// The page stylesheet, if it has been created
    pub fn sheet(&self) -> Option<&StyleSheet> {
        self.document.tree.sheet(self.style_element?)
    }

    /// Rule at `path` in the page stylesheet
    pub fn rule(&self, path: &RulePath) -> Option<&CssRule> {
        self.sheet()?.rule(path)
    }

    fn style_sheet(&mut self) -> Result<&mut StyleSheet, SheetError> {
        let element = match self.style_element {
            Some(element) => element,
            None => {
                let element = self.document.tree.create_element("style")?;
                self.style_element = Some(element);
                let head = self.document.head();
                self.document.tree.append_child(head, element)?;
                tracing::debug!("Created page stylesheet {:?}", element);
                element
            }
        };
        self.document.tree.sheet_mut(element).ok_or(SheetError::Unavailable)
    }
}

fn insert_style_rule(
    rules: &mut RuleList,
    selector: &str,
    properties: &AttrMap,
    issues: &mut Vec<Issue>,
) -> Result<usize, SheetError> {
    let index = init_rule(rules, selector, properties.get("content"))?;
    let rule = rules
        .item_mut(index)
        .and_then(CssRule::as_style_mut)
        .ok_or_else(|| SheetError::NotStyleRule(selector.to_string()))?;
    issues.extend(apply_style(&mut rule.style, properties));
    Ok(index)
}

/// Append an empty rule (or one seeded with `content`) and return its index
fn init_rule(rules: &mut RuleList, selector: &str, content: Option<&Value>) -> Result<usize, CssError> {
    let index = rules.len();
    let text = match content.map(style_value).filter(|c| !c.is_empty()) {
        Some(content) => format!("{selector} {{ content: {content}; }}"),
        None => format!("{selector} {{}}"),
    };
    rules.insert_rule(&text, index)?;
    Ok(index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stylesheet_created_once() {
        let mut page = Page::new();
        assert!(page.sheet().is_none());
        let _ = page.style(".a", &AttrMap::from([("color", "red")]));
        let _ = page.style(".b", &AttrMap::from([("color", "blue")]));

        let head = page.document.head();
        let styles = page.document.tree.query_selector_all(head, "style").unwrap();
        assert_eq!(styles.len(), 1);
        assert_eq!(page.sheet().unwrap().len(), 2);
    }

    #[test]
    fn test_detached_style_element_is_unavailable() {
        let mut page = Page::new();
        let _ = page.style(".a", &AttrMap::new());
        let style = page.style_element.unwrap();
        let head = page.document.head();
        page.document.tree.remove_child(head, style).unwrap();

        let outcome = page.style(".b", &AttrMap::new());
        assert_eq!(outcome.value, None);
        assert!(matches!(
            &outcome.issues[0],
            Issue::Rule { source: SheetError::Unavailable, .. }
        ));
        assert_eq!(SheetError::Unavailable.to_string(), "Unable to add style rule.");
    }

    #[test]
    fn test_content_seed() {
        let mut page = Page::new();
        let path = page.style(".q::before", &AttrMap::from([("content", "'>'")])).value.unwrap();
        let rule = page.rule(&path).and_then(CssRule::as_style).unwrap();
        assert_eq!(rule.style.get_property_value("content"), "'>'");
    }

    #[test]
    fn test_invalid_selector_yields_none() {
        let mut page = Page::new();
        let outcome = page.style("{{", &AttrMap::from([("color", "red")]));
        assert_eq!(outcome.value, None);
        assert_eq!(outcome.issues.len(), 1);
        assert_eq!(page.sheet().unwrap().len(), 0);
    }

    #[test]
    fn test_css_does_not_insert() {
        let page_css = Page::new().css(".x", &AttrMap::from([("color", "red"), ("marginTop", "1px !important")]));
        assert_eq!(page_css.value, ".x { color: red; margin-top: 1px !important; }");
        assert!(page_css.is_clean());
    }
}
