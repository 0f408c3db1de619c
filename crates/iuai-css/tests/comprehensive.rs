//! Comprehensive tests for iuai-css
//!
//! Rule insertion, declaration semantics and serialization.

use iuai_css::{CssError, CssRule, RulePath, StyleDeclaration, StyleSheet};

// ============================================================================
// STYLESHEETS
// ============================================================================

#[test]
fn test_sheet_starts_empty() {
    let sheet = StyleSheet::new();
    assert!(sheet.is_empty());
    assert_eq!(sheet.to_css(), "");
}

#[test]
fn test_insert_at_end_keeps_earlier_rules() {
    let mut sheet = StyleSheet::new();
    sheet.insert_rule(".a { color: red; }", 0).unwrap();
    let index = sheet.insert_rule(".b { color: blue; }", sheet.len()).unwrap();

    assert_eq!(index, 1);
    let first = sheet.rule(&RulePath::top(0)).and_then(CssRule::as_style).unwrap();
    assert_eq!(first.selector_text(), ".a");
    assert_eq!(first.style.get_property_value("color"), "red");
}

#[test]
fn test_selector_whitespace_is_collapsed() {
    let mut sheet = StyleSheet::new();
    sheet.insert_rule("ul   >\n li {}", 0).unwrap();
    let rule = sheet.rule(&RulePath::top(0)).and_then(CssRule::as_style).unwrap();
    assert_eq!(rule.selector_text(), "ul > li");
}

#[test]
fn test_invalid_rule_leaves_sheet_untouched() {
    let mut sheet = StyleSheet::new();
    sheet.insert_rule(".ok {}", 0).unwrap();
    assert!(sheet.insert_rule("{ color: red; }", 1).is_err());
    assert!(sheet.insert_rule(".missing-brace", 1).is_err());
    assert_eq!(sheet.len(), 1);
}

#[test]
fn test_rule_style_is_mutable_through_path() {
    let mut sheet = StyleSheet::new();
    sheet.insert_rule(".a {}", 0).unwrap();
    let rule = sheet.rule_mut(&RulePath::top(0)).and_then(CssRule::as_style_mut).unwrap();
    rule.style.set_field("marginTop", "4px").unwrap();

    assert_eq!(sheet.to_css(), ".a { margin-top: 4px; }");
}

#[test]
fn test_media_rule_nesting() {
    let mut sheet = StyleSheet::new();
    sheet.insert_rule("@media (min-width: 600px) {}", 0).unwrap();
    let media = sheet.rule_mut(&RulePath::top(0)).and_then(CssRule::as_media_mut).unwrap();
    media.insert_rule(".b { display: none; }", 0).unwrap();

    let media = sheet.rule(&RulePath::top(0)).and_then(CssRule::as_media).unwrap();
    assert_eq!(media.condition_text(), "(min-width: 600px)");
    assert_eq!(media.css_rules().len(), 1);
}

// ============================================================================
// DECLARATIONS
// ============================================================================

#[test]
fn test_declaration_order_is_insertion_order() {
    let mut style = StyleDeclaration::new();
    style.set_property("width", "1px", "").unwrap();
    style.set_property("color", "red", "").unwrap();
    style.set_property("width", "2px", "").unwrap();

    assert_eq!(style.item(0), Some("width"));
    assert_eq!(style.item(1), Some("color"));
    assert_eq!(style.get_property_value("width"), "2px");
}

#[test]
fn test_property_names_are_case_insensitive() {
    let mut style = StyleDeclaration::new();
    style.set_property("COLOR", "red", "").unwrap();
    assert_eq!(style.get_property_value("color"), "red");
}

#[test]
fn test_important_priority_is_case_insensitive() {
    let mut style = StyleDeclaration::new();
    style.set_property("color", "red", "IMPORTANT").unwrap();
    assert_eq!(style.get_property_priority("color"), "important");
}

#[test]
fn test_quoted_value_may_contain_delimiters() {
    let mut style = StyleDeclaration::new();
    style.set_property("content", "\"{;}\"", "").unwrap();
    assert_eq!(style.get_property_value("content"), "\"{;}\"");
    assert!(matches!(
        style.set_property("content", "\"a\"; color: red", ""),
        Err(CssError::InvalidValue { .. })
    ));
}

#[test]
fn test_css_text_reaches_every_standard_property() {
    let mut style = StyleDeclaration::new();
    style.set_css_text("border-top-left-radius: 4px; columns: 2; text-underline-offset: 1px; colour: red");

    assert_eq!(style.length(), 3);
    assert_eq!(style.item(0), Some("border-top-left-radius"));
    assert_eq!(style.get_property_value("columns"), "2");
}

#[test]
fn test_rule_declarations_come_from_the_parsed_block() {
    let mut sheet = StyleSheet::new();
    sheet.insert_rule(".a { color: red; width: 1px !important; nope: 1 }", 0).unwrap();
    let rule = sheet.rule(&RulePath::top(0)).and_then(CssRule::as_style).unwrap();

    assert_eq!(rule.style.length(), 2);
    assert_eq!(rule.style.get_property_priority("width"), "important");
    assert_eq!(rule.css_text(), ".a { color: red; width: 1px !important; }");
}
