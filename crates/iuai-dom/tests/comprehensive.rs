//! Comprehensive tests for iuai-dom
//!
//! Tree structure, lookups, properties and events working together.

use std::cell::Cell;
use std::rc::Rc;

use iuai_dom::{Document, DomError, Event, PropValue};

// ============================================================================
// TREE & LOOKUP
// ============================================================================

#[test]
fn test_lookup_after_insertion() {
    let mut doc = Document::default();
    let body = doc.body();
    let tree = doc.tree_mut();
    let section = tree.create_element("section").unwrap();
    let heading = tree.create_element("h1").unwrap();
    tree.set_attribute(section, "id", "intro").unwrap();
    tree.append_child(section, heading).unwrap();
    tree.append_child(body, section).unwrap();

    assert_eq!(doc.get_element_by_id("intro"), Some(section));
    assert_eq!(doc.tree().first_element_child(section), Some(heading));
    assert_eq!(doc.query_selector("#intro > h1").unwrap(), Some(heading));
}

#[test]
fn test_removed_element_is_not_found() {
    let mut doc = Document::default();
    let body = doc.body();
    let div = doc.tree.create_element("div").unwrap();
    doc.tree.set_attribute(div, "id", "gone").unwrap();
    doc.tree.append_child(body, div).unwrap();
    doc.tree.remove_child(body, div).unwrap();

    assert_eq!(doc.get_element_by_id("gone"), None);
    assert_eq!(doc.query_selector("#gone").unwrap(), None);
}

#[test]
fn test_first_element_child_skips_text() {
    let mut doc = Document::default();
    let tree = doc.tree_mut();
    let div = tree.create_element("div").unwrap();
    let text = tree.create_text("lead");
    let span = tree.create_element("span").unwrap();
    tree.append_child(div, text).unwrap();
    tree.append_child(div, span).unwrap();

    assert_eq!(tree.first_element_child(div), Some(span));
}

#[test]
fn test_invalid_selector_is_an_error() {
    let doc = Document::default();
    assert!(matches!(doc.query_selector("div:hover"), Err(DomError::Syntax { .. })));
}

#[test]
fn test_fragment_serializes_children_only() {
    let mut doc = Document::default();
    let tree = doc.tree_mut();
    let frag = tree.create_fragment();
    let a = tree.create_element("i").unwrap();
    let b = tree.create_text("x");
    tree.append_child(frag, a).unwrap();
    tree.append_child(frag, b).unwrap();

    assert_eq!(doc.outer_html(frag), "<i></i>x");
}

// ============================================================================
// PROPERTIES & EVENTS
// ============================================================================

#[test]
fn test_onclick_property_runs_on_dispatch() {
    let mut doc = Document::default();
    let button = doc.tree.create_element("button").unwrap();
    let clicks = Rc::new(Cell::new(0));
    let counter = clicks.clone();
    doc.tree
        .set_property(button, "onclick", PropValue::Handler(Rc::new(move |_: &Event| counter.set(counter.get() + 1))))
        .unwrap();

    doc.tree.dispatch_event(button, "click").unwrap();
    doc.tree.dispatch_event(button, "click").unwrap();
    assert_eq!(clicks.get(), 2);

    doc.tree.set_property(button, "onclick", PropValue::Null).unwrap();
    assert_eq!(doc.tree.dispatch_event(button, "click").unwrap(), 0);
}

#[test]
fn test_dispatch_on_text_node_fails() {
    let mut doc = Document::default();
    let text = doc.tree.create_text("t");
    assert!(doc.tree.dispatch_event(text, "click").is_err());
}

#[test]
fn test_html_for_reflects_for_attribute() {
    let mut doc = Document::default();
    let label = doc.tree.create_element("label").unwrap();
    doc.tree.set_property(label, "htmlFor", PropValue::Str("name".into())).unwrap();
    assert_eq!(doc.tree.get_attribute(label, "for").as_deref(), Some("name"));
    assert_eq!(doc.tree.get_property(label, "htmlFor").unwrap(), PropValue::Str("name".into()));
}
