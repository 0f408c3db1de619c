//! Comprehensive tests for iuai
//!
//! Element construction, style rules, lookups, references and components
//! through the public `Page` API.

use std::cell::Cell;
use std::rc::Rc;

use iuai::dom::PropValue;
use iuai::{
    AttrMap, BuildError, Built, CssRule, Issue, LookupError, Page, TagLike, Value, FRAGMENT, component, elem,
};
use serde_json::json;

fn map(value: serde_json::Value) -> AttrMap {
    match Value::from(value) {
        Value::Map(map) => map,
        other => panic!("expected an object, got {:?}", other),
    }
}

fn node(built: Built) -> iuai::NodeId {
    built.node().expect("expected a node")
}

// ============================================================================
// ELEMENT CONSTRUCTION
// ============================================================================

#[test]
fn test_direct_properties_read_back() {
    let mut page = Page::new();
    let attrs = map(json!({
        "id": "email",
        "className": "field wide",
        "title": "Email",
        "placeholder": "you@example.com",
        "value": "x",
        "disabled": true,
        "tabIndex": 2
    }));
    let built = page.elem("input", &[Value::from(attrs)]);
    assert!(built.is_clean());
    let input = node(built.value);

    let tree = &page.document.tree;
    assert_eq!(tree.get_property(input, "id").unwrap(), PropValue::Str("email".into()));
    assert_eq!(tree.get_property(input, "className").unwrap(), PropValue::Str("field wide".into()));
    assert_eq!(tree.get_property(input, "title").unwrap(), PropValue::Str("Email".into()));
    assert_eq!(tree.get_property(input, "placeholder").unwrap(), PropValue::Str("you@example.com".into()));
    assert_eq!(tree.get_property(input, "value").unwrap(), PropValue::Str("x".into()));
    assert_eq!(tree.get_property(input, "disabled").unwrap(), PropValue::Bool(true));
    assert_eq!(tree.get_property(input, "tabIndex").unwrap(), PropValue::Number(2.0));
}

#[test]
fn test_inline_style_read_back() {
    let mut page = Page::new();
    let attrs = map(json!({
        "style": {
            "color": "red",
            "backgroundColor": "#fff",
            "--gap": "4px",
            "fontWeight": "bold !important"
        }
    }));
    let built = page.elem("div", &[Value::from(attrs)]);
    assert!(built.is_clean());
    let style = page.document.tree.style(node(built.value)).unwrap();

    assert_eq!(style.get_property_value("color"), "red");
    assert_eq!(style.get_property_priority("color"), "");
    assert_eq!(style.field("backgroundColor"), "#fff");
    assert_eq!(style.get_property_value("--gap"), "4px");
    assert_eq!(style.get_property_value("font-weight"), "bold");
    assert_eq!(style.get_property_priority("font-weight"), "important");
}

#[test]
fn test_children_are_flattened_in_order() {
    let mut page = Page::new();
    let strong = node(page.elem("strong", &[Value::from("b")]).value);
    let children = vec![
        Value::from("a"),
        Value::Null,
        Value::from(vec![Value::from(false), Value::Node(strong), Value::from(vec![Value::from(3)])]),
        Value::func(|_| {}),
        Value::from(""),
        Value::from(true),
        Value::from("c"),
    ];
    let built = page.elem("p", &[Value::from(children)]);
    assert!(built.is_clean());
    let p = node(built.value);

    let tree = &page.document.tree;
    let kids = tree.child_nodes(p);
    assert_eq!(kids.len(), 4);
    assert_eq!(kids[1], strong);
    let texts: Vec<String> = kids.iter().map(|&k| tree.text_content(k)).collect();
    assert_eq!(texts, vec!["a", "b", "3", "c"]);
}

#[test]
fn test_fragment_for_empty_tag() {
    let mut page = Page::new();
    let frag = node(page.elem(FRAGMENT, &[Value::from(vec!["x", "y"])]).value);
    assert!(page.document.tree.is_fragment(frag));
    assert_eq!(page.document.tree.tag_name(frag), None);

    page.mount(frag).unwrap();
    assert_eq!(page.body_html(), "xy");
    assert!(page.document.tree.child_nodes(frag).is_empty());
}

#[test]
fn test_elem_macro() {
    let mut page = Page::new();
    let one = elem!(page, "li", "one").value;
    let two = elem!(page, "li", "two").value;
    let list = elem!(page, "ul", AttrMap::new().with("className", "menu"), one, two).value;
    page.mount(node(list)).unwrap();
    assert_eq!(page.body_html(), "<ul class=\"menu\"><li>one</li><li>two</li></ul>");
}

#[test]
fn test_event_handler_attribute() {
    let mut page = Page::new();
    let clicks = Rc::new(Cell::new(0));
    let counter = clicks.clone();
    let attrs = AttrMap::new().with("onclick", Value::func(move |_| counter.set(counter.get() + 1)));
    let button = node(page.elem("button", &[Value::from(attrs), Value::from("Go")]).value);

    page.dispatch(button, "click").unwrap();
    assert_eq!(clicks.get(), 1);
}

// ============================================================================
// STYLESHEET
// ============================================================================

#[test]
fn test_style_appends_rules() {
    let mut page = Page::new();
    let first = page.style(".a", &map(json!({"color": "red"})));
    assert!(first.is_clean());
    let first = first.value.unwrap();

    let rule = page.rule(&first).and_then(CssRule::as_style).unwrap();
    assert_eq!(rule.selector_text(), ".a");
    assert_eq!(rule.style.get_property_value("color"), "red");
    assert_eq!(page.sheet().unwrap().len(), 1);

    let second = page.style(".b", &map(json!({"margin": "0 auto"}))).value.unwrap();
    assert_eq!(page.sheet().unwrap().len(), 2);
    assert_eq!(page.rule(&second).unwrap().css_text(), ".b { margin: 0 auto; }");
    assert_eq!(page.rule(&first).unwrap().css_text(), ".a { color: red; }");
}

#[test]
fn test_media_rule() {
    let mut page = Page::new();
    let outcome = page.media("(min-width: 600px)", &map(json!({".b": {"display": "none"}})));
    assert!(outcome.is_clean());
    let path = outcome.value.unwrap();

    let media = page.rule(&path).and_then(CssRule::as_media).unwrap();
    assert_eq!(media.condition_text(), "(min-width: 600px)");
    assert_eq!(media.css_rules().len(), 1);
    let nested = media.css_rules().item(0).and_then(CssRule::as_style).unwrap();
    assert_eq!(nested.selector_text(), ".b");
    assert_eq!(nested.style.get_property_value("display"), "none");
}

#[test]
fn test_css_serializes_without_inserting() {
    let page = Page::new();
    let css = page.css("a:hover", &map(json!({"textDecoration": "underline"})));
    assert_eq!(css.value, "a:hover { text-decoration: underline; }");
    assert!(page.sheet().is_none());
}

// ============================================================================
// LOOKUP & REFERENCES
// ============================================================================

#[test]
fn test_get_elem_conditions() {
    let mut page = Page::new();
    let div = node(page.elem(("div", "real-id"), &[]).value);
    page.mount(div).unwrap();

    assert_eq!(page.get_elem("missing-id", None), Err(LookupError::NotFound));
    assert!(matches!(page.get_elem("real-id", Some("span")), Err(LookupError::TagMismatch { .. })));
    assert_eq!(page.get_elem("real-id", Some("div")), Ok(div));
}

#[test]
fn test_refs_are_distinct() {
    let mut page = Page::new();
    let a = page.ref_elem("div");
    let b = page.ref_elem("div");
    assert_ne!(a.id(), b.id());
    assert_ne!(a.selector(), b.selector());
    assert_ne!(a, b);
}

#[test]
fn test_ref_round_trip() {
    let mut page = Page::new();
    let r = page.ref_elem("section");
    assert_eq!(r.to_string(), r.selector());
    assert_eq!(r.selector(), format!("section#{}", r.id()));
    assert_eq!(r.resolve(&page), Err(LookupError::NotFound));

    let built = page.elem(&r, &[Value::from("content")]);
    let section = node(built.value);
    assert_eq!(page.document.tree.tag_name(section), Some("section"));
    assert_eq!(r.resolve(&page), Err(LookupError::NotFound));

    page.mount(section).unwrap();
    assert_eq!(r.resolve(&page), Ok(section));
    assert_eq!(page.query_elem(r.selector(), Some("section")), Ok(section));
}

#[test]
fn test_ref_selector_in_attribute() {
    let mut page = Page::new();
    let hint = page.ref_elem("p");
    let input = node(page.elem("input", &[Value::from(AttrMap::new().with("data-hint", &hint))]).value);
    assert_eq!(
        page.document.tree.get_attribute(input, "data-hint").as_deref(),
        Some(hint.selector())
    );
}

// ============================================================================
// COMPONENTS
// ============================================================================

#[test]
fn test_component_receives_props() {
    let mut page = Page::new();
    let card = component(|page: &mut Page, props: AttrMap| {
        let title = props.get("title").cloned().unwrap_or_default();
        let children = props.get("children").cloned().unwrap_or_default();
        let heading = page.elem("h2", &[title]).value;
        let attrs = AttrMap::new().with("className", "card");
        Ok(page.elem("section", &[Value::from(attrs), Value::from(heading), children]).value.into())
    });

    let built = page.elem(&card, &[Value::from(AttrMap::new().with("title", "Hi")), Value::from("body")]);
    assert!(built.is_clean());
    let section = node(built.value);
    page.mount(section).unwrap();
    assert_eq!(page.body_html(), "<section class=\"card\"><h2>Hi</h2>body</section>");
}

#[test]
fn test_component_error_is_undefined() {
    let mut page = Page::new();
    let broken = component(|_, _| Err(anyhow::anyhow!("boom")));
    let built = page.elem(TagLike::Component(broken), &[]);
    assert_eq!(built.value, Built::Undefined);
    assert!(matches!(&built.issues[0], Issue::Build(BuildError::Component(msg)) if msg.contains("boom")));
}

#[test]
fn test_component_may_return_any_value() {
    let mut page = Page::new();
    let answer = component(|_, _| Ok(Value::from(42)));
    assert_eq!(page.elem(&answer, &[]).value, Built::Value(Value::Number(42.0)));
}
