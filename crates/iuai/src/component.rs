//! Component delegation
//!
//! A component is a render function. `elem(component, attrs, children...)`
//! calls it with one props map: `{children: [children...], ...attrs}`.

use std::rc::Rc;

use crate::{AttrMap, BuildError, Built, Issue, Outcome, Page, Value};

/// Render function invoked in place of element construction
pub type Component = Rc<dyn Fn(&mut Page, AttrMap) -> anyhow::Result<Value>>;

/// Wrap a closure as a [`Component`]
pub fn component<F>(f: F) -> Component
where
    F: Fn(&mut Page, AttrMap) -> anyhow::Result<Value> + 'static,
{
    Rc::new(f)
}

/// Props passed to a component; attribute entries override `children`
pub(crate) fn props(args: &[Value]) -> AttrMap {
    let children = args.get(1..).unwrap_or_default().to_vec();
    let mut props = AttrMap::new().with("children", Value::List(children));
    if let Some(Value::Map(attributes)) = args.first() {
        for (name, value) in attributes.iter() {
            props.insert(name, value.clone());
        }
    }
    props
}

impl Page {
    pub(crate) fn render_component(&mut self, render: &Component, args: &[Value]) -> Outcome<Built> {
        match render(self, props(args)) {
            Ok(Value::Node(node)) => Outcome::new(Built::Node(node)),
            Ok(value) => Outcome::new(Built::Value(value)),
            Err(e) => {
                tracing::error!("Component failed: {:#}", e);
                Outcome::with_issues(Built::Undefined, vec![Issue::Build(BuildError::Component(format!("{e:#}")))])
            }
        }
    }
}
