//! Page - The document plus the state `elem`, `style` and `ref_elem` share

use iuai_dom::{Document, NodeId};

use crate::args::{TagLike, resolve_args};
use crate::builder::{append_children, create_elem};
use crate::{BuildError, Built, Config, Issue, Outcome, Value};

/// A document and its builder state
pub struct Page {
    pub document: Document,
    pub(crate) config: Config,
    /// `<style>` element owning the page stylesheet, once created
    pub(crate) style_element: Option<NodeId>,
    /// Next reference number
    pub(crate) next_ref: u64,
}

impl Page {
    /// Create a page with the default configuration
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// Create a page with `config`.
    ///
    /// An invalid `ref_prefix` falls back to the default one.
    pub fn with_config(mut config: Config) -> Self {
        if let Err(e) = config.validate() {
            let fallback = Config::default().ref_prefix;
            tracing::warn!("{:#}; using `{}` instead", e, fallback);
            config.ref_prefix = fallback;
        }
        tracing::debug!("Creating page {}", config.url);
        Self {
            document: Document::new(&config.url),
            config,
            style_element: None,
            next_ref: 0,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Build an element, a fragment, or render a component.
    ///
    /// `args` are the positionals after the tag: an attribute map, a child
    /// list, a single text, or an attribute map followed by children.
    /// Attribute and child failures are reported as issues while the rest
    /// of the element is still built; a failure to create the element at
    /// all yields [`Built::Failed`].
    pub fn elem(&mut self, tag: impl Into<TagLike>, args: &[Value]) -> Outcome<Built> {
        let tag = tag.into();
        let Some((name, id)) = tag.tag_and_id() else {
            return match &tag {
                TagLike::Component(render) => self.render_component(render, args),
                _ => Outcome::new(Built::Undefined),
            };
        };

        let resolved = resolve_args(id, args);
        let mut issues = Vec::new();
        let tree = &mut self.document.tree;
        let node = match create_elem(tree, name, &resolved.attributes, &mut issues) {
            Ok(node) => node,
            Err(e) => {
                tracing::error!("Failed to build <{}>: {}", name, e);
                issues.push(Issue::Build(BuildError::CreateElement {
                    tag: name.to_string(),
                    source: e,
                }));
                return Outcome::with_issues(Built::Failed, issues);
            }
        };
        append_children(tree, node, resolved.children, &mut issues);
        Outcome::with_issues(Built::Node(node), issues)
    }

    /// Append a built node to `<body>`
    pub fn mount(&mut self, node: NodeId) -> iuai_dom::DomResult<NodeId> {
        let body = self.document.body();
        self.document.tree.append_child(body, node)
    }

    /// Serialized `<body>` contents
    pub fn body_html(&self) -> String {
        self.document.inner_html(self.document.body())
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Page {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Page")
            .field("url", &self.document.url())
            .field("config", &self.config)
            .field("style_element", &self.style_element)
            .field("next_ref", &self.next_ref)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AttrMap;

    #[test]
    fn test_elem_with_text() {
        let mut page = Page::new();
        let built = page.elem("p", &[Value::from("hello")]);
        assert!(built.is_clean());
        let p = built.value.node().unwrap();
        assert_eq!(page.document.tree.tag_name(p), Some("p"));
        assert_eq!(page.document.tree.text_content(p), "hello");
    }

    #[test]
    fn test_descriptor_sets_id() {
        let mut page = Page::new();
        let div = page.elem(("div", "main"), &[]).value.node().unwrap();
        assert_eq!(page.document.tree.get_attribute(div, "id").as_deref(), Some("main"));
    }

    #[test]
    fn test_invalid_tag_is_failed() {
        let mut page = Page::new();
        let built = page.elem("not a tag", &[]);
        assert_eq!(built.value, Built::Failed);
        assert!(matches!(built.issues[0], Issue::Build(BuildError::CreateElement { .. })));
    }

    #[test]
    fn test_mount_and_serialize() {
        let mut page = Page::new();
        let attrs = AttrMap::new().with("className", "note");
        let p = page.elem("p", &[Value::from(attrs), Value::from("hi")]).value.node().unwrap();
        page.mount(p).unwrap();
        assert_eq!(page.body_html(), "<p class=\"note\">hi</p>");
    }
}
