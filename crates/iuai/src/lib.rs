//! iuai
//!
//! Declarative element construction for an arena DOM.
//!
//! # Example
//! ```rust,ignore
//! use iuai::{elem, AttrMap, Page};
//!
//! let mut page = Page::new();
//! let hint = page.ref_elem("p");
//! let input = elem!(page, "input", AttrMap::new().with("aria-describedby", hint.id())).value;
//! let text = elem!(page, (hint.tag(), hint.id()), "Required").value;
//! let form = elem!(page, "form", AttrMap::new(), input, text).value;
//! page.style(".error", &AttrMap::from([("color", "red !important")]));
//! ```

mod args;
mod attribute;
mod builder;
mod component;
mod config;
mod error;
mod events;
mod lookup;
mod page;
mod reference;
mod sheet;
pub mod style;
mod value;

pub use args::TagLike;
pub use builder::Built;
pub use component::{Component, component};
pub use config::{Config, RefSelector, TagMismatch};
pub use error::{BuildError, Issue, LookupError, Outcome, SheetError};
pub use events::Subscription;
pub use page::Page;
pub use reference::RefHandle;
pub use value::{AttrMap, Value};

pub use iuai_css::{CssRule, RulePath};
pub use iuai_dom::{Document, Event, NodeId};

// Re-export sub-crates for advanced usage
pub use iuai_css as css;
pub use iuai_dom as dom;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// The empty tag: `elem(FRAGMENT, ...)` builds a document fragment
pub const FRAGMENT: &str = "";

/// Variadic `Page::elem`.
///
/// `elem!(page, tag, args...)` converts each argument with `Value::from`.
#[macro_export]
macro_rules! elem {
    ($page:expr, $tag:expr $(, $arg:expr)* $(,)?) => {
        $page.elem($tag, &[$($crate::Value::from($arg)),*])
    };
}
