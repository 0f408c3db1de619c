//! Reference handles
//!
//! A [`RefHandle`] names an element before it exists. Its selector can be
//! embedded in attributes (`aria-describedby`, `for`) and the live node is
//! fetched later through [`RefHandle::resolve`].

use std::fmt;
use std::rc::Rc;

use iuai_dom::NodeId;

use crate::{LookupError, Page, RefSelector};

/// Immutable forward reference to an element
#[derive(Clone)]
pub struct RefHandle(Rc<RefData>);

struct RefData {
    id: String,
    tag: String,
    selector: String,
}

impl RefHandle {
    pub(crate) fn new(id: String, tag: &str, form: RefSelector) -> Self {
        let selector = match form {
            RefSelector::TagAndId if !tag.is_empty() => format!("{tag}#{id}"),
            _ => format!("#{id}"),
        };
        Self(Rc::new(RefData {
            id,
            tag: tag.to_string(),
            selector,
        }))
    }

    pub fn id(&self) -> &str {
        &self.0.id
    }

    /// Expected tag; empty when any tag is accepted
    pub fn tag(&self) -> &str {
        &self.0.tag
    }

    pub fn selector(&self) -> &str {
        &self.0.selector
    }

    /// Look the element up now
    pub fn resolve(&self, page: &Page) -> Result<NodeId, LookupError> {
        let tag = Some(self.tag()).filter(|t| !t.is_empty());
        page.get_elem(self.id(), tag)
    }
}

impl fmt::Display for RefHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.selector())
    }
}

impl fmt::Debug for RefHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RefHandle")
            .field("id", &self.0.id)
            .field("tag", &self.0.tag)
            .field("selector", &self.0.selector)
            .finish()
    }
}

impl PartialEq for RefHandle {
    fn eq(&self, other: &Self) -> bool {
        self.0.id == other.0.id && self.0.tag == other.0.tag
    }
}

impl Eq for RefHandle {}

/// Compact base-36 rendering of the reference counter
pub(crate) fn to_base36(mut n: u64) -> String {
    const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    if n == 0 {
        return "0".to_string();
    }
    let mut digits = Vec::new();
    while n > 0 {
        digits.push(DIGITS[(n % 36) as usize] as char);
        n /= 36;
    }
    digits.iter().rev().collect()
}

impl Page {
    /// Allocate a fresh id and return a handle for a future `tag` element
    pub fn ref_elem(&mut self, tag: &str) -> RefHandle {
        let id = format!("{}{}", self.config().ref_prefix, to_base36(self.next_ref));
        self.next_ref += 1;
        let handle = RefHandle::new(id, tag, self.config().ref_selector);
        tracing::debug!("Allocated reference {}", handle);
        handle
    }
}
