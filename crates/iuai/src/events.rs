//! Event subscriptions

use std::rc::Rc;

use iuai_dom::{DomResult, Event, ListenerId, NodeId};

use crate::Page;

/// Handle returned by [`Page::event`]; cancel it to remove the listener
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use = "the listener stays registered until the subscription is cancelled"]
pub struct Subscription {
    node: NodeId,
    listener: ListenerId,
}

impl Subscription {
    pub fn node(&self) -> NodeId {
        self.node
    }

    /// Remove the listener; false if it was already gone
    pub fn cancel(self, page: &mut Page) -> bool {
        page.document.tree.remove_event_listener(self.node, self.listener)
    }
}

impl Page {
    /// Listen for `kind` events on an element
    pub fn event(&mut self, node: NodeId, kind: &str, handler: impl Fn(&Event) + 'static) -> DomResult<Subscription> {
        let listener = self.document.tree.add_event_listener(node, kind, Rc::new(handler))?;
        Ok(Subscription { node, listener })
    }

    /// Dispatch `kind` at `node`; returns the number of handlers run
    pub fn dispatch(&self, node: NodeId, kind: &str) -> DomResult<usize> {
        self.document.tree.dispatch_event(node, kind)
    }
}
