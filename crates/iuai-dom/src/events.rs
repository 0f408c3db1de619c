//! DOM Events
//!
//! Listener registration and bubbling dispatch. Handlers observe events;
//! they cannot mutate the tree while it is being dispatched.

use std::rc::Rc;

use crate::{DomError, DomResult, DomTree, NodeId};

/// Event callback
pub type EventHandler = Rc<dyn Fn(&Event)>;

/// Listener registration ID
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(pub(crate) u32);

/// Event passed to handlers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    /// Event type (`click`, `input`, ...)
    pub kind: String,
    /// Node the event was dispatched at
    pub target: NodeId,
    /// Node whose handler is running
    pub current_target: NodeId,
}

pub(crate) struct Listener {
    pub(crate) id: ListenerId,
    pub(crate) kind: String,
    pub(crate) handler: EventHandler,
}

impl DomTree {
    /// Register a listener on an element
    pub fn add_event_listener(&mut self, node: NodeId, kind: &str, handler: EventHandler) -> DomResult<ListenerId> {
        let id = ListenerId(self.next_listener);
        let element = self.element_mut(node)?;
        element.listeners.push(Listener {
            id,
            kind: kind.to_string(),
            handler,
        });
        self.next_listener += 1;
        tracing::debug!("Added {} listener {:?} on {:?}", kind, id, node);
        Ok(id)
    }

    /// Remove a listener; returns false if it was not registered
    pub fn remove_event_listener(&mut self, node: NodeId, id: ListenerId) -> bool {
        let Ok(element) = self.element_mut(node) else {
            return false;
        };
        let before = element.listeners.len();
        element.listeners.retain(|l| l.id != id);
        element.listeners.len() != before
    }

    /// Number of listeners registered on an element
    pub fn listener_count(&self, node: NodeId) -> usize {
        self.element(node).map(|e| e.listeners.len()).unwrap_or(0)
    }

    /// Set or clear the `on<kind>` property handler
    pub(crate) fn set_handler(&mut self, node: NodeId, kind: &str, handler: Option<EventHandler>) -> DomResult<()> {
        let element = self.element_mut(node)?;
        element.handlers.retain(|(k, _)| k != kind);
        if let Some(handler) = handler {
            element.handlers.push((kind.to_string(), handler));
        }
        Ok(())
    }

    pub(crate) fn handler(&self, node: NodeId, kind: &str) -> Option<EventHandler> {
        let element = self.element(node).ok()?;
        element.handlers.iter().find(|(k, _)| k == kind).map(|(_, h)| h.clone())
    }

    /// Dispatch an event at `target`, bubbling to the root.
    ///
    /// Listeners run in registration order, then the property handler.
    /// Returns the number of handlers invoked.
    pub fn dispatch_event(&self, target: NodeId, kind: &str) -> DomResult<usize> {
        if self.element(target).is_err() {
            return Err(DomError::InvalidNodeType("element"));
        }

        let mut path = Vec::new();
        let mut current = target;
        while current.is_valid() {
            if let Ok(element) = self.element(current) {
                let handlers: Vec<EventHandler> = element
                    .listeners
                    .iter()
                    .filter(|l| l.kind == kind)
                    .map(|l| l.handler.clone())
                    .chain(self.handler(current, kind))
                    .collect();
                path.push((current, handlers));
            }
            current = self.parent(current);
        }

        let mut invoked = 0;
        for (node, handlers) in path {
            let event = Event {
                kind: kind.to_string(),
                target,
                current_target: node,
            };
            for handler in handlers {
                handler(&event);
                invoked += 1;
            }
        }
        Ok(invoked)
    }
}
