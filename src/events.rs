//! Delegated event listeners.
//!
//! A listener lives on a stable container and sees events from any
//! descendant, including children created after it was registered. Each
//! registration carries a key; registering the same key on the same container
//! again replaces the old handler, so rebinding never stacks duplicates.

use std::fmt;
use std::rc::Rc;

use crate::dom::{Dom, NodeId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Click,
}

/// Handler invoked as `(dom, container, target)`.
pub type Handler = Rc<dyn Fn(&mut Dom, NodeId, NodeId)>;

struct Registration {
    container: NodeId,
    event: EventKind,
    key: String,
    handler: Handler,
}

/// All delegated listeners registered on a page.
#[derive(Default)]
pub struct ListenerRegistry {
    registrations: Vec<Registration>,
}

impl ListenerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `handler` under `key`. Returns `false` if it replaced an
    /// existing registration with the same container, event, and key.
    pub fn listen<F>(&mut self, container: NodeId, event: EventKind, key: &str, handler: F) -> bool
    where
        F: Fn(&mut Dom, NodeId, NodeId) + 'static,
    {
        let handler: Handler = Rc::new(handler);
        if let Some(existing) = self
            .registrations
            .iter_mut()
            .find(|r| r.container == container && r.event == event && r.key == key)
        {
            existing.handler = handler;
            return false;
        }

        self.registrations.push(Registration {
            container,
            event,
            key: key.to_string(),
            handler,
        });
        true
    }

    /// Remove a registration. Returns whether one existed.
    pub fn unlisten(&mut self, container: NodeId, event: EventKind, key: &str) -> bool {
        let before = self.registrations.len();
        self.registrations
            .retain(|r| !(r.container == container && r.event == event && r.key == key));
        self.registrations.len() != before
    }

    /// Number of listeners for `event` on `container`.
    pub fn count_on(&self, container: NodeId, event: EventKind) -> usize {
        self.registrations
            .iter()
            .filter(|r| r.container == container && r.event == event)
            .count()
    }

    pub fn len(&self) -> usize {
        self.registrations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registrations.is_empty()
    }

    fn handlers_on(&self, container: NodeId, event: EventKind) -> Vec<Handler> {
        self.registrations
            .iter()
            .filter(|r| r.container == container && r.event == event)
            .map(|r| Rc::clone(&r.handler))
            .collect()
    }

    /// Bubble `event` from `target` to the root, calling each container's
    /// handlers in registration order. Returns how many handlers ran.
    ///
    /// The propagation path is fixed before any handler runs.
    pub fn dispatch(&self, dom: &mut Dom, event: EventKind, target: NodeId) -> usize {
        let path: Vec<_> = dom.ancestors(target).collect();
        let mut invoked = 0;
        for container in path {
            for handler in self.handlers_on(container, event) {
                handler(dom, container, target);
                invoked += 1;
            }
        }
        invoked
    }
}

impl fmt::Debug for ListenerRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(
                self.registrations
                    .iter()
                    .map(|r| (r.container, r.event, r.key.as_str())),
            )
            .finish()
    }
}
