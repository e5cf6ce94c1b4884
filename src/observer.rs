//! Scroll-reveal observer seam.
//!
//! The page's reveal animation is owned by the host. The binder only tells it
//! about freshly generated elements that should animate in.

use crate::dom::{Dom, NodeId};

pub trait RevealObserver {
    fn observe(&mut self, dom: &Dom, element: NodeId);
}

/// Observer for hosts with no reveal animation (static rendering, CLI).
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl RevealObserver for NoopObserver {
    fn observe(&mut self, _dom: &Dom, _element: NodeId) {}
}

/// Remembers every observed element, in order.
#[derive(Debug, Default, Clone)]
pub struct RecordingObserver {
    pub observed: Vec<NodeId>,
}

impl RevealObserver for RecordingObserver {
    fn observe(&mut self, _dom: &Dom, element: NodeId) {
        self.observed.push(element);
    }
}

impl<T: RevealObserver + ?Sized> RevealObserver for &mut T {
    fn observe(&mut self, dom: &Dom, element: NodeId) {
        (**self).observe(dom, element);
    }
}
