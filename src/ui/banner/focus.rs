// SPDX-License-Identifier: MPL-2.0
//! Focus vocabulary shared between the banner and its rendering tree.
//!
//! The banner never owns rendered elements. It holds [`ElementId`]s, which
//! only mean something when resolved through a [`ContentTree`], and it
//! receives focus notifications through listeners registered on a
//! [`FocusSource`].

/// Non-owning reference to a rendered element.
///
/// An id outlives the element it names; queries on a removed element
/// simply fail, even after its slot is reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId {
    pub(crate) index: usize,
    pub(crate) generation: u32,
}

/// Which side of a subtree boundary focus crossed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FocusKind {
    /// Focus landed on an element inside the subtree.
    Entered,
    /// Focus left an element inside the subtree.
    Left,
}

/// Handle returned by [`FocusSource::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerHandle(pub(crate) u64);

/// A focus notification delivered to one listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FocusEvent {
    /// Listener this event is addressed to.
    pub listener: ListenerHandle,
    pub kind: FocusKind,
    /// For [`FocusKind::Left`], the element receiving focus; for
    /// [`FocusKind::Entered`], the element that lost it. `None` when focus
    /// moved to or came from nothing (e.g. another window).
    pub related: Option<ElementId>,
}

/// Read-only queries the banner runs against the rendered tree.
pub trait ContentTree {
    /// Whether the element is still part of the tree.
    fn is_attached(&self, element: ElementId) -> bool;

    /// Whether `element` is `ancestor` or one of its descendants.
    fn contains(&self, ancestor: ElementId, element: ElementId) -> bool;

    /// First link-like focusable descendant of `within`, in document order.
    fn first_link(&self, within: ElementId) -> Option<ElementId>;
}

/// Capability to observe focus crossing the boundary of a subtree.
pub trait FocusSource {
    /// Registers interest in `kind` notifications scoped to `target`'s
    /// subtree.
    fn subscribe(&mut self, target: ElementId, kind: FocusKind) -> ListenerHandle;

    /// Removes a listener. Returns whether it was registered.
    fn unsubscribe(&mut self, handle: ListenerHandle) -> bool;
}
