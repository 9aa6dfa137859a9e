// SPDX-License-Identifier: MPL-2.0
//! Headless element tree.
//!
//! `ElementTree` is a small arena standing in for the host's rendering tree:
//! it tracks which element holds focus, answers containment queries, and
//! turns focus moves into [`FocusEvent`]s for registered listeners, with
//! "left" notifications delivered before "entered" ones.

use super::focus::{ContentTree, ElementId, FocusEvent, FocusKind, FocusSource, ListenerHandle};

/// What an element is. Only links, buttons and inputs can take focus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    Container,
    Text(String),
    Link(String),
    Button(String),
    Input,
}

impl NodeKind {
    #[must_use]
    pub fn is_focusable(&self) -> bool {
        matches!(self, NodeKind::Link(_) | NodeKind::Button(_) | NodeKind::Input)
    }
}

/// Declarative description of caller-supplied content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeSpec {
    Text(String),
    Link(String),
    Button(String),
    Input,
    Group(Vec<NodeSpec>),
}

#[derive(Debug)]
struct Node {
    kind: NodeKind,
    generation: u32,
    parent: Option<ElementId>,
    children: Vec<ElementId>,
    attached: bool,
}

#[derive(Debug, Clone, Copy)]
struct Listener {
    handle: ListenerHandle,
    target: ElementId,
    kind: FocusKind,
}

/// Arena of elements. Slots of removed subtrees are recycled; each reuse
/// bumps the slot's generation so older ids stop resolving.
#[derive(Debug)]
pub struct ElementTree {
    nodes: Vec<Node>,
    free: Vec<usize>,
    focused: Option<ElementId>,
    /// Element that held focus when the window lost it.
    suspended: Option<ElementId>,
    listeners: Vec<Listener>,
    next_handle: u64,
}

impl Default for ElementTree {
    fn default() -> Self {
        Self::new()
    }
}

impl ElementTree {
    /// Creates a tree holding only the document root.
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: vec![Node {
                kind: NodeKind::Container,
                generation: 0,
                parent: None,
                children: Vec::new(),
                attached: true,
            }],
            free: Vec::new(),
            focused: None,
            suspended: None,
            listeners: Vec::new(),
            next_handle: 0,
        }
    }

    #[must_use]
    pub fn document(&self) -> ElementId {
        ElementId {
            index: 0,
            generation: 0,
        }
    }

    /// Appends a new element under `parent`.
    ///
    /// Appending under a removed parent yields a detached element.
    pub fn append(&mut self, parent: ElementId, kind: NodeKind) -> ElementId {
        let attached = self.node(parent).is_some_and(|p| p.attached);
        let node = Node {
            kind,
            generation: 0,
            parent: attached.then_some(parent),
            children: Vec::new(),
            attached,
        };
        let id = match self.free.pop() {
            Some(index) => {
                let generation = self.nodes[index].generation;
                self.nodes[index] = Node { generation, ..node };
                ElementId { index, generation }
            }
            None => {
                self.nodes.push(node);
                ElementId {
                    index: self.nodes.len() - 1,
                    generation: 0,
                }
            }
        };
        if attached {
            if let Some(p) = self.node_mut(parent) {
                p.children.push(id);
            }
        }
        id
    }

    /// Appends the elements described by `spec` under `parent` and returns
    /// the outermost new element.
    pub fn append_spec(&mut self, parent: ElementId, spec: &NodeSpec) -> ElementId {
        match spec {
            NodeSpec::Text(text) => self.append(parent, NodeKind::Text(text.clone())),
            NodeSpec::Link(label) => self.append(parent, NodeKind::Link(label.clone())),
            NodeSpec::Button(label) => self.append(parent, NodeKind::Button(label.clone())),
            NodeSpec::Input => self.append(parent, NodeKind::Input),
            NodeSpec::Group(children) => {
                let group = self.append(parent, NodeKind::Container);
                for child in children {
                    self.append_spec(group, child);
                }
                group
            }
        }
    }

    /// Removes `element` and its subtree and recycles their slots. Focus
    /// inside it is dropped without notifications, as when a focused
    /// element is removed from a page.
    pub fn remove(&mut self, element: ElementId) {
        if element == self.document() || !self.is_attached(element) {
            return;
        }
        if self.focused.is_some_and(|f| self.contains(element, f)) {
            self.focused = None;
        }
        if self.suspended.is_some_and(|f| self.contains(element, f)) {
            self.suspended = None;
        }
        if let Some(parent) = self.node(element).and_then(|n| n.parent) {
            if let Some(p) = self.node_mut(parent) {
                p.children.retain(|c| *c != element);
            }
        }
        let mut stack = vec![element];
        while let Some(id) = stack.pop() {
            let Some(node) = self.node_mut(id) else {
                continue;
            };
            stack.append(&mut node.children);
            node.kind = NodeKind::Container;
            node.parent = None;
            node.attached = false;
            node.generation = node.generation.wrapping_add(1);
            self.free.push(id.index);
        }
    }

    #[must_use]
    pub fn kind(&self, element: ElementId) -> Option<&NodeKind> {
        self.node(element).map(|n| &n.kind)
    }

    #[must_use]
    pub fn children(&self, element: ElementId) -> &[ElementId] {
        self.node(element)
            .map(|n| n.children.as_slice())
            .unwrap_or_default()
    }

    #[must_use]
    pub fn focused(&self) -> Option<ElementId> {
        self.focused
    }

    /// Moves focus to `target` (`None` blurs everything) and returns the
    /// notifications owed to registered listeners.
    ///
    /// A detached or non-focusable target leaves focus unchanged.
    pub fn move_focus(&mut self, target: Option<ElementId>) -> Vec<FocusEvent> {
        if let Some(id) = target {
            let focusable = self
                .node(id)
                .is_some_and(|n| n.attached && n.kind.is_focusable());
            if !focusable {
                tracing::trace!(?id, "ignoring focus move to unfocusable element");
                return Vec::new();
            }
        }

        if target.is_some() {
            self.suspended = None;
        }
        let previous = self.focused;
        if previous == target {
            return Vec::new();
        }
        self.focused = target;

        let mut events = Vec::new();
        for kind in [FocusKind::Left, FocusKind::Entered] {
            let (inside, related) = match kind {
                FocusKind::Left => (previous, target),
                FocusKind::Entered => (target, previous),
            };
            let Some(inside) = inside else { continue };
            for listener in self.listeners.iter().filter(|l| l.kind == kind) {
                if self.contains(listener.target, inside) {
                    events.push(FocusEvent {
                        listener: listener.handle,
                        kind,
                        related,
                    });
                }
            }
        }
        events
    }

    /// The window lost focus: blurs the focused element and remembers it
    /// for [`resume_focus`](Self::resume_focus).
    pub fn suspend_focus(&mut self) -> Vec<FocusEvent> {
        let previous = self.focused;
        let events = self.move_focus(None);
        if previous.is_some() {
            self.suspended = previous;
        }
        events
    }

    /// The window regained focus: refocuses the element that held it
    /// before [`suspend_focus`](Self::suspend_focus), if it is still
    /// attached and nothing else took focus meanwhile.
    pub fn resume_focus(&mut self) -> Vec<FocusEvent> {
        match self.suspended.take() {
            Some(previous) if self.focused.is_none() => self.move_focus(Some(previous)),
            _ => Vec::new(),
        }
    }

    /// Number of registered focus listeners.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    fn node(&self, element: ElementId) -> Option<&Node> {
        self.nodes
            .get(element.index)
            .filter(|n| n.generation == element.generation)
    }

    fn node_mut(&mut self, element: ElementId) -> Option<&mut Node> {
        self.nodes
            .get_mut(element.index)
            .filter(|n| n.generation == element.generation)
    }

    fn first_link_under(&self, element: ElementId) -> Option<ElementId> {
        for child in self.children(element) {
            if matches!(self.kind(*child), Some(NodeKind::Link(_))) {
                return Some(*child);
            }
            if let Some(found) = self.first_link_under(*child) {
                return Some(found);
            }
        }
        None
    }
}

impl ContentTree for ElementTree {
    fn is_attached(&self, element: ElementId) -> bool {
        self.node(element).is_some_and(|n| n.attached)
    }

    fn contains(&self, ancestor: ElementId, element: ElementId) -> bool {
        if !self.is_attached(ancestor) || !self.is_attached(element) {
            return false;
        }
        let mut current = Some(element);
        while let Some(id) = current {
            if id == ancestor {
                return true;
            }
            current = self.node(id).and_then(|n| n.parent);
        }
        false
    }

    fn first_link(&self, within: ElementId) -> Option<ElementId> {
        if !self.is_attached(within) {
            return None;
        }
        self.first_link_under(within)
    }
}

impl FocusSource for ElementTree {
    fn subscribe(&mut self, target: ElementId, kind: FocusKind) -> ListenerHandle {
        let handle = ListenerHandle(self.next_handle);
        self.next_handle += 1;
        self.listeners.push(Listener {
            handle,
            target,
            kind,
        });
        handle
    }

    fn unsubscribe(&mut self, handle: ListenerHandle) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|l| l.handle != handle);
        self.listeners.len() < before
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> (ElementTree, ElementId, ElementId, ElementId, ElementId) {
        let mut tree = ElementTree::new();
        let doc = tree.document();
        let region = tree.append(doc, NodeKind::Container);
        let first = tree.append(region, NodeKind::Button("first".into()));
        let second = tree.append(region, NodeKind::Link("second".into()));
        let outside = tree.append(doc, NodeKind::Input);
        (tree, region, first, second, outside)
    }

    #[test]
    fn contains_is_inclusive_and_follows_ancestry() {
        let (tree, region, first, _, outside) = sample();
        assert!(tree.contains(region, region));
        assert!(tree.contains(region, first));
        assert!(!tree.contains(region, outside));
        assert!(!tree.contains(first, region));
    }

    #[test]
    fn first_link_uses_document_order() {
        let mut tree = ElementTree::new();
        let doc = tree.document();
        let region = tree.append(doc, NodeKind::Container);
        tree.append(region, NodeKind::Text("hello".into()));
        let nested = tree.append_spec(
            region,
            &NodeSpec::Group(vec![NodeSpec::Text("see".into()), NodeSpec::Link("a".into())]),
        );
        tree.append(region, NodeKind::Link("b".into()));

        let found = tree.first_link(region).expect("link expected");
        assert_eq!(tree.kind(found), Some(&NodeKind::Link("a".into())));
        assert!(tree.contains(nested, found));
    }

    #[test]
    fn first_link_excludes_the_search_root() {
        let mut tree = ElementTree::new();
        let link = tree.append(tree.document(), NodeKind::Link("self".into()));
        assert!(tree.first_link(link).is_none());
    }

    #[test]
    fn move_focus_reports_left_then_entered() {
        let (mut tree, region, first, _, outside) = sample();
        let left = tree.subscribe(region, FocusKind::Left);
        let entered = tree.subscribe(region, FocusKind::Entered);

        let events = tree.move_focus(Some(first));
        assert_eq!(
            events,
            vec![FocusEvent {
                listener: entered,
                kind: FocusKind::Entered,
                related: None,
            }]
        );

        let events = tree.move_focus(Some(outside));
        assert_eq!(
            events,
            vec![FocusEvent {
                listener: left,
                kind: FocusKind::Left,
                related: Some(outside),
            }]
        );
    }

    #[test]
    fn moving_within_subtree_reports_both_kinds() {
        let (mut tree, region, first, second, _) = sample();
        tree.subscribe(region, FocusKind::Left);
        tree.subscribe(region, FocusKind::Entered);
        tree.move_focus(Some(first));

        let kinds: Vec<FocusKind> = tree
            .move_focus(Some(second))
            .iter()
            .map(|e| e.kind)
            .collect();
        assert_eq!(kinds, vec![FocusKind::Left, FocusKind::Entered]);
    }

    #[test]
    fn unfocusable_target_is_ignored() {
        let (mut tree, region, first, _, _) = sample();
        tree.move_focus(Some(first));
        assert!(tree.move_focus(Some(region)).is_empty());
        assert_eq!(tree.focused(), Some(first));
    }

    #[test]
    fn unsubscribe_stops_notifications() {
        let (mut tree, region, first, _, _) = sample();
        let handle = tree.subscribe(region, FocusKind::Entered);
        assert!(tree.unsubscribe(handle));
        assert!(!tree.unsubscribe(handle));
        assert!(tree.move_focus(Some(first)).is_empty());
        assert_eq!(tree.listener_count(), 0);
    }

    #[test]
    fn resume_focus_restores_element_focused_before_suspend() {
        let (mut tree, region, first, _, _) = sample();
        let left = tree.subscribe(region, FocusKind::Left);
        let entered = tree.subscribe(region, FocusKind::Entered);
        tree.move_focus(Some(first));

        let events = tree.suspend_focus();
        assert_eq!(events.iter().map(|e| e.listener).collect::<Vec<_>>(), vec![left]);
        assert_eq!(tree.focused(), None);

        let events = tree.resume_focus();
        assert_eq!(
            events,
            vec![FocusEvent {
                listener: entered,
                kind: FocusKind::Entered,
                related: None,
            }]
        );
        assert_eq!(tree.focused(), Some(first));
        assert!(tree.resume_focus().is_empty());
    }

    #[test]
    fn resume_focus_skips_removed_or_superseded_elements() {
        let (mut tree, region, first, _, outside) = sample();
        tree.move_focus(Some(first));
        tree.suspend_focus();
        tree.move_focus(Some(outside));
        assert!(tree.resume_focus().is_empty());
        assert_eq!(tree.focused(), Some(outside));

        tree.move_focus(Some(first));
        tree.suspend_focus();
        tree.remove(region);
        assert!(tree.resume_focus().is_empty());
        assert_eq!(tree.focused(), None);
    }

    #[test]
    fn removed_slots_are_reused_without_aliasing_old_ids() {
        let mut tree = ElementTree::new();
        let doc = tree.document();
        let old = tree.append(doc, NodeKind::Link("old".into()));
        let slots = tree.nodes.len();

        for _ in 0..10 {
            let region = tree.append(doc, NodeKind::Container);
            tree.append(region, NodeKind::Button("close".into()));
            tree.remove(region);
        }
        assert_eq!(tree.nodes.len(), slots + 2);

        tree.remove(old);
        let new = tree.append(doc, NodeKind::Input);
        assert_eq!(new.index, old.index);
        assert!(!tree.is_attached(old));
        assert_eq!(tree.kind(old), None);
        assert!(tree.move_focus(Some(old)).is_empty());
        assert_eq!(tree.kind(new), Some(&NodeKind::Input));
    }

    #[test]
    fn removed_subtree_is_detached_and_drops_focus() {
        let (mut tree, region, first, _, outside) = sample();
        tree.move_focus(Some(first));
        tree.remove(region);

        assert!(!tree.is_attached(region));
        assert!(!tree.is_attached(first));
        assert!(tree.is_attached(outside));
        assert_eq!(tree.focused(), None);
        assert!(!tree.contains(region, first));
    }
}
