//! Widget tree: insert, attach, detach, remove, walk, invalidate.

use std::collections::VecDeque;

use slotmap::{SecondaryMap, SlotMap};
use tracing::debug;

use crate::reactive::IndexOutOfRange;
use crate::style::{PropertyTree, StyleNotFoundError, Stylesheet};

use super::lifecycle::{EventQueue, WidgetEvent};
use super::node::{LayoutState, Widget, WidgetId};

/// Empty slice constant for returning when a widget has no children.
const EMPTY_CHILDREN: &[WidgetId] = &[];

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// A tree operation was rejected. The tree is unchanged when one is returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TreeError {
    #[error("widget {0:?} is not in the tree")]
    Missing(WidgetId),
    #[error("widget {0:?} already has a parent")]
    AlreadyAttached(WidgetId),
    #[error("widget {0:?} has no parent")]
    NotAttached(WidgetId),
    #[error("widget {0:?} does not accept children from callers")]
    NotAContainer(WidgetId),
    #[error("attaching {child:?} under {parent:?} would create a cycle")]
    Cycle { parent: WidgetId, child: WidgetId },
    #[error("widget {id:?} is not a {expected}")]
    WrongKind { id: WidgetId, expected: &'static str },
    #[error(transparent)]
    Index(#[from] IndexOutOfRange),
    #[error(transparent)]
    Style(#[from] StyleNotFoundError),
}

// ---------------------------------------------------------------------------
// WidgetTree
// ---------------------------------------------------------------------------

/// Arena owning every widget.
///
/// Widgets live in a `SlotMap`; parent/child links are kept in secondary maps
/// so removal is O(subtree size) and lookup is O(1). A parent exclusively owns
/// its children: removing a widget destroys its whole subtree.
#[derive(Debug, Default)]
pub struct WidgetTree {
    nodes: SlotMap<WidgetId, Widget>,
    children: SecondaryMap<WidgetId, Vec<WidgetId>>,
    parent: SecondaryMap<WidgetId, WidgetId>,
    events: EventQueue,
}

impl WidgetTree {
    pub fn new() -> Self {
        Self::default()
    }

    // -----------------------------------------------------------------------
    // Structure
    // -----------------------------------------------------------------------

    /// Add a detached widget.
    pub fn insert(&mut self, widget: Widget) -> WidgetId {
        let id = self.nodes.insert(widget);
        self.children.insert(id, Vec::new());
        id
    }

    /// Append `child` to `parent`'s children.
    pub fn attach(&mut self, parent: WidgetId, child: WidgetId) -> Result<(), TreeError> {
        let index = self.children(parent).len();
        self.insert_child_at(parent, index, child)
    }

    /// Insert `child` at position `index` among `parent`'s children.
    pub fn insert_child_at(
        &mut self,
        parent: WidgetId,
        index: usize,
        child: WidgetId,
    ) -> Result<(), TreeError> {
        let container = self.nodes.get(parent).ok_or(TreeError::Missing(parent))?;
        if !container.kind().accepts_children() {
            return Err(TreeError::NotAContainer(parent));
        }
        if !self.nodes.contains_key(child) {
            return Err(TreeError::Missing(child));
        }
        if self.parent.contains_key(child) {
            return Err(TreeError::AlreadyAttached(child));
        }
        if parent == child || self.ancestors(parent).contains(&child) {
            return Err(TreeError::Cycle { parent, child });
        }
        let len = self.children(parent).len();
        if index > len {
            return Err(IndexOutOfRange { index, len }.into());
        }
        self.link(parent, index, child);
        Ok(())
    }

    /// Detach `child` from its parent. The widget stays in the arena with its
    /// layout state reset.
    pub fn detach(&mut self, child: WidgetId) -> Result<(), TreeError> {
        if !self.nodes.contains_key(child) {
            return Err(TreeError::Missing(child));
        }
        let parent = self.parent(child).ok_or(TreeError::NotAttached(child))?;
        self.expect_caller_managed(parent)?;

        self.unlink(child);
        if let Some(widget) = self.nodes.get_mut(child) {
            widget.layout = LayoutState::default();
        }
        self.events.push(WidgetEvent::Detached { widget: child, parent });
        Ok(())
    }

    /// Remove `id` and its entire subtree, returning the removed widget.
    pub fn remove(&mut self, id: WidgetId) -> Result<Widget, TreeError> {
        if !self.nodes.contains_key(id) {
            return Err(TreeError::Missing(id));
        }
        if let Some(parent) = self.parent(id) {
            self.expect_caller_managed(parent)?;
        }
        self.destroy(id).ok_or(TreeError::Missing(id))
    }

    /// Children of list boxes are generated; callers may not move them.
    fn expect_caller_managed(&self, parent: WidgetId) -> Result<(), TreeError> {
        match self.nodes.get(parent) {
            Some(widget) if widget.kind().as_list_box().is_some() => {
                Err(TreeError::NotAContainer(parent))
            }
            _ => Ok(()),
        }
    }

    /// Link without validation, then invalidate the new parent.
    pub(crate) fn link(&mut self, parent: WidgetId, index: usize, child: WidgetId) {
        self.parent.insert(child, parent);
        if let Some(siblings) = self.children.get_mut(parent) {
            let index = index.min(siblings.len());
            siblings.insert(index, child);
        }
        self.events.push(WidgetEvent::Attached { widget: child, parent });
        self.invalidate_measure(parent);
    }

    /// Drop the parent link of `child` and invalidate the old parent.
    fn unlink(&mut self, child: WidgetId) -> Option<WidgetId> {
        let parent = self.parent.remove(child)?;
        if let Some(siblings) = self.children.get_mut(parent) {
            siblings.retain(|&sibling| sibling != child);
        }
        self.invalidate_measure(parent);
        Some(parent)
    }

    /// Remove `id` and every descendant without ownership checks.
    pub(crate) fn destroy(&mut self, id: WidgetId) -> Option<Widget> {
        if !self.nodes.contains_key(id) {
            return None;
        }
        self.unlink(id);

        let mut to_remove = VecDeque::new();
        to_remove.push_back(id);
        let mut removed_root = None;

        while let Some(current) = to_remove.pop_front() {
            if let Some(kids) = self.children.remove(current) {
                to_remove.extend(kids);
            }
            self.parent.remove(current);
            let widget = self.nodes.remove(current);
            if current == id {
                removed_root = widget;
            }
        }

        self.events.push(WidgetEvent::Removed { widget: id });
        removed_root
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    pub fn parent(&self, id: WidgetId) -> Option<WidgetId> {
        self.parent.get(id).copied()
    }

    /// Children of a widget. Empty for leaves and unknown ids.
    pub fn children(&self, id: WidgetId) -> &[WidgetId] {
        self.children
            .get(id)
            .map(Vec::as_slice)
            .unwrap_or(EMPTY_CHILDREN)
    }

    /// Ancestors from the immediate parent up to the root, not including `id`.
    pub fn ancestors(&self, id: WidgetId) -> Vec<WidgetId> {
        let mut result = Vec::new();
        let mut current = id;
        while let Some(p) = self.parent.get(current).copied() {
            result.push(p);
            current = p;
        }
        result
    }

    pub fn get(&self, id: WidgetId) -> Option<&Widget> {
        self.nodes.get(id)
    }

    /// Mutable access that does not invalidate layout. Prefer
    /// [`update`](Self::update) for anything that changes size.
    pub fn get_mut(&mut self, id: WidgetId) -> Option<&mut Widget> {
        self.nodes.get_mut(id)
    }

    /// Modify a widget and invalidate its measure.
    pub fn update<R>(&mut self, id: WidgetId, f: impl FnOnce(&mut Widget) -> R) -> Result<R, TreeError> {
        let widget = self.nodes.get_mut(id).ok_or(TreeError::Missing(id))?;
        let result = f(widget);
        self.invalidate_measure(id);
        Ok(result)
    }

    pub fn contains(&self, id: WidgetId) -> bool {
        self.nodes.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Pre-order depth-first traversal starting from `start`.
    pub fn walk_depth_first(&self, start: WidgetId) -> Vec<WidgetId> {
        let mut result = Vec::new();
        let mut stack = vec![start];
        while let Some(current) = stack.pop() {
            if !self.nodes.contains_key(current) {
                continue;
            }
            result.push(current);
            stack.extend(self.children(current).iter().rev());
        }
        result
    }

    // -----------------------------------------------------------------------
    // Events
    // -----------------------------------------------------------------------

    /// Drain and return all pending widget events.
    pub fn drain_events(&mut self) -> Vec<WidgetEvent> {
        self.events.drain()
    }

    pub fn has_pending_events(&self) -> bool {
        self.events.has_pending()
    }

    pub(crate) fn emit(&mut self, event: WidgetEvent) {
        self.events.push(event);
    }

    // -----------------------------------------------------------------------
    // Layout invalidation
    // -----------------------------------------------------------------------

    /// Mark `id` and its ancestors as needing a new measure pass.
    ///
    /// Stops at the first widget that is already dirty: its ancestors were
    /// dirtied with it, so repeated calls before the next layout pass are
    /// cheap and collapse into one recomputation.
    pub fn invalidate_measure(&mut self, id: WidgetId) {
        let mut current = Some(id);
        while let Some(widget_id) = current {
            match self.nodes.get_mut(widget_id) {
                Some(widget) if !widget.layout.measure_dirty => {
                    widget.layout.measure_dirty = true;
                }
                _ => break,
            }
            current = self.parent(widget_id);
        }
    }

    // -----------------------------------------------------------------------
    // Styling
    // -----------------------------------------------------------------------

    /// Apply `style` to a widget. List boxes also restyle their generated
    /// items.
    pub fn apply_style(&mut self, id: WidgetId, style: &PropertyTree) -> Result<(), TreeError> {
        let widget = self.nodes.get_mut(id).ok_or(TreeError::Missing(id))?;
        widget.apply_style(style);
        if widget.kind().as_list_box().is_some() {
            self.restyle_list_items(id)?;
        }
        self.invalidate_measure(id);
        Ok(())
    }

    /// Look up the `name` variant for the widget's type and apply it.
    ///
    /// A missing variant falls back to the type's default; a failed lookup
    /// leaves the widget untouched.
    pub fn set_style_by_name(
        &mut self,
        id: WidgetId,
        stylesheet: &Stylesheet,
        name: &str,
    ) -> Result<(), TreeError> {
        let type_name = self.nodes.get(id).ok_or(TreeError::Missing(id))?.type_name();
        let style = stylesheet.style(type_name, Some(name))?;
        debug!(widget_type = type_name, variant = style.name(), "applying style");
        self.apply_style(id, style.properties())?;
        if let Some(widget) = self.nodes.get_mut(id) {
            widget.set_style_name(style.name());
        }
        Ok(())
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Size;
    use crate::style::{Color, StyleValue, StyleVariant};
    use crate::widgets::{Button, Label, ListBox, Panel};

    /// Build a small tree:
    /// ```text
    ///       root
    ///      /    \
    ///     a      b
    ///    / \
    ///   c   d
    /// ```
    fn sample() -> (WidgetTree, [WidgetId; 5]) {
        let mut tree = WidgetTree::new();
        let root = tree.insert(Widget::new(Panel));
        let a = tree.insert(Widget::new(Panel));
        let b = tree.insert(Widget::new(Label::new("b")));
        let c = tree.insert(Widget::new(Label::new("c")));
        let d = tree.insert(Widget::new(Label::new("d")));
        tree.attach(root, a).unwrap();
        tree.attach(root, b).unwrap();
        tree.attach(a, c).unwrap();
        tree.attach(a, d).unwrap();
        tree.drain_events();
        (tree, [root, a, b, c, d])
    }

    // -----------------------------------------------------------------------
    // Structure
    // -----------------------------------------------------------------------

    #[test]
    fn walk_is_pre_order() {
        let (tree, [root, a, b, c, d]) = sample();
        assert_eq!(tree.walk_depth_first(root), vec![root, a, c, d, b]);
        assert_eq!(tree.ancestors(d), vec![a, root]);
        assert_eq!(tree.parent(root), None);
    }

    #[test]
    fn insert_child_at_position() {
        let (mut tree, [root, a, b, ..]) = sample();
        let e = tree.insert(Widget::new(Label::new("e")));
        tree.insert_child_at(root, 1, e).unwrap();
        assert_eq!(tree.children(root), &[a, e, b]);

        let f = tree.insert(Widget::new(Label::new("f")));
        assert_eq!(
            tree.insert_child_at(root, 7, f),
            Err(TreeError::Index(IndexOutOfRange { index: 7, len: 3 }))
        );
    }

    #[test]
    fn attach_rejections() {
        let (mut tree, [root, a, b, c, _]) = sample();
        assert_eq!(tree.attach(b, c), Err(TreeError::NotAContainer(b)));
        assert_eq!(tree.attach(root, c), Err(TreeError::AlreadyAttached(c)));

        tree.detach(a).unwrap();
        assert_eq!(tree.parent(c), Some(a));
        assert_eq!(tree.attach(a, a), Err(TreeError::Cycle { parent: a, child: a }));
        // Attaching `a` below one of its own descendants is a cycle too.
        let inner = tree.insert(Widget::new(Panel));
        tree.attach(a, inner).unwrap();
        assert_eq!(tree.attach(inner, a), Err(TreeError::Cycle { parent: inner, child: a }));
    }

    #[test]
    fn detach_keeps_widget_and_resets_layout() {
        let (mut tree, [root, a, ..]) = sample();
        tree.update_layout(root, Size::new(100, 100)).unwrap();
        assert!(!tree.get(a).unwrap().is_measure_dirty());

        tree.detach(a).unwrap();
        let widget = tree.get(a).unwrap();
        assert!(widget.is_measure_dirty());
        assert_eq!(widget.bounds(), crate::geometry::Region::EMPTY);
        assert_eq!(tree.parent(a), None);
        assert_eq!(tree.children(a).len(), 2);
        assert_eq!(
            tree.drain_events(),
            vec![WidgetEvent::Detached { widget: a, parent: root }]
        );
        assert_eq!(tree.detach(a), Err(TreeError::NotAttached(a)));
    }

    #[test]
    fn remove_destroys_subtree() {
        let (mut tree, [root, a, b, c, d]) = sample();
        let removed = tree.remove(a).unwrap();
        assert_eq!(removed.type_name(), "panel");
        for gone in [a, c, d] {
            assert!(!tree.contains(gone));
        }
        assert_eq!(tree.children(root), &[b]);
        assert_eq!(tree.len(), 2);
        assert_eq!(tree.drain_events(), vec![WidgetEvent::Removed { widget: a }]);
        assert_eq!(tree.remove(a).unwrap_err(), TreeError::Missing(a));
    }

    #[test]
    fn list_box_children_are_not_caller_managed() {
        let mut tree = WidgetTree::new();
        let list = tree.insert(Widget::new(ListBox::new()));
        let label = tree.insert(Widget::new(Label::new("x")));
        assert_eq!(tree.attach(list, label), Err(TreeError::NotAContainer(list)));
    }

    // -----------------------------------------------------------------------
    // Invalidation
    // -----------------------------------------------------------------------

    #[test]
    fn invalidate_propagates_to_root() {
        let (mut tree, [root, a, b, c, d]) = sample();
        tree.update_layout(root, Size::new(100, 100)).unwrap();

        tree.invalidate_measure(c);
        assert!(tree.get(c).unwrap().is_measure_dirty());
        assert!(tree.get(a).unwrap().is_measure_dirty());
        assert!(tree.get(root).unwrap().is_measure_dirty());
        assert!(!tree.get(b).unwrap().is_measure_dirty());
        assert!(!tree.get(d).unwrap().is_measure_dirty());
    }

    #[test]
    fn invalidate_is_idempotent() {
        let (mut tree, [root, _, _, c, _]) = sample();
        tree.update_layout(root, Size::new(100, 100)).unwrap();
        tree.invalidate_measure(c);
        tree.invalidate_measure(c);
        assert!(tree.update_layout(root, Size::new(100, 100)).unwrap());
        assert!(!tree.update_layout(root, Size::new(100, 100)).unwrap());
    }

    #[test]
    fn update_invalidates() {
        let (mut tree, [root, _, b, _, _]) = sample();
        tree.update_layout(root, Size::new(100, 100)).unwrap();
        let text = tree
            .update(b, |widget| {
                let label = widget.kind_mut().as_label_mut().unwrap();
                label.set_text("changed");
                label.text().to_owned()
            })
            .unwrap();
        assert_eq!(text, "changed");
        assert!(tree.get(root).unwrap().is_measure_dirty());
    }

    // -----------------------------------------------------------------------
    // Styling
    // -----------------------------------------------------------------------

    #[test]
    fn set_style_by_name_applies_variant() {
        let mut sheet = Stylesheet::new();
        sheet.insert_variant("button", StyleVariant::new("default", PropertyTree::new()));
        sheet.insert_variant(
            "button",
            StyleVariant::new(
                "danger",
                PropertyTree::new().with("textColor", StyleValue::Color(Color::RED)),
            ),
        );
        let mut tree = WidgetTree::new();
        let button = tree.insert(Widget::new(Button::new("Delete")));

        tree.set_style_by_name(button, &sheet, "danger").unwrap();
        let widget = tree.get(button).unwrap();
        assert_eq!(widget.style_name(), Some("danger"));
        assert_eq!(widget.kind().as_button().unwrap().text_color(), Color::RED);
    }

    #[test]
    fn set_style_by_name_missing_type() {
        let sheet = Stylesheet::new();
        let mut tree = WidgetTree::new();
        let label = tree.insert(Widget::new(Label::new("x")));
        assert_eq!(
            tree.set_style_by_name(label, &sheet, "any"),
            Err(TreeError::Style(StyleNotFoundError::UnknownType {
                widget_type: "label".into()
            }))
        );
        assert_eq!(tree.get(label).unwrap().style_name(), None);
    }
}
