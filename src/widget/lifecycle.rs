//! Widget events: attach, detach, removal, selection.
//!
//! The [`WidgetTree`](super::WidgetTree) records structural changes and list
//! box selection changes in an [`EventQueue`] as they happen. The host drains
//! the queue after a batch of mutations and reacts to what happened.

use super::node::WidgetId;

// ---------------------------------------------------------------------------
// WidgetEvent
// ---------------------------------------------------------------------------

/// Something that happened to a widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WidgetEvent {
    /// `widget` became a child of `parent`.
    Attached { widget: WidgetId, parent: WidgetId },
    /// `widget` was detached from `parent` and kept alive.
    Detached { widget: WidgetId, parent: WidgetId },
    /// `widget` and its subtree were destroyed.
    Removed { widget: WidgetId },
    /// The selected item of list box `list` changed.
    SelectionChanged { list: WidgetId, selected: Option<usize> },
}

// ---------------------------------------------------------------------------
// EventQueue
// ---------------------------------------------------------------------------

/// Pending widget events, in order of occurrence.
#[derive(Debug, Default)]
pub struct EventQueue {
    pending: Vec<WidgetEvent>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: WidgetEvent) {
        self.pending.push(event);
    }

    /// Drain and return all pending events.
    pub fn drain(&mut self) -> Vec<WidgetEvent> {
        std::mem::take(&mut self.pending)
    }

    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Pending events without draining them.
    pub fn iter(&self) -> std::slice::Iter<'_, WidgetEvent> {
        self.pending.iter()
    }
}
