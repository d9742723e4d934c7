//! Desktop: configuration and the top-level layout driver.
//!
//! [`Desktop`] ties together a resolved stylesheet, the widget tree and the
//! root widget that fills the desktop. Widgets are created through
//! [`Desktop::create`] so they pick up their style variant, and the layout
//! pass is deferred until the host calls [`Desktop::layout`].

use std::rc::Rc;

use tracing::debug;

use crate::geometry::Size;
use crate::layout::LayoutError;
use crate::style::{DrawableRef, FontRef, StyleNotFoundError, Stylesheet};
use crate::widget::{TreeError, Widget, WidgetEvent, WidgetId, WidgetKind, WidgetTree};

// ---------------------------------------------------------------------------
// DesktopConfig
// ---------------------------------------------------------------------------

/// Configuration for a desktop.
#[derive(Debug, Clone)]
pub struct DesktopConfig {
    /// Initial desktop size in pixels.
    pub size: Size,
    /// Optional JSON stylesheet document to resolve.
    pub stylesheet: Option<String>,
}

impl Default for DesktopConfig {
    fn default() -> Self {
        Self {
            size: Size::new(800, 600),
            stylesheet: None,
        }
    }
}

impl DesktopConfig {
    /// Create a new default config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the desktop size (builder).
    pub fn with_size(mut self, width: i32, height: i32) -> Self {
        self.size = Size::new(width, height);
        self
    }

    /// Set the stylesheet document (builder).
    pub fn with_stylesheet(mut self, json: impl Into<String>) -> Self {
        self.stylesheet = Some(json.into());
        self
    }
}

// ---------------------------------------------------------------------------
// Desktop
// ---------------------------------------------------------------------------

/// Owns the stylesheet, the widget tree and the root widget.
#[derive(Debug)]
pub struct Desktop {
    tree: WidgetTree,
    stylesheet: Rc<Stylesheet>,
    root: Option<WidgetId>,
    size: Size,
}

impl Desktop {
    /// Create a desktop, resolving the configured stylesheet.
    ///
    /// Without a stylesheet document the desktop starts with an empty
    /// stylesheet and only unstyled widgets can be added.
    pub fn new<F, D>(config: DesktopConfig, font_lookup: F, drawable_lookup: D) -> crate::Result<Self>
    where
        F: Fn(&str) -> Option<FontRef>,
        D: Fn(&str) -> Option<DrawableRef>,
    {
        let stylesheet = match &config.stylesheet {
            Some(json) => Stylesheet::from_json(json, font_lookup, drawable_lookup)?,
            None => Stylesheet::new(),
        };
        Ok(Self::from_stylesheet(Rc::new(stylesheet), config.size))
    }

    /// Create a desktop around an already-resolved stylesheet.
    pub fn from_stylesheet(stylesheet: Rc<Stylesheet>, size: Size) -> Self {
        Self {
            tree: WidgetTree::new(),
            stylesheet,
            root: None,
            size,
        }
    }

    pub fn stylesheet(&self) -> &Rc<Stylesheet> {
        &self.stylesheet
    }

    pub fn tree(&self) -> &WidgetTree {
        &self.tree
    }

    pub fn tree_mut(&mut self) -> &mut WidgetTree {
        &mut self.tree
    }

    pub fn root(&self) -> Option<WidgetId> {
        self.root
    }

    pub fn size(&self) -> Size {
        self.size
    }

    /// Create a detached widget styled with `variant` (or the default).
    pub fn create(
        &mut self,
        kind: impl Into<WidgetKind>,
        variant: Option<&str>,
    ) -> Result<WidgetId, StyleNotFoundError> {
        let widget = Widget::styled(kind, &self.stylesheet, variant)?;
        Ok(self.tree.insert(widget))
    }

    /// Make `id` the widget that fills the desktop.
    pub fn set_root(&mut self, id: WidgetId) -> Result<(), TreeError> {
        if !self.tree.contains(id) {
            return Err(TreeError::Missing(id));
        }
        if self.tree.parent(id).is_some() {
            return Err(TreeError::AlreadyAttached(id));
        }
        self.root = Some(id);
        self.tree.invalidate_measure(id);
        Ok(())
    }

    /// Change the desktop size. The next [`layout`](Self::layout) re-measures.
    pub fn resize(&mut self, width: i32, height: i32) {
        let size = Size::new(width, height);
        if size != self.size {
            debug!(width, height, "desktop resized");
            self.size = size;
        }
    }

    /// Run the deferred layout pass for the root, if anything changed.
    ///
    /// Returns `Ok(false)` when there is no root or nothing needed updating.
    pub fn layout(&mut self) -> Result<bool, LayoutError> {
        match self.root {
            Some(root) => self.tree.update_layout(root, self.size),
            None => Ok(false),
        }
    }

    /// Restyle `id` with the named variant from this desktop's stylesheet.
    pub fn set_style_by_name(&mut self, id: WidgetId, name: &str) -> Result<(), TreeError> {
        self.tree.set_style_by_name(id, &self.stylesheet, name)
    }

    /// Drain pending widget events.
    pub fn drain_events(&mut self) -> Vec<WidgetEvent> {
        self.tree.drain_events()
    }
}

// ===========================================================================
// Tests
// ===========================================================================
