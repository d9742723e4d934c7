//! Widget node types: WidgetId, Widget, GridCell, LayoutState.

use slotmap::new_key_type;

use crate::geometry::{Alignment, Region, Size, Spacing};
use crate::style::{DrawableValue, PropertyTree, StyleNotFoundError, Stylesheet};

use super::kind::WidgetKind;

new_key_type! {
    /// Unique identifier for a widget in a [`WidgetTree`](super::WidgetTree).
    pub struct WidgetId;
}

// ---------------------------------------------------------------------------
// GridCell
// ---------------------------------------------------------------------------

/// Where a widget sits when its parent is a grid. Spans are at least 1.
///
/// Indices are not checked on assignment; a layout pass rejects cells outside
/// the parent's tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridCell {
    pub row: usize,
    pub column: usize,
    pub row_span: usize,
    pub column_span: usize,
}

impl GridCell {
    pub fn new(row: usize, column: usize) -> Self {
        Self { row, column, row_span: 1, column_span: 1 }
    }

    /// Set the spans (builder). Zero spans are raised to 1.
    pub fn with_span(mut self, row_span: usize, column_span: usize) -> Self {
        self.row_span = row_span.max(1);
        self.column_span = column_span.max(1);
        self
    }
}

impl Default for GridCell {
    fn default() -> Self {
        Self::new(0, 0)
    }
}

// ---------------------------------------------------------------------------
// LayoutState
// ---------------------------------------------------------------------------

/// Per-widget results of the measure and arrange passes.
///
/// A fresh state is measure-dirty. Detaching a widget resets its state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutState {
    pub(crate) desired: Size,
    pub(crate) bounds: Region,
    pub(crate) measure_dirty: bool,
    /// Available size the cached `desired` was computed for.
    pub(crate) measured_for: Option<Size>,
}

impl Default for LayoutState {
    fn default() -> Self {
        Self {
            desired: Size::ZERO,
            bounds: Region::EMPTY,
            measure_dirty: true,
            measured_for: None,
        }
    }
}

// ---------------------------------------------------------------------------
// Widget
// ---------------------------------------------------------------------------

/// A node in the widget tree: kind-specific data plus the layout properties
/// every widget shares.
#[derive(Debug, Clone)]
pub struct Widget {
    kind: WidgetKind,
    horizontal_alignment: Alignment,
    vertical_alignment: Alignment,
    visible: bool,
    cell: GridCell,
    padding: Spacing,
    width: Option<i32>,
    height: Option<i32>,
    background: Option<DrawableValue>,
    style_name: Option<String>,
    pub(crate) layout: LayoutState,
}

impl Widget {
    /// Create an unstyled widget.
    ///
    /// Panels and grids stretch to fill their slot; everything else sits at
    /// the top-left of it.
    pub fn new(kind: impl Into<WidgetKind>) -> Self {
        let kind = kind.into();
        let alignment = if kind.accepts_children() {
            Alignment::Stretch
        } else {
            Alignment::Start
        };
        Self {
            kind,
            horizontal_alignment: alignment,
            vertical_alignment: alignment,
            visible: true,
            cell: GridCell::default(),
            padding: Spacing::ZERO,
            width: None,
            height: None,
            background: None,
            style_name: None,
            layout: LayoutState::default(),
        }
    }

    /// Create a widget and apply its style from `stylesheet`.
    ///
    /// `variant` selects a named style; `None`, or a name the stylesheet does
    /// not have, uses the type's default.
    pub fn styled(
        kind: impl Into<WidgetKind>,
        stylesheet: &Stylesheet,
        variant: Option<&str>,
    ) -> Result<Self, StyleNotFoundError> {
        let mut widget = Widget::new(kind);
        let style = stylesheet.style(widget.kind.type_name(), variant)?;
        widget.apply_style(style.properties());
        widget.style_name = Some(style.name().to_owned());
        Ok(widget)
    }

    // -- builders -----------------------------------------------------------

    pub fn with_alignment(mut self, horizontal: Alignment, vertical: Alignment) -> Self {
        self.horizontal_alignment = horizontal;
        self.vertical_alignment = vertical;
        self
    }

    pub fn with_horizontal_alignment(mut self, alignment: Alignment) -> Self {
        self.horizontal_alignment = alignment;
        self
    }

    pub fn with_vertical_alignment(mut self, alignment: Alignment) -> Self {
        self.vertical_alignment = alignment;
        self
    }

    /// Place the widget in grid cell (`row`, `column`).
    pub fn with_cell(mut self, row: usize, column: usize) -> Self {
        self.cell.row = row;
        self.cell.column = column;
        self
    }

    pub fn with_span(mut self, row_span: usize, column_span: usize) -> Self {
        self.cell = self.cell.with_span(row_span, column_span);
        self
    }

    pub fn with_padding(mut self, padding: Spacing) -> Self {
        self.padding = padding;
        self
    }

    /// Fix the width, overriding the measured one.
    pub fn with_width(mut self, width: i32) -> Self {
        self.width = Some(width.max(0));
        self
    }

    /// Fix the height, overriding the measured one.
    pub fn with_height(mut self, height: i32) -> Self {
        self.height = Some(height.max(0));
        self
    }

    pub fn with_visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    // -- accessors ----------------------------------------------------------

    pub fn kind(&self) -> &WidgetKind {
        &self.kind
    }

    /// Mutable kind data. Changes made through a bare `&mut Widget` do not
    /// invalidate layout; use [`WidgetTree::update`](super::WidgetTree::update).
    pub fn kind_mut(&mut self) -> &mut WidgetKind {
        &mut self.kind
    }

    pub fn type_name(&self) -> &'static str {
        self.kind.type_name()
    }

    pub fn horizontal_alignment(&self) -> Alignment {
        self.horizontal_alignment
    }

    pub fn set_horizontal_alignment(&mut self, alignment: Alignment) {
        self.horizontal_alignment = alignment;
    }

    pub fn vertical_alignment(&self) -> Alignment {
        self.vertical_alignment
    }

    pub fn set_vertical_alignment(&mut self, alignment: Alignment) {
        self.vertical_alignment = alignment;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    pub fn cell(&self) -> GridCell {
        self.cell
    }

    pub fn cell_mut(&mut self) -> &mut GridCell {
        &mut self.cell
    }

    pub fn set_cell(&mut self, cell: GridCell) {
        self.cell = cell.with_span(cell.row_span, cell.column_span);
    }

    pub fn padding(&self) -> Spacing {
        self.padding
    }

    pub fn set_padding(&mut self, padding: Spacing) {
        self.padding = padding;
    }

    pub fn width(&self) -> Option<i32> {
        self.width
    }

    pub fn set_width(&mut self, width: Option<i32>) {
        self.width = width.map(|w| w.max(0));
    }

    pub fn height(&self) -> Option<i32> {
        self.height
    }

    pub fn set_height(&mut self, height: Option<i32>) {
        self.height = height.map(|h| h.max(0));
    }

    pub fn background(&self) -> Option<&DrawableValue> {
        self.background.as_ref()
    }

    /// Name of the style variant last applied from a stylesheet.
    pub fn style_name(&self) -> Option<&str> {
        self.style_name.as_deref()
    }

    pub(crate) fn set_style_name(&mut self, name: &str) {
        self.style_name = Some(name.to_owned());
    }

    /// Size computed by the last measure pass, padding included.
    pub fn desired_size(&self) -> Size {
        self.layout.desired
    }

    /// Rectangle assigned by the last arrange pass.
    pub fn bounds(&self) -> Region {
        self.layout.bounds
    }

    pub fn is_measure_dirty(&self) -> bool {
        self.layout.measure_dirty
    }

    // -- style --------------------------------------------------------------

    /// Apply the properties every widget understands, then the kind-specific
    /// ones. Properties the tree does not set keep their current value.
    pub fn apply_style(&mut self, style: &PropertyTree) {
        if let Some(all) = style.pixels("padding") {
            self.padding = Spacing::all(all.max(0));
        }
        let sides = [
            ("paddingTop", &mut self.padding.top),
            ("paddingRight", &mut self.padding.right),
            ("paddingBottom", &mut self.padding.bottom),
            ("paddingLeft", &mut self.padding.left),
        ];
        for (name, side) in sides {
            if let Some(value) = style.pixels(name) {
                *side = value.max(0);
            }
        }

        if let Some(alignment) = style.alignment("horizontalAlignment") {
            self.horizontal_alignment = alignment;
        }
        if let Some(alignment) = style.alignment("verticalAlignment") {
            self.vertical_alignment = alignment;
        }
        if let Some(width) = style.pixels("width") {
            self.width = Some(width.max(0));
        }
        if let Some(height) = style.pixels("height") {
            self.height = Some(height.max(0));
        }
        if let Some(background) = style.drawable("background") {
            self.background = Some(background);
        }

        self.kind.apply_style(style);
    }
}

// ===========================================================================
// Tests
// ===========================================================================
