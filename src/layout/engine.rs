//! Measure and arrange passes over a [`WidgetTree`].
//!
//! Measuring is bottom-up: each widget reports a desired size for the space
//! its parent offers, caching the result until [`WidgetTree::invalidate_measure`]
//! marks it dirty or the offered space changes. Arranging is top-down: each
//! parent hands every child a slot and the child positions its desired size
//! inside that slot by alignment.
//!
//! Padding is part of a widget's desired size. Explicit width and height
//! replace the measured extent on their axis. Invisible widgets measure as
//! zero and containers leave them out of track sizing.

use tracing::{debug, trace};

use crate::geometry::{Axis, Region, Size};
use crate::widget::{WidgetId, WidgetKind, WidgetTree};

use super::grid::{self as solver, TrackRequest};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// A layout pass was aborted.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LayoutError {
    /// A grid child's cell starts outside the grid's tracks.
    #[error(
        "widget {widget:?} is assigned to cell ({row}, {column}) of grid {grid:?}, \
         which has {rows} row(s) and {columns} column(s)"
    )]
    CellOutOfBounds {
        grid: WidgetId,
        widget: WidgetId,
        row: usize,
        column: usize,
        rows: usize,
        columns: usize,
    },
    /// The pass reached a widget id that is not in the tree.
    #[error("widget {0:?} is not in the tree")]
    MissingWidget(WidgetId),
}

// ---------------------------------------------------------------------------
// Passes
// ---------------------------------------------------------------------------

impl WidgetTree {
    /// Lay out the subtree under `root` in `available` space.
    ///
    /// Does nothing and returns `Ok(false)` when `root` is not measure-dirty
    /// and was last laid out for the same size. A failed pass leaves the
    /// widgets it did not reach with their previous results.
    pub fn update_layout(&mut self, root: WidgetId, available: Size) -> Result<bool, LayoutError> {
        let widget = self.get(root).ok_or(LayoutError::MissingWidget(root))?;
        if !widget.layout.measure_dirty && widget.layout.measured_for == Some(available) {
            return Ok(false);
        }
        debug!(width = available.width, height = available.height, "layout pass");
        self.measure(root, available)?;
        self.arrange(root, available.to_region())?;
        Ok(true)
    }

    /// Desired size of `id` given `available` space, padding included.
    pub fn measure(&mut self, id: WidgetId, available: Size) -> Result<Size, LayoutError> {
        let widget = self.get(id).ok_or(LayoutError::MissingWidget(id))?;
        if !widget.layout.measure_dirty && widget.layout.measured_for == Some(available) {
            return Ok(widget.layout.desired);
        }

        let desired = if widget.is_visible() {
            let padding = widget.padding().size();
            let (width, height) = (widget.width(), widget.height());
            let inner = Size::new(
                width.unwrap_or(available.width) - padding.width,
                height.unwrap_or(available.height) - padding.height,
            )
            .non_negative();

            let content = match widget.kind().measure_leaf() {
                Some(size) => size,
                None => self.measure_container(id, inner)?,
            };
            let mut desired = content + padding;
            if let Some(width) = width {
                desired.width = width;
            }
            if let Some(height) = height {
                desired.height = height;
            }
            desired
        } else {
            Size::ZERO
        };

        if let Some(widget) = self.get_mut(id) {
            trace!(widget_type = widget.type_name(), ?desired, "measured");
            widget.layout.desired = desired;
            widget.layout.measured_for = Some(available);
            widget.layout.measure_dirty = false;
        }
        Ok(desired)
    }

    fn measure_container(&mut self, id: WidgetId, inner: Size) -> Result<Size, LayoutError> {
        let is_grid = self.get(id).is_some_and(|w| w.kind().grid().is_some());
        if is_grid {
            return self.measure_grid(id, inner);
        }

        let mut desired = Size::ZERO;
        for child in self.children(id).to_vec() {
            desired = desired.max(self.measure(child, inner)?);
        }
        Ok(desired)
    }

    /// Place `id` inside `slot` by its alignment, then arrange its children.
    pub fn arrange(&mut self, id: WidgetId, slot: Region) -> Result<(), LayoutError> {
        let widget = self.get_mut(id).ok_or(LayoutError::MissingWidget(id))?;
        if !widget.is_visible() {
            widget.layout.bounds = Region::new(slot.x, slot.y, 0, 0);
            return Ok(());
        }

        let bounds = slot.align(
            widget.layout.desired,
            widget.horizontal_alignment(),
            widget.vertical_alignment(),
        );
        widget.layout.bounds = bounds;
        let content = bounds.shrink(widget.padding());
        let is_panel = matches!(widget.kind(), WidgetKind::Panel(_));
        let is_grid = widget.kind().grid().is_some();

        if is_grid {
            return self.arrange_grid(id, content);
        }
        if is_panel {
            for child in self.children(id).to_vec() {
                self.arrange(child, content)?;
            }
        }
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Grid
    // -----------------------------------------------------------------------

    fn measure_grid(&mut self, id: WidgetId, inner: Size) -> Result<Size, LayoutError> {
        let mut row_requests = Vec::new();
        let mut column_requests = Vec::new();

        for child in self.children(id).to_vec() {
            let desired = self.measure(child, inner)?;
            let widget = self.get(child).ok_or(LayoutError::MissingWidget(child))?;
            if !widget.is_visible() {
                continue;
            }
            let cell = widget.cell();
            self.check_cell(id, child)?;
            row_requests.push(TrackRequest::new(cell.row, cell.row_span, desired.height));
            column_requests.push(TrackRequest::new(cell.column, cell.column_span, desired.width));
        }

        let grid = self.grid_mut(id).map_err(|_| LayoutError::MissingWidget(id))?;
        let rows = solver::effective_proportions(grid.rows()).into_owned();
        let columns = solver::effective_proportions(grid.columns()).into_owned();
        let measured_rows = solver::measure_tracks(&rows, &row_requests, grid.row_spacing());
        let measured_columns = solver::measure_tracks(&columns, &column_requests, grid.column_spacing());

        let desired = Size::new(
            solver::total_extent(&measured_columns, grid.column_spacing()),
            solver::total_extent(&measured_rows, grid.row_spacing()),
        );
        grid.measured_rows = measured_rows;
        grid.measured_columns = measured_columns;
        Ok(desired)
    }

    fn arrange_grid(&mut self, id: WidgetId, content: Region) -> Result<(), LayoutError> {
        let grid = self.grid_mut(id).map_err(|_| LayoutError::MissingWidget(id))?;
        let rows = solver::effective_proportions(grid.rows()).into_owned();
        let columns = solver::effective_proportions(grid.columns()).into_owned();
        // Arranging without a prior measure treats every track as empty.
        grid.measured_rows.resize(rows.len(), 0);
        grid.measured_columns.resize(columns.len(), 0);

        let row_sizes = solver::distribute(&rows, &grid.measured_rows, content.height, grid.row_spacing());
        let column_sizes = solver::distribute(
            &columns,
            &grid.measured_columns,
            content.width,
            grid.column_spacing(),
        );
        grid.row_extents = solver::positions(content.y, &row_sizes, grid.row_spacing());
        grid.column_extents = solver::positions(content.x, &column_sizes, grid.column_spacing());
        let row_extents = grid.row_extents.clone();
        let column_extents = grid.column_extents.clone();

        for child in self.children(id).to_vec() {
            self.check_cell(id, child)?;
            let cell = self
                .get(child)
                .ok_or(LayoutError::MissingWidget(child))?
                .cell();
            let rows = solver::span_extent(&row_extents, cell.row, cell.row_span);
            let columns = solver::span_extent(&column_extents, cell.column, cell.column_span);
            let slot = match (rows, columns) {
                (Some((y, height)), Some((x, width))) => Region::new(x, y, width, height),
                _ => Region::new(content.x, content.y, 0, 0),
            };
            self.arrange(child, slot)?;
        }
        Ok(())
    }

    /// Reject a visible child whose cell starts outside the grid's tracks.
    fn check_cell(&self, grid: WidgetId, child: WidgetId) -> Result<(), LayoutError> {
        let widget = self.get(child).ok_or(LayoutError::MissingWidget(child))?;
        if !widget.is_visible() {
            return Ok(());
        }
        let tracks = self.grid(grid).map_err(|_| LayoutError::MissingWidget(grid))?;
        let rows = tracks.track_count(Axis::Vertical);
        let columns = tracks.track_count(Axis::Horizontal);
        let cell = widget.cell();
        if cell.row >= rows || cell.column >= columns {
            return Err(LayoutError::CellOutOfBounds {
                grid,
                widget: child,
                row: cell.row,
                column: cell.column,
                rows,
                columns,
            });
        }
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    /// Desired size from the last measure pass.
    pub fn desired_size(&self, id: WidgetId) -> Option<Size> {
        self.get(id).map(|w| w.layout.desired)
    }

    /// Arranged bounds from the last arrange pass.
    pub fn bounds(&self, id: WidgetId) -> Option<Region> {
        self.get(id).map(|w| w.layout.bounds)
    }
}

// ===========================================================================
// Tests
// ===========================================================================
