//! Grid widget: children placed in cells of row and column tracks.
//!
//! The grid holds the track proportions and spacing. Cell assignments live on
//! each child widget ([`GridCell`](crate::widget::GridCell)), so inserting or
//! removing a track goes through [`WidgetTree`] to shift the children in the
//! same call.

use crate::geometry::Axis;
use crate::layout::{Proportion, TrackExtent};
use crate::reactive::IndexOutOfRange;
use crate::style::PropertyTree;
use crate::widget::{TreeError, WidgetId, WidgetTree};

// ---------------------------------------------------------------------------
// Grid
// ---------------------------------------------------------------------------

/// Row and column tracks plus the results of the last layout pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Grid {
    rows: Vec<Proportion>,
    columns: Vec<Proportion>,
    row_spacing: i32,
    column_spacing: i32,
    pub(crate) measured_rows: Vec<i32>,
    pub(crate) measured_columns: Vec<i32>,
    pub(crate) row_extents: Vec<TrackExtent>,
    pub(crate) column_extents: Vec<TrackExtent>,
}

impl Grid {
    /// A grid with no declared tracks (one implicit Fill cell).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the row proportions (builder pattern).
    pub fn with_rows(mut self, rows: impl IntoIterator<Item = Proportion>) -> Self {
        self.rows = rows.into_iter().collect();
        self
    }

    /// Set the column proportions (builder pattern).
    pub fn with_columns(mut self, columns: impl IntoIterator<Item = Proportion>) -> Self {
        self.columns = columns.into_iter().collect();
        self
    }

    /// Set the gaps between rows and between columns (builder pattern).
    pub fn with_spacing(mut self, row_spacing: i32, column_spacing: i32) -> Self {
        self.row_spacing = row_spacing.max(0);
        self.column_spacing = column_spacing.max(0);
        self
    }

    pub fn rows(&self) -> &[Proportion] {
        &self.rows
    }

    pub fn columns(&self) -> &[Proportion] {
        &self.columns
    }

    pub fn row_spacing(&self) -> i32 {
        self.row_spacing
    }

    pub fn column_spacing(&self) -> i32 {
        self.column_spacing
    }

    /// Proportions along `axis`: rows are vertical, columns horizontal.
    pub fn tracks(&self, axis: Axis) -> &[Proportion] {
        match axis {
            Axis::Vertical => &self.rows,
            Axis::Horizontal => &self.columns,
        }
    }

    pub(crate) fn tracks_mut(&mut self, axis: Axis) -> &mut Vec<Proportion> {
        match axis {
            Axis::Vertical => &mut self.rows,
            Axis::Horizontal => &mut self.columns,
        }
    }

    pub fn spacing(&self, axis: Axis) -> i32 {
        match axis {
            Axis::Vertical => self.row_spacing,
            Axis::Horizontal => self.column_spacing,
        }
    }

    /// Number of tracks laid out along `axis`, counting the implicit track of
    /// an empty axis.
    pub fn track_count(&self, axis: Axis) -> usize {
        self.tracks(axis).len().max(1)
    }

    /// Row positions from the last arrange pass.
    pub fn row_extents(&self) -> &[TrackExtent] {
        &self.row_extents
    }

    /// Column positions from the last arrange pass.
    pub fn column_extents(&self) -> &[TrackExtent] {
        &self.column_extents
    }

    /// Apply `rowSpacing` and `columnSpacing`.
    pub fn apply_style(&mut self, style: &PropertyTree) {
        if let Some(spacing) = style.pixels("rowSpacing") {
            self.row_spacing = spacing.max(0);
        }
        if let Some(spacing) = style.pixels("columnSpacing") {
            self.column_spacing = spacing.max(0);
        }
    }
}

// ---------------------------------------------------------------------------
// Track mutation
// ---------------------------------------------------------------------------

impl WidgetTree {
    /// Insert a row at `index`, moving every child whose row is at or past
    /// `index` down by one.
    pub fn insert_row(&mut self, grid: WidgetId, index: usize, row: Proportion) -> Result<(), TreeError> {
        self.expect_grid(grid)?;
        self.insert_track(grid, Axis::Vertical, index, row)
    }

    /// Remove the row at `index`, moving every child whose row is past `index`
    /// up by one. Children in the removed row keep their index.
    pub fn remove_row(&mut self, grid: WidgetId, index: usize) -> Result<Proportion, TreeError> {
        self.expect_grid(grid)?;
        self.remove_track(grid, Axis::Vertical, index)
    }

    /// Insert a column at `index`; see [`insert_row`](Self::insert_row).
    pub fn insert_column(
        &mut self,
        grid: WidgetId,
        index: usize,
        column: Proportion,
    ) -> Result<(), TreeError> {
        self.expect_grid(grid)?;
        self.insert_track(grid, Axis::Horizontal, index, column)
    }

    /// Remove the column at `index`; see [`remove_row`](Self::remove_row).
    pub fn remove_column(&mut self, grid: WidgetId, index: usize) -> Result<Proportion, TreeError> {
        self.expect_grid(grid)?;
        self.remove_track(grid, Axis::Horizontal, index)
    }

    /// Replace all row proportions. Cell assignments are left alone.
    pub fn set_rows(&mut self, grid: WidgetId, rows: Vec<Proportion>) -> Result<(), TreeError> {
        self.expect_grid(grid)?;
        *self.grid_mut(grid)?.tracks_mut(Axis::Vertical) = rows;
        self.invalidate_measure(grid);
        Ok(())
    }

    /// Replace all column proportions. Cell assignments are left alone.
    pub fn set_columns(&mut self, grid: WidgetId, columns: Vec<Proportion>) -> Result<(), TreeError> {
        self.expect_grid(grid)?;
        *self.grid_mut(grid)?.tracks_mut(Axis::Horizontal) = columns;
        self.invalidate_measure(grid);
        Ok(())
    }

    /// The grid data of a Grid or ListBox widget.
    pub fn grid(&self, id: WidgetId) -> Result<&Grid, TreeError> {
        let widget = self.get(id).ok_or(TreeError::Missing(id))?;
        widget.kind().grid().ok_or(TreeError::WrongKind { id, expected: "grid" })
    }

    pub(crate) fn grid_mut(&mut self, id: WidgetId) -> Result<&mut Grid, TreeError> {
        let widget = self.get_mut(id).ok_or(TreeError::Missing(id))?;
        widget
            .kind_mut()
            .grid_mut()
            .ok_or(TreeError::WrongKind { id, expected: "grid" })
    }

    /// Public track edits apply to plain grids only; a list box owns its rows.
    fn expect_grid(&self, id: WidgetId) -> Result<(), TreeError> {
        let widget = self.get(id).ok_or(TreeError::Missing(id))?;
        if widget.kind().is_grid() {
            Ok(())
        } else {
            Err(TreeError::WrongKind { id, expected: "grid" })
        }
    }

    pub(crate) fn insert_track(
        &mut self,
        grid: WidgetId,
        axis: Axis,
        index: usize,
        proportion: Proportion,
    ) -> Result<(), TreeError> {
        let tracks = self.grid_mut(grid)?.tracks_mut(axis);
        if index > tracks.len() {
            return Err(IndexOutOfRange { index, len: tracks.len() }.into());
        }
        tracks.insert(index, proportion);
        self.shift_cells(grid, axis, |start| if start >= index { start + 1 } else { start });
        self.invalidate_measure(grid);
        Ok(())
    }

    pub(crate) fn remove_track(
        &mut self,
        grid: WidgetId,
        axis: Axis,
        index: usize,
    ) -> Result<Proportion, TreeError> {
        let tracks = self.grid_mut(grid)?.tracks_mut(axis);
        if index >= tracks.len() {
            return Err(IndexOutOfRange { index, len: tracks.len() }.into());
        }
        let removed = tracks.remove(index);
        self.shift_cells(grid, axis, |start| if start > index { start - 1 } else { start });
        self.invalidate_measure(grid);
        Ok(removed)
    }

    /// Remap the start index of every child of `grid` along `axis`.
    fn shift_cells(&mut self, grid: WidgetId, axis: Axis, remap: impl Fn(usize) -> usize) {
        let children = self.children(grid).to_vec();
        for child in children {
            if let Some(widget) = self.get_mut(child) {
                let cell = widget.cell_mut();
                match axis {
                    Axis::Vertical => cell.row = remap(cell.row),
                    Axis::Horizontal => cell.column = remap(cell.column),
                }
            }
        }
    }
}

// ===========================================================================
// Tests
// ===========================================================================
