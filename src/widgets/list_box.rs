//! ListBox widget: a vertical list bound to an observable item collection.
//!
//! Every [`ListItem`] is shown by one generated child widget: a [`Separator`]
//! for separator items, otherwise a list-item [`Button`]. Children are laid
//! out in an internal single-column grid with one `Auto` row per item, so
//! item *k*, child *k* and row *k* always line up.
//!
//! Items are edited through [`ListBoxMut`], obtained from
//! [`WidgetTree::list_box`]. Each edit mutates the [`ObservableList`] and the
//! list box's observer brings the generated children, the rows and the
//! selection in line before the call returns.
//!
//! Selection is a single optional index. Changing it un-presses the previous
//! item's button, presses the new one and queues one
//! [`WidgetEvent::SelectionChanged`].

use std::mem;

use tracing::debug;

use crate::geometry::{Alignment, Axis};
use crate::layout::Proportion;
use crate::reactive::{ListChange, ListObserver, ObservableList};
use crate::style::{Color, DrawableValue, PropertyTree};
use crate::widget::{TreeError, Widget, WidgetEvent, WidgetId, WidgetTree};

use super::button::Button;
use super::grid::Grid;
use super::separator::Separator;

// ---------------------------------------------------------------------------
// ListItem
// ---------------------------------------------------------------------------

/// One entry of a list box.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListItem {
    pub text: String,
    /// Text color; the list item style's color when `None`.
    pub color: Option<Color>,
    pub image: Option<DrawableValue>,
    pub image_text_spacing: i32,
    /// Shown as a separator line. Separators cannot be selected.
    pub is_separator: bool,
}

impl ListItem {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    /// A separator entry.
    pub fn separator() -> Self {
        Self {
            is_separator: true,
            ..Self::default()
        }
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn with_image(mut self, image: DrawableValue, spacing: i32) -> Self {
        self.image = Some(image);
        self.image_text_spacing = spacing.max(0);
        self
    }
}

// ---------------------------------------------------------------------------
// ListBox
// ---------------------------------------------------------------------------

/// List box data: items, selection, item styles and the row tracks.
#[derive(Debug, Clone, Default)]
pub struct ListBox {
    items: ObservableList<ListItem>,
    selected: Option<usize>,
    item_style: Option<PropertyTree>,
    separator_style: Option<PropertyTree>,
    grid: Grid,
}

impl ListBox {
    /// An empty list box. Add items through [`WidgetTree::list_box`].
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[ListItem] {
        self.items.as_slice()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected_item(&self) -> Option<&ListItem> {
        self.items.get(self.selected?)
    }

    /// Style applied to generated item buttons (`listItemStyle`).
    pub fn item_style(&self) -> Option<&PropertyTree> {
        self.item_style.as_ref()
    }

    /// Style applied to generated separators (`separatorStyle`).
    pub fn separator_style(&self) -> Option<&PropertyTree> {
        self.separator_style.as_ref()
    }

    /// The internal row tracks.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub(crate) fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    /// Record the item sub-styles. Existing children are restyled by
    /// [`WidgetTree::apply_style`].
    pub fn apply_style(&mut self, style: &PropertyTree) {
        if let Some(items) = style.subtree("listItemStyle") {
            self.item_style = Some(items.clone());
        }
        if let Some(separators) = style.subtree("separatorStyle") {
            self.separator_style = Some(separators.clone());
        }
    }

    /// Build the child widget that shows `item`.
    fn item_widget(&self, item: &ListItem) -> Widget {
        if item.is_separator {
            let mut widget =
                Widget::new(Separator::horizontal()).with_horizontal_alignment(Alignment::Stretch);
            if let Some(style) = &self.separator_style {
                widget.apply_style(style);
            }
            return widget;
        }

        let mut widget = Widget::new(Button::new(item.text.clone()))
            .with_alignment(Alignment::Stretch, Alignment::Stretch);
        if let Some(style) = &self.item_style {
            widget.apply_style(style);
        }
        if let Some(button) = widget.kind_mut().as_button_mut() {
            if let Some(color) = item.color {
                button.set_text_color(color);
            }
            if let Some(image) = &item.image {
                button.set_image(Some(image.clone()));
                button.set_image_text_spacing(item.image_text_spacing);
            }
        }
        widget
    }
}

// ---------------------------------------------------------------------------
// Tree access
// ---------------------------------------------------------------------------

impl WidgetTree {
    /// Edit handle for the list box `id`.
    pub fn list_box(&mut self, id: WidgetId) -> Result<ListBoxMut<'_>, TreeError> {
        self.list_data(id)?;
        Ok(ListBoxMut { tree: self, id })
    }

    fn list_data(&self, id: WidgetId) -> Result<&ListBox, TreeError> {
        let widget = self.get(id).ok_or(TreeError::Missing(id))?;
        widget
            .kind()
            .as_list_box()
            .ok_or(TreeError::WrongKind { id, expected: "list box" })
    }

    fn list_data_mut(&mut self, id: WidgetId) -> Result<&mut ListBox, TreeError> {
        let widget = self.get_mut(id).ok_or(TreeError::Missing(id))?;
        widget
            .kind_mut()
            .as_list_box_mut()
            .ok_or(TreeError::WrongKind { id, expected: "list box" })
    }

    /// Regenerate every item widget of a list box from its current styles.
    pub(crate) fn restyle_list_items(&mut self, id: WidgetId) -> Result<(), TreeError> {
        let items = mem::take(&mut self.list_data_mut(id)?.items);
        let mut sync = ItemSync { tree: &mut *self, list: id };
        let result = (0..items.len()).try_for_each(|index| sync.refresh(index, &items[index]));
        self.list_data_mut(id)?.items = items;
        result
    }
}

// ---------------------------------------------------------------------------
// ListBoxMut
// ---------------------------------------------------------------------------

/// Mutable access to one list box in a [`WidgetTree`].
pub struct ListBoxMut<'a> {
    tree: &'a mut WidgetTree,
    id: WidgetId,
}

impl ListBoxMut<'_> {
    pub fn id(&self) -> WidgetId {
        self.id
    }

    fn data(&self) -> Result<&ListBox, TreeError> {
        self.tree.list_data(self.id)
    }

    pub fn items(&self) -> &[ListItem] {
        self.data().map(ListBox::items).unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.items().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items().is_empty()
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.data().ok()?.selected
    }

    /// The generated widget showing item `index`.
    pub fn item_widget(&self, index: usize) -> Option<WidgetId> {
        self.tree.children(self.id).get(index).copied()
    }

    /// Insert `item` at `index` (which may equal `len()`).
    pub fn insert(&mut self, index: usize, item: ListItem) -> Result<(), TreeError> {
        self.edit(|items, sync| items.insert(index, item, sync))
    }

    pub fn push(&mut self, item: ListItem) -> Result<(), TreeError> {
        self.edit(|items, sync| items.push(item, sync))
    }

    /// Remove the item at `index`. Removing the selected item clears the
    /// selection.
    pub fn remove(&mut self, index: usize) -> Result<ListItem, TreeError> {
        self.edit(|items, sync| items.remove(index, sync))
    }

    pub fn clear(&mut self) -> Result<(), TreeError> {
        self.edit(|items, sync| items.clear(sync))
    }

    /// Replace every item and rebuild the children.
    pub fn replace_items(&mut self, new_items: Vec<ListItem>) -> Result<(), TreeError> {
        self.edit(|items, sync| items.replace_all(new_items, sync))
    }

    /// Modify item `index` in place and refresh its widget.
    pub fn update_item(&mut self, index: usize, f: impl FnOnce(&mut ListItem)) -> Result<(), TreeError> {
        self.edit(|items, sync| items.update(index, f, sync))
    }

    /// Run one collection edit with the items moved out of the tree so the
    /// observer can borrow the tree mutably.
    fn edit<R>(
        &mut self,
        op: impl FnOnce(&mut ObservableList<ListItem>, &mut ItemSync<'_>) -> Result<R, TreeError>,
    ) -> Result<R, TreeError> {
        let mut items = mem::take(&mut self.tree.list_data_mut(self.id)?.items);
        let mut sync = ItemSync { tree: &mut *self.tree, list: self.id };
        let result = op(&mut items, &mut sync);
        self.tree.list_data_mut(self.id)?.items = items;
        self.tree.invalidate_measure(self.id);
        result
    }

    /// Select item `index`, or nothing with `None`.
    ///
    /// An index past the end selects nothing. Selecting the current selection
    /// or a separator does nothing. Returns whether the selection changed.
    pub fn select(&mut self, index: Option<usize>) -> Result<bool, TreeError> {
        let data = self.data()?;
        let target = index.filter(|&i| i < data.items.len());
        if let Some(i) = target {
            if data.items[i].is_separator {
                debug!(index = i, "separators are not selectable");
                return Ok(false);
            }
        }
        if target == data.selected {
            return Ok(false);
        }

        let previous = mem::replace(&mut self.tree.list_data_mut(self.id)?.selected, target);
        if let Some(old) = previous {
            self.set_pressed(old, false);
        }
        if let Some(new) = target {
            self.set_pressed(new, true);
        }
        self.tree.emit(WidgetEvent::SelectionChanged { list: self.id, selected: target });
        Ok(true)
    }

    /// Select the item whose arranged bounds contain (`x`, `y`). Returns
    /// whether the selection changed.
    pub fn click_at(&mut self, x: i32, y: i32) -> Result<bool, TreeError> {
        let hit = self.tree.children(self.id).iter().position(|&child| {
            self.tree
                .get(child)
                .is_some_and(|widget| widget.is_visible() && widget.bounds().contains(x, y))
        });
        match hit {
            Some(index) => self.select(Some(index)),
            None => Ok(false),
        }
    }

    fn set_pressed(&mut self, index: usize, pressed: bool) {
        set_item_pressed(self.tree, self.id, index, pressed);
    }
}

fn set_item_pressed(tree: &mut WidgetTree, list: WidgetId, index: usize, pressed: bool) {
    let Some(child) = tree.children(list).get(index).copied() else {
        return;
    };
    if let Some(button) = tree.get_mut(child).and_then(|w| w.kind_mut().as_button_mut()) {
        button.set_pressed(pressed);
    }
}

// ---------------------------------------------------------------------------
// ItemSync
// ---------------------------------------------------------------------------

/// Keeps a list box's children, rows and selection in line with its items.
struct ItemSync<'a> {
    tree: &'a mut WidgetTree,
    list: WidgetId,
}

impl ListObserver<ListItem> for ItemSync<'_> {
    type Error = TreeError;

    fn on_change(&mut self, items: &[ListItem], change: ListChange<'_, ListItem>) -> Result<(), TreeError> {
        match change {
            ListChange::Inserted { index } => self.inserted(index, &items[index]),
            ListChange::Removed { index, .. } => self.removed(index),
            ListChange::Updated { index } => self.refresh(index, &items[index]),
            ListChange::Reset => self.reset(items),
        }
    }
}

impl ItemSync<'_> {
    fn data_mut(&mut self) -> Result<&mut ListBox, TreeError> {
        self.tree.list_data_mut(self.list)
    }

    fn inserted(&mut self, index: usize, item: &ListItem) -> Result<(), TreeError> {
        let widget = self.tree.list_data(self.list)?.item_widget(item);
        self.tree.insert_track(self.list, Axis::Vertical, index, Proportion::Auto)?;
        let child = self.tree.insert(widget);
        self.tree.link(self.list, index, child);
        self.renumber();

        let data = self.data_mut()?;
        if let Some(selected) = data.selected.filter(|&s| s >= index) {
            data.selected = Some(selected + 1);
        }
        Ok(())
    }

    fn removed(&mut self, index: usize) -> Result<(), TreeError> {
        if let Some(child) = self.tree.children(self.list).get(index).copied() {
            self.tree.destroy(child);
        }
        self.tree.remove_track(self.list, Axis::Vertical, index)?;
        self.renumber();

        let data = self.data_mut()?;
        match data.selected {
            Some(selected) if selected == index => {
                data.selected = None;
                self.tree.emit(WidgetEvent::SelectionChanged { list: self.list, selected: None });
            }
            Some(selected) if selected > index => data.selected = Some(selected - 1),
            _ => {}
        }
        Ok(())
    }

    /// Replace the widget of item `index` with a freshly generated one.
    fn refresh(&mut self, index: usize, item: &ListItem) -> Result<(), TreeError> {
        let widget = self.tree.list_data(self.list)?.item_widget(item);
        if let Some(old) = self.tree.children(self.list).get(index).copied() {
            self.tree.destroy(old);
        }
        let child = self.tree.insert(widget);
        self.tree.link(self.list, index, child);
        self.renumber();

        let selected = self.data_mut()?.selected;
        if selected == Some(index) {
            if item.is_separator {
                self.data_mut()?.selected = None;
                self.tree.emit(WidgetEvent::SelectionChanged { list: self.list, selected: None });
            } else {
                set_item_pressed(self.tree, self.list, index, true);
            }
        }
        Ok(())
    }

    fn reset(&mut self, items: &[ListItem]) -> Result<(), TreeError> {
        for child in self.tree.children(self.list).to_vec() {
            self.tree.destroy(child);
        }
        self.tree.grid_mut(self.list)?.tracks_mut(Axis::Vertical).clear();

        if self.data_mut()?.selected.take().is_some() {
            self.tree.emit(WidgetEvent::SelectionChanged { list: self.list, selected: None });
        }

        for (index, item) in items.iter().enumerate() {
            let widget = self.tree.list_data(self.list)?.item_widget(item);
            self.tree.grid_mut(self.list)?.tracks_mut(Axis::Vertical).push(Proportion::Auto);
            let child = self.tree.insert(widget);
            self.tree.link(self.list, index, child);
        }
        self.renumber();
        Ok(())
    }

    /// Put child *k* in row *k*, column 0.
    fn renumber(&mut self) {
        for (row, child) in self.tree.children(self.list).to_vec().into_iter().enumerate() {
            if let Some(widget) = self.tree.get_mut(child) {
                let cell = widget.cell_mut();
                cell.row = row;
                cell.column = 0;
            }
        }
    }
}

// ===========================================================================
// Tests
// ===========================================================================
