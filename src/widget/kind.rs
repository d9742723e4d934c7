//! The closed set of widget kinds.
//!
//! Every widget is one [`WidgetKind`] variant. Style application and leaf
//! measurement dispatch on the variant here; container layout lives in the
//! layout engine because it needs the tree.

use crate::geometry::Size;
use crate::style::PropertyTree;
use crate::widgets::{Button, Grid, Image, Label, ListBox, Panel, Separator};

/// Kind-specific widget data.
#[derive(Debug, Clone)]
pub enum WidgetKind {
    Label(Label),
    Button(Button),
    Image(Image),
    Separator(Separator),
    Panel(Panel),
    Grid(Grid),
    ListBox(ListBox),
}

impl WidgetKind {
    /// Stylesheet type name for this kind.
    pub fn type_name(&self) -> &'static str {
        match self {
            WidgetKind::Label(_) => "label",
            WidgetKind::Button(_) => "button",
            WidgetKind::Image(_) => "image",
            WidgetKind::Separator(_) => "separator",
            WidgetKind::Panel(_) => "panel",
            WidgetKind::Grid(_) => "grid",
            WidgetKind::ListBox(_) => "listBox",
        }
    }

    /// Whether callers may attach children. A list box has children, but
    /// generates them itself.
    pub fn accepts_children(&self) -> bool {
        matches!(self, WidgetKind::Panel(_) | WidgetKind::Grid(_))
    }

    pub fn is_grid(&self) -> bool {
        matches!(self, WidgetKind::Grid(_))
    }

    /// Apply kind-specific style properties.
    pub fn apply_style(&mut self, style: &PropertyTree) {
        match self {
            WidgetKind::Label(label) => label.apply_style(style),
            WidgetKind::Button(button) => button.apply_style(style),
            WidgetKind::Image(image) => image.apply_style(style),
            WidgetKind::Separator(separator) => separator.apply_style(style),
            WidgetKind::Panel(_) => {}
            WidgetKind::Grid(grid) => grid.apply_style(style),
            WidgetKind::ListBox(list) => list.apply_style(style),
        }
    }

    /// Content size of a leaf kind. `None` for containers, which the layout
    /// engine measures from their children.
    pub fn measure_leaf(&self) -> Option<Size> {
        match self {
            WidgetKind::Label(label) => Some(label.measure()),
            WidgetKind::Button(button) => Some(button.measure()),
            WidgetKind::Image(image) => Some(image.measure()),
            WidgetKind::Separator(separator) => Some(separator.measure()),
            WidgetKind::Panel(_) | WidgetKind::Grid(_) | WidgetKind::ListBox(_) => None,
        }
    }

    /// Track data for kinds laid out as a grid.
    pub fn grid(&self) -> Option<&Grid> {
        match self {
            WidgetKind::Grid(grid) => Some(grid),
            WidgetKind::ListBox(list) => Some(list.grid()),
            _ => None,
        }
    }

    pub(crate) fn grid_mut(&mut self) -> Option<&mut Grid> {
        match self {
            WidgetKind::Grid(grid) => Some(grid),
            WidgetKind::ListBox(list) => Some(list.grid_mut()),
            _ => None,
        }
    }

    pub fn as_label(&self) -> Option<&Label> {
        match self {
            WidgetKind::Label(label) => Some(label),
            _ => None,
        }
    }

    pub fn as_label_mut(&mut self) -> Option<&mut Label> {
        match self {
            WidgetKind::Label(label) => Some(label),
            _ => None,
        }
    }

    pub fn as_button(&self) -> Option<&Button> {
        match self {
            WidgetKind::Button(button) => Some(button),
            _ => None,
        }
    }

    pub fn as_button_mut(&mut self) -> Option<&mut Button> {
        match self {
            WidgetKind::Button(button) => Some(button),
            _ => None,
        }
    }

    pub fn as_separator(&self) -> Option<&Separator> {
        match self {
            WidgetKind::Separator(separator) => Some(separator),
            _ => None,
        }
    }

    pub fn as_list_box(&self) -> Option<&ListBox> {
        match self {
            WidgetKind::ListBox(list) => Some(list),
            _ => None,
        }
    }

    pub(crate) fn as_list_box_mut(&mut self) -> Option<&mut ListBox> {
        match self {
            WidgetKind::ListBox(list) => Some(list),
            _ => None,
        }
    }
}

macro_rules! impl_from_kind {
    ($($variant:ident),* $(,)?) => {
        $(
            impl From<$variant> for WidgetKind {
                fn from(value: $variant) -> Self {
                    WidgetKind::$variant(value)
                }
            }
        )*
    };
}

impl_from_kind!(Label, Button, Image, Separator, Panel, Grid, ListBox);
