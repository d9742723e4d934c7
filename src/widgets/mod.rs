//! Built-in widgets: Label, Button, Image, Separator, Panel, Grid, ListBox.

pub mod button;
pub mod grid;
pub mod image;
pub mod label;
pub mod list_box;
pub mod panel;
pub mod separator;

pub use button::Button;
pub use grid::Grid;
pub use image::Image;
pub use label::Label;
pub use list_box::{ListBox, ListBoxMut, ListItem};
pub use panel::Panel;
pub use separator::Separator;
