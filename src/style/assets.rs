//! Host-supplied asset traits.
//!
//! The toolkit never rasterizes anything. Fonts and drawables come from the host
//! renderer through name lookups at stylesheet resolution time, and the layout
//! engine only asks them for metrics.

use std::fmt;
use std::rc::Rc;

use crate::geometry::Size;

/// A font as seen by layout: something that can measure text.
pub trait Font: fmt::Debug {
    /// Pixel extent of `text` rendered on as many lines as it contains.
    fn measure(&self, text: &str) -> Size;
}

/// A drawable (texture region, nine-patch, ...) as seen by layout.
pub trait Drawable: fmt::Debug {
    /// Natural size of the drawable.
    fn size(&self) -> Size;
}

/// Shared handle to a host font.
pub type FontRef = Rc<dyn Font>;

/// Shared handle to a host drawable.
pub type DrawableRef = Rc<dyn Drawable>;
