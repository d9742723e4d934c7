//! Fixture assets: a monospace font and fixed-size drawables.
//!
//! These stand in for the host renderer in tests and examples. Every glyph of a
//! [`MonoFont`] has the same advance, so text extents are easy to predict.

use std::rc::Rc;

use crate::geometry::Size;
use crate::style::{Drawable, DrawableRef, Font, FontRef};

/// A font whose glyphs all share one advance width and line height.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonoFont {
    pub glyph_width: i32,
    pub line_height: i32,
}

impl MonoFont {
    pub fn new(glyph_width: i32, line_height: i32) -> Self {
        Self { glyph_width, line_height }
    }
}

impl Font for MonoFont {
    fn measure(&self, text: &str) -> Size {
        if text.is_empty() {
            return Size::ZERO;
        }
        let lines = text.split('\n');
        let (count, widest) = lines.fold((0, 0), |(count, widest), line| {
            (count + 1, widest.max(line.chars().count() as i32))
        });
        Size::new(widest * self.glyph_width, count * self.line_height)
    }
}

/// A drawable with a fixed natural size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SizedDrawable {
    pub size: Size,
}

impl SizedDrawable {
    pub fn new(width: i32, height: i32) -> Self {
        Self { size: Size::new(width, height) }
    }
}

impl Drawable for SizedDrawable {
    fn size(&self) -> Size {
        self.size
    }
}

/// Font lookup for fixtures: `"sans"` is 8x16, `"small"` is 6x12.
pub fn font_lookup(name: &str) -> Option<FontRef> {
    match name {
        "sans" => Some(Rc::new(MonoFont::new(8, 16))),
        "small" => Some(Rc::new(MonoFont::new(6, 12))),
        _ => None,
    }
}

/// Drawable lookup for fixtures.
///
/// `"button"`, `"button-pressed"` and `"list-item"` are 16x16 nine-patch
/// stand-ins, `"icon-star"` is 12x12 and `"separator"` is 1x2.
pub fn drawable_lookup(name: &str) -> Option<DrawableRef> {
    match name {
        "button" | "button-pressed" | "list-item" => Some(Rc::new(SizedDrawable::new(16, 16))),
        "icon-star" => Some(Rc::new(SizedDrawable::new(12, 12))),
        "separator" => Some(Rc::new(SizedDrawable::new(1, 2))),
        _ => None,
    }
}
