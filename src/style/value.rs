//! Resolved style values and the property tree they live in.
//!
//! A [`PropertyTree`] maps property names to [`StyleValue`]s. Nested sub-styles
//! (a button's embedded label style, a list box's item style) are themselves
//! trees, addressed with `/`-separated paths such as `labelStyle/textColor`.

use std::collections::BTreeMap;
use std::rc::Rc;

use crate::geometry::{Alignment, Size};

use super::assets::{DrawableRef, FontRef};
use super::color::Color;

// ---------------------------------------------------------------------------
// DrawableValue
// ---------------------------------------------------------------------------

/// A drawable property: either a host asset or a flat color fill.
#[derive(Clone, Debug)]
pub enum DrawableValue {
    Asset(DrawableRef),
    Solid(Color),
}

impl DrawableValue {
    /// Natural size. Solid fills have no intrinsic size.
    pub fn size(&self) -> Size {
        match self {
            DrawableValue::Asset(drawable) => drawable.size(),
            DrawableValue::Solid(_) => Size::ZERO,
        }
    }
}

impl PartialEq for DrawableValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (DrawableValue::Asset(a), DrawableValue::Asset(b)) => Rc::ptr_eq(a, b),
            (DrawableValue::Solid(a), DrawableValue::Solid(b)) => a == b,
            _ => false,
        }
    }
}

// ---------------------------------------------------------------------------
// StyleValue
// ---------------------------------------------------------------------------

/// A single resolved property value.
#[derive(Clone, Debug)]
pub enum StyleValue {
    Color(Color),
    Font(FontRef),
    Drawable(DrawableValue),
    Number(f64),
    Alignment(Alignment),
    Tree(PropertyTree),
}

impl PartialEq for StyleValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (StyleValue::Color(a), StyleValue::Color(b)) => a == b,
            (StyleValue::Font(a), StyleValue::Font(b)) => Rc::ptr_eq(a, b),
            (StyleValue::Drawable(a), StyleValue::Drawable(b)) => a == b,
            (StyleValue::Number(a), StyleValue::Number(b)) => a == b,
            (StyleValue::Alignment(a), StyleValue::Alignment(b)) => a == b,
            (StyleValue::Tree(a), StyleValue::Tree(b)) => a == b,
            _ => false,
        }
    }
}

// ---------------------------------------------------------------------------
// PropertyTree
// ---------------------------------------------------------------------------

/// Named properties of one style variant or sub-style.
///
/// Keys are unique; inserting an existing key replaces its value.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PropertyTree {
    entries: BTreeMap<String, StyleValue>,
}

impl PropertyTree {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a property, returning the value it replaced.
    pub fn insert(&mut self, key: impl Into<String>, value: StyleValue) -> Option<StyleValue> {
        self.entries.insert(key.into(), value)
    }

    /// Set a property (builder).
    pub fn with(mut self, key: impl Into<String>, value: StyleValue) -> Self {
        self.insert(key, value);
        self
    }

    /// Look up a value by `/`-separated path.
    pub fn get(&self, path: &str) -> Option<&StyleValue> {
        let mut segments = path.split('/');
        let first = segments.next()?;
        let mut current = self.entries.get(first)?;
        for segment in segments {
            match current {
                StyleValue::Tree(tree) => current = tree.entries.get(segment)?,
                _ => return None,
            }
        }
        Some(current)
    }

    /// The nested tree at `path`, if that path names a sub-style.
    pub fn subtree(&self, path: &str) -> Option<&PropertyTree> {
        match self.get(path)? {
            StyleValue::Tree(tree) => Some(tree),
            _ => None,
        }
    }

    pub fn color(&self, path: &str) -> Option<Color> {
        match self.get(path)? {
            StyleValue::Color(color) => Some(*color),
            _ => None,
        }
    }

    pub fn font(&self, path: &str) -> Option<FontRef> {
        match self.get(path)? {
            StyleValue::Font(font) => Some(Rc::clone(font)),
            _ => None,
        }
    }

    pub fn drawable(&self, path: &str) -> Option<DrawableValue> {
        match self.get(path)? {
            StyleValue::Drawable(drawable) => Some(drawable.clone()),
            _ => None,
        }
    }

    pub fn number(&self, path: &str) -> Option<f64> {
        match self.get(path)? {
            StyleValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// A numeric property rounded to whole pixels.
    pub fn pixels(&self, path: &str) -> Option<i32> {
        self.number(path).map(|n| n.round() as i32)
    }

    pub fn alignment(&self, path: &str) -> Option<Alignment> {
        match self.get(path)? {
            StyleValue::Alignment(alignment) => Some(*alignment),
            _ => None,
        }
    }

    /// Top-level property names in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Number of top-level properties.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the tree has no properties.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
