//! Core geometry types: Size, Region, Spacing, Axis, Alignment.
//!
//! All coordinates are integer pixels. Layout arithmetic never produces negative
//! widths or heights; overflow is represented by regions extending past their
//! parent, which the renderer clips.

use std::ops::Add;

// ---------------------------------------------------------------------------
// Axis
// ---------------------------------------------------------------------------

/// One of the two layout axes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Left to right: widths, columns.
    Horizontal,
    /// Top to bottom: heights, rows.
    Vertical,
}

// ---------------------------------------------------------------------------
// Alignment
// ---------------------------------------------------------------------------

/// How a widget is positioned inside the slot its parent assigns along one axis.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Alignment {
    /// Left or top edge.
    #[default]
    Start,
    /// Centered in the slot.
    Center,
    /// Right or bottom edge.
    End,
    /// Fill the whole slot.
    Stretch,
}

impl Alignment {
    /// Parse a stylesheet keyword. Accepts the axis-specific spellings
    /// (`left`/`top`, `right`/`bottom`) as well as `start`/`end`. Case-insensitive.
    pub fn from_keyword(keyword: &str) -> Option<Alignment> {
        match keyword.to_ascii_lowercase().as_str() {
            "start" | "left" | "top" => Some(Alignment::Start),
            "center" | "centre" => Some(Alignment::Center),
            "end" | "right" | "bottom" => Some(Alignment::End),
            "stretch" => Some(Alignment::Stretch),
            _ => None,
        }
    }

    /// Place an extent of `size` inside a slot starting at `start` with length `slot`.
    ///
    /// Returns `(offset, length)`. The length never exceeds the slot.
    #[inline]
    pub fn place(self, start: i32, slot: i32, size: i32) -> (i32, i32) {
        let slot = slot.max(0);
        let size = size.clamp(0, slot);
        match self {
            Alignment::Start => (start, size),
            Alignment::Center => (start.saturating_add((slot - size) / 2), size),
            Alignment::End => (start.saturating_add(slot - size), size),
            Alignment::Stretch => (start, slot),
        }
    }
}

// ---------------------------------------------------------------------------
// Size
// ---------------------------------------------------------------------------

/// A 2D size in pixels (width x height).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    /// A zero-sized size.
    pub const ZERO: Size = Size { width: 0, height: 0 };

    /// Create a new size.
    #[inline]
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Component-wise maximum.
    #[inline]
    pub fn max(self, other: Size) -> Size {
        Size {
            width: self.width.max(other.width),
            height: self.height.max(other.height),
        }
    }

    /// Clamp both components to be non-negative.
    #[inline]
    pub fn non_negative(self) -> Size {
        Size {
            width: self.width.max(0),
            height: self.height.max(0),
        }
    }

    /// Convert to a [`Region`] positioned at the origin.
    #[inline]
    pub const fn to_region(self) -> Region {
        Region { x: 0, y: 0, width: self.width, height: self.height }
    }
}

impl Add for Size {
    type Output = Size;
    #[inline]
    fn add(self, rhs: Size) -> Size {
        Size {
            width: self.width.saturating_add(rhs.width),
            height: self.height.saturating_add(rhs.height),
        }
    }
}

// ---------------------------------------------------------------------------
// Region
// ---------------------------------------------------------------------------

/// A rectangle defined by position and size. Arranged bounds are regions.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Region {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Region {
    /// An empty region at the origin.
    pub const EMPTY: Region = Region { x: 0, y: 0, width: 0, height: 0 };

    /// Create a new region.
    #[inline]
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }

    /// The right edge (exclusive): `x + width`.
    #[inline]
    pub const fn right(self) -> i32 {
        self.x.saturating_add(self.width)
    }

    /// The bottom edge (exclusive): `y + height`.
    #[inline]
    pub const fn bottom(self) -> i32 {
        self.y.saturating_add(self.height)
    }

    /// The dimensions as a [`Size`].
    #[inline]
    pub const fn size(self) -> Size {
        Size { width: self.width, height: self.height }
    }

    /// Whether the point (x, y) lies inside this region.
    #[inline]
    pub const fn contains(self, x: i32, y: i32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Contract the region inward by the given [`Spacing`].
    ///
    /// Width and height are clamped to zero to avoid negative dimensions.
    #[inline]
    pub const fn shrink(self, padding: Spacing) -> Region {
        let w = self.width.saturating_sub(padding.width());
        let h = self.height.saturating_sub(padding.height());
        Region {
            x: self.x.saturating_add(padding.left),
            y: self.y.saturating_add(padding.top),
            width: if w > 0 { w } else { 0 },
            height: if h > 0 { h } else { 0 },
        }
    }

    /// Position a box of `size` inside this region using per-axis alignment.
    #[inline]
    pub fn align(self, size: Size, horizontal: Alignment, vertical: Alignment) -> Region {
        let (x, width) = horizontal.place(self.x, self.width, size.width);
        let (y, height) = vertical.place(self.y, self.height, size.height);
        Region { x, y, width, height }
    }
}

// ---------------------------------------------------------------------------
// Spacing
// ---------------------------------------------------------------------------

/// Spacing around the four sides of a rectangle, used for padding.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Spacing {
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
    pub left: i32,
}

impl Spacing {
    /// Zero spacing on all sides.
    pub const ZERO: Spacing = Spacing { top: 0, right: 0, bottom: 0, left: 0 };

    /// Create spacing with explicit values for each side.
    #[inline]
    pub const fn new(top: i32, right: i32, bottom: i32, left: i32) -> Self {
        Self { top, right, bottom, left }
    }

    /// All four sides set to the same value.
    #[inline]
    pub const fn all(value: i32) -> Self {
        Self { top: value, right: value, bottom: value, left: value }
    }

    /// Total horizontal extent: `left + right`.
    #[inline]
    pub const fn width(self) -> i32 {
        self.left.saturating_add(self.right)
    }

    /// Total vertical extent: `top + bottom`.
    #[inline]
    pub const fn height(self) -> i32 {
        self.top.saturating_add(self.bottom)
    }

    /// Both extents as a [`Size`].
    #[inline]
    pub const fn size(self) -> Size {
        Size { width: self.width(), height: self.height() }
    }
}

// ===========================================================================
// Tests
// ===========================================================================
