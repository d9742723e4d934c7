//! Track sizing policies for grid rows and columns.

use std::fmt;

/// How a grid row or column is sized.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Proportion {
    /// Exactly this many pixels, regardless of content.
    Fixed(i32),
    /// Large enough for the content assigned to the track.
    Auto,
    /// A share of the space left after Fixed and Auto tracks, by weight.
    Fill(f32),
}

impl Proportion {
    /// A `Fill` track with weight 1.
    pub const FILL: Proportion = Proportion::Fill(1.0);

    pub fn is_fill(self) -> bool {
        matches!(self, Proportion::Fill(_))
    }

    /// The Fill weight, or zero for other kinds. Negative and NaN weights
    /// count as zero.
    pub fn weight(self) -> f64 {
        match self {
            Proportion::Fill(w) if w > 0.0 => f64::from(w),
            _ => 0.0,
        }
    }
}

impl Default for Proportion {
    fn default() -> Self {
        Proportion::Auto
    }
}

impl fmt::Display for Proportion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Proportion::Fixed(px) => write!(f, "{px}px"),
            Proportion::Auto => f.write_str("auto"),
            Proportion::Fill(w) => write!(f, "{w}*"),
        }
    }
}
