//! Style engine: JSON resolver, stylesheet, variants, property trees.

pub mod assets;
pub mod color;
pub mod properties;
pub mod resolver;
pub mod stylesheet;
pub mod value;

pub use assets::{Drawable, DrawableRef, Font, FontRef};
pub use color::Color;
pub use properties::PropertyKind;
pub use resolver::ParseError;
pub use stylesheet::{StyleNotFoundError, StyleVariant, Stylesheet, DEFAULT_VARIANT};
pub use value::{DrawableValue, PropertyTree, StyleValue};
