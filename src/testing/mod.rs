//! Headless testing support: fixture assets and layout snapshot helpers.
//!
//! Use [`fixtures`] to resolve stylesheets without a renderer, and
//! [`layout_to_string`] to capture arranged bounds as plain text for
//! snapshot-style assertions.

pub mod fixtures;
pub mod snapshot;

pub use fixtures::{drawable_lookup, font_lookup, MonoFont, SizedDrawable};
pub use snapshot::layout_to_string;
