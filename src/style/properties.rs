//! Property-kind table: which lookup resolves a given property name.
//!
//! Stylesheets are untyped JSON, so the resolver decides how to interpret a
//! leaf value from the property's name alone. Names that match no rule are
//! unknown and get skipped with a warning.

/// How a property's value is resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyKind {
    /// Hex literal, named color or palette reference.
    Color,
    /// Font name passed to the host font lookup.
    Font,
    /// Drawable name passed to the host drawable lookup, or a hex fill.
    Drawable,
    /// Non-negative numeric literal in pixels.
    Number,
    /// Alignment keyword.
    Alignment,
    /// Nested object holding a sub-widget's style.
    SubStyle,
}

const DRAWABLE_NAMES: &[&str] = &["background", "image", "border", "cursor", "selection"];

const NUMBER_NAMES: &[&str] = &[
    "padding",
    "paddingLeft",
    "paddingTop",
    "paddingRight",
    "paddingBottom",
    "spacing",
    "thickness",
    "width",
    "height",
    "imageTextSpacing",
    "rowSpacing",
    "columnSpacing",
];

const ALIGNMENT_NAMES: &[&str] = &["horizontalAlignment", "verticalAlignment"];

/// Classify a property name. Returns `None` for unknown properties.
pub fn classify(name: &str) -> Option<PropertyKind> {
    if name == "font" || has_suffix(name, "Font") {
        Some(PropertyKind::Font)
    } else if DRAWABLE_NAMES.contains(&name)
        || has_suffix(name, "Background")
        || has_suffix(name, "Image")
    {
        Some(PropertyKind::Drawable)
    } else if name == "color" || has_suffix(name, "Color") {
        Some(PropertyKind::Color)
    } else if NUMBER_NAMES.contains(&name) {
        Some(PropertyKind::Number)
    } else if ALIGNMENT_NAMES.contains(&name) {
        Some(PropertyKind::Alignment)
    } else if has_suffix(name, "Style") {
        Some(PropertyKind::SubStyle)
    } else {
        None
    }
}

/// `name` ends with `suffix` and has a non-empty prefix before it.
fn has_suffix(name: &str, suffix: &str) -> bool {
    name.len() > suffix.len() && name.ends_with(suffix)
}
