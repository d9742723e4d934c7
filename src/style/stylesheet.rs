//! Stylesheet: per-widget-type tables of named style variants.
//!
//! A [`Stylesheet`] is built once (usually by [`Stylesheet::from_json`]) and is
//! read-only afterwards. Variants are handed out as `Rc<StyleVariant>` so every
//! widget styled from the same variant shares one allocation.

use std::collections::BTreeMap;
use std::rc::Rc;

use tracing::debug;

use super::assets::{DrawableRef, FontRef};
use super::color::Color;
use super::resolver::{self, ParseError};
use super::value::PropertyTree;

/// Name of the fallback variant every instantiated widget type needs.
pub const DEFAULT_VARIANT: &str = "default";

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// A widget asked for a style the stylesheet cannot provide.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StyleNotFoundError {
    #[error("no styles registered for widget type '{widget_type}'")]
    UnknownType { widget_type: String },
    #[error("widget type '{widget_type}' has no '{variant}' variant and no default")]
    NoDefault { widget_type: String, variant: String },
}

// ---------------------------------------------------------------------------
// StyleVariant
// ---------------------------------------------------------------------------

/// One named style configuration for a widget type.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleVariant {
    name: String,
    properties: PropertyTree,
}

impl StyleVariant {
    /// Create a variant from an already-resolved property tree.
    pub fn new(name: impl Into<String>, properties: PropertyTree) -> Self {
        Self {
            name: name.into(),
            properties,
        }
    }

    /// The variant name (`"default"`, `"error"`, ...).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The variant's properties.
    pub fn properties(&self) -> &PropertyTree {
        &self.properties
    }
}

// ---------------------------------------------------------------------------
// Stylesheet
// ---------------------------------------------------------------------------

/// Widget-type name → variant name → [`StyleVariant`].
#[derive(Debug, Clone, Default)]
pub struct Stylesheet {
    types: BTreeMap<String, BTreeMap<String, Rc<StyleVariant>>>,
    palette: BTreeMap<String, Color>,
}

impl Stylesheet {
    /// Create an empty stylesheet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve a JSON stylesheet document.
    ///
    /// `font_lookup` and `drawable_lookup` map asset names to host objects; any
    /// name they cannot resolve fails the whole load. See [`resolver::resolve`].
    pub fn from_json<F, D>(
        source: &str,
        font_lookup: F,
        drawable_lookup: D,
    ) -> Result<Stylesheet, ParseError>
    where
        F: Fn(&str) -> Option<FontRef>,
        D: Fn(&str) -> Option<DrawableRef>,
    {
        resolver::resolve(source, &font_lookup, &drawable_lookup)
    }

    /// Register (or replace) a variant for `widget_type`.
    pub fn insert_variant(&mut self, widget_type: impl Into<String>, variant: StyleVariant) {
        self.types
            .entry(widget_type.into())
            .or_default()
            .insert(variant.name.clone(), Rc::new(variant));
    }

    /// Register an empty table for `widget_type` so it shows up in
    /// [`widget_types`](Self::widget_types) even without variants.
    pub(crate) fn ensure_type(&mut self, widget_type: &str) {
        self.types.entry(widget_type.to_owned()).or_default();
    }

    /// Register a named palette color.
    pub fn insert_palette_color(&mut self, name: impl Into<String>, color: Color) {
        self.palette.insert(name.into(), color);
    }

    /// Look up the style for `widget_type`.
    ///
    /// With `variant == None`, or when the named variant does not exist, the
    /// type's `"default"` variant is returned. Fails only when the type is
    /// unknown or the fallback is needed and missing.
    pub fn style(
        &self,
        widget_type: &str,
        variant: Option<&str>,
    ) -> Result<Rc<StyleVariant>, StyleNotFoundError> {
        let table = self
            .types
            .get(widget_type)
            .ok_or_else(|| StyleNotFoundError::UnknownType {
                widget_type: widget_type.to_owned(),
            })?;

        if let Some(name) = variant {
            if let Some(found) = table.get(name) {
                return Ok(Rc::clone(found));
            }
            debug!(widget_type, variant = name, "style variant missing, using default");
        }

        table
            .get(DEFAULT_VARIANT)
            .map(Rc::clone)
            .ok_or_else(|| StyleNotFoundError::NoDefault {
                widget_type: widget_type.to_owned(),
                variant: variant.unwrap_or(DEFAULT_VARIANT).to_owned(),
            })
    }

    /// The `"default"` variant of `widget_type`.
    pub fn default_style(&self, widget_type: &str) -> Result<Rc<StyleVariant>, StyleNotFoundError> {
        self.style(widget_type, None)
    }

    /// Variant names registered for `widget_type`, sorted. Empty for unknown types.
    pub fn variant_names(&self, widget_type: &str) -> Vec<&str> {
        self.types
            .get(widget_type)
            .map(|table| table.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }

    /// Whether `widget_type` has any style table.
    pub fn has_type(&self, widget_type: &str) -> bool {
        self.types.contains_key(widget_type)
    }

    /// All widget type names, sorted.
    pub fn widget_types(&self) -> impl Iterator<Item = &str> {
        self.types.keys().map(String::as_str)
    }

    /// A color from the stylesheet's `"colors"` palette.
    pub fn palette_color(&self, name: &str) -> Option<Color> {
        self.palette.get(name).copied()
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::value::StyleValue;

    fn variant(name: &str, color: Color) -> StyleVariant {
        StyleVariant::new(
            name,
            PropertyTree::new().with("textColor", StyleValue::Color(color)),
        )
    }

    fn sheet() -> Stylesheet {
        let mut sheet = Stylesheet::new();
        sheet.insert_variant("label", variant("default", Color::WHITE));
        sheet.insert_variant("label", variant("error", Color::RED));
        sheet.insert_variant("tooltip", variant("dark", Color::BLACK));
        sheet
    }

    #[test]
    fn no_name_yields_default() {
        let style = sheet().style("label", None).unwrap();
        assert_eq!(style.name(), "default");
        assert_eq!(style.properties().color("textColor"), Some(Color::WHITE));
    }

    #[test]
    fn explicit_name_yields_variant() {
        let style = sheet().style("label", Some("error")).unwrap();
        assert_eq!(style.name(), "error");
        assert_eq!(style.properties().color("textColor"), Some(Color::RED));
    }

    #[test]
    fn absent_name_falls_back_to_default() {
        let style = sheet().style("label", Some("highlighted")).unwrap();
        assert_eq!(style.name(), "default");
    }

    #[test]
    fn missing_default_is_an_error() {
        let sheet = sheet();
        assert_eq!(
            sheet.style("tooltip", None).unwrap_err(),
            StyleNotFoundError::NoDefault {
                widget_type: "tooltip".into(),
                variant: "default".into(),
            }
        );
        assert_eq!(
            sheet.style("tooltip", Some("light")).unwrap_err(),
            StyleNotFoundError::NoDefault {
                widget_type: "tooltip".into(),
                variant: "light".into(),
            }
        );
        // An existing variant still resolves without a default.
        assert!(sheet.style("tooltip", Some("dark")).is_ok());
    }

    #[test]
    fn unknown_type_is_an_error() {
        assert_eq!(
            sheet().style("slider", None).unwrap_err(),
            StyleNotFoundError::UnknownType { widget_type: "slider".into() }
        );
    }

    #[test]
    fn variants_are_shared() {
        let sheet = sheet();
        let a = sheet.style("label", None).unwrap();
        let b = sheet.default_style("label").unwrap();
        assert!(Rc::ptr_eq(&a, &b));
    }

    #[test]
    fn variant_names_sorted() {
        let sheet = sheet();
        assert_eq!(sheet.variant_names("label"), vec!["default", "error"]);
        assert!(sheet.variant_names("slider").is_empty());
        assert_eq!(sheet.widget_types().collect::<Vec<_>>(), vec!["label", "tooltip"]);
    }

    #[test]
    fn palette_lookup() {
        let mut sheet = Stylesheet::new();
        sheet.insert_palette_color("accent", Color::BLUE);
        assert_eq!(sheet.palette_color("accent"), Some(Color::BLUE));
        assert_eq!(sheet.palette_color("missing"), None);
    }
}
