//! JSON stylesheet resolver.
//!
//! Walks a JSON document of the shape
//!
//! ```json
//! {
//!   "colors": { "accent": "#1E90FF" },
//!   "button": {
//!     "default": { "font": "sans", "textColor": "accent", "labelStyle": { ... } },
//!     "danger":  { "textColor": "#FF0000" }
//!   }
//! }
//! ```
//!
//! Top-level keys are widget-type names (except the reserved `"colors"`
//! palette), second-level keys are variant names, and leaves are resolved by
//! property name through [`classify`]. Any error aborts the whole load; unknown
//! property names are logged and skipped.

use std::collections::BTreeMap;

use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::geometry::Alignment;

use super::assets::{DrawableRef, FontRef};
use super::color::Color;
use super::properties::{classify, PropertyKind};
use super::stylesheet::{StyleVariant, Stylesheet, DEFAULT_VARIANT};
use super::value::{DrawableValue, PropertyTree, StyleValue};

/// Reserved top-level key holding the named color palette.
pub const PALETTE_KEY: &str = "colors";

/// Largest accepted size property, in pixels. Leaves headroom so padding on
/// both sides plus content stays within `i32`.
pub const MAX_PIXELS: f64 = (i32::MAX / 4) as f64;

/// Errors from stylesheet resolution. No partial stylesheet survives one.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("malformed stylesheet JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("expected an object at '{path}'")]
    ExpectedObject { path: String },
    #[error("invalid value for '{path}': {message}")]
    InvalidValue { path: String, message: String },
    #[error("font '{name}' referenced by '{path}' could not be resolved")]
    UnresolvedFont { path: String, name: String },
    #[error("drawable '{name}' referenced by '{path}' could not be resolved")]
    UnresolvedDrawable { path: String, name: String },
}

impl ParseError {
    fn invalid(path: &str, message: impl Into<String>) -> Self {
        ParseError::InvalidValue {
            path: path.to_owned(),
            message: message.into(),
        }
    }
}

/// Resolve `source` into a [`Stylesheet`] using the host's asset lookups.
pub fn resolve(
    source: &str,
    font_lookup: &dyn Fn(&str) -> Option<FontRef>,
    drawable_lookup: &dyn Fn(&str) -> Option<DrawableRef>,
) -> Result<Stylesheet, ParseError> {
    let root: Value = serde_json::from_str(source)?;
    let root = root
        .as_object()
        .ok_or_else(|| ParseError::ExpectedObject { path: "$".into() })?;

    let palette = match root.get(PALETTE_KEY) {
        Some(colors) => resolve_palette(colors)?,
        None => BTreeMap::new(),
    };

    let resolver = Resolver {
        palette: &palette,
        font_lookup,
        drawable_lookup,
    };

    let mut sheet = Stylesheet::new();
    for (name, color) in &palette {
        sheet.insert_palette_color(name.clone(), *color);
    }

    for (widget_type, variants) in root {
        if widget_type == PALETTE_KEY {
            continue;
        }
        let variants = variants
            .as_object()
            .ok_or_else(|| ParseError::ExpectedObject { path: widget_type.clone() })?;

        sheet.ensure_type(widget_type);
        for (variant_name, body) in variants {
            let path = format!("{widget_type}/{variant_name}");
            let body = body
                .as_object()
                .ok_or_else(|| ParseError::ExpectedObject { path: path.clone() })?;
            let properties = resolver.resolve_tree(&path, body)?;
            sheet.insert_variant(widget_type.clone(), StyleVariant::new(variant_name.clone(), properties));
        }

        if !variants.contains_key(DEFAULT_VARIANT) {
            debug!(widget_type = %widget_type, "widget type has no default style variant");
        }
    }

    Ok(sheet)
}

fn resolve_palette(colors: &Value) -> Result<BTreeMap<String, Color>, ParseError> {
    let colors = colors
        .as_object()
        .ok_or_else(|| ParseError::ExpectedObject { path: PALETTE_KEY.into() })?;

    let mut palette = BTreeMap::new();
    for (name, value) in colors {
        let path = format!("{PALETTE_KEY}/{name}");
        let literal = value
            .as_str()
            .ok_or_else(|| ParseError::invalid(&path, "expected a color string"))?;
        let color = Color::parse(literal)
            .ok_or_else(|| ParseError::invalid(&path, format!("unrecognized color '{literal}'")))?;
        palette.insert(name.clone(), color);
    }
    Ok(palette)
}

// ---------------------------------------------------------------------------
// Resolver
// ---------------------------------------------------------------------------

struct Resolver<'a> {
    palette: &'a BTreeMap<String, Color>,
    font_lookup: &'a dyn Fn(&str) -> Option<FontRef>,
    drawable_lookup: &'a dyn Fn(&str) -> Option<DrawableRef>,
}

impl Resolver<'_> {
    fn resolve_tree(&self, prefix: &str, object: &Map<String, Value>) -> Result<PropertyTree, ParseError> {
        let mut tree = PropertyTree::new();
        for (key, value) in object {
            let path = format!("{prefix}/{key}");
            if key.contains('/') {
                return Err(ParseError::invalid(
                    &path,
                    "property names cannot contain '/'; nest a sub-style object instead",
                ));
            }
            let Some(kind) = classify(key) else {
                warn!(property = %path, "unknown style property, skipped");
                continue;
            };
            let resolved = self.resolve_value(kind, &path, value)?;
            tree.insert(key.clone(), resolved);
        }
        Ok(tree)
    }

    fn resolve_value(&self, kind: PropertyKind, path: &str, value: &Value) -> Result<StyleValue, ParseError> {
        match kind {
            PropertyKind::SubStyle => {
                let object = value
                    .as_object()
                    .ok_or_else(|| ParseError::ExpectedObject { path: path.to_owned() })?;
                Ok(StyleValue::Tree(self.resolve_tree(path, object)?))
            }
            PropertyKind::Color => {
                let literal = expect_str(path, value)?;
                self.color(literal)
                    .map(StyleValue::Color)
                    .ok_or_else(|| ParseError::invalid(path, format!("unrecognized color '{literal}'")))
            }
            PropertyKind::Font => {
                let name = expect_str(path, value)?;
                (self.font_lookup)(name)
                    .map(StyleValue::Font)
                    .ok_or_else(|| ParseError::UnresolvedFont {
                        path: path.to_owned(),
                        name: name.to_owned(),
                    })
            }
            PropertyKind::Drawable => {
                let name = expect_str(path, value)?;
                if name.starts_with('#') {
                    let color = Color::from_hex(name)
                        .ok_or_else(|| ParseError::invalid(path, format!("unrecognized color '{name}'")))?;
                    return Ok(StyleValue::Drawable(DrawableValue::Solid(color)));
                }
                (self.drawable_lookup)(name)
                    .map(|drawable| StyleValue::Drawable(DrawableValue::Asset(drawable)))
                    .ok_or_else(|| ParseError::UnresolvedDrawable {
                        path: path.to_owned(),
                        name: name.to_owned(),
                    })
            }
            PropertyKind::Number => {
                let number = value
                    .as_f64()
                    .ok_or_else(|| ParseError::invalid(path, "expected a number"))?;
                if !number.is_finite() || number < 0.0 {
                    return Err(ParseError::invalid(path, format!("expected a non-negative size, got {number}")));
                }
                if number > MAX_PIXELS {
                    return Err(ParseError::invalid(path, format!("size {number} exceeds {MAX_PIXELS}")));
                }
                Ok(StyleValue::Number(number))
            }
            PropertyKind::Alignment => {
                let keyword = expect_str(path, value)?;
                Alignment::from_keyword(keyword)
                    .map(StyleValue::Alignment)
                    .ok_or_else(|| ParseError::invalid(path, format!("unknown alignment '{keyword}'")))
            }
        }
    }

    /// Palette names shadow built-in color names.
    fn color(&self, literal: &str) -> Option<Color> {
        self.palette.get(literal).copied().or_else(|| Color::parse(literal))
    }
}

fn expect_str<'v>(path: &str, value: &'v Value) -> Result<&'v str, ParseError> {
    value
        .as_str()
        .ok_or_else(|| ParseError::invalid(path, format!("expected a string, got {value}")))
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Size;
    use crate::testing::fixtures::{drawable_lookup, font_lookup};

    fn load(source: &str) -> Result<Stylesheet, ParseError> {
        Stylesheet::from_json(source, font_lookup, drawable_lookup)
    }

    #[test]
    fn button_default_text_color() {
        let sheet = load(r##"{"button": {"default": {"font": "sans", "textColor": "#FF0000"}}}"##).unwrap();
        let style = sheet.style("button", None).unwrap();
        assert_eq!(style.properties().color("textColor"), Some(Color::RED));
        let font = style.properties().font("font").unwrap();
        assert_eq!(font.measure("ab"), Size::new(16, 16));
    }

    #[test]
    fn nested_sub_styles_recurse() {
        let sheet = load(
            r##"{"button": {"default": {
                "background": "button",
                "labelStyle": {"textColor": "white", "font": "small"}
            }}}"##,
        )
        .unwrap();
        let props = sheet.default_style("button").unwrap().properties().clone();
        assert_eq!(props.color("labelStyle/textColor"), Some(Color::WHITE));
        assert!(props.font("labelStyle/font").is_some());
        assert_eq!(props.drawable("background").unwrap().size(), Size::new(16, 16));
    }

    #[test]
    fn palette_colors_resolve() {
        let sheet = load(
            r##"{"colors": {"accent": "#1E90FF", "white": "#EEEEEE"},
                 "label": {"default": {"textColor": "accent", "disabledTextColor": "white"}}}"##,
        )
        .unwrap();
        let props = sheet.default_style("label").unwrap().properties().clone();
        assert_eq!(props.color("textColor"), Some(Color::rgb(0x1E, 0x90, 0xFF)));
        // Palette entries shadow built-in names.
        assert_eq!(props.color("disabledTextColor"), Some(Color::rgb(0xEE, 0xEE, 0xEE)));
        assert_eq!(sheet.palette_color("accent"), Some(Color::rgb(0x1E, 0x90, 0xFF)));
        assert!(!sheet.has_type("colors"));
    }

    #[test]
    fn solid_color_drawable() {
        let sheet = load(r##"{"panel": {"default": {"background": "#00000080"}}}"##).unwrap();
        let props = sheet.default_style("panel").unwrap().properties().clone();
        assert_eq!(
            props.drawable("background"),
            Some(DrawableValue::Solid(Color::rgba(0, 0, 0, 0x80)))
        );
    }

    #[test]
    fn numbers_and_alignment() {
        let sheet = load(
            r##"{"grid": {"default": {"rowSpacing": 4, "padding": 2.5, "horizontalAlignment": "Center"}}}"##,
        )
        .unwrap();
        let props = sheet.default_style("grid").unwrap().properties().clone();
        assert_eq!(props.number("rowSpacing"), Some(4.0));
        assert_eq!(props.number("padding"), Some(2.5));
        assert_eq!(props.alignment("horizontalAlignment"), Some(Alignment::Center));
    }

    #[test]
    fn unknown_properties_are_skipped() {
        let sheet = load(r##"{"label": {"default": {"sparkle": true, "textColor": "red", "extra": {"a": 1}}}}"##).unwrap();
        let props = sheet.default_style("label").unwrap().properties().clone();
        assert_eq!(props.keys().collect::<Vec<_>>(), vec!["textColor"]);
    }

    #[test]
    fn type_without_default_still_loads() {
        let sheet = load(r##"{"tooltip": {"dark": {"textColor": "black"}}}"##).unwrap();
        assert!(sheet.style("tooltip", Some("dark")).is_ok());
        assert!(sheet.style("tooltip", None).is_err());
    }

    #[test]
    fn empty_type_table_is_registered() {
        let sheet = load(r#"{"separator": {}}"#).unwrap();
        assert!(sheet.has_type("separator"));
        assert!(sheet.variant_names("separator").is_empty());
    }

    // -----------------------------------------------------------------------
    // Failures
    // -----------------------------------------------------------------------

    #[test]
    fn malformed_json() {
        assert!(matches!(load(r#"{"button": "#), Err(ParseError::Json(_))));
    }

    #[test]
    fn root_must_be_object() {
        assert!(matches!(load("[1, 2]"), Err(ParseError::ExpectedObject { path }) if path == "$"));
    }

    #[test]
    fn variant_must_be_object() {
        let err = load(r#"{"button": {"default": 3}}"#).unwrap_err();
        assert!(matches!(err, ParseError::ExpectedObject { path } if path == "button/default"));
    }

    #[test]
    fn unresolved_font_aborts() {
        let err = load(r#"{"label": {"default": {"font": "comic"}}}"#).unwrap_err();
        match err {
            ParseError::UnresolvedFont { path, name } => {
                assert_eq!(path, "label/default/font");
                assert_eq!(name, "comic");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn unresolved_drawable_reports_nested_path() {
        let err = load(r#"{"button": {"default": {"imageStyle": {"image": "nope"}}}}"#).unwrap_err();
        assert!(matches!(
            err,
            ParseError::UnresolvedDrawable { path, .. } if path == "button/default/imageStyle/image"
        ));
    }

    #[test]
    fn bad_color_aborts() {
        let err = load(r##"{"label": {"default": {"textColor": "#XYZXYZ"}}}"##).unwrap_err();
        assert!(matches!(err, ParseError::InvalidValue { .. }));
    }

    #[test]
    fn wrong_json_type_aborts() {
        assert!(load(r#"{"label": {"default": {"textColor": 12}}}"#).is_err());
        assert!(load(r#"{"grid": {"default": {"rowSpacing": "wide"}}}"#).is_err());
        assert!(load(r#"{"grid": {"default": {"rowSpacing": -1}}}"#).is_err());
        assert!(load(r#"{"button": {"default": {"labelStyle": "plain"}}}"#).is_err());
    }

    #[test]
    fn slash_in_property_name_aborts() {
        let err = load(r#"{"button": {"default": {"labelStyle/textColor": "red"}}}"#).unwrap_err();
        assert!(matches!(
            err,
            ParseError::InvalidValue { path, .. } if path == "button/default/labelStyle/textColor"
        ));
        assert!(load(r#"{"button": {"default": {"labelStyle": {"a/b": 1}}}}"#).is_err());
    }

    #[test]
    fn oversized_numbers_abort() {
        let err = load(r#"{"panel": {"default": {"padding": 3000000000}}}"#).unwrap_err();
        assert!(matches!(err, ParseError::InvalidValue { path, .. } if path == "panel/default/padding"));
        let sheet = load(r#"{"panel": {"default": {"padding": 536870911}}}"#).unwrap();
        assert_eq!(sheet.default_style("panel").unwrap().properties().pixels("padding"), Some(536870911));
    }

    #[test]
    fn bad_palette_aborts() {
        assert!(load(r#"{"colors": {"accent": "blurple"}}"#).is_err());
        assert!(load(r#"{"colors": ["red"]}"#).is_err());
    }
}
