//! Label widget: a run of text in a single font.

use crate::geometry::Size;
use crate::style::{Color, FontRef, PropertyTree};

// ---------------------------------------------------------------------------
// Label
// ---------------------------------------------------------------------------

/// Static text.
///
/// A label without a font has nothing to measure against and reports a zero
/// desired size.
#[derive(Debug, Clone)]
pub struct Label {
    text: String,
    font: Option<FontRef>,
    text_color: Color,
}

impl Label {
    /// Create a label with white text and no font.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            font: None,
            text_color: Color::WHITE,
        }
    }

    /// Set the font (builder pattern).
    pub fn with_font(mut self, font: FontRef) -> Self {
        self.font = Some(font);
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn font(&self) -> Option<&FontRef> {
        self.font.as_ref()
    }

    pub fn set_font(&mut self, font: Option<FontRef>) {
        self.font = font;
    }

    pub fn text_color(&self) -> Color {
        self.text_color
    }

    pub fn set_text_color(&mut self, color: Color) {
        self.text_color = color;
    }

    /// Apply `font` and `textColor`. Absent properties leave the current value.
    pub fn apply_style(&mut self, style: &PropertyTree) {
        if let Some(font) = style.font("font") {
            self.font = Some(font);
        }
        if let Some(color) = style.color("textColor") {
            self.text_color = color;
        }
    }

    /// Extent of the text in the current font.
    pub fn measure(&self) -> Size {
        measure_text(self.font.as_ref(), &self.text)
    }
}

/// Text extent in `font`, or zero without a font or text.
pub(crate) fn measure_text(font: Option<&FontRef>, text: &str) -> Size {
    match font {
        Some(font) if !text.is_empty() => font.measure(text),
        _ => Size::ZERO,
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::*;
    use crate::style::StyleValue;
    use crate::testing::MonoFont;

    #[test]
    fn measures_with_font() {
        let label = Label::new("Hello").with_font(Rc::new(MonoFont::new(8, 16)));
        assert_eq!(label.measure(), Size::new(40, 16));
    }

    #[test]
    fn no_font_measures_zero() {
        assert_eq!(Label::new("Hello").measure(), Size::ZERO);
    }

    #[test]
    fn style_overrides_only_present_properties() {
        let mut label = Label::new("x");
        label.apply_style(&PropertyTree::new().with("textColor", StyleValue::Color(Color::RED)));
        assert_eq!(label.text_color(), Color::RED);
        assert!(label.font().is_none());

        label.apply_style(&PropertyTree::new());
        assert_eq!(label.text_color(), Color::RED);
    }
}
