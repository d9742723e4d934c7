//! Button widget: text with an optional image, and a pressed state.
//!
//! A button's text is styled through its embedded label sub-style
//! (`labelStyle/font`, `labelStyle/textColor`); a flat `font` or `textColor`
//! on the button style is used when the sub-style does not set one.

use crate::geometry::Size;
use crate::style::{Color, DrawableValue, FontRef, PropertyTree};

use super::label::measure_text;

// ---------------------------------------------------------------------------
// Button
// ---------------------------------------------------------------------------

/// A pressable button.
///
/// # Examples
///
/// ```ignore
/// let ok = Button::new("OK").with_image(icon).with_image_text_spacing(4);
/// ```
#[derive(Debug, Clone)]
pub struct Button {
    text: String,
    font: Option<FontRef>,
    text_color: Color,
    image: Option<DrawableValue>,
    image_text_spacing: i32,
    pressed: bool,
    pressed_background: Option<DrawableValue>,
}

impl Button {
    /// Create a button with the given text.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            font: None,
            text_color: Color::WHITE,
            image: None,
            image_text_spacing: 0,
            pressed: false,
            pressed_background: None,
        }
    }

    /// Set the font (builder pattern).
    pub fn with_font(mut self, font: FontRef) -> Self {
        self.font = Some(font);
        self
    }

    /// Set the image shown before the text (builder pattern).
    pub fn with_image(mut self, image: DrawableValue) -> Self {
        self.image = Some(image);
        self
    }

    /// Set the gap between image and text (builder pattern).
    pub fn with_image_text_spacing(mut self, spacing: i32) -> Self {
        self.image_text_spacing = spacing.max(0);
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

    pub fn text_color(&self) -> Color {
        self.text_color
    }

    pub fn set_text_color(&mut self, color: Color) {
        self.text_color = color;
    }

    pub fn image(&self) -> Option<&DrawableValue> {
        self.image.as_ref()
    }

    pub fn set_image(&mut self, image: Option<DrawableValue>) {
        self.image = image;
    }

    pub fn image_text_spacing(&self) -> i32 {
        self.image_text_spacing
    }

    pub fn set_image_text_spacing(&mut self, spacing: i32) {
        self.image_text_spacing = spacing.max(0);
    }

    /// Whether the button is shown pressed.
    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    pub fn set_pressed(&mut self, pressed: bool) {
        self.pressed = pressed;
    }

    /// Background drawn while pressed, if the style provides one.
    pub fn pressed_background(&self) -> Option<&DrawableValue> {
        self.pressed_background.as_ref()
    }

    /// Apply button properties. Absent properties leave the current value.
    pub fn apply_style(&mut self, style: &PropertyTree) {
        if let Some(font) = style.font("labelStyle/font").or_else(|| style.font("font")) {
            self.font = Some(font);
        }
        if let Some(color) = style
            .color("labelStyle/textColor")
            .or_else(|| style.color("textColor"))
        {
            self.text_color = color;
        }
        if let Some(image) = style.drawable("imageStyle/image").or_else(|| style.drawable("image")) {
            self.image = Some(image);
        }
        if let Some(spacing) = style.pixels("imageTextSpacing") {
            self.image_text_spacing = spacing.max(0);
        }
        if let Some(background) = style.drawable("pressedBackground") {
            self.pressed_background = Some(background);
        }
    }

    /// Image and text side by side; the spacing only counts when both are present.
    pub fn measure(&self) -> Size {
        let text = measure_text(self.font.as_ref(), &self.text);
        let image = self.image.as_ref().map(DrawableValue::size).unwrap_or(Size::ZERO);

        let spacing = if text.width > 0 && image.width > 0 {
            self.image_text_spacing
        } else {
            0
        };
        Size::new(
            text.width + image.width + spacing,
            text.height.max(image.height),
        )
    }
}
