//! Image widget: a single drawable at its natural size.

use crate::geometry::Size;
use crate::style::{DrawableValue, PropertyTree};

#[derive(Debug, Clone, Default)]
pub struct Image {
    drawable: Option<DrawableValue>,
}

impl Image {
    pub fn new(drawable: DrawableValue) -> Self {
        Self { drawable: Some(drawable) }
    }

    /// An image with nothing to show yet.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn drawable(&self) -> Option<&DrawableValue> {
        self.drawable.as_ref()
    }

    pub fn set_drawable(&mut self, drawable: Option<DrawableValue>) {
        self.drawable = drawable;
    }

    pub fn apply_style(&mut self, style: &PropertyTree) {
        if let Some(image) = style.drawable("image") {
            self.drawable = Some(image);
        }
    }

    pub fn measure(&self) -> Size {
        self.drawable.as_ref().map(DrawableValue::size).unwrap_or(Size::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::*;
    use crate::style::Color;
    use crate::testing::SizedDrawable;

    #[test]
    fn natural_size() {
        let image = Image::new(DrawableValue::Asset(Rc::new(SizedDrawable::new(24, 10))));
        assert_eq!(image.measure(), Size::new(24, 10));
        assert_eq!(Image::empty().measure(), Size::ZERO);
        assert_eq!(Image::new(DrawableValue::Solid(Color::RED)).measure(), Size::ZERO);
    }
}
