//! Separator widget: a thin rule between other widgets.

use crate::geometry::{Axis, Size};
use crate::style::{DrawableValue, PropertyTree};

/// A line across its slot. A horizontal separator is `thickness` tall and
/// takes its width from the slot it is arranged into.
#[derive(Debug, Clone)]
pub struct Separator {
    orientation: Axis,
    thickness: i32,
    image: Option<DrawableValue>,
}

impl Default for Separator {
    fn default() -> Self {
        Self::horizontal()
    }
}

impl Separator {
    pub fn horizontal() -> Self {
        Self {
            orientation: Axis::Horizontal,
            thickness: 1,
            image: None,
        }
    }

    pub fn vertical() -> Self {
        Self {
            orientation: Axis::Vertical,
            ..Self::horizontal()
        }
    }

    pub fn orientation(&self) -> Axis {
        self.orientation
    }

    pub fn thickness(&self) -> i32 {
        self.thickness
    }

    pub fn set_thickness(&mut self, thickness: i32) {
        self.thickness = thickness.max(0);
    }

    pub fn image(&self) -> Option<&DrawableValue> {
        self.image.as_ref()
    }

    pub fn apply_style(&mut self, style: &PropertyTree) {
        if let Some(thickness) = style.pixels("thickness") {
            self.thickness = thickness.max(0);
        }
        if let Some(image) = style.drawable("image") {
            self.image = Some(image);
        }
    }

    pub fn measure(&self) -> Size {
        match self.orientation {
            Axis::Horizontal => Size::new(0, self.thickness),
            Axis::Vertical => Size::new(self.thickness, 0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::StyleValue;

    #[test]
    fn measures_thickness_across_orientation() {
        assert_eq!(Separator::horizontal().measure(), Size::new(0, 1));
        let mut vertical = Separator::vertical();
        vertical.apply_style(&PropertyTree::new().with("thickness", StyleValue::Number(3.0)));
        assert_eq!(vertical.measure(), Size::new(3, 0));
    }
}
