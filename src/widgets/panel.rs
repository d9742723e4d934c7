//! Panel widget: stacks its children in the same content area.
//!
//! Each child gets the panel's whole content region as its slot and positions
//! itself there by alignment. The panel's desired size is the largest desired
//! size among its visible children.

/// A container whose children overlap.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Panel;

impl Panel {
    pub fn new() -> Self {
        Panel
    }
}
