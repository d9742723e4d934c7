//! Widget system: arena tree, widget nodes, kinds, events.

pub mod kind;
pub mod lifecycle;
pub mod node;
pub mod tree;

pub use kind::WidgetKind;
pub use lifecycle::{EventQueue, WidgetEvent};
pub use node::{GridCell, LayoutState, Widget, WidgetId};
pub use tree::{TreeError, WidgetTree};
