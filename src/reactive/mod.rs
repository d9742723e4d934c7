//! Observable collections for collection-bound widgets.
//!
//! - [`ObservableList`] — ordered items; every mutation notifies a [`ListObserver`].
//! - [`ListChange`] — what a single mutation did.

pub mod list;

pub use list::{IndexOutOfRange, ListChange, ListObserver, ObservableList};
