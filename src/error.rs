//! Crate-level error type.
//!
//! Each subsystem defines its own error enum next to the code that raises it;
//! [`Error`] wraps them for callers that drive several subsystems at once.

use crate::layout::LayoutError;
use crate::style::{ParseError, StyleNotFoundError};
use crate::widget::TreeError;

/// Result type alias for operations spanning several subsystems.
pub type Result<T> = std::result::Result<T, Error>;

/// Any error produced by trellis-ui.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The stylesheet source could not be resolved.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// A widget asked for a style the stylesheet cannot provide.
    #[error(transparent)]
    StyleNotFound(#[from] StyleNotFoundError),
    /// A layout pass was aborted.
    #[error(transparent)]
    Layout(#[from] LayoutError),
    /// A widget tree operation was rejected.
    #[error(transparent)]
    Tree(#[from] TreeError),
}
