//! Layout: grid proportions, the track solver, and the measure/arrange passes.

pub mod engine;
pub mod grid;
pub mod proportion;

pub use engine::LayoutError;
pub use grid::{TrackExtent, TrackRequest};
pub use proportion::Proportion;
