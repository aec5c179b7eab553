//! Presentation-only animation of selection handles.
//!
//! Nothing in this module touches selection data values; it only interpolates
//! pixel projections.

mod easing;
mod transition;

pub use easing::Easing;
pub use transition::{BoundaryPixels, PixelTransition, TransitionFrame, TransitionHandle};
