mod frame;
mod null_renderer;

pub use frame::{BarPaint, HandleMarker, OverlayFrame};
pub use null_renderer::NullRenderer;

use crate::error::SelectionResult;

/// Contract implemented by any drawing backend.
///
/// Backends receive fully resolved paint instructions, so canvas, SVG or GPU
/// code never needs to know about selections or hover state.
pub trait OverlayRenderer {
    fn render(&mut self, frame: &OverlayFrame) -> SelectionResult<()>;
}
