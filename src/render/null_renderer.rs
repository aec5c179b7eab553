use crate::error::SelectionResult;
use crate::render::{OverlayFrame, OverlayRenderer};

/// No-op backend used by tests and headless hosts.
///
/// Frames are still validated so invalid paint instructions surface before a
/// real backend is attached.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub frames_rendered: usize,
    pub last_bar_count: usize,
    pub last_handle_count: usize,
}

impl OverlayRenderer for NullRenderer {
    fn render(&mut self, frame: &OverlayFrame) -> SelectionResult<()> {
        frame.validate()?;
        self.frames_rendered += 1;
        self.last_bar_count = frame.bars.len();
        self.last_handle_count = frame.handles.len();
        Ok(())
    }
}
