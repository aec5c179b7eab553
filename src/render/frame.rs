use serde::{Deserialize, Serialize};

use crate::core::SelectionEdge;
use crate::error::{SelectionError, SelectionResult};

/// Paint instruction for one histogram bar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarPaint {
    pub bar_index: usize,
    pub left: f64,
    pub right: f64,
    pub color: String,
    pub opacity: f64,
}

impl BarPaint {
    pub fn validate(&self) -> SelectionResult<()> {
        if !self.left.is_finite() || !self.right.is_finite() || self.right < self.left {
            return Err(SelectionError::InvalidData(format!(
                "bar {} must have finite bounds with left <= right",
                self.bar_index
            )));
        }
        if !self.opacity.is_finite() || !(0.0..=1.0).contains(&self.opacity) {
            return Err(SelectionError::InvalidData(format!(
                "bar {} opacity must be finite and in [0, 1]",
                self.bar_index
            )));
        }
        if self.color.is_empty() {
            return Err(SelectionError::InvalidData(format!(
                "bar {} color must not be empty",
                self.bar_index
            )));
        }
        Ok(())
    }
}

/// Draw command for one draggable boundary handle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HandleMarker {
    pub handle_index: usize,
    pub pixel: f64,
    pub range_index: usize,
    pub edge: SelectionEdge,
    pub disabled: bool,
    pub dragging: bool,
}

/// Backend-agnostic overlay scene for one paint pass.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct OverlayFrame {
    pub width: f64,
    pub bars: Vec<BarPaint>,
    pub handles: Vec<HandleMarker>,
}

impl OverlayFrame {
    #[must_use]
    pub fn new(width: f64) -> Self {
        Self {
            width,
            bars: Vec::new(),
            handles: Vec::new(),
        }
    }

    pub fn validate(&self) -> SelectionResult<()> {
        if !self.width.is_finite() || self.width <= 0.0 {
            return Err(SelectionError::InvalidData(
                "overlay width must be finite and > 0".to_owned(),
            ));
        }
        for bar in &self.bars {
            bar.validate()?;
        }
        if let Some(handle) = self.handles.iter().find(|handle| !handle.pixel.is_finite()) {
            return Err(SelectionError::InvalidData(format!(
                "handle {} pixel must be finite",
                handle.handle_index
            )));
        }
        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bars.is_empty() && self.handles.is_empty()
    }
}
