use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InteractionMode {
    Idle,
    /// A handle is being dragged.
    Dragging,
}

/// Active handle drag.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HandleDrag {
    pub handle_index: usize,
    /// Pixel where the drag began.
    pub origin_px: f64,
    /// Pixel most recently applied to the handle.
    pub current_px: f64,
}

/// Pointer-driven overlay state owned by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct InteractionState {
    over_selection_index: Option<usize>,
    drag: Option<HandleDrag>,
}

impl InteractionState {
    #[must_use]
    pub fn mode(self) -> InteractionMode {
        if self.drag.is_some() {
            InteractionMode::Dragging
        } else {
            InteractionMode::Idle
        }
    }

    #[must_use]
    pub fn over_selection_index(self) -> Option<usize> {
        self.over_selection_index
    }

    /// Returns `true` when the hover target changed.
    pub fn set_over_selection_index(&mut self, index: Option<usize>) -> bool {
        let changed = self.over_selection_index != index;
        self.over_selection_index = index;
        changed
    }

    #[must_use]
    pub fn drag(self) -> Option<HandleDrag> {
        self.drag
    }

    pub fn start_drag(&mut self, handle_index: usize, origin_px: f64) {
        self.drag = Some(HandleDrag {
            handle_index,
            origin_px,
            current_px: origin_px,
        });
    }

    pub fn update_drag(&mut self, current_px: f64) {
        if let Some(drag) = &mut self.drag {
            drag.current_px = current_px;
        }
    }

    pub fn end_drag(&mut self) -> Option<HandleDrag> {
        self.drag.take()
    }
}

/// Index of the handle closest to `pointer_px` within `tolerance_px`.
///
/// Ties go to the later handle so a collapsed range can still be widened to
/// the right.
#[must_use]
pub fn nearest_handle(handle_pixels: &[f64], pointer_px: f64, tolerance_px: f64) -> Option<usize> {
    handle_pixels
        .iter()
        .enumerate()
        .map(|(index, &px)| (index, (px - pointer_px).abs()))
        .filter(|&(_, distance)| distance <= tolerance_px)
        .fold(None, |best: Option<(usize, f64)>, candidate| match best {
            Some((_, best_distance)) if best_distance < candidate.1 => best,
            _ => Some(candidate),
        })
        .map(|(index, _)| index)
}

/// Keeps a dragged handle between its neighbours so handles never cross.
#[must_use]
pub fn clamp_between_neighbours(handle_pixels: &[f64], index: usize, pointer_px: f64) -> f64 {
    let lower = index
        .checked_sub(1)
        .and_then(|prev| handle_pixels.get(prev))
        .copied()
        .unwrap_or(f64::NEG_INFINITY);
    let upper = handle_pixels
        .get(index + 1)
        .copied()
        .unwrap_or(f64::INFINITY);
    pointer_px.max(lower).min(upper)
}
