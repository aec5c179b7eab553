use tracing::{debug, warn};

use crate::core::{HistogramData, HistogramSelection};
use crate::error::{SelectionError, SelectionResult};
use crate::interaction::{HandleDrag, clamp_between_neighbours, nearest_handle};

use super::SelectionRenderer;

impl SelectionRenderer {
    /// Grabs the handle nearest to `pixel` within the configured tolerance.
    ///
    /// Returns the grabbed handle index, or `None` when no handle is close
    /// enough. Disabled ranges stay draggable.
    pub fn begin_handle_drag(
        &mut self,
        pixel: f64,
        selection: &dyn HistogramSelection,
        data: &HistogramData,
    ) -> Option<usize> {
        let pixels: Vec<f64> = selection
            .selection_points(data)
            .iter()
            .map(|point| point.pixel)
            .collect();
        let index = nearest_handle(&pixels, pixel, self.config.handle_grab_tolerance_px)?;

        self.interaction.start_drag(index, pixels[index]);
        debug!(handle_index = index, origin_px = pixels[index], "handle drag started");
        Some(index)
    }

    /// Moves the dragged handle to `pixel` and reconciles the selection.
    ///
    /// The pointer is clamped to the chart and between the neighbouring
    /// handles, then snapped to a whole pixel. Untouched handles keep their
    /// exact values. Returns whether the store was written; `Ok(false)` when
    /// no drag is active.
    pub fn drag_handle_to(
        &mut self,
        pixel: f64,
        selection: &mut dyn HistogramSelection,
        data: &HistogramData,
    ) -> SelectionResult<bool> {
        let Some(drag) = self.interaction.drag() else {
            return Ok(false);
        };
        if !pixel.is_finite() {
            return Err(SelectionError::InvalidData(
                "drag pixel must be finite".to_owned(),
            ));
        }

        let mut positions: Vec<f64> = selection
            .selection_points(data)
            .iter()
            .map(|point| point.pixel)
            .collect();
        if drag.handle_index >= positions.len() {
            warn!(
                handle_index = drag.handle_index,
                handles = positions.len(),
                "dragged handle vanished from selection"
            );
            self.interaction.end_drag();
            return Err(SelectionError::InvalidData(format!(
                "dragged handle {} no longer exists",
                drag.handle_index
            )));
        }

        let pointer = pixel.clamp(0.0, self.config.width);
        let target = clamp_between_neighbours(&positions, drag.handle_index, pointer).round();
        positions[drag.handle_index] = target;
        self.interaction.update_drag(target);

        self.update_selection_positions(selection, data, &positions, None)
    }

    /// Releases the dragged handle.
    pub fn end_handle_drag(&mut self) -> Option<HandleDrag> {
        let drag = self.interaction.end_drag();
        if let Some(drag) = drag {
            debug!(
                handle_index = drag.handle_index,
                travel_px = drag.current_px - drag.origin_px,
                "handle drag ended"
            );
        }
        drag
    }
}
