#[cfg(feature = "parallel-paint")]
use rayon::prelude::*;
use tracing::trace;

use crate::core::{HistogramData, HistogramSelection, SelectionEdge, SelectionRange};
use crate::error::SelectionResult;
use crate::render::{BarPaint, HandleMarker, OverlayFrame, OverlayRenderer};

use super::SelectionRenderer;

impl SelectionRenderer {
    /// Resolves paint instructions for every bar and handle.
    ///
    /// Bars are sampled at their center pixel. While a transition is in
    /// flight both the band spans and the handle markers follow its
    /// interpolated pixels.
    #[must_use]
    pub fn build_overlay_frame(
        &self,
        selection: &dyn HistogramSelection,
        data: &HistogramData,
    ) -> OverlayFrame {
        let ranges = selection.selection();
        let mut frame = OverlayFrame::new(data.width());
        frame.bars = self.resolve_bar_paints(ranges, data);

        let dragging = self.interaction.drag().map(|drag| drag.handle_index);
        frame.handles = selection
            .selection_points(data)
            .into_iter()
            .enumerate()
            .map(|(handle_index, point)| HandleMarker {
                handle_index,
                pixel: point.pixel,
                range_index: point.range_index,
                edge: point.edge,
                disabled: ranges
                    .get(point.range_index)
                    .is_some_and(|range| range.disabled),
                dragging: dragging == Some(handle_index),
            })
            .collect();

        if let Some(pixels) = self.transition_pixels() {
            apply_transition_pixels(&mut frame.handles, ranges, pixels);
        }

        trace!(
            bars = frame.bars.len(),
            handles = frame.handles.len(),
            "overlay frame built"
        );
        frame
    }

    /// Builds the overlay frame and hands it to `renderer`.
    pub fn render<R: OverlayRenderer>(
        &self,
        renderer: &mut R,
        selection: &dyn HistogramSelection,
        data: &HistogramData,
    ) -> SelectionResult<()> {
        let frame = self.build_overlay_frame(selection, data);
        renderer.render(&frame)
    }

    fn resolve_bar_paints(&self, ranges: &[SelectionRange], data: &HistogramData) -> Vec<BarPaint> {
        let resolver = self.style_resolver().with_animated_spans(self.transition_pixels());
        let paint_bar = |bar_index: usize| {
            let (left, right) = data.bar_bounds(bar_index).unwrap_or((0.0, 0.0));
            let style = resolver.style((left + right) * 0.5, ranges, data);
            BarPaint {
                bar_index,
                left,
                right,
                color: style.color.to_owned(),
                opacity: style.opacity,
            }
        };

        // Bars resolve independently; the parallel path keeps output order.
        #[cfg(feature = "parallel-paint")]
        {
            (0..data.bar_count()).into_par_iter().map(paint_bar).collect()
        }

        #[cfg(not(feature = "parallel-paint"))]
        {
            (0..data.bar_count()).map(paint_bar).collect()
        }
    }
}

/// Moves handle markers onto the interpolated boundary pixels.
///
/// Boundary `2 * r` is the `from` of range `r`, `2 * r + 1` its `to`.
fn apply_transition_pixels(handles: &mut [HandleMarker], ranges: &[SelectionRange], pixels: &[f64]) {
    if pixels.len() != ranges.len() * 2 {
        return;
    }
    for handle in handles {
        let offset = match handle.edge {
            SelectionEdge::From => 0,
            SelectionEdge::To => 1,
        };
        if let Some(&pixel) = pixels.get(handle.range_index * 2 + offset) {
            handle.pixel = pixel;
        }
    }
}
