use std::fmt;

use tracing::{debug, trace};

use crate::animation::{BoundaryPixels, PixelTransition, TransitionFrame, TransitionHandle};
use crate::core::{HistogramData, SelectionRange, boundary_values};

use super::SelectionRenderer;

type FrameCallback = Box<dyn FnMut(&TransitionFrame)>;
type CompleteCallback = Box<dyn FnOnce(f64)>;

/// Transition currently driven by `advance_transition`.
pub(super) struct ActiveTransition {
    handle: TransitionHandle,
    transition: PixelTransition,
    on_frame: FrameCallback,
    on_complete: CompleteCallback,
}

impl ActiveTransition {
    fn emit(&mut self, delta_seconds: f64) -> TransitionFrame {
        let frame = self.transition.step(delta_seconds);
        trace!(
            handle = self.handle.id(),
            progress = frame.progress,
            "transition frame"
        );
        (self.on_frame)(&frame);
        frame
    }

    fn complete(self, frame: &TransitionFrame) {
        let resting_px = frame.pixels.first().copied().unwrap_or(0.0);
        debug!(handle = self.handle.id(), resting_px, "transition completed");
        (self.on_complete)(resting_px);
    }
}

impl fmt::Debug for ActiveTransition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActiveTransition")
            .field("handle", &self.handle)
            .field("transition", &self.transition)
            .finish_non_exhaustive()
    }
}

impl SelectionRenderer {
    /// Starts animating the selection handles from their projection under
    /// `old_data` to their projection under `new_data`.
    ///
    /// Only pixels are interpolated; no selection value is touched. Frames
    /// are produced by [`SelectionRenderer::advance_transition`]. A transition
    /// already in flight is abandoned without further callbacks, and its
    /// current interpolated pixels seed the new start when the boundary count
    /// matches. When nothing would move, `on_frame` (progress `1.0`) and then
    /// `on_complete` run before this call returns.
    ///
    /// `on_complete` receives the resting pixel of the first boundary, or
    /// `0.0` for an empty selection.
    pub fn on_data_transition<F, C>(
        &mut self,
        old_ranges: &[SelectionRange],
        new_ranges: &[SelectionRange],
        old_data: &HistogramData,
        new_data: &HistogramData,
        on_frame: F,
        on_complete: C,
    ) -> TransitionHandle
    where
        F: FnMut(&TransitionFrame) + 'static,
        C: FnOnce(f64) + 'static,
    {
        let new_values = boundary_values(new_ranges);
        let end: BoundaryPixels = new_values
            .iter()
            .map(|&value| new_data.project(value))
            .collect();

        let seeded: Option<BoundaryPixels> = self.transition.take().and_then(|previous| {
            debug!(
                handle = previous.handle.id(),
                "abandoning in-flight transition"
            );
            let current = previous.transition.current();
            (current.len() == end.len()).then(|| current.iter().copied().collect())
        });

        let start: BoundaryPixels = seeded.unwrap_or_else(|| {
            let old_values = boundary_values(old_ranges);
            let values = if old_values.len() == new_values.len() {
                old_values
            } else {
                new_values.clone()
            };
            values.iter().map(|&value| old_data.project(value)).collect()
        });

        let handle = TransitionHandle::new(self.next_transition_id);
        self.next_transition_id += 1;

        let transition = PixelTransition::new(
            start,
            end,
            self.config.transition_duration_seconds,
            self.config.transition_easing,
        );
        debug!(
            handle = handle.id(),
            boundaries = transition.end().len(),
            start_px = ?transition.start().first(),
            end_px = ?transition.end().first(),
            "transition started"
        );

        let mut active = ActiveTransition {
            handle,
            transition,
            on_frame: Box::new(on_frame),
            on_complete: Box::new(on_complete),
        };

        if active.transition.is_static() {
            let frame = active.emit(0.0);
            active.complete(&frame);
        } else {
            self.transition = Some(active);
        }
        handle
    }

    /// Steps the in-flight transition by `delta_seconds`.
    ///
    /// Returns `true` while more frames are pending.
    pub fn advance_transition(&mut self, delta_seconds: f64) -> bool {
        let Some(active) = self.transition.as_mut() else {
            return false;
        };

        let frame = active.emit(delta_seconds);
        if !active.transition.is_finished() {
            return true;
        }

        if let Some(active) = self.transition.take() {
            active.complete(&frame);
        }
        false
    }

    #[must_use]
    pub fn is_transition_active(&self, handle: TransitionHandle) -> bool {
        self.transition
            .as_ref()
            .is_some_and(|active| active.handle == handle)
    }

    #[must_use]
    pub fn active_transition(&self) -> Option<TransitionHandle> {
        self.transition.as_ref().map(|active| active.handle)
    }

    /// Current interpolated boundary pixels of the in-flight transition.
    #[must_use]
    pub fn transition_pixels(&self) -> Option<&[f64]> {
        self.transition
            .as_ref()
            .map(|active| active.transition.current())
    }

    /// Drops the transition behind `handle` without invoking its callbacks.
    ///
    /// Returns `false` when `handle` is not the in-flight transition.
    pub fn cancel_transition(&mut self, handle: TransitionHandle) -> bool {
        if !self.is_transition_active(handle) {
            return false;
        }
        self.transition = None;
        debug!(handle = handle.id(), "transition cancelled");
        true
    }
}
