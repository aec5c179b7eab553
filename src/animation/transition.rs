use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::Easing;

/// Pixel set for every selection boundary, `from` then `to` per range.
pub type BoundaryPixels = SmallVec<[f64; 8]>;

/// Identifies one started transition.
///
/// Handles are never reused; a handle whose transition completed or was
/// replaced reports inactive forever.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TransitionHandle(u64);

impl TransitionHandle {
    #[must_use]
    pub(crate) const fn new(id: u64) -> Self {
        Self(id)
    }

    #[must_use]
    pub fn id(self) -> u64 {
        self.0
    }
}

/// One interpolation step handed to frame callbacks.
#[derive(Debug, Clone, PartialEq)]
pub struct TransitionFrame {
    /// Eased progress in `[0, 1]`.
    pub progress: f64,
    pub pixels: BoundaryPixels,
}

/// Time-based interpolation from one boundary pixel set to another.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelTransition {
    start: BoundaryPixels,
    end: BoundaryPixels,
    current: BoundaryPixels,
    duration_seconds: f64,
    elapsed_seconds: f64,
    easing: Easing,
}

impl PixelTransition {
    /// `start` and `end` must have the same length; the shorter one wins.
    #[must_use]
    pub fn new(
        start: BoundaryPixels,
        end: BoundaryPixels,
        duration_seconds: f64,
        easing: Easing,
    ) -> Self {
        let len = start.len().min(end.len());
        let mut start = start;
        let mut end = end;
        start.truncate(len);
        end.truncate(len);

        Self {
            current: start.clone(),
            start,
            end,
            duration_seconds: duration_seconds.max(0.0),
            elapsed_seconds: 0.0,
            easing,
        }
    }

    #[must_use]
    pub fn start(&self) -> &[f64] {
        &self.start
    }

    #[must_use]
    pub fn end(&self) -> &[f64] {
        &self.end
    }

    /// Last interpolated pixel set.
    #[must_use]
    pub fn current(&self) -> &[f64] {
        &self.current
    }

    /// True when nothing would visibly move.
    #[must_use]
    pub fn is_static(&self) -> bool {
        self.duration_seconds <= 0.0 || self.start == self.end
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.is_static() || self.elapsed_seconds >= self.duration_seconds
    }

    /// Advances by `delta_seconds` and returns the resulting frame.
    ///
    /// The final frame carries the exact end pixels.
    pub fn step(&mut self, delta_seconds: f64) -> TransitionFrame {
        let delta = if delta_seconds.is_finite() {
            delta_seconds.max(0.0)
        } else {
            0.0
        };
        self.elapsed_seconds = (self.elapsed_seconds + delta).min(self.duration_seconds);

        if self.is_finished() {
            self.current.clone_from(&self.end);
            return TransitionFrame {
                progress: 1.0,
                pixels: self.current.clone(),
            };
        }

        let progress = self
            .easing
            .apply(self.elapsed_seconds / self.duration_seconds);
        for ((current, start), end) in self.current.iter_mut().zip(&self.start).zip(&self.end) {
            *current = start + (end - start) * progress;
        }
        TransitionFrame {
            progress,
            pixels: self.current.clone(),
        }
    }
}
