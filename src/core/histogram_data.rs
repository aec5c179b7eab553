use serde::{Deserialize, Serialize};

use crate::error::{SelectionError, SelectionResult};

/// One histogram bucket covering the data-value span `[from, to)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HistogramBin {
    pub from: f64,
    pub to: f64,
    #[serde(default)]
    pub count: f64,
}

impl HistogramBin {
    #[must_use]
    pub const fn new(from: f64, to: f64, count: f64) -> Self {
        Self { from, to, count }
    }

    #[must_use]
    pub fn span(self) -> f64 {
        self.to - self.from
    }
}

/// Raw histogram payload as delivered by data sources.
///
/// JSON shape: `{ "content": [ { "from": 0, "to": 10, "count": 3 }, ... ] }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistogramContent {
    pub content: Vec<HistogramBin>,
}

impl HistogramContent {
    pub fn from_json_str(input: &str) -> SelectionResult<Self> {
        Ok(serde_json::from_str(input)?)
    }
}

/// Bar layout of one histogram dataset at a fixed chart width.
///
/// Bars share the width evenly. Each bar maps its bin's value span linearly
/// onto its pixel span, so the value axis is piecewise linear. The layout is
/// immutable; zooming replaces the whole `HistogramData`.
#[derive(Debug, Clone, PartialEq)]
pub struct HistogramData {
    bins: Vec<HistogramBin>,
    positions: Vec<f64>,
    width: f64,
}

impl HistogramData {
    /// Builds a validated layout.
    ///
    /// Invariants:
    /// - at least one bin
    /// - every bound is finite and `from < to`
    /// - bins are ordered and never overlap (`bins[i].from >= bins[i - 1].to`)
    /// - `width` is finite and `> 0`
    pub fn new(bins: Vec<HistogramBin>, width: f64) -> SelectionResult<Self> {
        if !width.is_finite() || width <= 0.0 {
            return Err(SelectionError::InvalidData(
                "histogram width must be finite and > 0".to_owned(),
            ));
        }
        if bins.is_empty() {
            return Err(SelectionError::InvalidData(
                "histogram must contain at least one bin".to_owned(),
            ));
        }

        for (index, bin) in bins.iter().enumerate() {
            if !bin.from.is_finite() || !bin.to.is_finite() || !bin.count.is_finite() {
                return Err(SelectionError::InvalidData(format!(
                    "histogram bin {index} must have finite bounds and count"
                )));
            }
            if bin.from >= bin.to {
                return Err(SelectionError::InvalidData(format!(
                    "histogram bin {index} must satisfy from < to"
                )));
            }
        }
        if let Some(index) = bins
            .windows(2)
            .position(|pair| pair[1].from < pair[0].to)
        {
            return Err(SelectionError::InvalidData(format!(
                "histogram bins {index} and {} overlap or are out of order",
                index + 1
            )));
        }

        let count = bins.len() as f64;
        let positions = (1..=bins.len())
            .map(|i| (i as f64 * width / count).round())
            .collect();

        Ok(Self {
            bins,
            positions,
            width,
        })
    }

    pub fn from_content(content: HistogramContent, width: f64) -> SelectionResult<Self> {
        Self::new(content.content, width)
    }

    #[must_use]
    pub fn bins(&self) -> &[HistogramBin] {
        &self.bins
    }

    /// Right edge of every bar, in pixels.
    #[must_use]
    pub fn positions(&self) -> &[f64] {
        &self.positions
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    #[must_use]
    pub fn bar_count(&self) -> usize {
        self.bins.len()
    }

    /// Value range covered by the bins (first `from`, last `to`).
    #[must_use]
    pub fn value_domain(&self) -> (f64, f64) {
        let first = self.bins[0];
        let last = self.bins[self.bins.len() - 1];
        (first.from, last.to)
    }

    /// Pixel span `(left, right)` of bar `index`.
    #[must_use]
    pub fn bar_bounds(&self, index: usize) -> Option<(f64, f64)> {
        let right = *self.positions.get(index)?;
        let left = if index == 0 {
            0.0
        } else {
            self.positions[index - 1]
        };
        Some((left, right))
    }

    #[must_use]
    pub fn bar_center(&self, index: usize) -> Option<f64> {
        self.bar_bounds(index).map(|(left, right)| (left + right) * 0.5)
    }

    /// Bar under `pixel`, or `None` outside `[0, width)`.
    #[must_use]
    pub fn bar_index_at(&self, pixel: f64) -> Option<usize> {
        if !pixel.is_finite() || pixel < 0.0 || pixel >= self.width {
            return None;
        }
        let index = self.positions.partition_point(|&right| right <= pixel);
        (index < self.positions.len()).then_some(index)
    }

    /// Maps a data value to its whole-pixel offset.
    #[must_use]
    pub fn project(&self, value: f64) -> f64 {
        self.project_exact(value).round()
    }

    /// Maps a data value to its fractional pixel offset.
    ///
    /// Values outside the bins extrapolate with the edge bar's slope, so the
    /// result may be negative or exceed `width`.
    #[must_use]
    pub fn project_exact(&self, value: f64) -> f64 {
        let last = self.bins.len() - 1;
        let index = self.bins.partition_point(|bin| bin.to <= value).min(last);
        let bin = self.bins[index];
        let (left, right) = self.bar_span(index);

        if value < bin.from && index > 0 {
            // Inside a gap between two bins.
            return left;
        }
        left + (value - bin.from) / bin.span() * (right - left)
    }

    /// Maps a pixel offset back to a data value, without rounding.
    #[must_use]
    pub fn unproject(&self, pixel: f64) -> f64 {
        let last = self.positions.len() - 1;
        let mut index = self
            .positions
            .partition_point(|&right| right <= pixel)
            .min(last);
        // Zero-width bars cannot be inverted; fall back to the nearest wider one.
        while index > 0 && self.bar_width(index) <= 0.0 {
            index -= 1;
        }

        let bin = self.bins[index];
        let (left, right) = self.bar_span(index);
        if right <= left {
            return bin.from;
        }
        bin.from + (pixel - left) / (right - left) * bin.span()
    }

    fn bar_span(&self, index: usize) -> (f64, f64) {
        let left = if index == 0 {
            0.0
        } else {
            self.positions[index - 1]
        };
        (left, self.positions[index])
    }

    fn bar_width(&self, index: usize) -> f64 {
        let (left, right) = self.bar_span(index);
        right - left
    }
}
