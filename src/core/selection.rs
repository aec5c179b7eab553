use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::error::{SelectionError, SelectionResult};

/// A contiguous data-value band drawn over the histogram.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectionRange {
    pub from: f64,
    pub to: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub disabled: bool,
}

impl SelectionRange {
    #[must_use]
    pub fn new(from: f64, to: f64) -> Self {
        Self {
            from,
            to,
            color: None,
            opacity: None,
            disabled: false,
        }
    }

    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    #[must_use]
    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = Some(opacity);
        self
    }

    #[must_use]
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Returns a copy with `from` replaced; styling is preserved.
    #[must_use]
    pub fn with_from(&self, from: f64) -> Self {
        Self {
            from,
            ..self.clone()
        }
    }

    /// Returns a copy with `to` replaced; styling is preserved.
    #[must_use]
    pub fn with_to(&self, to: f64) -> Self {
        Self { to, ..self.clone() }
    }

    #[must_use]
    pub fn edge_value(&self, edge: SelectionEdge) -> f64 {
        match edge {
            SelectionEdge::From => self.from,
            SelectionEdge::To => self.to,
        }
    }

    pub fn set_edge_value(&mut self, edge: SelectionEdge, value: f64) {
        match edge {
            SelectionEdge::From => self.from = value,
            SelectionEdge::To => self.to = value,
        }
    }

    pub fn validate(&self) -> SelectionResult<()> {
        if !self.from.is_finite() || !self.to.is_finite() {
            return Err(SelectionError::InvalidData(
                "selection bounds must be finite".to_owned(),
            ));
        }
        if let Some(opacity) = self.opacity {
            if !opacity.is_finite() || !(0.0..=1.0).contains(&opacity) {
                return Err(SelectionError::InvalidData(
                    "selection opacity must be finite and in [0, 1]".to_owned(),
                ));
            }
        }
        Ok(())
    }
}

/// Which edge of a range a handle is bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectionEdge {
    From,
    To,
}

/// A draggable boundary handle.
///
/// `value` is authoritative; `pixel` is its cached projection under the
/// layout the point was built against.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SelectionPoint {
    pub value: f64,
    pub pixel: f64,
    pub range_index: usize,
    pub edge: SelectionEdge,
    /// Also drives the `to` of range `range_index - 1`.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub linked: bool,
}

/// Every range boundary, `from` then `to`, in range order.
#[must_use]
pub fn boundary_values(ranges: &[SelectionRange]) -> SmallVec<[f64; 8]> {
    ranges
        .iter()
        .flat_map(|range| [range.from, range.to])
        .collect()
}
