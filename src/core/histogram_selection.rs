use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::{HistogramData, SelectionEdge, SelectionPoint, SelectionRange};
use crate::error::{SelectionError, SelectionResult};

/// Selection cardinality, fixed when the store is constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectionMode {
    Single,
    Multiple,
}

/// Storage contract for the ranges an overlay edits.
///
/// The renderer never mutates a store in place: it computes a new range
/// collection and hands it to `set_selection`.
pub trait HistogramSelection {
    fn mode(&self) -> SelectionMode;

    fn selection(&self) -> &[SelectionRange];

    /// Draggable handles in handle order, with pixels cached against `data`.
    fn selection_points(&self, data: &HistogramData) -> Vec<SelectionPoint>;

    fn set_selection(&mut self, ranges: Vec<SelectionRange>) -> SelectionResult<()>;

    /// Writes a new value for `point` into `ranges`.
    fn write_point_value(&self, ranges: &mut [SelectionRange], point: &SelectionPoint, value: f64) {
        if let Some(range) = ranges.get_mut(point.range_index) {
            range.set_edge_value(point.edge, value);
        }
    }
}

/// Builds the store variant for `mode`.
pub fn new_histogram_selection(
    mode: SelectionMode,
    ranges: Vec<SelectionRange>,
) -> SelectionResult<Box<dyn HistogramSelection>> {
    Ok(match mode {
        SelectionMode::Single => {
            let mut ranges = ranges.into_iter();
            let range = ranges.next();
            if ranges.next().is_some() {
                return Err(SelectionError::InvalidData(
                    "single selection accepts at most one range".to_owned(),
                ));
            }
            Box::new(SingleHistogramSelection::new(range)?)
        }
        SelectionMode::Multiple => Box::new(MultipleHistogramSelection::new(ranges)?),
    })
}

/// One optional band with a handle on each edge.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SingleHistogramSelection {
    range: Option<SelectionRange>,
}

impl SingleHistogramSelection {
    pub fn new(range: Option<SelectionRange>) -> SelectionResult<Self> {
        if let Some(range) = &range {
            range.validate()?;
        }
        Ok(Self { range })
    }
}

impl HistogramSelection for SingleHistogramSelection {
    fn mode(&self) -> SelectionMode {
        SelectionMode::Single
    }

    fn selection(&self) -> &[SelectionRange] {
        self.range.as_slice()
    }

    fn selection_points(&self, data: &HistogramData) -> Vec<SelectionPoint> {
        let Some(range) = &self.range else {
            return Vec::new();
        };
        [SelectionEdge::From, SelectionEdge::To]
            .into_iter()
            .map(|edge| {
                let value = range.edge_value(edge);
                SelectionPoint {
                    value,
                    pixel: data.project(value),
                    range_index: 0,
                    edge,
                    linked: false,
                }
            })
            .collect()
    }

    fn set_selection(&mut self, ranges: Vec<SelectionRange>) -> SelectionResult<()> {
        if ranges.len() > 1 {
            warn!(
                count = ranges.len(),
                "rejecting multi-range update on single selection"
            );
            return Err(SelectionError::InvalidData(
                "single selection accepts at most one range".to_owned(),
            ));
        }
        let range = ranges.into_iter().next();
        if let Some(range) = &range {
            range.validate()?;
        }
        debug!(present = range.is_some(), "single selection replaced");
        self.range = range;
        Ok(())
    }
}

/// Adjacent bands sharing their inner handles.
///
/// Every range contributes a handle on its `from`, and the last range one
/// on its `to`. Where a range's `to` and the next range's `from` project to
/// the same pixel they share the `from` handle, and moving it moves both
/// edges. Any wider gap keeps a separate `to` handle, so gaps survive drags.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MultipleHistogramSelection {
    ranges: Vec<SelectionRange>,
}

impl MultipleHistogramSelection {
    pub fn new(ranges: Vec<SelectionRange>) -> SelectionResult<Self> {
        Ok(Self {
            ranges: canonicalize_ranges(ranges)?,
        })
    }
}

impl HistogramSelection for MultipleHistogramSelection {
    fn mode(&self) -> SelectionMode {
        SelectionMode::Multiple
    }

    fn selection(&self) -> &[SelectionRange] {
        &self.ranges
    }

    fn selection_points(&self, data: &HistogramData) -> Vec<SelectionPoint> {
        let mut points = Vec::with_capacity(self.ranges.len() + 1);
        let mut previous: Option<&SelectionRange> = None;

        for (range_index, range) in self.ranges.iter().enumerate() {
            let from_px = data.project(range.from);
            let linked = match previous {
                Some(previous) => {
                    let to_px = data.project(previous.to);
                    if to_px != from_px {
                        points.push(SelectionPoint {
                            value: previous.to,
                            pixel: to_px,
                            range_index: range_index - 1,
                            edge: SelectionEdge::To,
                            linked: false,
                        });
                    }
                    to_px == from_px
                }
                None => false,
            };
            points.push(SelectionPoint {
                value: range.from,
                pixel: from_px,
                range_index,
                edge: SelectionEdge::From,
                linked,
            });
            previous = Some(range);
        }

        if let Some((range_index, last)) = self.ranges.iter().enumerate().last() {
            points.push(SelectionPoint {
                value: last.to,
                pixel: data.project(last.to),
                range_index,
                edge: SelectionEdge::To,
                linked: false,
            });
        }
        points
    }

    fn set_selection(&mut self, ranges: Vec<SelectionRange>) -> SelectionResult<()> {
        self.ranges = canonicalize_ranges(ranges)?;
        debug!(count = self.ranges.len(), "multiple selection replaced");
        Ok(())
    }

    fn write_point_value(&self, ranges: &mut [SelectionRange], point: &SelectionPoint, value: f64) {
        let Some(range) = ranges.get_mut(point.range_index) else {
            return;
        };
        range.set_edge_value(point.edge, value);

        if point.linked && point.range_index > 0 {
            ranges[point.range_index - 1].to = value;
        }
    }
}

fn canonicalize_ranges(mut ranges: Vec<SelectionRange>) -> SelectionResult<Vec<SelectionRange>> {
    for range in &ranges {
        range.validate()?;
    }
    ranges.sort_by_key(|range| OrderedFloat(range.from));
    Ok(ranges)
}
