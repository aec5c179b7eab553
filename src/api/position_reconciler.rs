use smallvec::SmallVec;
use tracing::{debug, trace, warn};

use crate::core::{HistogramData, HistogramSelection, SelectionPoint, SelectionRange};
use crate::error::{SelectionError, SelectionResult};

use super::SelectionRenderer;

/// Why a handle's stored value was rewritten.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandleUpdateSource {
    /// An explicit point carried a new value (e.g. typed into a prompt).
    Value,
    /// The handle pixel moved (a drag).
    Pixel,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandleUpdate {
    pub handle_index: usize,
    pub source: HandleUpdateSource,
    pub value: f64,
}

/// New range collection produced by a reconciliation pass.
#[derive(Debug, Clone, PartialEq)]
pub struct ReconciledSelection {
    pub ranges: Vec<SelectionRange>,
    pub updates: SmallVec<[HandleUpdate; 4]>,
}

impl ReconciledSelection {
    #[must_use]
    pub fn is_changed(&self) -> bool {
        !self.updates.is_empty()
    }
}

impl SelectionRenderer {
    /// Reconciles handle pixels (and optionally explicit handle values) with
    /// the stored selection values.
    ///
    /// Per handle, in order of precedence:
    /// 1. an explicit point whose value differs from the stored one wins,
    ///    even when it projects to the same pixel
    /// 2. a pixel that differs from the stored value's projection is
    ///    unprojected and written back
    /// 3. otherwise the stored value is kept bit-for-bit
    ///
    /// `positions` (and `points`, when given) must have exactly one entry per
    /// handle of `selection`.
    pub fn reconcile_selection_positions(
        &self,
        selection: &dyn HistogramSelection,
        data: &HistogramData,
        positions: &[f64],
        points: Option<&[SelectionPoint]>,
    ) -> SelectionResult<ReconciledSelection> {
        let handles = selection.selection_points(data);
        validate_batch(&handles, positions, points)?;

        let mut ranges = selection.selection().to_vec();
        let mut updates = SmallVec::new();

        for (handle_index, (handle, &position)) in handles.iter().zip(positions).enumerate() {
            let current_pixel = data.project(handle.value);
            let explicit_value = points
                .map(|points| points[handle_index].value)
                .filter(|&value| value != handle.value);

            let update = if let Some(value) = explicit_value {
                Some(HandleUpdate {
                    handle_index,
                    source: HandleUpdateSource::Value,
                    value,
                })
            } else if position != current_pixel {
                Some(HandleUpdate {
                    handle_index,
                    source: HandleUpdateSource::Pixel,
                    value: data.unproject(position),
                })
            } else {
                None
            };

            match update {
                Some(update) => {
                    trace!(
                        handle_index,
                        source = ?update.source,
                        previous = handle.value,
                        value = update.value,
                        "handle value rewritten"
                    );
                    selection.write_point_value(&mut ranges, handle, update.value);
                    updates.push(update);
                }
                None => trace!(handle_index, value = handle.value, "handle unchanged"),
            }
        }

        Ok(ReconciledSelection { ranges, updates })
    }

    /// Reconciles and stores the result.
    ///
    /// The store is only written when at least one handle changed. Returns
    /// whether it was written.
    pub fn update_selection_positions(
        &self,
        selection: &mut dyn HistogramSelection,
        data: &HistogramData,
        positions: &[f64],
        points: Option<&[SelectionPoint]>,
    ) -> SelectionResult<bool> {
        let reconciled = self.reconcile_selection_positions(selection, data, positions, points)?;
        if !reconciled.is_changed() {
            return Ok(false);
        }

        debug!(
            updated_handles = reconciled.updates.len(),
            "selection positions reconciled"
        );
        selection.set_selection(reconciled.ranges)?;
        Ok(true)
    }
}

fn validate_batch(
    handles: &[SelectionPoint],
    positions: &[f64],
    points: Option<&[SelectionPoint]>,
) -> SelectionResult<()> {
    if positions.len() != handles.len() {
        warn!(
            expected = handles.len(),
            actual = positions.len(),
            "rejecting position batch"
        );
        return Err(SelectionError::HandleCountMismatch {
            input: "positions",
            expected: handles.len(),
            actual: positions.len(),
        });
    }
    if let Some(points) = points {
        if points.len() != handles.len() {
            warn!(
                expected = handles.len(),
                actual = points.len(),
                "rejecting point batch"
            );
            return Err(SelectionError::HandleCountMismatch {
                input: "points",
                expected: handles.len(),
                actual: points.len(),
            });
        }
        if let Some(index) = points.iter().position(|point| !point.value.is_finite()) {
            return Err(SelectionError::InvalidData(format!(
                "point {index} value must be finite"
            )));
        }
    }
    if let Some(index) = positions.iter().position(|position| !position.is_finite()) {
        return Err(SelectionError::InvalidData(format!(
            "position {index} must be finite"
        )));
    }
    Ok(())
}
