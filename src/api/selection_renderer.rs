use tracing::debug;

use crate::core::{HistogramBin, HistogramData, SelectionRange};
use crate::error::SelectionResult;
use crate::interaction::{InteractionMode, InteractionState};

use super::SelectionRendererConfig;
use super::transition_controller::ActiveTransition;

/// Selection overlay logic for one histogram chart.
///
/// `SelectionRenderer` maps handle pixels to selection values, resolves the
/// paint of every bar, and animates handles when the histogram is swapped.
/// It owns only presentation state (hover, drag, in-flight transition); the
/// ranges themselves live in a [`crate::core::HistogramSelection`] store.
///
/// Everything runs on the host's UI thread. Each mutating call takes
/// `&mut self`, so one reconciliation pass always finishes before the next
/// pixel batch is accepted.
#[derive(Debug)]
pub struct SelectionRenderer {
    pub(super) config: SelectionRendererConfig,
    pub(super) interaction: InteractionState,
    pub(super) transition: Option<ActiveTransition>,
    pub(super) next_transition_id: u64,
}

impl SelectionRenderer {
    pub fn new(config: SelectionRendererConfig) -> SelectionResult<Self> {
        config.validate()?;
        debug!(width = config.width, "selection renderer created");
        Ok(Self {
            config,
            interaction: InteractionState::default(),
            transition: None,
            next_transition_id: 1,
        })
    }

    #[must_use]
    pub fn config(&self) -> &SelectionRendererConfig {
        &self.config
    }

    /// Lays out `bins` across the configured chart width.
    pub fn layout_histogram(&self, bins: Vec<HistogramBin>) -> SelectionResult<HistogramData> {
        HistogramData::new(bins, self.config.width)
    }

    #[must_use]
    pub fn interaction_mode(&self) -> InteractionMode {
        self.interaction.mode()
    }

    #[must_use]
    pub fn hover_index(&self) -> Option<usize> {
        self.interaction.over_selection_index()
    }

    pub fn set_hover_index(&mut self, index: Option<usize>) {
        if self.interaction.set_over_selection_index(index) {
            debug!(?index, "hover selection changed");
        }
    }

    /// Hovers the range under `pixel`, or clears hover when none covers it.
    ///
    /// Returns the new hover index. Hover is frozen while a handle is dragged.
    pub fn pointer_move(
        &mut self,
        pixel: f64,
        ranges: &[SelectionRange],
        data: &HistogramData,
    ) -> Option<usize> {
        if self.interaction.mode() == InteractionMode::Idle {
            let target = self.find_range_at(pixel, ranges, data).map(|(index, _)| index);
            self.set_hover_index(target);
        }
        self.hover_index()
    }

    pub fn pointer_leave(&mut self) {
        self.set_hover_index(None);
    }
}
