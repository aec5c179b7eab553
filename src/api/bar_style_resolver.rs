use crate::core::{HistogramData, SelectionRange};

use super::{SelectionRenderer, SelectionRendererConfig};

const DEFAULT_RANGE_OPACITY: f64 = 1.0;

/// Resolved paint for one pixel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarStyle<'a> {
    pub color: &'a str,
    pub opacity: f64,
}

/// How a pixel relates to the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BarState {
    /// Outside every range, or inside a disabled one.
    Inactive,
    Hovered,
    Selected(usize),
}

/// Pure color/opacity lookup over a config snapshot and hover index.
#[derive(Debug, Clone, Copy)]
pub(super) struct BarStyleResolver<'c> {
    config: &'c SelectionRendererConfig,
    hover_index: Option<usize>,
    /// Boundary pixels (`from`, `to` per range) replacing the projected spans.
    animated_spans: Option<&'c [f64]>,
}

impl<'c> BarStyleResolver<'c> {
    pub(super) fn new(config: &'c SelectionRendererConfig, hover_index: Option<usize>) -> Self {
        Self {
            config,
            hover_index,
            animated_spans: None,
        }
    }

    /// Resolves ranges against in-flight transition pixels instead of
    /// `data.project`. Ignored when the boundary count does not match.
    pub(super) fn with_animated_spans(mut self, spans: Option<&'c [f64]>) -> Self {
        self.animated_spans = spans;
        self
    }

    pub(super) fn color<'a>(
        self,
        pixel: f64,
        ranges: &'a [SelectionRange],
        data: &HistogramData,
    ) -> &'a str
    where
        'c: 'a,
    {
        match self.state(pixel, ranges, data) {
            BarState::Inactive => self.config.inactive_bar_color.as_str(),
            // Hover beats any per-range color.
            BarState::Hovered => self.config.over_selection_color.as_str(),
            BarState::Selected(index) => ranges[index]
                .color
                .as_deref()
                .or(self.config.selection_color.as_deref())
                .unwrap_or(self.config.inactive_bar_color.as_str()),
        }
    }

    pub(super) fn opacity(self, pixel: f64, ranges: &[SelectionRange], data: &HistogramData) -> f64 {
        match self.state(pixel, ranges, data) {
            BarState::Inactive => self.config.inactive_bar_opacity,
            BarState::Hovered => self.config.over_selection_opacity,
            BarState::Selected(index) => ranges[index].opacity.unwrap_or(DEFAULT_RANGE_OPACITY),
        }
    }

    pub(super) fn style<'a>(
        self,
        pixel: f64,
        ranges: &'a [SelectionRange],
        data: &HistogramData,
    ) -> BarStyle<'a>
    where
        'c: 'a,
    {
        BarStyle {
            color: self.color(pixel, ranges, data),
            opacity: self.opacity(pixel, ranges, data),
        }
    }

    fn state(self, pixel: f64, ranges: &[SelectionRange], data: &HistogramData) -> BarState {
        let matched = match self.animated_spans {
            Some(spans) if spans.len() == ranges.len() * 2 => {
                animated_range_at(pixel, ranges, spans)
            }
            _ => range_at(pixel, ranges, data),
        };
        match matched {
            None => BarState::Inactive,
            Some((_, range)) if range.disabled => BarState::Inactive,
            Some((index, _)) if self.hover_index == Some(index) => BarState::Hovered,
            Some((index, _)) => BarState::Selected(index),
        }
    }
}

fn range_at<'r>(
    pixel: f64,
    ranges: &'r [SelectionRange],
    data: &HistogramData,
) -> Option<(usize, &'r SelectionRange)> {
    ranges
        .iter()
        .enumerate()
        .find(|(_, range)| data.project(range.from) <= pixel && pixel < data.project(range.to))
}

fn animated_range_at<'r>(
    pixel: f64,
    ranges: &'r [SelectionRange],
    spans: &[f64],
) -> Option<(usize, &'r SelectionRange)> {
    ranges
        .iter()
        .zip(spans.chunks_exact(2))
        .enumerate()
        .find(|(_, (_, span))| span[0] <= pixel && pixel < span[1])
        .map(|(index, (range, _))| (index, range))
}

impl SelectionRenderer {
    /// First range whose projected span `[project(from), project(to))`
    /// contains `pixel`.
    #[must_use]
    pub fn find_range_at<'r>(
        &self,
        pixel: f64,
        ranges: &'r [SelectionRange],
        data: &HistogramData,
    ) -> Option<(usize, &'r SelectionRange)> {
        range_at(pixel, ranges, data)
    }

    #[must_use]
    pub fn bar_color<'a>(
        &'a self,
        pixel: f64,
        ranges: &'a [SelectionRange],
        data: &HistogramData,
    ) -> &'a str {
        self.style_resolver().color(pixel, ranges, data)
    }

    #[must_use]
    pub fn bar_opacity(&self, pixel: f64, ranges: &[SelectionRange], data: &HistogramData) -> f64 {
        self.style_resolver().opacity(pixel, ranges, data)
    }

    /// Color and opacity in one lookup.
    #[must_use]
    pub fn bar_style<'a>(
        &'a self,
        pixel: f64,
        ranges: &'a [SelectionRange],
        data: &HistogramData,
    ) -> BarStyle<'a> {
        self.style_resolver().style(pixel, ranges, data)
    }

    pub(super) fn style_resolver(&self) -> BarStyleResolver<'_> {
        BarStyleResolver::new(&self.config, self.hover_index())
    }
}
