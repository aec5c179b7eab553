use histogram_selection::api::{SelectionRenderer, SelectionRendererConfig};
use histogram_selection::core::{
    HistogramBin, HistogramData, HistogramSelection, MultipleHistogramSelection, SelectionRange,
    SingleHistogramSelection,
};
use proptest::prelude::*;

fn uneven_data(spans: &[f64], width: f64) -> HistogramData {
    let mut from = 0.0;
    let bins = spans
        .iter()
        .map(|span| {
            let bin = HistogramBin::new(from, from + span, 1.0);
            from += span;
            bin
        })
        .collect();
    HistogramData::new(bins, width).expect("valid layout")
}

proptest! {
    #[test]
    fn reconciling_current_projections_never_rewrites_values(
        spans in prop::collection::vec(1.0f64..500.0, 1..40),
        cuts in prop::collection::vec(0.0f64..1.0, 2..8),
        width in 50.0f64..2_000.0
    ) {
        let data = uneven_data(&spans, width);
        let (start, end) = data.value_domain();
        let mut values: Vec<f64> = cuts.iter().map(|cut| start + cut * (end - start)).collect();
        values.sort_by(f64::total_cmp);
        values.dedup();
        prop_assume!(values.len() >= 2);

        let ranges: Vec<SelectionRange> = values
            .windows(2)
            .map(|pair| SelectionRange::new(pair[0], pair[1]))
            .collect();
        let selection = MultipleHistogramSelection::new(ranges.clone()).expect("selection");
        let renderer = SelectionRenderer::new(SelectionRendererConfig::new(width)).expect("renderer");

        let points = selection.selection_points(&data);
        let positions: Vec<f64> = points.iter().map(|point| point.pixel).collect();
        let reconciled = renderer
            .reconcile_selection_positions(&selection, &data, &positions, Some(points.as_slice()))
            .expect("reconcile");

        prop_assert!(!reconciled.is_changed());
        prop_assert_eq!(reconciled.ranges, ranges);
    }

    #[test]
    fn whole_pixel_drags_are_stable(
        spans in prop::collection::vec(1.0f64..500.0, 1..40),
        pixel in 0u32..360
    ) {
        let data = uneven_data(&spans, 360.0);
        let renderer = SelectionRenderer::new(SelectionRendererConfig::new(360.0)).expect("renderer");
        let (_, end) = data.value_domain();
        let mut selection = SingleHistogramSelection::new(Some(SelectionRange::new(
            data.unproject(0.0),
            end,
        )))
        .expect("selection");

        let to_px = data.project(end);
        let target = f64::from(pixel).min(to_px);
        renderer
            .update_selection_positions(&mut selection, &data, &[target, to_px], None)
            .expect("first pass");
        let written = renderer
            .update_selection_positions(&mut selection, &data, &[target, to_px], None)
            .expect("second pass");

        prop_assert!(!written);
        prop_assert_eq!(data.project(selection.selection()[0].from), target);
    }
}
