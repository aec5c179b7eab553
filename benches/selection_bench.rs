use criterion::{Criterion, criterion_group, criterion_main};
use histogram_selection::api::{SelectionRenderer, SelectionRendererConfig};
use histogram_selection::core::{
    HistogramBin, HistogramData, HistogramSelection, MultipleHistogramSelection, SelectionRange,
};
use histogram_selection::render::NullRenderer;
use std::hint::black_box;

fn wide_histogram(bins: usize, width: f64) -> HistogramData {
    let bins = (0..bins)
        .map(|i| {
            let from = i as f64 * 10.0;
            HistogramBin::new(from, from + 10.0, (i % 17) as f64)
        })
        .collect();
    HistogramData::new(bins, width).expect("valid layout")
}

fn banded_selection(data: &HistogramData, bands: usize) -> MultipleHistogramSelection {
    let (start, end) = data.value_domain();
    let step = (end - start) / bands as f64;
    let ranges = (0..bands)
        .map(|i| {
            let from = start + i as f64 * step;
            SelectionRange::new(from, from + step).with_color(format!("band-{i}"))
        })
        .collect();
    MultipleHistogramSelection::new(ranges).expect("valid selection")
}

fn bench_overlay_frame_4k_bars(c: &mut Criterion) {
    let data = wide_histogram(4_000, 3_840.0);
    let selection = banded_selection(&data, 16);
    let renderer =
        SelectionRenderer::new(SelectionRendererConfig::new(3_840.0)).expect("renderer init");
    let mut backend = NullRenderer::default();

    c.bench_function("overlay_frame_4k_bars", |b| {
        b.iter(|| {
            renderer
                .render(&mut backend, black_box(&selection), black_box(&data))
                .expect("render should succeed");
        })
    });
}

fn bench_reconcile_dragged_handles(c: &mut Criterion) {
    let data = wide_histogram(1_000, 1_920.0);
    let selection = banded_selection(&data, 64);
    let renderer =
        SelectionRenderer::new(SelectionRendererConfig::new(1_920.0)).expect("renderer init");
    let positions: Vec<f64> = selection
        .selection_points(&data)
        .iter()
        .enumerate()
        .map(|(i, point)| if i % 2 == 0 { point.pixel + 1.0 } else { point.pixel })
        .collect();

    c.bench_function("reconcile_dragged_handles_64", |b| {
        b.iter(|| {
            let _ = renderer
                .reconcile_selection_positions(
                    black_box(&selection),
                    black_box(&data),
                    black_box(&positions),
                    None,
                )
                .expect("reconcile should succeed");
        })
    });
}

criterion_group!(
    benches,
    bench_overlay_frame_4k_bars,
    bench_reconcile_dragged_handles
);
criterion_main!(benches);
