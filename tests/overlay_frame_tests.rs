use histogram_selection::api::{SelectionRenderer, SelectionRendererConfig};
use histogram_selection::core::{
    HistogramContent, HistogramData, MultipleHistogramSelection, SelectionEdge, SelectionRange,
    SingleHistogramSelection,
};
use histogram_selection::render::{NullRenderer, OverlayFrame};

fn config() -> SelectionRendererConfig {
    SelectionRendererConfig::new(360.0)
        .with_inactive_bar("grey", 0.5)
        .with_over_selection("yellow", 1.0)
}

fn load(fixture: &str) -> HistogramData {
    let content = HistogramContent::from_json_str(fixture).expect("fixture");
    HistogramData::from_content(content, 360.0).expect("layout")
}

fn sample_selection() -> MultipleHistogramSelection {
    MultipleHistogramSelection::new(vec![
        SelectionRange::new(0.5, 100.0)
            .with_color("rgba(0,0,10)")
            .with_opacity(0.1),
        SelectionRange::new(100.0, 200.0)
            .with_color("rgba(0,0,20)")
            .with_opacity(0.2),
        SelectionRange::new(200.5, 300.0)
            .with_color("rgba(0,0,30)")
            .with_opacity(0.3)
            .with_disabled(true),
        SelectionRange::new(300.0, 421.0).with_color("rgba(0,0,40)"),
    ])
    .expect("selection")
}

#[test]
fn frame_paints_every_bar_at_its_center() {
    let renderer = SelectionRenderer::new(config()).expect("renderer");
    let data = load(include_str!("fixtures/histogram_sample.json"));
    let selection = sample_selection();

    let frame = renderer.build_overlay_frame(&selection, &data);
    let colors: Vec<&str> = frame.bars.iter().map(|bar| bar.color.as_str()).collect();

    assert_eq!(
        colors,
        vec![
            "rgba(0,0,10)",
            "rgba(0,0,10)",
            "rgba(0,0,10)",
            "rgba(0,0,20)",
            "rgba(0,0,20)",
            "rgba(0,0,20)",
            "grey",
            "grey",
            "grey",
            "rgba(0,0,40)",
            "rgba(0,0,40)",
            "rgba(0,0,40)",
        ]
    );
    assert_eq!(frame.bars[0].opacity, 0.1);
    assert_eq!(frame.bars[7].opacity, 0.5);
    assert_eq!(frame.bars[11].opacity, 1.0);
    assert_eq!((frame.bars[11].left, frame.bars[11].right), (330.0, 360.0));
}

#[test]
fn frame_marks_handles_and_disabled_ranges() {
    let mut renderer = SelectionRenderer::new(config()).expect("renderer");
    let data = load(include_str!("fixtures/histogram_sample.json"));
    let selection = sample_selection();
    renderer.begin_handle_drag(256.0, &selection, &data);

    let frame = renderer.build_overlay_frame(&selection, &data);
    let pixels: Vec<f64> = frame.handles.iter().map(|handle| handle.pixel).collect();

    assert_eq!(pixels, vec![0.0, 85.0, 171.0, 256.0, 453.0]);
    assert!(frame.handles[2].disabled);
    assert!(!frame.handles[3].disabled);
    assert!(frame.handles[3].dragging);
    assert_eq!(frame.handles[4].edge, SelectionEdge::To);
    assert_eq!(frame.handles[4].range_index, 3);
}

#[test]
fn handles_follow_transition_pixels_while_animating() {
    let mut renderer = SelectionRenderer::new(config()).expect("renderer");
    let zoom_out = load(include_str!("fixtures/histogram_zoom_out.json"));
    let zoom_in = load(include_str!("fixtures/histogram_zoom_in.json"));
    let selection =
        SingleHistogramSelection::new(Some(SelectionRange::new(9591.0, 20310.0))).expect("selection");
    let ranges = vec![SelectionRange::new(9591.0, 20310.0)];

    renderer.on_data_transition(&ranges, &ranges, &zoom_out, &zoom_in, |_| {}, |_| {});
    let frame = renderer.build_overlay_frame(&selection, &zoom_in);
    let pixels: Vec<f64> = frame.handles.iter().map(|handle| handle.pixel).collect();
    assert_eq!(pixels, vec![169.0, 358.0]);

    while renderer.advance_transition(0.05) {}
    let frame = renderer.build_overlay_frame(&selection, &zoom_in);
    let pixels: Vec<f64> = frame.handles.iter().map(|handle| handle.pixel).collect();
    assert_eq!(pixels, vec![0.0, 357.0]);
}

#[test]
fn null_renderer_validates_and_counts_frames() {
    let renderer = SelectionRenderer::new(config()).expect("renderer");
    let data = load(include_str!("fixtures/histogram_sample.json"));
    let selection = sample_selection();
    let mut backend = NullRenderer::default();

    renderer
        .render(&mut backend, &selection, &data)
        .expect("render");
    renderer
        .render(&mut backend, &selection, &data)
        .expect("render");

    assert_eq!(backend.frames_rendered, 2);
    assert_eq!(backend.last_bar_count, 12);
    assert_eq!(backend.last_handle_count, 5);
}

#[test]
fn invalid_frame_is_rejected() {
    let mut frame = OverlayFrame::new(360.0);
    frame.bars.push(histogram_selection::render::BarPaint {
        bar_index: 0,
        left: 0.0,
        right: 30.0,
        color: "grey".to_owned(),
        opacity: 1.5,
    });

    let err = frame.validate().expect_err("opacity out of range");
    assert!(format!("{err}").contains("opacity"));
}

#[test]
fn bands_follow_transition_pixels_while_animating() {
    let mut renderer = SelectionRenderer::new(config()).expect("renderer");
    let zoom_out = load(include_str!("fixtures/histogram_zoom_out.json"));
    let zoom_in = load(include_str!("fixtures/histogram_zoom_in.json"));
    let range = SelectionRange::new(9591.0, 20310.0).with_color("blue");
    let selection = SingleHistogramSelection::new(Some(range.clone())).expect("selection");
    let ranges = vec![range];

    renderer.on_data_transition(&ranges, &ranges, &zoom_out, &zoom_in, |_| {}, |_| {});
    // Band starts at the old projection [169, 358).
    let frame = renderer.build_overlay_frame(&selection, &zoom_in);
    assert_eq!(frame.bars[0].color, "grey");
    assert_eq!(frame.bars[5].color, "grey");
    assert_eq!(frame.bars[6].color, "blue");

    while renderer.advance_transition(0.05) {}
    let frame = renderer.build_overlay_frame(&selection, &zoom_in);
    assert!(frame.bars.iter().all(|bar| bar.color == "blue"));
}
