use linegraph_rs::ChartError;
use linegraph_rs::api::{ChartConfig, ChartEngine, IndexLabels, preview};
use linegraph_rs::core::{DataPoint, LineSeries, ValueRange, Viewport};
use linegraph_rs::render::{NullRenderer, RecordingSurface, SurfaceRenderer};

fn engine() -> ChartEngine<NullRenderer> {
    ChartEngine::new(
        NullRenderer::default(),
        Viewport::new(320, 220),
        ChartConfig::new(ValueRange::new(0.0, 100.0), 50.0),
    )
}

#[test]
fn null_renderer_receives_computed_frame_counts() {
    let mut engine = engine();
    engine.set_series(vec![LineSeries::new(vec![
        DataPoint::new(0, 10.0),
        DataPoint::new(1, 20.0),
        DataPoint::new(2, 15.0),
    ])]);

    engine.render().expect("render");
    let renderer = engine.into_renderer();

    assert_eq!(renderer.frames_rendered, 1);
    assert_eq!(renderer.last_primitive_count, 11);
    assert_eq!(renderer.last_line_count, 4, "three axis lines plus one polyline");
    assert_eq!(renderer.last_marker_count, 3);
    assert_eq!(renderer.last_text_count, 3);
}

#[test]
fn overflowing_values_do_not_abort_render() {
    let mut engine = ChartEngine::new(
        NullRenderer::default(),
        Viewport::new(320, 220),
        ChartConfig::new(ValueRange::new(0.0, 1.0), 1e308),
    );
    engine.set_series(vec![LineSeries::new(vec![
        DataPoint::new(0, 0.2),
        DataPoint::new(1, 1e308),
    ])]);

    engine.render().expect("render");
    assert_eq!(engine.renderer().frames_rendered, 1);
    assert_eq!(engine.renderer().last_marker_count, 2);
}

#[test]
fn resize_recomputes_layout_on_next_frame() {
    let mut engine = engine();
    engine.push_series(LineSeries::new(vec![
        DataPoint::new(0, 0.0),
        DataPoint::new(1, 100.0),
    ]));

    let before = engine.project_series();
    engine.resize(Viewport::new(620, 420));
    let after = engine.project_series();

    assert_eq!(engine.layout().x_axis_length, 600.0);
    assert_eq!(before[0][0].x, 85.0);
    assert_eq!(after[0][0].x, 160.0);
    assert_eq!(after[0][1].y, 10.0);
    assert_eq!(after[0][0].y, 410.0);
}

#[test]
fn shrinking_below_padding_still_renders() {
    let mut engine = engine();
    engine.push_series(LineSeries::new(vec![DataPoint::new(0, 50.0)]));
    engine.resize(Viewport::new(12, 12));

    engine.render().expect("collapsed render");
    assert_eq!(engine.renderer().last_marker_count, 0);
    assert_eq!(engine.renderer().last_text_count, 3, "month label plus both scale labels");
}

#[test]
fn category_lookup_errors_propagate_from_render() {
    let mut engine = engine();
    engine.push_series(LineSeries::new(vec![DataPoint::new(40, 50.0)]));

    let err = engine.render().expect_err("month 40 does not exist");
    assert!(matches!(err, ChartError::UnknownCategory { category: 40, .. }));
    assert_eq!(engine.renderer().frames_rendered, 0);

    engine.set_category_labels(IndexLabels);
    engine.render().expect("index labels accept any category");
    assert_eq!(engine.renderer().frames_rendered, 1);
}

#[test]
fn repeated_renders_are_identical() {
    let mut engine = ChartEngine::new(
        SurfaceRenderer::new(RecordingSurface::default()),
        Viewport::new(320, 220),
        ChartConfig::new(ValueRange::new(0.0, 100.0), 50.0),
    );
    engine.set_series(vec![preview::preview_series()]);

    let first = engine.build_render_frame().expect("first frame");
    let second = engine.build_render_frame().expect("second frame");
    assert_eq!(first, second);

    engine.render().expect("render");
    assert_eq!(engine.renderer().last_stats().polylines_drawn, 1);
    assert_eq!(engine.renderer().last_stats().markers_drawn, 0);
}

#[test]
fn preview_chart_uses_a_white_two_point_line_without_markers() {
    let chart = preview::preview_chart();
    assert_eq!(chart.series.len(), 1);

    let series = &chart.series[0];
    assert_eq!(series.len(), 2);
    assert_eq!(series.style.point_radius, 0.0);
    assert_eq!(series.style.stroke_width, 2.0);
    assert_eq!(chart.config.y_mid_reference, 50.0);
}
