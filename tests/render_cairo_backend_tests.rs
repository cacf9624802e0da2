#![cfg(feature = "cairo-backend")]

use cairo::{Context, Format, ImageSurface};
use linegraph_rs::ChartError;
use linegraph_rs::api::{ChartConfig, ChartEngine};
use linegraph_rs::core::{DataPoint, LineSeries, ValueRange, Viewport};
use linegraph_rs::render::{CairoRenderer, Color};

fn sample_series() -> LineSeries {
    LineSeries::new(vec![
        DataPoint::new(0, 10.0),
        DataPoint::new(1, 20.0),
        DataPoint::new(2, 15.0),
    ])
}

#[test]
fn cairo_renderer_rejects_invalid_surface_size() {
    let err = CairoRenderer::new(0, 480).expect_err("invalid width must fail");
    assert!(matches!(
        err,
        ChartError::InvalidViewport {
            width: 0,
            height: 480
        }
    ));
}

#[test]
fn cairo_renderer_draws_every_primitive_kind() {
    let renderer = CairoRenderer::new(900, 500).expect("renderer");
    let config = ChartConfig::new(ValueRange::new(0.0, 50.0), 25.0).with_axis_titles("Month", "");
    let mut engine = ChartEngine::new(renderer, Viewport::new(900, 500), config);
    engine.set_series(vec![sample_series()]);

    engine.render().expect("render");
    let renderer = engine.into_renderer();
    let stats = renderer.last_stats();

    assert_eq!(stats.gradients_drawn, 1);
    assert_eq!(stats.lines_drawn, 3);
    assert_eq!(stats.polylines_drawn, 1);
    assert_eq!(stats.markers_drawn, 3);
    assert_eq!(stats.texts_drawn, 4);
}

#[test]
fn cairo_renderer_can_draw_on_external_context() {
    let renderer = CairoRenderer::new(600, 320).expect("renderer");
    let mut engine = ChartEngine::new(
        renderer,
        Viewport::new(600, 320),
        ChartConfig::new(ValueRange::new(0.0, 50.0), 25.0),
    );
    engine.set_series(vec![sample_series()]);

    let surface = ImageSurface::create(Format::ARgb32, 600, 320).expect("surface");
    let context = Context::new(&surface).expect("context");
    engine
        .render_on_cairo_context(&context)
        .expect("render on context");

    let renderer = engine.into_renderer();
    assert_eq!(renderer.last_stats().lines_drawn, 3);
}

#[test]
fn cairo_renderer_encodes_png() {
    let mut renderer = CairoRenderer::new(320, 220).expect("renderer");
    renderer
        .set_clear_color(Color::rgb(0.0, 0.0, 0.0))
        .expect("clear color");
    let mut engine = ChartEngine::new(
        renderer,
        Viewport::new(320, 220),
        ChartConfig::new(ValueRange::new(0.0, 100.0), 50.0),
    );
    engine.set_series(vec![sample_series()]);
    engine.render().expect("render");

    let mut png = Vec::new();
    engine
        .renderer()
        .write_png(&mut png)
        .expect("png encoding");
    assert!(png.starts_with(&[0x89, b'P', b'N', b'G']));
}

#[test]
fn invalid_clear_color_is_rejected() {
    let mut renderer = CairoRenderer::new(10, 10).expect("renderer");
    assert!(renderer.set_clear_color(Color::rgba(2.0, 0.0, 0.0, 1.0)).is_err());
}
