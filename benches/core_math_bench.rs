use criterion::{Criterion, criterion_group, criterion_main};
use linegraph_rs::api::{Chart, ChartConfig, ChartEngine, IndexLabels};
use linegraph_rs::core::{
    DataPoint, LineSeries, Padding, PlotLayout, ValueRange, Viewport, project_points,
};
use linegraph_rs::render::{NullRenderer, RecordingSurface, draw_frame};
use std::hint::black_box;

fn generated_points(count: usize) -> Vec<DataPoint> {
    (0..count)
        .map(|i| {
            let t = i as f64;
            DataPoint::new(i, 50.0 + (t * 0.05).sin() * 40.0)
        })
        .collect()
}

fn bench_projection_10k(c: &mut Criterion) {
    let layout = PlotLayout::compute(Viewport::new(1920, 1080), Padding::uniform(10.0));
    let points = generated_points(10_000);
    let range = ValueRange::new(0.0, 100.0);

    c.bench_function("projection_10k", |b| {
        b.iter(|| {
            let _ = project_points(black_box(&points), black_box(&layout), black_box(range));
        })
    });
}

fn bench_build_render_frame_2k(c: &mut Criterion) {
    let chart = Chart::new(ChartConfig::new(ValueRange::new(0.0, 100.0), 50.0))
        .with_series(LineSeries::new(generated_points(2_000)));
    let viewport = Viewport::new(1600, 900);

    c.bench_function("build_render_frame_2k", |b| {
        b.iter(|| {
            let _ = chart
                .build_render_frame(black_box(viewport), &IndexLabels)
                .expect("frame should build");
        })
    });
}

fn bench_surface_replay_2k(c: &mut Criterion) {
    let frame = Chart::new(ChartConfig::new(ValueRange::new(0.0, 100.0), 50.0))
        .with_series(LineSeries::new(generated_points(2_000)))
        .build_render_frame(Viewport::new(1600, 900), &IndexLabels)
        .expect("frame should build");

    c.bench_function("surface_replay_2k", |b| {
        b.iter(|| {
            let mut surface = RecordingSurface::default();
            let _ = draw_frame(&mut surface, black_box(&frame)).expect("replay should succeed");
        })
    });
}

fn bench_engine_render_null_2k(c: &mut Criterion) {
    let mut engine = ChartEngine::new(
        NullRenderer::default(),
        Viewport::new(1600, 900),
        ChartConfig::new(ValueRange::new(0.0, 100.0), 50.0),
    )
    .with_category_labels(IndexLabels);
    engine.set_series(vec![LineSeries::new(generated_points(2_000))]);

    c.bench_function("engine_render_null_2k", |b| {
        b.iter(|| {
            engine.render().expect("render should succeed");
        })
    });
}

criterion_group!(
    benches,
    bench_projection_10k,
    bench_build_render_frame_2k,
    bench_surface_replay_2k,
    bench_engine_render_null_2k
);
criterion_main!(benches);
