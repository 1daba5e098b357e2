use criterion::{Criterion, criterion_group, criterion_main};
use rolling_chart::api::{ChartConfig, MountRegistry};
use rolling_chart::core::{SampleValue, SampleWindow, Viewport};
use rolling_chart::render::NullRenderer;
use std::hint::black_box;

fn bench_window_append_10k(c: &mut Criterion) {
    c.bench_function("sample_window_append_10k", |b| {
        b.iter(|| {
            let mut window = SampleWindow::new(30, 1).expect("valid window");
            for i in 0..10_000 {
                window
                    .append("tick", &SampleValue::Broadcast(black_box(f64::from(i))))
                    .expect("append");
            }
            black_box(window.value_range());
        })
    });
}

fn bench_chart_append_with_redraw(c: &mut Criterion) {
    let mut registry = MountRegistry::new();
    registry
        .register("main", Viewport::new(1280, 320))
        .expect("register");
    let mut chart = registry
        .create_with_config(
            "main",
            ChartConfig::line("bench", Some(0.0), Some(100.0)).with_capacity(120),
            NullRenderer::default(),
        )
        .expect("chart init");

    let mut i = 0u32;
    c.bench_function("chart_append_sample_redraw", |b| {
        b.iter(|| {
            i = i.wrapping_add(1);
            chart
                .append_sample("12:00:00", black_box(f64::from(i % 100)))
                .expect("append");
        })
    });
}

criterion_group!(benches, bench_window_append_10k, bench_chart_append_with_redraw);
criterion_main!(benches);
