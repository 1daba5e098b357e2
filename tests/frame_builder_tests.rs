use approx::assert_relative_eq;
use rolling_chart::api::frame_builder::{build_frame, plot_area, value_scale};
use rolling_chart::api::{ChartConfig, MountRegistry};
use rolling_chart::core::{PlotArea, SampleValue, SampleWindow, Viewport};
use rolling_chart::render::{NullRenderer, Renderer};

const VIEWPORT: Viewport = Viewport {
    width: 600,
    height: 300,
};

#[test]
fn line_chart_frame_has_series_gridlines_markers_and_title() {
    let config = ChartConfig::line("Battery Voltage", Some(10.0), Some(15.0));
    let mut window = SampleWindow::new(config.capacity, 1).expect("window");
    window
        .append("12:00:00", &SampleValue::Broadcast(12.6))
        .expect("append");

    let frame = build_frame(&config, &window, VIEWPORT).expect("frame");
    frame.validate().expect("valid frame");

    // 5 value gridlines + 29 series segments.
    assert_eq!(frame.lines.len(), 5 + 29);
    assert_eq!(frame.rects.len(), 30);
    assert_eq!(frame.texts_matching("Battery Voltage").count(), 1);
    assert_eq!(frame.texts_matching("12:00:00").count(), 1);
    assert_eq!(frame.texts_matching("15").count(), 1);
}

#[test]
fn sparkline_frame_is_bare_polyline() {
    let config = ChartConfig::sparkline();
    let mut window = SampleWindow::new(config.capacity, 1).expect("window");
    window
        .append("12:00", &SampleValue::Broadcast(3.0))
        .expect("append");

    let frame = build_frame(&config, &window, Viewport::new(120, 30)).expect("frame");
    assert_eq!(frame.lines.len(), 29);
    assert!(frame.rects.is_empty());
    assert!(frame.texts.is_empty());
    assert_eq!(plot_area(&config, Viewport::new(120, 30)), PlotArea::full(Viewport::new(120, 30)));
}

#[test]
fn newest_sample_is_drawn_at_right_edge_and_top() {
    let config = ChartConfig::sparkline().with_capacity(3);
    let mut window = SampleWindow::new(3, 1).expect("window");
    window.append("a", &SampleValue::Broadcast(2.0)).expect("a");
    window.append("b", &SampleValue::Broadcast(4.0)).expect("b");

    let frame = build_frame(&config, &window, Viewport::new(100, 40)).expect("frame");
    let last = frame.lines.last().expect("segment");
    assert_relative_eq!(last.x2, 100.0);
    assert_relative_eq!(last.y2, 0.0);
    let first = frame.lines.first().expect("segment");
    assert_relative_eq!(first.x1, 0.0);
    assert_relative_eq!(first.y1, 40.0);
}

#[test]
fn bound_hints_widen_but_never_clip() {
    let config = ChartConfig::line("t", Some(0.0), Some(10.0));
    let mut window = SampleWindow::new(4, 1).expect("window");
    window.append("a", &SampleValue::Broadcast(25.0)).expect("append");

    let (min, max) = value_scale(&config, &window).expect("scale").domain();
    assert_relative_eq!(min, 0.0);
    assert_relative_eq!(max, 25.0);
}

#[test]
fn flat_window_gets_unit_span() {
    let config = ChartConfig::sparkline();
    let window = SampleWindow::new(5, 1).expect("window");
    let (min, max) = value_scale(&config, &window).expect("scale").domain();
    assert_relative_eq!(min, -0.5);
    assert_relative_eq!(max, 0.5);
}

#[test]
fn handle_keeps_last_frame_and_renderer_counters() {
    let mut registry = MountRegistry::new();
    registry.register("main", VIEWPORT).expect("register");
    let mut chart = registry
        .create_chart("main", "Throttle", None, None, NullRenderer::default())
        .expect("chart");
    chart.append_sample("10:00", 1.5).expect("append");

    let frame = chart.last_frame().expect("frame").clone();
    let renderer = chart.renderer();
    assert_eq!(renderer.frames_rendered, 2);
    assert_eq!(renderer.last_line_count, frame.lines.len());
    assert_eq!(renderer.last_rect_count, frame.rects.len());
    assert_eq!(renderer.last_text_count, frame.texts.len());

    let mut other = NullRenderer::default();
    other.render(&frame).expect("re-render");
    assert_eq!(other.frames_rendered, 1);
}

#[test]
fn resize_and_bounds_trigger_redraws() {
    let mut registry = MountRegistry::new();
    registry.register("main", VIEWPORT).expect("register");
    let mut chart = registry
        .create_chart("main", "Throttle", None, None, NullRenderer::default())
        .expect("chart");

    chart.resize(Viewport::new(300, 100)).expect("resize");
    assert_eq!(chart.last_frame().expect("frame").viewport, Viewport::new(300, 100));
    assert!(chart.resize(Viewport::new(0, 100)).is_err());

    chart.set_bounds(Some(-1.0), Some(1.0)).expect("bounds");
    assert!(chart.set_bounds(Some(2.0), Some(1.0)).is_err());
    assert_eq!(chart.redraw_count(), 3);
}
