use rolling_chart::api::{
    AxisConfig, ChartConfig, ChartKind, DEFAULT_ANIMATION_MS, DEFAULT_WINDOW_CAPACITY,
};
use rolling_chart::error::ChartError;

#[test]
fn line_preset_matches_dashboard_defaults() {
    let config = ChartConfig::line("Coolant", Some(-10.0), Some(120.0));
    assert_eq!(config.kind, ChartKind::Line);
    assert_eq!(config.capacity, DEFAULT_WINDOW_CAPACITY);
    assert_eq!(config.title.as_deref(), Some("Coolant"));
    assert_eq!(config.bounds.low, Some(-10.0));
    assert_eq!(config.bounds.high, Some(120.0));
    assert_eq!(config.axes, AxisConfig::line_chart());
    assert!(!config.legend_visible);
    assert!(config.tooltips_enabled);
    assert!(!config.maintain_aspect_ratio);
    assert_eq!(config.animation.duration_ms, DEFAULT_ANIMATION_MS);
    assert_eq!(config.animation.hover_duration_ms, DEFAULT_ANIMATION_MS);
    assert_eq!(config.animation.resize_duration_ms, DEFAULT_ANIMATION_MS);
    config.validate().expect("valid preset");
}

#[test]
fn sparkline_preset_hides_chrome() {
    let config = ChartConfig::sparkline();
    assert_eq!(config.kind, ChartKind::Sparkline);
    assert_eq!(config.axes, AxisConfig::hidden());
    assert!(!config.tooltips_enabled);
    assert!(!config.legend_visible);
    assert_eq!(config.point_radius_px, 0.0);
    assert_eq!(config.title, None);
    config.validate().expect("valid preset");
}

#[test]
fn config_round_trips_through_json() {
    let config = ChartConfig::line("MAP kPa", Some(0.0), None).with_capacity(60);
    let json = config.to_json_pretty().expect("serialize");
    let parsed = ChartConfig::from_json_str(&json).expect("parse");
    assert_eq!(parsed, config);
}

#[test]
fn partial_json_falls_back_to_defaults() {
    let parsed = ChartConfig::from_json_str(r#"{ "kind": "Sparkline", "title": "Idle" }"#)
        .expect("parse");
    assert_eq!(parsed.kind, ChartKind::Sparkline);
    assert_eq!(parsed.capacity, DEFAULT_WINDOW_CAPACITY);
    assert_eq!(parsed.series.len(), 1);
    assert_eq!(parsed.title.as_deref(), Some("Idle"));
}

#[test]
fn invalid_configs_are_rejected() {
    let inverted = ChartConfig::line("t", Some(5.0), Some(1.0));
    assert!(matches!(inverted.validate(), Err(ChartError::InvalidData(_))));

    let non_finite = ChartConfig::line("t", Some(f64::NAN), None);
    assert!(non_finite.validate().is_err());

    let no_series = ChartConfig::sparkline().with_series(Vec::new());
    assert!(no_series.validate().is_err());

    let negative_radius = ChartConfig::sparkline().with_point_radius(-1.0);
    assert!(negative_radius.validate().is_err());

    assert_eq!(
        ChartConfig::from_json_str(r#"{ "kind": "Line", "capacity": 0 }"#),
        Err(ChartError::EmptyWindow)
    );
    assert!(ChartConfig::from_json_str("not json").is_err());
}
