use rolling_chart::api::{
    CHART_SNAPSHOT_JSON_SCHEMA_V1, ChartKind, ChartSnapshot, ChartSnapshotJsonContractV1,
    MountRegistry,
};
use rolling_chart::core::Viewport;
use rolling_chart::render::NullRenderer;

fn snapshot() -> ChartSnapshot {
    let mut registry = MountRegistry::new();
    registry
        .register("afr", Viewport::new(300, 60))
        .expect("register");
    let mut chart = registry
        .create_sparkline("afr", NullRenderer::default())
        .expect("spark");
    chart
        .append_samples([("09:00:00", 14.7), ("09:00:01", 14.2)])
        .expect("append");
    chart.snapshot()
}

#[test]
fn snapshot_contract_v1_round_trip() {
    let snapshot = snapshot();
    let json = snapshot.to_json_contract_v1_pretty().expect("serialize");
    let payload: ChartSnapshotJsonContractV1 = serde_json::from_str(&json).expect("payload");
    assert_eq!(payload.schema_version, CHART_SNAPSHOT_JSON_SCHEMA_V1);

    let parsed = ChartSnapshot::from_json_compat_str(&json).expect("parse");
    assert_eq!(parsed, snapshot);
    assert_eq!(parsed.kind, ChartKind::Sparkline);
    assert_eq!(parsed.labels.len(), 30);
    assert_eq!(parsed.series[0].last(), Some(&14.2));
}

#[test]
fn bare_snapshot_json_is_accepted() {
    let snapshot = snapshot();
    let bare = serde_json::to_string(&snapshot).expect("bare");
    assert_eq!(ChartSnapshot::from_json_compat_str(&bare).expect("parse"), snapshot);
}

#[test]
fn unknown_schema_version_is_rejected() {
    let payload = ChartSnapshotJsonContractV1 {
        schema_version: 99,
        snapshot: snapshot(),
    };
    let json = serde_json::to_string(&payload).expect("serialize");
    assert!(ChartSnapshot::from_json_compat_str(&json).is_err());
}

#[test]
fn snapshot_rebuilds_an_aligned_window() {
    let window = snapshot().to_window().expect("window");
    assert_eq!(window.capacity(), 30);
    assert_eq!(window.labels().last(), Some(&"09:00:01"));

    let mut broken = snapshot();
    broken.labels.pop();
    assert!(broken.to_window().is_err());
}
