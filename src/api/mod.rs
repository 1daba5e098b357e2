mod chart_config;
mod chart_handle;
pub mod frame_builder;
mod json_contract;
mod mount_registry;

pub use chart_config::{
    AnimationConfig, AxisConfig, ChartConfig, ChartKind, DEFAULT_ANIMATION_MS,
    DEFAULT_WINDOW_CAPACITY, FontConfig, SeriesStyle, ValueBounds,
};
pub use chart_handle::ChartHandle;
pub use json_contract::{
    CHART_SNAPSHOT_JSON_SCHEMA_V1, ChartSnapshot, ChartSnapshotJsonContractV1,
};
pub use mount_registry::MountRegistry;
