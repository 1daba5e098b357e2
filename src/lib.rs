//! rolling-chart: headless live charts over fixed-width rolling windows.
//!
//! A [`MountRegistry`] describes the display surfaces of a dashboard. Charts
//! created on it keep the last N `(label, value)` samples; every append
//! evicts the oldest sample and redraws through a pluggable
//! [`render::Renderer`].

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{ChartConfig, ChartHandle, ChartKind, MountRegistry};
pub use crate::core::{SampleValue, SampleWindow};
pub use error::{ChartError, ChartResult};
