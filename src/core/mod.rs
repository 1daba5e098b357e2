pub mod labels;
pub mod line_series;
pub mod rolling_window;
pub mod sample_window;
pub mod scale;
pub mod types;

pub use labels::{time_label, unix_seconds_label};
pub use line_series::{LineSegment, project_line_segments, slot_to_x};
pub use rolling_window::RollingWindow;
pub use sample_window::{EvictedSample, SampleValue, SampleWindow, SeriesValues};
pub use scale::LinearScale;
pub use types::{PlotArea, Viewport};
