use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ChartError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("rolling window must hold at least one slot")]
    EmptyWindow,

    #[error("label buffer length {labels} does not match series buffer length {series}")]
    MisalignedBuffers { labels: usize, series: usize },

    #[error("sample carries {actual} values but the chart has {expected} series")]
    SeriesCountMismatch { expected: usize, actual: usize },

    /// The window was already updated; only drawing it failed.
    #[error("sample applied but redraw failed: {0}")]
    RedrawFailed(Box<ChartError>),

    #[error("no display surface is mounted as `{0}`")]
    MountNotFound(String),
}
