use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};
use crate::render::Color;

/// Number of samples kept by the stock chart presets.
pub const DEFAULT_WINDOW_CAPACITY: usize = 30;

/// Default animation time for redraws, hover and resize transitions.
pub const DEFAULT_ANIMATION_MS: u32 = 100;

/// Presentation flavour of a chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChartKind {
    /// Titled line chart with axes and value gridlines.
    Line,
    /// Axis-free inline chart without tooltips or point markers.
    Sparkline,
}

/// Optional low/high hints for the value axis.
///
/// Hints widen the axis to include them but never clip samples outside.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ValueBounds {
    #[serde(default)]
    pub low: Option<f64>,
    #[serde(default)]
    pub high: Option<f64>,
}

impl ValueBounds {
    #[must_use]
    pub fn new(low: Option<f64>, high: Option<f64>) -> Self {
        Self { low, high }
    }

    pub fn validate(self) -> ChartResult<()> {
        for (name, bound) in [("low", self.low), ("high", self.high)] {
            if bound.is_some_and(|value| !value.is_finite()) {
                return Err(ChartError::InvalidData(format!(
                    "value bound `{name}` must be finite"
                )));
            }
        }
        match (self.low, self.high) {
            (Some(low), Some(high)) if low > high => Err(ChartError::InvalidData(
                "value bound `low` must be <= `high`".to_owned(),
            )),
            _ => Ok(()),
        }
    }

    /// Widens `(min, max)` so that both hints are inside it.
    #[must_use]
    pub fn apply(self, min: f64, max: f64) -> (f64, f64) {
        let min = self.low.map_or(min, |low| min.min(low));
        let max = self.high.map_or(max, |high| max.max(high));
        (min, max)
    }
}

/// Stroke settings for one data series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesStyle {
    pub line_color: Color,
    pub line_width_px: f64,
}

impl Default for SeriesStyle {
    fn default() -> Self {
        Self {
            line_color: Color::rgba8(102, 102, 255, 0.9),
            line_width_px: 1.0,
        }
    }
}

impl SeriesStyle {
    /// Plain black stroke used by sparklines.
    #[must_use]
    pub fn sparkline() -> Self {
        Self {
            line_color: Color::rgb(0.0, 0.0, 0.0),
            line_width_px: 1.0,
        }
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.line_width_px.is_finite() || self.line_width_px <= 0.0 {
            return Err(ChartError::InvalidData(
                "series line width must be finite and > 0".to_owned(),
            ));
        }
        self.line_color.validate()
    }
}

/// Axis visibility and gridline switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxisConfig {
    /// Sample labels along the bottom edge.
    pub x_visible: bool,
    /// Value ticks along the left edge.
    pub y_visible: bool,
    pub x_grid: bool,
    pub y_grid: bool,
}

impl AxisConfig {
    #[must_use]
    pub fn line_chart() -> Self {
        Self {
            x_visible: true,
            y_visible: true,
            x_grid: false,
            y_grid: true,
        }
    }

    #[must_use]
    pub fn hidden() -> Self {
        Self {
            x_visible: false,
            y_visible: false,
            x_grid: false,
            y_grid: false,
        }
    }
}

/// Animation durations handed to the drawing backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnimationConfig {
    pub duration_ms: u32,
    pub hover_duration_ms: u32,
    pub resize_duration_ms: u32,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            duration_ms: DEFAULT_ANIMATION_MS,
            hover_duration_ms: DEFAULT_ANIMATION_MS,
            resize_duration_ms: DEFAULT_ANIMATION_MS,
        }
    }
}

/// Text sizing and palette for titles and axis labels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FontConfig {
    pub family: String,
    pub size_px: f64,
    pub title_size_px: f64,
    pub color: Color,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            family: "-apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, 'Helvetica Neue', Arial, 'Noto Sans', sans-serif".to_owned(),
            size_px: 12.0,
            title_size_px: 14.0,
            color: Color::rgba8(102, 102, 102, 1.0),
        }
    }
}

impl FontConfig {
    pub fn validate(&self) -> ChartResult<()> {
        for (name, size) in [("size_px", self.size_px), ("title_size_px", self.title_size_px)] {
            if !size.is_finite() || size <= 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "font `{name}` must be finite and > 0"
                )));
            }
        }
        self.color.validate()
    }
}

/// Declarative chart configuration.
///
/// Serializable so dashboards can keep chart layouts in config files; missing
/// fields fall back to the line-chart defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    pub kind: ChartKind,
    #[serde(default = "default_capacity")]
    pub capacity: usize,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub bounds: ValueBounds,
    #[serde(default = "default_series")]
    pub series: Vec<SeriesStyle>,
    #[serde(default = "AxisConfig::line_chart")]
    pub axes: AxisConfig,
    #[serde(default = "default_grid_color")]
    pub grid_color: Color,
    #[serde(default)]
    pub legend_visible: bool,
    #[serde(default = "default_tooltips_enabled")]
    pub tooltips_enabled: bool,
    #[serde(default = "default_point_radius_px")]
    pub point_radius_px: f64,
    #[serde(default)]
    pub animation: AnimationConfig,
    #[serde(default)]
    pub font: FontConfig,
    #[serde(default)]
    pub maintain_aspect_ratio: bool,
}

impl ChartConfig {
    /// Full line chart: title, axes, value gridlines, no legend.
    #[must_use]
    pub fn line(title: impl Into<String>, low: Option<f64>, high: Option<f64>) -> Self {
        Self {
            kind: ChartKind::Line,
            capacity: default_capacity(),
            title: Some(title.into()),
            bounds: ValueBounds::new(low, high),
            series: default_series(),
            axes: AxisConfig::line_chart(),
            grid_color: default_grid_color(),
            legend_visible: false,
            tooltips_enabled: default_tooltips_enabled(),
            point_radius_px: default_point_radius_px(),
            animation: AnimationConfig::default(),
            font: FontConfig::default(),
            maintain_aspect_ratio: false,
        }
    }

    /// Minimal inline chart: no axes, tooltips, point markers or legend.
    #[must_use]
    pub fn sparkline() -> Self {
        Self {
            kind: ChartKind::Sparkline,
            capacity: default_capacity(),
            title: None,
            bounds: ValueBounds::default(),
            series: vec![SeriesStyle::sparkline()],
            axes: AxisConfig::hidden(),
            grid_color: default_grid_color(),
            legend_visible: false,
            tooltips_enabled: false,
            point_radius_px: 0.0,
            animation: AnimationConfig::default(),
            font: FontConfig::default(),
            maintain_aspect_ratio: false,
        }
    }

    /// Sets the rolling window size.
    #[must_use]
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Replaces the series list; one window buffer is kept per entry.
    #[must_use]
    pub fn with_series(mut self, series: Vec<SeriesStyle>) -> Self {
        self.series = series;
        self
    }

    /// Sets the value-axis hints.
    #[must_use]
    pub fn with_bounds(mut self, low: Option<f64>, high: Option<f64>) -> Self {
        self.bounds = ValueBounds::new(low, high);
        self
    }

    /// Sets the point marker radius; zero hides markers.
    #[must_use]
    pub fn with_point_radius(mut self, radius_px: f64) -> Self {
        self.point_radius_px = radius_px;
        self
    }

    #[must_use]
    pub fn with_animation(mut self, animation: AnimationConfig) -> Self {
        self.animation = animation;
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.capacity == 0 {
            return Err(ChartError::EmptyWindow);
        }
        if self.series.is_empty() {
            return Err(ChartError::InvalidData(
                "chart needs at least one series".to_owned(),
            ));
        }
        for style in &self.series {
            style.validate()?;
        }
        self.bounds.validate()?;
        self.grid_color.validate()?;
        if !self.point_radius_px.is_finite() || self.point_radius_px < 0.0 {
            return Err(ChartError::InvalidData(
                "point radius must be finite and >= 0".to_owned(),
            ));
        }
        self.font.validate()
    }

    /// Serializes config to pretty JSON for debug/config files.
    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize config: {e}")))
    }

    /// Deserializes and validates config from JSON.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse config: {e}")))?;
        config.validate()?;
        Ok(config)
    }
}

fn default_capacity() -> usize {
    DEFAULT_WINDOW_CAPACITY
}

fn default_series() -> Vec<SeriesStyle> {
    vec![SeriesStyle::default()]
}

fn default_grid_color() -> Color {
    Color::rgba8(102, 153, 0, 0.2)
}

fn default_tooltips_enabled() -> bool {
    true
}

fn default_point_radius_px() -> f64 {
    3.0
}
