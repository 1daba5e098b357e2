use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::RollingWindow;
use crate::error::{ChartError, ChartResult};

/// Inline storage for per-sample values; dashboards rarely plot more than a
/// handful of series on one chart.
pub type SeriesValues = SmallVec<[f64; 4]>;

/// Value half of a `(label, value)` sample.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SampleValue {
    /// One scalar pushed into every series.
    Broadcast(f64),
    /// One value per series, in series order.
    PerSeries(SeriesValues),
}

impl SampleValue {
    #[must_use]
    pub fn per_series(values: &[f64]) -> Self {
        Self::PerSeries(SmallVec::from_slice(values))
    }

    fn value_for(&self, series_index: usize) -> f64 {
        match self {
            Self::Broadcast(value) => *value,
            Self::PerSeries(values) => values[series_index],
        }
    }

    fn validate(&self, series_count: usize) -> ChartResult<()> {
        let values: &[f64] = match self {
            Self::Broadcast(value) => std::slice::from_ref(value),
            Self::PerSeries(values) => {
                if values.len() != series_count {
                    return Err(ChartError::SeriesCountMismatch {
                        expected: series_count,
                        actual: values.len(),
                    });
                }
                values
            }
        };
        if values.iter().any(|value| !value.is_finite()) {
            return Err(ChartError::InvalidData(
                "sample values must be finite".to_owned(),
            ));
        }
        Ok(())
    }
}

impl From<f64> for SampleValue {
    fn from(value: f64) -> Self {
        Self::Broadcast(value)
    }
}

impl From<i32> for SampleValue {
    fn from(value: i32) -> Self {
        Self::Broadcast(f64::from(value))
    }
}

impl From<Vec<f64>> for SampleValue {
    fn from(values: Vec<f64>) -> Self {
        Self::PerSeries(SmallVec::from_vec(values))
    }
}

impl From<&[f64]> for SampleValue {
    fn from(values: &[f64]) -> Self {
        Self::per_series(values)
    }
}

/// The sample that left the window during an append.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvictedSample {
    pub label: String,
    pub values: SeriesValues,
}

/// Index-aligned label buffer plus one or more series buffers.
///
/// `labels[i]` describes `series[s][i]` for every series `s`. All buffers
/// share one capacity, fixed at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleWindow {
    labels: RollingWindow<String>,
    series: Vec<RollingWindow<f64>>,
}

impl SampleWindow {
    /// Creates `series_count` series of `capacity` zeros and a label buffer of
    /// empty strings.
    pub fn new(capacity: usize, series_count: usize) -> ChartResult<Self> {
        if series_count == 0 {
            return Err(ChartError::InvalidData(
                "sample window needs at least one series".to_owned(),
            ));
        }
        let labels = RollingWindow::filled(capacity, String::new())?;
        let series = (0..series_count)
            .map(|_| RollingWindow::filled(capacity, 0.0))
            .collect::<ChartResult<Vec<_>>>()?;
        Ok(Self { labels, series })
    }

    /// Builds a window from existing buffers, oldest first.
    pub fn from_parts(labels: Vec<String>, series: Vec<Vec<f64>>) -> ChartResult<Self> {
        if series.is_empty() {
            return Err(ChartError::InvalidData(
                "sample window needs at least one series".to_owned(),
            ));
        }
        let labels = RollingWindow::from_vec(labels)?;
        let series = series
            .into_iter()
            .map(RollingWindow::from_vec)
            .collect::<ChartResult<Vec<_>>>()?;
        let window = Self { labels, series };
        window.check_alignment()?;
        Ok(window)
    }

    /// Shifts one `(label, value)` sample into every buffer.
    ///
    /// All checks run before the first buffer is touched, so an error leaves
    /// the window exactly as it was.
    pub fn append(
        &mut self,
        label: impl Into<String>,
        value: &SampleValue,
    ) -> ChartResult<EvictedSample> {
        self.check_alignment()?;
        value.validate(self.series.len())?;

        let label = self.labels.shift_in(label.into());
        let values = self
            .series
            .iter_mut()
            .enumerate()
            .map(|(index, series)| series.shift_in(value.value_for(index)))
            .collect();
        Ok(EvictedSample { label, values })
    }

    /// Restores the empty-label / zero-value placeholders.
    pub fn reset(&mut self) {
        self.labels.fill(String::new());
        for series in &mut self.series {
            series.fill(0.0);
        }
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.labels.capacity()
    }

    #[must_use]
    pub fn series_count(&self) -> usize {
        self.series.len()
    }

    #[must_use]
    pub fn label_window(&self) -> &RollingWindow<String> {
        &self.labels
    }

    #[must_use]
    pub fn labels(&self) -> Vec<&str> {
        self.labels.iter().map(String::as_str).collect()
    }

    #[must_use]
    pub fn series(&self, index: usize) -> Option<&RollingWindow<f64>> {
        self.series.get(index)
    }

    pub fn all_series(&self) -> impl ExactSizeIterator<Item = &RollingWindow<f64>> {
        self.series.iter()
    }

    /// Minimum and maximum over every series.
    #[must_use]
    pub fn value_range(&self) -> Option<(f64, f64)> {
        self.series
            .iter()
            .flat_map(|series| series.iter())
            .copied()
            .fold(None, |range, value| match range {
                None => Some((value, value)),
                Some((min, max)) => Some((min.min(value), max.max(value))),
            })
    }

    fn check_alignment(&self) -> ChartResult<()> {
        if self.labels.is_empty() {
            return Err(ChartError::EmptyWindow);
        }
        for series in &self.series {
            if series.len() != self.labels.len() {
                return Err(ChartError::MisalignedBuffers {
                    labels: self.labels.len(),
                    series: series.len(),
                });
            }
        }
        Ok(())
    }
}
