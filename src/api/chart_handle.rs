use tracing::{debug, trace, warn};

use crate::core::{RollingWindow, SampleValue, SampleWindow, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::render::{RenderFrame, Renderer};

use super::frame_builder::build_frame;
use super::{ChartConfig, ChartSnapshot};

/// A chart mounted on one display surface.
///
/// The handle exclusively owns its sample window and renderer. Every
/// mutation finishes with a redraw, so the renderer only ever sees buffers of
/// the configured capacity.
pub struct ChartHandle<R: Renderer> {
    mount_id: String,
    viewport: Viewport,
    config: ChartConfig,
    window: SampleWindow,
    renderer: R,
    redraw_count: u64,
    last_frame: Option<RenderFrame>,
}

impl<R: Renderer> ChartHandle<R> {
    /// Validates `config`, fills a fresh window with placeholders and draws
    /// the initial frame.
    pub fn new(
        mount_id: impl Into<String>,
        viewport: Viewport,
        config: ChartConfig,
        renderer: R,
    ) -> ChartResult<Self> {
        if !viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        config.validate()?;
        let window = SampleWindow::new(config.capacity, config.series.len())?;

        let mut handle = Self {
            mount_id: mount_id.into(),
            viewport,
            config,
            window,
            renderer,
            redraw_count: 0,
            last_frame: None,
        };
        debug!(
            mount_id = %handle.mount_id,
            kind = ?handle.config.kind,
            capacity = handle.config.capacity,
            series = handle.window.series_count(),
            "created chart"
        );
        handle.redraw()?;
        Ok(handle)
    }

    /// Shifts one sample into the rolling window and redraws.
    ///
    /// The oldest label and the oldest value of every series are discarded.
    /// A rejected sample (bad value count, non-finite value, misaligned
    /// buffers) leaves the window untouched and skips the redraw. Once the
    /// sample is accepted the window stays updated; a renderer failure after
    /// that point is reported as [`ChartError::RedrawFailed`].
    pub fn append_sample(
        &mut self,
        label: impl Into<String>,
        value: impl Into<SampleValue>,
    ) -> ChartResult<()> {
        self.shift_in(label.into(), value.into())?;
        self.redraw_after_update()
    }

    /// Appends samples in order and redraws once at the end.
    ///
    /// Stops at the first invalid sample; samples before it stay applied and
    /// are drawn before the rejection is returned. The rejection wins over a
    /// redraw failure, which is then only logged.
    pub fn append_samples<L, V, I>(&mut self, samples: I) -> ChartResult<()>
    where
        L: Into<String>,
        V: Into<SampleValue>,
        I: IntoIterator<Item = (L, V)>,
    {
        let mut applied = 0usize;
        let mut outcome = Ok(());
        for (label, value) in samples {
            if let Err(err) = self.shift_in(label.into(), value.into()) {
                outcome = Err(err);
                break;
            }
            applied += 1;
        }
        if applied == 0 {
            return outcome;
        }
        let redrawn = self.redraw_after_update();
        match (outcome, redrawn) {
            (Err(rejected), Err(redraw_err)) => {
                warn!(
                    mount_id = %self.mount_id,
                    error = %redraw_err,
                    "redraw failed after a rejected batch sample"
                );
                Err(rejected)
            }
            (Err(rejected), Ok(())) => Err(rejected),
            (Ok(()), redrawn) => redrawn,
        }
    }

    /// Rebuilds the frame from the current buffers and hands it to the renderer.
    pub fn redraw(&mut self) -> ChartResult<()> {
        let frame = build_frame(&self.config, &self.window, self.viewport)?;
        self.renderer.render(&frame)?;
        self.redraw_count += 1;
        trace!(
            mount_id = %self.mount_id,
            redraw_count = self.redraw_count,
            lines = frame.lines.len(),
            texts = frame.texts.len(),
            "redraw chart"
        );
        self.last_frame = Some(frame);
        Ok(())
    }

    /// Restores placeholder labels and zero values, then redraws.
    pub fn reset(&mut self) -> ChartResult<()> {
        self.window.reset();
        debug!(mount_id = %self.mount_id, "reset chart window");
        self.redraw_after_update()
    }

    /// Replaces the value-axis hints and redraws.
    pub fn set_bounds(&mut self, low: Option<f64>, high: Option<f64>) -> ChartResult<()> {
        let bounds = super::ValueBounds::new(low, high);
        bounds.validate()?;
        self.config.bounds = bounds;
        self.redraw_after_update()
    }

    /// Moves the chart to a resized surface and redraws.
    pub fn resize(&mut self, viewport: Viewport) -> ChartResult<()> {
        if !viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        self.viewport = viewport;
        self.redraw_after_update()
    }

    #[must_use]
    pub fn mount_id(&self) -> &str {
        &self.mount_id
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    #[must_use]
    pub fn window(&self) -> &SampleWindow {
        &self.window
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.window.capacity()
    }

    #[must_use]
    pub fn labels(&self) -> Vec<&str> {
        self.window.labels()
    }

    /// Values of series `index`, oldest first.
    #[must_use]
    pub fn series_values(&self, index: usize) -> Option<Vec<f64>> {
        self.window.series(index).map(RollingWindow::to_vec)
    }

    #[must_use]
    pub fn redraw_count(&self) -> u64 {
        self.redraw_count
    }

    #[must_use]
    pub fn last_frame(&self) -> Option<&RenderFrame> {
        self.last_frame.as_ref()
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn snapshot(&self) -> ChartSnapshot {
        ChartSnapshot {
            mount_id: self.mount_id.clone(),
            kind: self.config.kind,
            title: self.config.title.clone(),
            labels: self.window.label_window().to_vec(),
            series: self.window.all_series().map(RollingWindow::to_vec).collect(),
        }
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    fn redraw_after_update(&mut self) -> ChartResult<()> {
        self.redraw()
            .map_err(|err| ChartError::RedrawFailed(Box::new(err)))
    }

    fn shift_in(&mut self, label: String, value: SampleValue) -> ChartResult<()> {
        let evicted = self.window.append(label, &value)?;
        trace!(
            mount_id = %self.mount_id,
            newest = ?self.window.label_window().last(),
            evicted_label = %evicted.label,
            evicted_values = ?evicted.values.as_slice(),
            "append sample"
        );
        Ok(())
    }
}
