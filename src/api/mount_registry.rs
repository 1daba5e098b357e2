use indexmap::IndexMap;
use tracing::{debug, warn};

use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};
use crate::render::Renderer;

use super::{ChartConfig, ChartHandle};

/// Display surfaces that charts can be mounted on, keyed by mount id.
///
/// The registry only describes surfaces; it holds no chart state, so any
/// number of charts can be created against the same mount.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MountRegistry {
    surfaces: IndexMap<String, Viewport>,
}

impl MountRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers (or resizes) a surface.
    pub fn register(&mut self, mount_id: impl Into<String>, viewport: Viewport) -> ChartResult<()> {
        let mount_id = mount_id.into();
        if mount_id.trim().is_empty() {
            return Err(ChartError::InvalidData(
                "mount id must not be empty".to_owned(),
            ));
        }
        if !viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }

        match self.surfaces.insert(mount_id.clone(), viewport) {
            Some(previous) => warn!(
                mount_id = %mount_id,
                previous_width = previous.width,
                previous_height = previous.height,
                width = viewport.width,
                height = viewport.height,
                "replaced mounted surface"
            ),
            None => debug!(
                mount_id = %mount_id,
                width = viewport.width,
                height = viewport.height,
                "registered surface"
            ),
        }
        Ok(())
    }

    /// Removes a surface, returning its viewport when it existed.
    pub fn unregister(&mut self, mount_id: &str) -> Option<Viewport> {
        let removed = self.surfaces.shift_remove(mount_id);
        if removed.is_some() {
            debug!(mount_id, "unregistered surface");
        }
        removed
    }

    #[must_use]
    pub fn viewport(&self, mount_id: &str) -> Option<Viewport> {
        self.surfaces.get(mount_id).copied()
    }

    #[must_use]
    pub fn contains(&self, mount_id: &str) -> bool {
        self.surfaces.contains_key(mount_id)
    }

    /// Mount ids in registration order.
    pub fn mount_ids(&self) -> impl Iterator<Item = &str> {
        self.surfaces.keys().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.surfaces.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.surfaces.is_empty()
    }

    /// Creates a titled line chart on `mount_id` with optional value hints.
    pub fn create_chart<R: Renderer>(
        &self,
        mount_id: &str,
        title: &str,
        low: Option<f64>,
        high: Option<f64>,
        renderer: R,
    ) -> ChartResult<ChartHandle<R>> {
        self.create_with_config(mount_id, ChartConfig::line(title, low, high), renderer)
    }

    /// Creates an axis-free sparkline on `mount_id`.
    pub fn create_sparkline<R: Renderer>(
        &self,
        mount_id: &str,
        renderer: R,
    ) -> ChartResult<ChartHandle<R>> {
        self.create_with_config(mount_id, ChartConfig::sparkline(), renderer)
    }

    /// Creates a chart from an arbitrary config.
    ///
    /// Fails with [`ChartError::MountNotFound`] before allocating anything when
    /// the mount is unknown.
    pub fn create_with_config<R: Renderer>(
        &self,
        mount_id: &str,
        config: ChartConfig,
        renderer: R,
    ) -> ChartResult<ChartHandle<R>> {
        let viewport = self
            .viewport(mount_id)
            .ok_or_else(|| ChartError::MountNotFound(mount_id.to_owned()))?;
        ChartHandle::new(mount_id, viewport, config, renderer)
    }
}
