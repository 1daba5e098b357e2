mod frame;
mod null_renderer;
mod primitives;

pub use frame::RenderFrame;
pub use null_renderer::NullRenderer;
pub use primitives::{Color, LinePrimitive, RectPrimitive, TextHAlign, TextPrimitive};

use crate::error::ChartResult;

/// Contract implemented by any drawing backend.
///
/// Backends receive a fully materialized `RenderFrame`, so drawing code stays
/// isolated from window bookkeeping and chart configuration.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()>;
}

impl<R: Renderer + ?Sized> Renderer for Box<R> {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        (**self).render(frame)
    }
}
