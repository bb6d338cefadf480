use std::sync::Arc;

use crate::core::actions::cancellation::CancelToken;
use crate::core::actions::render_frame::render_frame::{RenderFrameError, render_frame_cancelable};
use crate::core::data::iteration_cap::IterationCap;
use crate::core::data::logical_region::LogicalRegion;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::screen_extent::ScreenExtent;
use crate::core::fractals::mandelbrot::palette::Palette;

/// Snapshot of everything one frame render needs.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderRequest {
    pub extent: ScreenExtent,
    pub region: LogicalRegion,
    /// The session's cap; the palette has exactly this many colours.
    pub iteration_cap: IterationCap,
    /// The cap the escape-time evaluator actually runs with.
    pub max_iterations: u32,
    pub palette: Arc<Palette>,
}

impl RenderRequest {
    pub fn render<C: CancelToken>(&self, cancel: &C) -> Result<PixelBuffer, RenderFrameError> {
        render_frame_cancelable(
            self.extent,
            self.region,
            self.max_iterations,
            &self.palette,
            cancel,
        )
    }
}
