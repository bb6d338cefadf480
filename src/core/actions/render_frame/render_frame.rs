use crate::core::actions::cancellation::{CancelToken, Cancelled, NeverCancel};
use crate::core::actions::generate_fractal::generate_fractal_parallel_rayon::generate_fractal_parallel_rayon_cancelable;
use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::{
    GeneratePixelBufferError, generate_pixel_buffer_cancelable,
};
use crate::core::data::logical_region::LogicalRegion;
use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};
use crate::core::data::screen_extent::ScreenExtent;
use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;
use crate::core::fractals::mandelbrot::palette::{Palette, PaletteError};

#[derive(Debug, thiserror::Error)]
pub enum RenderFrameError {
    #[error(transparent)]
    Cancelled(#[from] Cancelled),
    #[error("palette of {palette_len} colours cannot cover an iteration cap of {max_iterations}")]
    PaletteTooShort { palette_len: usize, max_iterations: u32 },
    #[error("colour lookup failed: {0}")]
    Palette(#[from] PaletteError),
    #[error("pixel buffer error: {0}")]
    PixelBuffer(#[from] PixelBufferError),
}

impl From<GeneratePixelBufferError<PaletteError>> for RenderFrameError {
    fn from(err: GeneratePixelBufferError<PaletteError>) -> Self {
        match err {
            GeneratePixelBufferError::Cancelled(c) => Self::Cancelled(c),
            GeneratePixelBufferError::ColourMap(e) => Self::Palette(e),
            GeneratePixelBufferError::PixelBuffer(e) => Self::PixelBuffer(e),
        }
    }
}

/// Renders one complete frame of `region` onto `extent`.
///
/// Every pixel is mapped into the complex plane, evaluated with
/// `max_iterations` and coloured from `palette`. Identical inputs always
/// produce identical buffers.
pub fn render_frame(
    extent: ScreenExtent,
    region: LogicalRegion,
    max_iterations: u32,
    palette: &Palette,
) -> Result<PixelBuffer, RenderFrameError> {
    render_frame_cancelable(extent, region, max_iterations, palette, &NeverCancel)
}

/// Like [`render_frame`], but abandons the frame once `cancel` fires.
pub fn render_frame_cancelable<C: CancelToken>(
    extent: ScreenExtent,
    region: LogicalRegion,
    max_iterations: u32,
    palette: &Palette,
    cancel: &C,
) -> Result<PixelBuffer, RenderFrameError> {
    // escape times run up to max_iterations - 1
    if palette.len() < max_iterations as usize {
        return Err(RenderFrameError::PaletteTooShort {
            palette_len: palette.len(),
            max_iterations,
        });
    }

    let algorithm = MandelbrotAlgorithm::new(extent, region, max_iterations);
    let escape_times = generate_fractal_parallel_rayon_cancelable(&algorithm, cancel)?;

    if cancel.is_cancelled() {
        return Err(RenderFrameError::Cancelled(Cancelled));
    }

    Ok(generate_pixel_buffer_cancelable(escape_times, palette, extent, cancel)?)
}
