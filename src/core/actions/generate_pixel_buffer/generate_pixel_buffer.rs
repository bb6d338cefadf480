use crate::core::actions::cancellation::{CANCEL_CHECK_INTERVAL_PIXELS, CancelToken, Cancelled};
use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::pixel_buffer::{BYTES_PER_PIXEL, PixelBuffer, PixelBufferData, PixelBufferError};
use crate::core::data::screen_extent::ScreenExtent;
use std::error::Error;

/// Error type for cancelable pixel buffer generation.
///
/// Keeps cancellation apart from real failures so callers can drop a
/// superseded render without reporting it.
#[derive(Debug, thiserror::Error)]
pub enum GeneratePixelBufferError<E: Error + 'static> {
    #[error(transparent)]
    Cancelled(#[from] Cancelled),
    #[error("colour map error: {0}")]
    ColourMap(#[source] E),
    #[error("pixel buffer error: {0}")]
    PixelBuffer(#[from] PixelBufferError),
}

/// Colours row-major `input` values into an RGBA buffer for `extent`.
///
/// Streams bytes into a buffer preallocated to the full frame and checks
/// `cancel` every [`CANCEL_CHECK_INTERVAL_PIXELS`] values.
pub fn generate_pixel_buffer_cancelable<CMap, C>(
    input: Vec<CMap::T>,
    mapper: &CMap,
    extent: ScreenExtent,
    cancel: &C,
) -> Result<PixelBuffer, GeneratePixelBufferError<CMap::Failure>>
where
    CMap: ColourMap,
    C: CancelToken,
{
    let mut buffer: PixelBufferData = Vec::with_capacity(extent.pixel_count() * BYTES_PER_PIXEL);

    for (i, value) in input.into_iter().enumerate() {
        if i % CANCEL_CHECK_INTERVAL_PIXELS == 0 && cancel.is_cancelled() {
            return Err(GeneratePixelBufferError::Cancelled(Cancelled));
        }

        let colour = mapper
            .map(value)
            .map_err(GeneratePixelBufferError::ColourMap)?;

        buffer.extend_from_slice(&colour.to_rgba());
    }

    Ok(PixelBuffer::from_data(extent, buffer)?)
}
