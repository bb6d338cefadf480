use crate::core::data::colour::Colour;
use crate::core::data::screen_extent::ScreenExtent;

pub const BYTES_PER_PIXEL: usize = 4;

fn extent_to_buffer_size(extent: ScreenExtent) -> usize {
    extent.pixel_count() * BYTES_PER_PIXEL
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PixelBufferError {
    #[error("screen extent needs {expected} bytes but buffer holds {actual}")]
    BoundsMismatch { expected: usize, actual: usize },
}

pub type PixelBufferData = Vec<u8>;

/// Row-major RGBA pixels covering a whole screen extent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    extent: ScreenExtent,
    buffer: PixelBufferData,
}

impl PixelBuffer {
    pub fn from_data(extent: ScreenExtent, buffer: PixelBufferData) -> Result<Self, PixelBufferError> {
        let expected = extent_to_buffer_size(extent);

        if expected != buffer.len() {
            return Err(PixelBufferError::BoundsMismatch {
                expected,
                actual: buffer.len(),
            });
        }

        Ok(Self { extent, buffer })
    }

    #[must_use]
    pub fn extent(&self) -> ScreenExtent {
        self.extent
    }

    #[must_use]
    pub fn buffer(&self) -> &PixelBufferData {
        &self.buffer
    }

    /// Colour at `(x, y)`, or `None` outside the extent.
    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> Option<Colour> {
        if x >= self.extent.width() || y >= self.extent.height() {
            return None;
        }

        let index = (y as usize * self.extent.width() as usize + x as usize) * BYTES_PER_PIXEL;
        let rgba = &self.buffer[index..index + BYTES_PER_PIXEL];

        Some(Colour {
            r: rgba[0],
            g: rgba[1],
            b: rgba[2],
            a: rgba[3],
        })
    }
}
