use crate::core::data::screen_rect::ScreenRect;

#[derive(Debug, Copy, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScreenExtentError {
    #[error("screen extent must be at least one pixel in each direction: {width}x{height}")]
    InvalidSize { width: u32, height: u32 },
}

/// Size of the render target in pixels.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ScreenExtent {
    width: u32,
    height: u32,
}

impl ScreenExtent {
    pub fn new(width: u32, height: u32) -> Result<Self, ScreenExtentError> {
        if width == 0 || height == 0 {
            return Err(ScreenExtentError::InvalidSize { width, height });
        }

        Ok(Self { width, height })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Width-to-height ratio of the screen.
    #[must_use]
    pub fn aspect_ratio(&self) -> f64 {
        f64::from(self.width) / f64::from(self.height)
    }

    /// The screen as a rectangle anchored at the origin.
    #[must_use]
    pub fn bounds(&self) -> ScreenRect {
        ScreenRect::new(0.0, 0.0, f64::from(self.width), f64::from(self.height))
    }
}
