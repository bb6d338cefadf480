use crate::core::data::screen_extent::ScreenExtent;

/// Decides which finished frames may replace what is on screen.
///
/// Frames can arrive out of order; anything older than the last shown
/// frame, or rendered for a different surface size, is dropped.
#[derive(Debug, Clone, Copy)]
pub struct FrameGate {
    extent: ScreenExtent,
    last_presented_generation: u64,
    last_failed_generation: u64,
}

impl FrameGate {
    pub fn new(extent: ScreenExtent) -> Self {
        Self {
            extent,
            last_presented_generation: 0,
            last_failed_generation: 0,
        }
    }

    #[cfg(test)]
    fn last_presented_generation(&self) -> u64 {
        self.last_presented_generation
    }

    /// Records `generation` as shown if it is newer and fits the surface.
    pub fn admit(&mut self, generation: u64, extent: ScreenExtent) -> bool {
        if generation <= self.last_presented_generation || extent != self.extent {
            return false;
        }

        self.last_presented_generation = generation;
        true
    }

    /// Records a failed render; false if it is older than the frame on screen.
    pub fn admit_error(&mut self, generation: u64) -> bool {
        if generation < self.last_presented_generation {
            return false;
        }

        self.last_failed_generation = self.last_failed_generation.max(generation);
        true
    }

    /// Whether `generation` has neither been shown nor failed yet.
    #[must_use]
    pub fn is_pending(&self, generation: u64) -> bool {
        generation > self.last_presented_generation.max(self.last_failed_generation)
    }
}
