use std::num::NonZeroU32;

#[derive(Debug, Copy, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IterationCapError {
    #[error("iteration cap must be greater than zero")]
    Zero,
}

/// Upper bound on escape-time iterations for one view.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct IterationCap(NonZeroU32);

impl IterationCap {
    pub fn new(value: u32) -> Result<Self, IterationCapError> {
        NonZeroU32::new(value)
            .map(Self)
            .ok_or(IterationCapError::Zero)
    }

    #[must_use]
    pub fn get(self) -> u32 {
        self.0.get()
    }

    /// Returns the cap raised by `increment`, saturating at `u32::MAX`.
    #[must_use]
    pub fn incremented(self, increment: u32) -> Self {
        Self(self.0.saturating_add(increment))
    }
}
