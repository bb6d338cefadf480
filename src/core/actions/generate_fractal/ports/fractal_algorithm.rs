use crate::core::data::screen_extent::ScreenExtent;

/// Per-pixel computation over a screen extent.
///
/// Implementations must be pure: the value for `(x, y)` may depend only on
/// the pixel and the algorithm's own immutable parameters, so pixels can be
/// computed in any order or in parallel.
pub trait FractalAlgorithm {
    type Success;

    fn extent(&self) -> ScreenExtent;

    fn compute(&self, x: u32, y: u32) -> Self::Success;
}
