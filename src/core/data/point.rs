/// A position in screen space, in pixels.
///
/// Pointer positions are fractional on most platforms, so both axes are
/// kept as `f64` until they are mapped into the complex plane.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}
