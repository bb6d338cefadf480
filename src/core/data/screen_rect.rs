use crate::core::data::point::Point;

/// A rectangle in screen space.
///
/// Raw selections straight from pointer input may have their corners in any
/// order; call [`ScreenRect::normalized`] before measuring one.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ScreenRect {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl ScreenRect {
    #[must_use]
    pub const fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Builds a raw rectangle from the two corners of a drag gesture.
    #[must_use]
    pub const fn from_corners(start: Point, end: Point) -> Self {
        Self::new(start.x, start.y, end.x, end.y)
    }

    #[must_use]
    pub fn normalized(&self) -> Self {
        Self {
            min_x: self.min_x.min(self.max_x),
            min_y: self.min_y.min(self.max_y),
            max_x: self.min_x.max(self.max_x),
            max_y: self.min_y.max(self.max_y),
        }
    }

    #[must_use]
    pub fn min(&self) -> Point {
        Point::new(self.min_x, self.min_y)
    }

    #[must_use]
    pub fn max(&self) -> Point {
        Point::new(self.max_x, self.max_y)
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// The closest point to `point` inside this (normalized) rectangle.
    #[must_use]
    pub fn clamp(&self, point: Point) -> Point {
        let rect = self.normalized();
        Point::new(
            point.x.clamp(rect.min_x, rect.max_x),
            point.y.clamp(rect.min_y, rect.max_y),
        )
    }
}
