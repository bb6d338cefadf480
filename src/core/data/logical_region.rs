use crate::core::data::complex::Complex;

#[derive(Debug, Copy, Clone, PartialEq, thiserror::Error)]
pub enum LogicalRegionError {
    #[error("logical region bounds must be finite: ({min_x}, {min_y}) to ({max_x}, {max_y})")]
    NonFinite {
        min_x: f64,
        min_y: f64,
        max_x: f64,
        max_y: f64,
    },
    #[error("logical region size must be positive: {width}x{height}")]
    InvalidSize { width: f64, height: f64 },
}

/// The rectangle of the complex plane currently mapped onto the screen.
///
/// Always satisfies `min_x < max_x` and `min_y < max_y`. Zooming replaces the
/// region with a new value rather than mutating it.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct LogicalRegion {
    min_x: f64,
    min_y: f64,
    max_x: f64,
    max_y: f64,
}

impl LogicalRegion {
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Result<Self, LogicalRegionError> {
        if !(min_x.is_finite() && min_y.is_finite() && max_x.is_finite() && max_y.is_finite()) {
            return Err(LogicalRegionError::NonFinite {
                min_x,
                min_y,
                max_x,
                max_y,
            });
        }

        let width = max_x - min_x;
        let height = max_y - min_y;

        if width <= 0.0 || height <= 0.0 {
            return Err(LogicalRegionError::InvalidSize { width, height });
        }

        Ok(Self {
            min_x,
            min_y,
            max_x,
            max_y,
        })
    }

    #[must_use]
    pub fn min_x(&self) -> f64 {
        self.min_x
    }

    #[must_use]
    pub fn min_y(&self) -> f64 {
        self.min_y
    }

    #[must_use]
    pub fn max_x(&self) -> f64 {
        self.max_x
    }

    #[must_use]
    pub fn max_y(&self) -> f64 {
        self.max_y
    }

    #[must_use]
    pub fn min(&self) -> Complex {
        Complex::new(self.min_x, self.min_y)
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logical_region_new_valid() {
        let region = LogicalRegion::new(-2.0, -1.25, 1.25, 1.0).unwrap();

        assert_eq!(region.min_x(), -2.0);
        assert_eq!(region.min_y(), -1.25);
        assert_eq!(region.max_x(), 1.25);
        assert_eq!(region.max_y(), 1.0);
        assert_eq!(region.min(), Complex::new(-2.0, -1.25));
    }

    #[test]
    fn test_logical_region_dimensions() {
        let region = LogicalRegion::new(-2.5, -1.0, 1.0, 1.0).unwrap();

        assert_eq!(region.width(), 3.5);
        assert_eq!(region.height(), 2.0);
    }

    #[test]
    fn test_logical_region_dimensions_must_be_positive() {
        assert_eq!(
            LogicalRegion::new(0.0, 0.0, 0.0, 100.0),
            Err(LogicalRegionError::InvalidSize {
                width: 0.0,
                height: 100.0
            })
        );
        assert_eq!(
            LogicalRegion::new(0.0, 0.0, -100.0, 10.0),
            Err(LogicalRegionError::InvalidSize {
                width: -100.0,
                height: 10.0
            })
        );
        assert_eq!(
            LogicalRegion::new(0.0, 0.0, 100.0, 0.0),
            Err(LogicalRegionError::InvalidSize {
                width: 100.0,
                height: 0.0
            })
        );
        assert_eq!(
            LogicalRegion::new(2.0, 2.0, -2.0, -2.0),
            Err(LogicalRegionError::InvalidSize {
                width: -4.0,
                height: -4.0
            })
        );
    }

    #[test]
    fn test_logical_region_rejects_non_finite_bounds() {
        assert!(matches!(
            LogicalRegion::new(f64::NAN, 0.0, 1.0, 1.0),
            Err(LogicalRegionError::NonFinite { .. })
        ));
        assert!(matches!(
            LogicalRegion::new(0.0, 0.0, f64::INFINITY, 1.0),
            Err(LogicalRegionError::NonFinite { .. })
        ));
    }
}
