use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::data::logical_region::LogicalRegion;
use crate::core::data::screen_extent::ScreenExtent;
use crate::core::util::pixel_to_complex_coords::pixel_to_complex_coords;

pub const ESCAPE_RADIUS: f64 = 2.0;

/// Counts iterations of `z = z² + c` from `z = 0` until `|z|` exceeds
/// [`ESCAPE_RADIUS`], capped at `max_iterations - 1`.
///
/// The radius check runs before every step, so the result for a point that
/// never escapes is `max_iterations - 1` (the palette's black entry). An
/// overflowing orbit produces `inf` or `NaN`, both of which fail the `<=`
/// check and end the loop as an escape.
#[must_use]
pub fn escape_time(c: Complex, max_iterations: u32) -> u32 {
    let last = max_iterations.saturating_sub(1);
    let mut z = Complex::ZERO;
    let mut iteration = 0;

    while iteration < last && z.magnitude() <= ESCAPE_RADIUS {
        z = z * z + c;
        iteration += 1;
    }

    iteration
}

#[derive(Debug, Clone, PartialEq)]
pub struct MandelbrotAlgorithm {
    extent: ScreenExtent,
    region: LogicalRegion,
    max_iterations: u32,
}

impl MandelbrotAlgorithm {
    #[must_use]
    pub fn new(extent: ScreenExtent, region: LogicalRegion, max_iterations: u32) -> Self {
        Self {
            extent,
            region,
            max_iterations,
        }
    }
}

impl FractalAlgorithm for MandelbrotAlgorithm {
    type Success = u32;

    fn extent(&self) -> ScreenExtent {
        self.extent
    }

    fn compute(&self, x: u32, y: u32) -> u32 {
        let c = pixel_to_complex_coords(x, y, self.extent, self.region);
        escape_time(c, self.max_iterations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_origin_never_escapes() {
        for max_iterations in [1, 2, 4, 200, 1000] {
            assert_eq!(escape_time(Complex::ZERO, max_iterations), max_iterations - 1);
        }
    }

    #[test]
    fn test_three_escapes_after_one_iteration() {
        for max_iterations in [2, 3, 200, 1000] {
            assert_eq!(escape_time(Complex::new(3.0, 0.0), max_iterations), 1);
        }
    }

    #[test]
    fn test_single_iteration_cap_returns_zero() {
        assert_eq!(escape_time(Complex::new(3.0, 0.0), 1), 0);
    }

    #[test]
    fn test_zero_cap_is_treated_as_one() {
        assert_eq!(escape_time(Complex::new(0.5, 0.5), 0), 0);
    }

    #[test]
    fn test_boundary_point_on_radius_keeps_iterating() {
        // c = -2 sits on the set: 0 -> -2 -> 2 -> 2 ... and |z| == 2 never exceeds the radius
        assert_eq!(escape_time(Complex::new(-2.0, 0.0), 50), 49);
    }

    #[test]
    fn test_point_outside_escapes_quickly() {
        // c = 1: 0 -> 1 -> 2 -> 5
        assert_eq!(escape_time(Complex::new(1.0, 0.0), 100), 3);
    }

    #[test]
    fn test_overflowing_magnitude_counts_as_escape() {
        let c = Complex::new(f64::MAX, f64::MAX);

        assert_eq!(escape_time(c, 100), 1);
    }

    #[test]
    fn test_nan_orbit_counts_as_escape() {
        let c = Complex::new(f64::NAN, 0.0);

        assert_eq!(escape_time(c, 100), 1);
    }

    #[test]
    fn test_result_is_always_below_cap() {
        let samples = [
            Complex::new(-0.75, 0.1),
            Complex::new(0.25, 0.0),
            Complex::new(-1.0, 0.3),
            Complex::new(0.3, 0.5),
        ];

        for c in samples {
            assert!(escape_time(c, 64) <= 63);
        }
    }

    #[test]
    fn test_algorithm_maps_pixel_before_iterating() {
        let extent = ScreenExtent::new(4, 4).unwrap();
        let region = LogicalRegion::new(-2.0, -2.0, 2.0, 2.0).unwrap();
        let algorithm = MandelbrotAlgorithm::new(extent, region, 20);

        // pixel (2, 2) is the origin
        assert_eq!(algorithm.compute(2, 2), 19);
        // pixel (0, 0) is -2 - 2i, which escapes on the second check
        assert_eq!(algorithm.compute(0, 0), 1);
        assert_eq!(algorithm.extent(), extent);
    }
}
