use crate::core::data::complex::Complex;
use crate::core::data::logical_region::LogicalRegion;
use crate::core::data::screen_extent::ScreenExtent;

/// Maps the pixel at `(x, y)` to its point in the complex plane.
///
/// Each pixel spans `region.width() / screen width` horizontally and
/// `region.height() / screen height` vertically, so pixel `(0, 0)` lands on
/// `region.min()` and the far edge of the screen is never reached. Row 0 maps
/// to `min_y`; the vertical axis is not flipped here.
#[must_use]
pub fn pixel_to_complex_coords(x: u32, y: u32, extent: ScreenExtent, region: LogicalRegion) -> Complex {
    let dx = region.width() / f64::from(extent.width());
    let dy = region.height() / f64::from(extent.height());

    Complex {
        real: region.min_x() + f64::from(x) * dx,
        imag: region.min_y() + f64::from(y) * dy,
    }
}
