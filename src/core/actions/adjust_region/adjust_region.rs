use crate::core::data::logical_region::{LogicalRegion, LogicalRegionError};
use crate::core::data::screen_rect::ScreenRect;

#[derive(Debug, Copy, Clone, PartialEq, thiserror::Error)]
pub enum AdjustRegionError {
    #[error("selection has no area: {width}x{height}")]
    DegenerateSelection { width: f64, height: f64 },
    #[error("screen has no area: {width}x{height}")]
    DegenerateScreen { width: f64, height: f64 },
    #[error("target aspect ratio must be positive and finite: {0}")]
    InvalidAspectRatio(f64),
    #[error("zoomed region is not representable: {0}")]
    Region(#[from] LogicalRegionError),
}

fn has_area(width: f64, height: f64) -> bool {
    width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0
}

/// Normalizes a raw selection and grows it on one axis until its
/// width-to-height ratio equals `ratio`.
///
/// A selection wider than the target gains height; otherwise it gains width.
/// The growth is split evenly between both sides, so the centre of the
/// expanded axis does not move.
pub fn correct_aspect_ratio(selection: ScreenRect, ratio: f64) -> Result<ScreenRect, AdjustRegionError> {
    if !(ratio.is_finite() && ratio > 0.0) {
        return Err(AdjustRegionError::InvalidAspectRatio(ratio));
    }

    let mut rect = selection.normalized();
    let width = rect.width();
    let height = rect.height();

    if !has_area(width, height) {
        return Err(AdjustRegionError::DegenerateSelection { width, height });
    }

    if width / height > ratio {
        let increase = width / ratio - height;
        rect.min_y -= increase / 2.0;
        rect.max_y += increase / 2.0;
    } else {
        let increase = height * ratio - width;
        rect.min_x -= increase / 2.0;
        rect.max_x += increase / 2.0;
    }

    Ok(rect)
}

/// Turns a drag selection on `screen` into the next logical region.
///
/// The selection is aspect-corrected with [`correct_aspect_ratio`] and each
/// of its bounds is mapped linearly into `current`, so every zoom is
/// relative to the region the user was looking at.
pub fn adjust_region(
    selection: ScreenRect,
    screen: ScreenRect,
    ratio: f64,
    current: LogicalRegion,
) -> Result<LogicalRegion, AdjustRegionError> {
    let screen_width = screen.width();
    let screen_height = screen.height();

    if !has_area(screen_width, screen_height) {
        return Err(AdjustRegionError::DegenerateScreen {
            width: screen_width,
            height: screen_height,
        });
    }

    let rect = correct_aspect_ratio(selection, ratio)?;

    let to_logical_x = |x: f64| current.min_x() + x / screen_width * current.width();
    let to_logical_y = |y: f64| current.min_y() + y / screen_height * current.height();

    Ok(LogicalRegion::new(
        to_logical_x(rect.min_x),
        to_logical_y(rect.min_y),
        to_logical_x(rect.max_x),
        to_logical_y(rect.max_y),
    )?)
}
