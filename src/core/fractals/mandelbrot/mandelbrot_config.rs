use crate::core::data::iteration_cap::IterationCap;
use crate::core::data::logical_region::LogicalRegion;
use crate::core::data::screen_extent::ScreenExtent;
use crate::core::fractals::mandelbrot::errors::ConfigError;
use crate::core::fractals::mandelbrot::palette::MIN_PALETTE_SIZE;

pub const DEFAULT_MIN_ITERATIONS: u32 = 200;
pub const DEFAULT_ITERATION_INCREMENT: u32 = 50;
pub const DEFAULT_MIN_X: f64 = -2.0;
pub const DEFAULT_MAX_X: f64 = 1.25;
pub const DEFAULT_MIN_Y: f64 = -1.25;

/// Which iteration cap the escape-time evaluator runs with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EscapeCapPolicy {
    /// Use the session's current cap, which grows with every zoom.
    #[default]
    Session,
    /// Always use the configured minimum; only the palette grows.
    Fixed,
}

/// Startup constants for a zoom session. Not editable once a session exists.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MandelbrotConfig {
    pub min_iterations: u32,
    pub iteration_increment: u32,
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub escape_cap: EscapeCapPolicy,
}

impl Default for MandelbrotConfig {
    fn default() -> Self {
        Self {
            min_iterations: DEFAULT_MIN_ITERATIONS,
            iteration_increment: DEFAULT_ITERATION_INCREMENT,
            min_x: DEFAULT_MIN_X,
            max_x: DEFAULT_MAX_X,
            min_y: DEFAULT_MIN_Y,
            escape_cap: EscapeCapPolicy::default(),
        }
    }
}

impl MandelbrotConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if (self.min_iterations as usize) < MIN_PALETTE_SIZE {
            return Err(ConfigError::PaletteTooSmall {
                min_iterations: self.min_iterations,
                minimum: MIN_PALETTE_SIZE,
            });
        }

        if self.iteration_increment == 0 {
            return Err(ConfigError::ZeroIncrement);
        }

        Ok(())
    }

    /// The starting region, with `max_y` chosen so the region has the
    /// screen's aspect ratio.
    pub fn initial_region(&self, extent: ScreenExtent) -> Result<LogicalRegion, ConfigError> {
        let max_y = (self.max_x - self.min_x) * f64::from(extent.height()) / f64::from(extent.width())
            + self.min_y;

        Ok(LogicalRegion::new(self.min_x, self.min_y, self.max_x, max_y)?)
    }

    pub fn initial_cap(&self) -> Result<IterationCap, ConfigError> {
        Ok(IterationCap::new(self.min_iterations)?)
    }

    /// The cap handed to the escape-time evaluator for a view whose palette
    /// was built for `session_cap`.
    #[must_use]
    pub fn evaluation_cap(&self, session_cap: IterationCap) -> u32 {
        match self.escape_cap {
            EscapeCapPolicy::Session => session_cap.get(),
            EscapeCapPolicy::Fixed => self.min_iterations.min(session_cap.get()),
        }
    }
}
