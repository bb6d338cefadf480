//! Escape-time Mandelbrot renderer with drag-to-zoom.
//!
//! The core maps screen pixels into a region of the complex plane, colours
//! each pixel by its escape time and narrows the region whenever the user
//! drags out a selection. With the `gui` feature the crate also ships a
//! winit/pixels/egui front end.

mod controllers;
mod core;
#[cfg(feature = "gui")]
mod input;
#[cfg(feature = "gui")]
mod presenters;

pub use controllers::interactive::{
    FrameData, InteractiveController, InteractiveControllerPresenterPort, PointerEvent,
    RenderError, RenderEvent, RenderRequest, SessionEffect, SessionError, ViewSession, ViewState,
    ZoomRejected,
};
pub use crate::core::actions::adjust_region::adjust_region::{
    AdjustRegionError, adjust_region, correct_aspect_ratio,
};
pub use crate::core::actions::cancellation::{CancelToken, Cancelled, NeverCancel};
pub use crate::core::actions::generate_fractal::generate_fractal::generate_fractal;
pub use crate::core::actions::generate_fractal::generate_fractal_parallel_rayon::generate_fractal_parallel_rayon_cancelable;
pub use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
pub use crate::core::actions::render_frame::render_frame::{
    RenderFrameError, render_frame, render_frame_cancelable,
};
pub use crate::core::data::colour::Colour;
pub use crate::core::data::complex::Complex;
pub use crate::core::data::iteration_cap::{IterationCap, IterationCapError};
pub use crate::core::data::logical_region::{LogicalRegion, LogicalRegionError};
pub use crate::core::data::pixel_buffer::{BYTES_PER_PIXEL, PixelBuffer, PixelBufferError};
pub use crate::core::data::point::Point;
pub use crate::core::data::screen_extent::{ScreenExtent, ScreenExtentError};
pub use crate::core::data::screen_rect::ScreenRect;
pub use crate::core::fractals::mandelbrot::algorithm::{MandelbrotAlgorithm, escape_time};
pub use crate::core::fractals::mandelbrot::errors::ConfigError;
pub use crate::core::fractals::mandelbrot::mandelbrot_config::{EscapeCapPolicy, MandelbrotConfig};
pub use crate::core::fractals::mandelbrot::palette::{MIN_PALETTE_SIZE, Palette, PaletteError};
pub use crate::core::util::pixel_to_complex_coords::pixel_to_complex_coords;

#[cfg(feature = "gui")]
pub use input::gui::commands::run_gui::RunGuiCommand;
#[cfg(feature = "gui")]
pub use input::gui::errors::GuiError;
#[cfg(feature = "gui")]
pub use presenters::pixels::factory::PixelsPresenterFactory;
