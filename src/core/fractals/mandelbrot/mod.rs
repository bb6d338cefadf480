pub mod algorithm;
pub mod errors;
pub mod mandelbrot_config;
pub mod palette;
