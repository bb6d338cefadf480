//! Windowed front end: winit for the window and input, pixels for the
//! framebuffer, egui for the selection outline and status overlay.

pub mod app;
pub mod commands;
pub mod errors;
pub mod events;
