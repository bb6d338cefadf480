//! Presents rendered frames through a `pixels` surface with an egui overlay.

pub mod adapter;
pub mod factory;
pub mod frame_gate;
pub mod presenter;
