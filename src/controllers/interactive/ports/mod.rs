//! Port definitions for the interactive controller.
//!
//! Contains the traits that connect the controller to the presentation
//! layer without depending on any windowing crate.

pub mod presenter;
