//! Output adapters.

pub mod pixels;
