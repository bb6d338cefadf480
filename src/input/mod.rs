//! Input adapters that turn window-system input into zoom session events.

#[cfg(feature = "gui")]
pub mod gui;
