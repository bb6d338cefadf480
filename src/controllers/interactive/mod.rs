//! Interactive zoom session and the background renderer behind it.
//!
//! [`ViewSession`] turns pointer events into outlines and render requests;
//! [`InteractiveController`] renders those requests off the UI thread and
//! hands finished frames to an [`InteractiveControllerPresenterPort`].

mod controller;
pub mod data;
pub mod errors;
pub mod events;
pub mod ports;
mod session;
mod view_state;

pub use controller::InteractiveController;
pub use data::frame_data::FrameData;
pub use data::render_request::RenderRequest;
pub use errors::render::RenderError;
pub use events::pointer::PointerEvent;
pub use events::render::RenderEvent;
pub use ports::presenter::InteractiveControllerPresenterPort;
pub use session::{SessionEffect, SessionError, ViewSession, ZoomRejected};
pub use view_state::ViewState;
