use crate::controllers::interactive::SessionError;
use crate::core::data::screen_extent::ScreenExtentError;

#[derive(Debug, thiserror::Error)]
pub enum GuiError {
    #[error("failed to create event loop: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),
    #[error("failed to create window: {0}")]
    Window(#[from] winit::error::OsError),
    #[error("window has no drawable area: {0}")]
    Extent(#[from] ScreenExtentError),
    #[error("failed to set up pixel surface: {0}")]
    Surface(#[from] pixels::Error),
    #[error("failed to start zoom session: {0}")]
    Session(#[from] SessionError),
}
