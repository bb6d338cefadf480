/// Custom user events for the GUI event loop.
#[derive(Debug, Clone)]
pub enum GuiEvent {
    /// A render event may be waiting in the presenter.
    ///
    /// The handler still has to ask the presenter whether anything new
    /// arrived before requesting a redraw.
    Wake,
}
