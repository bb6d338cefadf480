use std::sync::Arc;
use std::time::Duration;

use egui::Context as EguiContext;
use winit::{event_loop::EventLoopProxy, window::Window};

use crate::controllers::interactive::ports::presenter::InteractiveControllerPresenterPort;
use crate::core::data::screen_extent::ScreenExtent;
use crate::input::gui::events::GuiEvent;

pub trait GuiPresenterPort: Sized {
    fn new(
        window: &'static Window,
        extent: ScreenExtent,
        event_loop_proxy: EventLoopProxy<GuiEvent>,
    ) -> Result<Self, pixels::Error>;

    /// The sink the render worker publishes into.
    fn share_adapter(&self) -> Arc<dyn InteractiveControllerPresenterPort>;

    /// Pulls the newest render event in; true if the screen needs a redraw.
    fn receive(&mut self) -> bool;

    /// True until `generation` has been shown or has failed.
    fn is_pending(&self, generation: u64) -> bool;
    fn last_render_duration(&self) -> Option<Duration>;
    fn last_error_message(&self) -> Option<&str>;

    fn render(&mut self, egui_output: egui::FullOutput, egui_ctx: &EguiContext) -> Result<(), pixels::Error>;
}
