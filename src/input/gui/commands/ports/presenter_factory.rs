use winit::{event_loop::EventLoopProxy, window::Window};

use crate::core::data::screen_extent::ScreenExtent;
use crate::input::gui::{app::ports::presenter::GuiPresenterPort, events::GuiEvent};

pub trait GuiPresenterFactoryPort<T: GuiPresenterPort> {
    fn build(
        &self,
        window: &'static Window,
        extent: ScreenExtent,
        event_loop_proxy: EventLoopProxy<GuiEvent>,
    ) -> Result<T, pixels::Error>;
}
