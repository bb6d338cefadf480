use std::marker::PhantomData;

use log::info;
use winit::{dpi::PhysicalSize, event_loop::EventLoopBuilder, window::{Window, WindowBuilder}};

use crate::controllers::interactive::{InteractiveController, ViewSession};
use crate::core::data::screen_extent::ScreenExtent;
use crate::core::fractals::mandelbrot::mandelbrot_config::MandelbrotConfig;
use crate::input::gui::{
    app::{gui_app::GuiApp, ports::presenter::GuiPresenterPort},
    commands::ports::presenter_factory::GuiPresenterFactoryPort,
    errors::GuiError,
    events::GuiEvent,
};

pub const WINDOW_TITLE: &str = "Mandelbrot!";
pub const WINDOW_WIDTH: u32 = 1280;
pub const WINDOW_HEIGHT: u32 = 984;

pub struct RunGuiCommand<F, P>
where
    P: GuiPresenterPort,
    F: GuiPresenterFactoryPort<P>,
{
    presenter_factory: F,
    config: MandelbrotConfig,
    _phantom: PhantomData<fn() -> P>,
}

impl<F, P> RunGuiCommand<F, P>
where
    P: GuiPresenterPort,
    F: GuiPresenterFactoryPort<P>,
{
    pub fn new(presenter_factory: F, config: MandelbrotConfig) -> Self {
        Self { presenter_factory, config, _phantom: PhantomData }
    }

    /// Opens the window and blocks until it is closed.
    pub fn execute(&self) -> Result<(), GuiError> {
        let event_loop = EventLoopBuilder::<GuiEvent>::with_user_event().build()?;
        let event_loop_proxy = event_loop.create_proxy();

        // pixels needs a window that outlives the surface
        let window: &'static Window = Box::leak(Box::new(
            WindowBuilder::new()
                .with_title(WINDOW_TITLE)
                .with_inner_size(PhysicalSize::new(WINDOW_WIDTH, WINDOW_HEIGHT))
                .with_resizable(false)
                .build(&event_loop)?,
        ));

        let size = window.inner_size();
        let extent = ScreenExtent::new(size.width, size.height)?;
        info!("opened {}x{} window", extent.width(), extent.height());

        let session = ViewSession::new(self.config, extent)?;
        let presenter: P = self.presenter_factory.build(window, extent, event_loop_proxy)?;
        let controller = InteractiveController::new(presenter.share_adapter());

        GuiApp::new(window, &event_loop, session, presenter, controller).run(event_loop)
    }
}
