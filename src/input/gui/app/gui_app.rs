use egui::Context;
use egui_winit::State as EguiWinitState;
use log::{debug, error, info};
use winit::{
    event::{ElementState, Event, MouseButton, WindowEvent},
    event_loop::{EventLoop, EventLoopWindowTarget},
    window::Window,
};

use crate::controllers::interactive::{
    InteractiveController, PointerEvent, RenderRequest, SessionEffect, ViewSession,
};
use crate::core::data::point::Point;
use crate::core::data::screen_rect::ScreenRect;
use crate::input::gui::app::ports::presenter::GuiPresenterPort;
use crate::input::gui::errors::GuiError;
use crate::input::gui::events::GuiEvent;

const OUTLINE_WIDTH_PIXELS: f32 = 2.0;

pub struct GuiApp<T: GuiPresenterPort> {
    window: &'static Window,
    session: ViewSession,
    presenter: T,
    controller: InteractiveController,
    latest_submitted_generation: u64,
    cursor: Point,
    outline: Option<ScreenRect>,
    status_message: Option<String>,
    redraw_pending: bool,
    egui_ctx: Context,
    egui_state: EguiWinitState,
}

impl<T: GuiPresenterPort> GuiApp<T> {
    pub fn new(
        window: &'static Window,
        event_loop: &EventLoop<GuiEvent>,
        session: ViewSession,
        presenter: T,
        controller: InteractiveController,
    ) -> Self {
        let scale_factor = window.scale_factor();
        let egui_ctx = Context::default();

        let egui_state = EguiWinitState::new(
            egui_ctx.clone(),
            egui_ctx.viewport_id(),
            event_loop,
            Some(scale_factor as f32),
            None, // max_texture_side, use default
        );

        Self {
            window,
            session,
            presenter,
            controller,
            latest_submitted_generation: 0,
            cursor: Point::new(0.0, 0.0),
            outline: None,
            status_message: None,
            redraw_pending: true,
            egui_ctx,
            egui_state,
        }
    }

    /// Drives the window until it is closed. Renders the initial view first.
    pub fn run(mut self, event_loop: EventLoop<GuiEvent>) -> Result<(), GuiError> {
        let mut failure: Option<pixels::Error> = None;

        self.submit(self.session.render_request());

        event_loop.run(|event, elwt| match event {
            Event::WindowEvent { ref event, window_id } if window_id == self.window.id() => {
                if let Err(err) = self.handle_window_event(event, elwt) {
                    error!("presenting frame failed: {}", err);
                    failure = Some(err);
                    elwt.exit();
                }
            }
            Event::UserEvent(GuiEvent::Wake) => {
                if self.presenter.receive() {
                    self.redraw_pending = true;
                }
            }
            Event::AboutToWait => {
                if self.redraw_pending {
                    self.window.request_redraw();
                }
            }
            _ => {}
        })?;

        match failure {
            Some(err) => Err(err.into()),
            None => Ok(()),
        }
    }

    fn handle_window_event(
        &mut self,
        event: &WindowEvent,
        elwt: &EventLoopWindowTarget<GuiEvent>,
    ) -> Result<(), pixels::Error> {
        let response = self.egui_state.on_window_event(self.window, event);
        if response.repaint {
            self.redraw_pending = true;
        }

        match event {
            WindowEvent::CloseRequested => {
                info!("window closed");
                elwt.exit();
            }
            WindowEvent::RedrawRequested => {
                self.redraw_pending = false;

                let mut egui_output = self.update_ui();
                self.egui_state.handle_platform_output(
                    self.window,
                    std::mem::take(&mut egui_output.platform_output),
                );

                if egui_output.viewport_output.values().any(|v| v.repaint_delay.is_zero()) {
                    self.redraw_pending = true;
                }

                self.presenter.render(egui_output, &self.egui_ctx)?;
            }
            WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                self.egui_ctx.set_pixels_per_point(*scale_factor as f32);
                self.redraw_pending = true;
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor = self
                    .session
                    .extent()
                    .bounds()
                    .clamp(Point::new(position.x, position.y));

                self.handle_pointer(PointerEvent::Drag(self.cursor));
            }
            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => match state {
                // clicks on the overlay never start a selection
                ElementState::Pressed if !response.consumed => {
                    self.handle_pointer(PointerEvent::Press(self.cursor));
                }
                ElementState::Pressed => {}
                ElementState::Released => {
                    self.handle_pointer(PointerEvent::Release(self.cursor));
                }
            },
            _ => {}
        }

        Ok(())
    }

    fn handle_pointer(&mut self, event: PointerEvent) {
        match self.session.handle(event) {
            SessionEffect::Idle => {}
            SessionEffect::DrawOutline(rect) => {
                self.outline = Some(rect);
                self.redraw_pending = true;
            }
            SessionEffect::Render(request) => {
                self.outline = None;
                self.status_message = None;
                self.submit(request);
                self.redraw_pending = true;
            }
            SessionEffect::SelectionDiscarded(err) => {
                self.outline = None;
                self.status_message = Some(format!("Selection ignored: {}", err));
                self.redraw_pending = true;
            }
        }
    }

    fn submit(&mut self, request: RenderRequest) {
        self.latest_submitted_generation = self.controller.submit_request(request.into());
        debug!("waiting on frame {}", self.latest_submitted_generation);
    }

    fn update_ui(&mut self) -> egui::FullOutput {
        let raw_input = self.egui_state.take_egui_input(self.window);

        self.egui_ctx.run(raw_input, |ctx| {
            if let Some(rect) = self.outline {
                draw_outline(ctx, rect);
            }

            egui::Window::new("Mandelbrot")
                .default_pos([10.0, 10.0])
                .default_size([260.0, 160.0])
                .show(ctx, |ui| {
                    let region = self.session.region();
                    ui.label(format!("Real: [{:.10}, {:.10}]", region.min_x(), region.max_x()));
                    ui.label(format!("Imag: [{:.10}, {:.10}]", region.min_y(), region.max_y()));
                    ui.label(format!("Iteration cap: {}", self.session.iteration_cap().get()));
                    ui.label(format!("State: {}", self.session.view_state().display_name()));

                    ui.separator();
                    if self.presenter.is_pending(self.latest_submitted_generation) {
                        ui.label(format!("Rendering frame {}...", self.latest_submitted_generation));
                    }
                    if let Some(render_duration) = self.presenter.last_render_duration() {
                        ui.label(format!("Last render: {} ms", render_duration.as_millis()));
                    }
                    if let Some(message) = &self.status_message {
                        ui.label(message);
                    }
                    if let Some(message) = self.presenter.last_error_message() {
                        ui.separator();
                        ui.colored_label(egui::Color32::LIGHT_RED, message);
                    }
                });
        })
    }
}

/// Strokes the selection in white on top of everything else.
fn draw_outline(ctx: &Context, rect: ScreenRect) {
    let pixels_per_point = ctx.pixels_per_point();
    let to_pos = |p: Point| egui::pos2(p.x as f32 / pixels_per_point, p.y as f32 / pixels_per_point);

    let painter = ctx.layer_painter(egui::LayerId::new(
        egui::Order::Foreground,
        egui::Id::new("selection_outline"),
    ));

    painter.rect_stroke(
        egui::Rect::from_two_pos(to_pos(rect.min()), to_pos(rect.max())),
        0.0,
        egui::Stroke::new(OUTLINE_WIDTH_PIXELS / pixels_per_point, egui::Color32::WHITE),
    );
}
