use crate::controllers::interactive::data::frame_data::FrameData;
use crate::controllers::interactive::events::render::RenderEvent;
use crate::controllers::interactive::ports::presenter::InteractiveControllerPresenterPort;
use crate::core::data::screen_extent::ScreenExtent;
use crate::input::gui::app::ports::presenter::GuiPresenterPort;
use crate::input::gui::events::GuiEvent;
use crate::presenters::pixels::adapter::PixelsAdapter;
use crate::presenters::pixels::frame_gate::FrameGate;
use egui::Context as EguiContext;
use egui_wgpu::Renderer as EguiRenderer;
use log::{debug, warn};
use pixels::Pixels;
use pixels::SurfaceTexture;
use pixels::wgpu;
use std::sync::Arc;
use std::time::Duration;
use winit::event_loop::EventLoopProxy;
use winit::window::Window;

pub struct PixelsPresenter {
    pixels: Pixels<'static>,
    egui_renderer: EguiRenderer,
    adapter: Arc<PixelsAdapter>,
    extent: ScreenExtent,
    gate: FrameGate,
    last_error_message: Option<String>,
    last_render_duration: Option<Duration>,
}

impl GuiPresenterPort for PixelsPresenter {
    fn new(
        window: &'static Window,
        extent: ScreenExtent,
        event_loop_proxy: EventLoopProxy<GuiEvent>,
    ) -> Result<Self, pixels::Error> {
        let surface_texture = SurfaceTexture::new(extent.width(), extent.height(), window);
        let pixels = Pixels::new(extent.width(), extent.height(), surface_texture)?;

        let egui_renderer = EguiRenderer::new(
            pixels.device(),
            pixels.render_texture_format(),
            None, // depth format
            1,    // msaa samples
        );

        let mut presenter = Self {
            pixels,
            egui_renderer,
            adapter: Arc::new(PixelsAdapter::new(event_loop_proxy)),
            extent,
            gate: FrameGate::new(extent),
            last_error_message: None,
            last_render_duration: None,
        };
        presenter.draw_placeholder();

        Ok(presenter)
    }

    fn share_adapter(&self) -> Arc<dyn InteractiveControllerPresenterPort> {
        Arc::clone(&self.adapter) as Arc<dyn InteractiveControllerPresenterPort>
    }

    fn receive(&mut self) -> bool {
        let Some(event) = self.adapter.take_render_event() else {
            return false;
        };

        match event {
            RenderEvent::Frame(frame) => {
                if !self.gate.admit(frame.generation, frame.pixel_buffer.extent()) {
                    debug!("dropping stale frame {}", frame.generation);
                    return false;
                }

                self.copy_pixel_buffer_into_pixels_frame(&frame);
                self.last_render_duration = Some(frame.render_duration);
                self.last_error_message = None;
                true
            }
            RenderEvent::Error(error) => {
                if !self.gate.admit_error(error.generation) {
                    return false;
                }

                warn!("{}", error);
                self.last_error_message = Some(error.message);
                true
            }
        }
    }

    fn is_pending(&self, generation: u64) -> bool {
        self.gate.is_pending(generation)
    }

    fn last_render_duration(&self) -> Option<Duration> {
        self.last_render_duration
    }

    fn last_error_message(&self) -> Option<&str> {
        self.last_error_message.as_deref()
    }

    fn render(
        &mut self,
        egui_output: egui::FullOutput,
        egui_ctx: &EguiContext,
    ) -> Result<(), pixels::Error> {
        let extent = self.extent;

        self.pixels.render_with(|encoder, render_target, context| {
            // fractal first, then egui on top of it
            context.scaling_renderer.render(encoder, render_target);

            let clipped_primitives =
                egui_ctx.tessellate(egui_output.shapes, egui_ctx.pixels_per_point());

            let screen_descriptor = egui_wgpu::ScreenDescriptor {
                size_in_pixels: [extent.width(), extent.height()],
                pixels_per_point: egui_ctx.pixels_per_point(),
            };

            let textures_delta = egui_output.textures_delta;

            for (id, delta) in &textures_delta.set {
                self.egui_renderer
                    .update_texture(&context.device, &context.queue, *id, delta);
            }

            self.egui_renderer.update_buffers(
                &context.device,
                &context.queue,
                encoder,
                &clipped_primitives,
                &screen_descriptor,
            );

            {
                let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("egui"),
                    color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                        view: render_target,
                        resolve_target: None,
                        ops: wgpu::Operations {
                            load: wgpu::LoadOp::Load,
                            store: wgpu::StoreOp::Store,
                        },
                    })],
                    depth_stencil_attachment: None,
                    ..Default::default()
                });

                self.egui_renderer.render(
                    &mut render_pass,
                    &clipped_primitives,
                    &screen_descriptor,
                );
            }

            for id in &textures_delta.free {
                self.egui_renderer.free_texture(id);
            }

            Ok(())
        })
    }
}

impl PixelsPresenter {
    fn draw_placeholder(&mut self) {
        for pixel in self.pixels.frame_mut().chunks_exact_mut(4) {
            pixel.copy_from_slice(&[0, 0, 0, 255]);
        }
    }

    fn copy_pixel_buffer_into_pixels_frame(&mut self, frame: &FrameData) {
        // FrameGate has already checked the frame matches the surface extent
        self.pixels
            .frame_mut()
            .copy_from_slice(frame.pixel_buffer.buffer());
    }
}
