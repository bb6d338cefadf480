use std::sync::Arc;

use log::{debug, info, warn};

use crate::controllers::interactive::data::render_request::RenderRequest;
use crate::controllers::interactive::events::pointer::PointerEvent;
use crate::controllers::interactive::view_state::ViewState;
use crate::core::actions::adjust_region::adjust_region::{AdjustRegionError, adjust_region};
use crate::core::data::iteration_cap::IterationCap;
use crate::core::data::logical_region::LogicalRegion;
use crate::core::data::point::Point;
use crate::core::data::screen_extent::ScreenExtent;
use crate::core::data::screen_rect::ScreenRect;
use crate::core::fractals::mandelbrot::errors::ConfigError;
use crate::core::fractals::mandelbrot::mandelbrot_config::MandelbrotConfig;
use crate::core::fractals::mandelbrot::palette::{Palette, PaletteError};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SessionError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("cannot build palette: {0}")]
    Palette(#[from] PaletteError),
}

/// Why a finished drag did not zoom the view.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ZoomRejected {
    #[error(transparent)]
    Selection(#[from] AdjustRegionError),
    #[error(transparent)]
    Palette(#[from] PaletteError),
}

/// What the caller has to do after feeding the session a pointer event.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEffect {
    Idle,
    /// Draw the in-progress selection between these corners.
    DrawOutline(ScreenRect),
    /// The view zoomed; render this request and present the result.
    Render(RenderRequest),
    /// The gesture ended without a usable selection; nothing changed.
    SelectionDiscarded(ZoomRejected),
}

/// The interactive state of one zoom session: gesture state, current
/// region, iteration cap and the palette built for that cap.
///
/// Must be driven by a single ordered stream of pointer events.
#[derive(Debug, Clone)]
pub struct ViewSession {
    config: MandelbrotConfig,
    extent: ScreenExtent,
    view_state: ViewState,
    region: LogicalRegion,
    iteration_cap: IterationCap,
    palette: Arc<Palette>,
}

impl ViewSession {
    pub fn new(config: MandelbrotConfig, extent: ScreenExtent) -> Result<Self, SessionError> {
        config.validate()?;

        let region = config.initial_region(extent)?;
        let iteration_cap = config.initial_cap()?;
        let palette = Arc::new(Palette::build(iteration_cap.get() as usize)?);

        Ok(Self {
            config,
            extent,
            view_state: ViewState::default(),
            region,
            iteration_cap,
            palette,
        })
    }

    #[must_use]
    pub fn view_state(&self) -> ViewState {
        self.view_state
    }

    #[must_use]
    pub fn region(&self) -> LogicalRegion {
        self.region
    }

    #[must_use]
    pub fn iteration_cap(&self) -> IterationCap {
        self.iteration_cap
    }

    #[must_use]
    pub fn palette(&self) -> &Arc<Palette> {
        &self.palette
    }

    #[must_use]
    pub fn extent(&self) -> ScreenExtent {
        self.extent
    }

    /// The request that renders the current view.
    #[must_use]
    pub fn render_request(&self) -> RenderRequest {
        RenderRequest {
            extent: self.extent,
            region: self.region,
            iteration_cap: self.iteration_cap,
            max_iterations: self.config.evaluation_cap(self.iteration_cap),
            palette: Arc::clone(&self.palette),
        }
    }

    pub fn handle(&mut self, event: PointerEvent) -> SessionEffect {
        match (self.view_state, event) {
            (ViewState::Viewing, PointerEvent::Press(start)) => {
                debug!("selection started at ({}, {})", start.x, start.y);
                self.view_state = ViewState::SelectingRegion { start };
                SessionEffect::Idle
            }
            (ViewState::Viewing, PointerEvent::Drag(_) | PointerEvent::Release(_)) => SessionEffect::Idle,
            (ViewState::SelectingRegion { start }, PointerEvent::Press(current) | PointerEvent::Drag(current)) => {
                SessionEffect::DrawOutline(ScreenRect::from_corners(start, current))
            }
            (ViewState::SelectingRegion { start }, PointerEvent::Release(end)) => {
                self.view_state = ViewState::Viewing;
                self.finish_selection(start, end)
            }
        }
    }

    fn finish_selection(&mut self, start: Point, end: Point) -> SessionEffect {
        let selection = ScreenRect::from_corners(start, end);

        match self.zoom_to(selection) {
            Ok(request) => SessionEffect::Render(request),
            Err(err) => {
                warn!("discarding selection: {}", err);
                SessionEffect::SelectionDiscarded(err)
            }
        }
    }

    /// Commits the zoom only once both the region and palette are built.
    fn zoom_to(&mut self, selection: ScreenRect) -> Result<RenderRequest, ZoomRejected> {
        let region = adjust_region(
            selection,
            self.extent.bounds(),
            self.extent.aspect_ratio(),
            self.region,
        )?;

        let iteration_cap = self.iteration_cap.incremented(self.config.iteration_increment);
        let palette = Palette::build(iteration_cap.get() as usize)?;

        debug!("rebuilt palette with {} colours", palette.len());
        info!(
            "zoomed to real [{}, {}] imag [{}, {}] with iteration cap {}",
            region.min_x(),
            region.max_x(),
            region.min_y(),
            region.max_y(),
            iteration_cap.get()
        );

        self.region = region;
        self.iteration_cap = iteration_cap;
        self.palette = Arc::new(palette);

        Ok(self.render_request())
    }
}
