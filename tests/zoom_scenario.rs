use std::sync::{Arc, Mutex};
use std::thread;
use std::time::{Duration, Instant};

use mandelbrot_zoom::{
    AdjustRegionError, Colour, InteractiveController, InteractiveControllerPresenterPort,
    MandelbrotConfig, Point, PointerEvent, RenderEvent, ScreenExtent, ScreenRect, SessionEffect,
    ViewSession, ViewState, ZoomRejected, render_frame,
};

fn window_session() -> ViewSession {
    let extent = ScreenExtent::new(1280, 984).unwrap();
    ViewSession::new(MandelbrotConfig::default(), extent).unwrap()
}

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-12,
        "expected {}, got {}",
        expected,
        actual
    );
}

fn drag(session: &mut ViewSession, from: Point, to: Point) -> SessionEffect {
    assert_eq!(session.handle(PointerEvent::Press(from)), SessionEffect::Idle);
    session.handle(PointerEvent::Drag(to));
    session.handle(PointerEvent::Release(to))
}

#[test]
fn test_initial_frame_covers_the_default_view() {
    let session = window_session();
    let request = session.render_request();

    let buffer = request.render(&mandelbrot_zoom::NeverCancel).unwrap();

    // (-2, -1.25) escapes on the first step
    assert_eq!(buffer.pixel(0, 0), Some(Colour::opaque(5, 0, 0)));
    // next to the origin, inside the main cardioid
    assert_eq!(buffer.pixel(787, 492), Some(Colour::BLACK));
    assert_eq!(buffer.pixel(1280, 0), None);
}

#[test]
fn test_drag_zooms_into_aspect_corrected_selection() {
    let mut session = window_session();

    let effect = drag(&mut session, Point::new(100.0, 100.0), Point::new(300.0, 250.0));

    let SessionEffect::Render(request) = effect else {
        panic!("expected a render, got {:?}", effect);
    };
    assert_eq!(session.view_state(), ViewState::Viewing);
    assert_close(request.region.min_x(), -1.74609375);
    assert_close(request.region.max_x(), -1.23828125);
    assert_close(request.region.min_y(), -1.0008544921875);
    assert_close(request.region.max_y(), -0.6104736328125);
    assert_eq!(request.iteration_cap.get(), 250);
    assert_eq!(request.palette.len(), 250);

    let ratio = request.region.width() / request.region.height();
    assert!((ratio - 1280.0 / 984.0).abs() < 1e-9);
}

#[test]
fn test_drag_direction_does_not_matter() {
    let mut forwards = window_session();
    let mut backwards = window_session();

    let a = drag(&mut forwards, Point::new(100.0, 100.0), Point::new(300.0, 250.0));
    let b = drag(&mut backwards, Point::new(300.0, 250.0), Point::new(100.0, 100.0));

    assert_eq!(a, b);
}

#[test]
fn test_repeated_zooms_keep_growing_the_cap() {
    let mut session = window_session();

    for expected_cap in [250, 300, 350] {
        let effect = drag(&mut session, Point::new(400.0, 300.0), Point::new(880.0, 669.0));
        assert!(matches!(effect, SessionEffect::Render(_)));
        assert_eq!(session.iteration_cap().get(), expected_cap);
    }

    let ratio = session.region().width() / session.region().height();
    assert!((ratio - 1280.0 / 984.0).abs() < 1e-9);
}

#[test]
fn test_click_without_drag_leaves_view_untouched() {
    let mut session = window_session();
    let before = session.render_request();

    let effect = drag(&mut session, Point::new(640.0, 492.0), Point::new(640.0, 492.0));

    assert!(matches!(
        effect,
        SessionEffect::SelectionDiscarded(ZoomRejected::Selection(
            AdjustRegionError::DegenerateSelection { .. }
        ))
    ));
    assert_eq!(session.render_request(), before);
    assert_eq!(session.view_state(), ViewState::Viewing);
}

#[test]
fn test_outline_follows_the_pointer() {
    let mut session = window_session();

    session.handle(PointerEvent::Press(Point::new(50.0, 60.0)));
    let first = session.handle(PointerEvent::Drag(Point::new(70.0, 90.0)));
    let second = session.handle(PointerEvent::Drag(Point::new(10.0, 20.0)));

    assert_eq!(first, SessionEffect::DrawOutline(ScreenRect::new(50.0, 60.0, 70.0, 90.0)));
    assert_eq!(second, SessionEffect::DrawOutline(ScreenRect::new(50.0, 60.0, 10.0, 20.0)));
}

#[test]
fn test_rendering_is_deterministic() {
    let extent = ScreenExtent::new(160, 123).unwrap();
    let mut session = ViewSession::new(MandelbrotConfig::default(), extent).unwrap();
    drag(&mut session, Point::new(20.0, 15.0), Point::new(60.0, 40.0));
    let request = session.render_request();

    let a = render_frame(request.extent, request.region, request.max_iterations, &request.palette)
        .unwrap();
    let b = render_frame(request.extent, request.region, request.max_iterations, &request.palette)
        .unwrap();

    assert_eq!(a, b);
}

#[derive(Default)]
struct CollectingPresenter {
    events: Mutex<Vec<RenderEvent>>,
}

impl InteractiveControllerPresenterPort for CollectingPresenter {
    fn present(&self, event: RenderEvent) {
        self.events.lock().unwrap().push(event);
    }
}

#[test]
fn test_controller_presents_latest_zoom() {
    let extent = ScreenExtent::new(64, 49).unwrap();
    let mut session = ViewSession::new(MandelbrotConfig::default(), extent).unwrap();
    let presenter = Arc::new(CollectingPresenter::default());
    let mut controller =
        InteractiveController::new(Arc::clone(&presenter) as Arc<dyn InteractiveControllerPresenterPort>);

    controller.submit_request(Arc::new(session.render_request()));
    let SessionEffect::Render(request) =
        drag(&mut session, Point::new(10.0, 10.0), Point::new(30.0, 25.0))
    else {
        panic!("expected a render");
    };
    let expected = request.render(&mandelbrot_zoom::NeverCancel).unwrap();
    let generation = controller.submit_request(Arc::new(request));

    let start = Instant::now();
    while controller.last_completed_generation() < generation {
        assert!(start.elapsed() < Duration::from_secs(5), "render never completed");
        thread::sleep(Duration::from_millis(10));
    }
    controller.shutdown();

    let events = std::mem::take(&mut *presenter.events.lock().unwrap());
    let Some(RenderEvent::Frame(frame)) = events.last() else {
        panic!("expected a frame, got {:?}", events);
    };
    assert_eq!(frame.generation, generation);
    assert_eq!(frame.pixel_buffer, expected);
}
