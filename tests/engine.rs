use pixelpaint::draw::{BLACK, RED, WHITE};
use pixelpaint::input::adapter::{BTN_LEFT, BTN_MIDDLE, BTN_RIGHT};
use pixelpaint::input::{HostPointerEvent, InputAdapter, LineGesture};
use pixelpaint::{Config, EngineSettings, Notification, PaintError, RasterImage, Tool, ToolEngine};
use std::cell::RefCell;
use std::rc::Rc;

fn make_engine(width: u32, height: u32) -> ToolEngine {
    let settings = EngineSettings {
        seed: Some(3),
        ..Config::default().engine_settings()
    };
    ToolEngine::blank(width, height, settings).unwrap()
}

fn feed(engine: &mut ToolEngine, adapter: &mut InputAdapter, events: &[HostPointerEvent]) {
    for event in events {
        if let Some(event) = adapter.translate(*event) {
            engine.handle_pointer_event(event);
        }
    }
}

fn press(x: f64, y: f64, button: u32) -> HostPointerEvent {
    HostPointerEvent::Press { x, y, button }
}

fn release(x: f64, y: f64, button: u32) -> HostPointerEvent {
    HostPointerEvent::Release { x, y, button }
}

#[test]
fn pencil_dot_then_two_click_line() {
    let mut engine = make_engine(10, 10);
    let mut adapter = InputAdapter::new();
    engine.set_tool_size(2).unwrap();

    feed(
        &mut engine,
        &mut adapter,
        &[press(5.5, 5.5, BTN_LEFT), release(5.5, 5.5, BTN_LEFT)],
    );
    let image = engine.surface_snapshot();
    for (x, y) in [(4, 4), (5, 4), (4, 5), (5, 5)] {
        assert_eq!(image.pixel(x, y), Some(BLACK));
    }
    assert_eq!(engine.surface().count_not(WHITE), 4);

    engine.set_active_tool(Tool::Line);
    engine.set_tool_size(1).unwrap();
    feed(
        &mut engine,
        &mut adapter,
        &[
            press(0.2, 0.2, BTN_LEFT),
            release(0.2, 0.2, BTN_LEFT),
            HostPointerEvent::Motion { x: 9.5, y: 9.5 },
        ],
    );
    assert_eq!(engine.surface_snapshot(), image);
    let frame = engine.current_frame();
    assert_eq!(frame.pixel(9, 9), Some(BLACK));
    assert_eq!(frame.pixel(9, 0), Some(WHITE));

    feed(&mut engine, &mut adapter, &[press(9.5, 9.5, BTN_LEFT)]);
    let committed = engine.surface_snapshot();
    for i in 0..10 {
        assert_eq!(committed.pixel(i, i), Some(BLACK));
    }
    assert_eq!(engine.gesture(), LineGesture::Idle);
}

#[test]
fn frame_adds_border_without_touching_the_image() {
    let engine = make_engine(4, 3);
    let frame = engine.current_frame();
    assert_eq!((frame.width(), frame.height()), (9, 8));
    assert_eq!(frame.canvas_region(), engine.surface().bounds());
    assert_eq!(engine.surface_snapshot().data.len(), 4 * 3 * 4);
}

#[test]
fn picker_follows_host_buttons() {
    let mut engine = make_engine(4, 4);
    let mut adapter = InputAdapter::new();
    engine
        .load_image(RasterImage {
            width: 2,
            height: 1,
            data: vec![255, 0, 0, 255, 0, 0, 0, 255],
        })
        .unwrap();

    let picked = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&picked);
    engine.set_notification_sink(Box::new(move |n: Notification| match n {
        Notification::ForegroundColorChanged(_) | Notification::BackgroundColorChanged(_) => {
            sink.borrow_mut().push(n)
        }
        _ => {}
    }));

    engine.set_active_tool(Tool::ColorPicker);
    feed(
        &mut engine,
        &mut adapter,
        &[
            press(0.0, 0.0, BTN_RIGHT),
            release(0.0, 0.0, BTN_RIGHT),
            press(1.0, 0.0, BTN_MIDDLE),
            release(1.0, 0.0, BTN_MIDDLE),
            press(5.0, 0.0, BTN_LEFT),
        ],
    );

    assert_eq!(engine.background_color(), RED);
    assert_eq!(engine.foreground_color(), BLACK);
    assert_eq!(
        picked.borrow().as_slice(),
        &[Notification::BackgroundColorChanged(RED)]
    );
}

#[test]
fn replacing_the_image_mid_gesture() {
    let mut engine = make_engine(6, 6);
    let mut adapter = InputAdapter::new();
    engine.set_active_tool(Tool::Line);
    feed(&mut engine, &mut adapter, &[press(1.0, 1.0, BTN_LEFT)]);

    engine.new_blank_image(3, 3, WHITE).unwrap();
    assert!(engine.preview_line().is_none());
    feed(
        &mut engine,
        &mut adapter,
        &[release(1.0, 1.0, BTN_LEFT), press(2.0, 2.0, BTN_LEFT)],
    );
    assert_eq!(engine.surface().count_not(WHITE), 0);
}

#[test]
fn rejected_settings_report_invalid_argument() {
    let mut engine = make_engine(2, 2);
    assert!(matches!(
        engine.set_tool_size(-5),
        Err(PaintError::InvalidArgument(_))
    ));
    assert!(matches!(
        engine.surface().get(2, 0),
        Err(PaintError::OutOfBounds { x: 2, y: 0, .. })
    ));
    assert!(
        ToolEngine::blank(0, 4, EngineSettings::default()).is_err(),
        "zero-width surfaces are rejected"
    );
}
