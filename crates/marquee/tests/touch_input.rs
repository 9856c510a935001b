//! Touch adapter: tap classification and drag translation.

mod common;

use common::{count_kind, engine_with_rows, recorder};
use marquee::{EventKind, SelectEvent};
use marquee_core::event::{TouchEvent, TouchPhase};
use marquee_core::geometry::Point;
use marquee_core::host::ElementId;
use web_time::{Duration, Instant};

fn ids(raw: &[u64]) -> Vec<ElementId> {
    raw.iter().copied().map(ElementId).collect()
}

fn touch(phase: TouchPhase, x: f32, y: f32) -> TouchEvent {
    TouchEvent::new(phase, x, y)
}

#[test]
fn quick_stationary_tap_toggles_the_candidate() {
    let (_host, mut engine) = engine_with_rows(5);
    let now = Instant::now();

    engine.handle_touch(&touch(TouchPhase::Start, 5.0, 15.0), now);
    engine.handle_touch(&touch(TouchPhase::End, 5.0, 15.0), now + Duration::from_millis(50));
    assert_eq!(engine.selected(), ids(&[1]));

    // A second tap on the same candidate toggles it back off.
    engine.handle_touch(&touch(TouchPhase::Start, 5.0, 15.0), now);
    engine.handle_touch(&touch(TouchPhase::End, 5.0, 15.0), now + Duration::from_millis(50));
    assert!(engine.selected().is_empty());
}

#[test]
fn slow_tap_is_not_a_tap() {
    let (_host, mut engine) = engine_with_rows(5);
    let now = Instant::now();

    engine.handle_touch(&touch(TouchPhase::Start, 5.0, 15.0), now);
    engine.handle_touch(&touch(TouchPhase::End, 5.0, 15.0), now + Duration::from_millis(400));
    assert!(engine.selected().is_empty());
}

#[test]
fn displaced_release_is_not_a_tap() {
    let (_host, mut engine) = engine_with_rows(5);
    let now = Instant::now();

    engine.handle_touch(&touch(TouchPhase::Start, 5.0, 15.0), now);
    engine.handle_touch(&touch(TouchPhase::End, 30.0, 15.0), now + Duration::from_millis(50));
    assert!(engine.selected().is_empty());
}

#[test]
fn tap_on_empty_space_selects_nothing() {
    let (_host, mut engine) = engine_with_rows(2);
    let now = Instant::now();

    // y=9 falls in the gap between row boxes.
    engine.handle_touch(&touch(TouchPhase::Start, 5.0, 9.0), now);
    engine.handle_touch(&touch(TouchPhase::End, 5.0, 9.0), now + Duration::from_millis(50));
    assert!(engine.selected().is_empty());
}

#[test]
fn touch_callbacks_fire_for_every_sequence() {
    let (_host, mut engine) = engine_with_rows(5);
    let (log, handler) = recorder();
    engine.on(EventKind::TouchStart, handler);
    let (end_log, end_handler) = recorder();
    engine.on(EventKind::TouchEnd, end_handler);
    let now = Instant::now();

    engine.handle_touch(&touch(TouchPhase::Start, 5.0, 15.0), now);
    engine.handle_touch(&touch(TouchPhase::End, 5.0, 15.0), now + Duration::from_millis(400));

    assert_eq!(
        log.borrow().as_slice(),
        &[SelectEvent::TouchStart {
            position: Point::new(5.0, 15.0)
        }]
    );
    // The end callback fires even when the sequence was not a tap.
    assert_eq!(
        end_log.borrow().as_slice(),
        &[SelectEvent::TouchEnd {
            position: Point::new(5.0, 15.0)
        }]
    );
}

#[test]
fn movement_past_threshold_becomes_a_drag() {
    let (host, mut engine) = engine_with_rows(5);
    let (log, handler) = recorder();
    engine.on(EventKind::End, handler);
    let now = Instant::now();

    engine.handle_touch(&touch(TouchPhase::Start, 0.0, 0.0), now);
    // dy exceeds the 10px threshold: the press is synthesized at the
    // origin point, then this move is forwarded.
    engine.handle_touch(&touch(TouchPhase::Move, 0.0, 15.0), now);
    assert!(engine.is_dragging());
    assert!(host.indicator().visible);

    engine.handle_touch(&touch(TouchPhase::Move, 100.0, 25.0), now);
    engine.handle_touch(&touch(TouchPhase::End, 100.0, 25.0), now + Duration::from_secs(2));

    assert!(!engine.is_dragging());
    assert_eq!(engine.selected(), ids(&[0, 1, 2]));
    assert_eq!(count_kind(&log, EventKind::End), 1);
}

#[test]
fn movement_under_threshold_keeps_tap_semantics() {
    let (_host, mut engine) = engine_with_rows(5);
    let now = Instant::now();

    engine.handle_touch(&touch(TouchPhase::Start, 5.0, 15.0), now);
    engine.handle_touch(&touch(TouchPhase::Move, 9.0, 18.0), now);
    assert!(!engine.is_dragging());

    engine.handle_touch(&touch(TouchPhase::End, 9.0, 18.0), now + Duration::from_millis(50));
    assert_eq!(engine.selected(), ids(&[1]));
}

#[test]
fn tap_hit_tests_the_full_list_under_virtual_scrolling() {
    let (host, mut engine) = engine_with_rows(5);
    host.set_viewport_height(20.0);
    host.set_scroll(Point::new(0.0, 20.0));
    engine.enable_virtual_scrolling(10.0);

    // Candidate 0 is outside the visibility window.
    assert!(host.is_hidden(ElementId(0)));

    // Client (5, -15) is container-relative (5, 5): inside candidate 0.
    let now = Instant::now();
    engine.handle_touch(&touch(TouchPhase::Start, 5.0, -15.0), now);
    engine.handle_touch(&touch(TouchPhase::End, 5.0, -15.0), now + Duration::from_millis(50));

    assert_eq!(engine.selected(), ids(&[0]));
}

#[test]
fn move_and_end_without_a_start_are_ignored() {
    let (_host, mut engine) = engine_with_rows(5);
    let now = Instant::now();

    engine.handle_touch(&touch(TouchPhase::Move, 50.0, 50.0), now);
    assert!(!engine.is_dragging());
    // End with no session still fires the end callback but selects nothing.
    engine.handle_touch(&touch(TouchPhase::End, 5.0, 15.0), now);
    assert!(engine.selected().is_empty());
}

#[test]
fn disable_touch_drops_the_session_and_listeners() {
    let (host, mut engine) = engine_with_rows(5);
    let before = host.active_listener_count();
    let now = Instant::now();

    engine.handle_touch(&touch(TouchPhase::Start, 5.0, 15.0), now);
    engine.disable_touch();
    assert_eq!(host.active_listener_count(), before - 3);

    engine.handle_touch(&touch(TouchPhase::End, 5.0, 15.0), now + Duration::from_millis(50));
    assert!(engine.selected().is_empty());

    engine.enable_touch();
    assert_eq!(host.active_listener_count(), before);
}

#[test]
fn touch_ignored_while_disabled() {
    let (_host, mut engine) = engine_with_rows(5);
    engine.disable();
    let now = Instant::now();
    engine.handle_touch(&touch(TouchPhase::Start, 5.0, 15.0), now);
    engine.handle_touch(&touch(TouchPhase::End, 5.0, 15.0), now);
    assert!(engine.selected().is_empty());
}
