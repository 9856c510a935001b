//! Pointer-drag selection behavior.

mod common;

use common::{count_kind, engine_with_rows, engine_with_rows_and_options, recorder};
use marquee::{EventKind, Options, SelectEvent};
use marquee_core::event::{Modifiers, PointerButton, PointerEvent, PointerEventKind};
use marquee_core::geometry::{Point, Rect};
use marquee_core::host::ElementId;

fn ids(raw: &[u64]) -> Vec<ElementId> {
    raw.iter().copied().map(ElementId).collect()
}

#[test]
fn drag_admits_covered_candidates_in_registry_order() {
    let (_host, mut engine) = engine_with_rows(5);
    let (log, handler) = recorder();
    engine.on(EventKind::End, handler);

    engine.handle_pointer(&PointerEvent::down(0.0, 0.0));
    engine.handle_pointer(&PointerEvent::moved(100.0, 20.0));
    engine.handle_pointer(&PointerEvent::up(100.0, 20.0));

    assert_eq!(engine.selected(), ids(&[0, 1, 2]));
    assert_eq!(
        log.borrow().as_slice(),
        &[SelectEvent::End {
            selected: ids(&[0, 1, 2])
        }]
    );
}

#[test]
fn removal_during_drag_is_silent() {
    let (_host, mut engine) = engine_with_rows(5);
    let (log, handler) = recorder();
    engine.on(EventKind::Select, handler);

    engine.handle_pointer(&PointerEvent::down(50.0, 12.0));
    engine.handle_pointer(&PointerEvent::moved(50.0, 32.0));
    // Dragging back up evicts candidates 2 and 3 without any callback.
    engine.handle_pointer(&PointerEvent::moved(50.0, 5.0));
    engine.handle_pointer(&PointerEvent::up(50.0, 5.0));

    assert_eq!(engine.selected(), ids(&[0, 1]));
    // Admissions only: 1 at press, then 2 and 3, then 0.
    assert_eq!(count_kind(&log, EventKind::Select), 4);
}

#[test]
fn plain_click_selects_the_pressed_candidate() {
    let (_host, mut engine) = engine_with_rows(5);
    engine.handle_pointer(&PointerEvent::down(5.0, 15.0));
    engine.handle_pointer(&PointerEvent::up(5.0, 15.0));
    assert_eq!(engine.selected(), ids(&[1]));
}

#[test]
fn single_select_click_replaces_selection() {
    let (_host, mut engine) = engine_with_rows_and_options(5, Options::new().multi_select(false));
    let (log, handler) = recorder();
    engine.on(EventKind::Clear, handler);

    engine.select_by_index(0);
    engine.handle_pointer(&PointerEvent::down(5.0, 15.0));
    engine.handle_pointer(&PointerEvent::up(5.0, 15.0));

    assert_eq!(engine.selected(), ids(&[1]));
    // select_by_index clears once, the press clears again.
    assert_eq!(count_kind(&log, EventKind::Clear), 2);
}

#[test]
fn non_primary_buttons_are_ignored() {
    let (host, mut engine) = engine_with_rows(5);
    let (log, handler) = recorder();
    engine.on(EventKind::Start, handler);

    for button in [PointerButton::Secondary, PointerButton::Auxiliary] {
        engine.handle_pointer(&PointerEvent::new(PointerEventKind::Down(button), 0.0, 0.0));
    }

    assert!(!engine.is_dragging());
    assert!(engine.selected().is_empty());
    assert!(!host.indicator().visible);
    assert_eq!(count_kind(&log, EventKind::Start), 0);
}

#[test]
fn shift_click_selects_range_from_cursor() {
    let (_host, mut engine) = engine_with_rows(5);
    engine.select_by_index(1);

    let click = PointerEvent::down(5.0, 35.0).with_modifiers(Modifiers::SHIFT);
    engine.handle_pointer(&click);

    assert_eq!(engine.selected(), ids(&[1, 2, 3]));
    assert!(!engine.is_dragging());
}

#[test]
fn shift_click_without_cursor_starts_a_drag() {
    let (_host, mut engine) = engine_with_rows(5);
    let click = PointerEvent::down(5.0, 35.0).with_modifiers(Modifiers::SHIFT);
    engine.handle_pointer(&click);
    assert!(engine.is_dragging());
}

#[test]
fn ctrl_click_toggles_exactly_the_clicked_candidate() {
    let (host, mut engine) = engine_with_rows(5);
    let click = PointerEvent::down(5.0, 25.0).with_modifiers(Modifiers::CTRL);

    engine.handle_pointer(&click);
    assert_eq!(engine.selected(), ids(&[2]));
    assert!(!engine.is_dragging());
    assert!(!host.indicator().visible);

    engine.handle_pointer(&click);
    assert!(engine.selected().is_empty());
}

#[test]
fn meta_click_toggles_like_ctrl() {
    let (_host, mut engine) = engine_with_rows(5);
    let click = PointerEvent::down(5.0, 25.0).with_modifiers(Modifiers::SUPER);
    engine.handle_pointer(&click);
    assert_eq!(engine.selected(), ids(&[2]));
}

#[test]
fn indicator_tracks_the_normalized_rectangle() {
    let (host, mut engine) = engine_with_rows(5);

    engine.handle_pointer(&PointerEvent::down(80.0, 40.0));
    assert!(host.indicator().visible);
    assert_eq!(host.indicator().rect, Some(Rect::new(80.0, 40.0, 0.0, 0.0)));

    // Dragging up-left still produces a normalized rectangle.
    engine.handle_pointer(&PointerEvent::moved(20.0, 10.0));
    assert_eq!(host.indicator().rect, Some(Rect::new(20.0, 10.0, 60.0, 30.0)));

    engine.handle_pointer(&PointerEvent::up(20.0, 10.0));
    assert!(!host.indicator().visible);
}

#[test]
fn anchor_accounts_for_origin_and_scroll() {
    let (host, mut engine) = engine_with_rows(5);
    host.set_origin(Point::new(10.0, 10.0));
    host.set_scroll(Point::new(0.0, 5.0));

    // Client (10, 10) is container-relative (0, 5): inside candidate 0.
    engine.handle_pointer(&PointerEvent::down(10.0, 10.0));
    engine.handle_pointer(&PointerEvent::up(10.0, 10.0));

    assert_eq!(engine.selected(), ids(&[0]));
}

#[test]
fn disable_mid_drag_cancels_without_end_callback() {
    let (host, mut engine) = engine_with_rows(5);
    let (log, handler) = recorder();
    engine.on(EventKind::End, handler);

    engine.handle_pointer(&PointerEvent::down(0.0, 0.0));
    engine.handle_pointer(&PointerEvent::moved(100.0, 20.0));
    engine.disable();

    assert!(!engine.is_dragging());
    assert!(!host.indicator().visible);
    assert_eq!(count_kind(&log, EventKind::End), 0);

    // Further events are ignored until re-enabled.
    engine.handle_pointer(&PointerEvent::moved(100.0, 40.0));
    engine.handle_pointer(&PointerEvent::up(100.0, 40.0));
    assert_eq!(count_kind(&log, EventKind::End), 0);
}

#[test]
fn pointer_events_ignored_while_never_enabled() {
    let host = marquee_harness::TestHost::with_rows(3, 10.0, 8.0);
    let mut engine = marquee::SelectEngine::new(host, Options::new()).unwrap();

    engine.handle_pointer(&PointerEvent::down(0.0, 0.0));
    assert!(!engine.is_dragging());
    assert!(engine.selected().is_empty());
}

#[test]
fn start_callback_fires_once_per_session() {
    let (_host, mut engine) = engine_with_rows(5);
    let (log, handler) = recorder();
    engine.on(EventKind::Start, handler);

    engine.handle_pointer(&PointerEvent::down(0.0, 0.0));
    engine.handle_pointer(&PointerEvent::moved(10.0, 10.0));
    engine.handle_pointer(&PointerEvent::up(10.0, 10.0));

    assert_eq!(
        log.borrow().as_slice(),
        &[SelectEvent::Start {
            position: Point::new(0.0, 0.0)
        }]
    );
}

#[test]
fn selectability_predicate_blocks_admission_during_drag() {
    let (_host, mut engine) = engine_with_rows(5);
    engine.set_selectability_predicate(Box::new(|el| el.id != ElementId(1)));

    engine.handle_pointer(&PointerEvent::down(0.0, 0.0));
    engine.handle_pointer(&PointerEvent::moved(100.0, 20.0));
    engine.handle_pointer(&PointerEvent::up(100.0, 20.0));

    assert_eq!(engine.selected(), ids(&[0, 2]));
}
