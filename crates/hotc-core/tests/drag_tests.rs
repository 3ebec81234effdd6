// Host-side tests for drag-to-scrub and its interaction with measurement.

use hotc_core::*;

fn live() -> LiveOffsets {
    LiveOffsets {
        start_px: 200.0,
        end_px: -700.0,
    }
}

#[test]
fn pointer_down_pauses_and_grabs() {
    let mut drag = DragController::new();
    let fx = drag.pointer_down(Some(1), 100.0, live(), true);
    assert_eq!(
        fx.as_slice(),
        &[
            TrackEffect::CapturePointer(1),
            TrackEffect::Play(PlayState::Paused),
            TrackEffect::Cursor(Cursor::Grabbing),
        ]
    );
    assert!(drag.is_dragging());
}

#[test]
fn no_capture_requested_without_support() {
    let mut drag = DragController::new();
    let fx = drag.pointer_down(Some(1), 100.0, live(), false);
    assert!(!fx.iter().any(|e| matches!(e, TrackEffect::CapturePointer(_))));
    let fx = drag.pointer_up(Some(1));
    assert_eq!(
        fx.as_slice(),
        &[
            TrackEffect::Play(PlayState::Running),
            TrackEffect::Cursor(Cursor::Grab),
        ]
    );
}

#[test]
fn move_shifts_both_offsets_by_delta() {
    let mut drag = DragController::new();
    drag.pointer_down(Some(1), 100.0, live(), true);
    let fx = drag.pointer_move(Some(1), 130.0);
    assert_eq!(
        fx.as_slice(),
        &[TrackEffect::Offsets(LiveOffsets {
            start_px: 230.0,
            end_px: -670.0,
        })]
    );
    // offsets follow the absolute delta from pointer-down, not the last move
    let fx = drag.pointer_move(Some(1), 90.0);
    assert_eq!(
        fx.as_slice(),
        &[TrackEffect::Offsets(LiveOffsets {
            start_px: 190.0,
            end_px: -710.0,
        })]
    );
}

#[test]
fn real_drag_suppresses_exactly_one_click() {
    let mut drag = DragController::new();
    drag.pointer_down(Some(1), 100.0, live(), true);
    drag.pointer_move(Some(1), 110.0);
    let fx = drag.pointer_up(Some(1));
    assert_eq!(fx[0], TrackEffect::ReleasePointer(1));
    assert!(!drag.is_dragging());
    assert!(drag.take_click());
    assert!(!drag.take_click());
}

#[test]
fn small_jitter_keeps_the_click() {
    let mut drag = DragController::new();
    drag.pointer_down(Some(1), 100.0, live(), true);
    drag.pointer_move(Some(1), 104.0);
    drag.pointer_move(Some(1), 96.0);
    drag.pointer_up(Some(1));
    assert!(!drag.take_click());
}

#[test]
fn new_press_clears_stale_suppression() {
    let mut drag = DragController::new();
    drag.pointer_down(Some(1), 0.0, live(), true);
    drag.pointer_move(Some(1), 50.0);
    drag.pointer_up(Some(1));
    assert!(drag.suppresses_next_click());
    drag.pointer_down(Some(2), 0.0, live(), true);
    assert!(!drag.suppresses_next_click());
}

#[test]
fn idle_events_are_ignored() {
    let mut drag = DragController::new();
    assert!(drag.pointer_move(Some(1), 500.0).is_empty());
    assert!(drag.pointer_up(Some(1)).is_empty());
    assert_eq!(drag.state(), DragState::Idle);
}

#[test]
fn other_pointers_cannot_move_or_end_the_session() {
    let mut drag = DragController::new();
    drag.pointer_down(Some(1), 100.0, live(), true);
    assert!(drag.pointer_move(Some(2), 300.0).is_empty());
    assert!(drag.pointer_up(Some(2)).is_empty());
    assert!(drag.is_dragging());
    assert!(!drag.suppresses_next_click());
}

#[test]
fn second_press_restarts_from_current_offsets() {
    let mut drag = DragController::new();
    drag.pointer_down(Some(1), 100.0, live(), true);
    let moved = LiveOffsets {
        start_px: 150.0,
        end_px: -750.0,
    };
    drag.pointer_down(Some(1), 400.0, moved, true);
    let DragState::Dragging(session) = drag.state() else {
        panic!("expected an active session");
    };
    assert_eq!(session.start_client_x, 400.0);
    assert_eq!(session.offsets_at(410.0).start_px, 160.0);
}

#[test]
fn measure_during_drag_leaves_positions_alone() {
    let mut ticker = MarqueeTicker::new(TickerSettings {
        strip_gap: StripGap::Pixels(100.0),
        ..TickerSettings::default()
    });
    let vars = ticker.measure(800.0, 1200.0);
    assert_eq!(vars.len(), 4);
    assert_eq!(ticker.live(), LiveOffsets { start_px: 200.0, end_px: -700.0 });

    ticker.pointer_down(Some(7), 0.0, true);
    ticker.pointer_move(Some(7), -50.0);
    assert_eq!(ticker.live().start_px, 150.0);

    let vars = ticker.measure(900.0, 1200.0);
    let names: Vec<&str> = vars.iter().map(|(n, _)| *n).collect();
    assert_eq!(names, vec![VAR_MARQUEE_SPEED, VAR_MARQUEE_GAP]);
    assert_eq!(ticker.live().start_px, 150.0);
    assert_eq!(ticker.geometry().map(|g| g.base_width_px), Some(900.0));

    ticker.pointer_up(Some(7));
    assert!(ticker.click());
    let vars = ticker.measure(900.0, 1200.0);
    assert_eq!(vars.len(), 4);
    assert_eq!(ticker.live().start_px, 150.0);
    assert_eq!(ticker.live().end_px, -850.0);
}

#[test]
fn press_before_first_measurement_is_ignored() {
    let mut ticker = MarqueeTicker::new(TickerSettings::default());
    assert!(ticker.pointer_down(Some(1), 100.0, true).is_empty());
    assert!(!ticker.is_dragging());
    assert!(ticker.pointer_move(Some(1), 200.0).is_empty());
    assert!(!ticker.click());

    ticker.measure(800.0, 1200.0);
    assert!(!ticker.pointer_down(Some(1), 100.0, true).is_empty());
    assert!(ticker.is_dragging());
}
