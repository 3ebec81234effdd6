use crate::constants::{STYLE_CURSOR, STYLE_PLAY_STATE};
use crate::dom;
use gloo::events::{EventListener, EventListenerOptions, EventListenerPhase};
use hotc_core::{MarqueeTicker, TrackEffect, TrackEffects};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct TrackWiring {
    pub track: web::HtmlElement,
    pub ticker: Rc<RefCell<MarqueeTicker>>,
}

pub fn wire_track_handlers(w: &TrackWiring) -> Vec<EventListener> {
    vec![
        wire_pointerdown(w),
        wire_pointermove(w),
        wire_pointerend(w, "pointerup"),
        wire_pointerend(w, "pointercancel"),
        wire_click_capture(w),
    ]
}

fn apply_effects(track: &web::HtmlElement, fx: TrackEffects) {
    for effect in fx {
        match effect {
            TrackEffect::CapturePointer(id) => {
                if let Err(e) = track.set_pointer_capture(id) {
                    log::debug!("[drag] pointer capture unavailable: {:?}", e);
                }
            }
            TrackEffect::ReleasePointer(id) => {
                if track.has_pointer_capture(id) {
                    _ = track.release_pointer_capture(id);
                }
            }
            TrackEffect::Play(state) => dom::set_style(track, STYLE_PLAY_STATE, state.as_css()),
            TrackEffect::Cursor(cursor) => dom::set_style(track, STYLE_CURSOR, cursor.as_css()),
            TrackEffect::Offsets(offsets) => {
                for (name, value) in offsets.css_vars() {
                    dom::set_style(track, name, &value);
                }
            }
        }
    }
}

fn pointer_event(ev: &web::Event) -> Option<&web::PointerEvent> {
    ev.dyn_ref::<web::PointerEvent>()
}

fn wire_pointerdown(w: &TrackWiring) -> EventListener {
    let target = w.track.clone();
    let w = w.clone();
    let can_capture = dom::supports_pointer_capture(&w.track);
    EventListener::new(&target, "pointerdown", move |ev| {
        let Some(ev) = pointer_event(ev) else {
            return;
        };
        let fx = w.ticker.borrow_mut().pointer_down(
            Some(ev.pointer_id()),
            ev.client_x() as f32,
            can_capture,
        );
        apply_effects(&w.track, fx);
    })
}

fn wire_pointermove(w: &TrackWiring) -> EventListener {
    let target = w.track.clone();
    let w = w.clone();
    EventListener::new(&target, "pointermove", move |ev| {
        let Some(ev) = pointer_event(ev) else {
            return;
        };
        let fx = w
            .ticker
            .borrow_mut()
            .pointer_move(Some(ev.pointer_id()), ev.client_x() as f32);
        if !fx.is_empty() {
            apply_effects(&w.track, fx);
        }
    })
}

fn wire_pointerend(w: &TrackWiring, event_type: &'static str) -> EventListener {
    let target = w.track.clone();
    let w = w.clone();
    EventListener::new(&target, event_type, move |ev| {
        let pointer_id = pointer_event(ev).map(|p| p.pointer_id());
        let fx = w.ticker.borrow_mut().pointer_up(pointer_id);
        if !fx.is_empty() {
            apply_effects(&w.track, fx);
        }
    })
}

// Runs before the link's own click handling so a drag never navigates.
fn wire_click_capture(w: &TrackWiring) -> EventListener {
    let target = w.track.clone();
    let w = w.clone();
    EventListener::new_with_options(
        &target,
        "click",
        EventListenerOptions {
            phase: EventListenerPhase::Capture,
            passive: false,
        },
        move |ev| {
            if w.ticker.borrow_mut().click() {
                ev.prevent_default();
                ev.stop_propagation();
                log::debug!("[drag] swallowed click after drag");
            }
        },
    )
}
