use crate::frame::FrameScheduler;
use glam::Vec2;
use gloo::events::EventListener;
use hotc_core::ListenerPlan;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct ParallaxWiring {
    pub plan: ListenerPlan,
    pub scroll_frames: Rc<FrameScheduler<()>>,
    pub pointer_frames: Rc<FrameScheduler<Vec2>>,
}

/// Window listeners for one parallax mount (gloo listeners are passive by
/// default). Dropping the returned vector removes them.
pub fn wire_parallax(w: &ParallaxWiring) -> Vec<EventListener> {
    let Some(window) = web::window() else {
        return Vec::new();
    };
    let mut listeners = Vec::with_capacity(3);

    if w.plan.scroll {
        let frames = w.scroll_frames.clone();
        listeners.push(EventListener::new(&window, "scroll", move |_| {
            frames.offer(())
        }));
        let frames = w.scroll_frames.clone();
        listeners.push(EventListener::new(&window, "resize", move |_| {
            frames.offer(())
        }));
    }

    if w.plan.pointer {
        let frames = w.pointer_frames.clone();
        listeners.push(EventListener::new(&window, "pointermove", move |ev| {
            let Some(ev) = ev.dyn_ref::<web::PointerEvent>() else {
                return;
            };
            frames.offer(Vec2::new(ev.client_x() as f32, ev.client_y() as f32));
        }));
    }

    listeners
}
