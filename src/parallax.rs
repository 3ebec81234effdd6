use crate::constants::{
    PARALLAX_TARGET_ATTR, STYLE_TRANSFORM, STYLE_TRANSFORM_ORIGIN, STYLE_WILL_CHANGE,
};
use crate::dom;
use crate::events::{self, ParallaxWiring};
use crate::frame::FrameScheduler;
use glam::Vec2;
use gloo::events::EventListener;
use hotc_core::{Environment, ParallaxConfig, ParallaxEngine};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// One attached parallax behavior. Dropping it (or calling `detach`)
/// removes its listeners and cancels any pending frame.
pub struct ParallaxMount {
    listeners: Vec<EventListener>,
    scroll_frames: Option<Rc<FrameScheduler<()>>>,
    pointer_frames: Option<Rc<FrameScheduler<Vec2>>>,
}

impl ParallaxMount {
    fn inert() -> Self {
        Self {
            listeners: Vec::new(),
            scroll_frames: None,
            pointer_frames: None,
        }
    }

    pub fn detach(&mut self) {
        self.listeners.clear();
        if let Some(f) = self.scroll_frames.take() {
            f.cancel();
        }
        if let Some(f) = self.pointer_frames.take() {
            f.cancel();
        }
    }
}

impl Drop for ParallaxMount {
    fn drop(&mut self) {
        self.detach();
    }
}

fn moving_target(element: &web::Element) -> anyhow::Result<web::HtmlElement> {
    if let Some(child) = dom::query_html(element, &format!("[{}]", PARALLAX_TARGET_ATTR)) {
        return Ok(child);
    }
    element
        .clone()
        .dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow::anyhow!("parallax element is not an HTMLElement: {:?}", e))
}

pub fn attach(element: web::Element, config: ParallaxConfig) -> anyhow::Result<ParallaxMount> {
    let target = moving_target(&element)?;
    let env = Environment {
        viewport: dom::viewport(),
        prefers_reduced_motion: config.respect_reduced_motion && dom::prefers_reduced_motion(),
    };
    let engine = ParallaxEngine::attach(config, env);

    dom::set_style(&target, STYLE_TRANSFORM_ORIGIN, "center");
    dom::set_style(&target, STYLE_WILL_CHANGE, "transform");
    dom::set_style(&target, STYLE_TRANSFORM, &engine.transform());

    if !engine.is_enabled() {
        log::info!("[parallax] reduced motion requested; staying still");
        return Ok(ParallaxMount::inert());
    }

    let plan = engine.plan();
    let engine = Rc::new(RefCell::new(engine));

    let scroll_frames = {
        let engine = engine.clone();
        let element = element.clone();
        let target = target.clone();
        FrameScheduler::new(move |()| {
            let vp = dom::viewport();
            let mut eng = engine.borrow_mut();
            if eng.update_scroll(vp.height, dom::element_box(&element)) {
                dom::set_style(&target, STYLE_TRANSFORM, &eng.transform());
            }
        })
    };
    let pointer_frames = {
        let engine = engine.clone();
        let target = target.clone();
        FrameScheduler::new(move |pointer: Vec2| {
            let mut eng = engine.borrow_mut();
            if eng.update_pointer(dom::viewport(), pointer) {
                dom::set_style(&target, STYLE_TRANSFORM, &eng.transform());
            }
        })
    };

    // Initial compute, before any event arrives.
    {
        let vp = dom::viewport();
        let mut eng = engine.borrow_mut();
        if eng.update_scroll(vp.height, dom::element_box(&element)) {
            dom::set_style(&target, STYLE_TRANSFORM, &eng.transform());
        }
    }

    let listeners = events::wire_parallax(&ParallaxWiring {
        plan,
        scroll_frames: scroll_frames.clone(),
        pointer_frames: pointer_frames.clone(),
    });
    log::info!(
        "[parallax] attached scroll={} pointer={}",
        plan.scroll,
        plan.pointer
    );

    Ok(ParallaxMount {
        listeners,
        scroll_frames: Some(scroll_frames),
        pointer_frames: Some(pointer_frames),
    })
}
