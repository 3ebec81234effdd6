use crate::constants::REDUCED_MOTION_QUERY;
use hotc_core::{ElementBox, Viewport};
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Layout viewport in CSS px; zero when there is no window.
pub fn viewport() -> Viewport {
    let Some(w) = web::window() else {
        return Viewport::default();
    };
    let dim = |v: Result<JsValue, JsValue>| v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0) as f32;
    Viewport::new(dim(w.inner_width()), dim(w.inner_height()))
}

/// False when the query is unsupported or fails.
pub fn prefers_reduced_motion() -> bool {
    web::window()
        .and_then(|w| w.match_media(REDUCED_MOTION_QUERY).ok().flatten())
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

#[inline]
pub fn element_box(el: &web::Element) -> ElementBox {
    let rect = el.get_bounding_client_rect();
    ElementBox {
        top: rect.top() as f32,
        height: rect.height() as f32,
    }
}

#[inline]
pub fn set_style(el: &web::HtmlElement, name: &str, value: &str) {
    if let Err(e) = el.style().set_property(name, value) {
        log::warn!("[dom] set {} failed: {:?}", name, e);
    }
}

/// Some engines still ship without pointer capture.
pub fn supports_pointer_capture(el: &web::Element) -> bool {
    js_sys::Reflect::has(el.as_ref(), &JsValue::from_str("setPointerCapture")).unwrap_or(false)
}

pub fn query_all(root: &web::Document, selector: &str) -> Vec<web::Element> {
    let Ok(list) = root.query_selector_all(selector) else {
        log::warn!("[dom] bad selector {}", selector);
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|n| n.dyn_into::<web::Element>().ok())
        .collect()
}

pub fn query_html(root: &web::Element, selector: &str) -> Option<web::HtmlElement> {
    root.query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}
