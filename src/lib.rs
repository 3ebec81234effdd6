#![cfg(target_arch = "wasm32")]
use crate::constants::{
    FIRST_HANDLE, MOUNTED_ATTR, NO_HANDLE, PARALLAX_ATTR, TICKER_ATTR,
};
use fnv::FnvHashMap;
use hotc_core::{ParallaxConfig, TickerContent};
use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod overlay;
mod parallax;
mod ticker;

enum Mount {
    Parallax(parallax::ParallaxMount),
    Ticker(ticker::TickerMount),
}

impl Mount {
    fn kind(&self) -> &'static str {
        match self {
            Mount::Parallax(_) => "parallax",
            Mount::Ticker(_) => "ticker",
        }
    }
}

struct Registry {
    next: u32,
    mounts: FnvHashMap<u32, (web::Element, Mount)>,
}

impl Default for Registry {
    fn default() -> Self {
        Self {
            next: FIRST_HANDLE,
            mounts: FnvHashMap::default(),
        }
    }
}

thread_local! {
    static REGISTRY: RefCell<Registry> = RefCell::new(Registry::default());
}

fn register(element: web::Element, mount: Mount) -> u32 {
    let handle = REGISTRY.with(|r| {
        let mut r = r.borrow_mut();
        let handle = r.next;
        r.next = r.next.checked_add(1).unwrap_or(FIRST_HANDLE);
        log::debug!("[mount] {} -> handle {}", mount.kind(), handle);
        r.mounts.insert(handle, (element.clone(), mount));
        handle
    });
    _ = element.set_attribute(MOUNTED_ATTR, &handle.to_string());
    handle
}

// Mounting an element again replaces its previous mount, so a content or
// config change is a plain re-mount.
fn release_existing(element: &web::Element) {
    let handle = element
        .get_attribute(MOUNTED_ATTR)
        .and_then(|h| h.parse::<u32>().ok());
    if let Some(handle) = handle {
        detach(handle);
    }
}

fn try_attach_parallax(element: &web::Element, config_json: &str) -> anyhow::Result<u32> {
    let config = ParallaxConfig::from_attribute(config_json)?;
    release_existing(element);
    let mount = parallax::attach(element.clone(), config)?;
    Ok(register(element.clone(), Mount::Parallax(mount)))
}

fn try_mount_ticker(element: &web::Element, content_json: &str) -> anyhow::Result<u32> {
    let content = TickerContent::from_json(content_json)?;
    release_existing(element);
    let section = element
        .clone()
        .dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow::anyhow!("ticker element is not an HTMLElement: {:?}", e))?;
    let mount = ticker::mount(section, content)?;
    Ok(register(element.clone(), Mount::Ticker(mount)))
}

/// Attach parallax to `element`. `config_json` is an options object, the
/// preset name `"hero"`, or empty for defaults. Returns 0 on failure.
#[wasm_bindgen]
pub fn attach_parallax(element: web::Element, config_json: Option<String>) -> u32 {
    match try_attach_parallax(&element, config_json.as_deref().unwrap_or("")) {
        Ok(handle) => handle,
        Err(e) => {
            log::error!("[parallax] attach failed: {:?}", e);
            NO_HANDLE
        }
    }
}

/// Render a ticker slice into `element` and start it. Returns 0 on failure.
#[wasm_bindgen]
pub fn mount_ticker(element: web::Element, content_json: &str) -> u32 {
    match try_mount_ticker(&element, content_json) {
        Ok(handle) => handle,
        Err(e) => {
            log::error!("[ticker] mount failed: {:?}", e);
            NO_HANDLE
        }
    }
}

/// Tear down a mount. False for unknown or already detached handles.
#[wasm_bindgen]
pub fn detach(handle: u32) -> bool {
    let removed = REGISTRY.with(|r| r.borrow_mut().mounts.remove(&handle));
    // dropped outside the borrow; teardown may log or touch the DOM
    let Some((element, mut mount)) = removed else {
        return false;
    };
    match &mut mount {
        Mount::Parallax(m) => m.detach(),
        Mount::Ticker(m) => m.detach(),
    }
    _ = element.remove_attribute(MOUNTED_ATTR);
    log::debug!("[mount] detached {} handle {}", mount.kind(), handle);
    true
}

/// Mount every annotated element not mounted yet. Returns how many mounted.
#[wasm_bindgen]
pub fn mount_all() -> u32 {
    let Some(document) = dom::window_document() else {
        return 0;
    };
    let mut mounted = 0;
    let unmounted = |attr: &str| format!("[{}]:not([{}])", attr, MOUNTED_ATTR);

    for el in dom::query_all(&document, &unmounted(PARALLAX_ATTR)) {
        let value = el.get_attribute(PARALLAX_ATTR).unwrap_or_default();
        if attach_parallax(el, Some(value)) != NO_HANDLE {
            mounted += 1;
        }
    }
    for el in dom::query_all(&document, &unmounted(TICKER_ATTR)) {
        let value = el.get_attribute(TICKER_ATTR).unwrap_or_default();
        if mount_ticker(el, &value) != NO_HANDLE {
            mounted += 1;
        }
    }
    log::info!("[mount] {} behaviors mounted", mounted);
    mounted
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("hotc-web starting");
    mount_all();
    Ok(())
}
