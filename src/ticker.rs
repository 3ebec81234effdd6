use crate::constants::{
    TICKER_ARIA_LABEL, TICKER_DIAGNOSTIC_CLASS, TICKER_SECTION_CLASS, TICKER_SLICE_TYPE,
    TRANSPARENT,
};
use crate::dom;
use crate::events::{self, TrackWiring};
use crate::frame::FrameScheduler;
use crate::overlay;
use gloo::events::EventListener;
use gloo::timers::callback::Timeout;
use hotc_core::markup;
use hotc_core::{
    MarqueeTicker, TickerContent, TickerView, BASE_SET_ATTR, HOVER_PAUSE_CLASS,
    TICKER_SETTLE_DELAY_MS, TRACK_ATTR,
};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// One mounted ticker section.
pub struct TickerMount {
    listeners: Vec<EventListener>,
    measure_frames: Option<Rc<FrameScheduler<()>>>,
    settle: Option<Timeout>,
}

impl TickerMount {
    fn static_render() -> Self {
        Self {
            listeners: Vec::new(),
            measure_frames: None,
            settle: None,
        }
    }

    pub fn detach(&mut self) {
        self.listeners.clear();
        if let Some(t) = self.settle.take() {
            t.cancel();
        }
        if let Some(f) = self.measure_frames.take() {
            f.cancel();
        }
    }
}

impl Drop for TickerMount {
    fn drop(&mut self) {
        self.detach();
    }
}

fn style_section(section: &web::HtmlElement, content: &TickerContent) {
    let settings = &content.settings;
    _ = section.set_attribute("data-slice-type", TICKER_SLICE_TYPE);
    _ = section.set_attribute("aria-label", TICKER_ARIA_LABEL);
    _ = section.class_list().add_1(TICKER_SECTION_CLASS);
    if settings.pause_on_hover {
        _ = section.class_list().add_1(HOVER_PAUSE_CLASS);
    }
    dom::set_style(
        section,
        "background-color",
        settings.background.as_deref().unwrap_or(TRANSPARENT),
    );
}

pub fn mount(section: web::HtmlElement, content: TickerContent) -> anyhow::Result<TickerMount> {
    let items = match content.view() {
        TickerView::Strip(items) => items,
        TickerView::Diagnostic(counts) => {
            overlay::show_diagnostic(&section, counts, content.settings.eligibility);
            return Ok(TickerMount::static_render());
        }
        TickerView::Hidden => {
            log::info!("[ticker] no eligible items; rendering nothing");
            overlay::hide(&section);
            return Ok(TickerMount::static_render());
        }
    };

    overlay::reveal(&section);
    _ = section.class_list().remove_1(TICKER_DIAGNOSTIC_CLASS);
    section.set_inner_html(&markup::strip_html(&items, &content.settings));
    style_section(&section, &content);
    let item_count = items.len();
    drop(items);

    let track = dom::query_html(&section, &format!("[{}]", TRACK_ATTR))
        .ok_or_else(|| anyhow::anyhow!("ticker markup has no track"))?;
    let base = dom::query_html(&track, &format!("[{}]", BASE_SET_ATTR))
        .ok_or_else(|| anyhow::anyhow!("ticker markup has no base set"))?;

    let ticker = Rc::new(RefCell::new(MarqueeTicker::new(content.settings)));

    let measure_frames = {
        let ticker = ticker.clone();
        let track = track.clone();
        FrameScheduler::new(move |()| {
            let base_width = base.scroll_width() as f32;
            let container_width = dom::viewport().width;
            let vars = ticker.borrow_mut().measure(base_width, container_width);
            for (name, value) in vars {
                dom::set_style(&track, name, &value);
            }
        })
    };

    // First measurement after layout, a second once late images settle.
    measure_frames.offer(());
    let settle = {
        let frames = Rc::downgrade(&measure_frames);
        Timeout::new(TICKER_SETTLE_DELAY_MS, move || {
            if let Some(frames) = frames.upgrade() {
                frames.offer(());
            }
        })
    };

    let mut listeners = events::wire_track_handlers(&TrackWiring {
        track,
        ticker,
    });
    if let Some(window) = web::window() {
        let frames = measure_frames.clone();
        listeners.push(EventListener::new(&window, "resize", move |_| {
            frames.offer(())
        }));
    }
    log::info!("[ticker] mounted with {} items", item_count);

    Ok(TickerMount {
        listeners,
        measure_frames: Some(measure_frames),
        settle: Some(settle),
    })
}
