//! HTML for the ticker strip and its empty-state banner.
//!
//! The strip is two copies of the item set separated by a spacer whose width
//! is `var(--marquee-gap)`. The second copy is hidden from assistive tech and
//! carries no links, so keyboard focus only ever lands on the first copy.

use std::fmt::Write;

use crate::constants::{BASE_SET_ATTR, DIAGNOSTIC_ATTR, TRACK_ATTR, VAR_MARQUEE_GAP};
use crate::content::{SourceCounts, TickerSettings};
use crate::items::{Eligibility, MarqueeItem};

pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn set_style(settings: &TickerSettings) -> String {
    match settings.image_gap_px {
        Some(gap) => format!(" style=\"gap: {}px\"", gap),
        None => String::new(),
    }
}

fn caption_style(settings: &TickerSettings) -> String {
    match settings.label_color.as_deref() {
        Some(color) => format!(" style=\"color: {}\"", escape_html(color)),
        None => String::new(),
    }
}

fn write_figure(out: &mut String, item: &MarqueeItem, settings: &TickerSettings) {
    let size = item.size.unwrap_or(settings.item_size);
    let fit = if item.contain {
        "object-contain p-1"
    } else {
        "object-cover"
    };
    let src = item
        .image
        .as_ref()
        .and_then(|i| i.url.as_deref())
        .unwrap_or("");
    let _ = write!(
        out,
        "<img src=\"{}\" alt=\"{}\" loading=\"lazy\" draggable=\"false\" \
         class=\"aspect-square shrink-0 rounded-md bg-white/5 {} {}\">",
        escape_html(src),
        escape_html(item.alt_text()),
        size.image_classes(),
        fit
    );
    if let Some(caption) = item.caption() {
        let _ = write!(
            out,
            "<span class=\"hotc-marquee-caption mt-2 text-xs md:text-sm text-slate-200/80\"{}>{}</span>",
            caption_style(settings),
            escape_html(caption)
        );
    }
}

fn write_set(out: &mut String, items: &[&MarqueeItem], settings: &TickerSettings, clone: bool) {
    let marker = if clone {
        " aria-hidden=\"true\"".to_string()
    } else {
        format!(" {}", BASE_SET_ATTR)
    };
    let _ = write!(
        out,
        "<ul class=\"flex w-max items-center gap-6 md:gap-8\" role=\"list\"{}{}>",
        marker,
        set_style(settings)
    );
    for item in items {
        out.push_str("<li class=\"inline-flex flex-col items-center\">");
        let link = if clone { None } else { item.filled_link() };
        match link.and_then(|l| l.href().map(|h| (l, escape_html(h)))) {
            Some((link, href)) => {
                let target = link
                    .target
                    .as_deref()
                    .map(|t| format!(" target=\"{}\" rel=\"noopener noreferrer\"", escape_html(t)))
                    .unwrap_or_default();
                let _ = write!(
                    out,
                    "<a href=\"{}\"{} class=\"inline-flex flex-col items-center no-underline\">",
                    href, target
                );
                write_figure(out, item, settings);
                out.push_str("</a>");
            }
            _ => {
                out.push_str("<div class=\"inline-flex flex-col items-center\">");
                write_figure(out, item, settings);
                out.push_str("</div>");
            }
        }
        out.push_str("</li>");
    }
    out.push_str("</ul>");
}

/// Full-bleed viewport, animated track, base set, gap spacer and clone.
pub fn strip_html(items: &[&MarqueeItem], settings: &TickerSettings) -> String {
    let mut out = String::with_capacity(512 + items.len() * 512);
    out.push_str(
        "<div class=\"overflow-hidden\" style=\"width: 100vw; margin-left: calc(50% - 50vw); \
         margin-right: calc(50% - 50vw)\">",
    );
    let _ = write!(
        out,
        "<div class=\"hotc-marquee flex w-max items-center py-4 md:py-6\" {} \
         style=\"touch-action: pan-y; cursor: grab\">",
        TRACK_ATTR
    );
    write_set(&mut out, items, settings, false);
    let _ = write!(
        out,
        "<div aria-hidden=\"true\" class=\"shrink-0\" style=\"width: var({})\"></div>",
        VAR_MARQUEE_GAP
    );
    write_set(&mut out, items, settings, true);
    out.push_str("</div></div>");
    out
}

/// Plain-text banner message for an empty ticker.
pub fn diagnostic_message(counts: SourceCounts, eligibility: Eligibility) -> String {
    let missing = if eligibility.require_link {
        "missing image or link"
    } else {
        "missing image"
    };
    format!(
        "ImageTicker: no valid items ({}). Count slice.items: {} · Count primary.items: {}",
        missing, counts.repeat_zone, counts.primary_group
    )
}

pub fn diagnostic_html(counts: SourceCounts, eligibility: Eligibility) -> String {
    format!(
        "<div {} role=\"status\" class=\"mx-auto max-w-screen-md rounded bg-red-50 p-4 text-red-700\">{}</div>",
        DIAGNOSTIC_ATTR,
        escape_html(&diagnostic_message(counts, eligibility))
    )
}
