use crate::constants::{TICKER_DIAGNOSTIC_CLASS, TICKER_SLICE_TYPE};
use hotc_core::markup;
use hotc_core::{Eligibility, SourceCounts};
use web_sys as web;

/// Replace the section with the authoring banner for an empty ticker.
pub fn show_diagnostic(section: &web::HtmlElement, counts: SourceCounts, eligibility: Eligibility) {
    section.set_inner_html(&markup::diagnostic_html(counts, eligibility));
    _ = section.set_attribute("data-slice-type", TICKER_SLICE_TYPE);
    _ = section.class_list().add_1(TICKER_DIAGNOSTIC_CLASS);
    reveal(section);
    log::warn!(
        "[ticker] {}",
        markup::diagnostic_message(counts, eligibility)
    );
}

#[inline]
pub fn hide(section: &web::HtmlElement) {
    section.set_inner_html("");
    section.set_hidden(true);
    // fallback for stylesheets that override [hidden]
    _ = section.set_attribute("style", "display:none");
}

/// Undo [`hide`] when a section is mounted again with content.
pub fn reveal(section: &web::HtmlElement) {
    section.set_hidden(false);
    _ = section.style().remove_property("display");
}
