// Host-side tests for the generated strip and banner HTML.

use hotc_core::markup::{diagnostic_html, escape_html, strip_html};
use hotc_core::*;

fn item(url: &str, href: Option<&str>, caption: Option<&str>) -> MarqueeItem {
    MarqueeItem {
        image: Some(ImageRef {
            url: Some(url.to_string()),
            alt: None,
        }),
        link: href.map(|h| LinkRef {
            url: Some(h.to_string()),
            target: None,
        }),
        subtitle: caption.map(str::to_string),
        size: None,
        contain: false,
    }
}

#[test]
fn strip_has_base_set_spacer_and_unlinked_clone() {
    let a = item("https://img/a.png", Some("https://a.example"), Some("Alpha"));
    let b = item("https://img/b.png", None, None);
    let html = strip_html(&[&a, &b], &TickerSettings::default());

    assert_eq!(html.matches(TRACK_ATTR).count(), 1);
    assert_eq!(html.matches(BASE_SET_ATTR).count(), 1);
    assert_eq!(html.matches("<ul").count(), 2);
    assert_eq!(html.matches("<img").count(), 4);
    // only the base copy is focusable
    assert_eq!(html.matches("<a ").count(), 1);
    assert!(html.contains("var(--marquee-gap)"));
    assert!(html.contains("<ul class=\"flex w-max items-center gap-6 md:gap-8\" role=\"list\" aria-hidden=\"true\">"));

    let clone_start = html.rfind("<ul").unwrap();
    assert!(!html[clone_start..].contains("href"));
}

#[test]
fn links_open_targets_safely() {
    let mut a = item("https://img/a.png", Some("https://a.example"), None);
    if let Some(link) = a.link.as_mut() {
        link.target = Some("_blank".to_string());
    }
    let html = strip_html(&[&a], &TickerSettings::default());
    assert!(html.contains("href=\"https://a.example\" target=\"_blank\" rel=\"noopener noreferrer\""));
}

#[test]
fn script_links_render_as_plain_items() {
    let a = item("https://img/a.png", Some("  JavaScript:alert(1)"), None);
    let html = strip_html(&[&a], &TickerSettings::default());
    assert!(!html.contains("<a "));
    assert!(!html.to_ascii_lowercase().contains("javascript:"));
    assert_eq!(html.matches("<img").count(), 2);
}

#[test]
fn author_text_is_escaped() {
    let a = item("https://img/a.png?x=1&y=\"2\"", None, Some("<b>Tom & Jerry</b>"));
    let html = strip_html(&[&a], &TickerSettings::default());
    assert!(html.contains("&lt;b&gt;Tom &amp; Jerry&lt;/b&gt;"));
    assert!(html.contains("src=\"https://img/a.png?x=1&amp;y=&quot;2&quot;\""));
    assert!(!html.contains("<b>"));
}

#[test]
fn settings_flow_into_styles_and_classes() {
    let mut a = item("https://img/a.png", None, Some("Alpha"));
    a.contain = true;
    let settings = TickerSettings {
        item_size: ItemSize::Lg,
        image_gap_px: Some(12.0),
        label_color: Some(LABEL_ON_LIGHT.to_string()),
        ..TickerSettings::default()
    };
    let html = strip_html(&[&a], &settings);
    assert!(html.contains(ItemSize::Lg.image_classes()));
    assert!(html.contains("object-contain"));
    assert!(html.contains("style=\"gap: 12px\""));
    assert!(html.contains("style=\"color: #111111\""));
}

#[test]
fn per_item_size_overrides_slice_size() {
    let mut a = item("https://img/a.png", None, None);
    a.size = Some(ItemSize::Sm);
    let html = strip_html(&[&a], &TickerSettings::default());
    assert!(html.contains(ItemSize::Sm.image_classes()));
    assert!(!html.contains(ItemSize::Md.image_classes()));
}

#[test]
fn diagnostic_banner_mentions_links_when_required() {
    let counts = SourceCounts {
        repeat_zone: 3,
        primary_group: 2,
    };
    let html = diagnostic_html(counts, Eligibility { require_link: true });
    assert!(html.contains(DIAGNOSTIC_ATTR));
    assert!(html.contains("role=\"status\""));
    assert!(html.contains(
        "ImageTicker: no valid items (missing image or link). Count slice.items: 3 · Count primary.items: 2"
    ));
}

#[test]
fn escape_html_covers_attribute_breakers() {
    assert_eq!(escape_html(r#"<a href='x'>"&"</a>"#), "&lt;a href=&#39;x&#39;&gt;&quot;&amp;&quot;&lt;/a&gt;");
    assert_eq!(escape_html("plain"), "plain");
}
