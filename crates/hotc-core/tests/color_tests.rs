// Host-side tests for caption colour parsing and contrast selection.

use hotc_core::*;

#[test]
fn parses_hex_shorthand_and_full() {
    assert_eq!(parse_color("#abc"), Ok(Rgb::new(0xaa, 0xbb, 0xcc)));
    assert_eq!(parse_color("#1E90FF"), Ok(Rgb::new(30, 144, 255)));
    assert_eq!(parse_color("  #000000 "), Ok(Rgb::new(0, 0, 0)));
}

#[test]
fn rejects_malformed_hex() {
    assert!(matches!(parse_color("#12345"), Err(ColorError::BadHex(_))));
    assert!(matches!(parse_color("#ggg"), Err(ColorError::BadHex(_))));
    assert!(matches!(parse_color("#"), Err(ColorError::BadHex(_))));
}

#[test]
fn parses_rgb_and_rgba_functions() {
    assert_eq!(parse_color("rgb(10, 10, 10)"), Ok(Rgb::new(10, 10, 10)));
    assert_eq!(parse_color("RGBA(255,255,255,0.5)"), Ok(Rgb::new(255, 255, 255)));
    assert_eq!(parse_color("rgba(1, 2, 3, .25)"), Ok(Rgb::new(1, 2, 3)));
    assert_eq!(parse_color("rgb(300, 0, 0)"), Ok(Rgb::new(255, 0, 0)));
}

#[test]
fn rejects_malformed_rgb_functions() {
    for bad in ["rgb(1,2)", "rgb(1,2,3", "rgba(1,2,3,50%)", "rgb(a,b,c)", "rgb(1,2,3,4,5)"] {
        assert!(
            matches!(parse_color(bad), Err(ColorError::BadRgb(_))),
            "accepted {bad}"
        );
    }
}

#[test]
fn names_and_blanks_are_not_colours() {
    assert_eq!(parse_color("   "), Err(ColorError::Empty));
    assert!(matches!(
        parse_color("brand-dark"),
        Err(ColorError::Unsupported(_))
    ));
}

#[test]
fn mid_grey_counts_as_light() {
    let grey = Rgb::new(128, 128, 128);
    assert!((grey.yiq() - 128.0).abs() < 1e-3);
    assert!(grey.is_light());
    assert!(!Rgb::new(127, 127, 127).is_light());
}

#[test]
fn auto_colour_contrasts_with_background() {
    assert_eq!(auto_text_color(Some("#000000")), Some(LABEL_ON_DARK));
    assert_eq!(auto_text_color(Some("#FFFFFF")), Some(LABEL_ON_LIGHT));
    assert_eq!(auto_text_color(Some("rgb(10,10,10)")), Some("#FFFFFF"));
    assert_eq!(auto_text_color(Some("#ffe")), Some("#111111"));
    assert_eq!(auto_text_color(Some("brand-dark")), None);
    assert_eq!(auto_text_color(None), None);
}

#[test]
fn manual_colour_beats_auto_mode() {
    assert_eq!(
        resolve_label_color(Some("auto"), Some("#ff0000"), Some("#000")),
        Some("#ff0000".to_string())
    );
    assert_eq!(
        resolve_label_color(None, Some(" tomato "), None),
        Some("tomato".to_string())
    );
}

#[test]
fn auto_is_requested_by_mode_or_value() {
    assert_eq!(
        resolve_label_color(Some("auto"), None, Some("#fff")),
        Some(LABEL_ON_LIGHT.to_string())
    );
    assert_eq!(
        resolve_label_color(None, Some("AUTO"), Some("#000")),
        Some(LABEL_ON_DARK.to_string())
    );
    // auto without a readable background leaves the default styling
    assert_eq!(resolve_label_color(Some("auto"), None, Some("var(--bg)")), None);
}

#[test]
fn nothing_set_means_no_override() {
    assert_eq!(resolve_label_color(None, None, Some("#000")), None);
    assert_eq!(resolve_label_color(Some("manual"), Some("  "), Some("#000")), None);
}
