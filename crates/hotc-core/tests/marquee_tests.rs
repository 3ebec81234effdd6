// Host-side tests for ticker loop geometry and gap resolution.

use hotc_core::*;

#[test]
fn left_loop_moves_one_set_plus_gap() {
    let g = MarqueeGeometry::compute(800.0, 1200.0, StripGap::Pixels(100.0), 30.0, Direction::Left);
    assert_eq!(g.start_offset_px, 200.0);
    assert_eq!(g.end_offset_px, -700.0);
    assert_eq!(g.loop_distance(), 900.0);
    assert_eq!((g.start_offset_px - g.end_offset_px).abs(), g.loop_distance());
}

#[test]
fn right_loop_mirrors_left() {
    let g = MarqueeGeometry::compute(800.0, 1200.0, StripGap::Pixels(100.0), 30.0, Direction::Right);
    assert_eq!(g.start_offset_px, 200.0);
    assert_eq!(g.end_offset_px, 1100.0);
}

#[test]
fn css_vars_are_written_in_keyframe_order() {
    let g = MarqueeGeometry::compute(800.0, 1200.0, StripGap::Pixels(100.0), 30.0, Direction::Left);
    let vars = g.css_vars();
    let names: Vec<&str> = vars.iter().map(|(name, _)| *name).collect();
    assert_eq!(
        names,
        [VAR_MARQUEE_START, VAR_MARQUEE_END, VAR_MARQUEE_SPEED, VAR_MARQUEE_GAP]
    );
    assert_eq!(vars[0].1, "200px");
    assert_eq!(vars[1].1, "-700px");
    assert_eq!(vars[2].1, "30s");
    assert_eq!(vars[3].1, "100px");
}

#[test]
fn viewport_gap_stays_in_vw_for_the_spacer() {
    let g = MarqueeGeometry::compute(
        600.0,
        1000.0,
        StripGap::ViewportPercent(10.0),
        20.0,
        Direction::Left,
    );
    assert_eq!(g.gap_px, 100.0);
    assert_eq!(g.css_vars()[3].1, "10vw");
}

#[test]
fn gap_overrides_resolve_in_priority_order() {
    assert_eq!(
        StripGap::resolve(Some(10.0), Some(50.0)),
        StripGap::ViewportPercent(10.0)
    );
    assert_eq!(StripGap::resolve(None, Some(50.0)), StripGap::Pixels(50.0));
    assert_eq!(StripGap::resolve(Some(-1.0), Some(50.0)), StripGap::Pixels(50.0));
    assert_eq!(StripGap::resolve(Some(f32::NAN), None), StripGap::Auto);
    assert_eq!(StripGap::resolve(None, None), StripGap::Auto);
    // zero is a real choice, not "unset"
    assert_eq!(StripGap::resolve(None, Some(0.0)), StripGap::Pixels(0.0));
}

#[test]
fn auto_gap_is_half_the_viewport_with_a_floor() {
    assert_eq!(StripGap::Auto.to_px(1000.0), 500.0);
    assert_eq!(StripGap::Auto.to_px(100.0), TICKER_MIN_AUTO_GAP_PX);
    assert_eq!(StripGap::Auto.css_value(100.0), "64px");
}

#[test]
fn live_offsets_shift_together() {
    let o = LiveOffsets {
        start_px: 200.0,
        end_px: -700.0,
    }
    .shifted(-25.0);
    assert_eq!(o.start_px, 175.0);
    assert_eq!(o.end_px, -725.0);
    assert_eq!(o.css_vars()[0], (VAR_MARQUEE_START, "175px".to_string()));
    assert_eq!(o.css_vars()[1], (VAR_MARQUEE_END, "-725px".to_string()));
}

#[test]
fn direction_reads_leniently() {
    assert_eq!(Direction::from_cms(Some("right")), Direction::Right);
    assert_eq!(Direction::from_cms(Some(" RIGHT ")), Direction::Right);
    assert_eq!(Direction::from_cms(Some("up")), Direction::Left);
    assert_eq!(Direction::from_cms(None), Direction::Left);
}

