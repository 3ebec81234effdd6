//! Loop geometry for the image ticker.
//!
//! The strip is drawn as two copies of the item set with a gap spacer in
//! between. Animating the track from `start` to `end` over `speed` seconds
//! moves it by exactly one set plus one gap, so restarting at `start` lands
//! the second copy where the first one began.

use serde::Deserialize;

use crate::constants::{
    TICKER_AUTO_GAP_RATIO, TICKER_MIN_AUTO_GAP_PX, VAR_MARQUEE_END, VAR_MARQUEE_GAP,
    VAR_MARQUEE_SPEED, VAR_MARQUEE_START,
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Left,
    Right,
}

impl Direction {
    /// Lenient CMS reading: only `right` means right.
    pub fn from_cms(value: Option<&str>) -> Self {
        match value {
            Some(v) if v.trim().eq_ignore_ascii_case("right") => Direction::Right,
            _ => Direction::Left,
        }
    }

    #[inline]
    pub fn sign(self) -> f32 {
        match self {
            Direction::Left => -1.0,
            Direction::Right => 1.0,
        }
    }
}

/// Space between the end of one copy and the start of the next.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum StripGap {
    /// Percentage of viewport width.
    ViewportPercent(f32),
    Pixels(f32),
    /// Half the viewport, never below the minimum.
    Auto,
}

impl StripGap {
    /// Author overrides in priority order; invalid values fall through.
    pub fn resolve(vw: Option<f32>, px: Option<f32>) -> Self {
        let usable = |v: Option<f32>| v.filter(|v| v.is_finite() && *v >= 0.0);
        if let Some(vw) = usable(vw) {
            StripGap::ViewportPercent(vw)
        } else if let Some(px) = usable(px) {
            StripGap::Pixels(px)
        } else {
            StripGap::Auto
        }
    }

    pub fn to_px(self, container_width_px: f32) -> f32 {
        match self {
            StripGap::ViewportPercent(vw) => container_width_px * vw / 100.0,
            StripGap::Pixels(px) => px,
            StripGap::Auto => (container_width_px * TICKER_AUTO_GAP_RATIO).max(TICKER_MIN_AUTO_GAP_PX),
        }
    }

    /// Width for the spacer element. Viewport gaps stay in `vw` so the spacer
    /// tracks the viewport between measurements.
    pub fn css_value(self, container_width_px: f32) -> String {
        match self {
            StripGap::ViewportPercent(vw) => format!("{}vw", vw),
            other => format!("{}px", other.to_px(container_width_px)),
        }
    }
}

/// Animation parameters derived from one measurement of the strip.
#[derive(Clone, Debug, PartialEq)]
pub struct MarqueeGeometry {
    pub base_width_px: f32,
    pub container_width_px: f32,
    pub start_offset_px: f32,
    pub end_offset_px: f32,
    pub gap_px: f32,
    pub speed_seconds: f32,
    pub direction: Direction,
    gap_css: String,
}

impl MarqueeGeometry {
    pub fn compute(
        base_width_px: f32,
        container_width_px: f32,
        gap: StripGap,
        speed_seconds: f32,
        direction: Direction,
    ) -> Self {
        let start_offset_px = (container_width_px - base_width_px) / 2.0;
        let gap_px = gap.to_px(container_width_px);
        let end_offset_px = start_offset_px + direction.sign() * (base_width_px + gap_px);
        Self {
            base_width_px,
            container_width_px,
            start_offset_px,
            end_offset_px,
            gap_px,
            speed_seconds,
            direction,
            gap_css: gap.css_value(container_width_px),
        }
    }

    /// Distance travelled per loop: one item set plus one gap.
    #[inline]
    pub fn loop_distance(&self) -> f32 {
        self.base_width_px + self.gap_px
    }

    #[inline]
    pub fn offsets(&self) -> LiveOffsets {
        LiveOffsets {
            start_px: self.start_offset_px,
            end_px: self.end_offset_px,
        }
    }

    /// Custom properties consumed by the keyframes, in write order.
    pub fn css_vars(&self) -> [(&'static str, String); 4] {
        let o = self.offsets();
        [
            (VAR_MARQUEE_START, px(o.start_px)),
            (VAR_MARQUEE_END, px(o.end_px)),
            (VAR_MARQUEE_SPEED, format!("{}s", self.speed_seconds)),
            (VAR_MARQUEE_GAP, self.gap_css.clone()),
        ]
    }
}

/// Start/end keyframe positions currently applied to the track.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LiveOffsets {
    pub start_px: f32,
    pub end_px: f32,
}

impl LiveOffsets {
    #[inline]
    pub fn shifted(self, dx: f32) -> Self {
        Self {
            start_px: self.start_px + dx,
            end_px: self.end_px + dx,
        }
    }

    pub fn css_vars(&self) -> [(&'static str, String); 2] {
        [
            (VAR_MARQUEE_START, px(self.start_px)),
            (VAR_MARQUEE_END, px(self.end_px)),
        ]
    }
}

#[inline]
pub fn px(v: f32) -> String {
    format!("{}px", v)
}

