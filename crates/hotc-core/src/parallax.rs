//! Viewport-relative parallax offsets.
//!
//! The engine is pure: the browser layer feeds it element and pointer
//! positions (already coalesced to one per frame) and reads back the
//! transform to apply. It never observes anything on its own.

use glam::Vec2;
use serde::Deserialize;

use crate::constants::{
    HERO_MAX_OFFSET, HERO_POINTER_X, HERO_POINTER_Y, HERO_SCALE, PARALLAX_MAX_OFFSET,
    PARALLAX_POINTER_MIN_WIDTH, PARALLAX_SCALE, PARALLAX_STRENGTH,
};
use crate::error::ContentError;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParallaxMode {
    #[default]
    Scroll,
    #[serde(alias = "mouse")]
    Pointer,
    Both,
}

impl ParallaxMode {
    #[inline]
    pub fn uses_scroll(self) -> bool {
        matches!(self, ParallaxMode::Scroll | ParallaxMode::Both)
    }
    #[inline]
    pub fn uses_pointer(self) -> bool {
        matches!(self, ParallaxMode::Pointer | ParallaxMode::Both)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ParallaxConfig {
    /// Pixels moved per pixel of distance from the viewport center.
    pub strength: f32,
    /// Clamp for the scroll-driven vertical offset.
    pub max_offset: f32,
    /// Maximum pointer-driven offset per axis.
    pub pointer_strength: Vec2,
    pub mode: ParallaxMode,
    /// Applied after translation; 0 disables the scale clause.
    pub scale_factor: f32,
    pub respect_reduced_motion: bool,
    /// Pointer parallax is skipped on viewports narrower than this (0 = never).
    pub pointer_disable_below_width: i32,
}

impl Default for ParallaxConfig {
    fn default() -> Self {
        Self {
            strength: PARALLAX_STRENGTH,
            max_offset: PARALLAX_MAX_OFFSET,
            pointer_strength: Vec2::ZERO,
            mode: ParallaxMode::Scroll,
            scale_factor: PARALLAX_SCALE,
            respect_reduced_motion: true,
            pointer_disable_below_width: PARALLAX_POINTER_MIN_WIDTH,
        }
    }
}

impl ParallaxConfig {
    /// Full-bleed hero backgrounds: gentle scroll drift plus pointer sway.
    pub fn hero() -> Self {
        Self {
            max_offset: HERO_MAX_OFFSET,
            pointer_strength: Vec2::new(HERO_POINTER_X, HERO_POINTER_Y),
            mode: ParallaxMode::Both,
            scale_factor: HERO_SCALE,
            ..Self::default()
        }
    }

    pub fn from_json(json: &str) -> Result<Self, ContentError> {
        let opts: ParallaxOptions = serde_json::from_str(json)?;
        Ok(opts.into())
    }

    /// Reads a `data-hotc-parallax` attribute value: empty for defaults, a
    /// preset name, or an options object.
    pub fn from_attribute(value: &str) -> Result<Self, ContentError> {
        let value = value.trim();
        match value {
            "" => Ok(Self::default()),
            "hero" => Ok(Self::hero()),
            v if v.starts_with('{') => Self::from_json(v),
            other => Err(ContentError::UnknownPreset(other.to_string())),
        }
    }

    /// Vertical offset for an element whose box starts `element.top` px below
    /// the viewport top.
    pub fn scroll_offset(&self, viewport_height: f32, element: ElementBox) -> f32 {
        let element_center = element.top + element.height / 2.0;
        let viewport_center = viewport_height / 2.0;
        let raw = (viewport_center - element_center) * self.strength;
        // authored limits may be negative; min/max also absorb NaN
        let limit = self.max_offset.abs();
        raw.max(-limit).min(limit)
    }

    /// Pointer-driven offset; each axis stays within its strength.
    pub fn pointer_offset(&self, viewport: Viewport, pointer: Vec2) -> Vec2 {
        let w = if viewport.width > 0.0 { viewport.width } else { 1.0 };
        let h = if viewport.height > 0.0 { viewport.height } else { 1.0 };
        let center = Vec2::new(w / 2.0, h / 2.0);
        let normalized = (pointer - center) / center;
        let max = self.pointer_strength.max(Vec2::ZERO);
        (normalized * max).clamp(-max, max)
    }

    /// Which listeners a mount needs for a viewport of the given width.
    pub fn listener_plan(&self, viewport_width: f32) -> ListenerPlan {
        let wide_enough = self.pointer_disable_below_width <= 0
            || viewport_width >= self.pointer_disable_below_width as f32;
        let has_strength = self.pointer_strength.x != 0.0 || self.pointer_strength.y != 0.0;
        ListenerPlan {
            scroll: self.mode.uses_scroll(),
            pointer: self.mode.uses_pointer() && wide_enough && has_strength,
        }
    }
}

/// JSON form of [`ParallaxConfig`], using the option names content authors
/// already know.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ParallaxOptions {
    pub strength: Option<f32>,
    pub max: Option<f32>,
    pub pointer_strength: Option<PointerStrength>,
    pub mode: Option<ParallaxMode>,
    pub scale: Option<f32>,
    pub respect_reduced_motion: Option<bool>,
    pub disable_pointer_below: Option<i32>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(untagged)]
pub enum PointerStrength {
    Uniform(f32),
    Axes {
        #[serde(default)]
        x: Option<f32>,
        #[serde(default)]
        y: Option<f32>,
    },
}

impl From<PointerStrength> for Vec2 {
    fn from(p: PointerStrength) -> Self {
        match p {
            PointerStrength::Uniform(v) => Vec2::splat(v),
            PointerStrength::Axes { x, y } => Vec2::new(x.unwrap_or(0.0), y.unwrap_or(0.0)),
        }
    }
}

impl From<ParallaxOptions> for ParallaxConfig {
    fn from(o: ParallaxOptions) -> Self {
        let d = ParallaxConfig::default();
        Self {
            strength: o.strength.unwrap_or(d.strength),
            max_offset: o.max.unwrap_or(d.max_offset),
            pointer_strength: o.pointer_strength.map(Vec2::from).unwrap_or(d.pointer_strength),
            mode: o.mode.unwrap_or(d.mode),
            scale_factor: o.scale.unwrap_or(d.scale_factor),
            respect_reduced_motion: o.respect_reduced_motion.unwrap_or(d.respect_reduced_motion),
            pointer_disable_below_width: o
                .disable_pointer_below
                .unwrap_or(d.pointer_disable_below_width),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Vertical extent of the observed element in viewport coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ElementBox {
    pub top: f32,
    pub height: f32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ListenerPlan {
    pub scroll: bool,
    pub pointer: bool,
}

/// Current offsets of one mount.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ParallaxState {
    pub scroll_offset_y: f32,
    pub pointer_offset: Vec2,
}

impl ParallaxState {
    #[inline]
    pub fn translation(&self) -> Vec2 {
        Vec2::new(
            self.pointer_offset.x,
            self.scroll_offset_y + self.pointer_offset.y,
        )
    }

    pub fn transform_css(&self, scale_factor: f32) -> String {
        let t = self.translation();
        // + 0.0 folds -0.0 so an idle element reads "0.0px".
        let mut css = format!("translate3d({:.1}px, {:.1}px, 0)", t.x + 0.0, t.y + 0.0);
        if scale_factor != 0.0 {
            css.push_str(&format!(" scale({})", scale_factor));
        }
        css
    }
}

/// Platform facts sampled at attach time.
#[derive(Clone, Copy, Debug, Default)]
pub struct Environment {
    pub viewport: Viewport,
    pub prefers_reduced_motion: bool,
}

pub struct ParallaxEngine {
    config: ParallaxConfig,
    state: ParallaxState,
    enabled: bool,
    plan: ListenerPlan,
}

impl ParallaxEngine {
    /// Start a mount. With reduced motion requested the engine is inert for
    /// its whole life: no listeners and a transform frozen at zero.
    pub fn attach(config: ParallaxConfig, env: Environment) -> Self {
        let enabled = !(config.respect_reduced_motion && env.prefers_reduced_motion);
        let plan = if enabled {
            config.listener_plan(env.viewport.width)
        } else {
            ListenerPlan::default()
        };
        Self {
            config,
            state: ParallaxState::default(),
            enabled,
            plan,
        }
    }

    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    #[inline]
    pub fn plan(&self) -> ListenerPlan {
        self.plan
    }

    #[inline]
    pub fn config(&self) -> &ParallaxConfig {
        &self.config
    }

    #[inline]
    pub fn state(&self) -> ParallaxState {
        self.state
    }

    /// Returns true when the offset changed.
    pub fn update_scroll(&mut self, viewport_height: f32, element: ElementBox) -> bool {
        if !self.enabled {
            return false;
        }
        let y = self.config.scroll_offset(viewport_height, element);
        let changed = y != self.state.scroll_offset_y;
        self.state.scroll_offset_y = y;
        changed
    }

    /// Returns true when the offset changed.
    pub fn update_pointer(&mut self, viewport: Viewport, pointer: Vec2) -> bool {
        if !self.enabled || !self.plan.pointer {
            return false;
        }
        let p = self.config.pointer_offset(viewport, pointer);
        let changed = p != self.state.pointer_offset;
        self.state.pointer_offset = p;
        changed
    }

    pub fn transform(&self) -> String {
        self.state.transform_css(self.config.scale_factor)
    }
}
