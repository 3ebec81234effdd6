//! Decoding of the ticker slice JSON into one validated shape.
//!
//! Ticker items can be authored in either the repeatable zone (`items`) or a
//! group inside `primary` (`primary.items`). Both are read here, once, and
//! everything downstream sees a single list plus the raw counts.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::color::resolve_label_color;
use crate::constants::TICKER_DEFAULT_SPEED_SEC;
use crate::error::ContentError;
use crate::items::{Eligibility, ItemSize, MarqueeItem};
use crate::marquee::{Direction, StripGap};

/// Numbers typed into the CMS may arrive as numbers, numeric strings or null.
fn lenient_f32<'de, D: Deserializer<'de>>(d: D) -> Result<Option<f32>, D::Error> {
    Ok(match Option::<Value>::deserialize(d)? {
        Some(Value::Number(n)) => n.as_f64().map(|f| f as f32),
        Some(Value::String(s)) => s.trim().parse::<f32>().ok(),
        _ => None,
    })
}

/// Only real booleans count; anything else reads as unset.
fn explicit_false<'de, D: Deserializer<'de>>(d: D) -> Result<Option<bool>, D::Error> {
    Ok(match Option::<Value>::deserialize(d)? {
        Some(Value::Bool(b)) => Some(b),
        _ => None,
    })
}

fn lenient_bool<'de, D: Deserializer<'de>>(d: D) -> Result<bool, D::Error> {
    Ok(matches!(Option::<Value>::deserialize(d)?, Some(Value::Bool(true))))
}

fn lenient_string<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
    Ok(match Option::<Value>::deserialize(d)? {
        Some(Value::String(s)) => Some(s),
        _ => None,
    })
}

fn lenient_policy<'de, D: Deserializer<'de>>(d: D) -> Result<Option<EmptyPolicy>, D::Error> {
    let Some(v) = Option::<Value>::deserialize(d)?.filter(|v| !v.is_null()) else {
        return Ok(None);
    };
    match EmptyPolicy::deserialize(&v) {
        Ok(p) => Ok(Some(p)),
        Err(e) => {
            log::warn!("[ticker] empty_policy {} ignored: {}", v, e);
            Ok(None)
        }
    }
}

/// A malformed entry decodes as an empty item so it is filtered out like
/// any other unfilled one, and the raw counts stay honest.
fn lenient_items<'de, D: Deserializer<'de>>(d: D) -> Result<Option<Vec<MarqueeItem>>, D::Error> {
    let Some(Value::Array(values)) = Option::<Value>::deserialize(d)? else {
        return Ok(None);
    };
    let items = values
        .into_iter()
        .enumerate()
        .map(|(i, v)| {
            MarqueeItem::deserialize(v).unwrap_or_else(|e| {
                log::warn!("[ticker] item {} unreadable, skipped: {}", i, e);
                MarqueeItem::default()
            })
        })
        .collect();
    Ok(Some(items))
}

/// What to draw when no item survives filtering.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmptyPolicy {
    /// A visible banner with the raw item counts, for content authors.
    #[default]
    Diagnostic,
    #[serde(alias = "none")]
    Hidden,
}

/// Slice-level scalars, named as in the content model.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct TickerPrimary {
    #[serde(deserialize_with = "lenient_f32")]
    pub speed_sec: Option<f32>,
    #[serde(deserialize_with = "lenient_string")]
    pub direction: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub item_size: Option<String>,
    #[serde(deserialize_with = "explicit_false")]
    pub pause_on_hover: Option<bool>,
    #[serde(deserialize_with = "lenient_f32")]
    pub image_gap_px: Option<f32>,
    #[serde(deserialize_with = "lenient_f32")]
    pub strip_gap_vw: Option<f32>,
    #[serde(deserialize_with = "lenient_f32")]
    pub strip_gap_px: Option<f32>,
    #[serde(deserialize_with = "lenient_string")]
    pub bg_color: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub text_color_mode: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub subtitle_color_mode: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub text_color: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub text_color_hex: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub subtitle_color: Option<String>,
    #[serde(deserialize_with = "lenient_bool")]
    pub require_link_for_display: bool,
    #[serde(deserialize_with = "lenient_policy")]
    pub empty_policy: Option<EmptyPolicy>,
    #[serde(deserialize_with = "lenient_items")]
    pub items: Option<Vec<MarqueeItem>>,
}

/// The slice as stored in the CMS.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct RawTickerSlice {
    #[serde(deserialize_with = "lenient_items")]
    pub items: Option<Vec<MarqueeItem>>,
    pub primary: TickerPrimary,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SourceCounts {
    pub repeat_zone: usize,
    pub primary_group: usize,
}

/// Resolved behavior settings for one ticker mount.
#[derive(Clone, Debug, PartialEq)]
pub struct TickerSettings {
    pub speed_seconds: f32,
    pub direction: Direction,
    pub item_size: ItemSize,
    pub pause_on_hover: bool,
    /// Spacing between items inside one set; stylesheet default when `None`.
    pub image_gap_px: Option<f32>,
    pub strip_gap: StripGap,
    pub background: Option<String>,
    pub label_color: Option<String>,
    pub eligibility: Eligibility,
    pub empty_policy: EmptyPolicy,
}

impl Default for TickerSettings {
    fn default() -> Self {
        TickerPrimary::default().settings()
    }
}

impl TickerPrimary {
    pub fn settings(&self) -> TickerSettings {
        let speed_seconds = self
            .speed_sec
            .filter(|s| s.is_finite() && *s > 0.0)
            .unwrap_or(TICKER_DEFAULT_SPEED_SEC);
        let mode = self
            .text_color_mode
            .as_deref()
            .filter(|m| !m.is_empty())
            .or(self.subtitle_color_mode.as_deref());
        let raw_color = self
            .text_color
            .as_deref()
            .or(self.text_color_hex.as_deref())
            .or(self.subtitle_color.as_deref());
        let background = self
            .bg_color
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map(str::to_string);
        TickerSettings {
            speed_seconds,
            direction: Direction::from_cms(self.direction.as_deref()),
            item_size: ItemSize::from_cms(self.item_size.as_deref()),
            pause_on_hover: self.pause_on_hover != Some(false),
            image_gap_px: self.image_gap_px.filter(|g| g.is_finite() && *g > 0.0),
            strip_gap: StripGap::resolve(self.strip_gap_vw, self.strip_gap_px),
            label_color: resolve_label_color(mode, raw_color, background.as_deref()),
            background,
            eligibility: Eligibility {
                require_link: self.require_link_for_display,
            },
            empty_policy: self.empty_policy.unwrap_or_default(),
        }
    }
}

/// A ticker slice after normalization.
#[derive(Clone, Debug, PartialEq)]
pub struct TickerContent {
    pub items: Vec<MarqueeItem>,
    pub sources: SourceCounts,
    pub settings: TickerSettings,
}

/// What the ticker should draw.
#[derive(Debug, PartialEq)]
pub enum TickerView<'a> {
    Strip(Vec<&'a MarqueeItem>),
    Diagnostic(SourceCounts),
    Hidden,
}

impl TickerContent {
    pub fn from_json(json: &str) -> Result<Self, ContentError> {
        let raw: RawTickerSlice = serde_json::from_str(json)?;
        Ok(Self::from_raw(raw))
    }

    pub fn from_raw(raw: RawTickerSlice) -> Self {
        let settings = raw.primary.settings();
        let repeat = raw.items.unwrap_or_default();
        let mut primary = raw.primary;
        let group = primary.items.take().unwrap_or_default();
        let sources = SourceCounts {
            repeat_zone: repeat.len(),
            primary_group: group.len(),
        };
        // The repeat zone usually exists as [] even when unused, so the
        // group wins whenever it has anything in it.
        let items = if group.is_empty() { repeat } else { group };
        log::debug!(
            "[ticker] content: {} items (repeat zone {}, primary group {})",
            items.len(),
            sources.repeat_zone,
            sources.primary_group
        );
        Self {
            items,
            sources,
            settings,
        }
    }

    pub fn eligible(&self) -> Vec<&MarqueeItem> {
        self.settings.eligibility.filter(&self.items)
    }

    pub fn view(&self) -> TickerView<'_> {
        let eligible = self.eligible();
        if !eligible.is_empty() {
            return TickerView::Strip(eligible);
        }
        match self.settings.empty_policy {
            EmptyPolicy::Diagnostic => TickerView::Diagnostic(self.sources),
            EmptyPolicy::Hidden => TickerView::Hidden,
        }
    }
}
