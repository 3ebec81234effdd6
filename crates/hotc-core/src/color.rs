//! Caption colour selection for tickers drawn over an authored background.
//!
//! Only the notations authors actually type into the CMS are understood:
//! `#rgb`, `#rrggbb`, `rgb(r, g, b)` and `rgba(r, g, b, a)`. Anything else is
//! reported as an error by [`parse_color`] and treated as "no colour" by the
//! higher level helpers so the caption keeps its stylesheet default.

use crate::constants::{LABEL_ON_DARK, LABEL_ON_LIGHT, YIQ_LIGHT_THRESHOLD};
use crate::error::ColorError;

/// An sRGB triple with 8-bit channels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Perceived brightness using the YIQ weighting, in `0.0..=255.0`.
    #[inline]
    pub fn yiq(self) -> f32 {
        (self.r as f32 * 299.0 + self.g as f32 * 587.0 + self.b as f32 * 114.0) / 1000.0
    }

    #[inline]
    pub fn is_light(self) -> bool {
        self.yiq() >= YIQ_LIGHT_THRESHOLD
    }
}

pub fn parse_color(input: &str) -> Result<Rgb, ColorError> {
    let s = input.trim();
    if s.is_empty() {
        return Err(ColorError::Empty);
    }
    if let Some(hex) = s.strip_prefix('#') {
        return parse_hex(hex);
    }
    if s.get(..3).is_some_and(|p| p.eq_ignore_ascii_case("rgb")) {
        return parse_rgb_function(s);
    }
    Err(ColorError::Unsupported(s.to_string()))
}

fn parse_hex(hex: &str) -> Result<Rgb, ColorError> {
    let bad = || ColorError::BadHex(hex.to_string());
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(bad());
    }
    // All bytes are ASCII past this point, so byte slicing is safe.
    let channel = |s: &str| u8::from_str_radix(s, 16).map_err(|_| bad());
    match hex.len() {
        3 => Ok(Rgb::new(
            channel(&hex[0..1])? * 17,
            channel(&hex[1..2])? * 17,
            channel(&hex[2..3])? * 17,
        )),
        6 => Ok(Rgb::new(
            channel(&hex[0..2])?,
            channel(&hex[2..4])?,
            channel(&hex[4..6])?,
        )),
        _ => Err(bad()),
    }
}

fn parse_rgb_function(s: &str) -> Result<Rgb, ColorError> {
    let bad = || ColorError::BadRgb(s.to_string());
    // "rgb" was matched by the caller; an optional "a" may follow.
    let rest = &s[3..];
    let rest = match rest.get(..1) {
        Some(a) if a.eq_ignore_ascii_case("a") => &rest[1..],
        _ => rest,
    };
    let inner = rest
        .strip_prefix('(')
        .and_then(|r| r.strip_suffix(')'))
        .ok_or_else(bad)?;

    let parts: Vec<&str> = inner.split(',').map(str::trim).collect();
    if parts.len() != 3 && parts.len() != 4 {
        return Err(bad());
    }
    let channel = |p: &str| -> Result<u8, ColorError> {
        if p.is_empty() || p.len() > 3 || !p.bytes().all(|b| b.is_ascii_digit()) {
            return Err(bad());
        }
        let v: u16 = p.parse().map_err(|_| bad())?;
        Ok(v.min(255) as u8)
    };
    if let Some(alpha) = parts.get(3) {
        if !is_alpha_literal(alpha) {
            return Err(bad());
        }
    }
    Ok(Rgb::new(
        channel(parts[0])?,
        channel(parts[1])?,
        channel(parts[2])?,
    ))
}

// Accepts `0`, `1`, `.5` and `0.5` style literals.
fn is_alpha_literal(s: &str) -> bool {
    match s {
        "0" | "1" => true,
        _ => {
            let frac = s.strip_prefix('0').unwrap_or(s);
            frac.strip_prefix('.')
                .is_some_and(|d| !d.is_empty() && d.bytes().all(|b| b.is_ascii_digit()))
        }
    }
}

/// Near-black or near-white caption colour for the given background, or
/// `None` when the background is absent or unreadable.
pub fn auto_text_color(background: Option<&str>) -> Option<&'static str> {
    let bg = background?;
    match parse_color(bg) {
        Ok(rgb) if rgb.is_light() => Some(LABEL_ON_LIGHT),
        Ok(_) => Some(LABEL_ON_DARK),
        Err(e) => {
            log::debug!("[ticker] auto colour skipped: {}", e);
            None
        }
    }
}

/// Final caption colour.
///
/// A manual colour (anything non-blank other than the `auto` token) wins.
/// Otherwise the auto colour is used when either `mode` or the raw value asks
/// for it. `None` leaves the caption on its default styling.
pub fn resolve_label_color(
    mode: Option<&str>,
    raw: Option<&str>,
    background: Option<&str>,
) -> Option<String> {
    let raw = raw.map(str::trim).filter(|r| !r.is_empty());
    let raw_is_auto = raw.is_some_and(|r| r.eq_ignore_ascii_case("auto"));
    if let Some(manual) = raw.filter(|_| !raw_is_auto) {
        return Some(manual.to_string());
    }
    let mode_is_auto = mode.is_some_and(|m| m.trim().eq_ignore_ascii_case("auto"));
    if mode_is_auto || raw_is_auto {
        auto_text_color(background).map(str::to_string)
    } else {
        None
    }
}
