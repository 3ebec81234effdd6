// Shared tuning constants for the parallax and ticker behaviors.

// Parallax defaults
pub const PARALLAX_STRENGTH: f32 = 0.12; // px moved per px from viewport center
pub const PARALLAX_MAX_OFFSET: f32 = 60.0; // clamp for the scroll-driven translateY
pub const PARALLAX_SCALE: f32 = 1.08; // hides edge gaps while translating
pub const PARALLAX_POINTER_MIN_WIDTH: i32 = 768; // pointer parallax disabled below this

// Hero preset
pub const HERO_MAX_OFFSET: f32 = 48.0;
pub const HERO_POINTER_X: f32 = 18.0;
pub const HERO_POINTER_Y: f32 = 6.0;
pub const HERO_SCALE: f32 = 1.18;

// Ticker
pub const TICKER_DEFAULT_SPEED_SEC: f32 = 30.0;
pub const TICKER_MIN_AUTO_GAP_PX: f32 = 64.0; // floor of the default strip gap
pub const TICKER_AUTO_GAP_RATIO: f32 = 0.5; // default gap as a share of viewport width
pub const TICKER_SETTLE_DELAY_MS: u32 = 300; // second measurement for late images

// Drag
pub const DRAG_CLICK_SUPPRESS_PX: f32 = 4.0; // movement beyond this eats the next click

// Label contrast
pub const YIQ_LIGHT_THRESHOLD: f32 = 128.0;
pub const LABEL_ON_LIGHT: &str = "#111111";
pub const LABEL_ON_DARK: &str = "#FFFFFF";

// CSS custom properties driving the marquee keyframes
pub const VAR_MARQUEE_START: &str = "--marquee-start";
pub const VAR_MARQUEE_END: &str = "--marquee-end";
pub const VAR_MARQUEE_SPEED: &str = "--marquee-speed";
pub const VAR_MARQUEE_GAP: &str = "--marquee-gap";

// Strip markup hooks shared with the browser layer
pub const TRACK_ATTR: &str = "data-hotc-track";
pub const BASE_SET_ATTR: &str = "data-hotc-base";
pub const HOVER_PAUSE_CLASS: &str = "hotc-hover-pause";
pub const DIAGNOSTIC_ATTR: &str = "data-hotc-diagnostic";
