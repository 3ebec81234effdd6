/// DOM hooks and browser-side tuning for the mounted behaviors.
///
/// Markup produced by the site templates opts into a behavior with one of
/// the `data-hotc-*` attributes below; everything else is discovered from
/// the element it is attached to.
// Mount discovery
pub const PARALLAX_ATTR: &str = "data-hotc-parallax"; // value: "", "hero" or options JSON
pub const PARALLAX_TARGET_ATTR: &str = "data-hotc-parallax-target"; // moving child, optional
pub const TICKER_ATTR: &str = "data-hotc-ticker"; // value: slice JSON
pub const MOUNTED_ATTR: &str = "data-hotc-mounted"; // set to the handle once attached

// Handles returned to JS; 0 is reserved for "not mounted"
pub const NO_HANDLE: u32 = 0;
pub const FIRST_HANDLE: u32 = 1;

// Platform queries
pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

// Ticker section
pub const TICKER_SLICE_TYPE: &str = "image_ticker";
pub const TICKER_ARIA_LABEL: &str = "Featured links";
pub const TICKER_SECTION_CLASS: &str = "relative";
pub const TICKER_DIAGNOSTIC_CLASS: &str = "py-6";
pub const TRANSPARENT: &str = "transparent";

// Inline style properties written on every frame
pub const STYLE_TRANSFORM: &str = "transform";
pub const STYLE_TRANSFORM_ORIGIN: &str = "transform-origin";
pub const STYLE_WILL_CHANGE: &str = "will-change";
pub const STYLE_PLAY_STATE: &str = "animation-play-state";
pub const STYLE_CURSOR: &str = "cursor";
