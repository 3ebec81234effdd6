pub mod pointer;
pub mod scroll;

pub use pointer::{wire_track_handlers, TrackWiring};
pub use scroll::{wire_parallax, ParallaxWiring};
