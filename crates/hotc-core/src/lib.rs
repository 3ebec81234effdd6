pub mod color;
pub mod constants;
pub mod content;
pub mod drag;
pub mod error;
pub mod gate;
pub mod items;
pub mod markup;
pub mod marquee;
pub mod parallax;
pub mod ticker;

pub use color::*;
pub use constants::*;
pub use content::*;
pub use drag::*;
pub use error::*;
pub use gate::*;
pub use items::*;
pub use marquee::*;
pub use parallax::*;
pub use ticker::*;
