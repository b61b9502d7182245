//! Theme primitives: accent color codec, display modes, host scheme probing,
//! the predefined palette, and presentation-variable derivation.

pub mod color;
pub mod mode;
pub mod palette;
pub mod scheme;
pub mod vars;

pub use color::{Rgb, DEFAULT_ACCENT};
pub use mode::{DisplayMode, EffectiveMode};
pub use palette::{PaletteEntry, PALETTE};
pub use scheme::{FixedScheme, HostScheme, SchemeProbe};
pub use vars::{PresentationVars, VARIABLE_NAMES};
