//! Palette model - the option cards that nodes are created from

pub mod draft;
pub mod drag;
pub mod list;
pub mod option;

pub use draft::{Draft, DraftField};
pub use drag::PaletteDrag;
pub use list::{Lookup, Palette, PaletteError, SaveOutcome};
pub use option::{OptionId, PaletteOption};
