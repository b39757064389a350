//! Payload carried from a palette card to the canvas

use super::list::Palette;
use super::option::OptionId;

/// Drag-and-drop payload identifying the dragged option
///
/// Carries the option's stable id rather than its list position, so edits to
/// the palette while a drag is in flight cannot swap which option is dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaletteDrag {
    pub option_id: OptionId,
}

impl PaletteDrag {
    pub fn new(option_id: OptionId) -> Self {
        Self { option_id }
    }

    /// Payload for the card at `index`, `None` when the index is out of range
    pub fn for_index(palette: &Palette, index: usize) -> Option<Self> {
        palette.get(index).map(|option| Self::new(option.id.clone()))
    }
}
