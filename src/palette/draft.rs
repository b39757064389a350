//! Uncommitted copy of an option held by the editor dialog

use super::option::{OptionId, PaletteOption};

/// Editable fields of a draft
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Title,
    SubTitle,
}

/// In-progress edits; `id == None` means the draft creates a new option
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    pub id: Option<OptionId>,
    pub title: String,
    pub sub_title: String,
}

impl Draft {
    /// Empty draft for a new option
    pub fn create() -> Self {
        Self::default()
    }

    /// Draft pre-filled from an existing option
    pub fn from_option(option: &PaletteOption) -> Self {
        Self {
            id: Some(option.id.clone()),
            title: option.title.clone(),
            sub_title: option.sub_title.clone(),
        }
    }

    pub fn is_create(&self) -> bool {
        self.id.is_none()
    }

    pub fn field(&self, field: DraftField) -> &str {
        match field {
            DraftField::Title => &self.title,
            DraftField::SubTitle => &self.sub_title,
        }
    }

    pub fn set(&mut self, field: DraftField, value: impl Into<String>) {
        let value = value.into();
        match field {
            DraftField::Title => self.title = value,
            DraftField::SubTitle => self.sub_title = value,
        }
    }
}
