//! The ordered list of palette options

use super::draft::Draft;
use super::option::{OptionId, PaletteOption};
use crate::nodes::NodeKind;
use std::collections::HashSet;
use thiserror::Error;

/// Seed options bundled with the binary
const DEFAULT_PALETTE: &str = include_str!("../../assets/default_palette.json");

/// Errors raised while loading a palette
#[derive(Debug, Error)]
pub enum PaletteError {
    #[error("failed to parse palette: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("duplicate option id {0}")]
    DuplicateId(OptionId),
}

/// Result of resolving an option
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup<'a> {
    Found(&'a PaletteOption),
    NotFound,
}

impl<'a> Lookup<'a> {
    pub fn found(self) -> Option<&'a PaletteOption> {
        match self {
            Lookup::Found(option) => Some(option),
            Lookup::NotFound => None,
        }
    }
}

/// What a committed draft did to the palette
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    Created(OptionId),
    Updated(OptionId),
    /// The draft named an option that no longer exists; nothing changed
    Missing(OptionId),
}

/// Ordered option list backing the palette panel
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Palette {
    options: Vec<PaletteOption>,
}

impl Palette {
    pub fn new(options: Vec<PaletteOption>) -> Self {
        Self { options }
    }

    /// Parses a JSON array of options, rejecting duplicate ids
    pub fn from_json(json: &str) -> Result<Self, PaletteError> {
        let options: Vec<PaletteOption> = serde_json::from_str(json)?;

        let mut seen = HashSet::new();
        for option in &options {
            if !seen.insert(&option.id) {
                return Err(PaletteError::DuplicateId(option.id.clone()));
            }
        }

        Ok(Self::new(options))
    }

    /// Palette seeded from the bundled option list
    pub fn load_default() -> Result<Self, PaletteError> {
        Self::from_json(DEFAULT_PALETTE)
    }

    pub fn options(&self) -> &[PaletteOption] {
        &self.options
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&PaletteOption> {
        self.options.get(index)
    }

    pub fn find(&self, id: &OptionId) -> Lookup<'_> {
        match self.options.iter().find(|option| &option.id == id) {
            Some(option) => Lookup::Found(option),
            None => Lookup::NotFound,
        }
    }

    pub fn contains(&self, id: &OptionId) -> bool {
        self.find(id).found().is_some()
    }

    /// Commits a draft
    ///
    /// A draft with an id overwrites that option's title and subtitle, keeping
    /// its id and kind. A draft without one appends a new `Element` option with
    /// id `node_<len + 1>`. Titles are not validated here.
    pub fn save(&mut self, draft: Draft) -> SaveOutcome {
        let Draft {
            id,
            title,
            sub_title,
        } = draft;

        match id {
            Some(id) => match self.options.iter_mut().find(|option| option.id == id) {
                Some(option) => {
                    option.title = title;
                    option.sub_title = sub_title;
                    log::debug!("updated palette option {id}");
                    SaveOutcome::Updated(id)
                }
                None => {
                    log::warn!("palette option {id} vanished before its edit was saved");
                    SaveOutcome::Missing(id)
                }
            },
            None => {
                let id = OptionId::sequential(self.options.len() + 1);
                if self.contains(&id) {
                    log::warn!("new palette option reuses existing id {id}");
                }
                self.options
                    .push(PaletteOption::new(id.clone(), title, sub_title, NodeKind::Element));
                log::debug!("created palette option {id}");
                SaveOutcome::Created(id)
            }
        }
    }
}
