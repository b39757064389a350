//! Palette option definitions

use crate::nodes::NodeKind;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identifier of a palette option
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OptionId(String);

impl OptionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Id of the `n`th option, `node_<n>`
    pub fn sequential(n: usize) -> Self {
        Self(format!("node_{n}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A palette entry describing a node that can be created
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaletteOption {
    pub id: OptionId,
    pub title: String,
    #[serde(rename = "subTitle", default)]
    pub sub_title: String,
    #[serde(rename = "type")]
    pub kind: NodeKind,
}

impl PaletteOption {
    pub fn new(
        id: OptionId,
        title: impl Into<String>,
        sub_title: impl Into<String>,
        kind: NodeKind,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            sub_title: sub_title.into(),
            kind,
        }
    }

    /// Only options with a title can become nodes
    pub fn has_title(&self) -> bool {
        !self.title.is_empty()
    }
}
