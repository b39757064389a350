//! The closed set of node kinds shared by palette options and canvas nodes

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of node an option creates
///
/// Serialized with the tags `page`, `element` and `element-item`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NodeKind {
    Page,
    Element,
    ElementItem,
}

impl NodeKind {
    pub const ALL: [NodeKind; 3] = [NodeKind::Page, NodeKind::Element, NodeKind::ElementItem];

    /// Stable string tag of this kind
    pub fn tag(&self) -> &'static str {
        match self {
            NodeKind::Page => "page",
            NodeKind::Element => "element",
            NodeKind::ElementItem => "element-item",
        }
    }

    /// Glyph drawn in the node shell; the only visual difference between kinds
    pub fn icon(&self) -> &'static str {
        match self {
            NodeKind::Page => "🖼",
            NodeKind::Element => "◉",
            NodeKind::ElementItem => "○",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}
