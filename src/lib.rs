//! Cardflow core library
//!
//! A palette of option cards on the left, a node canvas on the right. Cards are
//! dragged onto the canvas to create nodes, nodes are wired together with edges,
//! and palette entries are edited through a modal dialog.

pub mod constants;
pub mod editor;
pub mod nodes;
pub mod palette;
pub mod theme;

// Re-export commonly used types
pub use editor::FlowEditor;
pub use nodes::{Connection, Edge, EdgeId, GraphError, Node, NodeGraph, NodeId, NodeKind};
pub use palette::{Draft, DraftField, Lookup, Palette, PaletteDrag, PaletteOption, OptionId, SaveOutcome};
