//! Node system - canvas nodes, edges and the graph that owns them

pub mod graph;
pub mod handle;
pub mod kind;
pub mod math_utils;
pub mod node;

// Re-export core types
pub use graph::{Connection, Edge, EdgeId, GraphError, NodeGraph};
pub use handle::HandleKind;
pub use kind::NodeKind;
pub use node::{Node, NodeId};
