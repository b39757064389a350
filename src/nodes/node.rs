//! Node types and core node functionality

use super::handle::HandleKind;
use super::kind::NodeKind;
use crate::theme::dimensions;
use egui::{Pos2, Rect, Vec2};
use std::fmt;

/// Unique identifier for a node, displayed as `dndnode_<n>`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u64);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "dndnode_{}", self.0)
    }
}

/// A node placed on the canvas
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub id: NodeId,
    pub kind: NodeKind,
    /// Text shown in the node shell, copied from the option title at creation
    pub label: String,
    /// Top-left corner in canvas coordinates
    pub position: Pos2,
    pub size: Vec2,
}

impl Node {
    /// Creates a new node with the default shell size
    pub fn new(id: NodeId, kind: NodeKind, label: impl Into<String>, position: Pos2) -> Self {
        Self {
            id,
            kind,
            label: label.into(),
            position,
            size: dimensions().default_node_size,
        }
    }

    /// Returns the bounding rectangle of the node
    pub fn get_rect(&self) -> Rect {
        Rect::from_min_size(self.position, self.size)
    }

    /// Position of a handle in canvas coordinates
    pub fn handle_position(&self, handle: HandleKind) -> Pos2 {
        let x = self.position.x + self.size.x / 2.0;
        match handle {
            HandleKind::Target => Pos2::new(x, self.position.y),
            HandleKind::Source => Pos2::new(x, self.position.y + self.size.y),
        }
    }

    /// Returns the handle within `radius` of `point`, if any
    pub fn handle_at(&self, point: Pos2, radius: f32) -> Option<HandleKind> {
        [HandleKind::Target, HandleKind::Source]
            .into_iter()
            .find(|&handle| (self.handle_position(handle) - point).length() <= radius)
    }

    /// Sets the size of the node
    pub fn with_size(mut self, size: Vec2) -> Self {
        self.size = size;
        self
    }
}
