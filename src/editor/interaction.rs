//! Node interaction handling (selection, dragging, connections)

use crate::nodes::{Connection, EdgeId, HandleKind, NodeGraph, NodeId};
use egui::{Pos2, Vec2};
use std::collections::{HashMap, HashSet};

/// A connect gesture that has left a handle but not yet landed on one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingConnection {
    pub node: NodeId,
    pub handle: HandleKind,
}

/// Manages node interactions and selections
#[derive(Debug, Clone, Default)]
pub struct InteractionManager {
    pub selected_nodes: HashSet<NodeId>,
    pub selected_edge: Option<EdgeId>,
    pub drag_offsets: HashMap<NodeId, Vec2>,
    pub pending_connection: Option<PendingConnection>,
    pub is_panning: bool,
}

impl InteractionManager {
    /// Creates a new interaction manager
    pub fn new() -> Self {
        Self::default()
    }

    /// Select a single node, optionally keeping existing selection
    pub fn select_node(&mut self, node_id: NodeId, multi_select: bool) {
        self.selected_edge = None;
        if multi_select {
            if !self.selected_nodes.remove(&node_id) {
                self.selected_nodes.insert(node_id);
            }
        } else {
            self.selected_nodes.clear();
            self.selected_nodes.insert(node_id);
        }
    }

    /// Select an edge, dropping any node selection
    pub fn select_edge(&mut self, edge: EdgeId) {
        self.selected_nodes.clear();
        self.selected_edge = Some(edge);
    }

    /// Clear all selections
    pub fn clear_selection(&mut self) {
        self.selected_nodes.clear();
        self.selected_edge = None;
    }

    pub fn is_node_selected(&self, node_id: NodeId) -> bool {
        self.selected_nodes.contains(&node_id)
    }

    pub fn has_selection(&self) -> bool {
        !self.selected_nodes.is_empty() || self.selected_edge.is_some()
    }

    /// Start dragging selected nodes
    pub fn start_drag(&mut self, drag_start: Pos2, graph: &NodeGraph) {
        self.drag_offsets.clear();
        for &node_id in &self.selected_nodes {
            if let Some(node) = graph.node(node_id) {
                self.drag_offsets.insert(node_id, node.position - drag_start);
            }
        }
    }

    /// Update node positions during drag
    pub fn update_drag(&mut self, current_pos: Pos2, graph: &mut NodeGraph) {
        for (&node_id, &offset) in &self.drag_offsets {
            if let Some(node) = graph.node_mut(node_id) {
                node.position = current_pos + offset;
            }
        }
    }

    pub fn is_dragging_nodes(&self) -> bool {
        !self.drag_offsets.is_empty()
    }

    /// End dragging
    pub fn end_drag(&mut self) {
        self.drag_offsets.clear();
        self.is_panning = false;
    }

    pub fn start_connection(&mut self, node: NodeId, handle: HandleKind) {
        self.pending_connection = Some(PendingConnection { node, handle });
    }

    pub fn cancel_connection(&mut self) {
        self.pending_connection = None;
    }

    /// Finish the pending gesture on a handle
    ///
    /// Gestures may start on either handle; the result always runs source to
    /// target. Landing on a handle of the same kind yields nothing. The
    /// pending gesture is cleared either way.
    pub fn complete_connection(&mut self, node: NodeId, handle: HandleKind) -> Option<Connection> {
        let pending = self.pending_connection.take()?;
        if handle != pending.handle.opposite() {
            return None;
        }

        Some(if pending.handle.is_source() {
            Connection::new(pending.node, node)
        } else {
            Connection::new(node, pending.node)
        })
    }

    /// Delete the selected nodes or edge, returning how many items were removed
    pub fn delete_selected(&mut self, graph: &mut NodeGraph) -> usize {
        let mut removed = 0;
        for node_id in self.selected_nodes.drain() {
            if graph.remove_node(node_id).is_some() {
                removed += 1;
            }
        }
        if let Some(edge) = self.selected_edge.take() {
            if graph.remove_edge(&edge).is_some() {
                removed += 1;
            }
        }
        self.drag_offsets.clear();
        removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nodes::NodeKind;

    #[test]
    fn test_select_node() {
        let mut interaction = InteractionManager::new();
        interaction.select_node(NodeId(1), false);
        interaction.select_node(NodeId(2), true);
        assert!(interaction.is_node_selected(NodeId(1)));
        assert!(interaction.is_node_selected(NodeId(2)));

        interaction.select_node(NodeId(1), true);
        assert!(!interaction.is_node_selected(NodeId(1)));

        interaction.select_node(NodeId(3), false);
        assert_eq!(interaction.selected_nodes.len(), 1);
    }

    #[test]
    fn test_complete_connection_orients_source_to_target() {
        let mut interaction = InteractionManager::new();

        interaction.start_connection(NodeId(0), HandleKind::Source);
        assert_eq!(
            interaction.complete_connection(NodeId(1), HandleKind::Target),
            Some(Connection::new(NodeId(0), NodeId(1)))
        );

        interaction.start_connection(NodeId(0), HandleKind::Target);
        assert_eq!(
            interaction.complete_connection(NodeId(1), HandleKind::Source),
            Some(Connection::new(NodeId(1), NodeId(0)))
        );

        interaction.start_connection(NodeId(0), HandleKind::Source);
        assert_eq!(interaction.complete_connection(NodeId(1), HandleKind::Source), None);
        assert!(interaction.pending_connection.is_none());
    }

    #[test]
    fn test_drag_moves_selected_nodes() {
        let mut graph = NodeGraph::new();
        let a = graph.add_node(NodeKind::Page, "A", Pos2::new(0.0, 0.0));
        let b = graph.add_node(NodeKind::Page, "B", Pos2::new(100.0, 0.0));
        let c = graph.add_node(NodeKind::Page, "C", Pos2::new(200.0, 0.0));

        let mut interaction = InteractionManager::new();
        interaction.select_node(a, false);
        interaction.select_node(b, true);
        interaction.start_drag(Pos2::new(10.0, 10.0), &graph);
        interaction.update_drag(Pos2::new(20.0, 30.0), &mut graph);
        interaction.end_drag();

        assert_eq!(graph.node(a).unwrap().position, Pos2::new(10.0, 20.0));
        assert_eq!(graph.node(b).unwrap().position, Pos2::new(110.0, 20.0));
        assert_eq!(graph.node(c).unwrap().position, Pos2::new(200.0, 0.0));
        assert!(!interaction.is_dragging_nodes());
    }

    #[test]
    fn test_delete_selected() {
        let mut graph = NodeGraph::new();
        let a = graph.add_node(NodeKind::Page, "A", Pos2::ZERO);
        let b = graph.add_node(NodeKind::Element, "B", Pos2::new(0.0, 200.0));
        let edge = graph.connect(Connection::new(a, b)).unwrap();

        let mut interaction = InteractionManager::new();
        interaction.select_edge(edge);
        assert_eq!(interaction.delete_selected(&mut graph), 1);
        assert!(graph.edges().is_empty());
        assert_eq!(graph.nodes().len(), 2);

        interaction.select_node(b, false);
        assert_eq!(interaction.delete_selected(&mut graph), 1);
        assert_eq!(graph.nodes().len(), 1);
        assert!(!interaction.has_selection());
    }
}
