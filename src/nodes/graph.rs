//! Node graph data structures and operations

use super::handle::HandleKind;
use super::kind::NodeKind;
use super::math_utils::distance_to_edge;
use super::node::{Node, NodeId};
use egui::{Pos2, Rect};
use std::fmt;
use thiserror::Error;

/// Errors raised by graph mutations; the graph is unchanged when one is returned
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    #[error("node {0} does not exist")]
    MissingNode(NodeId),
    #[error("cannot connect node {0} to itself")]
    SelfConnection(NodeId),
    #[error("edge {0} already exists")]
    DuplicateEdge(EdgeId),
}

/// Identifier of an edge, derived from its endpoints
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EdgeId(String);

impl EdgeId {
    fn between(source: NodeId, target: NodeId) -> Self {
        Self(format!("edge-{source}-{target}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Parameters of a completed connect gesture
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Connection {
    pub source: NodeId,
    pub target: NodeId,
}

impl Connection {
    /// Creates a new connection
    pub fn new(source: NodeId, target: NodeId) -> Self {
        Self { source, target }
    }
}

/// An edge from the source handle of one node to the target handle of another
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    pub id: EdgeId,
    pub source: NodeId,
    pub target: NodeId,
}

/// The nodes and edges on one canvas
///
/// Node ids come from a counter owned by the graph, so each canvas session
/// numbers its nodes from `dndnode_0` and never reuses an id.
#[derive(Debug, Clone, Default)]
pub struct NodeGraph {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    next_node_id: u64,
}

impl NodeGraph {
    /// Creates a new empty node graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Nodes in insertion order; later nodes draw on top
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.iter().find(|node| node.id == id)
    }

    pub fn node_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.iter_mut().find(|node| node.id == id)
    }

    pub fn edge(&self, id: &EdgeId) -> Option<&Edge> {
        self.edges.iter().find(|edge| &edge.id == id)
    }

    /// Appends a node and returns its freshly allocated id
    pub fn add_node(&mut self, kind: NodeKind, label: impl Into<String>, position: Pos2) -> NodeId {
        let id = NodeId(self.next_node_id);
        self.next_node_id += 1;
        self.nodes.push(Node::new(id, kind, label, position));
        id
    }

    /// Removes a node and all its edges
    pub fn remove_node(&mut self, id: NodeId) -> Option<Node> {
        let index = self.nodes.iter().position(|node| node.id == id)?;
        self.edges.retain(|edge| edge.source != id && edge.target != id);
        Some(self.nodes.remove(index))
    }

    /// Moves a node so its top-left corner sits at `position`
    pub fn move_node(&mut self, id: NodeId, position: Pos2) -> Result<(), GraphError> {
        let node = self.node_mut(id).ok_or(GraphError::MissingNode(id))?;
        node.position = position;
        Ok(())
    }

    /// Adds an edge for a connection
    ///
    /// At most one edge exists per (source, target) pair and self-loops are refused.
    pub fn connect(&mut self, connection: Connection) -> Result<EdgeId, GraphError> {
        let Connection { source, target } = connection;
        if source == target {
            return Err(GraphError::SelfConnection(source));
        }
        for id in [source, target] {
            if self.node(id).is_none() {
                return Err(GraphError::MissingNode(id));
            }
        }

        let id = EdgeId::between(source, target);
        if self.edge(&id).is_some() {
            return Err(GraphError::DuplicateEdge(id));
        }

        self.edges.push(Edge {
            id: id.clone(),
            source,
            target,
        });
        Ok(id)
    }

    /// Removes an edge by id
    pub fn remove_edge(&mut self, id: &EdgeId) -> Option<Edge> {
        let index = self.edges.iter().position(|edge| &edge.id == id)?;
        Some(self.edges.remove(index))
    }

    /// Canvas positions of an edge's endpoints
    pub fn edge_endpoints(&self, edge: &Edge) -> Option<(Pos2, Pos2)> {
        let source = self.node(edge.source)?;
        let target = self.node(edge.target)?;
        Some((
            source.handle_position(HandleKind::Source),
            target.handle_position(HandleKind::Target),
        ))
    }

    /// Topmost node containing `point`
    pub fn node_at(&self, point: Pos2) -> Option<NodeId> {
        self.nodes
            .iter()
            .rev()
            .find(|node| node.get_rect().contains(point))
            .map(|node| node.id)
    }

    /// Topmost node handle within `radius` of `point`
    pub fn handle_at(&self, point: Pos2, radius: f32) -> Option<(NodeId, HandleKind)> {
        self.nodes
            .iter()
            .rev()
            .find_map(|node| node.handle_at(point, radius).map(|handle| (node.id, handle)))
    }

    /// Closest edge within `tolerance` of `point`
    pub fn edge_at(&self, point: Pos2, tolerance: f32) -> Option<EdgeId> {
        self.edges
            .iter()
            .filter_map(|edge| {
                let (from, to) = self.edge_endpoints(edge)?;
                let distance = distance_to_edge(point, from, to);
                (distance <= tolerance).then_some((distance, edge))
            })
            .min_by(|a, b| a.0.total_cmp(&b.0))
            .map(|(_, edge)| edge.id.clone())
    }

    /// Bounding box of all nodes, `None` when the graph is empty
    pub fn bounds(&self) -> Option<Rect> {
        self.nodes
            .iter()
            .map(Node::get_rect)
            .reduce(|acc, rect| acc.union(rect))
    }
}
