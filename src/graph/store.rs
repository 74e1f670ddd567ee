use super::model::{Edge, Handle, Node, NodeKind};
use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// Which side of a node's edges to follow in a neighbor query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Nodes with an edge pointing at the queried node.
    Incoming,
    /// Nodes the queried node points at.
    Outgoing,
}

/// The full state of a flowchart at one point in time.
///
/// A `Graph` only answers structural questions. Every mutation goes through
/// the `Editor` so that it is recorded in the undo history.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Graph {
    pub(crate) nodes: Vec<Node>,
    pub(crate) edges: Vec<Edge>,
    pub(crate) start_end_count: usize,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a graph from literal parts, as the presets do.
    pub fn from_parts(nodes: Vec<Node>, edges: Vec<Edge>, start_end_count: usize) -> Self {
        Self {
            nodes,
            edges,
            start_end_count,
        }
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Number of terminal nodes created since the last clear. Drives the
    /// "Start"/"End" default label.
    pub fn start_end_count(&self) -> usize {
        self.start_end_count
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty()
    }

    pub fn find_node(&self, id: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn find_edge(&self, id: &str) -> Option<&Edge> {
        self.edges.iter().find(|e| e.id == id)
    }

    pub fn find_edges<P>(&self, mut predicate: P) -> Vec<&Edge>
    where
        P: FnMut(&Edge) -> bool,
    {
        self.edges.iter().filter(|e| predicate(e)).collect()
    }

    /// All edges that start or end at `node_id`.
    pub fn edges_touching(&self, node_id: &str) -> Vec<&Edge> {
        self.find_edges(|e| e.touches(node_id))
    }

    /// Distinct ids of the nodes adjacent to `node_id` in the given direction,
    /// in edge order. Handle labels are ignored.
    pub fn neighbors(&self, node_id: &str, direction: Direction) -> Vec<&str> {
        self.edges
            .iter()
            .filter_map(|e| match direction {
                Direction::Incoming if e.target == node_id => Some(e.source.as_str()),
                Direction::Outgoing if e.source == node_id => Some(e.target.as_str()),
                _ => None,
            })
            .unique()
            .collect()
    }

    /// The node filling the `handle` slot of a branching node, if any.
    pub fn slot(&self, node_id: &str, handle: Handle) -> Option<&Node> {
        self.edges
            .iter()
            .find(|e| e.source == node_id && e.source_handle == Some(handle))
            .and_then(|e| self.find_node(&e.target))
    }

    pub fn count_kind(&self, kind: NodeKind) -> usize {
        self.nodes.iter().filter(|n| n.kind == kind).count()
    }

    /// The node currently being edited, if any.
    pub fn editing_node(&self) -> Option<&Node> {
        self.nodes.iter().find(|n| n.editing)
    }

    pub(crate) fn find_node_mut(&mut self, id: &str) -> Option<&mut Node> {
        self.nodes.iter_mut().find(|n| n.id == id)
    }

    pub(crate) fn contains_node(&self, id: &str) -> bool {
        self.nodes.iter().any(|n| n.id == id)
    }

    pub(crate) fn contains_edge(&self, id: &str) -> bool {
        self.edges.iter().any(|e| e.id == id)
    }
}
