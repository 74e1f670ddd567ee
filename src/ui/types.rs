use crate::graph::{Edge, Graph, Handle, Node, NodeKind, Position};
use serde::{Deserialize, Serialize};

/// Per-node payload as the diagram surface expects it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiNodeData {
    pub label: String,
    #[serde(rename = "isCurrentlyEditing")]
    pub is_currently_editing: bool,
}

/// A node in the surface's JSON shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiNode {
    pub id: String,
    #[serde(rename = "type")]
    pub node_type: NodeKind,
    pub position: Position,
    pub data: UiNodeData,
}

/// An edge in the surface's JSON shape. Every edge is drawn with the
/// orthogonal router.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiEdge {
    pub id: String,
    pub source: String,
    pub target: String,
    #[serde(rename = "sourceHandle")]
    pub source_handle: Option<Handle>,
    #[serde(rename = "targetHandle")]
    pub target_handle: Option<Handle>,
    #[serde(rename = "type")]
    pub edge_type: String,
}

/// The outbound snapshot sent to the surface after every accepted operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiSnapshot {
    pub nodes: Vec<UiNode>,
    pub edges: Vec<UiEdge>,
    #[serde(rename = "startEndCount")]
    pub start_end_count: usize,
}

impl From<&Node> for UiNode {
    fn from(node: &Node) -> Self {
        Self {
            id: node.id.clone(),
            node_type: node.kind,
            position: node.position,
            data: UiNodeData {
                label: node.label.clone(),
                is_currently_editing: node.editing,
            },
        }
    }
}

impl From<&Edge> for UiEdge {
    fn from(edge: &Edge) -> Self {
        Self {
            id: edge.id.clone(),
            source: edge.source.clone(),
            target: edge.target.clone(),
            source_handle: edge.source_handle,
            target_handle: edge.target_handle,
            edge_type: "orthogonal".to_string(),
        }
    }
}

impl From<&Graph> for UiSnapshot {
    fn from(graph: &Graph) -> Self {
        Self {
            nodes: graph.nodes().iter().map(UiNode::from).collect(),
            edges: graph.edges().iter().map(UiEdge::from).collect(),
            start_end_count: graph.start_end_count(),
        }
    }
}

impl UiSnapshot {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
