use super::loops::is_loop;
use super::router::{HandlePosition, Polyline, RouteRequest, route};
use crate::config::{DropConfig, RoutingConfig};
use crate::graph::{Edge, Graph, Handle, NodeKind, Position};

/// Where an edge attaches to its two nodes, in canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeAnchors {
    pub source: Position,
    pub target: Position,
    pub source_position: HandlePosition,
    pub target_position: HandlePosition,
}

/// Derives handle coordinates from node positions and the configured node
/// size, for hosts that do not measure their own nodes.
///
/// Returns `None` when either endpoint is missing from the graph.
pub fn default_anchors(graph: &Graph, edge: &Edge, size: &DropConfig) -> Option<EdgeAnchors> {
    let source = graph.find_node(&edge.source)?;
    let target = graph.find_node(&edge.target)?;
    let (w, h) = (size.node_width, size.node_height);

    let bottom = |p: Position| (Position::new(p.x + w / 2.0, p.y + h), HandlePosition::Bottom);
    let right = |p: Position| (Position::new(p.x + w, p.y + h / 2.0), HandlePosition::Right);
    let left = |p: Position| (Position::new(p.x, p.y + h / 2.0), HandlePosition::Left);

    let (source_point, source_position) = match (source.kind, edge.source_handle) {
        (NodeKind::Selection, Some(Handle::True)) => right(source.position),
        (NodeKind::Selection, Some(Handle::False)) => left(source.position),
        (NodeKind::Iteration, Some(Handle::True)) => right(source.position),
        _ => bottom(source.position),
    };

    Some(EdgeAnchors {
        source: source_point,
        target: Position::new(target.position.x + w / 2.0, target.position.y),
        source_position,
        target_position: HandlePosition::Top,
    })
}

/// Classifies and routes one stored edge.
pub fn route_edge(graph: &Graph, edge: &Edge, anchors: &EdgeAnchors, config: &RoutingConfig) -> Polyline {
    let source_kind = graph.find_node(&edge.source).map(|n| n.kind);
    let target_kind = graph.find_node(&edge.target).map(|n| n.kind);
    let request = RouteRequest {
        source: anchors.source,
        target: anchors.target,
        source_position: anchors.source_position,
        target_position: anchors.target_position,
        source_kind,
        target_kind,
        is_loop: is_loop(graph, &edge.source, &edge.target, anchors.source.y, anchors.target.y),
        source_handle: edge.source_handle,
    };
    route(&request, config)
}

/// Routes every edge of `graph` using default anchors. Edges with a missing
/// endpoint are skipped.
pub fn route_all(graph: &Graph, size: &DropConfig, config: &RoutingConfig) -> Vec<(String, Polyline)> {
    graph
        .edges()
        .iter()
        .filter_map(|edge| {
            let anchors = default_anchors(graph, edge, size)?;
            Some((edge.id.clone(), route_edge(graph, edge, &anchors, config)))
        })
        .collect()
}
