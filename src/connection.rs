//! Connection rules for flowchart edges.
//!
//! A flowchart reads top to bottom with exactly one way into most shapes, so
//! the rules are about occupancy:
//!
//! - A target takes one incoming edge, except terminal shapes (several flows
//!   may end at the same "End") and the unlabeled entry of a loop header
//!   (the loop body re-enters there).
//! - Each outgoing handle of a source carries at most one edge. The
//!   unlabeled handle counts as its own handle.
//!
//! Self-connections pass validation; the router still draws them.

use crate::error::ConnectionRejected;
use crate::graph::{Graph, Handle, NodeKind, ProposedEdge};

/// Decides whether `proposed` may be added to `graph`.
///
/// Pure and all-or-nothing: the graph is only read.
pub fn validate(graph: &Graph, proposed: &ProposedEdge) -> Result<(), ConnectionRejected> {
    if !graph.contains_node(&proposed.source) {
        return Err(ConnectionRejected::UnknownEndpoint(proposed.source.clone()));
    }
    let target = graph
        .find_node(&proposed.target)
        .ok_or_else(|| ConnectionRejected::UnknownEndpoint(proposed.target.clone()))?;

    let target_accepts_many = target.kind == NodeKind::StartEnd
        || (target.kind == NodeKind::Iteration && proposed.target_handle.is_none());
    let target_occupied = graph.edges.iter().any(|e| e.target == proposed.target);
    if target_occupied && !target_accepts_many {
        return Err(ConnectionRejected::TargetOccupied {
            target: proposed.target.clone(),
        });
    }

    let handle_taken = graph
        .edges
        .iter()
        .any(|e| e.source == proposed.source && e.source_handle == proposed.source_handle);
    if handle_taken {
        return Err(ConnectionRejected::SourceHandleOccupied {
            source_id: proposed.source.clone(),
            handle: Handle::describe(proposed.source_handle).to_string(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{Edge, Node, Position};

    fn node(id: &str, kind: NodeKind) -> Node {
        Node::new(id, kind, Position::default(), id)
    }

    #[test]
    fn self_connection_is_accepted() {
        let graph = Graph::from_parts(vec![node("a", NodeKind::Process)], vec![], 0);
        assert!(validate(&graph, &ProposedEdge::new("a", "a")).is_ok());
    }

    #[test]
    fn labeled_iteration_entry_is_single_occupancy() {
        let graph = Graph::from_parts(
            vec![
                node("a", NodeKind::Process),
                node("b", NodeKind::Process),
                node("loop", NodeKind::Iteration),
            ],
            vec![Edge {
                id: "a-loop".to_string(),
                source: "a".to_string(),
                target: "loop".to_string(),
                source_handle: None,
                target_handle: None,
            }],
            0,
        );
        let labeled = ProposedEdge::new("b", "loop").into_handle(Handle::True);
        assert_eq!(
            validate(&graph, &labeled),
            Err(ConnectionRejected::TargetOccupied {
                target: "loop".to_string()
            })
        );
        assert!(validate(&graph, &ProposedEdge::new("b", "loop")).is_ok());
    }
}
