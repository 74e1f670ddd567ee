//! Common test utilities for building graphs and editors.
use progressflow::prelude::*;

/// An empty editor with predictable ids (`node_1`, `node_2`, ...).
#[allow(dead_code)]
pub fn create_editor() -> Editor {
    Editor::builder().with_ids(SequentialIds::new()).build()
}

#[allow(dead_code)]
pub fn node(id: &str, kind: NodeKind, x: f64, y: f64) -> Node {
    Node::new(id, kind, Position::new(x, y), id)
}

#[allow(dead_code)]
pub fn edge(id: &str, source: &str, target: &str, handle: Option<Handle>) -> Edge {
    Edge {
        id: id.to_string(),
        source: source.to_string(),
        target: target.to_string(),
        source_handle: handle,
        target_handle: None,
    }
}

/// A straight chain: `a -> b -> c`, top to bottom.
#[allow(dead_code)]
pub fn create_chain_graph() -> Graph {
    Graph::from_parts(
        vec![
            node("a", NodeKind::StartEnd, 0.0, 0.0),
            node("b", NodeKind::Process, 0.0, 100.0),
            node("c", NodeKind::StartEnd, 0.0, 200.0),
        ],
        vec![edge("a-b", "a", "b", None), edge("b-c", "b", "c", None)],
        2,
    )
}

/// A decision with both branches rejoining at the end:
///
/// `start -> check`, `check -true-> yes`, `check -false-> no`, `yes -> end`, `no -> end`.
#[allow(dead_code)]
pub fn create_branch_graph() -> Graph {
    Graph::from_parts(
        vec![
            node("start", NodeKind::StartEnd, 0.0, 0.0),
            node("check", NodeKind::Selection, 0.0, 100.0),
            node("yes", NodeKind::Process, 150.0, 200.0),
            node("no", NodeKind::Process, -150.0, 200.0),
            node("end", NodeKind::StartEnd, 0.0, 300.0),
        ],
        vec![
            edge("start-check", "start", "check", None),
            edge("check-yes", "check", "yes", Some(Handle::True)),
            edge("check-no", "check", "no", Some(Handle::False)),
            edge("yes-end", "yes", "end", None),
            edge("no-end", "no", "end", None),
        ],
        2,
    )
}

/// Editor seeded with a graph; the graph itself is not undoable.
#[allow(dead_code)]
pub fn create_editor_with(graph: Graph) -> Editor {
    Editor::builder()
        .with_ids(SequentialIds::new())
        .with_graph(graph)
        .build()
}
