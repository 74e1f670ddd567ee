use crate::error::EditError;
use crate::graph::{Edge, Graph, Handle, Node, NodeKind, Position};
use std::fmt;
use std::str::FromStr;

/// The built-in teaching examples.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Preset {
    /// Sequence: Start, one output, End.
    HelloWorld,
    /// Iteration: a counting loop from 1 to 10.
    PrintOneToTen,
    /// Selection: branch on an input age.
    AgeCheck,
}

impl Preset {
    pub const ALL: [Preset; 3] = [Preset::HelloWorld, Preset::PrintOneToTen, Preset::AgeCheck];

    pub fn name(self) -> &'static str {
        match self {
            Preset::HelloWorld => "Hello World",
            Preset::PrintOneToTen => "Print 1 to 10",
            Preset::AgeCheck => "Age Check",
        }
    }

    /// Builds the preset's nodes and edges. Every preset has one Start and
    /// one End, so the terminal counter is 2.
    pub fn graph(self) -> Graph {
        let (nodes, edges) = match self {
            Preset::HelloWorld => hello_world(),
            Preset::PrintOneToTen => print_one_to_ten(),
            Preset::AgeCheck => age_check(),
        };
        Graph::from_parts(nodes, edges, 2)
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Preset {
    type Err = EditError;

    /// Matches preset names case-insensitively, ignoring surrounding blanks.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Preset::ALL
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| EditError::UnknownPreset(s.to_string()))
    }
}

fn node(id: &str, kind: NodeKind, x: f64, y: f64, label: &str) -> Node {
    Node::new(id, kind, Position::new(x, y), label)
}

fn edge(id: &str, source: &str, target: &str, handle: Option<Handle>) -> Edge {
    Edge {
        id: id.to_string(),
        source: source.to_string(),
        target: target.to_string(),
        source_handle: handle,
        target_handle: None,
    }
}

fn hello_world() -> (Vec<Node>, Vec<Edge>) {
    let nodes = vec![
        node("node_start", NodeKind::StartEnd, 0.0, 0.0, "Start"),
        node("node_print", NodeKind::InputOutput, 0.0, 100.0, "Print \"Hello World\""),
        node("node_end", NodeKind::StartEnd, 0.0, 200.0, "End"),
    ];
    let edges = vec![
        edge("edge_start_print", "node_start", "node_print", None),
        edge("edge_print_end", "node_print", "node_end", None),
    ];
    (nodes, edges)
}

fn print_one_to_ten() -> (Vec<Node>, Vec<Edge>) {
    let nodes = vec![
        node("node_start", NodeKind::StartEnd, 0.0, 0.0, "Start"),
        node("node_initialize", NodeKind::Process, 0.0, 100.0, "Set i = 1"),
        node("node_loop", NodeKind::Iteration, 0.0, 200.0, "i <= 10?"),
        node("node_print", NodeKind::InputOutput, 150.0, 200.0, "Print i"),
        node("node_increment", NodeKind::Process, 150.0, 300.0, "i = i + 1"),
        node("node_end", NodeKind::StartEnd, -150.0, 200.0, "End"),
    ];
    let edges = vec![
        edge("edge_start_initialize", "node_start", "node_initialize", None),
        edge("edge_initialize_loop", "node_initialize", "node_loop", None),
        edge("edge_loop_print", "node_loop", "node_print", Some(Handle::True)),
        edge("edge_print_increment", "node_print", "node_increment", None),
        edge("edge_increment_loop", "node_increment", "node_loop", None),
        edge("edge_loop_end", "node_loop", "node_end", Some(Handle::False)),
    ];
    (nodes, edges)
}

fn age_check() -> (Vec<Node>, Vec<Edge>) {
    let nodes = vec![
        node("node_start", NodeKind::StartEnd, 0.0, 0.0, "Start"),
        node("node_input", NodeKind::InputOutput, 0.0, 100.0, "Input age"),
        node("node_decision", NodeKind::Selection, 0.0, 200.0, "age >= 18?"),
        node("node_print_adult", NodeKind::InputOutput, 150.0, 200.0, "Print \"Adult\""),
        node("node_print_minor", NodeKind::InputOutput, -150.0, 200.0, "Print \"Minor\""),
        node("node_end", NodeKind::StartEnd, 0.0, 300.0, "End"),
    ];
    let edges = vec![
        edge("edge_start_input", "node_start", "node_input", None),
        edge("edge_input_decision", "node_input", "node_decision", None),
        edge("edge_decision_adult", "node_decision", "node_print_adult", Some(Handle::True)),
        edge("edge_decision_minor", "node_decision", "node_print_minor", Some(Handle::False)),
        edge("edge_adult_end", "node_print_adult", "node_end", None),
        edge("edge_minor_end", "node_print_minor", "node_end", None),
    ];
    (nodes, edges)
}
