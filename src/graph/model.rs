use crate::error::ParseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The five flowchart shapes the editor knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NodeKind {
    /// Terminal shape. The first one dropped reads "Start", later ones "End".
    StartEnd,
    Process,
    InputOutput,
    /// If/else diamond with `true` and `false` outgoing handles.
    Selection,
    /// Loop header with `true` (body) and `false` (exit) outgoing handles.
    Iteration,
}

impl NodeKind {
    pub const ALL: [NodeKind; 5] = [
        NodeKind::StartEnd,
        NodeKind::Process,
        NodeKind::InputOutput,
        NodeKind::Selection,
        NodeKind::Iteration,
    ];

    /// Label given to a freshly dropped node of this kind.
    ///
    /// `start_end_count` is the number of terminal nodes already on the canvas.
    pub fn default_label(self, start_end_count: usize) -> &'static str {
        match self {
            NodeKind::StartEnd if start_end_count == 0 => "Start",
            NodeKind::StartEnd => "End",
            NodeKind::Process => "Process",
            NodeKind::InputOutput => "Input/Output",
            NodeKind::Selection => "Decision",
            NodeKind::Iteration => "Loop",
        }
    }

    /// Whether this kind exposes labeled `true`/`false` outgoing handles.
    pub fn is_branching(self) -> bool {
        matches!(self, NodeKind::Selection | NodeKind::Iteration)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            NodeKind::StartEnd => "startEnd",
            NodeKind::Process => "process",
            NodeKind::InputOutput => "inputOutput",
            NodeKind::Selection => "selection",
            NodeKind::Iteration => "iteration",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NodeKind {
    type Err = ParseError;

    /// Accepts the wire names (`startEnd`) as well as snake case (`start_end`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .collect::<String>()
            .to_ascii_lowercase();
        match normalized.as_str() {
            "startend" => Ok(NodeKind::StartEnd),
            "process" => Ok(NodeKind::Process),
            "inputoutput" => Ok(NodeKind::InputOutput),
            "selection" => Ok(NodeKind::Selection),
            "iteration" => Ok(NodeKind::Iteration),
            _ => Err(ParseError::UnknownNodeKind(s.to_string())),
        }
    }
}

/// A labeled connection point. The unlabeled handle is modelled as `None`
/// wherever an `Option<Handle>` appears.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Handle {
    True,
    False,
}

impl Handle {
    pub fn as_str(self) -> &'static str {
        match self {
            Handle::True => "true",
            Handle::False => "false",
        }
    }

    /// Display form of an optional handle, used in messages.
    pub fn describe(handle: Option<Handle>) -> &'static str {
        handle.map_or("default", Handle::as_str)
    }
}

impl fmt::Display for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Handle {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "true" => Ok(Handle::True),
            "false" => Ok(Handle::False),
            _ => Err(ParseError::UnknownHandle(s.to_string())),
        }
    }
}

/// A point in canvas coordinates. `y` grows downwards.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A flowchart shape on the canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: String,
    pub kind: NodeKind,
    pub position: Position,
    /// Free text; embedded line breaks are kept as typed.
    pub label: String,
    pub editing: bool,
}

impl Node {
    pub fn new(id: impl Into<String>, kind: NodeKind, position: Position, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind,
            position,
            label: label.into(),
            editing: false,
        }
    }
}

/// A directed connection between two nodes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    pub id: String,
    pub source: String,
    pub target: String,
    pub source_handle: Option<Handle>,
    pub target_handle: Option<Handle>,
}

impl Edge {
    pub fn touches(&self, node_id: &str) -> bool {
        self.source == node_id || self.target == node_id
    }
}

/// A connection requested by the host that has not been accepted yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProposedEdge {
    pub source: String,
    pub target: String,
    pub source_handle: Option<Handle>,
    pub target_handle: Option<Handle>,
}

impl ProposedEdge {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            source_handle: None,
            target_handle: None,
        }
    }

    pub fn from_handle(mut self, handle: Handle) -> Self {
        self.source_handle = Some(handle);
        self
    }

    pub fn into_handle(mut self, handle: Handle) -> Self {
        self.target_handle = Some(handle);
        self
    }

    pub(crate) fn into_edge(self, id: String) -> Edge {
        Edge {
            id,
            source: self.source,
            target: self.target,
            source_handle: self.source_handle,
            target_handle: self.target_handle,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn node_kind_parses_wire_and_snake_case() {
        assert_eq!("startEnd".parse::<NodeKind>().unwrap(), NodeKind::StartEnd);
        assert_eq!("start_end".parse::<NodeKind>().unwrap(), NodeKind::StartEnd);
        assert_eq!("input-output".parse::<NodeKind>().unwrap(), NodeKind::InputOutput);
        assert!("diamond".parse::<NodeKind>().is_err());
    }

    #[test]
    fn start_end_label_depends_on_count() {
        assert_eq!(NodeKind::StartEnd.default_label(0), "Start");
        assert_eq!(NodeKind::StartEnd.default_label(1), "End");
        assert_eq!(NodeKind::StartEnd.default_label(7), "End");
        assert_eq!(NodeKind::Selection.default_label(0), "Decision");
    }
}
