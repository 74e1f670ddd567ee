use super::{DeletionReport, Editor};
use crate::error::EditError;
use crate::graph::{Handle, NodeKind, Position};
use serde::{Deserialize, Serialize};

/// One inbound request from the rendering surface.
///
/// Nodes do not carry callbacks; a host turns a click on a node's delete
/// button into `DeleteNode { id }` and dispatches it here. Commands
/// (de)serialize as JSON objects tagged by `op`:
///
/// ```rust
/// use progressflow::prelude::*;
///
/// let command: EditCommand = serde_json::from_str(
///     r#"{ "op": "dropNewNode", "kind": "startEnd", "position": { "x": 0, "y": 0 } }"#,
/// ).unwrap();
/// let mut editor = Editor::builder().with_ids(SequentialIds::new()).build();
/// command.apply(&mut editor).unwrap();
/// assert_eq!(editor.snapshot().nodes()[0].label, "Start");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "camelCase")]
pub enum EditCommand {
    #[serde(rename_all = "camelCase")]
    ProposeConnection {
        source: String,
        target: String,
        #[serde(default)]
        source_handle: Option<Handle>,
        #[serde(default)]
        target_handle: Option<Handle>,
    },
    DropNewNode {
        kind: NodeKind,
        position: Position,
    },
    DropExistingNode {
        id: String,
        position: Position,
    },
    DeleteNode {
        id: String,
    },
    DeleteEdge {
        id: String,
    },
    #[serde(rename_all = "camelCase")]
    DeleteSelection {
        #[serde(default)]
        node_ids: Vec<String>,
        #[serde(default)]
        edge_ids: Vec<String>,
    },
    Undo,
    Redo,
    ClearAll,
    LoadPreset {
        name: String,
    },
    SetLabel {
        id: String,
        label: String,
    },
    StartEditing {
        id: String,
    },
    StopEditing,
}

/// What a successfully dispatched command did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    NodeAdded(String),
    EdgeAdded(String),
    Deleted(DeletionReport),
    Applied,
    /// Undo/redo with an empty stack, or a selection delete that matched nothing.
    Unchanged,
}

impl EditCommand {
    pub fn apply(self, editor: &mut Editor) -> Result<CommandOutcome, EditError> {
        let outcome = match self {
            EditCommand::ProposeConnection {
                source,
                target,
                source_handle,
                target_handle,
            } => CommandOutcome::EdgeAdded(editor.propose_connection(
                &source,
                &target,
                source_handle,
                target_handle,
            )?),
            EditCommand::DropNewNode { kind, position } => {
                CommandOutcome::NodeAdded(editor.drop_new_node(kind, position))
            }
            EditCommand::DropExistingNode { id, position } => {
                editor.drop_existing_node(&id, position)?;
                CommandOutcome::Applied
            }
            EditCommand::DeleteNode { id } => {
                editor.delete_node(&id)?;
                CommandOutcome::Applied
            }
            EditCommand::DeleteEdge { id } => {
                editor.delete_edge(&id)?;
                CommandOutcome::Applied
            }
            EditCommand::DeleteSelection { node_ids, edge_ids } => {
                let report = editor.delete_selection(&node_ids, &edge_ids);
                if report.is_empty() {
                    CommandOutcome::Unchanged
                } else {
                    CommandOutcome::Deleted(report)
                }
            }
            EditCommand::Undo => changed(editor.undo()),
            EditCommand::Redo => changed(editor.redo()),
            EditCommand::ClearAll => {
                editor.clear_all();
                CommandOutcome::Applied
            }
            EditCommand::LoadPreset { name } => {
                editor.load_preset(&name)?;
                CommandOutcome::Applied
            }
            EditCommand::SetLabel { id, label } => {
                editor.set_label(&id, &label)?;
                CommandOutcome::Applied
            }
            EditCommand::StartEditing { id } => {
                editor.start_editing(&id)?;
                CommandOutcome::Applied
            }
            EditCommand::StopEditing => {
                editor.stop_editing();
                CommandOutcome::Applied
            }
        };
        Ok(outcome)
    }
}

fn changed(did_change: bool) -> CommandOutcome {
    if did_change {
        CommandOutcome::Applied
    } else {
        CommandOutcome::Unchanged
    }
}
