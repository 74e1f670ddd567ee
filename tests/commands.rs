//! Tests for JSON command dispatch and the snapshot wire shape.
mod common;
use common::*;
use progressflow::prelude::*;
use serde_json::{Value, json};

fn run(editor: &mut Editor, command: Value) -> Result<CommandOutcome, EditError> {
    let command: EditCommand = serde_json::from_value(command).expect("valid command JSON");
    command.apply(editor)
}

#[test]
fn test_scripted_session() {
    let mut editor = create_editor();
    let script = json!([
        { "op": "dropNewNode", "kind": "startEnd", "position": { "x": 0, "y": 0 } },
        { "op": "dropNewNode", "kind": "selection", "position": { "x": 0, "y": 100 } },
        { "op": "proposeConnection", "source": "node_1", "target": "node_2" },
        { "op": "dropNewNode", "kind": "process", "position": { "x": 200, "y": 200 } },
        { "op": "proposeConnection", "source": "node_2", "target": "node_4", "sourceHandle": "true" }
    ]);
    let commands: Vec<EditCommand> = serde_json::from_value(script).unwrap();
    let outcomes: Vec<_> = commands
        .into_iter()
        .map(|c| c.apply(&mut editor).unwrap())
        .collect();

    assert_eq!(outcomes[0], CommandOutcome::NodeAdded("node_1".to_string()));
    assert_eq!(outcomes[2], CommandOutcome::EdgeAdded("node_1-node_2-3".to_string()));
    assert_eq!(outcomes[3], CommandOutcome::NodeAdded("node_4".to_string()));
    assert_eq!(
        editor.snapshot().slot("node_2", Handle::True).map(|n| n.id.as_str()),
        Some("node_4")
    );
}

#[test]
fn test_rejected_command_reports_reason() {
    let mut editor = create_editor_with(create_chain_graph());
    let err = run(&mut editor, json!({ "op": "proposeConnection", "source": "c", "target": "b" })).unwrap_err();
    assert_eq!(
        err,
        EditError::Rejected(ConnectionRejected::TargetOccupied {
            target: "b".to_string()
        })
    );
}

#[test]
fn test_selection_and_history_outcomes() {
    let mut editor = create_editor_with(create_chain_graph());
    assert_eq!(run(&mut editor, json!({ "op": "undo" })), Ok(CommandOutcome::Unchanged));
    assert_eq!(
        run(&mut editor, json!({ "op": "deleteSelection", "nodeIds": ["ghost"] })),
        Ok(CommandOutcome::Unchanged)
    );

    let outcome = run(&mut editor, json!({ "op": "deleteSelection", "nodeIds": ["b"] })).unwrap();
    let report = match outcome {
        CommandOutcome::Deleted(report) => report,
        other => panic!("expected a deletion report, got {:?}", other),
    };
    assert_eq!(report.removed_nodes, 1);
    assert_eq!(report.relinked.len(), 1);

    assert_eq!(run(&mut editor, json!({ "op": "undo" })), Ok(CommandOutcome::Applied));
    assert_eq!(run(&mut editor, json!({ "op": "redo" })), Ok(CommandOutcome::Applied));
    assert_eq!(run(&mut editor, json!({ "op": "redo" })), Ok(CommandOutcome::Unchanged));
}

#[test]
fn test_label_and_preset_commands() {
    let mut editor = create_editor();
    run(&mut editor, json!({ "op": "loadPreset", "name": "Hello World" })).unwrap();
    run(&mut editor, json!({ "op": "startEditing", "id": "node_print" })).unwrap();
    run(&mut editor, json!({ "op": "setLabel", "id": "node_print", "label": "Print \"Hi\"\nTwice" })).unwrap();
    run(&mut editor, json!({ "op": "stopEditing" })).unwrap();

    let node = editor.snapshot().find_node("node_print").unwrap();
    assert_eq!(node.label, "Print \"Hi\"\nTwice");
    assert!(!node.editing);

    run(&mut editor, json!({ "op": "clearAll" })).unwrap();
    assert!(editor.snapshot().is_empty());
}

#[test]
fn test_unknown_op_is_a_parse_error() {
    let result: Result<EditCommand, _> = serde_json::from_value(json!({ "op": "explode" }));
    assert!(result.is_err());
}

#[test]
fn test_snapshot_uses_surface_field_names() {
    let mut editor = create_editor_with(Preset::AgeCheck.graph());
    editor.start_editing("node_decision").unwrap();

    let value = serde_json::to_value(UiSnapshot::from(editor.snapshot())).unwrap();
    assert_eq!(value["startEndCount"], 2);

    let decision = value["nodes"]
        .as_array()
        .and_then(|nodes| nodes.iter().find(|n| n["id"] == "node_decision"))
        .unwrap();
    assert_eq!(decision["type"], "selection");
    assert_eq!(decision["data"]["label"], "age >= 18?");
    assert_eq!(decision["data"]["isCurrentlyEditing"], true);
    assert_eq!(decision["position"], json!({ "x": 0.0, "y": 200.0 }));

    let edge = value["edges"]
        .as_array()
        .and_then(|edges| edges.iter().find(|e| e["id"] == "edge_decision_minor"))
        .unwrap();
    assert_eq!(edge["sourceHandle"], "false");
    assert_eq!(edge["targetHandle"], Value::Null);
    assert_eq!(edge["type"], "orthogonal");
}
