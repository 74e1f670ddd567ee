//! Tests for the snapshot history, including generated edit sequences.
use progressflow::prelude::*;
use proptest::prelude::*;

fn node_ref() -> impl Strategy<Value = String> {
    (1u32..12).prop_map(|n| format!("node_{}", n))
}

fn handle() -> impl Strategy<Value = Option<Handle>> {
    prop_oneof![Just(None), Just(Some(Handle::True)), Just(Some(Handle::False))]
}

fn position() -> impl Strategy<Value = Position> {
    (-4i32..4, -4i32..4).prop_map(|(x, y)| Position::new(x as f64 * 150.0, y as f64 * 100.0))
}

/// Edits a user can make, excluding undo/redo and editing focus.
fn edit_command() -> impl Strategy<Value = EditCommand> {
    prop_oneof![
        4 => (prop::sample::select(NodeKind::ALL.to_vec()), position())
            .prop_map(|(kind, position)| EditCommand::DropNewNode { kind, position }),
        3 => (node_ref(), node_ref(), handle()).prop_map(|(source, target, source_handle)| {
            EditCommand::ProposeConnection { source, target, source_handle, target_handle: None }
        }),
        1 => (node_ref(), position()).prop_map(|(id, position)| EditCommand::DropExistingNode { id, position }),
        1 => node_ref().prop_map(|id| EditCommand::DeleteNode { id }),
        1 => prop::collection::vec(node_ref(), 1..3)
            .prop_map(|node_ids| EditCommand::DeleteSelection { node_ids, edge_ids: Vec::new() }),
        1 => (node_ref(), "[a-z ]{0,8}").prop_map(|(id, label)| EditCommand::SetLabel { id, label }),
        1 => prop::sample::select(Preset::ALL.to_vec())
            .prop_map(|preset| EditCommand::LoadPreset { name: preset.name().to_string() }),
        1 => Just(EditCommand::ClearAll),
    ]
}

fn commit(history: &mut History<i32>, value: i32) {
    history.record_checkpoint();
    history.apply_edit(value);
}

#[test]
fn test_undo_redo_walks_through_states() {
    let mut history = History::new(0);
    commit(&mut history, 1);
    commit(&mut history, 2);
    commit(&mut history, 3);

    assert!(history.undo());
    assert!(history.undo());
    assert_eq!(*history.present(), 1);
    assert_eq!(history.undo_depth(), 1);
    assert_eq!(history.redo_depth(), 2);

    assert!(history.redo());
    assert_eq!(*history.present(), 2);
}

#[test]
fn test_new_edit_after_undo_truncates_future() {
    let mut history = History::new(0);
    commit(&mut history, 1);
    commit(&mut history, 2);
    history.undo();
    history.undo();

    commit(&mut history, 10);
    assert_eq!(history.redo_depth(), 0);
    assert!(!history.redo());
    assert!(history.undo());
    assert_eq!(*history.present(), 0);
}

#[test]
fn test_apply_edit_without_checkpoint_is_folded_into_present() {
    let mut history = History::new(0);
    commit(&mut history, 1);
    history.apply_edit(5);
    assert_eq!(history.undo_depth(), 1);
    assert!(history.undo());
    assert_eq!(*history.present(), 0);
    assert!(history.redo());
    assert_eq!(*history.present(), 5);
}

proptest! {
    #[test]
    fn prop_undo_all_returns_to_start(values in prop::collection::vec(any::<i32>(), 0..40)) {
        let mut history = History::new(i32::MIN);
        for v in &values {
            commit(&mut history, *v);
        }
        for _ in 0..values.len() {
            prop_assert!(history.undo());
        }
        prop_assert!(!history.undo());
        prop_assert_eq!(*history.present(), i32::MIN);

        for _ in 0..values.len() {
            prop_assert!(history.redo());
        }
        prop_assert!(!history.redo());
        prop_assert_eq!(Some(history.present()), values.last().or(Some(&i32::MIN)));
    }

    #[test]
    fn prop_depths_track_position(values in prop::collection::vec(any::<i32>(), 1..30), back in 0usize..30) {
        let mut history = History::new(0);
        for v in &values {
            commit(&mut history, *v);
        }
        let back = back.min(values.len());
        for _ in 0..back {
            history.undo();
        }
        prop_assert_eq!(history.undo_depth(), values.len() - back);
        prop_assert_eq!(history.redo_depth(), back);
        prop_assert_eq!(history.undo_depth() + history.redo_depth(), values.len());
    }

    #[test]
    fn prop_editor_undo_all_restores_empty_canvas(commands in prop::collection::vec(edit_command(), 0..30)) {
        let mut editor = Editor::builder().with_ids(SequentialIds::new()).build();
        let mut recorded = 0;
        for command in commands {
            if let Ok(outcome) = command.apply(&mut editor) {
                if outcome != CommandOutcome::Unchanged {
                    recorded += 1;
                }
            }
        }
        let last = editor.snapshot().clone();

        for _ in 0..recorded {
            prop_assert!(editor.undo());
        }
        prop_assert!(!editor.can_undo());
        prop_assert_eq!(editor.snapshot(), &Graph::new());

        for _ in 0..recorded {
            prop_assert!(editor.redo());
        }
        prop_assert!(!editor.can_redo());
        prop_assert_eq!(editor.snapshot(), &last);
    }
}
