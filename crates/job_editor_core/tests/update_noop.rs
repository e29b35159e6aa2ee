use job_editor_core::{update, EditorState, Msg};

#[test]
fn update_is_noop() {
    let state = EditorState::default();
    let (next, effects) = update(state.clone(), Msg::NoOp);

    assert_eq!(state, next);
    assert!(effects.is_empty());
}

#[test]
fn tick_without_pending_focus_is_noop() {
    let state = EditorState::default();
    let (next, effects) = update(state.clone(), Msg::Tick);

    assert_eq!(state, next);
    assert!(effects.is_empty());
}
