use careers_core::{update, AppState, Msg};

#[test]
fn update_is_noop() {
    let state = AppState::new();
    let (next, effects) = update(state.clone(), Msg::NoOp);

    assert_eq!(state, next);
    assert!(effects.is_empty());
}

#[test]
fn tick_does_not_recompute_results() {
    let state = AppState::new();
    let before = state.result_recomputations();
    let (next, _) = update(state, Msg::Tick);
    assert_eq!(next.result_recomputations(), before);
}
