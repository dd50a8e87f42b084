use super::*;

#[test]
fn articles_state_default_is_empty_and_idle() {
    let state = ArticlesState::default();
    assert!(state.items.is_empty());
    assert!(!state.loading);
    assert!(state.error.is_none());
    assert!(state.pending_delete.is_none());
}
