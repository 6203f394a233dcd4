use super::*;

// =============================================================
// PanelState transitions
// =============================================================

#[test]
fn panel_starts_closed() {
    let state = PanelState::default();
    assert!(!state.open);
}

#[test]
fn open_is_idempotent() {
    let mut state = PanelState::default();
    state.open();
    state.open();
    assert!(state.open);
}

#[test]
fn close_is_idempotent() {
    let mut state = PanelState::default();
    state.open();
    state.close();
    state.close();
    assert!(!state.open);
}

#[test]
fn toggle_alternates() {
    let mut state = PanelState::default();
    state.toggle();
    assert!(state.open);
    state.toggle();
    assert!(!state.open);
    state.toggle();
    assert!(state.open);
}
