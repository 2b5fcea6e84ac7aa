use super::*;

// =============================================================
// ToastsState
// =============================================================

#[test]
fn toasts_state_default_is_empty() {
    let state = ToastsState::default();
    assert!(state.toasts.is_empty());
}

#[test]
fn push_appends_and_returns_the_new_id() {
    let mut state = ToastsState::default();
    let id = state.push("Saved", "Material saved", ToastSeverity::Success);

    assert_eq!(state.toasts.len(), 1);
    assert_eq!(state.toasts[0].id, id);
    assert_eq!(state.toasts[0].title, "Saved");
    assert_eq!(state.toasts[0].severity, ToastSeverity::Success);
}

#[test]
fn dismiss_removes_only_the_named_toast() {
    let mut state = ToastsState::default();
    let first = state.push("One", "first", ToastSeverity::Info);
    let second = state.push("Two", "second", ToastSeverity::Error);

    state.dismiss(&first);
    assert_eq!(state.toasts.len(), 1);
    assert_eq!(state.toasts[0].id, second);
}

#[test]
fn dismiss_unknown_id_is_a_no_op() {
    let mut state = ToastsState::default();
    state.push("One", "first", ToastSeverity::Info);

    state.dismiss("missing");
    assert_eq!(state.toasts.len(), 1);
}
