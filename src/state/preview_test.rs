use super::*;
use leptos::prelude::Owner;

fn rendered(content: &str) -> RenderedMaterial {
    RenderedMaterial {
        content: Some(content.to_owned()),
        error: None,
    }
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn preview_state_starts_cleared() {
    let state = PreviewState::default();
    assert!(state.rendered().is_none());
}

// =============================================================
// Ticketing
// =============================================================

#[test]
fn invalidate_clears_the_shown_preview() {
    let mut state = PreviewState::default();
    let ticket = state.invalidate();
    assert!(state.apply(ticket, rendered("hello")));
    assert!(state.rendered().is_some());

    state.invalidate();
    assert!(state.rendered().is_none());
}

#[test]
fn apply_rejects_stale_tickets() {
    let mut state = PreviewState::default();
    let stale = state.invalidate();
    let _ = state.invalidate();

    assert!(!state.apply(stale, rendered("old")));
    assert!(state.rendered().is_none());
}

#[test]
fn rapid_edits_leave_only_the_last_ticket_current() {
    let mut state = PreviewState::default();
    let first = state.invalidate();
    let second = state.invalidate();
    let last = state.invalidate();

    assert!(!state.is_current(first));
    assert!(!state.is_current(second));
    assert!(state.is_current(last));

    assert!(!state.apply(first, rendered("first")));
    assert!(state.apply(last, rendered("last")));
    assert_eq!(state.rendered(), Some(&rendered("last")));
}

#[test]
fn teardown_invalidate_orphans_a_pending_ticket() {
    let mut state = PreviewState::default();
    let pending = state.invalidate();

    // Component unmount bumps the epoch; the sleeping task will wake, see a
    // stale ticket, and never issue its fetch.
    state.invalidate();
    assert!(!state.is_current(pending));
}

#[test]
fn signal_ticket_check_reads_current_state() {
    let owner = Owner::new();
    let signal = owner.with(|| RwSignal::new(PreviewState::default()));

    let mut ticket = 0_u64;
    signal.update(|p| ticket = p.invalidate());
    assert!(is_ticket_current(signal, ticket));

    let mut newer = 0_u64;
    signal.update(|p| newer = p.invalidate());
    assert!(!is_ticket_current(signal, ticket));
    assert!(is_ticket_current(signal, newer));
}

#[test]
fn signal_ticket_check_treats_disposed_signal_as_stale() {
    let owner = Owner::new();
    let signal = owner.with(|| RwSignal::new(PreviewState::default()));

    let mut ticket = 0_u64;
    signal.update(|p| ticket = p.invalidate());

    // Unmount disposes the page's signal while the debounce timer is still
    // sleeping; the woken task must see a stale ticket, not panic.
    drop(owner);
    assert!(!is_ticket_current(signal, ticket));
}

#[test]
fn error_results_are_stored_verbatim() {
    let mut state = PreviewState::default();
    let ticket = state.invalidate();
    let failure = RenderedMaterial {
        content: None,
        error: Some("name 'api' is not defined".to_owned()),
    };
    assert!(state.apply(ticket, failure.clone()));
    assert_eq!(state.rendered(), Some(&failure));
}
