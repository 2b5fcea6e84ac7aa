use super::*;

fn with_messages(roles: &[MessageRole]) -> ChatState {
    let mut state = ChatState::default();
    for role in roles {
        state.messages.push(match role {
            MessageRole::User => ChatMessage::user("hello"),
            MessageRole::Assistant => ChatMessage::assistant("hi there"),
        });
    }
    state
}

// =============================================================
// ChatState basics
// =============================================================

#[test]
fn chat_state_default_is_idle_and_empty() {
    let state = ChatState::default();
    assert!(state.messages.is_empty());
    assert!(!state.is_running());
    assert!(!state.last_from_user());
}

#[test]
fn last_from_user_tracks_the_newest_message() {
    assert!(with_messages(&[MessageRole::User]).last_from_user());
    assert!(!with_messages(&[MessageRole::User, MessageRole::Assistant]).last_from_user());
    assert!(with_messages(&[MessageRole::Assistant, MessageRole::User]).last_from_user());
}

// =============================================================
// Run tickets
// =============================================================

#[test]
fn begin_run_enters_analysis_and_issues_a_ticket() {
    let mut state = ChatState::default();
    let ticket = state.begin_run();
    assert!(state.analysis_running);
    assert!(!state.execution_running);
    assert!(state.is_current_run(ticket));
}

#[test]
fn a_new_run_supersedes_the_previous_ticket() {
    let mut state = ChatState::default();
    let first = state.begin_run();
    let second = state.begin_run();
    assert!(!state.is_current_run(first));
    assert!(state.is_current_run(second));
}

#[test]
fn halt_clears_flags_and_orphans_the_run() {
    let mut state = ChatState::default();
    let ticket = state.begin_run();
    state.execution_running = true;

    state.halt();
    assert!(!state.is_running());
    assert!(!state.is_current_run(ticket));
}

// =============================================================
// Action resolution
// =============================================================

#[test]
fn empty_chat_resolves_to_send() {
    let action = resolve_action(&ChatState::default(), "");
    assert_eq!(action.kind, ChatAction::Submit);
    assert_eq!(action.label, "Send");
}

#[test]
fn pending_input_resolves_to_send_even_while_running() {
    let mut state = with_messages(&[MessageRole::User, MessageRole::Assistant]);
    state.begin_run();

    let action = resolve_action(&state, "hi");
    assert_eq!(action.kind, ChatAction::Submit);
    assert_eq!(action.label, "Send");
}

#[test]
fn whitespace_only_input_counts_as_blank() {
    let state = with_messages(&[MessageRole::User]);
    let action = resolve_action(&state, "   ");
    assert_eq!(action.kind, ChatAction::RequestReply);
}

#[test]
fn idle_after_user_turn_resolves_to_get_reply() {
    let state = with_messages(&[MessageRole::User]);
    let action = resolve_action(&state, "");
    assert_eq!(action.kind, ChatAction::RequestReply);
    assert_eq!(action.label, "Get reply");
}

#[test]
fn idle_after_assistant_turn_resolves_to_guidance() {
    let state = with_messages(&[MessageRole::User, MessageRole::Assistant]);
    let action = resolve_action(&state, "");
    assert_eq!(action.kind, ChatAction::RequestGuidance);
    assert_eq!(action.label, "Guide me");
}

#[test]
fn running_analysis_resolves_to_stop_analysis() {
    let mut state = with_messages(&[MessageRole::User]);
    state.analysis_running = true;

    let action = resolve_action(&state, "");
    assert_eq!(action.kind, ChatAction::Stop);
    assert_eq!(action.label, "Stop analysis");
}

#[test]
fn running_execution_resolves_to_stop_generation() {
    let mut state = with_messages(&[MessageRole::User]);
    state.execution_running = true;

    let action = resolve_action(&state, "");
    assert_eq!(action.kind, ChatAction::Stop);
    assert_eq!(action.label, "Stop generation");
}

#[test]
fn analysis_label_wins_when_both_flags_are_set() {
    let mut state = with_messages(&[MessageRole::User]);
    state.analysis_running = true;
    state.execution_running = true;

    assert_eq!(resolve_action(&state, "").label, "Stop analysis");
}

// =============================================================
// Wire format
// =============================================================

#[test]
fn message_role_serializes_to_snake_case() {
    assert_eq!(serde_json::to_value(MessageRole::User).unwrap(), serde_json::json!("user"));
    assert_eq!(
        serde_json::to_value(MessageRole::Assistant).unwrap(),
        serde_json::json!("assistant")
    );
}
