#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use serde::{Deserialize, Serialize};

/// Fixed prompt submitted by the "Guide me" action when the assistant spoke
/// last and the input is empty.
pub const GUIDANCE_PROMPT: &str = "Can you suggest what I should do next?";

/// Who authored a message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageRole {
    User,
    Assistant,
}

/// A single conversation message.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: String,
    pub role: MessageRole,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            role: MessageRole::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            role: MessageRole::Assistant,
            content: content.into(),
        }
    }
}

/// State for the chat page: the transcript plus run flags for the two
/// background phases (analysis picks an approach, execution generates the
/// reply).
///
/// `run` is a staleness ticket: it is bumped by every new submission and by
/// stop, so a phase completing after either event is discarded rather than
/// applied to state it no longer describes.
#[derive(Clone, Debug, Default)]
pub struct ChatState {
    pub messages: Vec<ChatMessage>,
    pub analysis_running: bool,
    pub execution_running: bool,
    run: u64,
}

impl ChatState {
    /// Whether either background phase is active.
    pub fn is_running(&self) -> bool {
        self.analysis_running || self.execution_running
    }

    /// Whether the newest message came from the end user.
    pub fn last_from_user(&self) -> bool {
        matches!(self.messages.last(), Some(m) if m.role == MessageRole::User)
    }

    /// Start a new run: supersede any previous one, enter the analysis
    /// phase, and return the ticket for this run.
    pub fn begin_run(&mut self) -> u64 {
        self.run += 1;
        self.analysis_running = true;
        self.execution_running = false;
        self.run
    }

    /// Whether `ticket` still names the newest run.
    pub fn is_current_run(&self, ticket: u64) -> bool {
        self.run == ticket
    }

    /// Stop: clear both flags and orphan any in-flight run.
    pub fn halt(&mut self) {
        self.run += 1;
        self.analysis_running = false;
        self.execution_running = false;
    }
}

/// What the primary chat button does when clicked.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChatAction {
    /// Submit the pending input and clear it.
    Submit,
    /// Resubmit with empty input to request a reply.
    RequestReply,
    /// Submit the fixed [`GUIDANCE_PROMPT`].
    RequestGuidance,
    /// Cancel the running process.
    Stop,
}

/// Icon shown on the primary chat button.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActionIcon {
    Send,
    Reply,
    Guide,
    Stop,
}

/// The one primary action the chat page offers right now.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ActionDescriptor {
    pub kind: ChatAction,
    pub label: &'static str,
    pub icon: ActionIcon,
}

/// Map the current run state and pending input to exactly one action.
///
/// Pure and total; re-evaluated on every render. First matching rule wins.
pub fn resolve_action(state: &ChatState, input: &str) -> ActionDescriptor {
    if !input.trim().is_empty() || state.messages.is_empty() {
        return ActionDescriptor {
            kind: ChatAction::Submit,
            label: "Send",
            icon: ActionIcon::Send,
        };
    }

    if !state.is_running() {
        if state.last_from_user() {
            return ActionDescriptor {
                kind: ChatAction::RequestReply,
                label: "Get reply",
                icon: ActionIcon::Reply,
            };
        }
        return ActionDescriptor {
            kind: ChatAction::RequestGuidance,
            label: "Guide me",
            icon: ActionIcon::Guide,
        };
    }

    // Analysis takes precedence when both flags are set.
    ActionDescriptor {
        kind: ChatAction::Stop,
        label: if state.analysis_running { "Stop analysis" } else { "Stop generation" },
        icon: ActionIcon::Stop,
    }
}
