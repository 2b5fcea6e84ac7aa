//! Single conversation message with role styling.

use leptos::prelude::*;

use crate::state::chat::{ChatMessage, MessageRole};

/// One message bubble in the transcript.
#[component]
pub fn MessageGroup(message: ChatMessage) -> impl IntoView {
    let is_user = message.role == MessageRole::User;
    let author = if is_user { "You" } else { "Assistant" };

    view! {
        <div class="message-group" class:message-group--user=is_user>
            <span class="message-group__author">{author}</span>
            <div class="message-group__content">{message.content.clone()}</div>
        </div>
    }
}
