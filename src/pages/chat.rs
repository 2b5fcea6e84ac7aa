//! Chat page — transcript, input row, and the single resolved primary action.

use leptos::prelude::*;

use crate::components::message_group::MessageGroup;
use crate::components::top_bar::TopBar;
use crate::state::chat::{
    ActionIcon, ChatAction, ChatMessage, ChatState, GUIDANCE_PROMPT, resolve_action,
};
use crate::state::toasts::ToastsState;

/// Chat page showing the conversation and exactly one primary action button.
///
/// The button is recomputed from run state and pending input on every
/// render via [`resolve_action`].
#[component]
pub fn ChatPage() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();
    let toasts = expect_context::<RwSignal<ToastsState>>();

    let input = RwSignal::new(String::new());

    // Kick off a run: analysis first, then reply generation. Each state
    // application re-checks the run ticket so replies landing after a stop
    // or a newer submission are discarded.
    let run_reply = move || {
        let mut ticket = 0_u64;
        chat.update(|c| ticket = c.begin_run());
        let transcript = chat.get_untracked().messages;

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let plan = match crate::net::api::analyze_chat(&transcript).await {
                Ok(plan) => plan,
                Err(e) => {
                    chat.update(|c| {
                        if c.is_current_run(ticket) {
                            c.analysis_running = false;
                        }
                    });
                    if chat.with_untracked(|c| c.is_current_run(ticket)) {
                        crate::state::toasts::notify(
                            toasts,
                            "Analysis failed",
                            e,
                            crate::state::toasts::ToastSeverity::Error,
                        );
                    }
                    return;
                }
            };

            if !chat.with_untracked(|c| c.is_current_run(ticket)) {
                return;
            }
            chat.update(|c| {
                c.analysis_running = false;
                c.execution_running = true;
            });

            match crate::net::api::generate_reply(&transcript, &plan).await {
                Ok(message) => chat.update(|c| {
                    if c.is_current_run(ticket) {
                        c.execution_running = false;
                        c.messages.push(message);
                    }
                }),
                Err(e) => {
                    chat.update(|c| {
                        if c.is_current_run(ticket) {
                            c.execution_running = false;
                        }
                    });
                    if chat.with_untracked(|c| c.is_current_run(ticket)) {
                        crate::state::toasts::notify(
                            toasts,
                            "Reply failed",
                            e,
                            crate::state::toasts::ToastSeverity::Error,
                        );
                    }
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (ticket, transcript, toasts);
    };

    // Run-state store contract: push the text as a user turn when non-empty,
    // then request a reply either way.
    let submit = move |text: String| {
        if !text.trim().is_empty() {
            chat.update(|c| c.messages.push(ChatMessage::user(text.clone())));
        }
        run_reply();
    };

    let on_action = move || {
        let action = chat.with_untracked(|c| resolve_action(c, &input.get_untracked()));
        match action.kind {
            ChatAction::Submit => {
                submit(input.get_untracked());
                input.set(String::new());
            }
            ChatAction::RequestReply => submit(String::new()),
            ChatAction::RequestGuidance => submit(GUIDANCE_PROMPT.to_owned()),
            ChatAction::Stop => {
                chat.update(ChatState::halt);
                #[cfg(feature = "hydrate")]
                leptos::task::spawn_local(crate::net::api::stop_chat());
            }
        }
    };

    let on_click = move |_| on_action();

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            on_action();
        }
    };

    let action = move || resolve_action(&chat.get(), &input.get());

    let phase_label = move || {
        let state = chat.get();
        if state.analysis_running {
            Some("Analyzing...")
        } else if state.execution_running {
            Some("Generating...")
        } else {
            None
        }
    };

    view! {
        <div class="chat-page">
            <TopBar/>

            <div class="chat-page__messages">
                {move || {
                    let messages = chat.get().messages;
                    if messages.is_empty() {
                        return view! {
                            <div class="chat-page__empty">
                                <h2>"Start a conversation"</h2>
                                <p>"Ask anything, or just hit Send to let the assistant open."</p>
                            </div>
                        }
                            .into_any();
                    }

                    messages
                        .into_iter()
                        .map(|message| view! { <MessageGroup message=message/> })
                        .collect::<Vec<_>>()
                        .into_any()
                }}
                {move || {
                    phase_label().map(|label| view! { <div class="chat-page__phase">{label}</div> })
                }}
            </div>

            <div class="chat-page__input-row">
                <input
                    class="chat-page__input"
                    type="text"
                    placeholder="Message the assistant..."
                    prop:value=move || input.get()
                    on:input=move |ev| input.set(event_target_value(&ev))
                    on:keydown=on_keydown
                />
                <button class="btn btn--primary chat-page__action" on:click=on_click>
                    {move || {
                        let action = action();
                        view! {
                            {action_glyph(action.icon)}
                            <span class="chat-page__action-label">{action.label}</span>
                        }
                    }}
                </button>
            </div>
        </div>
    }
}

/// Inline SVG glyph for the primary action button.
fn action_glyph(icon: ActionIcon) -> impl IntoView {
    match icon {
        ActionIcon::Send => view! {
            <svg class="chat-page__glyph" viewBox="0 0 20 20" aria-hidden="true">
                <path d="M3 10 L17 3 L13 10 L17 17 Z"></path>
            </svg>
        }
        .into_any(),
        ActionIcon::Reply => view! {
            <svg class="chat-page__glyph" viewBox="0 0 20 20" aria-hidden="true">
                <path d="M4 14 L4 8 L16 8 M13 5 L16 8 L13 11"></path>
            </svg>
        }
        .into_any(),
        ActionIcon::Guide => view! {
            <svg class="chat-page__glyph" viewBox="0 0 20 20" aria-hidden="true">
                <path d="M7 7 a3 3 0 1 1 4 3 L10 12"></path>
                <circle cx="10" cy="15.5" r="1"></circle>
            </svg>
        }
        .into_any(),
        ActionIcon::Stop => view! {
            <svg class="chat-page__glyph" viewBox="0 0 20 20" aria-hidden="true">
                <rect x="5" y="5" width="10" height="10"></rect>
            </svg>
        }
        .into_any(),
    }
}
