//! Toast shelf rendering queued notifications.

use leptos::prelude::*;

use crate::state::toasts::ToastsState;

/// Fixed overlay listing active toasts, newest last. Each toast can be
/// dismissed by hand; auto-dismissal is scheduled where the toast is pushed
/// (see `state::toasts::notify`).
#[component]
pub fn ToastShelf() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastsState>>();

    view! {
        <div class="toast-shelf">
            {move || {
                toasts
                    .get()
                    .toasts
                    .iter()
                    .map(|toast| {
                        let id = toast.id.clone();
                        let class = format!("toast toast--{}", toast.severity.as_str());
                        view! {
                            <div class=class>
                                <strong class="toast__title">{toast.title.clone()}</strong>
                                <span class="toast__message">{toast.message.clone()}</span>
                                <button
                                    class="toast__dismiss"
                                    on:click=move |_| toasts.update(|t| t.dismiss(&id))
                                >
                                    "\u{00D7}"
                                </button>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
