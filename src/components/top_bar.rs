//! Top navigation bar shared by all pages.

use leptos::prelude::*;

/// App header with navigation to the chat home and the material editor.
#[component]
pub fn TopBar() -> impl IntoView {
    view! {
        <header class="top-bar">
            <a class="top-bar__brand" href="/">
                "Studio"
            </a>
            <nav class="top-bar__nav">
                <a class="top-bar__link" href="/">
                    "Chat"
                </a>
                <a class="top-bar__link" href="/materials/new">
                    "+ New material"
                </a>
            </nav>
        </header>
    }
}
