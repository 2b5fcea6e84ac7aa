//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::toast_shelf::ToastShelf;
use crate::pages::{chat::ChatPage, material::MaterialPage};
use crate::state::{chat::ChatState, toasts::ToastsState};

/// HTML shell for SSR + hydration.
///
/// Invoked by the hosting backend (external to this repo), which serves the
/// rendered shell and the `/pkg` assets; the browser then runs
/// [`crate::hydrate`] against it.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides all shared state contexts and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Provide reactive state contexts for all child components.
    let chat = RwSignal::new(ChatState::default());
    let toasts = RwSignal::new(ToastsState::default());

    provide_context(chat);
    provide_context(toasts);

    view! {
        <Stylesheet id="leptos" href="/pkg/studio-ui.css"/>
        <Title text="Studio"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=ChatPage/>
                <Route path=(StaticSegment("materials"), ParamSegment("id")) view=MaterialPage/>
            </Routes>
        </Router>

        <ToastShelf/>
    }
}
