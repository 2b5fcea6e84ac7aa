//! Material editor page — form bindings, derived id, and the debounced
//! preview pane.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::top_bar::TopBar;
use crate::net::api;
use crate::state::material::{Material, MaterialContentType, MaterialStatus};
use crate::state::preview::PreviewState;
use crate::state::toasts::ToastsState;

#[cfg(feature = "hydrate")]
use crate::state::preview::PREVIEW_DEBOUNCE_MS;

/// Material editor page.
///
/// Reads the material id from the route (`new` starts a fresh draft), holds
/// the draft in memory, and persists it only on an explicit save. The id
/// field is derived from the display name and never hand-edited. A preview
/// of the rendered content refreshes after a quiet interval following the
/// last edit.
#[component]
pub fn MaterialPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastsState>>();
    let params = use_params_map();

    let draft = RwSignal::new(None::<Material>);
    let load_error = RwSignal::new(None::<String>);
    let preview = RwSignal::new(PreviewState::default());
    let was_new = RwSignal::new(false);
    let saving = RwSignal::new(false);

    let material_id = move || params.read().get("id").unwrap_or_default();

    // Load (or locally default) the draft whenever the route param changes.
    Effect::new(move || {
        let id = material_id();
        draft.set(None);
        load_error.set(None);
        was_new.set(id == api::NEW_MATERIAL_ID);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match api::fetch_material(&id).await {
                Ok(material) => draft.set(Some(material)),
                Err(e) => load_error.set(Some(e)),
            }
        });
    });

    // Debounced preview: any draft change clears the shown preview and takes
    // a fresh ticket; the scheduled task re-checks the ticket after the
    // quiet interval and again when the response arrives, so superseded
    // timers and late responses never reach the pane.
    Effect::new(move || {
        let Some(current) = draft.get() else {
            preview.update(|p| {
                p.invalidate();
            });
            return;
        };

        let mut ticket = 0_u64;
        preview.update(|p| ticket = p.invalidate());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(std::time::Duration::from_millis(PREVIEW_DEBOUNCE_MS)).await;
            if !crate::state::preview::is_ticket_current(preview, ticket) {
                return;
            }
            let rendered = api::render_preview(&current).await;
            preview.update(|p| {
                p.apply(ticket, rendered);
            });
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (current, ticket);
    });

    // A pending timer wakes to a stale ticket after unmount and does nothing.
    on_cleanup(move || {
        preview.update(|p| {
            p.invalidate();
        });
    });

    #[cfg(feature = "hydrate")]
    let navigate = leptos_router::hooks::use_navigate();

    let on_save = Callback::new(move |()| {
        let Some(material) = draft.get_untracked() else {
            return;
        };
        if saving.get_untracked() {
            return;
        }
        saving.set(true);
        let create = was_new.get_untracked();

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let result = if create {
                    api::create_material(&material).await
                } else {
                    api::update_material(&material).await
                };
                saving.set(false);

                match result {
                    Ok(()) => {
                        crate::state::toasts::notify(
                            toasts,
                            "Saved",
                            format!("Material \"{}\" saved", material.name),
                            crate::state::toasts::ToastSeverity::Success,
                        );
                        if create {
                            navigate(
                                &format!("/materials/{}", material.id),
                                leptos_router::NavigateOptions::default(),
                            );
                        }
                    }
                    Err(e) => {
                        crate::state::toasts::notify(
                            toasts,
                            "Save failed",
                            e,
                            crate::state::toasts::ToastSeverity::Error,
                        );
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (material, create, toasts);
    });

    view! {
        <div class="material-page">
            <TopBar/>

            <div class="material-page__body">
                {move || {
                    if let Some(error) = load_error.get() {
                        return view! {
                            <div class="material-page__error">
                                {format!("Failed to load material: {error}")}
                            </div>
                        }
                            .into_any();
                    }

                    let Some(material) = draft.get() else {
                        return view! {
                            <div class="material-page__loading">"Loading material..."</div>
                        }
                            .into_any();
                    };

                    render_editor(material, draft, preview, on_save, saving).into_any()
                }}
            </div>
        </div>
    }
}

/// The editor form plus the preview pane, rendered from a draft snapshot.
fn render_editor(
    material: Material,
    draft: RwSignal<Option<Material>>,
    preview: RwSignal<PreviewState>,
    on_save: Callback<()>,
    saving: RwSignal<bool>,
) -> impl IntoView {
    let update = move |f: &dyn Fn(&mut Material)| {
        draft.update(|d| {
            if let Some(material) = d {
                f(material);
            }
        });
    };

    view! {
        <div class="material-page__editor">
            <div class="material-page__form">
                <label class="material-page__label">
                    "Name"
                    <input
                        class="material-page__input"
                        type="text"
                        prop:value=material.name.clone()
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            update(&|m| m.rename(value.clone()));
                        }
                    />
                </label>

                <div class="material-page__meta">
                    <span class="material-page__id" title="Derived from the name">
                        {material.id.clone()}
                    </span>
                    <span class="material-page__location">{material.defined_in.label()}</span>
                </div>

                <label class="material-page__label">
                    "Usage"
                    <textarea
                        class="material-page__textarea material-page__textarea--usage"
                        placeholder="When should the assistant reach for this material?"
                        prop:value=material.usage.clone()
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            update(&|m| m.usage = value.clone());
                        }
                    ></textarea>
                </label>

                <label class="material-page__label">
                    "Status"
                    <select
                        class="material-page__select"
                        on:change=move |ev| {
                            let value = event_target_value(&ev);
                            update(&|m| {
                                if let Some(status) = MaterialStatus::parse(&value) {
                                    m.status = status;
                                }
                            });
                        }
                    >
                        {MaterialStatus::ALL
                            .into_iter()
                            .map(|status| {
                                view! {
                                    <option value=status.as_str() selected={status == material.status}>
                                        {status.label()}
                                    </option>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </select>
                </label>

                <label class="material-page__label">
                    "Content type"
                    <select
                        class="material-page__select"
                        on:change=move |ev| {
                            let value = event_target_value(&ev);
                            update(&|m| {
                                if let Some(content_type) = MaterialContentType::parse(&value) {
                                    m.content_type = content_type;
                                }
                            });
                        }
                    >
                        {MaterialContentType::ALL
                            .into_iter()
                            .map(|content_type| {
                                view! {
                                    <option
                                        value=content_type.as_str()
                                        selected={content_type == material.content_type}
                                    >
                                        {content_type.label()}
                                    </option>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </select>
                </label>

                <label class="material-page__label">
                    {material.content_type.label()}
                    <textarea
                        class="material-page__textarea material-page__textarea--content"
                        prop:value=material.content_body().to_owned()
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            update(&|m| m.set_content_body(value.clone()));
                        }
                    ></textarea>
                </label>

                <div class="material-page__actions">
                    <button
                        class="btn btn--primary"
                        on:click=move |_| on_save.run(())
                        disabled=move || saving.get()
                    >
                        {move || if saving.get() { "Saving..." } else { "Save" }}
                    </button>
                </div>
            </div>

            <div class="material-page__preview">
                <h3 class="material-page__preview-title">"Preview"</h3>
                {move || {
                    match preview.get().rendered() {
                        None => view! {
                            <p class="material-page__preview-pending">
                                "The preview refreshes a few seconds after you stop typing."
                            </p>
                        }
                            .into_any(),
                        Some(rendered) => {
                            if let Some(error) = rendered.error.clone() {
                                view! {
                                    <pre class="material-page__preview-error">{error}</pre>
                                }
                                    .into_any()
                            } else {
                                view! {
                                    <pre class="material-page__preview-content">
                                        {rendered.content.clone().unwrap_or_default()}
                                    </pre>
                                }
                                    .into_any()
                            }
                        }
                    }
                }}
            </div>
        </div>
    }
}
