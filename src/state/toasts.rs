#[cfg(test)]
#[path = "toasts_test.rs"]
mod toasts_test;

use leptos::prelude::*;

/// How long a toast stays on screen before auto-dismissing.
#[cfg(feature = "hydrate")]
const TOAST_TTL_MS: u64 = 5000;

/// Severity of a user-facing notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastSeverity {
    Info,
    Success,
    Error,
}

impl ToastSeverity {
    /// CSS modifier for this severity.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

/// A single queued notification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: String,
    pub title: String,
    pub message: String,
    pub severity: ToastSeverity,
}

/// Queue of notifications rendered by the toast shelf.
#[derive(Clone, Debug, Default)]
pub struct ToastsState {
    pub toasts: Vec<Toast>,
}

impl ToastsState {
    /// Append a toast and return its id.
    pub fn push(
        &mut self,
        title: impl Into<String>,
        message: impl Into<String>,
        severity: ToastSeverity,
    ) -> String {
        let id = uuid::Uuid::new_v4().to_string();
        self.toasts.push(Toast {
            id: id.clone(),
            title: title.into(),
            message: message.into(),
            severity,
        });
        id
    }

    /// Remove the toast with `id`, if still queued.
    pub fn dismiss(&mut self, id: &str) {
        self.toasts.retain(|t| t.id != id);
    }
}

/// Push a toast and schedule its auto-dismissal.
pub fn notify(
    toasts: RwSignal<ToastsState>,
    title: impl Into<String>,
    message: impl Into<String>,
    severity: ToastSeverity,
) {
    let mut id = String::new();
    toasts.update(|t| id = t.push(title, message, severity));

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(std::time::Duration::from_millis(TOAST_TTL_MS)).await;
        toasts.update(|t| t.dismiss(&id));
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = id;
}
