#[cfg(test)]
#[path = "preview_test.rs"]
mod preview_test;

use leptos::prelude::*;

use crate::net::types::RenderedMaterial;

/// Quiet interval between the last draft edit and the preview fetch.
pub const PREVIEW_DEBOUNCE_MS: u64 = 3000;

/// Debounce bookkeeping for the material preview pane.
///
/// Every draft edit clears the shown preview and takes a fresh ticket via
/// [`PreviewState::invalidate`]. The render task scheduled for that edit
/// re-checks its ticket after the quiet interval and again when the response
/// arrives, so superseded timers and late responses are dropped instead of
/// applied. At most one ticket is ever current.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PreviewState {
    rendered: Option<RenderedMaterial>,
    epoch: u64,
}

impl PreviewState {
    /// The rendered result currently on display, if any.
    pub fn rendered(&self) -> Option<&RenderedMaterial> {
        self.rendered.as_ref()
    }

    /// Clear the shown preview and return the ticket for the next render.
    pub fn invalidate(&mut self) -> u64 {
        self.rendered = None;
        self.epoch += 1;
        self.epoch
    }

    /// Whether `ticket` still names the newest scheduled render.
    pub fn is_current(&self, ticket: u64) -> bool {
        self.epoch == ticket
    }

    /// Store `result`, but only if `ticket` is still current.
    ///
    /// Returns whether the result was applied.
    pub fn apply(&mut self, ticket: u64, result: RenderedMaterial) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.rendered = Some(result);
        true
    }
}

/// Whether `ticket` is still current in a signal-held [`PreviewState`].
///
/// A debounce task can wake after the owning page has unmounted and its
/// signal has been disposed; a disposed signal reads as stale here instead
/// of panicking, so the woken task simply returns without fetching.
pub fn is_ticket_current(preview: RwSignal<PreviewState>, ticket: u64) -> bool {
    preview
        .try_with_untracked(|p| p.is_current(ticket))
        .unwrap_or(false)
}
