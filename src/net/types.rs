//! Wire types shared with the backend.

use serde::{Deserialize, Serialize};

/// Result of rendering a material's content.
///
/// The two fields are mutually informative: when `error` is set the content
/// should not be trusted. The render endpoint never fails outright; failures
/// are encoded here instead.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderedMaterial {
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl RenderedMaterial {
    /// A render result carrying only an error message.
    pub fn from_error(message: impl Into<String>) -> Self {
        Self {
            content: None,
            error: Some(message.into()),
        }
    }
}

/// Outcome of the analysis phase: which agent should reply and what it
/// should do next.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisPlan {
    #[serde(default)]
    pub agent_id: String,
    #[serde(default)]
    pub next_step: String,
}
