//! REST API helpers for communicating with the backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Native builds: inert stubs, since these endpoints are only meaningful in
//! the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result` outputs instead of panics so load/save failures
//! degrade to visible UI states (error panels, toasts) without crashing the
//! app. Preview rendering never fails at all; transport errors are folded
//! into the `error` field of the result.

#![allow(clippy::unused_async)]

use crate::state::chat::ChatMessage;
use crate::state::material::Material;

use super::types::{AnalysisPlan, RenderedMaterial};

/// Route id denoting a not-yet-persisted material.
pub const NEW_MATERIAL_ID: &str = "new";

/// Fetch a material by id from `GET /api/materials/{id}`.
///
/// The id `new` resolves locally to a fresh draft with no request.
///
/// # Errors
///
/// Returns an error string if the request fails or the id is unknown.
pub async fn fetch_material(id: &str) -> Result<Material, String> {
    if id == NEW_MATERIAL_ID {
        return Ok(Material::new_draft());
    }
    #[cfg(feature = "hydrate")]
    {
        let url = format!("/api/materials/{id}");
        let resp = gloo_net::http::Request::get(&url)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(format!("material fetch failed: {}", resp.status()));
        }
        resp.json::<Material>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(format!("material {id} not available outside the browser"))
    }
}

/// Persist a new material via `POST /api/materials`.
///
/// # Errors
///
/// Returns an error string if the save request fails.
pub async fn create_material(material: &Material) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post("/api/materials")
            .json(material)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(format!("material create failed: {}", resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = material;
        Err("not available outside the browser".to_owned())
    }
}

/// Persist changes to an existing material via `PATCH /api/materials/{id}`.
///
/// # Errors
///
/// Returns an error string if the save request fails.
pub async fn update_material(material: &Material) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let url = format!("/api/materials/{}", material.id);
        let resp = gloo_net::http::Request::patch(&url)
            .json(material)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(format!("material update failed: {}", resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = material;
        Err("not available outside the browser".to_owned())
    }
}

/// Render a material's current content via `POST /api/materials/preview`.
///
/// Never fails; any transport or decode error comes back in the `error`
/// field of the result.
pub async fn render_preview(material: &Material) -> RenderedMaterial {
    #[cfg(feature = "hydrate")]
    {
        let request = match gloo_net::http::Request::post("/api/materials/preview").json(material) {
            Ok(request) => request,
            Err(e) => return RenderedMaterial::from_error(e.to_string()),
        };
        let resp = match request.send().await {
            Ok(resp) => resp,
            Err(e) => return RenderedMaterial::from_error(e.to_string()),
        };
        if !resp.ok() {
            return RenderedMaterial::from_error(format!("preview render failed: {}", resp.status()));
        }
        match resp.json::<RenderedMaterial>().await {
            Ok(rendered) => rendered,
            Err(e) => RenderedMaterial::from_error(e.to_string()),
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = material;
        RenderedMaterial::from_error("not available outside the browser")
    }
}

/// Run the analysis phase over the transcript via `POST /api/chat/analyze`.
///
/// # Errors
///
/// Returns an error string if the request fails.
pub async fn analyze_chat(messages: &[ChatMessage]) -> Result<AnalysisPlan, String> {
    #[cfg(feature = "hydrate")]
    {
        let body = serde_json::json!({ "messages": messages });
        let resp = gloo_net::http::Request::post("/api/chat/analyze")
            .json(&body)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(format!("analysis failed: {}", resp.status()));
        }
        resp.json::<AnalysisPlan>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = messages;
        Err("not available outside the browser".to_owned())
    }
}

/// Generate the assistant reply via `POST /api/chat/reply`.
///
/// # Errors
///
/// Returns an error string if the request fails.
pub async fn generate_reply(
    messages: &[ChatMessage],
    plan: &AnalysisPlan,
) -> Result<ChatMessage, String> {
    #[cfg(feature = "hydrate")]
    {
        let body = serde_json::json!({ "messages": messages, "plan": plan });
        let resp = gloo_net::http::Request::post("/api/chat/reply")
            .json(&body)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(format!("reply generation failed: {}", resp.status()));
        }
        resp.json::<ChatMessage>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (messages, plan);
        Err("not available outside the browser".to_owned())
    }
}

/// Ask the backend to cancel the running chat process via
/// `POST /api/chat/stop`. Fire-and-forget.
pub async fn stop_chat() {
    #[cfg(feature = "hydrate")]
    {
        let _ = gloo_net::http::Request::post("/api/chat/stop").send().await;
    }
}
