#[cfg(test)]
#[path = "material_test.rs"]
mod material_test;

use serde::{Deserialize, Serialize};

/// An editable material: a named piece of context the assistant can draw on.
///
/// The draft lives in memory while the editor page is open and is only
/// persisted on an explicit save. Exactly one of the three content fields is
/// active at a time, selected by `content_type`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Material {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub usage: String,
    #[serde(default)]
    pub status: MaterialStatus,
    #[serde(default)]
    pub defined_in: AssetLocation,
    #[serde(default)]
    pub content_type: MaterialContentType,
    #[serde(default)]
    pub content_static_text: String,
    #[serde(default)]
    pub content_dynamic_text: String,
    #[serde(default)]
    pub content_api: String,
}

impl Material {
    /// Fresh local draft used when the route id is `new`.
    pub fn new_draft() -> Self {
        let mut draft = Self {
            name: "New material".to_owned(),
            ..Self::default()
        };
        draft.id = sanitize_id(&draft.name);
        draft
    }

    /// Set the display name and re-derive the identifier from it.
    ///
    /// The id is never hand-edited; an empty name leaves the previous id in
    /// place instead of clearing it.
    pub fn rename(&mut self, name: impl Into<String>) {
        let name = name.into();
        if !name.is_empty() {
            self.id = sanitize_id(&name);
        }
        self.name = name;
    }

    /// The content field selected by `content_type`.
    pub fn content_body(&self) -> &str {
        match self.content_type {
            MaterialContentType::StaticText => &self.content_static_text,
            MaterialContentType::DynamicText => &self.content_dynamic_text,
            MaterialContentType::Api => &self.content_api,
        }
    }

    /// Replace the content field selected by `content_type`.
    pub fn set_content_body(&mut self, body: impl Into<String>) {
        let body = body.into();
        match self.content_type {
            MaterialContentType::StaticText => self.content_static_text = body,
            MaterialContentType::DynamicText => self.content_dynamic_text = body,
            MaterialContentType::Api => self.content_api = body,
        }
    }
}

/// Normalize a display name into an identifier.
///
/// Lowercases, turns whitespace runs into single underscores, drops anything
/// outside `[a-z0-9_]`, collapses duplicate underscores, and trims them from
/// both ends. Total over all inputs and idempotent.
pub fn sanitize_id(name: &str) -> String {
    let lowered = name.to_lowercase();

    let mut mapped = String::with_capacity(lowered.len());
    let mut pending_separator = false;
    for ch in lowered.chars() {
        if ch.is_whitespace() {
            pending_separator = true;
            continue;
        }
        if pending_separator {
            mapped.push('_');
            pending_separator = false;
        }
        if ch.is_ascii_alphanumeric() || ch == '_' {
            mapped.push(ch);
        }
    }

    let mut collapsed = String::with_capacity(mapped.len());
    for ch in mapped.chars() {
        if ch == '_' && collapsed.ends_with('_') {
            continue;
        }
        collapsed.push(ch);
    }

    collapsed.trim_matches('_').to_owned()
}

/// Whether a material participates in context assembly.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaterialStatus {
    #[default]
    Enabled,
    Disabled,
    Forced,
}

impl MaterialStatus {
    pub const ALL: [Self; 3] = [Self::Enabled, Self::Disabled, Self::Forced];

    /// Wire/form value for this variant.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Enabled => "enabled",
            Self::Disabled => "disabled",
            Self::Forced => "forced",
        }
    }

    /// Parse a form value back into a variant.
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == value)
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Enabled => "Enabled",
            Self::Disabled => "Disabled",
            Self::Forced => "Forced",
        }
    }
}

/// Where a material is defined: shipped with the app or owned by the project.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetLocation {
    Core,
    #[default]
    Project,
}

impl AssetLocation {
    pub fn label(self) -> &'static str {
        match self {
            Self::Core => "Studio core",
            Self::Project => "Project",
        }
    }
}

/// How a material's content is produced.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaterialContentType {
    #[default]
    StaticText,
    DynamicText,
    Api,
}

impl MaterialContentType {
    pub const ALL: [Self; 3] = [Self::StaticText, Self::DynamicText, Self::Api];

    /// Wire/form value for this variant.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::StaticText => "static_text",
            Self::DynamicText => "dynamic_text",
            Self::Api => "api",
        }
    }

    /// Parse a form value back into a variant.
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == value)
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::StaticText => "Static text",
            Self::DynamicText => "Dynamic text",
            Self::Api => "API module",
        }
    }
}
