use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A predefined conditional authentication script offered by the template
/// catalog, inserted verbatim into the editor on selection.
///
/// Only `name` and `code` participate in reconciliation; the descriptive
/// fields ride along for the catalog side panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthTemplate {
    /// Catalog identifier, unique within a category.
    pub name: String,
    /// Human-readable title shown in the side panel.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// One-paragraph description of what the template does.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    /// Script body, one entry per line.
    pub code: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub help_link: Option<String>,
    /// Per-step descriptions keyed by step number.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub default_steps_description: HashMap<String, String>,
    /// Descriptions of the placeholders the admin must fill in.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub parameters_description: HashMap<String, String>,
}

/// A named group of templates in the catalog payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthTemplateCategory {
    pub display_name: String,
    #[serde(default)]
    pub order: u32,
    #[serde(default)]
    pub templates: Vec<AuthTemplate>,
}

/// The template catalog as served by the admin API.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AuthTemplatesList {
    /// Categories keyed by category identifier.
    #[serde(rename = "templatesJSON", default)]
    pub templates_json: HashMap<String, AuthTemplateCategory>,
}
