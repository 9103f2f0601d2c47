use super::errors::TemplateError;
use super::types::{AuthTemplate, AuthTemplatesList};

/// Parses the catalog payload fetched from the admin API.
///
/// # Arguments
/// * `payload` - The raw JSON body of the template listing response
///
/// # Returns
/// * `Result<AuthTemplatesList, TemplateError>` - The parsed catalog, or a
///   decoding error for the caller to surface
pub fn parse_templates_list(payload: &str) -> Result<AuthTemplatesList, TemplateError> {
    serde_json::from_str(payload).map_err(|e| TemplateError::Decoding(e.to_string()))
}

/// Produces the double-encoded persisted value for an inserted template.
///
/// Template scripts are stored as a JSON-encoded array of lines inside the
/// configuration's string-typed script field; the reconciliation engine
/// later recognizes that encoding to tell template insertions apart from
/// free-typed scripts.
pub fn encode_template_script(template: &AuthTemplate) -> Result<String, TemplateError> {
    serde_json::to_string(&template.code).map_err(|e| TemplateError::Encoding(e.to_string()))
}
