//! Adaptive authentication template catalog.
//!
//! Templates are predefined script snippets served by the admin API and
//! inserted verbatim into the editor on selection. This module carries the
//! serde model of the catalog payload and the double-encoding applied when
//! an inserted template is persisted.

mod catalog;
mod errors;
mod types;

pub use catalog::{encode_template_script, parse_templates_list};
pub use errors::TemplateError;
pub use types::{AuthTemplate, AuthTemplateCategory, AuthTemplatesList};
