use thiserror::Error;

#[derive(Debug, Error, Clone)]
pub enum TemplateError {
    /// The template's code lines could not be serialized for persistence.
    #[error("Template encoding error: {0}")]
    Encoding(String),

    /// The catalog payload could not be parsed.
    #[error("Template catalog error: {0}")]
    Decoding(String),
}
