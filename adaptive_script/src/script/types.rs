use serde::{Deserialize, Serialize};

/// A conditional authentication script as it appears in an application's
/// persisted sign-on configuration.
///
/// The admin API surfaces the script in three shapes: absent, a plain
/// newline-joined string, or an array of lines. A template insertion persists
/// a JSON-encoded line array inside the string shape; see
/// [`is_template_encoding`](crate::script::is_template_encoding).
///
/// Two sources are considered equivalent when their minified forms are equal,
/// regardless of shape. Whitespace-only differences never count as a change.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ScriptSource {
    /// No script configured (absent or `null` in the persisted configuration).
    #[default]
    Empty,
    /// Newline-joined source, or a JSON-encoded line array when the value
    /// originates from a template insertion.
    Raw(String),
    /// One entry per line.
    Lines(Vec<String>),
}

impl From<&str> for ScriptSource {
    fn from(value: &str) -> Self {
        Self::Raw(value.to_string())
    }
}

impl From<String> for ScriptSource {
    fn from(value: String) -> Self {
        Self::Raw(value)
    }
}

impl From<Vec<String>> for ScriptSource {
    fn from(value: Vec<String>) -> Self {
        Self::Lines(value)
    }
}

impl From<&[&str]> for ScriptSource {
    fn from(value: &[&str]) -> Self {
        Self::Lines(value.iter().map(|line| line.to_string()).collect())
    }
}
