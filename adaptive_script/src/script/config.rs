//! Product constants for the conditional authentication script shape.

/// Opening line of every generated conditional authentication script.
pub const DEFAULT_SCRIPT_HEADER: &str = "var onLoginRequest = function(context) {";

/// Closing line of every generated conditional authentication script.
pub const DEFAULT_SCRIPT_FOOTER: &str = "};";

/// Line-break convention used when a script is joined for display or persistence.
pub const LINE_BREAK: &str = "\n";

/// Serialized form of an empty template payload.
pub const EMPTY_JSON_ARRAY: &str = "[]";

/// Indentation for generated `executeStep` calls and reformatted blocks.
pub(crate) const STEP_CALL_INDENT: &str = "    ";

/// The zero-step script skeleton: header, footer, trailing blank line.
/// `executeStep` calls are inserted between the first two entries.
pub(crate) const DEFAULT_SCRIPT: [&str; 3] = [DEFAULT_SCRIPT_HEADER, DEFAULT_SCRIPT_FOOTER, ""];
