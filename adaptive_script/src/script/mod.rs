//! Conditional authentication script representation and shape utilities.
//!
//! A script reaches the console in three shapes: absent, a newline-joined
//! string, or an array of lines. This module owns every conversion between
//! those shapes so call sites never type-check the value themselves:
//! - `types`: the [`ScriptSource`] tagged union
//! - `config`: product constants for the generated script shape
//! - `normalize`: minification, line/string conversion, template-encoding
//!   detection
//! - `generate`: deterministic default-script generation per step count
//! - `classify`: "is this an untouched default" decisions
//! - `format`: display normalization for externally-supplied scripts

mod classify;
mod config;
mod format;
mod generate;
mod normalize;
mod types;

pub use classify::{is_default_script, is_untouched_default};
pub use config::{DEFAULT_SCRIPT_FOOTER, DEFAULT_SCRIPT_HEADER, EMPTY_JSON_ARRAY, LINE_BREAK};
pub use format::format_external;
pub use generate::{default_script, generate_script};
pub use normalize::{
    decode_template_encoding, is_empty_script, is_template_encoding, minified_eq, minify,
    strip_slashes, to_display_string, to_lines,
};
pub use types::ScriptSource;
