//! adaptive-script - Conditional authentication script reconciliation
//!
//! This crate decides what an identity admin console's script editor should
//! display when its external inputs change: the number of configured login
//! steps, the script value persisted on an application's sign-on
//! configuration, and the text the administrator is typing. It regenerates
//! generated defaults when the step count moves, recognizes and applies
//! template insertions, and preserves in-progress edits rather than
//! clobbering them.
//!
//! The surrounding console (HTTP clients, the editor widget, alerting) stays
//! outside: the engine consumes plain values and returns the side effects the
//! host owes its collaborators.

mod reconcile;
mod script;
mod sequence;
mod template;

// Re-export the reconciliation entry points and session state
pub use reconcile::{
    CursorPosition, EditorSession, EditorSurface, Resolution, SessionPatch, SideEffect,
    Transition, reconcile, reset, resolve, resync_editor, select_template,
};

// Re-export the script shape utilities
pub use script::{
    DEFAULT_SCRIPT_FOOTER, DEFAULT_SCRIPT_HEADER, EMPTY_JSON_ARRAY, LINE_BREAK, ScriptSource,
    default_script, format_external, generate_script, is_default_script, is_empty_script,
    is_template_encoding, is_untouched_default, minified_eq, minify, strip_slashes,
    to_display_string, to_lines,
};

pub use sequence::{
    AuthenticationSequence, default_sequence_script, editor_initially_visible,
    script_after_step_added, script_after_step_removed, script_for_update,
};

pub use template::{
    AuthTemplate, AuthTemplateCategory, AuthTemplatesList, TemplateError, encode_template_script,
    parse_templates_list,
};
