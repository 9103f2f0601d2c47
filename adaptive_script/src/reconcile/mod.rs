//! The script reconciliation state machine.
//!
//! One [`EditorSession`] lives for as long as the script editor is mounted
//! for an application. Every change to the persisted script, the step count,
//! or the template selection runs one [`reconcile`] pass: an ordered list of
//! guarded transitions that decides what the editor should display and which
//! collaborators must be notified, without ever clobbering text the user is
//! actively editing unless policy says so.
//!
//! - `types`: session state, transition tags, side effects, resolutions
//! - `engine`: the decision function and its entry points
//! - `editor`: the injected editor-surface capability

mod editor;
mod engine;
mod types;

pub use editor::{CursorPosition, EditorSurface};
pub use engine::{reconcile, reset, resolve, resync_editor, select_template};
pub use types::{EditorSession, Resolution, SessionPatch, SideEffect, Transition};
