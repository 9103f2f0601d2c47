//! Authentication sequence snapshot and step/script synchronization.
//!
//! The flow builder owns the list of authentication steps; this module keeps
//! the conditional authentication script in lockstep when steps are added or
//! removed, and normalizes the script on its way back to the configuration
//! store.

mod sync;
mod types;

pub use sync::{
    default_sequence_script, editor_initially_visible, script_after_step_added,
    script_after_step_removed, script_for_update,
};
pub use types::AuthenticationSequence;
