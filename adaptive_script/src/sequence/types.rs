use serde::{Deserialize, Serialize};

use crate::script::ScriptSource;

/// The slice of an application's persisted sign-on configuration consumed by
/// script reconciliation: the script value and the configured step count.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AuthenticationSequence {
    /// Persisted conditional authentication script, in whichever shape the
    /// configuration store returned it.
    #[serde(default)]
    pub script: ScriptSource,
    /// Number of configured authentication steps.
    #[serde(default)]
    pub steps: u32,
}

impl AuthenticationSequence {
    pub fn new(script: impl Into<ScriptSource>, steps: u32) -> Self {
        Self {
            script: script.into(),
            steps,
        }
    }
}
