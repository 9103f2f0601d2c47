use crate::script::{
    LINE_BREAK, ScriptSource, generate_script, is_default_script, is_empty_script,
};

/// Script accompanying a step appended to a flow with `steps` configured
/// steps.
///
/// When the script is still the untouched default for the current count, the
/// replacement gains one more `executeStep` call so it keeps tracking the
/// flow. A user-authored script returns `None` and is left alone.
pub fn script_after_step_added(script: &ScriptSource, steps: u32) -> Option<String> {
    is_default_script(script, steps + 1).then(|| generate_script(steps + 2).join(LINE_BREAK))
}

/// Mirror image of [`script_after_step_added`] for step removal: an
/// untouched default loses its last `executeStep` call, anything else is
/// preserved.
pub fn script_after_step_removed(script: &ScriptSource, steps: u32) -> Option<String> {
    is_default_script(script, steps + 1).then(|| generate_script(steps).join(LINE_BREAK))
}

/// Save-time normalization of the outgoing script.
///
/// An empty editor is persisted as the generated default for the current
/// step count when adaptive authentication is available, or as an empty
/// string when it is not. The returned flag reports whether the outgoing
/// value was synthesized as the conceptual default, for the configuration
/// collaborator's own bookkeeping.
pub fn script_for_update(
    script: &ScriptSource,
    steps: u32,
    adaptive_enabled: bool,
) -> (ScriptSource, bool) {
    if is_empty_script(script) {
        if adaptive_enabled {
            let generated = generate_script(steps + 1).join(LINE_BREAK);
            return (ScriptSource::from(generated), true);
        }
        return (ScriptSource::from(""), false);
    }
    (script.clone(), false)
}

/// The script a brand-new single-step sequence is seeded with.
pub fn default_sequence_script() -> String {
    generate_script(2).join(LINE_BREAK)
}

/// Whether the conditional authentication editor section starts expanded.
///
/// Read-only viewers always see the script. Otherwise the section opens only
/// when a script exists and is not the untouched default for the current
/// step count, which is taken as evidence the admin modified it.
pub fn editor_initially_visible(read_only: bool, script: &ScriptSource, steps: u32) -> bool {
    if read_only {
        return true;
    }
    !is_empty_script(script) && !is_default_script(script, steps + 1)
}
