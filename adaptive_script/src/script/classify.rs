use super::generate::generate_script;
use super::normalize::minify;
use super::types::ScriptSource;

/// Whether a script is the untouched generated default for exactly the
/// given step count.
///
/// Strict single-count check by minified comparison; it does not search
/// across step counts. See [`is_untouched_default`] for the scanning
/// variant.
pub fn is_default_script(script: &ScriptSource, step_count: u32) -> bool {
    minify(script) == minify(&ScriptSource::from(generate_script(step_count)))
}

/// Whether a script is an untouched generated default for *any* step count
/// from `max_step_count` down to 1.
///
/// After a step is removed, the persisted script may still equal the default
/// generated for the previous step count. The downward scan recognizes that
/// the script is safe to regenerate rather than preserve.
pub fn is_untouched_default(script: &ScriptSource, max_step_count: u32) -> bool {
    (1..=max_step_count)
        .rev()
        .any(|step_count| is_default_script(script, step_count))
}
