use super::config::{DEFAULT_SCRIPT, STEP_CALL_INDENT};

/// Returns the zero-step default script: header and footer with no
/// `executeStep` calls. The shape a brand-new application starts from.
pub fn default_script() -> Vec<String> {
    DEFAULT_SCRIPT.iter().map(|line| line.to_string()).collect()
}

/// Generates the default script containing one `executeStep` call per step.
///
/// Callers follow the `steps + 1` convention: a flow with `S` configured
/// steps passes `step_count = S + 1`, producing calls for steps `1..=S` in
/// ascending order directly after the header line. `step_count <= 1` yields
/// the zero-step skeleton unchanged.
pub fn generate_script(step_count: u32) -> Vec<String> {
    let mut script = default_script();
    for step in 1..step_count {
        script.insert(step as usize, format!("{STEP_CALL_INDENT}executeStep({step});"));
    }
    script
}
