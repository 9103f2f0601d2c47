use crate::script::{
    ScriptSource, decode_template_encoding, default_script, format_external, generate_script,
    is_default_script, is_empty_script, is_untouched_default, minified_eq, minify,
    to_display_string,
};
use crate::sequence::AuthenticationSequence;
use crate::template::{AuthTemplate, TemplateError, encode_template_script};

use super::editor::EditorSurface;
use super::types::{EditorSession, Resolution, SideEffect, Transition};

/// Computes the outcome of one reconciliation pass without touching the
/// session.
///
/// The rules are evaluated in order and the first match wins; the ordering
/// is a load-bearing invariant. `default_flagged` is the configuration
/// collaborator's independently-computed "this script is conceptually the
/// default" signal, consulted only by the reset fallback; it is derived with
/// different criteria than this engine's own classifier and the two can
/// disagree.
pub fn resolve(
    session: &EditorSession,
    sequence: &AuthenticationSequence,
    default_flagged: bool,
) -> Resolution {
    let persisted = &sequence.script;
    let steps = sequence.steps;

    // Nothing persisted yet: seed a script matching the configured steps.
    if is_empty_script(persisted) {
        if steps == 0 {
            return Resolution::display(default_script(), Transition::SeedDefault)
                .not_from_template();
        }
        return Resolution::display(generate_script(steps + 1), Transition::SeedForSteps)
            .not_from_template();
    }

    // Template insertions persist as a JSON-encoded line array.
    if let ScriptSource::Raw(raw) = persisted {
        if let Some(decoded) = decode_template_encoding(raw) {
            let decoded = ScriptSource::Lines(decoded);

            // The displayed template was edited since insertion; rewriting
            // the editor now would clobber the in-progress work.
            if session.from_template
                && !session.newly_added_template
                && minify_opt(session.internal_script.as_ref()) != minify(&decoded)
            {
                return Resolution::keep_editor(Transition::TemplateEditPreserved);
            }

            let mut resolution = Resolution::display(decoded, Transition::TemplateApplied);
            resolution.patch.from_template = Some(true);
            resolution.patch.newly_added_template = Some(false);
            return resolution;
        }
    }

    // The editor's own text takes precedence over the persisted value for
    // classification; it falls back to the persisted script until the user
    // has typed.
    let tracked = session.internal_script.as_ref().unwrap_or(persisted);
    let tracked_steps = session.internal_step_count.unwrap_or(steps);
    let internal_minified = minify_opt(session.internal_script.as_ref());
    let displayed_minified = minify_opt(session.displayed.as_ref());

    // Generation follows the `steps + 1` convention, so the scan upper bound
    // does too.
    let scan_from = tracked_steps.max(steps) + 1;

    // Still an untouched default, possibly for an older step count, and the
    // editor has not diverged: keep the script in sync with the steps.
    if is_untouched_default(tracked, scan_from) && internal_minified == displayed_minified {
        return Resolution::display(
            generate_script(steps + 1),
            Transition::RegeneratedForStepChange,
        )
        .track_steps(steps)
        .not_from_template();
    }

    // Default for the tracked count while editor and display fell out of
    // sync: regenerate for the current count.
    if is_default_script(tracked, tracked_steps + 1) && internal_minified != displayed_minified {
        return Resolution::display(
            generate_script(steps + 1),
            Transition::RegeneratedForTrackedSteps,
        )
        .track_steps(steps)
        .not_from_template();
    }

    // User-authored, non-template script.
    if !is_untouched_default(tracked, scan_from) {
        if internal_minified != minify(persisted) && internal_minified != displayed_minified {
            // In-progress edits win over the external value.
            let editor_text = session
                .internal_script
                .clone()
                .unwrap_or_else(|| persisted.clone());
            return Resolution::display(editor_text, Transition::EditorWins).track_steps(steps);
        }
        return Resolution::display(format_external(persisted), Transition::FormattedExternal)
            .track_steps(steps)
            .not_from_template();
    }

    // The collaborator insists the script is the default even though no rule
    // above matched; honor its verdict with a full reset.
    if default_flagged {
        return Resolution::display(generate_script(steps + 1), Transition::ExternalReset)
            .not_from_template()
            .with_effects(vec![
                SideEffect::ScriptReset,
                SideEffect::DisableConditionalAuth,
            ]);
    }

    Resolution::display(persisted.clone(), Transition::Verbatim).not_from_template()
}

fn minify_opt(script: Option<&ScriptSource>) -> String {
    script.map(minify).unwrap_or_default()
}

/// Runs one reconciliation pass and applies the outcome to the session.
///
/// Invoked whenever the persisted script, the step count, or a template
/// selection changes. Returns the resolution so the caller can dispatch its
/// side effects to the owning collaborators.
pub fn reconcile(
    session: &mut EditorSession,
    sequence: &AuthenticationSequence,
    default_flagged: bool,
) -> Resolution {
    let resolution = resolve(session, sequence, default_flagged);
    tracing::debug!(
        "Adaptive script pass took {:?} for {} steps",
        resolution.transition,
        sequence.steps
    );
    session.apply(&resolution);
    resolution
}

/// Unconditionally regenerates the default script for the current step
/// count, clearing any template association.
///
/// The returned side effects tell the caller to notify the user of the
/// reset and to toggle conditional authentication off.
pub fn reset(session: &mut EditorSession, steps: u32) -> Resolution {
    tracing::warn!(
        "Resetting adaptive script to the generated default for {} steps",
        steps
    );
    let resolution = Resolution::display(generate_script(steps + 1), Transition::ExternalReset)
        .not_from_template()
        .with_effects(vec![
            SideEffect::ScriptReset,
            SideEffect::DisableConditionalAuth,
        ]);
    session.apply(&resolution);
    resolution
}

/// Marks a template insertion and returns the double-encoded value the
/// configuration collaborator should persist.
///
/// The collaborator's update re-enters [`reconcile`] on its next pass, where
/// the fresh-insertion flag suppresses the divergence check exactly once.
pub fn select_template(
    session: &mut EditorSession,
    template: &AuthTemplate,
) -> Result<String, TemplateError> {
    let encoded = encode_template_script(template)?;
    session.newly_added_template = true;
    tracing::debug!("Adaptive script template '{}' selected", template.name);
    Ok(encoded)
}

/// Defensive resynchronization after an editor display-mode change.
///
/// Switching the editor in or out of full screen can drop in-progress text.
/// When the surface's content diverges from the tracked internal script, the
/// tracked text is written back and the caret restored. Returns whether a
/// rewrite happened. This is not a reconciliation decision.
pub fn resync_editor(session: &EditorSession, surface: &mut dyn EditorSurface) -> bool {
    let Some(internal) = session.internal_script.as_ref() else {
        return false;
    };

    let shown = ScriptSource::from(surface.text());
    if minified_eq(&shown, internal) {
        return false;
    }

    let cursor = surface.cursor();
    surface.set_text(&to_display_string(internal));
    surface.set_cursor(cursor);
    tracing::debug!("Editor content restored from tracked script after display mode change");
    true
}
