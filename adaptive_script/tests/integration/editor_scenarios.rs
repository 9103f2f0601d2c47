use adaptive_script::{
    AuthenticationSequence, EditorSession, ScriptSource, SideEffect, Transition, default_script,
    generate_script, minified_eq, reconcile, reset, resync_editor, select_template,
    to_display_string,
};
use pretty_assertions::assert_eq;

use crate::common::{InMemoryEditor, template};

fn sequence(script: impl Into<ScriptSource>, steps: u32) -> AuthenticationSequence {
    AuthenticationSequence::new(script, steps)
}

/// A brand-new application with no steps shows the zero-step default.
#[test]
fn new_application_shows_default_script() {
    let mut session = EditorSession::new();

    let resolution = reconcile(&mut session, &sequence(ScriptSource::Empty, 0), false);

    assert_eq!(resolution.transition, Transition::SeedDefault);
    assert_eq!(
        session.displayed(),
        Some(&ScriptSource::from(default_script()))
    );
}

/// Steps configured but no script persisted: the editor synthesizes a
/// default matching the current steps.
#[test]
fn steps_without_script_synthesize_default() {
    let mut session = EditorSession::new();

    reconcile(&mut session, &sequence(ScriptSource::Empty, 3), false);

    let displayed = to_display_string(session.displayed().unwrap());
    assert!(displayed.contains("executeStep(1);"));
    assert!(displayed.contains("executeStep(2);"));
    assert!(displayed.contains("executeStep(3);"));
    assert!(!displayed.contains("executeStep(4);"));
}

/// A step removal while the script is still the default for the old count
/// regenerates the script for the new count instead of preserving it.
#[test]
fn step_removal_regenerates_stale_default() {
    let mut session = EditorSession::new();

    // The editor was open while three steps were configured.
    reconcile(&mut session, &sequence(generate_script(4), 3), false);

    // One step is removed; the persisted script still matches the old count.
    let resolution = reconcile(&mut session, &sequence(generate_script(4), 2), false);

    assert_eq!(
        resolution.displayed,
        Some(ScriptSource::from(generate_script(3)))
    );
}

/// A user-authored script survives reconciliation passes triggered by
/// unrelated changes while the user is typing.
#[test]
fn custom_script_not_clobbered_while_editing() {
    let mut session = EditorSession::new();
    let persisted = sequence("// custom\nexecuteStep(1);", 1);

    reconcile(&mut session, &persisted, false);

    // The user keeps typing; the persisted value has not caught up yet.
    session.record_edit("// custom\nexecuteStep(1);\nvar extra = 1;");
    let resolution = reconcile(&mut session, &persisted, false);

    assert_eq!(resolution.transition, Transition::EditorWins);
    assert_eq!(
        session.displayed(),
        Some(&ScriptSource::from(
            "// custom\nexecuteStep(1);\nvar extra = 1;"
        ))
    );
}

/// Template insertion displays the decoded content; a subsequent edit is
/// never overwritten by re-applying the unchanged persisted template.
#[test]
fn template_insert_then_edit_is_preserved() {
    let mut session = EditorSession::new();
    let chosen = template("totp-second-factor", &["var a = 1;", "var b = 2;"]);

    // Selection hands the double-encoded value to the configuration
    // collaborator, which persists it and triggers the next pass.
    let encoded = select_template(&mut session, &chosen).unwrap();
    let persisted = sequence(encoded.as_str(), 2);
    let resolution = reconcile(&mut session, &persisted, false);

    assert_eq!(resolution.transition, Transition::TemplateApplied);
    assert!(session.is_from_template());
    assert_eq!(
        session.displayed(),
        Some(&ScriptSource::from(vec![
            "var a = 1;".to_string(),
            "var b = 2;".to_string()
        ]))
    );

    // The user edits one character; the persisted script is unchanged.
    session.record_edit("var a = 7;\nvar b = 2;");
    let resolution = reconcile(&mut session, &persisted, false);

    assert_eq!(resolution.transition, Transition::TemplateEditPreserved);
    assert_eq!(resolution.displayed, None);
}

/// Re-selecting a template after edits replaces the editor content again:
/// the fresh-insertion flag suppresses the divergence check for one pass.
#[test]
fn template_reselection_overrides_edits() {
    let mut session = EditorSession::new();
    let chosen = template("geo-blocking", &["var region = null;"]);

    let encoded = select_template(&mut session, &chosen).unwrap();
    reconcile(&mut session, &sequence(encoded.as_str(), 1), false);
    session.record_edit("var region = \"LK\";");

    // Selecting the same template again re-persists the same value.
    let encoded = select_template(&mut session, &chosen).unwrap();
    let resolution = reconcile(&mut session, &sequence(encoded.as_str(), 1), false);

    assert_eq!(resolution.transition, Transition::TemplateApplied);
    assert_eq!(
        resolution.displayed,
        Some(ScriptSource::from(vec!["var region = null;".to_string()]))
    );
}

/// The explicit reset regenerates the default for the current steps and
/// notifies both collaborators.
#[test]
fn reset_regenerates_and_notifies() {
    let mut session = EditorSession::new();
    reconcile(&mut session, &sequence("// custom", 2), false);

    let resolution = reset(&mut session, 2);

    assert_eq!(
        resolution.displayed,
        Some(ScriptSource::from(generate_script(3)))
    );
    assert_eq!(
        resolution.effects,
        vec![SideEffect::ScriptReset, SideEffect::DisableConditionalAuth]
    );
    assert!(!session.is_from_template());
}

/// Toggling the editor to full screen loses the widget's text; the session
/// restores the tracked edit and the caret.
#[test]
fn fullscreen_toggle_restores_in_progress_text() {
    let mut session = EditorSession::new();
    reconcile(&mut session, &sequence(ScriptSource::Empty, 1), false);
    session.record_edit("var onLoginRequest = function(context) {\n    executeStep(1);\n    var custom = 1;\n};");

    // The re-mounted widget came back with the stale displayed text.
    let mut editor = InMemoryEditor {
        text: to_display_string(session.displayed().unwrap()),
        cursor: adaptive_script::CursorPosition { line: 2, column: 8 },
    };

    assert!(resync_editor(&session, &mut editor));
    assert!(editor.text.contains("var custom = 1;"));
    assert_eq!(editor.cursor.line, 2);

    // A second toggle with matching content is a no-op.
    assert!(!resync_editor(&session, &mut editor));
}

/// Whitespace-only differences between persisted and displayed script never
/// trigger a rewrite to something new.
#[test]
fn whitespace_difference_is_not_a_change() {
    let mut session = EditorSession::new();
    let spaced = generate_script(3).join("\n").replace("    ", "\t");

    reconcile(&mut session, &sequence(spaced.as_str(), 2), false);

    // The engine may regenerate, but only to an equivalent script.
    assert!(minified_eq(
        session.displayed().unwrap(),
        &ScriptSource::from(generate_script(3))
    ));
}
