use crate::script::ScriptSource;

/// Transient per-editor reconciliation state.
///
/// A session is created when the script editor mounts for an application,
/// re-evaluated on every external change, and discarded on unmount. It is
/// owned by exactly one editor instance and never shared.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditorSession {
    /// Last text the user typed in the editor, distinct from the
    /// authoritative persisted script.
    pub(crate) internal_script: Option<ScriptSource>,
    /// Step count as of the last time the script was regenerated.
    pub(crate) internal_step_count: Option<u32>,
    /// The displayed script was inserted by selecting a template.
    pub(crate) from_template: bool,
    /// Set for exactly one reconciliation pass after a template insertion,
    /// suppressing the divergence check.
    pub(crate) newly_added_template: bool,
    /// Text currently shown in the editor; the only reconciliation output.
    pub(crate) displayed: Option<ScriptSource>,
}

impl EditorSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a keystroke delivered by the editor widget. Tracking only;
    /// the displayed text stays reconciler-owned.
    pub fn record_edit(&mut self, text: impl Into<ScriptSource>) {
        self.internal_script = Some(text.into());
    }

    /// The text currently shown in the editor, if any pass has produced one.
    pub fn displayed(&self) -> Option<&ScriptSource> {
        self.displayed.as_ref()
    }

    /// Whether the displayed script came from a template selection.
    pub fn is_from_template(&self) -> bool {
        self.from_template
    }

    pub(crate) fn apply(&mut self, resolution: &Resolution) {
        if let Some(script) = &resolution.displayed {
            self.displayed = Some(script.clone());
        }
        if let Some(steps) = resolution.patch.internal_step_count {
            self.internal_step_count = Some(steps);
        }
        if let Some(from_template) = resolution.patch.from_template {
            self.from_template = from_template;
        }
        if let Some(newly_added) = resolution.patch.newly_added_template {
            self.newly_added_template = newly_added;
        }
    }
}

/// Which guarded transition a reconciliation pass took, in decision order.
/// The ordering is load-bearing: the first matching rule wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// No script, zero steps: show the zero-step default.
    SeedDefault,
    /// No script, steps configured: synthesize the default for them.
    SeedForSteps,
    /// Template on record, user has diverged from it: leave the editor
    /// untouched.
    TemplateEditPreserved,
    /// Decode and display the persisted template content.
    TemplateApplied,
    /// Untouched default found for some earlier step count: regenerate for
    /// the current one.
    RegeneratedForStepChange,
    /// Default for the tracked step count while editor and tracking
    /// diverged: regenerate for the current count.
    RegeneratedForTrackedSteps,
    /// User-authored script with in-progress edits: the editor text wins.
    EditorWins,
    /// User-authored script with no in-progress edits: display it
    /// normalized.
    FormattedExternal,
    /// The collaborator flagged the script as conceptually default: full
    /// reset.
    ExternalReset,
    /// Nothing matched: display the persisted value verbatim.
    Verbatim,
}

/// Field-wise session updates produced by a pass. `None` leaves the field
/// untouched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionPatch {
    pub internal_step_count: Option<u32>,
    pub from_template: Option<bool>,
    pub newly_added_template: Option<bool>,
}

/// Notifications owed to external collaborators after a pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SideEffect {
    /// The script was reset to the generated default; the alerting
    /// collaborator should tell the user.
    ScriptReset,
    /// The conditional authentication switch should be toggled off.
    DisableConditionalAuth,
}

/// Outcome of one reconciliation pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// Text to place in the editor; `None` means "leave the editor
    /// untouched" (the deliberate no-op of [`Transition::TemplateEditPreserved`]).
    pub displayed: Option<ScriptSource>,
    pub patch: SessionPatch,
    pub effects: Vec<SideEffect>,
    pub transition: Transition,
}

impl Resolution {
    pub(crate) fn display(script: impl Into<ScriptSource>, transition: Transition) -> Self {
        Self {
            displayed: Some(script.into()),
            patch: SessionPatch::default(),
            effects: Vec::new(),
            transition,
        }
    }

    pub(crate) fn keep_editor(transition: Transition) -> Self {
        Self {
            displayed: None,
            patch: SessionPatch::default(),
            effects: Vec::new(),
            transition,
        }
    }

    pub(crate) fn not_from_template(mut self) -> Self {
        self.patch.from_template = Some(false);
        self
    }

    pub(crate) fn track_steps(mut self, steps: u32) -> Self {
        self.patch.internal_step_count = Some(steps);
        self
    }

    pub(crate) fn with_effects(mut self, effects: Vec<SideEffect>) -> Self {
        self.effects = effects;
        self
    }
}
