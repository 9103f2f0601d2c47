/// Caret position inside the editor widget.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CursorPosition {
    pub line: usize,
    pub column: usize,
}

/// Capability handle over the host's code-editing widget.
///
/// The engine never reaches into the widget implicitly; the host passes this
/// handle in where an operation needs to inspect or rewrite the editor
/// content, such as the display-mode resynchronization in
/// [`resync_editor`](crate::reconcile::resync_editor).
pub trait EditorSurface {
    fn text(&self) -> String;
    fn set_text(&mut self, text: &str);
    fn cursor(&self) -> CursorPosition;
    fn set_cursor(&mut self, position: CursorPosition);
}
