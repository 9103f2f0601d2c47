use super::config::{LINE_BREAK, STEP_CALL_INDENT};
use super::normalize::{strip_slashes, to_display_string};
use super::types::ScriptSource;

/// Normalizes an externally-supplied script for display.
///
/// Persisted scripts that were never typed in this editor session may arrive
/// re-escaped and arbitrarily indented. The pass undoes backslash escaping
/// and re-indents brace-delimited blocks to the product's four-space
/// convention. The script stays opaque text; only whitespace and escape
/// sequences change, so the minified form of the unescaped text is preserved.
pub fn format_external(script: &ScriptSource) -> ScriptSource {
    let unescaped = strip_slashes(&to_display_string(script));
    ScriptSource::Raw(reindent(&unescaped))
}

// Brace counting only; the scripting language is never parsed.
fn reindent(text: &str) -> String {
    let mut depth: usize = 0;
    let mut lines = Vec::new();

    for raw_line in text.split(LINE_BREAK) {
        let trimmed = raw_line.trim();
        let closes_at_start = trimmed.starts_with('}');

        if closes_at_start {
            depth = depth.saturating_sub(1);
        }

        if trimmed.is_empty() {
            lines.push(String::new());
        } else {
            lines.push(format!("{}{}", STEP_CALL_INDENT.repeat(depth), trimmed));
        }

        let opens = trimmed.matches('{').count();
        let closes = trimmed.matches('}').count() - usize::from(closes_at_start);
        depth = (depth + opens).saturating_sub(closes);
    }

    lines.join(LINE_BREAK)
}
