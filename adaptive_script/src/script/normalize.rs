use super::config::LINE_BREAK;
use super::types::ScriptSource;

/// Produces the whitespace-insensitive canonical form of a script.
///
/// All whitespace is removed; a line array is joined with no separator after
/// stripping each line. [`ScriptSource::Empty`] minifies to the empty string.
/// Two scripts are equal for reconciliation purposes iff their minified forms
/// are equal.
pub fn minify(script: &ScriptSource) -> String {
    match script {
        ScriptSource::Empty => String::new(),
        ScriptSource::Raw(raw) => remove_whitespace(raw),
        ScriptSource::Lines(lines) => lines.iter().map(|line| remove_whitespace(line)).collect(),
    }
}

/// Whether two scripts are equal modulo whitespace and shape.
pub fn minified_eq(a: &ScriptSource, b: &ScriptSource) -> bool {
    minify(a) == minify(b)
}

fn remove_whitespace(text: &str) -> String {
    text.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Converts a script to its line-array shape.
pub fn to_lines(script: &ScriptSource) -> Vec<String> {
    match script {
        ScriptSource::Empty => Vec::new(),
        ScriptSource::Raw(raw) => raw.split(LINE_BREAK).map(str::to_string).collect(),
        ScriptSource::Lines(lines) => lines.clone(),
    }
}

/// Converts a script to the newline-joined string shown in the editor.
pub fn to_display_string(script: &ScriptSource) -> String {
    match script {
        ScriptSource::Empty => String::new(),
        ScriptSource::Raw(raw) => raw.clone(),
        ScriptSource::Lines(lines) => lines.join(LINE_BREAK),
    }
}

/// Decodes the double-encoding applied to template-sourced scripts.
///
/// Scripts inserted from the template catalog are persisted as a JSON-encoded
/// array of lines. Returns `None` for anything else, including malformed JSON.
pub fn decode_template_encoding(raw: &str) -> Option<Vec<String>> {
    serde_json::from_str::<Vec<String>>(raw).ok()
}

/// Whether a raw persisted value carries the template double-encoding.
///
/// This predicate is how the reconciliation engine recognizes "this script
/// came from a template selection" rather than a free-typed value. Parse
/// failures are treated as `false`, never propagated.
pub fn is_template_encoding(raw: &str) -> bool {
    decode_template_encoding(raw).is_some()
}

/// Whether a script is absent or carries no visible content.
pub fn is_empty_script(script: &ScriptSource) -> bool {
    match script {
        ScriptSource::Empty => true,
        ScriptSource::Raw(raw) => raw.trim().is_empty(),
        ScriptSource::Lines(lines) => lines.iter().all(|line| line.trim().is_empty()),
    }
}

/// Undoes backslash escaping on an externally-supplied script.
///
/// Persisted scripts occasionally arrive re-escaped by intermediate layers;
/// `\"` becomes `"`, `\\` becomes `\`, and `\n`/`\r`/`\t` become the control
/// characters they name. A trailing lone backslash is dropped.
pub fn strip_slashes(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('t') => out.push('\t'),
            Some(escaped) => out.push(escaped),
            None => {}
        }
    }
    out
}
