//! # Report Rendering
//!
//! Turns the validator's findings into the two output formats the binary
//! supports: one `path: message` line per finding, or a JSON array of
//! `{path, message}` records.

use sdlint_validate::ValidationError;

/// Renders findings as one line per finding, or a short all-clear note.
#[must_use]
pub fn render_text(errors: &[ValidationError]) -> String {
    if errors.is_empty() {
        return "No schema.org conformance issues found.".to_string();
    }
    let mut out = String::new();
    for error in errors {
        out.push_str(&error.to_string());
        out.push('\n');
    }
    out.push_str(&format!(
        "{} issue{} found.",
        errors.len(),
        if errors.len() == 1 { "" } else { "s" }
    ));
    out
}

/// Renders findings as a pretty-printed JSON array.
///
/// # Errors
///
/// Returns the underlying `serde_json` error if serialization fails.
pub fn render_json(errors: &[ValidationError]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(errors)
}
