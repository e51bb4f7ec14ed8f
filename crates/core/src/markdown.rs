//! Markdown building blocks shared by the issue renderers.
//!
//! Every helper wraps its input verbatim. Field values are never escaped, so a value that
//! carries markdown syntax of its own (a leading `#`, a stray `**`) will show up as markup in
//! the final document. Callers that need sanitised output must clean their input first.

/// Horizontal rule separating the original issue text from the refinement.
pub const HORIZONTAL_RULE: &str = "---";

/// Formats a heading at the given level (`1` → `#`, `4` → `####`).
///
/// A level of zero is treated as level one.
pub fn heading(level: usize, text: &str) -> String {
    format!("{} {}", "#".repeat(level.max(1)), text)
}

/// Wraps text in a strong-emphasis span.
pub fn bold(text: &str) -> String {
    format!("**{}**", text)
}

/// Formats a `**Label:** value` line, the bold label including its colon.
pub fn bold_label(label: &str, value: &str) -> String {
    format!("**{}:** {}", label, value)
}

/// Wraps text in an inline code span.
pub fn code_span(text: &str) -> String {
    format!("`{}`", text)
}

/// Formats a single top-level bullet.
pub fn bullet(text: &str) -> String {
    format!("- {}", text)
}

/// Formats every item as a bullet, preserving input order.
pub fn bullets<S: AsRef<str>>(items: &[S]) -> Vec<String> {
    items.iter().map(|item| bullet(item.as_ref())).collect()
}

/// Formats a numbered list entry. Numbering is supplied by the caller and starts at 1.
pub fn numbered(index: usize, text: &str) -> String {
    format!("{}. {}", index, text)
}

/// Formats a bullet nested under a list entry at the given indent width.
pub fn indented_bullet(indent: usize, text: &str) -> String {
    format!("{}- {}", " ".repeat(indent), text)
}
