//! Inline Markdown formatting.
//!
//! Each helper wraps its input in the matching Markdown delimiters. The
//! `write_*` variants append the same text to an existing buffer.

/// Thematic break emitted by [`horizontal_rule`].
pub const HORIZONTAL_RULE: &str = "---";

/// `**text**`
#[must_use]
pub fn bold(text: &str) -> String {
    format!("**{text}**")
}

/// `*text*`
#[must_use]
pub fn italic(text: &str) -> String {
    format!("*{text}*")
}

/// Wrap `text` in a single-backtick code span.
///
/// Backticks inside `text` are not escaped.
#[must_use]
pub fn code(text: &str) -> String {
    format!("`{text}`")
}

/// `[text](url)`
#[must_use]
pub fn link(text: &str, url: &str) -> String {
    format!("[{text}]({url})")
}

/// `![alt](url)`
#[must_use]
pub fn image(alt: &str, url: &str) -> String {
    format!("![{alt}]({url})")
}

#[must_use]
pub fn horizontal_rule() -> &'static str {
    HORIZONTAL_RULE
}

pub fn write_bold(out: &mut String, text: &str) {
    out.push_str(&bold(text));
}

pub fn write_italic(out: &mut String, text: &str) {
    out.push_str(&italic(text));
}

pub fn write_code(out: &mut String, text: &str) {
    out.push_str(&code(text));
}

pub fn write_link(out: &mut String, text: &str, url: &str) {
    out.push_str(&link(text, url));
}

pub fn write_image(out: &mut String, alt: &str, url: &str) {
    out.push_str(&image(alt, url));
}

/// Append a horizontal rule followed by a newline.
pub fn write_horizontal_rule(out: &mut String) {
    out.push_str(HORIZONTAL_RULE);
    out.push('\n');
}
