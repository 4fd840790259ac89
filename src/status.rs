//! Emoji-prefixed status lines for chat replies.
//!
//! Every writer appends to a caller-owned buffer so a reply can be built up
//! line by line. Use the [`status!`](crate::status!) macro for formatted
//! messages.

use std::fmt::{self, Display, Write as _};

pub const ERROR_EMOJI: &str = "❌";
pub const WARNING_EMOJI: &str = "⚠️";
pub const INFO_EMOJI: &str = "ℹ️";
pub const SUCCESS_EMOJI: &str = "✅";
pub const DEBUG_EMOJI: &str = "🔍";

/// Arrow glyphs used by the arrow writers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arrow {
    Left,
    Right,
    LeftRight,
    RightDotted,
    LeftDotted,
}

impl Arrow {
    #[must_use]
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Left => "←",
            Self::Right => "→",
            Self::LeftRight => "↔",
            Self::RightDotted => "⤑",
            Self::LeftDotted => "⬸",
        }
    }
}

/// Badge flavours for [`badge`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BadgeStyle {
    Primary,
    Success,
    Warning,
    Danger,
    Info,
    Rejected,
    #[default]
    Neutral,
}

impl BadgeStyle {
    #[must_use]
    pub fn emoji(self) -> &'static str {
        match self {
            Self::Primary => "🔵",
            Self::Success => SUCCESS_EMOJI,
            Self::Warning => WARNING_EMOJI,
            Self::Danger => ERROR_EMOJI,
            Self::Info => INFO_EMOJI,
            Self::Rejected => "✴️",
            Self::Neutral => "🧷",
        }
    }
}

fn line(out: &mut String, emoji: &str, message: impl Display) {
    // Writing into a String cannot fail.
    let _ = writeln!(out, "{emoji} {message}");
}

/// Record `result`'s error as a `❌` line and hand the result back.
///
/// # Errors
/// Returns the original error unchanged.
pub fn no_err<T, E: Display>(out: &mut String, result: Result<T, E>) -> Result<T, E> {
    result.inspect_err(|err| line(out, ERROR_EMOJI, err))
}

/// Like [`no_err`] but records the error as a `⚠️` warning.
///
/// # Errors
/// Returns the original error unchanged.
pub fn no_err_warn<T, E: Display>(out: &mut String, result: Result<T, E>) -> Result<T, E> {
    result.inspect_err(|err| line(out, WARNING_EMOJI, err))
}

pub fn warn(out: &mut String, args: fmt::Arguments<'_>) {
    line(out, WARNING_EMOJI, args);
}

pub fn info(out: &mut String, args: fmt::Arguments<'_>) {
    line(out, INFO_EMOJI, args);
}

pub fn success(out: &mut String, args: fmt::Arguments<'_>) {
    line(out, SUCCESS_EMOJI, args);
}

pub fn error(out: &mut String, args: fmt::Arguments<'_>) {
    line(out, ERROR_EMOJI, args);
}

pub fn debug(out: &mut String, args: fmt::Arguments<'_>) {
    line(out, DEBUG_EMOJI, args);
}

/// Warning line showing `usage` as inline code.
pub fn warn_usage(out: &mut String, usage: impl Display) {
    warn(out, format_args!("Usage: `{usage}`."));
}

/// Usage line for a command alias with bracketed options.
///
/// # Examples
///
/// ```
/// let mut out = String::new();
/// zlmd::status::usage(&mut out, "/remind", &["when", "what"]);
/// assert_eq!(out, "⚠️ Usage: `/remind [when] [what]`.\n");
/// ```
pub fn usage(out: &mut String, alias: &str, opts: &[&str]) {
    let mut text = alias.to_string();
    for opt in opts {
        let _ = write!(text, " [{opt}]");
    }
    warn_usage(out, text);
}

/// `- **alias** - description`
pub fn command_info(out: &mut String, alias: &str, description: &str) {
    let _ = writeln!(out, "- **{alias}** - {description}");
}

/// Badge emoji followed by `text` as inline code.
pub fn badge(out: &mut String, text: &str, style: BadgeStyle) {
    let _ = writeln!(out, "{} `{text}`", style.emoji());
}

/// ` → text`, without a trailing newline.
pub fn point(out: &mut String, text: &str) {
    let _ = write!(out, " {} {text}", Arrow::Right.glyph());
}

pub fn point_nl(out: &mut String, text: &str) {
    point(out, text);
    out.push('\n');
}

/// Join `parts` with `arrow` and end the line.
///
/// A single part is rendered as `<arrow> part`.
pub fn arrow(out: &mut String, arrow: Arrow, parts: &[&str]) {
    if let [only] = parts {
        let _ = write!(out, "{} {only}", arrow.glyph());
    } else {
        let separator = format!(" {} ", arrow.glyph());
        out.push_str(&parts.join(separator.as_str()));
    }
    out.push('\n');
}

pub fn right(out: &mut String, parts: &[&str]) {
    arrow(out, Arrow::Right, parts);
}

pub fn left(out: &mut String, parts: &[&str]) {
    arrow(out, Arrow::Left, parts);
}

pub fn left_right(out: &mut String, parts: &[&str]) {
    arrow(out, Arrow::LeftRight, parts);
}

pub fn right_dotted(out: &mut String, parts: &[&str]) {
    arrow(out, Arrow::RightDotted, parts);
}

pub fn left_dotted(out: &mut String, parts: &[&str]) {
    arrow(out, Arrow::LeftDotted, parts);
}
