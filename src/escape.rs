//! Escaping of code fences nested inside Zulip spoiler blocks.
//!
//! Zulip closes a spoiler at the first bare backtick fence, so a code block
//! placed inside a spoiler has to use another delimiter. [`escape_markdown`]
//! rewrites those nested backtick fences to tildes and leaves every other
//! line of the document untouched.
//!
//! The scan is a single pass over the lines. Only one level of nesting is
//! modelled inside a spoiler; anything deeper is reported as unbalanced.

use std::{borrow::Cow, sync::LazyLock};

use log::{debug, trace};
use regex::Regex;
use thiserror::Error;

use crate::lazy_regex;

/// Backtick fence token.
pub const BACKTICK_FENCE: &str = "```";

/// Fence token used for blocks nested inside a spoiler.
pub const TILDE_FENCE: &str = "~~~";

const SPOILER_KEYWORD: &str = "spoiler";

// Capture: indent, then everything after the three backticks.
static FENCE_RE: LazyLock<Regex> = lazy_regex!(r"^(\s*)```(.*)$", "valid fence regex");

/// Returned when the fences of a document do not balance.
///
/// `line` is the 1-based line that opened the block left dangling, or the
/// offending line itself when a fence appears where none is allowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("unbalanced code fence at line {line}")]
pub struct FenceError {
    line: usize,
}

impl FenceError {
    fn at(line: usize) -> Self {
        Self { line }
    }

    /// Line number at which the imbalance was detected.
    #[must_use]
    pub fn line(&self) -> usize {
        self.line
    }
}

/// A line whose trimmed form starts with [`BACKTICK_FENCE`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Fence<'a> {
    indent: &'a str,
    info: &'a str,
}

impl Fence<'_> {
    /// A fence with nothing after the token closes the innermost block.
    fn is_bare(&self) -> bool {
        self.info.trim().is_empty()
    }

    fn opens_spoiler(&self) -> bool {
        self.info.starts_with(SPOILER_KEYWORD)
    }

    fn to_tilde(self) -> String {
        format!("{}{TILDE_FENCE}{}", self.indent, self.info)
    }
}

fn parse_fence(line: &str) -> Option<Fence<'_>> {
    FENCE_RE.captures(line).map(|cap| Fence {
        indent: cap.get(1).map_or("", |m| m.as_str()),
        info: cap.get(2).map_or("", |m| m.as_str()),
    })
}

fn is_bare_fence(line: &str) -> bool {
    parse_fence(line).is_some_and(|f| f.is_bare())
}

fn is_spoiler_opener(line: &str) -> bool {
    parse_fence(line).is_some_and(|f| f.opens_spoiler())
}

/// Where the top-level scan currently is.
enum ScanState<'a> {
    Outside,
    InTopLevelCode {
        start: usize,
    },
    InSpoiler {
        start: usize,
        buffer: Vec<&'a str>,
        nested: bool,
    },
}

/// Rewrite backtick fences nested inside spoiler blocks to tildes.
///
/// Returns the transformed document and `true` when every fence balances.
/// When they do not, the input is returned unchanged together with `false`
/// so callers can fall back to the raw text.
///
/// # Examples
///
/// ```
/// use zlmd::escape_markdown;
///
/// let input = "```spoiler Code\n```go\nfmt.Println(1)\n```\n```";
/// let (out, ok) = escape_markdown(input);
/// assert!(ok);
/// assert_eq!(out, "```spoiler Code\n~~~go\nfmt.Println(1)\n~~~\n```");
///
/// let (out, ok) = escape_markdown("```spoiler Open\nnever closed");
/// assert!(!ok);
/// assert_eq!(out, "```spoiler Open\nnever closed");
/// ```
#[must_use]
pub fn escape_markdown(markdown: &str) -> (String, bool) {
    match try_escape_markdown(markdown) {
        Ok(out) => (out, true),
        Err(err) => {
            debug!("leaving markdown unchanged: {err}");
            (markdown.to_string(), false)
        }
    }
}

/// Same transform as [`escape_markdown`], reporting imbalance as an error.
///
/// # Errors
/// Returns [`FenceError`] if a spoiler, a top-level code block or a code
/// block nested inside a spoiler is left open, or if a spoiler holds more
/// than one level of nested fences.
pub fn try_escape_markdown(markdown: &str) -> Result<String, FenceError> {
    let mut out: Vec<Cow<'_, str>> = Vec::new();
    let mut state = ScanState::Outside;

    for (idx, line) in markdown.split('\n').enumerate() {
        let line_no = idx + 1;
        state = match state {
            ScanState::Outside => match parse_fence(line) {
                Some(fence) if fence.opens_spoiler() => {
                    trace!("spoiler opened at line {line_no}");
                    ScanState::InSpoiler {
                        start: line_no,
                        buffer: vec![line],
                        nested: false,
                    }
                }
                Some(_) => {
                    out.push(Cow::Borrowed(line));
                    ScanState::InTopLevelCode { start: line_no }
                }
                None => {
                    out.push(Cow::Borrowed(line));
                    ScanState::Outside
                }
            },
            ScanState::InTopLevelCode { start } => {
                out.push(Cow::Borrowed(line));
                if is_bare_fence(line) {
                    ScanState::Outside
                } else {
                    ScanState::InTopLevelCode { start }
                }
            }
            ScanState::InSpoiler {
                start,
                mut buffer,
                nested,
            } => {
                buffer.push(line);
                match parse_fence(line) {
                    Some(fence) if fence.is_bare() && !nested => {
                        trace!("spoiler from line {start} closed at line {line_no}");
                        out.extend(escape_spoiler_lines(&buffer, start)?);
                        ScanState::Outside
                    }
                    Some(fence) => ScanState::InSpoiler {
                        start,
                        buffer,
                        nested: !fence.is_bare() || !nested,
                    },
                    None => ScanState::InSpoiler {
                        start,
                        buffer,
                        nested,
                    },
                }
            }
        };
    }

    match state {
        ScanState::Outside => Ok(out.join("\n")),
        ScanState::InTopLevelCode { start } | ScanState::InSpoiler { start, .. } => {
            Err(FenceError::at(start))
        }
    }
}

/// Escape the fences inside a single spoiler block.
///
/// `block` must start with a `` ```spoiler `` line and end with a bare
/// closing fence. A trailing newline after the closing fence is kept.
///
/// # Errors
/// Returns [`FenceError`] if the block is not framed by a spoiler opener and
/// a bare fence, or if its nested fences do not balance.
///
/// # Examples
///
/// ```
/// use zlmd::escape_spoiler_block;
///
/// let out = escape_spoiler_block("```spoiler Hint\n```\nls\n```\n```").unwrap();
/// assert_eq!(out, "```spoiler Hint\n~~~\nls\n~~~\n```");
/// ```
pub fn escape_spoiler_block(block: &str) -> Result<String, FenceError> {
    let (body, trailing) = match block.strip_suffix('\n') {
        Some(body) => (body, "\n"),
        None => (block, ""),
    };
    let lines: Vec<&str> = body.split('\n').collect();
    let escaped = escape_spoiler_lines(&lines, 1)?;
    Ok(escaped.join("\n") + trailing)
}

/// Rewrite the interior of a spoiler. `first_line` numbers `lines[0]`.
fn escape_spoiler_lines<'a>(
    lines: &[&'a str],
    first_line: usize,
) -> Result<Vec<Cow<'a, str>>, FenceError> {
    let [opener, interior @ .., closer] = lines else {
        return Err(FenceError::at(first_line));
    };
    if !is_spoiler_opener(opener) {
        return Err(FenceError::at(first_line));
    }
    if !is_bare_fence(closer) {
        return Err(FenceError::at(first_line + lines.len() - 1));
    }

    let mut out = Vec::with_capacity(lines.len());
    out.push(Cow::Borrowed(*opener));

    // Line number of the nested opener, if a nested block is open.
    let mut nested: Option<usize> = None;
    for (offset, line) in interior.iter().enumerate() {
        let line_no = first_line + offset + 1;
        match (parse_fence(line), nested) {
            (None, _) => out.push(Cow::Borrowed(*line)),
            (Some(fence), Some(_)) if fence.is_bare() => {
                out.push(Cow::Owned(fence.to_tilde()));
                nested = None;
            }
            (Some(_), Some(_)) => return Err(FenceError::at(line_no)),
            (Some(fence), None) => {
                out.push(Cow::Owned(fence.to_tilde()));
                nested = Some(line_no);
            }
        }
    }

    if let Some(line_no) = nested {
        return Err(FenceError::at(line_no));
    }

    out.push(Cow::Borrowed(*closer));
    Ok(out)
}
