//! Block-level Markdown formatting: headings, quotes, lists, spoilers and
//! fenced code blocks.
//!
//! The spoiler and code block helpers run their content through the fence
//! escaper so nested code blocks survive inside a spoiler. They follow a
//! best-effort convention: when the content has unbalanced fences the
//! original text is used as is.

use crate::{
    escape::{BACKTICK_FENCE, TILDE_FENCE, escape_markdown, escape_spoiler_block},
    inline::bold,
};

const LIST_INDENT: &str = "  ";

/// ATX heading. Levels outside `1..=6` fall back to level 1.
///
/// # Examples
///
/// ```
/// use zlmd::heading;
/// assert_eq!(heading(3, "Usage"), "### Usage");
/// assert_eq!(heading(9, "Usage"), "# Usage");
/// ```
#[must_use]
pub fn heading(level: usize, text: &str) -> String {
    let level = if (1..=6).contains(&level) { level } else { 1 };
    format!("{} {text}", "#".repeat(level))
}

#[must_use]
pub fn h1(text: &str) -> String {
    heading(1, text)
}

#[must_use]
pub fn h2(text: &str) -> String {
    heading(2, text)
}

#[must_use]
pub fn h3(text: &str) -> String {
    heading(3, text)
}

#[must_use]
pub fn h4(text: &str) -> String {
    heading(4, text)
}

#[must_use]
pub fn h5(text: &str) -> String {
    heading(5, text)
}

#[must_use]
pub fn h6(text: &str) -> String {
    heading(6, text)
}

/// Prefix every line of `text` with `> ` and end with a newline.
#[must_use]
pub fn quote_block(text: &str) -> String {
    let mut out = text
        .split('\n')
        .map(|line| format!("> {line}"))
        .collect::<Vec<_>>()
        .join("\n");
    out.push('\n');
    out
}

/// [`quote_block`] followed by a blank line.
#[must_use]
pub fn quote_block_nl(text: &str) -> String {
    quote_block(text) + "\n"
}

#[must_use]
pub fn paragraph(text: &str) -> String {
    format!("{text}\n\n")
}

#[must_use]
pub fn line_break(text: &str) -> String {
    format!("{text}\n")
}

/// Bullet list item indented by two spaces per `level`.
#[must_use]
pub fn list_item(text: &str, level: usize) -> String {
    format!("{}- {text}", LIST_INDENT.repeat(level))
}

/// Task list item, `- [x]` when `checked`.
#[must_use]
pub fn checklist_item(text: &str, checked: bool, level: usize) -> String {
    let mark = if checked { "[x]" } else { "[ ]" };
    format!("{}- {mark} {text}", LIST_INDENT.repeat(level))
}

/// `**key**: value`
#[must_use]
pub fn key_value(key: &str, value: &str) -> String {
    format!("{}: {value}", bold(key))
}

pub fn write_heading(out: &mut String, level: usize, text: &str) {
    out.push_str(&heading(level, text));
    out.push('\n');
}

pub fn write_quote_block(out: &mut String, text: &str) {
    out.push_str(&quote_block(text));
}

pub fn write_list_item(out: &mut String, text: &str, level: usize) {
    out.push_str(&list_item(text, level));
    out.push('\n');
}

pub fn write_checklist_item(out: &mut String, text: &str, checked: bool, level: usize) {
    out.push_str(&checklist_item(text, checked, level));
    out.push('\n');
}

pub fn write_key_value(out: &mut String, key: &str, value: &str) {
    out.push_str(&key_value(key, value));
    out.push('\n');
}

/// Zulip spoiler block with backtick fences.
///
/// Code blocks inside `text` have their fences turned into tildes. If the
/// content does not balance, it is emitted unchanged.
///
/// # Examples
///
/// ```
/// use zlmd::spoiler;
/// assert_eq!(
///     spoiler("Code", "```go\nfmt.Println(1)\n```"),
///     "```spoiler Code\n~~~go\nfmt.Println(1)\n~~~\n```"
/// );
/// ```
#[must_use]
pub fn spoiler(heading: &str, text: &str) -> String {
    let mut out = String::new();
    write_spoiler(&mut out, heading, text);
    out
}

pub fn write_spoiler(out: &mut String, heading: &str, text: &str) {
    let block = format!("{BACKTICK_FENCE}spoiler {heading}\n{text}\n{BACKTICK_FENCE}");
    match escape_spoiler_block(&block) {
        Ok(escaped) => out.push_str(&escaped),
        Err(_) => out.push_str(&block),
    }
}

/// Spoiler block delimited by a caller-chosen `fence`.
///
/// `text` is passed through [`escape_markdown`] and its result is used
/// whether or not the fences balanced.
#[must_use]
pub fn spoiler_with_fence(heading: &str, text: &str, fence: &str) -> String {
    let (body, _) = escape_markdown(text);
    format!("{fence}spoiler {heading}\n{body}\n{fence}")
}

/// Spoiler delimited by `~~~`, for nesting inside a backtick block.
#[must_use]
pub fn spoiler_tilde(heading: &str, text: &str) -> String {
    spoiler_with_fence(heading, text, TILDE_FENCE)
}

#[must_use]
pub fn spoiler_backtick(heading: &str, text: &str) -> String {
    spoiler_with_fence(heading, text, BACKTICK_FENCE)
}

/// Fenced code block tagged with `language` (may be empty).
#[must_use]
pub fn code_block(language: &str, text: &str) -> String {
    let mut out = String::new();
    write_code_block(&mut out, language, text);
    out
}

pub fn write_code_block(out: &mut String, language: &str, text: &str) {
    let (body, _) = escape_markdown(text);
    out.push_str(BACKTICK_FENCE);
    out.push_str(language);
    out.push('\n');
    out.push_str(&body);
    out.push('\n');
    out.push_str(BACKTICK_FENCE);
}

/// Code block tagged `markdown`, showing the source without rendering it.
#[must_use]
pub fn markdown_block(text: &str) -> String {
    code_block("markdown", text)
}

pub fn write_markdown_block(out: &mut String, text: &str) {
    write_code_block(out, "markdown", text);
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(1, "# Title")]
    #[case(6, "###### Title")]
    #[case(0, "# Title")]
    #[case(7, "# Title")]
    fn heading_levels(#[case] level: usize, #[case] expected: &str) {
        assert_eq!(heading(level, "Title"), expected);
    }

    #[test]
    fn heading_shortcuts() {
        assert_eq!(h2("a"), "## a");
        assert_eq!(h5("a"), "##### a");
    }

    #[test]
    fn quotes_every_line() {
        assert_eq!(quote_block("one\ntwo"), "> one\n> two\n");
        assert_eq!(quote_block_nl("one"), "> one\n\n");
    }

    #[rstest]
    #[case(list_item("a", 0), "- a")]
    #[case(list_item("b", 2), "    - b")]
    #[case(checklist_item("done", true, 0), "- [x] done")]
    #[case(checklist_item("todo", false, 1), "  - [ ] todo")]
    #[case(key_value("Status", "ok"), "**Status**: ok")]
    #[case(paragraph("p"), "p\n\n")]
    #[case(line_break("l"), "l\n")]
    fn formats_lines(#[case] actual: String, #[case] expected: &str) {
        assert_eq!(actual, expected);
    }

    #[test]
    fn writers_end_lines() {
        let mut out = String::new();
        write_heading(&mut out, 2, "List");
        write_list_item(&mut out, "a", 0);
        write_checklist_item(&mut out, "b", true, 1);
        write_key_value(&mut out, "k", "v");
        write_quote_block(&mut out, "q");
        assert_eq!(out, "## List\n- a\n  - [x] b\n**k**: v\n> q\n");
    }

    #[rstest]
    #[case::basic("Warning", "This is hidden content", "```spoiler Warning\nThis is hidden content\n```")]
    #[case::multiline("Details", "Line 1\nLine 2", "```spoiler Details\nLine 1\nLine 2\n```")]
    #[case::nested_code(
        "Code Example",
        "```go\nfmt.Println(\"Hello\")\n```",
        "```spoiler Code Example\n~~~go\nfmt.Println(\"Hello\")\n~~~\n```"
    )]
    #[case::bare_nested("Hint", "```\nls\n```", "```spoiler Hint\n~~~\nls\n~~~\n```")]
    #[case::empty("Empty", "", "```spoiler Empty\n\n```")]
    #[case::unbalanced("Broken", "```go\nno end", "```spoiler Broken\n```go\nno end\n```")]
    fn spoilers(#[case] heading: &str, #[case] text: &str, #[case] expected: &str) {
        assert_eq!(spoiler(heading, text), expected);
    }

    #[rstest]
    #[case("```", "```spoiler Notice\nImportant\n```")]
    #[case("~~~", "~~~spoiler Notice\nImportant\n~~~")]
    #[case("+++", "+++spoiler Notice\nImportant\n+++")]
    fn spoiler_fences(#[case] fence: &str, #[case] expected: &str) {
        assert_eq!(spoiler_with_fence("Notice", "Important", fence), expected);
    }

    #[test]
    fn spoiler_fence_shortcuts() {
        assert_eq!(spoiler_tilde("T", "C"), "~~~spoiler T\nC\n~~~");
        assert_eq!(spoiler_backtick("T", "C"), "```spoiler T\nC\n```");
    }

    #[rstest]
    #[case("go", "fmt.Println(\"Hello, World!\")", "```go\nfmt.Println(\"Hello, World!\")\n```")]
    #[case("", "Some code", "```\nSome code\n```")]
    #[case("python", "def hello():\n    print('hi')", "```python\ndef hello():\n    print('hi')\n```")]
    fn code_blocks(#[case] language: &str, #[case] text: &str, #[case] expected: &str) {
        assert_eq!(code_block(language, text), expected);
    }

    #[test]
    fn markdown_block_escapes_inner_spoilers() {
        let text = "```spoiler S\n```sh\nls\n```\n```";
        assert_eq!(
            markdown_block(text),
            "```markdown\n```spoiler S\n~~~sh\nls\n~~~\n```\n```"
        );
    }

    #[test]
    fn spoiler_around_code_block() {
        let out = spoiler("Code Example", &code_block("go", "fmt.Println(\"Hello\")"));
        assert_eq!(
            out,
            "```spoiler Code Example\n~~~go\nfmt.Println(\"Hello\")\n~~~\n```"
        );
    }
}
