//! Section and document builders.
//!
//! A [`Section`] is a heading followed by one line per content item. A
//! [`Document`] concatenates sections and free-form blocks in insertion
//! order.

use crate::table::TableBuilder;

const MIN_LEVEL: usize = 1;
const MAX_LEVEL: usize = 6;

/// Heading plus content lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    level: usize,
    title: String,
    content: Vec<String>,
}

impl Section {
    /// Create a section; `level` is clamped to `1..=6`.
    #[must_use]
    pub fn new(level: usize, title: impl Into<String>) -> Self {
        Self {
            level: level.clamp(MIN_LEVEL, MAX_LEVEL),
            title: title.into(),
            content: Vec::new(),
        }
    }

    #[must_use]
    pub fn level(&self) -> usize {
        self.level
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn content(&self) -> &[String] {
        &self.content
    }

    /// Add a `* text` bullet.
    #[must_use]
    pub fn add_bullet(mut self, text: &str) -> Self {
        self.content.push(format!("* {text}"));
        self
    }

    /// Add a `number. text` item.
    #[must_use]
    pub fn add_numbered_item(mut self, number: usize, text: &str) -> Self {
        self.content.push(format!("{number}. {text}"));
        self
    }

    #[must_use]
    pub fn add_text(mut self, text: impl Into<String>) -> Self {
        self.content.push(text.into());
        self
    }

    #[must_use]
    pub fn add_table(mut self, table: &TableBuilder) -> Self {
        self.content.push(table.build());
        self
    }

    /// Render the heading, a blank line, each item on its own line and a
    /// closing blank line.
    ///
    /// # Examples
    ///
    /// ```
    /// use zlmd::Section;
    ///
    /// let out = Section::new(3, "Features").add_bullet("Fast").build();
    /// assert_eq!(out, "### Features\n\n* Fast\n\n");
    /// ```
    #[must_use]
    pub fn build(&self) -> String {
        let mut out = format!("{} {}\n\n", "#".repeat(self.level), self.title);
        for item in &self.content {
            out.push_str(item);
            out.push('\n');
        }
        out.push('\n');
        out
    }
}

/// Ordered collection of rendered blocks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    blocks: Vec<String>,
}

impl Document {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn add_section(mut self, section: &Section) -> Self {
        self.blocks.push(section.build());
        self
    }

    /// Add a pre-rendered block such as a spoiler or code block. A newline
    /// is appended when the block does not already end with one.
    #[must_use]
    pub fn add_block(mut self, block: impl Into<String>) -> Self {
        let mut block = block.into();
        if !block.ends_with('\n') {
            block.push('\n');
        }
        self.blocks.push(block);
        self
    }

    #[must_use]
    pub fn add_table(self, table: &TableBuilder) -> Self {
        self.add_block(table.build())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    #[must_use]
    pub fn build(&self) -> String {
        self.blocks.concat()
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::blocks::spoiler;

    #[test]
    fn empty_section() {
        assert_eq!(Section::new(2, "Test Section").build(), "## Test Section\n\n\n");
    }

    #[rstest]
    #[case(0, 1)]
    #[case(1, 1)]
    #[case(4, 4)]
    #[case(7, 6)]
    fn clamps_level(#[case] level: usize, #[case] expected: usize) {
        assert_eq!(Section::new(level, "x").level(), expected);
    }

    #[test]
    fn bullets_and_numbers() {
        let out = Section::new(2, "Steps")
            .add_text("Intro.")
            .add_bullet("Easy")
            .add_numbered_item(1, "Download")
            .add_numbered_item(2, "Run")
            .build();
        assert_eq!(out, "## Steps\n\nIntro.\n* Easy\n1. Download\n2. Run\n\n");
    }

    #[test]
    fn embeds_table() {
        let table = TableBuilder::new()
            .with_headers(["Name", "Age"])
            .add_row(["Alice", "30"]);
        let section = Section::new(2, "Users").add_table(&table);
        assert_eq!(section.content().len(), 1);
        assert_eq!(
            section.build(),
            "## Users\n\n| Name | Age |\n| --- | --- |\n| Alice | 30 |\n\n\n"
        );
    }

    #[test]
    fn document_keeps_order() {
        let doc = Document::new()
            .add_section(&Section::new(1, "Report").add_text("Summary."))
            .add_block(spoiler("Logs", "all good"))
            .add_table(&TableBuilder::new().with_headers(["K"]));
        assert!(!doc.is_empty());
        assert_eq!(
            doc.build(),
            "# Report\n\nSummary.\n\n```spoiler Logs\nall good\n```\n| K |\n| --- |\n"
        );
    }
}
