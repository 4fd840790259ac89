//! Markdown table builder.
//!
//! Cells are written verbatim; the builder does not pad columns to a common
//! width. Rows shorter than the header are padded with empty cells and
//! longer rows are cut at the header width.

use std::fmt;

use crate::inline::bold;

/// Column alignment, rendered in the separator row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Alignment {
    #[default]
    Default,
    Left,
    Center,
    Right,
}

impl Alignment {
    /// Separator cell for this alignment.
    #[must_use]
    pub fn separator(self) -> &'static str {
        match self {
            Self::Default => "---",
            Self::Left => ":---",
            Self::Center => ":---:",
            Self::Right => "---:",
        }
    }
}

type HeaderStyle = Box<dyn Fn(&str) -> String + Send + Sync>;

/// Incrementally builds a Markdown table.
///
/// # Examples
///
/// ```
/// use zlmd::{Alignment, TableBuilder};
///
/// let table = TableBuilder::new()
///     .with_headers(["Name", "Age"])
///     .with_bold_headers()
///     .set_alignment(1, Alignment::Right)
///     .add_row(["Alice", "30"])
///     .build();
/// assert_eq!(table, "| **Name** | **Age** |\n| --- | ---: |\n| Alice | 30 |\n");
/// ```
#[derive(Default)]
pub struct TableBuilder {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
    alignments: Vec<Alignment>,
    header_style: Option<HeaderStyle>,
}

impl fmt::Debug for TableBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TableBuilder")
            .field("headers", &self.headers)
            .field("rows", &self.rows)
            .field("alignments", &self.alignments)
            .field("styled_headers", &self.header_style.is_some())
            .finish()
    }
}

impl TableBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append header cells. New columns start with [`Alignment::Default`].
    #[must_use]
    pub fn with_headers<I, S>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.headers.extend(headers.into_iter().map(Into::into));
        self.alignments.resize(self.headers.len(), Alignment::Default);
        self
    }

    /// Render each header through `style`.
    #[must_use]
    pub fn with_header_style<F>(mut self, style: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        self.header_style = Some(Box::new(style));
        self
    }

    #[must_use]
    pub fn with_bold_headers(self) -> Self {
        self.with_header_style(bold)
    }

    #[must_use]
    pub fn add_row<I, S>(mut self, cells: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rows.push(cells.into_iter().map(Into::into).collect());
        self
    }

    #[must_use]
    pub fn add_rows<R, I, S>(self, rows: R) -> Self
    where
        R: IntoIterator<Item = I>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        rows.into_iter().fold(self, Self::add_row)
    }

    /// Set the alignment of one column. Columns without a header are ignored.
    #[must_use]
    pub fn set_alignment(mut self, column: usize, alignment: Alignment) -> Self {
        if let Some(slot) = self.alignments.get_mut(column) {
            *slot = alignment;
        }
        self
    }

    /// Set alignments from the first column onwards; extra values are ignored.
    #[must_use]
    pub fn set_alignments<I>(mut self, alignments: I) -> Self
    where
        I: IntoIterator<Item = Alignment>,
    {
        for (slot, alignment) in self.alignments.iter_mut().zip(alignments) {
            *slot = alignment;
        }
        self
    }

    /// Render the table, or an empty string when there are no headers.
    #[must_use]
    pub fn build(&self) -> String {
        if self.headers.is_empty() {
            return String::new();
        }

        let headers: Vec<String> = self
            .headers
            .iter()
            .map(|h| match &self.header_style {
                Some(style) => style(h),
                None => h.clone(),
            })
            .collect();
        let separators: Vec<&str> = self.alignments.iter().map(|a| a.separator()).collect();

        let mut out = format_row(&headers);
        out.push_str(&format_row(&separators));
        for row in &self.rows {
            let mut cells: Vec<&str> = row
                .iter()
                .take(self.headers.len())
                .map(String::as_str)
                .collect();
            cells.resize(self.headers.len(), "");
            out.push_str(&format_row(&cells));
        }
        out
    }
}

fn format_row<S: AsRef<str>>(cells: &[S]) -> String {
    let joined = cells
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(" | ");
    format!("| {joined} |\n")
}
