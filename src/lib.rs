//! Zulip-flavoured Markdown helpers.
//!
//! The crate builds Markdown fragments for Zulip messages (inline styles,
//! headings, lists, tables, sections, spoilers, code blocks, time tags and
//! mentions) and escapes code fences nested inside spoiler blocks so the
//! outer spoiler is not closed early.
//!
//! ```
//! use zlmd::{Section, TableBuilder, spoiler};
//!
//! let table = TableBuilder::new()
//!     .with_headers(["Check", "Result"])
//!     .add_row(["build", "ok"]);
//! let report = Section::new(2, "CI")
//!     .add_table(&table)
//!     .add_text(spoiler("Log", "```sh\ncargo build\n```"))
//!     .build();
//! assert!(report.contains("~~~sh"));
//! ```

#[macro_use]
mod macros;

pub mod blocks;
pub mod escape;
pub mod inline;
pub mod io;
pub mod section;
pub mod status;
pub mod table;
pub mod zulip;

pub use blocks::{
    checklist_item, code_block, h1, h2, h3, h4, h5, h6, heading, key_value, line_break,
    list_item, markdown_block, paragraph, quote_block, quote_block_nl, spoiler,
    spoiler_backtick, spoiler_tilde, spoiler_with_fence,
};
pub use escape::{FenceError, escape_markdown, escape_spoiler_block, try_escape_markdown};
pub use inline::{bold, code, horizontal_rule, image, italic, link};
pub use io::{rewrite, rewrite_strict};
pub use section::{Document, Section};
pub use table::{Alignment, TableBuilder};
pub use zulip::{emoji, format_time, group_mention, mention, silent_mention, stream_link, topic_link};
