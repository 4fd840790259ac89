//! Common imports for integration tests.
#![allow(unfulfilled_lint_expectations)]

#[expect(unused_imports, reason = "re-exporting common test utilities")]
pub use assert_cmd::{Command, prelude::*};
#[expect(unused_imports, reason = "re-exporting common test utilities")]
pub use predicates::prelude::*;
#[expect(unused_imports, reason = "re-exporting common test utilities")]
pub use rstest::{fixture, rstest};

#[macro_use]
#[path = "../common/mod.rs"]
mod common;
#[expect(unused_imports, reason = "re-exporting common test utilities")]
pub use common::*;

/// Document with one spoiler wrapping a Go code block.
#[fixture]
pub fn nested_spoiler() -> String {
    doc![
        "```spoiler Code Example",
        "```go",
        "fmt.Println(\"Hello\")",
        "```",
        "```",
    ]
}

/// [`nested_spoiler`] after escaping.
#[fixture]
pub fn escaped_spoiler() -> String {
    doc![
        "```spoiler Code Example",
        "~~~go",
        "fmt.Println(\"Hello\")",
        "~~~",
        "```",
    ]
}

/// A `zlmd` command ready for arguments.
pub fn zlmd() -> Command {
    Command::cargo_bin("zlmd").expect("Failed to create cargo command for zlmd")
}
