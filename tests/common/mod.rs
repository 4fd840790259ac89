//! Utility helpers shared across integration tests.

use std::{fs, path::PathBuf};

use tempfile::TempDir;

/// Build a `\n`-joined document from a list of lines.
///
/// Keeps multi-line Markdown fixtures readable in test bodies.
macro_rules! doc {
    ($($line:expr),* $(,)?) => {
        [$($line),*].join("\n")
    };
}

/// Write `contents` to `name` inside `dir` and return its path.
pub fn write_file(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("failed to write fixture file");
    path
}

/// Assert the escape contract for a document that is expected to balance:
/// the output is a fixed point of a second escape.
pub fn assert_escapes_cleanly(input: &str) -> String {
    let (out, ok) = zlmd::escape_markdown(input);
    assert!(ok, "expected balanced fences in {input:?}");
    assert_eq!(zlmd::escape_markdown(&out), (out.clone(), true));
    out
}
