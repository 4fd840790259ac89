//! File helpers for escaping Markdown documents on disk.

use std::{fs, io, path::Path};

use log::warn;

use crate::escape::{escape_markdown, try_escape_markdown};

/// Rewrite a file in place with nested spoiler fences escaped.
///
/// A file whose fences do not balance is left as it was; the return value
/// reports whether the escape succeeded.
///
/// # Errors
/// Returns an error if reading or writing the file fails.
pub fn rewrite(path: &Path) -> io::Result<bool> {
    let text = fs::read_to_string(path)?;
    let (fixed, ok) = escape_markdown(&text);
    if !ok {
        warn!("{}: unbalanced code fences, leaving file unchanged", path.display());
        return Ok(false);
    }
    if fixed != text {
        fs::write(path, fixed)?;
    }
    Ok(true)
}

/// Rewrite a file in place, treating unbalanced fences as an error.
///
/// # Errors
/// Returns an error if the file cannot be read or written, or an
/// [`io::ErrorKind::InvalidData`] error wrapping the
/// [`FenceError`](crate::FenceError) when its fences do not balance.
pub fn rewrite_strict(path: &Path) -> io::Result<()> {
    let text = fs::read_to_string(path)?;
    let fixed =
        try_escape_markdown(&text).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    if fixed != text {
        fs::write(path, fixed)?;
    }
    Ok(())
}
