use std::{
    fs,
    io::{self, Read},
    path::{Path, PathBuf},
};

use anyhow::Context;
use clap::Parser;
use log::warn;
use rayon::prelude::*;
use zlmd::{escape_markdown, rewrite, rewrite_strict, try_escape_markdown};

#[derive(Parser)]
#[command(
    version,
    about = "Escape code fences nested inside Zulip spoiler blocks"
)]
struct Cli {
    /// Rewrite files in place
    #[arg(long = "in-place", requires = "files")]
    in_place: bool,
    /// Fail on unbalanced fences instead of passing the input through
    #[arg(long = "strict")]
    strict: bool,
    /// Escape this text instead of reading files or standard input
    #[arg(long = "text", conflicts_with_all = ["files", "in_place"])]
    text: Option<String>,
    /// Markdown files to escape
    files: Vec<PathBuf>,
}

fn escape(source: &str, name: &str, strict: bool) -> anyhow::Result<String> {
    if strict {
        return try_escape_markdown(source)
            .with_context(|| format!("{name}: unbalanced code fences"));
    }
    let (out, ok) = escape_markdown(source);
    if !ok {
        warn!("{name}: unbalanced code fences, passing input through unchanged");
    }
    Ok(out)
}

fn escape_path(path: &Path, strict: bool) -> anyhow::Result<String> {
    let content =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    escape(&content, &path.display().to_string(), strict)
}

fn rewrite_path(path: &Path, strict: bool) -> anyhow::Result<()> {
    if strict {
        rewrite_strict(path).with_context(|| format!("failed to rewrite {}", path.display()))
    } else {
        rewrite(path)
            .map(|_| ())
            .with_context(|| format!("failed to rewrite {}", path.display()))
    }
}

/// Entry point for the command-line tool that escapes nested spoiler fences.
///
/// With no files the document is read from standard input. Files are
/// processed in parallel and printed in argument order, or rewritten in
/// place with `--in-place`.
///
/// # Examples
///
/// ```sh
/// # Escape a file and print the result
/// zlmd message.md
///
/// # Escape files in place, failing on unbalanced fences
/// zlmd --in-place --strict a.md b.md
///
/// # Escape standard input
/// cat message.md | zlmd
/// ```
fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    if let Some(text) = cli.text {
        println!("{}", escape(&text, "--text", cli.strict)?);
        return Ok(());
    }

    if cli.files.is_empty() {
        let mut input = String::new();
        io::stdin().read_to_string(&mut input)?;
        print!("{}", escape(&input, "<stdin>", cli.strict)?);
        return Ok(());
    }

    if cli.in_place {
        let results: Vec<anyhow::Result<()>> = cli
            .files
            .par_iter()
            .map(|path| rewrite_path(path, cli.strict))
            .collect();
        return results.into_iter().collect();
    }

    let results: Vec<anyhow::Result<String>> = cli
        .files
        .par_iter()
        .map(|path| escape_path(path, cli.strict))
        .collect();
    for result in results {
        print!("{}", result?);
    }
    Ok(())
}
