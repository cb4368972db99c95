//! docgen — extract tagged doc comments from Go sources into a JSON document.
//!
//! Scans a directory tree for `.go` files, matches `/* ... */` comment
//! blocks followed by a declaration line, and writes the accumulated
//! functions and structures as JSON. The output file is rewritten after
//! every processed file, so an interrupted run keeps prior files' results.

mod document;
mod model;
mod parser;

use anyhow::{Context, Result};
use clap::Parser;
use document::DocumentBuilder;
use model::{Document, Meta};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "docgen",
    about = "Generate JSON documentation from tagged comment blocks in Go sources"
)]
struct Cli {
    /// Root directory scanned recursively for .go files
    #[arg(default_value = ".")]
    root: PathBuf,

    /// Output JSON path, rewritten after each processed file
    #[arg(default_value = "output.json")]
    output: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let patterns = parser::Patterns::new();

    let meta = Meta {
        generator: env!("CARGO_PKG_NAME").to_string(),
        format: "1".to_string(),
        date: chrono::Local::now().to_string(),
    };
    let mut builder = DocumentBuilder::new(meta);

    for path in collect_files(&cli.root)? {
        let content = fs::read_to_string(&path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        for block in parser::parse(&patterns, &content) {
            builder.add(block);
        }
        write_document(builder.document(), &cli.output)?;
    }

    if builder.dropped_methods() > 0 {
        eprintln!(
            "warning: dropped {} method(s) whose structure was not declared earlier in scan order",
            builder.dropped_methods()
        );
    }

    Ok(())
}

/// Collect all `.go` files under `root`, sorted for deterministic output.
/// A traversal failure aborts the run.
fn collect_files(root: &Path) -> Result<Vec<PathBuf>> {
    if root.is_file() {
        return Ok(vec![root.to_path_buf()]);
    }
    if !root.exists() {
        anyhow::bail!("no such path: {}", root.display());
    }

    let pattern = format!("{}/**/*.go", root.display());
    let entries = glob::glob(&pattern)
        .with_context(|| format!("invalid scan root: {}", root.display()))?;

    let mut files = Vec::new();
    for entry in entries {
        let path = entry.with_context(|| format!("failed to scan {}", root.display()))?;
        if path.is_file() {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Serialize the complete document with tab indentation, overwriting any
/// previous output.
fn write_document(doc: &Document, path: &Path) -> Result<()> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"\t");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    doc.serialize(&mut serializer)
        .context("failed to serialize document")?;
    fs::write(path, &buf).with_context(|| format!("failed to write {}", path.display()))
}
