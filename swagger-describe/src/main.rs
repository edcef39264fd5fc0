//! swagger-describe — make sure every swag handler comment block has an `@Description`.
//!
//! For each `// @Summary ...` block without a `// @Description` line, one is
//! inserted right after the summary, derived from the summary's leading verb.
//! Blocks that already carry a description are left byte-identical.
//!
//! - **default**: `swagger-describe` scans `internal/api/v1/*.go`
//! - **targets**: `swagger-describe handlers/ 'pkg/**/*.go'`
//! - **check**: `swagger-describe --check` reports without writing

mod classify;
mod discover;
mod docblock;
mod model;
mod rules;

use anyhow::{Context, Result};
use clap::Parser;
use model::RunSummary;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tempfile::NamedTempFile;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(
    name = "swagger-describe",
    about = "Insert missing @Description lines into swag handler comments"
)]
struct Cli {
    /// Files, directories or glob patterns. Defaults to internal/api/v1.
    targets: Vec<String>,

    /// File extension matched when scanning directories
    #[arg(long, default_value = discover::DEFAULT_EXTENSION)]
    ext: String,

    /// Report missing descriptions without writing; exit 1 if any
    #[arg(long)]
    check: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<ExitCode> {
    let files = discover::resolve_targets(&cli.targets, &cli.ext)?;
    let summary = process_files(&files, !cli.check)?;

    if cli.check {
        println!(
            "swagger descriptions missing: files={} blocks={}",
            summary.files_changed, summary.inserted
        );
        if summary.inserted > 0 {
            return Ok(ExitCode::FAILURE);
        }
    } else {
        println!(
            "swagger descriptions ensured: files_changed={} inserted={}",
            summary.files_changed, summary.inserted
        );
    }
    Ok(ExitCode::SUCCESS)
}

/// Process files in order, stopping at the first one that cannot be read.
fn process_files(files: &[PathBuf], write: bool) -> Result<RunSummary> {
    let mut summary = RunSummary::default();
    for path in files {
        summary.record(process_file(path, write)?);
    }
    Ok(summary)
}

/// Ensure descriptions in one file; returns the number of inserted lines.
fn process_file(path: &Path, write: bool) -> Result<usize> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let ensured = docblock::ensure_descriptions(&content);
    debug!(file = %path.display(), inserted = ensured.inserted, "scanned");

    if let (true, Some(updated)) = (write, ensured.content) {
        replace_file(path, updated.as_bytes())
            .with_context(|| format!("failed to write {}", path.display()))?;
        info!(file = %path.display(), inserted = ensured.inserted, "added descriptions");
    }
    Ok(ensured.inserted)
}

/// Write `contents` to a temp file next to `path`, then rename it over `path`.
fn replace_file(path: &Path, contents: &[u8]) -> io::Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let permissions = fs::metadata(path)?.permissions();
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(contents)?;
    tmp.as_file().sync_all()?;
    tmp.as_file().set_permissions(permissions)?;
    tmp.persist(path).map_err(|err| err.error)?;
    Ok(())
}

/// Log to stderr; stdout is reserved for the summary line.
fn init_tracing(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::registry()
        .with(EnvFilter::new(level))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .init();
}
