//! Target resolution: turn command-line targets into a sorted file list.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Directory scanned when no targets are given.
pub const DEFAULT_ROOT: &str = "internal/api/v1";

/// Extension of handler sources.
pub const DEFAULT_EXTENSION: &str = "go";

/// How a single command-line target is interpreted.
enum Target<'a> {
    File(&'a Path),
    Dir(&'a Path),
    Pattern(&'a str),
}

impl<'a> Target<'a> {
    fn parse(raw: &'a str) -> Self {
        let path = Path::new(raw);
        if path.is_file() {
            Target::File(path)
        } else if path.is_dir() {
            Target::Dir(path)
        } else {
            Target::Pattern(raw)
        }
    }
}

/// Expand files, directories (non-recursive, filtered by `extension`) and
/// glob patterns into a sorted, de-duplicated list of files.
///
/// With no targets, [`DEFAULT_ROOT`] is scanned.
pub fn resolve_targets(targets: &[String], extension: &str) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    if targets.is_empty() {
        files.extend(expand(Target::parse(DEFAULT_ROOT), extension)?);
    }
    for raw in targets {
        files.extend(expand(Target::parse(raw), extension)?);
    }
    files.sort();
    files.dedup();
    Ok(files)
}

fn expand(target: Target<'_>, extension: &str) -> Result<Vec<PathBuf>> {
    match target {
        Target::File(path) => Ok(vec![path.to_path_buf()]),
        Target::Dir(dir) => files_with_extension(dir, extension),
        Target::Pattern(pattern) => glob_files(pattern),
    }
}

/// Regular files directly inside `dir` whose extension is `extension`.
fn files_with_extension(dir: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir)
        .with_context(|| format!("failed to read directory: {}", dir.display()))?;
    let mut files = Vec::new();
    for entry in entries {
        let path = match entry {
            Ok(entry) => entry.path(),
            Err(err) => {
                warn!(dir = %dir.display(), error = %err, "skipping unreadable directory entry");
                continue;
            }
        };
        if path.is_file() && path.extension().and_then(|e| e.to_str()) == Some(extension) {
            files.push(path);
        }
    }
    Ok(files)
}

/// Regular files matching a glob pattern; no match is only a warning.
fn glob_files(pattern: &str) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in glob::glob(pattern).with_context(|| format!("invalid glob pattern: {}", pattern))? {
        match entry {
            Ok(path) if path.is_file() => files.push(path),
            Ok(_) => {}
            Err(err) => warn!(pattern, error = %err, "skipping unreadable glob match"),
        }
    }
    if files.is_empty() {
        warn!(pattern, "no files matched");
    }
    Ok(files)
}
