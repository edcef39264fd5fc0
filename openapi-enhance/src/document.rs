//! Reading and writing the OpenAPI JSON document.
//!
//! Key order and number spelling are preserved (`serde_json` features
//! `preserve_order` and `arbitrary_precision`), output is two-space
//! indented UTF-8 with non-ASCII left unescaped and a single trailing
//! newline. The target is replaced by rename, never truncated in place.

use crate::error::EnhanceError;
use serde_json::Value;
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// Load and parse the document at `path`.
pub fn load(path: &Path) -> Result<Value, EnhanceError> {
    if !path.exists() {
        return Err(EnhanceError::NotFound(path.to_path_buf()));
    }
    let content = fs::read_to_string(path).map_err(|source| EnhanceError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| EnhanceError::InvalidJson {
        path: path.to_path_buf(),
        source,
    })
}

/// Pretty-print `doc` the way it is written back to disk.
pub fn render(doc: &Value) -> Result<String, EnhanceError> {
    let mut out = serde_json::to_string_pretty(doc).map_err(EnhanceError::Encode)?;
    out.push('\n');
    Ok(out)
}

/// Overwrite `path` with the rendered document.
pub fn save(path: &Path, doc: &Value) -> Result<(), EnhanceError> {
    let out = render(doc)?;
    replace_file(path, out.as_bytes()).map_err(|source| EnhanceError::Write {
        path: path.to_path_buf(),
        source,
    })
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
