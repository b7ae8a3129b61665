//! Read and write freshclam-style configuration files.

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;

use crate::core::document::Document;
use crate::core::parser::parse_document;
use crate::core::serializer::render;

/// Read and parse a configuration file.
pub fn read_document(path: &Path) -> Result<Document> {
    debug!(path = %path.display(), "reading config");
    let contents =
        fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
    let doc = parse_document(&contents);
    debug!(path = %path.display(), lines = doc.len(), "config parsed");
    Ok(doc)
}

/// Render `doc` and atomically write it to `path` (temp file + rename).
///
/// An existing `path` is resolved through symlinks first, and the replaced
/// file's permissions carry over to the new contents.
pub fn write_document(path: &Path, doc: &Document) -> Result<()> {
    let target = resolve_target(path)?;
    debug!(path = %path.display(), target = %target.display(), lines = doc.len(), "writing config");
    write_atomic(&target, &render(doc))
}

fn resolve_target(path: &Path) -> Result<PathBuf> {
    if !path.exists() {
        return Ok(path.to_path_buf());
    }
    fs::canonicalize(path).with_context(|| format!("resolve config {}", path.display()))
}

fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent).with_context(|| format!("create directory {}", parent.display()))?;
    let tmp_path = temp_sibling(path)?;
    fs::write(&tmp_path, contents)
        .with_context(|| format!("write temp config {}", tmp_path.display()))?;
    if path.exists() {
        let permissions = fs::metadata(path)
            .with_context(|| format!("read permissions {}", path.display()))?
            .permissions();
        fs::set_permissions(&tmp_path, permissions)
            .with_context(|| format!("set permissions {}", tmp_path.display()))?;
    }
    fs::rename(&tmp_path, path).with_context(|| format!("replace config {}", path.display()))?;
    Ok(())
}

/// `freshclam.conf` -> `freshclam.conf.tmp`, in the same directory.
fn temp_sibling(path: &Path) -> Result<PathBuf> {
    let file_name = path
        .file_name()
        .with_context(|| format!("config path missing file name {}", path.display()))?;
    let mut tmp_name = OsString::from(file_name);
    tmp_name.push(".tmp");
    Ok(path.with_file_name(tmp_name))
}
