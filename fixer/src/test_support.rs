//! Test-only helpers for constructing line records and fixture files.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tempfile::TempDir;

use crate::core::line::{Directive, Line};

/// Stock freshclam.conf with comments, blank lines and repeated mirrors.
pub const SAMPLE_CONF: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/tests/fixtures/freshclam.conf"
));

/// Directive record without an inline comment.
pub fn directive(name: &str, value: &str) -> Line {
    Line::Directive(Directive::new(name, value))
}

/// Directive record with an inline comment.
pub fn directive_with_comment(name: &str, value: &str, comment: &str) -> Line {
    Line::Directive(Directive {
        name: name.to_string(),
        value: value.to_string(),
        comment: Some(comment.to_string()),
    })
}

/// Verbatim record holding `text` as-is.
pub fn verbatim(text: &str) -> Line {
    Line::Verbatim(text.to_string())
}

/// Write `contents` to `dir/name` and return the path.
pub fn write_conf(dir: &Path, name: &str, contents: &str) -> Result<PathBuf> {
    let path = dir.join(name);
    fs::write(&path, contents).with_context(|| format!("write {}", path.display()))?;
    Ok(path)
}

/// Temp directory holding a seeded `freshclam.conf`.
///
/// The directory is removed when the value is dropped.
pub struct TestConf {
    dir: TempDir,
    path: PathBuf,
}

impl TestConf {
    /// Seed `freshclam.conf` with `contents` in a fresh temp directory.
    pub fn new(contents: &str) -> Result<Self> {
        let dir = tempfile::tempdir().context("create temp dir")?;
        let path = write_conf(dir.path(), "freshclam.conf", contents)?;
        Ok(Self { dir, path })
    }

    /// Stock sample config.
    pub fn sample() -> Result<Self> {
        Self::new(SAMPLE_CONF)
    }

    pub fn dir(&self) -> &Path {
        self.dir.path()
    }

    /// `path()` as a command-line argument.
    pub fn arg(&self) -> &str {
        self.path.to_str().expect("temp path is valid UTF-8")
    }

    pub fn read(&self) -> Result<String> {
        fs::read_to_string(&self.path).with_context(|| format!("read {}", self.path.display()))
    }
}
