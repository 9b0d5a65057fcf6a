//! Mapping from (source, options) pairs to per-asset cache directories.
//!
//! Each distinct fingerprint gets its own directory under the cache root,
//! named `<sanitized stem>_<key>` so the cache stays human-browsable while
//! remaining unique per (identity, options) pair.

use std::path::{Path, PathBuf};

use crate::error::CacheError;
use crate::fingerprint::{CacheKey, SourceIdentity};

/// Resolver for per-asset cache directories under a cache root.
///
/// Owns directory creation: [`CacheLayout::resolve`] guarantees the returned
/// directory exists. Resolution is otherwise pure and idempotent — repeated
/// calls with an unchanged source and signature yield the same path.
#[derive(Debug, Clone)]
pub struct CacheLayout {
    /// Top-level directory under which all per-asset directories live.
    root: PathBuf,
}

impl CacheLayout {
    /// Creates a layout rooted at the given cache directory.
    pub fn new(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
        }
    }

    /// Returns the cache root path.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolves (and creates if needed) the cache directory for a source
    /// file and options signature.
    ///
    /// Fails with [`CacheError::SourceMissing`] if the source does not
    /// exist, since its size and mtime are part of the key.
    pub fn resolve(&self, source: &Path, options_signature: &str) -> Result<PathBuf, CacheError> {
        let identity = SourceIdentity::capture(source)?;
        let key = CacheKey::derive(&identity, options_signature);
        let dir = self
            .root
            .join(format!("{}_{}", sanitize_stem(source), key));

        std::fs::create_dir_all(&dir).map_err(|e| CacheError::Io {
            path: dir.clone(),
            source: e,
        })?;
        Ok(dir)
    }
}

/// Sanitizes a source file stem for use in a directory name.
///
/// Alphanumerics and `-`, `_`, `.` pass through; everything else becomes `_`.
fn sanitize_stem(source: &Path) -> String {
    let stem = source
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("asset");
    stem.chars()
        .map(|c| {
            if c.is_alphanumeric() || matches!(c, '-' | '_' | '.') {
                c
            } else {
                '_'
            }
        })
        .collect()
}
