//! Source file fingerprinting and cache key derivation.
//!
//! A source file's cache identity is its resolved path, byte size, and
//! modification time captured at key-computation time. Any change to one of
//! the three produces a different [`CacheKey`], so a stale cache directory is
//! never matched for an edited file.

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::UNIX_EPOCH;

use sha2::{Digest, Sha256};

use crate::error::CacheError;

/// Number of hex characters kept from the SHA-256 digest.
///
/// 20 characters (80 bits) keeps directory names short while leaving
/// birthday collisions far outside realistic batch sizes.
const KEY_HEX_LEN: usize = 20;

/// Filesystem identity of a source file at the moment of key computation.
///
/// Derived, never stored: each lookup re-queries the filesystem so that an
/// edited source (new size or mtime) maps to a fresh cache directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceIdentity {
    /// Resolved absolute path to the source file.
    pub path: PathBuf,

    /// File size in bytes.
    pub size: u64,

    /// Modification time in nanoseconds since the Unix epoch.
    pub mtime_ns: u128,
}

impl SourceIdentity {
    /// Captures the identity of an existing source file.
    ///
    /// Fails with [`CacheError::SourceMissing`] if the file does not exist.
    pub fn capture(source: &Path) -> Result<Self, CacheError> {
        let metadata = std::fs::metadata(source).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                CacheError::SourceMissing {
                    path: source.to_path_buf(),
                }
            } else {
                CacheError::Io {
                    path: source.to_path_buf(),
                    source: e,
                }
            }
        })?;

        let path = source.canonicalize().map_err(|e| CacheError::Io {
            path: source.to_path_buf(),
            source: e,
        })?;

        // Files dated before the epoch fingerprint as zero.
        let mtime_ns = metadata
            .modified()
            .map_err(|e| CacheError::Io {
                path: path.clone(),
                source: e,
            })?
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos())
            .unwrap_or(0);

        Ok(Self {
            path,
            size: metadata.len(),
            mtime_ns,
        })
    }
}

/// A short, fixed-length, filesystem-safe cache key.
///
/// Derived from a [`SourceIdentity`] and a canonical options signature via
/// SHA-256, hex-encoded and truncated to [`KEY_HEX_LEN`] characters. Equal
/// (identity, signature) pairs always derive equal keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey(String);

impl CacheKey {
    /// Derives the cache key for a source identity and options signature.
    pub fn derive(identity: &SourceIdentity, options_signature: &str) -> Self {
        let raw = format!(
            "{}|{}|{}|{}",
            identity.path.display(),
            identity.size,
            identity.mtime_ns,
            options_signature
        );
        let digest = Sha256::digest(raw.as_bytes());
        let mut hex = hex::encode(digest);
        hex.truncate(KEY_HEX_LEN);
        Self(hex)
    }

    /// Returns the key as a hex string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
