//! Error types for cache operations.

use std::path::PathBuf;

/// Errors that can occur while addressing or reading the proxy cache.
///
/// A missing manifest is not an error (it reads as an empty output list);
/// a manifest that exists but cannot be parsed is, since corruption must
/// stay distinguishable from "nothing cached yet".
#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    /// The source file was missing when its identity was queried.
    #[error("source file not found: {path}")]
    SourceMissing {
        /// The path that was queried.
        path: PathBuf,
    },

    /// An I/O error occurred while reading or writing cache files.
    #[error("cache I/O error at {path}: {source}")]
    Io {
        /// The path that caused the error.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// A manifest file exists but could not be parsed.
    #[error("corrupt manifest at {path}: {reason}")]
    ManifestCorrupt {
        /// The manifest file path.
        path: PathBuf,
        /// Description of the parse failure.
        reason: String,
    },

    /// A manifest could not be serialized for writing.
    #[error("failed to encode manifest: {reason}")]
    ManifestEncode {
        /// Description of the serialization failure.
        reason: String,
    },
}
