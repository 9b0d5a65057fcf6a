//! Error types for conversion orchestration.

use std::path::PathBuf;

use scproxy_cache::CacheError;

/// Errors that can occur while obtaining proxy outputs for a source file.
///
/// `DependencyUnavailable` and `ConversionFailed` are kept distinct because
/// the remediation differs: reinstalling the converter tool versus fixing
/// the input file.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    /// A cache addressing or manifest error.
    #[error(transparent)]
    Cache(#[from] CacheError),

    /// The external converter could not be launched at all.
    #[error("converter unavailable: {reason}")]
    DependencyUnavailable {
        /// Why the converter could not be launched.
        reason: String,
    },

    /// The external converter ran and reported a failure.
    #[error("conversion of {source_path} failed: {reason}")]
    ConversionFailed {
        /// The source file being converted.
        source_path: PathBuf,
        /// The failure reported by the converter.
        reason: String,
    },
}
