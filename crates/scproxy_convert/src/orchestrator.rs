//! The cache-consulting conversion orchestrator.
//!
//! [`ProxyPipeline::obtain`] is the single point where the "at most one
//! conversion per fingerprint" guarantee lives: with reuse enabled, a
//! manifest whose outputs survive on disk short-circuits the converter
//! entirely. The guarantee is best-effort and holds within one sequential
//! batch run; concurrent processes racing on a cache directory are an
//! accepted edge case (last writer's manifest wins).

use std::path::{Path, PathBuf};

use scproxy_cache::{CacheError, CacheLayout, ProxyManifest};

use crate::converter::{Converter, ConverterFailure};
use crate::error::ConvertError;
use crate::options::ConvertOptions;
use crate::outputs::SourceKind;

/// Orchestrates conversion of source assets into cached proxy outputs.
pub struct ProxyPipeline<'a> {
    /// The external converter.
    converter: &'a dyn Converter,

    /// Cache directory resolver.
    layout: CacheLayout,
}

impl<'a> ProxyPipeline<'a> {
    /// Creates a pipeline writing into the given cache root.
    pub fn new(converter: &'a dyn Converter, cache_root: &Path) -> Self {
        Self {
            converter,
            layout: CacheLayout::new(cache_root),
        }
    }

    /// Returns the cache root this pipeline writes into.
    pub fn cache_root(&self) -> &Path {
        self.layout.root()
    }

    /// Obtains the proxy outputs for a source file.
    ///
    /// With `reuse_cached` set, a manifest with surviving outputs is
    /// returned without invoking the converter; a manifest with zero
    /// surviving outputs is a cache miss. A corrupt manifest is logged and
    /// treated as a forced miss rather than failing the source. Otherwise
    /// the converter runs, outputs are discovered from the filesystem by
    /// the expected-extension table, and a fresh manifest is written —
    /// even an empty one, which records "this input yields no output".
    pub fn obtain(
        &self,
        source: &Path,
        options: &ConvertOptions,
        reuse_cached: bool,
    ) -> Result<Vec<PathBuf>, ConvertError> {
        let source = resolve_source(source)?;
        let signature = options.signature();
        let cache_dir = self.layout.resolve(&source, &signature)?;

        if reuse_cached {
            match ProxyManifest::read_outputs(&cache_dir) {
                Ok(outputs) if !outputs.is_empty() => {
                    tracing::debug!(source = %source.display(), "reusing cached proxies");
                    return Ok(outputs);
                }
                Ok(_) => {}
                Err(err @ CacheError::ManifestCorrupt { .. }) => {
                    // Corruption forces a re-conversion instead of failing
                    // the source; the fresh manifest replaces the bad one.
                    tracing::warn!(
                        source = %source.display(),
                        error = %err,
                        "corrupt manifest, re-converting"
                    );
                }
                Err(other) => return Err(other.into()),
            }
        }

        self.converter
            .convert(&source, &cache_dir, options)
            .map_err(|failure| match failure {
                ConverterFailure::Unavailable(reason) => {
                    ConvertError::DependencyUnavailable { reason }
                }
                ConverterFailure::Failed(reason) => ConvertError::ConversionFailed {
                    source_path: source.clone(),
                    reason,
                },
            })?;

        let outputs = discover_outputs(&source, &cache_dir);
        ProxyManifest::write(&cache_dir, &source, &outputs)?;

        tracing::debug!(
            source = %source.display(),
            outputs = outputs.len(),
            "conversion complete"
        );
        Ok(outputs)
    }
}

/// Resolves the source to an absolute path, mapping a vanished file to
/// [`CacheError::SourceMissing`].
fn resolve_source(source: &Path) -> Result<PathBuf, ConvertError> {
    source
        .canonicalize()
        .map_err(|e| {
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
        })
        .map_err(ConvertError::from)
}

/// Discovers the outputs a conversion actually produced.
///
/// Probes `<stem>.<ext>` in the cache directory for each extension the
/// source kind is expected to yield, keeping only paths present on disk.
fn discover_outputs(source: &Path, cache_dir: &Path) -> Vec<PathBuf> {
    let Some(kind) = SourceKind::from_path(source) else {
        return Vec::new();
    };
    let stem = source
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or_default();

    kind.expected_output_extensions()
        .iter()
        .map(|ext| cache_dir.join(format!("{stem}.{ext}")))
        .filter(|path| path.exists())
        .collect()
}
