//! Per-directory manifest of produced proxy outputs.
//!
//! Each cache directory holds one `manifest.json` recording the resolved
//! source path and the output files the conversion produced there. Reads
//! filter the recorded outputs down to those still present on disk without
//! rewriting the file, so a cache directory can report partial availability.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::CacheError;

/// Name of the manifest file within a cache directory.
const MANIFEST_FILE: &str = "manifest.json";

/// Temporary name used to make manifest replacement atomic.
const MANIFEST_TMP: &str = "manifest.json.tmp";

/// Persisted record of a single conversion.
///
/// Serialized as `manifest.json` in the cache directory. An empty `outputs`
/// list is a valid, cacheable "this input yields no output" result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProxyManifest {
    /// Resolved absolute path of the converted source file.
    pub source: PathBuf,

    /// Resolved absolute paths of the outputs, in discovery order.
    pub outputs: Vec<PathBuf>,
}

impl ProxyManifest {
    /// Returns the manifest file path for a cache directory.
    pub fn path_in(cache_dir: &Path) -> PathBuf {
        cache_dir.join(MANIFEST_FILE)
    }

    /// Writes a manifest into the cache directory, replacing any prior one.
    ///
    /// The record is written to a temporary name and renamed into place so a
    /// concurrent reader never observes a partially written manifest.
    pub fn write(cache_dir: &Path, source: &Path, outputs: &[PathBuf]) -> Result<(), CacheError> {
        let manifest = Self {
            source: source.to_path_buf(),
            outputs: outputs.to_vec(),
        };
        let json =
            serde_json::to_string_pretty(&manifest).map_err(|e| CacheError::ManifestEncode {
                reason: e.to_string(),
            })?;

        let tmp = cache_dir.join(MANIFEST_TMP);
        std::fs::write(&tmp, json).map_err(|e| CacheError::Io {
            path: tmp.clone(),
            source: e,
        })?;

        let path = Self::path_in(cache_dir);
        std::fs::rename(&tmp, &path).map_err(|e| CacheError::Io { path, source: e })
    }

    /// Reads the surviving outputs recorded in a cache directory.
    ///
    /// Returns an empty list when no manifest exists. Recorded outputs that
    /// no longer exist on disk are dropped from the result; the manifest
    /// file itself is left untouched. A manifest that exists but cannot be
    /// parsed fails with [`CacheError::ManifestCorrupt`].
    pub fn read_outputs(cache_dir: &Path) -> Result<Vec<PathBuf>, CacheError> {
        let path = Self::path_in(cache_dir);
        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(CacheError::Io { path, source: e }),
        };

        let manifest: Self =
            serde_json::from_str(&content).map_err(|e| CacheError::ManifestCorrupt {
                path: path.clone(),
                reason: e.to_string(),
            })?;

        Ok(manifest
            .outputs
            .into_iter()
            .filter(|output| output.exists())
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn touch(dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        std::fs::write(&path, b"output bytes").unwrap();
        path
    }

    #[test]
    fn write_then_read_returns_written_outputs() {
        let dir = tempfile::tempdir().unwrap();
        let a = touch(dir.path(), "model.glb");
        let b = touch(dir.path(), "model.png");

        ProxyManifest::write(dir.path(), Path::new("/assets/model.mcsa"), &[a.clone(), b.clone()])
            .unwrap();

        let outputs = ProxyManifest::read_outputs(dir.path()).unwrap();
        assert_eq!(outputs, vec![a, b]);
    }

    #[test]
    fn read_drops_outputs_missing_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let kept = touch(dir.path(), "model.glb");
        let deleted = touch(dir.path(), "model.png");

        ProxyManifest::write(
            dir.path(),
            Path::new("/assets/model.mcsa"),
            &[kept.clone(), deleted.clone()],
        )
        .unwrap();

        std::fs::remove_file(&deleted).unwrap();
        let outputs = ProxyManifest::read_outputs(dir.path()).unwrap();
        assert_eq!(outputs, vec![kept]);
    }

    #[test]
    fn read_does_not_rewrite_manifest() {
        let dir = tempfile::tempdir().unwrap();
        let kept = touch(dir.path(), "model.glb");
        let deleted = touch(dir.path(), "model.png");
        ProxyManifest::write(dir.path(), Path::new("/assets/model.mcsa"), &[kept, deleted.clone()])
            .unwrap();
        std::fs::remove_file(&deleted).unwrap();

        let before = std::fs::read_to_string(ProxyManifest::path_in(dir.path())).unwrap();
        ProxyManifest::read_outputs(dir.path()).unwrap();
        let after = std::fs::read_to_string(ProxyManifest::path_in(dir.path())).unwrap();
        assert_eq!(before, after);
    }

    #[test]
    fn read_unwritten_directory_is_empty_not_error() {
        let dir = tempfile::tempdir().unwrap();
        let outputs = ProxyManifest::read_outputs(dir.path()).unwrap();
        assert!(outputs.is_empty());
    }

    #[test]
    fn read_corrupt_manifest_fails_loudly() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(ProxyManifest::path_in(dir.path()), "not valid json {{{").unwrap();

        let err = ProxyManifest::read_outputs(dir.path()).unwrap_err();
        assert!(matches!(err, CacheError::ManifestCorrupt { .. }));
    }

    #[test]
    fn write_replaces_existing_manifest() {
        let dir = tempfile::tempdir().unwrap();
        let old = touch(dir.path(), "old.glb");
        let new = touch(dir.path(), "new.glb");

        ProxyManifest::write(dir.path(), Path::new("/assets/model.mcsa"), &[old]).unwrap();
        ProxyManifest::write(dir.path(), Path::new("/assets/model.mcsa"), &[new.clone()]).unwrap();

        let outputs = ProxyManifest::read_outputs(dir.path()).unwrap();
        assert_eq!(outputs, vec![new]);
        assert!(!dir.path().join(MANIFEST_TMP).exists());
    }

    #[test]
    fn empty_manifest_roundtrips() {
        let dir = tempfile::tempdir().unwrap();
        ProxyManifest::write(dir.path(), Path::new("/assets/empty.ol"), &[]).unwrap();
        assert!(ProxyManifest::path_in(dir.path()).exists());
        assert!(ProxyManifest::read_outputs(dir.path()).unwrap().is_empty());
    }

    #[test]
    fn serde_roundtrip() {
        let manifest = ProxyManifest {
            source: PathBuf::from("/assets/model.mcsa"),
            outputs: vec![PathBuf::from("/cache/model_ab/model.glb")],
        };
        let json = serde_json::to_string(&manifest).unwrap();
        let back: ProxyManifest = serde_json::from_str(&json).unwrap();
        assert_eq!(back.source, manifest.source);
        assert_eq!(back.outputs, manifest.outputs);
    }
}
