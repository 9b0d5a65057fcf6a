//! Bulk deletion of the cache root's contents.

use std::path::Path;

/// Deletes every direct child of the cache root, returning the number
/// successfully removed.
///
/// A missing cache root yields 0 without error. Per-child deletion
/// failures are logged and skipped; the remaining children are still
/// attempted.
pub fn clean(cache_root: &Path) -> usize {
    if !cache_root.exists() {
        return 0;
    }

    let entries = match std::fs::read_dir(cache_root) {
        Ok(entries) => entries,
        Err(err) => {
            tracing::warn!(root = %cache_root.display(), error = %err, "cannot list cache root");
            return 0;
        }
    };

    let mut removed = 0;
    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                tracing::warn!(root = %cache_root.display(), error = %err, "unreadable cache entry");
                continue;
            }
        };

        let path = entry.path();
        let result = if path.is_dir() {
            std::fs::remove_dir_all(&path)
        } else {
            std::fs::remove_file(&path)
        };

        match result {
            Ok(()) => removed += 1,
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "failed to delete cache entry");
            }
        }
    }
    removed
}
