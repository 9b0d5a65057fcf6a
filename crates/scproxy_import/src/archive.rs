//! Expansion of archive proxies into their constituent files.

use std::path::{Path, PathBuf};

use crate::loader::LoadError;

/// Expands a zip archive next to itself and returns the extracted files.
///
/// The archive is extracted into a sibling directory named after the
/// archive stem (`textures.zip` → `textures/`). Extraction is idempotent
/// for an unchanged archive when the converter overwrites in place. The
/// returned list covers every extracted file, sorted, recursing into
/// subdirectories.
pub fn expand_archive(archive_path: &Path) -> Result<Vec<PathBuf>, LoadError> {
    let extract_dir = archive_path.with_extension("");
    std::fs::create_dir_all(&extract_dir)?;

    let file = std::fs::File::open(archive_path)?;
    let mut archive = zip::ZipArchive::new(file)
        .map_err(|e| LoadError::new(format!("not a readable zip archive: {e}")))?;
    archive
        .extract(&extract_dir)
        .map_err(|e| LoadError::new(format!("archive extraction failed: {e}")))?;

    let mut files = Vec::new();
    collect_files(&extract_dir, &mut files)?;
    files.sort();
    Ok(files)
}

/// Recursively collects regular files under a directory.
fn collect_files(dir: &Path, files: &mut Vec<PathBuf>) -> Result<(), LoadError> {
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            collect_files(&path, files)?;
        } else {
            files.push(path);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use zip::write::SimpleFileOptions;

    fn write_zip(path: &Path, entries: &[(&str, &[u8])]) {
        let file = std::fs::File::create(path).unwrap();
        let mut writer = zip::ZipWriter::new(file);
        for (name, content) in entries {
            writer
                .start_file(*name, SimpleFileOptions::default())
                .unwrap();
            writer.write_all(content).unwrap();
        }
        writer.finish().unwrap();
    }

    #[test]
    fn expands_into_sibling_directory() {
        let dir = tempfile::tempdir().unwrap();
        let archive = dir.path().join("textures.zip");
        write_zip(&archive, &[("a.png", b"png"), ("b.dds", b"dds")]);

        let files = expand_archive(&archive).unwrap();
        assert_eq!(files.len(), 2);
        assert!(files.iter().all(|f| f.starts_with(dir.path().join("textures"))));
    }

    #[test]
    fn collects_nested_entries() {
        let dir = tempfile::tempdir().unwrap();
        let archive = dir.path().join("arr.zip");
        write_zip(&archive, &[("sub/inner.png", b"png"), ("top.png", b"png")]);

        let files = expand_archive(&archive).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|f| f.file_name().unwrap().to_str().unwrap().to_string())
            .collect();
        assert!(names.contains(&"inner.png".to_string()));
        assert!(names.contains(&"top.png".to_string()));
    }

    #[test]
    fn non_archive_fails() {
        let dir = tempfile::tempdir().unwrap();
        let bogus = dir.path().join("broken.zip");
        std::fs::write(&bogus, b"this is not a zip").unwrap();
        assert!(expand_archive(&bogus).is_err());
    }

    #[test]
    fn missing_archive_fails() {
        let dir = tempfile::tempdir().unwrap();
        assert!(expand_archive(&dir.path().join("gone.zip")).is_err());
    }
}
