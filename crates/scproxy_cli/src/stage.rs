//! Filesystem staging loader for the CLI.
//!
//! The CLI has no scene database; its stand-in for a host is a staging
//! directory that converted proxies are copied into.

use std::path::{Path, PathBuf};

use scproxy_import::{AssetLoader, LoadError};

/// [`AssetLoader`] that copies proxies into a staging directory.
pub struct StagingLoader {
    dest: PathBuf,
}

impl StagingLoader {
    /// Creates a loader staging into `dest`, creating the directory.
    pub fn new(dest: &Path) -> Result<Self, std::io::Error> {
        std::fs::create_dir_all(dest)?;
        Ok(Self {
            dest: dest.to_path_buf(),
        })
    }

    fn stage(&self, path: &Path) -> Result<(), LoadError> {
        let name = path
            .file_name()
            .ok_or_else(|| LoadError::new(format!("no file name in '{}'", path.display())))?;
        std::fs::copy(path, self.dest.join(name))?;
        Ok(())
    }
}

impl AssetLoader for StagingLoader {
    fn load_scene(&mut self, path: &Path) -> Result<(), LoadError> {
        self.stage(path)
    }

    fn load_image(&mut self, path: &Path) -> Result<(), LoadError> {
        self.stage(path)
    }
}
