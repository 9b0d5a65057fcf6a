//! The host-facing loading seam.
//!
//! The import sequencer has no dependency on any host framework; whatever
//! actually owns scenes and image resources implements [`AssetLoader`] and
//! receives the produced proxies.

use std::path::Path;

/// Failure loading one produced proxy into the host.
///
/// Always non-fatal for the batch: the sequencer logs it, counts a warning,
/// and moves on.
#[derive(Debug, thiserror::Error)]
#[error("{reason}")]
pub struct LoadError {
    /// What went wrong.
    pub reason: String,
}

impl LoadError {
    /// Creates a load error with the given reason.
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl From<std::io::Error> for LoadError {
    fn from(err: std::io::Error) -> Self {
        Self::new(err.to_string())
    }
}

/// Receiver for converted proxy assets.
pub trait AssetLoader {
    /// Loads a scene-graph proxy (`.glb`) into the host scene.
    fn load_scene(&mut self, path: &Path) -> Result<(), LoadError>;

    /// Loads a raster proxy (`.png`, `.dds`) as an image resource.
    fn load_image(&mut self, path: &Path) -> Result<(), LoadError>;
}
