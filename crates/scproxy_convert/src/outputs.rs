//! Static mapping from source extensions to expected converter outputs.
//!
//! This table is the sole mechanism for discovering what the external
//! converter should have produced. It is a closed enumeration, not inferred
//! from the converter's behavior: after a conversion the orchestrator probes
//! `<stem>.<ext>` for each expected extension and trusts only the
//! filesystem.

use std::path::Path;

/// Kind of source asset, detected from the file extension.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SourceKind {
    /// 3-D model containers (`.mcsb`, `.mcsa`, `.mcvd`) — convert to an
    /// embedded scene graph (`.glb`).
    Model,
    /// Compressed game textures (`.ol`) — convert to `.dds`.
    Texture,
    /// Picture files (`.mic`) — convert to `.png`.
    Image,
    /// Texture arrays (`.texarr`) — convert to a `.zip` archive of images.
    TextureArray,
}

/// Source extensions handled per kind, lowercase without the dot.
const MODEL_EXTENSIONS: &[&str] = &["mcsb", "mcsa", "mcvd"];
const TEXTURE_EXTENSIONS: &[&str] = &["ol"];
const IMAGE_EXTENSIONS: &[&str] = &["mic"];
const TEXARR_EXTENSIONS: &[&str] = &["texarr"];

impl SourceKind {
    /// Detects the source kind from a path's extension (case-insensitive).
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        if MODEL_EXTENSIONS.contains(&ext.as_str()) {
            Some(SourceKind::Model)
        } else if TEXTURE_EXTENSIONS.contains(&ext.as_str()) {
            Some(SourceKind::Texture)
        } else if IMAGE_EXTENSIONS.contains(&ext.as_str()) {
            Some(SourceKind::Image)
        } else if TEXARR_EXTENSIONS.contains(&ext.as_str()) {
            Some(SourceKind::TextureArray)
        } else {
            None
        }
    }

    /// Output extensions the converter is expected to produce for this kind.
    pub fn expected_output_extensions(self) -> &'static [&'static str] {
        match self {
            SourceKind::Model => &["glb"],
            SourceKind::Texture => &["dds"],
            SourceKind::Image => &["png"],
            SourceKind::TextureArray => &["zip"],
        }
    }

    /// All supported source extensions, lowercase without the dot.
    pub fn supported_extensions() -> impl Iterator<Item = &'static str> {
        MODEL_EXTENSIONS
            .iter()
            .chain(TEXTURE_EXTENSIONS)
            .chain(IMAGE_EXTENSIONS)
            .chain(TEXARR_EXTENSIONS)
            .copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_each_kind() {
        assert_eq!(SourceKind::from_path(Path::new("a.mcsb")), Some(SourceKind::Model));
        assert_eq!(SourceKind::from_path(Path::new("a.mcsa")), Some(SourceKind::Model));
        assert_eq!(SourceKind::from_path(Path::new("a.mcvd")), Some(SourceKind::Model));
        assert_eq!(SourceKind::from_path(Path::new("a.ol")), Some(SourceKind::Texture));
        assert_eq!(SourceKind::from_path(Path::new("a.mic")), Some(SourceKind::Image));
        assert_eq!(
            SourceKind::from_path(Path::new("a.texarr")),
            Some(SourceKind::TextureArray)
        );
    }

    #[test]
    fn detection_is_case_insensitive() {
        assert_eq!(SourceKind::from_path(Path::new("A.MCSA")), Some(SourceKind::Model));
        assert_eq!(SourceKind::from_path(Path::new("A.Ol")), Some(SourceKind::Texture));
    }

    #[test]
    fn unknown_and_missing_extensions_are_none() {
        assert_eq!(SourceKind::from_path(Path::new("a.txt")), None);
        assert_eq!(SourceKind::from_path(Path::new("noext")), None);
    }

    #[test]
    fn expected_outputs_per_kind() {
        assert_eq!(SourceKind::Model.expected_output_extensions(), &["glb"]);
        assert_eq!(SourceKind::Texture.expected_output_extensions(), &["dds"]);
        assert_eq!(SourceKind::Image.expected_output_extensions(), &["png"]);
        assert_eq!(SourceKind::TextureArray.expected_output_extensions(), &["zip"]);
    }

    #[test]
    fn supported_extensions_cover_all_kinds() {
        let all: Vec<_> = SourceKind::supported_extensions().collect();
        assert_eq!(all, vec!["mcsb", "mcsa", "mcvd", "ol", "mic", "texarr"]);
    }
}
