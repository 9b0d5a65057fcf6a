//! Conversion options and their canonical cache signature.

/// Output format identifiers for model conversion.
///
/// Passed through to the external converter unchanged; not part of the
/// cache signature.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelFormat {
    /// Binary glTF scene graph.
    Glb,
}

impl ModelFormat {
    /// Returns the identifier the external converter expects.
    pub fn as_str(self) -> &'static str {
        match self {
            ModelFormat::Glb => "glb",
        }
    }
}

/// Option bundle handed to the external converter.
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    /// Model output formats requested from the converter.
    pub model_formats: Vec<ModelFormat>,

    /// Whether to export the skeleton when converting models.
    pub parse_skeleton: bool,

    /// Whether to export builtin animation clips when converting models.
    pub parse_animation: bool,

    /// Whether the converter may overwrite files already in the cache
    /// directory.
    pub overwrite: bool,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            model_formats: vec![ModelFormat::Glb],
            parse_skeleton: true,
            parse_animation: false,
            overwrite: true,
        }
    }
}

impl ConvertOptions {
    /// Canonical signature over the conversion-relevant flags.
    ///
    /// Field order is fixed, so equal flag values always produce the same
    /// string. Options that do not affect converter output (the format
    /// passthrough list) are excluded to avoid needless cache
    /// fragmentation.
    pub fn signature(&self) -> String {
        format!(
            "skeleton={};animation={};overwrite={}",
            self.parse_skeleton as u8, self.parse_animation as u8, self.overwrite as u8
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signature_is_stable() {
        let options = ConvertOptions::default();
        assert_eq!(options.signature(), options.signature());
        assert_eq!(options.signature(), "skeleton=1;animation=0;overwrite=1");
    }

    #[test]
    fn each_relevant_flag_changes_signature() {
        let base = ConvertOptions::default();

        let skeleton = ConvertOptions {
            parse_skeleton: !base.parse_skeleton,
            ..base.clone()
        };
        let animation = ConvertOptions {
            parse_animation: !base.parse_animation,
            ..base.clone()
        };
        let overwrite = ConvertOptions {
            overwrite: !base.overwrite,
            ..base.clone()
        };

        assert_ne!(base.signature(), skeleton.signature());
        assert_ne!(base.signature(), animation.signature());
        assert_ne!(base.signature(), overwrite.signature());
    }

    #[test]
    fn model_formats_do_not_affect_signature() {
        let base = ConvertOptions::default();
        let no_formats = ConvertOptions {
            model_formats: vec![],
            ..base.clone()
        };
        assert_eq!(base.signature(), no_formats.signature());
    }
}
