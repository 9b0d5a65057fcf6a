//! Configuration types deserialized from `scproxy.toml`.

use std::path::PathBuf;

use serde::Deserialize;

/// User configuration for the proxy cache and importer.
///
/// Every field has a default, so an empty file (or no file at all) is a
/// valid configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProxyConfig {
    /// Directory where converted proxy assets are stored.
    pub cache_root: PathBuf,

    /// Whether the converter may overwrite files already in the cache.
    pub overwrite: bool,

    /// Export skeletons when converting models.
    pub parse_skeleton: bool,

    /// Export builtin animation clips when converting models.
    pub parse_animation: bool,

    /// Reuse previously converted proxies instead of re-converting.
    pub keep_cache: bool,

    /// Explicit path to the converter executable. When unset, the
    /// converter is located via the environment and `PATH`.
    pub converter: Option<PathBuf>,
}

impl Default for ProxyConfig {
    fn default() -> Self {
        Self {
            cache_root: default_cache_root(),
            overwrite: true,
            parse_skeleton: true,
            parse_animation: false,
            keep_cache: true,
            converter: None,
        }
    }
}

/// The default cache root: `scproxy_cache` under the user's home directory,
/// or under the current directory when no home is known.
fn default_cache_root() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("scproxy_cache")
}
