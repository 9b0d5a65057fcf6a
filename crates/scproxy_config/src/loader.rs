//! Configuration file loading and validation.

use std::path::Path;

use crate::error::ConfigError;
use crate::types::ProxyConfig;

/// Loads and validates an `scproxy.toml` from the given directory.
///
/// A missing file yields the default configuration; an unreadable or
/// invalid file is an error.
pub fn load_config(config_dir: &Path) -> Result<ProxyConfig, ConfigError> {
    let config_path = config_dir.join("scproxy.toml");
    let content = match std::fs::read_to_string(&config_path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Ok(ProxyConfig::default());
        }
        Err(e) => return Err(e.into()),
    };
    load_config_from_str(&content)
}

/// Parses and validates a configuration from a string.
///
/// Useful for testing without filesystem dependencies.
pub fn load_config_from_str(content: &str) -> Result<ProxyConfig, ConfigError> {
    let config: ProxyConfig =
        toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
    validate_config(&config)?;
    Ok(config)
}

/// Validates that configuration values are usable.
fn validate_config(config: &ProxyConfig) -> Result<(), ConfigError> {
    if config.cache_root.as_os_str().is_empty() {
        return Err(ConfigError::ValidationError(
            "cache_root must not be empty".to_string(),
        ));
    }
    if let Some(converter) = &config.converter {
        if converter.as_os_str().is_empty() {
            return Err(ConfigError::ValidationError(
                "converter must not be empty when set".to_string(),
            ));
        }
    }
    Ok(())
}
