//! Parsing and validation of `scproxy.toml` configuration files.
//!
//! All fields are optional with defaults, so a missing configuration file
//! is itself valid: [`ProxyConfig::default`] describes the out-of-the-box
//! behavior (cache under the home directory, skeletons on, animations off,
//! cache reuse on).

#![warn(missing_docs)]

pub mod error;
pub mod loader;
pub mod types;

pub use error::ConfigError;
pub use loader::{load_config, load_config_from_str};
pub use types::ProxyConfig;
