//! Content-addressed on-disk cache for converted proxy assets.
//!
//! This crate owns the addressing scheme of the proxy cache: fingerprinting
//! source files by filesystem identity, deriving stable cache keys, resolving
//! per-asset cache directories under a root, and reading/writing the
//! `manifest.json` that records what a conversion produced.

#![warn(missing_docs)]

pub mod error;
pub mod fingerprint;
pub mod layout;
pub mod manifest;

pub use error::CacheError;
pub use fingerprint::{CacheKey, SourceIdentity};
pub use layout::CacheLayout;
pub use manifest::ProxyManifest;
