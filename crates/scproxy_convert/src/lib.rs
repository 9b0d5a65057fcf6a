//! Conversion orchestration for the proxy cache.
//!
//! Ties the external format converter to the on-disk cache: canonical option
//! signatures, the table of expected output extensions per source kind, the
//! [`Converter`] trait with a blocking subprocess implementation, and the
//! [`ProxyPipeline`] orchestrator that decides when a cached result can be
//! reused and when the converter must run.

#![warn(missing_docs)]

pub mod converter;
pub mod error;
pub mod options;
pub mod orchestrator;
pub mod outputs;

pub use converter::{CommandConverter, Converter, ConverterFailure};
pub use error::ConvertError;
pub use options::{ConvertOptions, ModelFormat};
pub use orchestrator::ProxyPipeline;
pub use outputs::SourceKind;
