//! Batch import of converted proxy assets.
//!
//! Drives the conversion pipeline over a batch of source files and hands
//! each produced output to the host through the [`AssetLoader`] seam:
//! scene graphs load directly, raster images load as image resources, and
//! archive outputs are expanded with each raster entry loaded individually.
//! Failures are isolated per source and per output — one bad asset never
//! aborts the batch.

#![warn(missing_docs)]

pub mod archive;
pub mod janitor;
pub mod loader;
pub mod sequencer;

pub use archive::expand_archive;
pub use janitor::clean;
pub use loader::{AssetLoader, LoadError};
pub use sequencer::{ImportReport, ImportSequencer};
