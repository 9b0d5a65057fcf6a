//! Sequential batch import with per-source and per-output failure isolation.

use std::path::{Path, PathBuf};

use scproxy_convert::{ConvertOptions, ProxyPipeline};

use crate::archive::expand_archive;
use crate::loader::AssetLoader;

/// Extensions of raster proxies loadable as image resources.
const RASTER_EXTENSIONS: &[&str] = &["png", "dds"];

/// Outcome counters for a batch import, for user-facing reporting only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportReport {
    /// Proxies successfully loaded into the host.
    pub imported: usize,

    /// Outputs that were skipped or failed to load.
    pub warnings: usize,
}

/// Iterates a batch of sources through the conversion pipeline and
/// dispatches each produced output to the host loader.
pub struct ImportSequencer<'a> {
    pipeline: &'a ProxyPipeline<'a>,
    options: ConvertOptions,
    reuse_cached: bool,
}

impl<'a> ImportSequencer<'a> {
    /// Creates a sequencer over the given pipeline and options.
    pub fn new(pipeline: &'a ProxyPipeline<'a>, options: ConvertOptions, reuse_cached: bool) -> Self {
        Self {
            pipeline,
            options,
            reuse_cached,
        }
    }

    /// Processes the batch, one source at a time.
    ///
    /// A source whose conversion fails is logged and skipped; it
    /// contributes to neither counter. Every produced output is handled
    /// independently, so one bad output never aborts its siblings.
    pub fn run(&self, sources: &[PathBuf], loader: &mut dyn AssetLoader) -> ImportReport {
        let mut report = ImportReport::default();

        for source in sources {
            let outputs = match self.pipeline.obtain(source, &self.options, self.reuse_cached) {
                Ok(outputs) => outputs,
                Err(err) => {
                    tracing::error!(
                        source = %source.display(),
                        error = %err,
                        "conversion failed, skipping source"
                    );
                    continue;
                }
            };

            if outputs.is_empty() {
                tracing::warn!(source = %source.display(), "converter produced no outputs");
            }
            for output in outputs {
                dispatch_output(&output, loader, &mut report);
            }
        }

        tracing::info!(
            imported = report.imported,
            warnings = report.warnings,
            "batch import finished"
        );
        report
    }
}

/// Routes one produced output to the loader by its extension.
fn dispatch_output(output: &Path, loader: &mut dyn AssetLoader, report: &mut ImportReport) {
    let ext = output
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "glb" => match loader.load_scene(output) {
            Ok(()) => report.imported += 1,
            Err(err) => {
                report.warnings += 1;
                tracing::warn!(output = %output.display(), error = %err, "failed to load scene");
            }
        },
        "png" | "dds" => match loader.load_image(output) {
            Ok(()) => report.imported += 1,
            Err(err) => {
                report.warnings += 1;
                tracing::warn!(output = %output.display(), error = %err, "failed to load image");
            }
        },
        "zip" => match expand_archive(output) {
            Ok(entries) => {
                for entry in entries {
                    if is_raster(&entry) {
                        match loader.load_image(&entry) {
                            Ok(()) => report.imported += 1,
                            Err(err) => {
                                report.warnings += 1;
                                tracing::warn!(
                                    entry = %entry.display(),
                                    error = %err,
                                    "failed to load archive entry"
                                );
                            }
                        }
                    } else {
                        report.warnings += 1;
                        tracing::warn!(entry = %entry.display(), "non-image archive entry skipped");
                    }
                }
            }
            Err(err) => {
                report.warnings += 1;
                tracing::warn!(output = %output.display(), error = %err, "failed to expand archive");
            }
        },
        _ => {
            report.warnings += 1;
            tracing::warn!(output = %output.display(), "unsupported proxy output");
        }
    }
}

/// Whether an extracted archive entry is a loadable raster image.
fn is_raster(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| RASTER_EXTENSIONS.contains(&e.to_ascii_lowercase().as_str()))
        .unwrap_or(false)
}
