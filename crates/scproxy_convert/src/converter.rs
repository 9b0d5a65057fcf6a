//! The external converter seam and its subprocess implementation.
//!
//! The conversion engine itself is out of scope for this workspace; it is
//! consumed as an opaque tool that takes a source file, a destination
//! directory, and an option bundle, and writes zero or more files. The
//! orchestrator never interprets its report of success — only the resulting
//! filesystem state.

use std::path::{Path, PathBuf};
use std::process::Command;

use crate::options::ConvertOptions;

/// Environment variable overriding the converter executable path.
pub const CONVERTER_ENV: &str = "SCPROXY_CONVERTER";

/// Default converter executable name, looked up on `PATH`.
const DEFAULT_PROGRAM: &str = "sc-convert";

/// Failure reported by a [`Converter`] implementation.
///
/// `Unavailable` means the tool itself could not be launched (missing
/// binary, broken install); `Failed` means the tool ran and errored on this
/// input. The distinction is preserved all the way to the caller.
#[derive(Debug, thiserror::Error)]
pub enum ConverterFailure {
    /// The converter tool could not be launched.
    #[error("{0}")]
    Unavailable(String),

    /// The converter ran and reported an error.
    #[error("{0}")]
    Failed(String),
}

/// External format converter.
///
/// Implementations block until conversion is complete. No timeout wraps the
/// call; a hung converter hangs the batch.
pub trait Converter {
    /// Converts `source` into `dest_dir` with the given options.
    fn convert(
        &self,
        source: &Path,
        dest_dir: &Path,
        options: &ConvertOptions,
    ) -> Result<(), ConverterFailure>;
}

/// [`Converter`] that runs an external executable as a blocking subprocess.
#[derive(Debug, Clone)]
pub struct CommandConverter {
    /// Path or name of the converter executable.
    program: PathBuf,
}

impl CommandConverter {
    /// Creates a converter invoking the given executable.
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Locates the converter executable.
    ///
    /// Honors the `SCPROXY_CONVERTER` environment variable, falling back to
    /// `sc-convert` on `PATH`. This is the one-time environment preparation
    /// step; whether the executable actually exists is only discovered on
    /// first use.
    pub fn locate() -> Self {
        match std::env::var_os(CONVERTER_ENV) {
            Some(program) => Self::new(program),
            None => Self::new(DEFAULT_PROGRAM),
        }
    }

    /// Returns the executable this converter invokes.
    pub fn program(&self) -> &Path {
        &self.program
    }
}

impl Converter for CommandConverter {
    fn convert(
        &self,
        source: &Path,
        dest_dir: &Path,
        options: &ConvertOptions,
    ) -> Result<(), ConverterFailure> {
        let mut cmd = Command::new(&self.program);
        cmd.arg(source).arg("--output").arg(dest_dir);
        for format in &options.model_formats {
            cmd.arg("--model-format").arg(format.as_str());
        }
        if options.parse_skeleton {
            cmd.arg("--skeleton");
        }
        if options.parse_animation {
            cmd.arg("--animation");
        }
        if options.overwrite {
            cmd.arg("--overwrite");
        }

        tracing::debug!(program = %self.program.display(), source = %source.display(), "invoking converter");

        let output = cmd.output().map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ConverterFailure::Unavailable(format!(
                    "converter executable '{}' not found (set {CONVERTER_ENV} or install it on PATH)",
                    self.program.display()
                ))
            } else {
                ConverterFailure::Unavailable(format!(
                    "failed to launch '{}': {e}",
                    self.program.display()
                ))
            }
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ConverterFailure::Failed(format!(
                "converter exited with {}: {}",
                output.status,
                stderr.trim()
            )));
        }
        Ok(())
    }
}
