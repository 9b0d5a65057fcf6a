//! `scproxy import` — convert sources through the cache and stage the
//! resulting proxies.

use std::path::{Path, PathBuf};

use scproxy_convert::{CommandConverter, ConvertOptions, ModelFormat, ProxyPipeline, SourceKind};
use scproxy_import::ImportSequencer;

use crate::stage::StagingLoader;
use crate::{load_configuration, Cli, ImportArgs};

/// Runs the `scproxy import` command.
///
/// Returns exit code 0 when the batch ran (individual sources may still
/// have been skipped with warnings), 1 when no batch could start.
pub fn run(args: &ImportArgs, cli: &Cli) -> Result<i32, Box<dyn std::error::Error>> {
    let config = load_configuration(cli)?;
    let cache_root = args
        .cache_root
        .clone()
        .unwrap_or_else(|| config.cache_root.clone());

    let sources = collect_sources(&args.paths)?;
    if sources.is_empty() {
        return Err("no supported source files found".into());
    }

    let options = ConvertOptions {
        model_formats: vec![ModelFormat::Glb],
        parse_skeleton: config.parse_skeleton && !args.no_skeleton,
        parse_animation: config.parse_animation || args.animation,
        overwrite: config.overwrite && !args.no_overwrite,
    };
    let reuse_cached = config.keep_cache && !args.no_cache;

    let converter = match &config.converter {
        Some(program) => CommandConverter::new(program),
        None => CommandConverter::locate(),
    };
    let pipeline = ProxyPipeline::new(&converter, &cache_root);
    let sequencer = ImportSequencer::new(&pipeline, options, reuse_cached);

    let mut loader = StagingLoader::new(&args.output)?;
    let report = sequencer.run(&sources, &mut loader);

    if !cli.quiet {
        println!(
            "Imported {} proxies ({} warnings) into {}",
            report.imported,
            report.warnings,
            args.output.display()
        );
    }
    Ok(0)
}

/// Expands the requested paths into a sorted list of supported sources.
///
/// Files with unsupported extensions are logged and skipped; directories
/// are walked recursively.
fn collect_sources(paths: &[PathBuf]) -> Result<Vec<PathBuf>, Box<dyn std::error::Error>> {
    let mut sources = Vec::new();
    for path in paths {
        if path.is_dir() {
            walk_dir(path, &mut sources)?;
        } else if SourceKind::from_path(path).is_some() {
            sources.push(path.clone());
        } else {
            tracing::warn!(path = %path.display(), "skipping unsupported file");
        }
    }
    sources.sort();
    sources.dedup();
    Ok(sources)
}

/// Recursively collects supported source files under a directory.
fn walk_dir(dir: &Path, sources: &mut Vec<PathBuf>) -> Result<(), Box<dyn std::error::Error>> {
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            walk_dir(&path, sources)?;
        } else if SourceKind::from_path(&path).is_some() {
            sources.push(path);
        }
    }
    Ok(())
}
