//! scproxy CLI — converts SC game assets into cached proxy formats and
//! imports them.
//!
//! Provides `scproxy import` for converting and staging source assets
//! through the on-disk proxy cache, and `scproxy clean` for emptying the
//! cache root.

#![warn(missing_docs)]

mod clean;
mod import;
mod stage;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::{filter::EnvFilter, fmt, prelude::*};

/// scproxy — proxy-conversion cache for SC game assets.
#[derive(Parser, Debug)]
#[command(name = "scproxy", version, about = "SC asset proxy converter and import cache")]
pub struct Cli {
    /// Suppress all output except errors.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Enable verbose (debug-level) output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Directory containing `scproxy.toml` (defaults to the current
    /// directory).
    #[arg(long, global = true)]
    pub config_dir: Option<PathBuf>,

    /// The subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Convert source assets and stage the resulting proxies.
    Import(ImportArgs),

    /// Delete converted files from the cache root.
    Clean(CleanArgs),
}

/// Arguments for `scproxy import`.
#[derive(clap::Args, Debug)]
pub struct ImportArgs {
    /// Source files or directories to import (directories are walked
    /// recursively for supported extensions).
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,

    /// Override the configured cache root.
    #[arg(long)]
    pub cache_root: Option<PathBuf>,

    /// Ignore cached proxies and always re-convert.
    #[arg(long)]
    pub no_cache: bool,

    /// Skip skeleton export for models.
    #[arg(long)]
    pub no_skeleton: bool,

    /// Export builtin animation clips for models.
    #[arg(long)]
    pub animation: bool,

    /// Do not overwrite files already in the cache directory.
    #[arg(long)]
    pub no_overwrite: bool,

    /// Directory where imported proxies are staged.
    #[arg(short, long, default_value = "imported")]
    pub output: PathBuf,
}

/// Arguments for `scproxy clean`.
#[derive(clap::Args, Debug)]
pub struct CleanArgs {
    /// Skip the confirmation prompt.
    #[arg(short, long)]
    pub yes: bool,

    /// Override the configured cache root.
    #[arg(long)]
    pub cache_root: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.quiet, cli.verbose);

    let result = match &cli.command {
        Command::Import(args) => import::run(args, &cli),
        Command::Clean(args) => clean::run(args, &cli),
    };

    match result {
        Ok(code) => process::exit(code),
        Err(err) => {
            eprintln!("error: {err}");
            process::exit(1);
        }
    }
}

/// Initializes the tracing subscriber from the global verbosity flags.
fn init_logging(quiet: bool, verbose: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into())
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(filter)
        .init();
}

/// Loads the configuration from `--config-dir` or the current directory.
fn load_configuration(cli: &Cli) -> Result<scproxy_config::ProxyConfig, Box<dyn std::error::Error>> {
    let dir = match &cli.config_dir {
        Some(dir) => dir.clone(),
        None => std::env::current_dir()?,
    };
    Ok(scproxy_config::load_config(&dir)?)
}
