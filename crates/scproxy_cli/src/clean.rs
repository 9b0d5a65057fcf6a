//! `scproxy clean` — empty the proxy cache root.

use std::io::Write;

use crate::{load_configuration, Cli, CleanArgs};

/// Runs the `scproxy clean` command.
///
/// Asks for confirmation on the terminal unless `--yes` was passed, then
/// deletes every direct child of the cache root and reports the count.
pub fn run(args: &CleanArgs, cli: &Cli) -> Result<i32, Box<dyn std::error::Error>> {
    let config = load_configuration(cli)?;
    let cache_root = args
        .cache_root
        .clone()
        .unwrap_or_else(|| config.cache_root.clone());

    if !args.yes && !confirm(&format!("Delete everything under {}?", cache_root.display()))? {
        if !cli.quiet {
            println!("Aborted.");
        }
        return Ok(0);
    }

    let removed = scproxy_import::clean(&cache_root);
    if !cli.quiet {
        println!("Removed {removed} cache entries");
    }
    Ok(0)
}

/// Prompts on stdout and reads a yes/no answer from stdin.
fn confirm(question: &str) -> Result<bool, std::io::Error> {
    print!("{question} [y/N] ");
    std::io::stdout().flush()?;

    let mut answer = String::new();
    std::io::stdin().read_line(&mut answer)?;
    Ok(matches!(answer.trim(), "y" | "Y" | "yes" | "YES"))
}
