//! filesets CLI - resolve named file lists for build and test runners
//!
//! Usage: filesets [OPTIONS] <COMMAND>
//!
//! Commands:
//!   resolve  Resolve a list into the ordered file list for a runner
//!   lists    Show every list with its entry count and references
//!   check    Resolve every list and report missing references and cycles

mod cli;
mod commands;
mod ui;

use anyhow::Result;
use clap::Parser;

use cli::{Cli, Commands};
use commands::CommandContext;
use filesets::config::Config;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let project_root = std::env::current_dir()?;
    let loaded = Config::discover(Some(&project_root))?;

    let verbosity = CommandContext::verbosity(&loaded.config, cli.verbose, cli.quiet);
    filesets::logging::init(verbosity);

    if let Some(source) = &loaded.source {
        tracing::debug!(config = %source.display(), "loaded config");
    }
    for warning in &loaded.warnings {
        tracing::warn!("{}", warning);
    }

    let ctx = CommandContext::new(&project_root, loaded, cli.manifest, cli.json);

    match &cli.command {
        Commands::Resolve(args) => commands::cmd_resolve(&ctx, args),
        Commands::Lists => commands::cmd_lists(&ctx),
        Commands::Check => commands::cmd_check(&ctx),
    }
}
