//! Deployer CLI - publish build artifacts to Maven-layout repositories
//!
//! Usage: deployer <COMMAND>
//!
//! Commands:
//!   deploy         Deploy a file as an artifact
//!   deploy-legacy  Deploy <basedir>/<final-name>.<extension>

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;
use is_terminal::IsTerminal;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let settings = cli.settings.as_deref();
    match &cli.command {
        Commands::Deploy { file, target } => {
            commands::deploy::cmd_deploy(settings, cli.json, file, target)
        }
        Commands::DeployLegacy {
            basedir,
            final_name,
            target,
        } => commands::deploy::cmd_deploy_legacy(settings, cli.json, basedir, final_name, target),
    }
}

/// Logs go to stderr so stdout stays clean for NDJSON
fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .without_time()
        .with_target(false)
        .init();
}
