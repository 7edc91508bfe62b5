//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! Global flags (--settings, --json, --verbose) are inherited by all subcommands.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Deploy build artifacts to Maven-layout repositories
#[derive(Parser, Debug)]
#[command(name = "deployer")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Settings file (defaults to .deployer/settings.toml, then the user settings)
    #[arg(long, global = true)]
    pub settings: Option<PathBuf>,

    /// Emit progress and results as NDJSON on stdout
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Deploy a file as an artifact
    Deploy {
        /// File to deploy
        #[arg(short, long)]
        file: PathBuf,

        #[command(flatten)]
        target: TargetArgs,
    },

    /// Deploy <basedir>/<final-name>.<extension>
    DeployLegacy {
        /// Build output directory
        #[arg(long)]
        basedir: PathBuf,

        /// File name without extension
        #[arg(long)]
        final_name: String,

        #[command(flatten)]
        target: TargetArgs,
    },
}

/// Artifact identity and where it goes
#[derive(Args, Debug, Clone)]
pub struct TargetArgs {
    /// groupId:artifactId:version[:type[:classifier]]
    #[arg(short, long)]
    pub coordinates: String,

    /// Id of the deployment repository (matched against server credentials)
    #[arg(long)]
    pub repository_id: String,

    /// Deployment repository URL or directory
    #[arg(long)]
    pub repository_url: String,

    /// Local repository directory (overrides settings)
    #[arg(long)]
    pub local_repository: Option<PathBuf>,

    /// Do not attach checksum metadata
    #[arg(long)]
    pub no_checksums: bool,

    /// Do not attach version pointer metadata
    #[arg(long)]
    pub no_version_pointer: bool,
}
