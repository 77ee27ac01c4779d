use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Gridded daily soil-water balance model with parameter sweep.
#[derive(Parser)]
#[command(
    name = "swm",
    version,
    about = "Daily soil-water balance model with two-parameter calibration sweep"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Run the parameter sweep over the configured period.
    Run(RunArgs),
}

/// Arguments for the `run` subcommand.
#[derive(clap::Args)]
pub struct RunArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "swm.toml")]
    pub config: PathBuf,

    /// Override output folder from config.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}
