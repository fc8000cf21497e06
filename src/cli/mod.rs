//! Command-line interface.

pub mod output;
pub mod sync;

use std::path::PathBuf;

use clap::Parser;

use crate::core::constants::{DEFAULT_CONFIG_DIR, DEFAULT_REGION};

/// deploy-config - Publishes per-environment deployment configuration to AWS.
#[derive(Parser, Debug)]
#[command(
    name = "deploy-config",
    about = "Publish per-environment deployment configuration to SSM and Secrets Manager",
    version
)]
pub struct Cli {
    /// Path to the configuration directory
    #[arg(short, long, default_value = DEFAULT_CONFIG_DIR)]
    pub config_dir: PathBuf,

    /// Environments to process, in order
    #[arg(short, long, required = true, num_args = 1..)]
    pub environments: Vec<String>,

    /// Overwrite existing per-environment parameters
    #[arg(long = "update-env", alias = "updateenv")]
    pub update_env: bool,

    /// Overwrite the existing global (network) config parameter
    #[arg(long = "update-network", alias = "updatenetwork")]
    pub update_network: bool,

    /// AWS region
    #[arg(long, env = "AWS_REGION", default_value = DEFAULT_REGION)]
    pub region: String,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

/// Execute a parsed command line.
pub fn execute(cli: Cli) -> crate::error::Result<()> {
    sync::execute(
        cli.config_dir,
        cli.environments,
        cli.update_env,
        cli.update_network,
        &cli.region,
    )
}
