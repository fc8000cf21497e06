//! Sync command - publish configuration for the requested environments.

use std::path::PathBuf;

use tracing::info;

use crate::core::config::{ConfigurationBundle, RunConfiguration};
use crate::core::password::RandomPassword;
use crate::core::store::AwsSession;
use crate::core::sync::ConfigSync;
use crate::error::Result;

/// Load the configuration directory and publish it to AWS.
///
/// Configuration is fully loaded before any AWS client is created.
pub fn execute(
    config_dir: PathBuf,
    environments: Vec<String>,
    update_env: bool,
    update_network: bool,
    region: &str,
) -> Result<()> {
    let run = RunConfiguration::new(config_dir, environments, update_env, update_network)?;
    info!(config_dir = %run.config_dir.display(), "loading configuration");
    let bundle = ConfigurationBundle::load(&run.config_dir)?;

    let session = AwsSession::connect(region)?;
    let parameters = session.parameter_store();
    let secrets = session.secret_store();

    ConfigSync::new(&parameters, &secrets, &RandomPassword).run(&bundle, &run)?;

    info!("configuration sync complete");
    Ok(())
}
