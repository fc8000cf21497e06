//! Run-level sequencing.

use tracing::{info, instrument, warn};

use super::{CredentialLifecycle, ParameterItem, ParameterSync};
use crate::core::config::{self, ConfigurationBundle, RunConfiguration};
use crate::core::constants::{BLUEPRINT_REPO_PARAMETER, GLOBAL_CONFIG_PARAMETER};
use crate::core::names;
use crate::core::password::PasswordGenerator;
use crate::core::store::{ParameterStore, SecretStore};
use crate::error::Result;

/// Publishes a `ConfigurationBundle` for a list of environments.
///
/// Order is fixed: blueprint repository pointer, global config, then each
/// environment in the order given. Every store call completes before the
/// next is issued. The first error stops the run.
pub struct ConfigSync<'a> {
    parameters: ParameterSync<'a>,
    credentials: CredentialLifecycle<'a>,
}

impl<'a> ConfigSync<'a> {
    pub fn new(
        parameter_store: &'a dyn ParameterStore,
        secret_store: &'a dyn SecretStore,
        generator: &'a dyn PasswordGenerator,
    ) -> Self {
        Self {
            parameters: ParameterSync::new(parameter_store),
            credentials: CredentialLifecycle::new(secret_store, generator),
        }
    }

    /// Publish everything `run` asks for.
    ///
    /// # Errors
    ///
    /// Returns the first gateway or serialization error; later items and
    /// environments are not processed.
    pub fn run(&self, bundle: &ConfigurationBundle, run: &RunConfiguration) -> Result<()> {
        info!(
            config_dir = %run.config_dir.display(),
            environments = run.environments.len(),
            "starting configuration sync"
        );

        self.publish_blueprint_repo(bundle)?;
        self.publish_global_config(bundle, run.overwrite_network)?;

        for env in &run.environments {
            self.process_environment(bundle, env, run.overwrite_parameters)?;
        }

        Ok(())
    }

    /// The repository pointer is always overwritten.
    fn publish_blueprint_repo(&self, bundle: &ConfigurationBundle) -> Result<()> {
        let value = bundle.blueprint_repo.to_json()?;
        self.parameters
            .sync(&ParameterItem::new(BLUEPRINT_REPO_PARAMETER, value, true))?;
        Ok(())
    }

    fn publish_global_config(&self, bundle: &ConfigurationBundle, overwrite: bool) -> Result<()> {
        if bundle.global.is_empty() {
            warn!("no global config data found");
            return Ok(());
        }

        let value = bundle.global.to_json()?;
        self.parameters
            .sync(&ParameterItem::new(GLOBAL_CONFIG_PARAMETER, value, overwrite))?;
        Ok(())
    }

    #[instrument(skip(self, bundle))]
    fn process_environment(
        &self,
        bundle: &ConfigurationBundle,
        env: &str,
        overwrite: bool,
    ) -> Result<()> {
        info!("processing configuration for environment");

        match bundle.iam_roles.for_environment(env) {
            Some(roles) => {
                let value = config::to_json(roles)?;
                self.parameters.sync(&ParameterItem::new(
                    names::iam_roles_parameter(env),
                    value,
                    overwrite,
                ))?;
            }
            None => warn!("no IAM roles data found for environment"),
        }

        match bundle.clusters.for_environment(env) {
            Some(cluster) => {
                let value = config::to_json(cluster)?;
                self.parameters.sync(&ParameterItem::new(
                    names::cluster_config_parameter(env),
                    value,
                    overwrite,
                ))?;
            }
            None => warn!("no cluster config data found for environment"),
        }

        self.credentials.ensure(env)?;
        Ok(())
    }
}
