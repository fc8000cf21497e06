//! Admin credential lifecycle.
//!
//! For each environment the admin secret is restored if it is scheduled for
//! deletion, reused if it exists, and only created when the store has no
//! trace of it. An existing credential is never replaced.

use tracing::{debug, info};

use crate::core::constants::PASSWORD_LENGTH;
use crate::core::names;
use crate::core::password::PasswordGenerator;
use crate::core::store::SecretStore;
use crate::error::Result;

/// Terminal state of the lifecycle for one environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialOutcome {
    /// No secret existed; a new password was generated and stored.
    Created,
    /// An active secret already existed.
    Reused,
    /// The secret was scheduled for deletion and has been restored.
    Restored,
}

/// Ensures every environment has exactly one admin secret.
pub struct CredentialLifecycle<'a> {
    store: &'a dyn SecretStore,
    generator: &'a dyn PasswordGenerator,
    length: usize,
}

impl<'a> CredentialLifecycle<'a> {
    pub fn new(store: &'a dyn SecretStore, generator: &'a dyn PasswordGenerator) -> Self {
        Self {
            store,
            generator,
            length: PASSWORD_LENGTH,
        }
    }

    /// Override the generated password length.
    pub fn with_length(mut self, length: usize) -> Self {
        self.length = length;
        self
    }

    /// Make sure `argocdAdmin-<env>` exists and is active.
    ///
    /// # Errors
    ///
    /// Returns `GatewayError` for any store failure other than "not found".
    pub fn ensure(&self, env: &str) -> Result<CredentialOutcome> {
        let name = names::admin_secret(env);
        let restored = self.cancel_deletion(&name)?;

        match self.store.get(&name) {
            Ok(_) => {
                if restored {
                    info!(name = %name, "restored secret marked for deletion");
                    Ok(CredentialOutcome::Restored)
                } else {
                    info!(name = %name, "secret already exists, skipping creation");
                    Ok(CredentialOutcome::Reused)
                }
            }
            Err(e) if e.is_not_found() => {
                info!(name = %name, "creating admin secret with generated password");
                let password = self.generator.generate(self.length);
                self.store.create(&name, password.as_str())?;
                Ok(CredentialOutcome::Created)
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Restore `name` if it is pending deletion. Returns whether it was restored.
    fn cancel_deletion(&self, name: &str) -> Result<bool> {
        let description = match self.store.describe(name) {
            Ok(description) => description,
            Err(e) if e.is_not_found() => {
                debug!(name, "secret does not exist");
                return Ok(false);
            }
            Err(e) => return Err(e.into()),
        };

        if !description.deletion_pending {
            return Ok(false);
        }

        match self.store.restore(name) {
            Ok(()) => Ok(true),
            Err(e) if e.is_not_found() => Ok(false),
            Err(e) => Err(e.into()),
        }
    }
}
