//! Idempotent synchronization of configuration into the stores.
//!
//! - `ParameterSync` decides whether a parameter is created, updated or left alone
//! - `CredentialLifecycle` restores, reuses or creates an environment's admin secret
//! - `ConfigSync` runs both over a whole `ConfigurationBundle`

mod credential;
mod orchestrator;
mod parameter;

pub use credential::{CredentialLifecycle, CredentialOutcome};
pub use orchestrator::ConfigSync;
pub use parameter::{ParameterItem, ParameterOutcome, ParameterSync};
