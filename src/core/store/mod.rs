//! Parameter and secret store gateways.
//!
//! The sync policies only talk to these traits. `aws` holds the SSM and
//! Secrets Manager implementations, `memory` holds in-process ones that
//! record every call.
//!
//! ## Adding a New Store
//!
//! 1. Implement `ParameterStore` and/or `SecretStore`
//! 2. Map the provider's "does not exist" error to `GatewayError::NotFound`
//!    and everything else to `GatewayError::Service`
//! 3. Re-export from this module

use std::result::Result as StdResult;

use crate::error::GatewayError;

pub mod aws;
pub mod memory;

pub use aws::{AwsSession, SecretsManager, Ssm};
pub use memory::{MemoryParameterStore, MemorySecretStore, ParameterCall, SecretCall};

/// Result of a single gateway call.
pub type GatewayResult<T> = StdResult<T, GatewayError>;

/// Hierarchical store for plain string parameters.
pub trait ParameterStore {
    /// Check whether `name` exists.
    ///
    /// Implementations return `Ok(false)` or `Err(GatewayError::NotFound)`
    /// for a missing parameter; callers treat both as "absent".
    fn exists(&self, name: &str) -> GatewayResult<bool>;

    /// Create or update `name` with `value`.
    ///
    /// `overwrite` is forwarded to the store as given.
    fn put(&self, name: &str, value: &str, overwrite: bool) -> GatewayResult<()>;
}

/// What the secret store reports about a secret's lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SecretDescription {
    /// The secret is scheduled for deletion but can still be restored.
    pub deletion_pending: bool,
}

/// Managed store for sensitive values with soft-deletion.
pub trait SecretStore {
    /// Describe `name`. Fails with `GatewayError::NotFound` if it does not exist.
    fn describe(&self, name: &str) -> GatewayResult<SecretDescription>;

    /// Cancel a pending deletion of `name`.
    fn restore(&self, name: &str) -> GatewayResult<()>;

    /// Fetch the current value of `name`.
    fn get(&self, name: &str) -> GatewayResult<String>;

    /// Create `name` holding `value`.
    fn create(&self, name: &str, value: &str) -> GatewayResult<()>;
}
