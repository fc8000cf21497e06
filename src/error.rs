//! Error types.
//!
//! `Error` wraps one nested enum per failure domain. `GatewayError` is the
//! kind decided at the store boundary; policy code only ever asks whether a
//! gateway failure means "not found".

use std::path::PathBuf;

use thiserror::Error;

/// Crate-wide error.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Gateway(#[from] GatewayError),
}

/// Failures loading or validating the run's configuration.
///
/// Any of these aborts the run before a single store call is made.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("config file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("failed to read {}: {source}", path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("failed to serialize parameter value: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

/// Failures reported by a parameter or secret store.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    /// The named parameter or secret does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// Transport, authorization, or unexpected service response.
    #[error("{operation} failed for {name}: {message}")]
    Service {
        operation: &'static str,
        name: String,
        message: String,
    },

    /// The async runtime backing the SDK clients could not be started.
    #[error("failed to start runtime: {0}")]
    Runtime(String),
}

impl GatewayError {
    /// Build a service error for `operation` on `name`.
    pub fn service(operation: &'static str, name: &str, message: impl Into<String>) -> Self {
        Self::Service {
            operation,
            name: name.to_string(),
            message: message.into(),
        }
    }

    /// Whether this error only signals that the item is absent.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
