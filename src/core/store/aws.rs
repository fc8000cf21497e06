//! AWS-backed stores.
//!
//! `Ssm` publishes parameters to Systems Manager Parameter Store and
//! `SecretsManager` manages the admin secrets. Credentials come from the
//! default provider chain (AWS_ACCESS_KEY_ID, profiles, instance roles).
//!
//! The SDK is async; both gateways share one current-thread runtime and
//! block on each call, so exactly one request is in flight at a time.

use std::sync::Arc;

use aws_config::{BehaviorVersion, Region, SdkConfig};
use aws_sdk_secretsmanager::error::DisplayErrorContext;
use aws_sdk_ssm::types::ParameterType;
use tokio::runtime::Runtime;
use tracing::{debug, trace};

use super::{GatewayResult, ParameterStore, SecretDescription, SecretStore};
use crate::error::GatewayError;

/// Loaded AWS configuration plus the runtime that drives it.
pub struct AwsSession {
    runtime: Arc<Runtime>,
    config: SdkConfig,
}

impl AwsSession {
    /// Resolve credentials and configuration for `region`.
    ///
    /// No request is sent until a gateway is used.
    ///
    /// # Errors
    ///
    /// Returns `GatewayError::Runtime` if the tokio runtime cannot be built.
    pub fn connect(region: &str) -> GatewayResult<Self> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| GatewayError::Runtime(e.to_string()))?;

        debug!(region, "loading AWS configuration");
        let config = runtime.block_on(
            aws_config::defaults(BehaviorVersion::latest())
                .region(Region::new(region.to_string()))
                .load(),
        );

        Ok(Self {
            runtime: Arc::new(runtime),
            config,
        })
    }

    pub fn parameter_store(&self) -> Ssm {
        Ssm {
            client: aws_sdk_ssm::Client::new(&self.config),
            runtime: Arc::clone(&self.runtime),
        }
    }

    pub fn secret_store(&self) -> SecretsManager {
        SecretsManager {
            client: aws_sdk_secretsmanager::Client::new(&self.config),
            runtime: Arc::clone(&self.runtime),
        }
    }
}

/// SSM Parameter Store gateway.
pub struct Ssm {
    client: aws_sdk_ssm::Client,
    runtime: Arc<Runtime>,
}

impl ParameterStore for Ssm {
    fn exists(&self, name: &str) -> GatewayResult<bool> {
        debug!(name, "GetParameter");
        let result = self
            .runtime
            .block_on(self.client.get_parameter().name(name).send());

        match result {
            Ok(output) => {
                trace!(version = ?output.parameter().map(|p| p.version()), "parameter found");
                Ok(true)
            }
            Err(err) => {
                let message = aws_sdk_ssm::error::DisplayErrorContext(&err).to_string();
                if err.into_service_error().is_parameter_not_found() {
                    Ok(false)
                } else {
                    Err(GatewayError::service("GetParameter", name, message))
                }
            }
        }
    }

    fn put(&self, name: &str, value: &str, overwrite: bool) -> GatewayResult<()> {
        debug!(name, overwrite, "PutParameter");
        let output = self
            .runtime
            .block_on(
                self.client
                    .put_parameter()
                    .name(name)
                    .value(value)
                    .r#type(ParameterType::String)
                    .overwrite(overwrite)
                    .send(),
            )
            .map_err(|e| {
                GatewayError::service(
                    "PutParameter",
                    name,
                    aws_sdk_ssm::error::DisplayErrorContext(&e).to_string(),
                )
            })?;

        trace!(version = ?output.version(), "parameter written");
        Ok(())
    }
}

/// Secrets Manager gateway.
pub struct SecretsManager {
    client: aws_sdk_secretsmanager::Client,
    runtime: Arc<Runtime>,
}

impl SecretStore for SecretsManager {
    fn describe(&self, name: &str) -> GatewayResult<SecretDescription> {
        debug!(name, "DescribeSecret");
        let result = self
            .runtime
            .block_on(self.client.describe_secret().secret_id(name).send());

        match result {
            Ok(output) => {
                trace!(deleted_date = ?output.deleted_date(), "secret described");
                Ok(SecretDescription {
                    deletion_pending: output.deleted_date().is_some(),
                })
            }
            Err(err) => {
                let message = DisplayErrorContext(&err).to_string();
                if err.into_service_error().is_resource_not_found_exception() {
                    Err(GatewayError::NotFound(name.to_string()))
                } else {
                    Err(GatewayError::service("DescribeSecret", name, message))
                }
            }
        }
    }

    fn restore(&self, name: &str) -> GatewayResult<()> {
        debug!(name, "RestoreSecret");
        let result = self
            .runtime
            .block_on(self.client.restore_secret().secret_id(name).send());

        match result {
            Ok(_) => Ok(()),
            Err(err) => {
                let message = DisplayErrorContext(&err).to_string();
                if err.into_service_error().is_resource_not_found_exception() {
                    Err(GatewayError::NotFound(name.to_string()))
                } else {
                    Err(GatewayError::service("RestoreSecret", name, message))
                }
            }
        }
    }

    fn get(&self, name: &str) -> GatewayResult<String> {
        debug!(name, "GetSecretValue");
        let result = self
            .runtime
            .block_on(self.client.get_secret_value().secret_id(name).send());

        match result {
            Ok(output) => Ok(output.secret_string().unwrap_or_default().to_string()),
            Err(err) => {
                let message = DisplayErrorContext(&err).to_string();
                if err.into_service_error().is_resource_not_found_exception() {
                    Err(GatewayError::NotFound(name.to_string()))
                } else {
                    Err(GatewayError::service("GetSecretValue", name, message))
                }
            }
        }
    }

    fn create(&self, name: &str, value: &str) -> GatewayResult<()> {
        debug!(name, "CreateSecret");
        let output = self
            .runtime
            .block_on(
                self.client
                    .create_secret()
                    .name(name)
                    .secret_string(value)
                    .send(),
            )
            .map_err(|e| {
                GatewayError::service("CreateSecret", name, DisplayErrorContext(&e).to_string())
            })?;

        trace!(arn = ?output.arn(), "secret created");
        Ok(())
    }
}
