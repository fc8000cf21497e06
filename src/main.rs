//! deploy-config - Publishes per-environment deployment configuration to AWS.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use deploy_config::cli::output;
use deploy_config::cli::{execute, Cli};
use deploy_config::core::constants::LOG_ENV;
use deploy_config::error::{ConfigError, Error, GatewayError};

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("deploy_config=debug")
        } else {
            EnvFilter::new("deploy_config=info")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time(),
        )
        .init();

    if let Err(e) = execute(cli) {
        let suggestion = match &e {
            Error::Config(
                ConfigError::NotFound { .. }
                | ConfigError::Parse { .. }
                | ConfigError::MissingField { .. },
            ) => Some(
                "expected config.yaml, iamRolesConfig.yaml, clusterConfig.yaml and blueprint-repo.yaml in --config-dir",
            ),
            Error::Gateway(GatewayError::Service { .. }) => {
                Some("check AWS credentials, region and IAM permissions")
            }
            _ => None,
        };

        output::error(&e.to_string());
        if let Some(hint) = suggestion {
            output::hint(hint);
        }
        std::process::exit(1);
    }
}
