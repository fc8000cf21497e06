//! Command helper methods for Test.

use super::Test;
use assert_cmd::Command;
use std::process::Output;

impl Test {
    /// Create a deploy-config command pointed at this test's config directory.
    ///
    /// AWS credentials are replaced with dummies so a stray network call
    /// can never reach a real account.
    pub fn cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd =
            Command::cargo_bin("deploy-config").expect("failed to find deploy-config binary");
        cmd.env("AWS_ACCESS_KEY_ID", "test")
            .env("AWS_SECRET_ACCESS_KEY", "test")
            .env("AWS_REGION", "ap-southeast-2")
            .env("NO_COLOR", "1")
            .env_remove("DEPLOY_CONFIG_LOG");
        cmd.arg("--config-dir").arg(self.dir.path());
        cmd
    }

    /// Run against the given environments.
    pub fn run(&self, envs: &[&str]) -> Output {
        self.cmd()
            .arg("--environments")
            .args(envs)
            .output()
            .expect("failed to run deploy-config")
    }
}
