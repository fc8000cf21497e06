//! Test assertion helpers.

use std::process::Output;

use deploy_config::core::store::{MemorySecretStore, SecretCall};

/// Assert that a command output failed.
pub fn assert_failure(output: &Output) {
    assert!(
        !output.status.success(),
        "Expected command to fail but it succeeded"
    );
}

/// Get stderr as String.
pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

/// Assert stderr contains a string.
pub fn assert_stderr_contains(output: &Output, expected: &str) {
    let err = stderr(output);
    assert!(
        err.contains(expected),
        "stderr missing '{}', got: {}",
        expected,
        err
    );
}

/// Count secret store calls matching `pred`.
pub fn count_secret_calls(store: &MemorySecretStore, pred: impl Fn(&SecretCall) -> bool) -> usize {
    store.calls().iter().filter(|c| pred(c)).count()
}

/// Number of `create` calls made against `store`.
pub fn creates(store: &MemorySecretStore) -> usize {
    count_secret_calls(store, |c| matches!(c, SecretCall::Create(_)))
}

/// Number of `restore` calls made against `store`.
pub fn restores(store: &MemorySecretStore) -> usize {
    count_secret_calls(store, |c| matches!(c, SecretCall::Restore(_)))
}
