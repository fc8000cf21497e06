//! Test support utilities for deploy-config integration tests.
//!
//! Provides a configuration directory fixture, a counting password
//! generator and CLI helpers.

#![allow(dead_code)]

pub mod assertions;
pub mod commands;
pub mod fixtures;

#[allow(unused_imports)]
pub use assertions::*;
#[allow(unused_imports)]
pub use fixtures::*;

use std::cell::Cell;

use deploy_config::core::config::ConfigurationBundle;
use deploy_config::core::password::PasswordGenerator;
use tempfile::TempDir;
use zeroize::Zeroizing;

/// Test environment with an isolated configuration directory.
pub struct Test {
    /// Directory holding the four configuration documents
    pub dir: TempDir,
}

impl Test {
    /// Create an empty configuration directory.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        Self { dir }
    }

    /// Create a configuration directory populated with the standard fixtures.
    pub fn with_config() -> Self {
        let t = Self::new();
        t.write(GLOBAL_CONFIG_FILE, GLOBAL_CONFIG_YAML);
        t.write(IAM_ROLES_FILE, IAM_ROLES_YAML);
        t.write(CLUSTER_CONFIG_FILE, CLUSTER_CONFIG_YAML);
        t.write(BLUEPRINT_REPO_FILE, BLUEPRINT_REPO_YAML);
        t
    }

    /// Write (or replace) a file in the configuration directory.
    pub fn write(&self, name: &str, contents: &str) {
        std::fs::write(self.dir.path().join(name), contents)
            .unwrap_or_else(|e| panic!("failed to write {}: {}", name, e));
    }

    /// Load the directory as a bundle.
    pub fn bundle(&self) -> ConfigurationBundle {
        ConfigurationBundle::load(self.dir.path()).expect("failed to load fixture bundle")
    }
}

/// Password generator that counts how often it is asked for a password.
pub struct CountingPassword {
    pub calls: Cell<usize>,
}

impl CountingPassword {
    pub fn new() -> Self {
        Self {
            calls: Cell::new(0),
        }
    }

    pub fn count(&self) -> usize {
        self.calls.get()
    }
}

impl PasswordGenerator for CountingPassword {
    fn generate(&self, length: usize) -> Zeroizing<String> {
        let n = self.calls.get() + 1;
        self.calls.set(n);
        let mut password = format!("generated-{}-", n);
        while password.len() < length {
            password.push('x');
        }
        password.truncate(length);
        Zeroizing::new(password)
    }
}
