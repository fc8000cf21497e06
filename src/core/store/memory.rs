//! In-memory stores.
//!
//! Behave like SSM and Secrets Manager for the calls this crate makes,
//! and record every call in order so tests can assert on exactly what
//! a run did. Single-threaded only.

use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};

use super::{GatewayResult, ParameterStore, SecretDescription, SecretStore};
use crate::error::GatewayError;

/// A call made against a `MemoryParameterStore`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParameterCall {
    Exists(String),
    Put {
        name: String,
        value: String,
        overwrite: bool,
    },
}

/// In-memory parameter store.
#[derive(Debug, Default)]
pub struct MemoryParameterStore {
    parameters: RefCell<BTreeMap<String, String>>,
    failing: BTreeSet<String>,
    failing_puts: BTreeSet<String>,
    calls: RefCell<Vec<ParameterCall>>,
}

impl MemoryParameterStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed an existing parameter.
    pub fn with_parameter(self, name: &str, value: &str) -> Self {
        self.parameters
            .borrow_mut()
            .insert(name.to_string(), value.to_string());
        self
    }

    /// Make every call touching `name` fail with a service error.
    pub fn fail_on(mut self, name: &str) -> Self {
        self.failing.insert(name.to_string());
        self
    }

    /// Make only writes to `name` fail; existence checks still succeed.
    pub fn fail_on_put(mut self, name: &str) -> Self {
        self.failing_puts.insert(name.to_string());
        self
    }

    /// Current value of `name`.
    pub fn value(&self, name: &str) -> Option<String> {
        self.parameters.borrow().get(name).cloned()
    }

    /// Every call made so far, oldest first.
    pub fn calls(&self) -> Vec<ParameterCall> {
        self.calls.borrow().clone()
    }

    /// Names written by `put`, in order.
    pub fn writes(&self) -> Vec<String> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|c| match c {
                ParameterCall::Put { name, .. } => Some(name.clone()),
                ParameterCall::Exists(_) => None,
            })
            .collect()
    }

    fn check_failing(&self, operation: &'static str, name: &str) -> GatewayResult<()> {
        if self.failing.contains(name) {
            return Err(GatewayError::service(operation, name, "injected failure"));
        }
        Ok(())
    }
}

impl ParameterStore for MemoryParameterStore {
    fn exists(&self, name: &str) -> GatewayResult<bool> {
        self.calls
            .borrow_mut()
            .push(ParameterCall::Exists(name.to_string()));
        self.check_failing("GetParameter", name)?;
        Ok(self.parameters.borrow().contains_key(name))
    }

    fn put(&self, name: &str, value: &str, overwrite: bool) -> GatewayResult<()> {
        self.calls.borrow_mut().push(ParameterCall::Put {
            name: name.to_string(),
            value: value.to_string(),
            overwrite,
        });
        self.check_failing("PutParameter", name)?;
        if self.failing_puts.contains(name) {
            return Err(GatewayError::service("PutParameter", name, "injected failure"));
        }

        let mut parameters = self.parameters.borrow_mut();
        if parameters.contains_key(name) && !overwrite {
            return Err(GatewayError::service(
                "PutParameter",
                name,
                "parameter already exists",
            ));
        }
        parameters.insert(name.to_string(), value.to_string());
        Ok(())
    }
}

/// A call made against a `MemorySecretStore`.
///
/// Created values are not recorded; read them back with `value`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SecretCall {
    Describe(String),
    Restore(String),
    Get(String),
    Create(String),
}

#[derive(Debug, Clone)]
struct Entry {
    value: String,
    deletion_pending: bool,
}

/// In-memory secret store with soft-deletion.
#[derive(Debug, Default)]
pub struct MemorySecretStore {
    secrets: RefCell<BTreeMap<String, Entry>>,
    failing: BTreeSet<String>,
    failing_calls: Vec<(SecretCall, GatewayError)>,
    calls: RefCell<Vec<SecretCall>>,
}

impl MemorySecretStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed an active secret.
    pub fn with_secret(self, name: &str, value: &str) -> Self {
        self.insert(name, value, false);
        self
    }

    /// Seed a secret that is scheduled for deletion.
    pub fn with_pending_deletion(self, name: &str, value: &str) -> Self {
        self.insert(name, value, true);
        self
    }

    /// Make every call touching `name` fail with a service error.
    pub fn fail_on(mut self, name: &str) -> Self {
        self.failing.insert(name.to_string());
        self
    }

    /// Make exactly `call` fail with `error`, every time it is made.
    ///
    /// The call is still recorded. Other operations on the same secret
    /// behave normally.
    pub fn fail_on_call(mut self, call: SecretCall, error: GatewayError) -> Self {
        self.failing_calls.push((call, error));
        self
    }

    /// Current value of `name`, pending deletion or not.
    pub fn value(&self, name: &str) -> Option<String> {
        self.secrets.borrow().get(name).map(|e| e.value.clone())
    }

    /// Whether `name` is scheduled for deletion.
    pub fn is_pending_deletion(&self, name: &str) -> bool {
        self.secrets
            .borrow()
            .get(name)
            .map(|e| e.deletion_pending)
            .unwrap_or(false)
    }

    /// Every call made so far, oldest first.
    pub fn calls(&self) -> Vec<SecretCall> {
        self.calls.borrow().clone()
    }

    fn insert(&self, name: &str, value: &str, deletion_pending: bool) {
        self.secrets.borrow_mut().insert(
            name.to_string(),
            Entry {
                value: value.to_string(),
                deletion_pending,
            },
        );
    }

    fn record(&self, call: SecretCall, operation: &'static str, name: &str) -> GatewayResult<()> {
        if let Some((_, error)) = self.failing_calls.iter().find(|(c, _)| *c == call) {
            self.calls.borrow_mut().push(call);
            return Err(error.clone());
        }
        self.calls.borrow_mut().push(call);
        if self.failing.contains(name) {
            return Err(GatewayError::service(operation, name, "injected failure"));
        }
        Ok(())
    }
}

impl SecretStore for MemorySecretStore {
    fn describe(&self, name: &str) -> GatewayResult<SecretDescription> {
        self.record(SecretCall::Describe(name.to_string()), "DescribeSecret", name)?;
        self.secrets
            .borrow()
            .get(name)
            .map(|e| SecretDescription {
                deletion_pending: e.deletion_pending,
            })
            .ok_or_else(|| GatewayError::NotFound(name.to_string()))
    }

    fn restore(&self, name: &str) -> GatewayResult<()> {
        self.record(SecretCall::Restore(name.to_string()), "RestoreSecret", name)?;
        match self.secrets.borrow_mut().get_mut(name) {
            Some(entry) => {
                entry.deletion_pending = false;
                Ok(())
            }
            None => Err(GatewayError::NotFound(name.to_string())),
        }
    }

    fn get(&self, name: &str) -> GatewayResult<String> {
        self.record(SecretCall::Get(name.to_string()), "GetSecretValue", name)?;
        match self.secrets.borrow().get(name) {
            Some(entry) if entry.deletion_pending => Err(GatewayError::service(
                "GetSecretValue",
                name,
                "secret is marked for deletion",
            )),
            Some(entry) => Ok(entry.value.clone()),
            None => Err(GatewayError::NotFound(name.to_string())),
        }
    }

    fn create(&self, name: &str, value: &str) -> GatewayResult<()> {
        self.record(SecretCall::Create(name.to_string()), "CreateSecret", name)?;
        if self.secrets.borrow().contains_key(name) {
            return Err(GatewayError::service(
                "CreateSecret",
                name,
                "secret already exists",
            ));
        }
        self.insert(name, value, false);
        Ok(())
    }
}
