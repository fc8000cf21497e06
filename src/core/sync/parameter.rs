//! Parameter write policy.

use tracing::{debug, info};

use crate::core::store::ParameterStore;
use crate::core::types::ParameterName;
use crate::error::Result;

/// One parameter to publish.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterItem {
    pub name: ParameterName,
    pub value: String,
    /// Replace the stored value if the parameter already exists.
    pub overwrite: bool,
}

impl ParameterItem {
    pub fn new(name: impl Into<ParameterName>, value: impl Into<String>, overwrite: bool) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            overwrite,
        }
    }
}

/// Decision taken for a `ParameterItem`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParameterOutcome {
    /// The parameter did not exist and was written.
    Created,
    /// The parameter existed and was overwritten.
    Updated,
    /// The parameter existed and overwrite was off.
    Skipped,
}

/// Writes parameters only when they are missing or overwrite is requested.
pub struct ParameterSync<'a> {
    store: &'a dyn ParameterStore,
}

impl<'a> ParameterSync<'a> {
    pub fn new(store: &'a dyn ParameterStore) -> Self {
        Self { store }
    }

    /// Publish `item`.
    ///
    /// A missing parameter is always written, passing the item's overwrite
    /// flag through unchanged. An existing one is written only when
    /// `item.overwrite` is set.
    ///
    /// # Errors
    ///
    /// Returns `GatewayError` if the existence check fails for any reason
    /// other than "not found", or if the write fails.
    pub fn sync(&self, item: &ParameterItem) -> Result<ParameterOutcome> {
        let exists = match self.store.exists(&item.name) {
            Ok(exists) => exists,
            Err(e) if e.is_not_found() => false,
            Err(e) => return Err(e.into()),
        };

        if exists && !item.overwrite {
            info!(name = %item.name, "parameter exists, skipping update");
            return Ok(ParameterOutcome::Skipped);
        }

        let outcome = if exists {
            info!(name = %item.name, "updating parameter");
            ParameterOutcome::Updated
        } else {
            info!(name = %item.name, "creating parameter");
            ParameterOutcome::Created
        };
        debug!(name = %item.name, value = %item.value, overwrite = item.overwrite, "parameter value");

        self.store.put(&item.name, &item.value, item.overwrite)?;
        Ok(outcome)
    }
}
