//! Configuration documents and run settings.
//!
//! Reads the four YAML documents of a configuration directory into a
//! `ConfigurationBundle`. The bundle is loaded once and passed by reference
//! to everything that publishes from it.

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

use crate::core::constants;
use crate::core::types::EnvName;
use crate::error::{ConfigError, Result};

/// Global configuration, published verbatim to `/gen3/config`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GlobalConfig(Value);

impl GlobalConfig {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// True when the document carries nothing worth publishing.
    pub fn is_empty(&self) -> bool {
        !has_data(&self.0)
    }

    pub fn to_json(&self) -> Result<String> {
        to_json(&self.0)
    }
}

/// Whether a document entry holds data.
///
/// `null`, `false`, `0` and `""` count as absent; everything else,
/// including empty maps and lists, is published.
pub fn has_data(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Largest integer a float can carry without losing precision (2^53 - 1).
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Serialize `value` to compact JSON.
///
/// Floats without a fractional part are written as integers, so YAML
/// `2.0` and `1e3` publish as `2` and `1000`.
pub fn to_json(value: &Value) -> Result<String> {
    let mut value = value.clone();
    integral_floats_to_ints(&mut value);
    Ok(serde_json::to_string(&value).map_err(ConfigError::Serialize)?)
}

fn integral_floats_to_ints(value: &mut Value) {
    match value {
        Value::Number(n) if n.is_f64() => {
            if let Some(f) = n.as_f64() {
                if f.fract() == 0.0 && f.abs() <= MAX_SAFE_INTEGER {
                    *value = Value::from(f as i64);
                }
            }
        }
        Value::Array(items) => items.iter_mut().for_each(integral_floats_to_ints),
        Value::Object(map) => map.values_mut().for_each(integral_floats_to_ints),
        _ => {}
    }
}

/// IAM role sets keyed by environment (`iamRolesConfig.yaml`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IamRolesConfig {
    #[serde(default)]
    pub services: Map<String, Value>,
}

impl IamRolesConfig {
    /// Role set for `env`, if one is defined and holds data.
    pub fn for_environment(&self, env: &str) -> Option<&Value> {
        self.services.get(env).filter(|v| has_data(v))
    }
}

/// Cluster parameters keyed by environment (`clusterConfig.yaml`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClusterConfig {
    #[serde(default)]
    pub clusters: Map<String, Value>,
}

impl ClusterConfig {
    /// Cluster blob for `env`, if one is defined and holds data.
    pub fn for_environment(&self, env: &str) -> Option<&Value> {
        self.clusters.get(env).filter(|v| has_data(v))
    }
}

/// Pointer to the EKS blueprint repository (`blueprint-repo.yaml`).
///
/// Only these three fields are published; anything else in the file is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlueprintRepoConfig {
    pub git_repo_owner: String,
    pub repo_url: String,
    pub target_revision: String,
}

impl BlueprintRepoConfig {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self).map_err(ConfigError::Serialize)?)
    }
}

/// Every document a run publishes from.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigurationBundle {
    pub global: GlobalConfig,
    pub iam_roles: IamRolesConfig,
    pub clusters: ClusterConfig,
    pub blueprint_repo: BlueprintRepoConfig,
}

impl ConfigurationBundle {
    /// Load all four documents from `dir`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` if a file is missing,
    /// `ConfigError::Parse` if one is malformed, and
    /// `ConfigError::MissingField` if the blueprint repository file is empty.
    pub fn load(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        debug!(dir = %dir.display(), "loading configuration bundle");

        let global = read_document(&dir.join(constants::GLOBAL_CONFIG_FILE))?.unwrap_or_default();
        let iam_roles: IamRolesConfig =
            read_document(&dir.join(constants::IAM_ROLES_FILE))?.unwrap_or_default();
        let clusters: ClusterConfig =
            read_document(&dir.join(constants::CLUSTER_CONFIG_FILE))?.unwrap_or_default();
        let blueprint_repo = read_document(&dir.join(constants::BLUEPRINT_REPO_FILE))?
            .ok_or(ConfigError::MissingField {
                field: "gitRepoOwner",
            })?;

        debug!(
            iam_environments = iam_roles.services.len(),
            cluster_environments = clusters.clusters.len(),
            "configuration bundle loaded"
        );

        Ok(Self {
            global,
            iam_roles,
            clusters,
            blueprint_repo,
        })
    }
}

/// Parse one YAML document. Blank files yield `None`.
fn read_document<T: DeserializeOwned>(path: &Path) -> Result<Option<T>> {
    if !path.exists() {
        return Err(ConfigError::NotFound {
            path: path.to_path_buf(),
        }
        .into());
    }

    let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;
    if contents.trim().is_empty() {
        debug!(path = %path.display(), "document is empty");
        return Ok(None);
    }

    let document = serde_yaml::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Some(document))
}

/// Settings for a single run, fixed before anything is published.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfiguration {
    /// Environments to process, in order. Duplicates are processed again.
    pub environments: Vec<EnvName>,
    /// Overwrite existing per-environment parameters.
    pub overwrite_parameters: bool,
    /// Overwrite the existing global (network) config.
    pub overwrite_network: bool,
    pub config_dir: PathBuf,
}

impl RunConfiguration {
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if no environment is given or
    /// an environment identifier is blank.
    pub fn new(
        config_dir: impl Into<PathBuf>,
        environments: Vec<EnvName>,
        overwrite_parameters: bool,
        overwrite_network: bool,
    ) -> Result<Self> {
        if environments.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "environments",
                reason: "at least one environment is required".to_string(),
            }
            .into());
        }
        if let Some(pos) = environments.iter().position(|e| e.trim().is_empty()) {
            return Err(ConfigError::InvalidValue {
                field: "environments",
                reason: format!("environment #{} is empty", pos + 1),
            }
            .into());
        }

        Ok(Self {
            environments,
            overwrite_parameters,
            overwrite_network,
            config_dir: config_dir.into(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use serde_json::json;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, contents: &str) {
        std::fs::write(dir.path().join(name), contents).unwrap();
    }

    fn full_dir() -> TempDir {
        let dir = TempDir::new().unwrap();
        write(&dir, "config.yaml", "region: ap-southeast-2\nvpcCidr: 10.0.0.0/16\n");
        write(
            &dir,
            "iamRolesConfig.yaml",
            "services:\n  dev:\n    admin: arn:aws:iam::1:role/admin\n",
        );
        write(&dir, "clusterConfig.yaml", "clusters:\n  prod:\n    version: '1.29'\n");
        write(
            &dir,
            "blueprint-repo.yaml",
            "gitRepoOwner: acme\nrepoUrl: https://github.com/acme/blueprints\ntargetRevision: main\nextra: ignored\n",
        );
        dir
    }

    #[test]
    fn test_load_full_bundle() {
        let dir = full_dir();
        let bundle = ConfigurationBundle::load(dir.path()).unwrap();

        assert!(!bundle.global.is_empty());
        assert!(bundle.iam_roles.for_environment("dev").is_some());
        assert!(bundle.iam_roles.for_environment("prod").is_none());
        assert!(bundle.clusters.for_environment("prod").is_some());
        assert_eq!(bundle.blueprint_repo.git_repo_owner, "acme");
    }

    #[test]
    fn test_global_config_keeps_key_order() {
        let dir = full_dir();
        let bundle = ConfigurationBundle::load(dir.path()).unwrap();
        assert_eq!(
            bundle.global.to_json().unwrap(),
            r#"{"region":"ap-southeast-2","vpcCidr":"10.0.0.0/16"}"#
        );
    }

    #[test]
    fn test_blueprint_json_shape() {
        let dir = full_dir();
        let bundle = ConfigurationBundle::load(dir.path()).unwrap();
        assert_eq!(
            bundle.blueprint_repo.to_json().unwrap(),
            r#"{"gitRepoOwner":"acme","repoUrl":"https://github.com/acme/blueprints","targetRevision":"main"}"#
        );
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let dir = full_dir();
        std::fs::remove_file(dir.path().join("clusterConfig.yaml")).unwrap();

        let err = ConfigurationBundle::load(dir.path()).unwrap_err();
        assert!(matches!(err, Error::Config(ConfigError::NotFound { .. })));
    }

    #[test]
    fn test_malformed_yaml_is_parse_error() {
        let dir = full_dir();
        write(&dir, "iamRolesConfig.yaml", "services: [unclosed\n");

        let err = ConfigurationBundle::load(dir.path()).unwrap_err();
        assert!(matches!(err, Error::Config(ConfigError::Parse { .. })));
    }

    #[test]
    fn test_empty_documents_default() {
        let dir = full_dir();
        write(&dir, "config.yaml", "");
        write(&dir, "clusterConfig.yaml", "\n");

        let bundle = ConfigurationBundle::load(dir.path()).unwrap();
        assert!(bundle.global.is_empty());
        assert!(bundle.clusters.clusters.is_empty());
    }

    #[test]
    fn test_empty_blueprint_is_missing_field() {
        let dir = full_dir();
        write(&dir, "blueprint-repo.yaml", "");

        let err = ConfigurationBundle::load(dir.path()).unwrap_err();
        assert!(matches!(err, Error::Config(ConfigError::MissingField { .. })));
    }

    #[test]
    fn test_null_environment_entry_is_absent() {
        let roles = IamRolesConfig {
            services: serde_json::from_value(json!({ "dev": null })).unwrap(),
        };
        assert!(roles.for_environment("dev").is_none());
    }

    #[test]
    fn test_false_environment_entry_is_absent() {
        let clusters = ClusterConfig {
            clusters: serde_json::from_value(json!({ "dev": false, "prod": true })).unwrap(),
        };
        assert!(clusters.for_environment("dev").is_none());
        assert!(clusters.for_environment("prod").is_some());
    }

    #[test]
    fn test_zero_environment_entry_is_absent() {
        let roles = IamRolesConfig {
            services: serde_json::from_value(json!({ "dev": 0, "qa": 0.0, "prod": 3 }))
                .unwrap(),
        };
        assert!(roles.for_environment("dev").is_none());
        assert!(roles.for_environment("qa").is_none());
        assert!(roles.for_environment("prod").is_some());
    }

    #[test]
    fn test_empty_string_environment_entry_is_absent() {
        let clusters = ClusterConfig {
            clusters: serde_json::from_value(json!({ "dev": "", "prod": "x" })).unwrap(),
        };
        assert!(clusters.for_environment("dev").is_none());
        assert!(clusters.for_environment("prod").is_some());
    }

    #[test]
    fn test_empty_collections_hold_data() {
        assert!(has_data(&json!({})));
        assert!(has_data(&json!([])));
    }

    #[test]
    fn test_falsy_global_config_is_empty() {
        for value in [json!(null), json!(false), json!(0), json!("")] {
            assert!(GlobalConfig::new(value).is_empty());
        }
        assert!(!GlobalConfig::new(json!({ "region": "x" })).is_empty());
    }

    #[test]
    fn test_integral_floats_publish_as_integers() {
        let value: Value =
            serde_yaml::from_str("minSize: 2.0\nbig: 1e3\nratio: 1.5\nnested: [3.0, -0.0]\n")
                .unwrap();
        assert_eq!(
            to_json(&value).unwrap(),
            r#"{"minSize":2,"big":1000,"ratio":1.5,"nested":[3,0]}"#
        );
    }

    #[test]
    fn test_huge_floats_stay_floats() {
        let published: Value = serde_json::from_str(&to_json(&json!(1e300)).unwrap()).unwrap();
        assert!(published.is_f64());
    }

    #[test]
    fn test_run_configuration_requires_environments() {
        assert!(RunConfiguration::new(".", vec![], false, false).is_err());
        assert!(RunConfiguration::new(".", vec!["dev".into(), " ".into()], false, false).is_err());

        let run =
            RunConfiguration::new(".", vec!["dev".into(), "dev".into()], true, false).unwrap();
        assert_eq!(run.environments, vec!["dev", "dev"]);
        assert!(run.overwrite_parameters);
        assert!(!run.overwrite_network);
    }
}
