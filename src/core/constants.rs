//! Constants used throughout deploy-config.
//!
//! Centralizes store paths, file names and defaults.

/// Root of every parameter this tool publishes.
pub const PARAMETER_ROOT: &str = "/gen3";

/// Parameter holding the EKS blueprint repository pointer.
pub const BLUEPRINT_REPO_PARAMETER: &str = "/gen3/eks-blueprint-repo";

/// Parameter holding the global configuration document.
pub const GLOBAL_CONFIG_PARAMETER: &str = "/gen3/config";

/// Leaf name of the per-environment IAM roles parameter.
pub const IAM_ROLES_LEAF: &str = "iamRolesConfig";

/// Leaf name of the per-environment cluster parameter.
pub const CLUSTER_CONFIG_LEAF: &str = "cluster-config";

/// Prefix of the per-environment ArgoCD admin secret.
pub const ADMIN_SECRET_PREFIX: &str = "argocdAdmin-";

/// Global configuration file name.
pub const GLOBAL_CONFIG_FILE: &str = "config.yaml";

/// IAM roles configuration file name.
pub const IAM_ROLES_FILE: &str = "iamRolesConfig.yaml";

/// Cluster configuration file name.
pub const CLUSTER_CONFIG_FILE: &str = "clusterConfig.yaml";

/// Blueprint repository configuration file name.
pub const BLUEPRINT_REPO_FILE: &str = "blueprint-repo.yaml";

/// Configuration directory used when none is given.
pub const DEFAULT_CONFIG_DIR: &str = "../.secrets";

/// AWS region used when neither `--region` nor `AWS_REGION` is set.
pub const DEFAULT_REGION: &str = "ap-southeast-2";

/// Length of generated admin passwords.
pub const PASSWORD_LENGTH: usize = 16;

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "DEPLOY_CONFIG_LOG";
