//! Test fixtures and constants.

pub use deploy_config::core::constants::{
    BLUEPRINT_REPO_FILE, CLUSTER_CONFIG_FILE, GLOBAL_CONFIG_FILE, IAM_ROLES_FILE,
};

/// Global config with a per-environment section, as deployments use it.
pub const GLOBAL_CONFIG_YAML: &str = "\
hostedZoneName: example.org
dev:
  vpcCidr: 10.10.0.0/16
prod:
  vpcCidr: 10.20.0.0/16
";

/// IAM roles for `dev` and `prod`.
pub const IAM_ROLES_YAML: &str = "\
services:
  dev:
    fence: arn:aws:iam::111111111111:role/dev-fence
    indexd: arn:aws:iam::111111111111:role/dev-indexd
  prod:
    fence: arn:aws:iam::222222222222:role/prod-fence
";

/// Cluster config for `prod` only.
pub const CLUSTER_CONFIG_YAML: &str = "\
clusters:
  prod:
    version: '1.29'
    minSize: 2
";

/// Blueprint repository pointer.
pub const BLUEPRINT_REPO_YAML: &str = "\
gitRepoOwner: acme
repoUrl: https://github.com/acme/eks-blueprints
targetRevision: main
";

/// Exact JSON published for the blueprint repository.
pub const BLUEPRINT_REPO_JSON: &str =
    r#"{"gitRepoOwner":"acme","repoUrl":"https://github.com/acme/eks-blueprints","targetRevision":"main"}"#;

/// Exact JSON published for dev's IAM roles.
pub const DEV_IAM_ROLES_JSON: &str = r#"{"fence":"arn:aws:iam::111111111111:role/dev-fence","indexd":"arn:aws:iam::111111111111:role/dev-indexd"}"#;
