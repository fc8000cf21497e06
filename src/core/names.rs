//! Store names derived from environment identifiers.
//!
//! Every name is a pure function of its kind and environment, so two
//! logical items only share a name when they are the same item.

use crate::core::constants::{
    ADMIN_SECRET_PREFIX, CLUSTER_CONFIG_LEAF, IAM_ROLES_LEAF, PARAMETER_ROOT,
};
use crate::core::types::{ParameterName, SecretName};

/// `/gen3/<env>/iamRolesConfig`
pub fn iam_roles_parameter(env: &str) -> ParameterName {
    format!("{}/{}/{}", PARAMETER_ROOT, env, IAM_ROLES_LEAF)
}

/// `/gen3/<env>/cluster-config`
pub fn cluster_config_parameter(env: &str) -> ParameterName {
    format!("{}/{}/{}", PARAMETER_ROOT, env, CLUSTER_CONFIG_LEAF)
}

/// `argocdAdmin-<env>`
pub fn admin_secret(env: &str) -> SecretName {
    format!("{}{}", ADMIN_SECRET_PREFIX, env)
}
