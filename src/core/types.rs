//! Type aliases for domain concepts.
//!
//! Provides semantic type aliases to make function signatures more descriptive.

/// An environment identifier (e.g., dev, staging, prod).
///
/// Indexes the per-environment documents and derives store names.
pub type EnvName = String;

/// A hierarchical parameter store path (e.g., /gen3/prod/iamRolesConfig).
pub type ParameterName = String;

/// A secret store name (e.g., argocdAdmin-prod).
pub type SecretName = String;
