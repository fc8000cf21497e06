//! deploy-config - Publishes per-environment deployment configuration to AWS.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── output        # Terminal output helpers
//! │   └── sync          # The sync command
//! └── core/             # Core library components
//!     ├── config        # Configuration documents and run settings
//!     ├── names         # Parameter and secret names
//!     ├── password      # Admin password generation
//!     ├── store/        # Store gateways
//!     │   ├── mod       # ParameterStore / SecretStore traits
//!     │   ├── aws       # SSM and Secrets Manager
//!     │   └── memory    # In-memory stores that record calls
//!     └── sync/         # Sync policies
//!         ├── parameter     # Create / update / skip decision
//!         ├── credential    # Restore / reuse / create admin secrets
//!         └── orchestrator  # Whole-run sequencing
//! ```
//!
//! # Published items
//!
//! - `/gen3/eks-blueprint-repo` - blueprint repository pointer (always overwritten)
//! - `/gen3/config` - global config (overwritten with `--update-network`)
//! - `/gen3/<env>/iamRolesConfig`, `/gen3/<env>/cluster-config` (overwritten with `--update-env`)
//! - secret `argocdAdmin-<env>` - created once, never replaced

pub mod cli;
pub mod core;
pub mod error;
