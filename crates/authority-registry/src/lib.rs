// Authority Registry - admin-gated verification of supply-chain authorities
//
// A single admin principal grants, grades and revokes "verified authority"
// status for other principals (manufacturers, retailers, inspectors, ...).
// Registries are explicit instances; there is no global state.

// ================================
// Module Declarations
// ================================

/// Registry configuration
pub mod config;

/// Registry error types
pub mod error;

/// Audit trail of successful mutations
pub mod events;

/// Principal identity
pub mod principal;

/// Authority records
pub mod record;

/// Registry state machine
pub mod registry;

/// Lock-protected handle for concurrent callers
pub mod shared;

// ================================
// Public API Re-exports
// ================================

pub use config::{RegistryConfig, DEFAULT_ADMIN, DEFAULT_EVENT_LOG_CAPACITY};
pub use error::{AuthorityError, Result};
pub use events::{RegistryEvent, RegistryEventRecord};
pub use principal::Principal;
pub use record::AuthorityRecord;
pub use registry::AuthorityRegistry;
pub use shared::SharedAuthorityRegistry;

// ================================
// Convenience Functions
// ================================

/// Create a registry administered by `admin` with default settings
pub fn create_registry(admin: impl Into<Principal>) -> AuthorityRegistry {
    AuthorityRegistry::new(admin)
}

// ================================
// Tests
// ================================
