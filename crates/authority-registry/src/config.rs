//! Registry configuration

use crate::principal::Principal;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Admin a registry starts with when nothing else is configured
pub const DEFAULT_ADMIN: &str = "ST1PQHQKV0RJXZFY1DGX8MNSNYVE3VGZJSRTPGZGM";

/// Number of events kept when nothing else is configured
pub const DEFAULT_EVENT_LOG_CAPACITY: usize = 1024;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// Initial admin principal
    pub admin: Principal,

    /// Maximum retained events; 0 disables the event log
    pub event_log_capacity: usize,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            admin: Principal::from(DEFAULT_ADMIN),
            event_log_capacity: DEFAULT_EVENT_LOG_CAPACITY,
        }
    }
}

impl RegistryConfig {
    pub fn new(admin: impl Into<Principal>) -> Self {
        Self {
            admin: admin.into(),
            ..Self::default()
        }
    }

    /// Read `AUTHORITY_REGISTRY_ADMIN` and `AUTHORITY_REGISTRY_EVENT_CAPACITY`,
    /// falling back to defaults for unset variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let admin = lookup("AUTHORITY_REGISTRY_ADMIN")
            .map(Principal::from)
            .unwrap_or_else(|| Principal::from(DEFAULT_ADMIN));

        let event_log_capacity = lookup("AUTHORITY_REGISTRY_EVENT_CAPACITY")
            .unwrap_or_else(|| DEFAULT_EVENT_LOG_CAPACITY.to_string())
            .parse()
            .context("Invalid AUTHORITY_REGISTRY_EVENT_CAPACITY")?;

        Ok(RegistryConfig {
            admin,
            event_log_capacity,
        })
    }
}
