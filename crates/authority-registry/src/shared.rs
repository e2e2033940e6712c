// Shared registry handle for embedders with concurrent callers
//
// The whole registry sits behind a single lock. Gated mutations hold the
// write lock across the admin check and the map update.

use crate::config::RegistryConfig;
use crate::error::Result;
use crate::events::RegistryEventRecord;
use crate::principal::Principal;
use crate::record::AuthorityRecord;
use crate::registry::AuthorityRegistry;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Cloneable handle to one registry instance.
///
/// Holders cannot reset the registry; the admin changes only through
/// `transfer_admin`. Build a fresh handle to start over.
#[derive(Debug, Clone)]
pub struct SharedAuthorityRegistry {
    inner: Arc<RwLock<AuthorityRegistry>>,
}

impl From<AuthorityRegistry> for SharedAuthorityRegistry {
    fn from(registry: AuthorityRegistry) -> Self {
        Self {
            inner: Arc::new(RwLock::new(registry)),
        }
    }
}

impl SharedAuthorityRegistry {
    pub fn new(admin: impl Into<Principal>) -> Self {
        AuthorityRegistry::new(admin).into()
    }

    pub fn with_config(config: &RegistryConfig) -> Self {
        AuthorityRegistry::with_config(config).into()
    }

    pub async fn is_admin(&self, caller: &Principal) -> bool {
        self.inner.read().await.is_admin(caller)
    }

    pub async fn admin(&self) -> Principal {
        self.inner.read().await.admin().clone()
    }

    pub async fn transfer_admin(&self, caller: &Principal, new_admin: &Principal) -> Result<bool> {
        self.inner.write().await.transfer_admin(caller, new_admin)
    }

    pub async fn add_authority(
        &self,
        caller: &Principal,
        authority: &Principal,
        entity_type: impl Into<String>,
        grade: impl Into<String>,
    ) -> Result<bool> {
        self.inner
            .write()
            .await
            .add_authority(caller, authority, entity_type, grade)
    }

    pub async fn update_grade(
        &self,
        caller: &Principal,
        authority: &Principal,
        new_grade: impl Into<String>,
    ) -> Result<bool> {
        self.inner
            .write()
            .await
            .update_grade(caller, authority, new_grade)
    }

    pub async fn revoke_authority(
        &self,
        caller: &Principal,
        authority: &Principal,
    ) -> Result<bool> {
        self.inner.write().await.revoke_authority(caller, authority)
    }

    pub async fn is_verified(&self, authority: &Principal) -> bool {
        self.inner.read().await.is_verified(authority)
    }

    pub async fn get_entity_type(&self, authority: &Principal) -> Result<String> {
        self.inner.read().await.get_entity_type(authority)
    }

    pub async fn get_grade(&self, authority: &Principal) -> Result<String> {
        self.inner.read().await.get_grade(authority)
    }

    pub async fn record(&self, authority: &Principal) -> Result<AuthorityRecord> {
        self.inner.read().await.record(authority).cloned()
    }

    /// Verified authorities in principal order
    pub async fn authorities(&self) -> Vec<(Principal, AuthorityRecord)> {
        self.inner
            .read()
            .await
            .authorities()
            .map(|(principal, record)| (principal.clone(), record.clone()))
            .collect()
    }

    pub async fn authority_count(&self) -> usize {
        self.inner.read().await.authority_count()
    }

    pub async fn events(&self) -> Vec<RegistryEventRecord> {
        self.inner.read().await.events().cloned().collect()
    }

    /// Owned copy of the registry at this instant
    pub async fn snapshot(&self) -> AuthorityRegistry {
        self.inner.read().await.clone()
    }
}
