// Authority registry state machine
//
// One admin principal gates every mutation of the principal -> record map.
// Each operation checks all preconditions before touching state, so a failed
// call leaves the admin, the map and the event log exactly as they were.

use crate::config::RegistryConfig;
use crate::error::{AuthorityError, Result};
use crate::events::{EventLog, RegistryEvent, RegistryEventRecord};
use crate::principal::Principal;
use crate::record::AuthorityRecord;
use std::collections::BTreeMap;
use tracing::{debug, info, warn};

// ================================
// Authority Registry
// ================================

/// Admin-gated registry of verified authorities.
///
/// Mutating operations return `Ok(true)` on success, matching the
/// acknowledgement the attestation contract hands back to its callers.
#[derive(Debug, Clone)]
pub struct AuthorityRegistry {
    admin: Principal,
    verified_authorities: BTreeMap<Principal, AuthorityRecord>,
    events: EventLog,
}

impl Default for AuthorityRegistry {
    fn default() -> Self {
        Self::with_config(&RegistryConfig::default())
    }
}

impl AuthorityRegistry {
    /// Create an empty registry administered by `admin`
    pub fn new(admin: impl Into<Principal>) -> Self {
        Self::with_config(&RegistryConfig::new(admin))
    }

    /// Create an empty registry from configuration
    pub fn with_config(config: &RegistryConfig) -> Self {
        debug!(admin = %config.admin, "authority registry created");
        Self {
            admin: config.admin.clone(),
            verified_authorities: BTreeMap::new(),
            events: EventLog::new(config.event_log_capacity),
        }
    }

    /// Reinstate `admin` and drop every authority and event.
    ///
    /// Models a fresh deployment, so it is not admin-gated.
    pub fn reset(&mut self, admin: impl Into<Principal>) {
        self.admin = admin.into();
        self.verified_authorities.clear();
        self.events.clear();
        debug!(admin = %self.admin, "authority registry reset");
    }

    // ================================
    // Admin Role
    // ================================

    pub fn is_admin(&self, caller: &Principal) -> bool {
        *caller == self.admin
    }

    pub fn admin(&self) -> &Principal {
        &self.admin
    }

    /// Hand admin rights to `new_admin`. The caller loses them immediately.
    ///
    /// `new_admin` is not checked against the current admin or for format.
    pub fn transfer_admin(&mut self, caller: &Principal, new_admin: &Principal) -> Result<bool> {
        self.ensure_admin(caller, "transfer_admin")?;

        let previous_admin = std::mem::replace(&mut self.admin, new_admin.clone());
        info!(previous = %previous_admin, new = %new_admin, "admin transferred");

        self.events.record(RegistryEvent::AdminTransferred {
            previous_admin,
            new_admin: new_admin.clone(),
        });
        Ok(true)
    }

    // ================================
    // Authority Mutations
    // ================================

    pub fn add_authority(
        &mut self,
        caller: &Principal,
        authority: &Principal,
        entity_type: impl Into<String>,
        grade: impl Into<String>,
    ) -> Result<bool> {
        self.ensure_admin(caller, "add_authority")?;

        if self.verified_authorities.contains_key(authority) {
            return Err(AuthorityError::already_verified(authority));
        }

        let record = AuthorityRecord::new(entity_type, grade);
        info!(
            authority = %authority,
            entity_type = %record.entity_type,
            grade = %record.grade,
            "authority verified"
        );

        self.events.record(RegistryEvent::AuthorityAdded {
            authority: authority.clone(),
            entity_type: record.entity_type.clone(),
            grade: record.grade.clone(),
        });
        self.verified_authorities.insert(authority.clone(), record);
        Ok(true)
    }

    /// Replace the grade of a verified authority, keeping its entity type
    pub fn update_grade(
        &mut self,
        caller: &Principal,
        authority: &Principal,
        new_grade: impl Into<String>,
    ) -> Result<bool> {
        self.ensure_admin(caller, "update_grade")?;

        let record = self
            .verified_authorities
            .get_mut(authority)
            .ok_or_else(|| AuthorityError::not_found(authority))?;

        let new_grade = new_grade.into();
        let previous_grade = std::mem::replace(&mut record.grade, new_grade.clone());
        info!(
            authority = %authority,
            previous = %previous_grade,
            new = %new_grade,
            "authority grade updated"
        );

        self.events.record(RegistryEvent::GradeUpdated {
            authority: authority.clone(),
            previous_grade,
            new_grade,
        });
        Ok(true)
    }

    pub fn revoke_authority(&mut self, caller: &Principal, authority: &Principal) -> Result<bool> {
        self.ensure_admin(caller, "revoke_authority")?;

        if self.verified_authorities.remove(authority).is_none() {
            return Err(AuthorityError::not_found(authority));
        }
        info!(authority = %authority, "authority revoked");

        self.events.record(RegistryEvent::AuthorityRevoked {
            authority: authority.clone(),
        });
        Ok(true)
    }

    // ================================
    // Queries
    // ================================

    pub fn is_verified(&self, authority: &Principal) -> bool {
        self.verified_authorities.contains_key(authority)
    }

    pub fn get_entity_type(&self, authority: &Principal) -> Result<String> {
        self.record(authority).map(|r| r.entity_type.clone())
    }

    pub fn get_grade(&self, authority: &Principal) -> Result<String> {
        self.record(authority).map(|r| r.grade.clone())
    }

    /// Full record of a verified authority
    pub fn record(&self, authority: &Principal) -> Result<&AuthorityRecord> {
        self.verified_authorities
            .get(authority)
            .ok_or_else(|| AuthorityError::not_found(authority))
    }

    /// Verified authorities in principal order
    pub fn authorities(&self) -> impl Iterator<Item = (&Principal, &AuthorityRecord)> {
        self.verified_authorities.iter()
    }

    pub fn authority_count(&self) -> usize {
        self.verified_authorities.len()
    }

    /// Retained events, oldest first
    pub fn events(&self) -> impl Iterator<Item = &RegistryEventRecord> {
        self.events.iter()
    }

    fn ensure_admin(&self, caller: &Principal, operation: &'static str) -> Result<()> {
        if self.is_admin(caller) {
            return Ok(());
        }
        warn!(caller = %caller, operation, "rejected non-admin call");
        Err(AuthorityError::not_authorized(caller))
    }
}
