// Registry error types with stable numeric codes

use crate::principal::Principal;
use thiserror::Error;

/// Registry error types
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthorityError {
    /// Caller is not the current admin
    #[error("Not authorized: {caller} is not the registry admin")]
    NotAuthorized { caller: Principal },

    /// Authority is already present in the registry
    #[error("Authority already verified: {authority}")]
    AlreadyVerified { authority: Principal },

    /// Authority is not present in the registry
    #[error("Authority not found: {authority}")]
    NotFound { authority: Principal },
}

impl AuthorityError {
    pub const NOT_AUTHORIZED: u32 = 100;
    pub const ALREADY_VERIFIED: u32 = 101;
    pub const NOT_FOUND: u32 = 102;

    /// Stable numeric identifier of the error kind
    pub fn code(&self) -> u32 {
        match self {
            AuthorityError::NotAuthorized { .. } => Self::NOT_AUTHORIZED,
            AuthorityError::AlreadyVerified { .. } => Self::ALREADY_VERIFIED,
            AuthorityError::NotFound { .. } => Self::NOT_FOUND,
        }
    }

    pub(crate) fn not_authorized(caller: &Principal) -> Self {
        AuthorityError::NotAuthorized {
            caller: caller.clone(),
        }
    }

    pub(crate) fn already_verified(authority: &Principal) -> Self {
        AuthorityError::AlreadyVerified {
            authority: authority.clone(),
        }
    }

    pub(crate) fn not_found(authority: &Principal) -> Self {
        AuthorityError::NotFound {
            authority: authority.clone(),
        }
    }
}

/// Registry result type
pub type Result<T> = std::result::Result<T, AuthorityError>;
