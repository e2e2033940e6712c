use serde::{Deserialize, Serialize};

/// Role and rating attached to a verified authority.
///
/// Both labels are free-form; the registry stores them as given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorityRecord {
    /// Role label (e.g. "manufacturer", "retailer", "inspector")
    pub entity_type: String,
    /// Rating label (e.g. "A+", "B-")
    pub grade: String,
}

impl AuthorityRecord {
    pub fn new(entity_type: impl Into<String>, grade: impl Into<String>) -> Self {
        Self {
            entity_type: entity_type.into(),
            grade: grade.into(),
        }
    }
}
