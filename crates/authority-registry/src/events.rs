use crate::principal::Principal;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

// ================================
// Registry Events
// ================================

/// Successful registry mutation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RegistryEvent {
    /// A principal became a verified authority
    AuthorityAdded {
        authority: Principal,
        entity_type: String,
        grade: String,
    },
    /// The grade of a verified authority changed
    GradeUpdated {
        authority: Principal,
        previous_grade: String,
        new_grade: String,
    },
    /// A verified authority was removed
    AuthorityRevoked { authority: Principal },
    /// Admin rights moved to another principal
    AdminTransferred {
        previous_admin: Principal,
        new_admin: Principal,
    },
}

/// Event with its position in the log
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryEventRecord {
    /// Starts at 1, strictly increasing
    pub sequence: u64,
    /// Unix timestamp (seconds)
    pub recorded_at: i64,
    pub event: RegistryEvent,
}

// ================================
// Bounded Event Log
// ================================

/// Ring of the most recent events. A capacity of zero disables recording.
#[derive(Debug, Clone)]
pub(crate) struct EventLog {
    capacity: usize,
    next_sequence: u64,
    entries: VecDeque<RegistryEventRecord>,
}

impl EventLog {
    pub(crate) fn new(capacity: usize) -> Self {
        Self {
            capacity,
            next_sequence: 1,
            entries: VecDeque::with_capacity(capacity.min(64)),
        }
    }

    pub(crate) fn record(&mut self, event: RegistryEvent) {
        if self.capacity == 0 {
            return;
        }

        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }

        self.entries.push_back(RegistryEventRecord {
            sequence: self.next_sequence,
            recorded_at: chrono::Utc::now().timestamp(),
            event,
        });
        self.next_sequence += 1;
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = &RegistryEventRecord> {
        self.entries.iter()
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn clear(&mut self) {
        self.entries.clear();
        self.next_sequence = 1;
    }
}
