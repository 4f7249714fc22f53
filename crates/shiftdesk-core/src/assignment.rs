//! Results of cancellation and replacement.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shift::Shift;

/// Outcome of a shift cancellation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cancellation {
    /// The shift was deleted.
    Cancelled(Shift),
    /// The shift was already gone.
    AlreadyAbsent,
}

/// One shift moved to another talent.
///
/// `previous_id` is deleted and `shift` persisted in its place. The two IDs
/// are equal when the shift keeps its identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reassigned {
    pub previous_id: Uuid,
    pub shift: Shift,
}

/// Report of a bulk replacement.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Replacement {
    pub reassigned: Vec<Reassigned>,
}

impl Replacement {
    /// Number of shifts moved.
    pub fn len(&self) -> usize {
        self.reassigned.len()
    }

    /// Check if nothing was moved.
    pub fn is_empty(&self) -> bool {
        self.reassigned.is_empty()
    }
}
