//! Outcome definitions
//!
//! What a successfully executed action produced.

use crate::table::Slot;

/// Result of one action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A fresh empty image was written
    Created,

    /// The slot was filled and the image written
    Stored(Slot),

    /// The slot was cleared and the image written
    Deleted { id: usize },

    /// A single occupied slot
    Record(Slot),

    /// All occupied slots, ascending by position
    Records(Vec<Slot>),
}

impl Outcome {
    /// Slots to print for this outcome (empty for mutations)
    pub fn printable(&self) -> &[Slot] {
        match self {
            Outcome::Record(slot) => std::slice::from_ref(slot),
            Outcome::Records(slots) => slots,
            Outcome::Created | Outcome::Stored(_) | Outcome::Deleted { .. } => &[],
        }
    }
}
