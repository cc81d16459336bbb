//! Record slot
//!
//! One fixed-position entry in the table.

use std::fmt;

use super::BoundedText;

/// A single slot: position, occupancy flag, and two bounded text fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slot {
    /// Position in the table, never changes
    id: usize,

    /// Whether the slot currently holds live data
    occupied: bool,

    name: BoundedText,
    email: BoundedText,
}

impl Slot {
    /// An unoccupied slot at `id` with empty fields
    pub fn empty(id: usize) -> Self {
        Self {
            id,
            occupied: false,
            name: BoundedText::default(),
            email: BoundedText::default(),
        }
    }

    /// Reassemble a slot from decoded fields
    pub(crate) fn from_parts(
        id: usize,
        occupied: bool,
        name: BoundedText,
        email: BoundedText,
    ) -> Self {
        Self {
            id,
            occupied,
            name,
            email,
        }
    }

    /// Mark occupied and store both fields
    pub(crate) fn fill(&mut self, name: BoundedText, email: BoundedText) {
        self.occupied = true;
        self.name = name;
        self.email = email;
    }

    pub fn id(&self) -> usize {
        self.id
    }

    pub fn is_occupied(&self) -> bool {
        self.occupied
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    pub(crate) fn name_text(&self) -> &BoundedText {
        &self.name
    }

    pub(crate) fn email_text(&self) -> &BoundedText {
        &self.email
    }
}

/// Prints `"{id} {name} {email}"`, one record per line in listings
impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.id, self.name, self.email)
    }
}
