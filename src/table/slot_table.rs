//! SlotTable implementation
//!
//! Fixed-capacity, position-addressed table of slots.

use std::iter::FusedIterator;
use std::slice;

use tracing::{debug, warn};

use crate::error::{Result, SlotError};

use super::{BoundedText, Slot, CAPACITY};

/// Fixed table of [`CAPACITY`] slots
///
/// Every mutation is all-or-nothing: a call that fails leaves the table
/// exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotTable {
    /// Always `CAPACITY` long, `slots[i].id() == i`
    slots: Vec<Slot>,
}

impl SlotTable {
    /// Allocate a fresh table with every slot unoccupied
    pub fn new() -> Result<Self> {
        let mut slots = Vec::new();
        slots
            .try_reserve_exact(CAPACITY)
            .map_err(|_| SlotError::OutOfMemory)?;
        slots.extend((0..CAPACITY).map(Slot::empty));

        Ok(Self { slots })
    }

    /// Rebuild from decoded slots (length and ids already validated)
    pub(crate) fn from_slots(slots: Vec<Slot>) -> Self {
        debug_assert_eq!(slots.len(), CAPACITY);
        Self { slots }
    }

    /// Reset every position to an unoccupied slot with `id = position`
    pub fn initialize(&mut self) {
        for (position, slot) in self.slots.iter_mut().enumerate() {
            *slot = Slot::empty(position);
        }
    }

    /// Validate a caller-supplied id and turn it into a position
    pub fn check_id(id: i64) -> Result<usize> {
        usize::try_from(id)
            .ok()
            .filter(|&position| position < CAPACITY)
            .ok_or(SlotError::OutOfRange { id })
    }

    /// Store `name` and `email` in an unoccupied slot
    ///
    /// Fails with `DuplicateSlot` if the slot is already occupied; delete it
    /// first. Both fields are truncated to fit their on-disk capacity.
    pub fn set(&mut self, id: usize, name: &str, email: &str) -> Result<&Slot> {
        let position = Self::position(id)?;
        if self.slots[position].is_occupied() {
            return Err(SlotError::DuplicateSlot { id });
        }

        let (name, name_cut) = BoundedText::truncating(name);
        let (email, email_cut) = BoundedText::truncating(email);
        if name_cut || email_cut {
            warn!(id, name_cut, email_cut, "Truncated text to fit slot capacity");
        }

        let slot = &mut self.slots[position];
        slot.fill(name, email);
        debug!(id, "Slot set");

        Ok(&*slot)
    }

    /// Reset a slot to unoccupied; deleting an empty slot is a no-op
    pub fn delete(&mut self, id: usize) -> Result<()> {
        let position = Self::position(id)?;
        self.slots[position] = Slot::empty(position);
        debug!(id, "Slot deleted");
        Ok(())
    }

    /// Get an occupied slot
    pub fn get(&self, id: usize) -> Result<&Slot> {
        let position = Self::position(id)?;
        let slot = &self.slots[position];
        if !slot.is_occupied() {
            return Err(SlotError::NotSet { id });
        }
        Ok(slot)
    }

    /// Iterate over occupied slots in ascending position order
    ///
    /// Call again to restart from the beginning.
    pub fn iter_occupied(&self) -> OccupiedIter<'_> {
        OccupiedIter {
            inner: self.slots.iter(),
        }
    }

    /// Number of occupied slots
    pub fn occupied_count(&self) -> usize {
        self.iter_occupied().count()
    }

    /// All slots, occupied or not, in position order
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    fn position(id: usize) -> Result<usize> {
        if id < CAPACITY {
            Ok(id)
        } else {
            Err(SlotError::OutOfRange {
                id: i64::try_from(id).unwrap_or(i64::MAX),
            })
        }
    }
}

/// Lazy iterator over occupied slots, in position order
#[derive(Clone)]
pub struct OccupiedIter<'a> {
    inner: slice::Iter<'a, Slot>,
}

impl<'a> Iterator for OccupiedIter<'a> {
    type Item = &'a Slot;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.find(|slot| slot.is_occupied())
    }
}

impl<'a> DoubleEndedIterator for OccupiedIter<'a> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.rfind(|slot| slot.is_occupied())
    }
}

impl FusedIterator for OccupiedIter<'_> {}
