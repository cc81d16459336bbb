//! Slot Table Module
//!
//! In-memory model of the record store.
//!
//! ## Responsibilities
//! - Hold exactly [`CAPACITY`] fixed-position slots
//! - Enforce the set/get/delete rules on individual slots
//! - Keep text fields within their on-disk capacity
//! - Ordered iteration over occupied slots
//!
//! ## Data Structure Choice
//! A `Vec<Slot>` allocated once with its final length:
//! - Position-addressed, never resized or reordered
//! - Slot `id` always equals its index
//! - Allocation failure surfaces as an error instead of aborting

mod slot;
mod slot_table;
mod text;

pub use slot::Slot;
pub use slot_table::{OccupiedIter, SlotTable};
pub use text::BoundedText;

/// Fixed number of slots in every table
pub const CAPACITY: usize = 100;

/// Capacity of each text field in bytes, terminator included
pub const MAX_DATA: usize = 512;
