//! Error types for SlotDB
//!
//! Provides a unified error type for all operations.

use thiserror::Error;

/// Result type alias using SlotError
pub type Result<T> = std::result::Result<T, SlotError>;

/// Unified error type for SlotDB operations
#[derive(Debug, Error)]
pub enum SlotError {
    // -------------------------------------------------------------------------
    // Slot Errors
    // -------------------------------------------------------------------------
    #[error("Slot id {id} out of range (capacity {capacity})", capacity = crate::table::CAPACITY)]
    OutOfRange { id: i64 },

    #[error("Slot {id} is already set, delete it first")]
    DuplicateSlot { id: usize },

    #[error("Slot {id} is not set")]
    NotSet { id: usize },

    // -------------------------------------------------------------------------
    // Storage Errors
    // -------------------------------------------------------------------------
    #[error("Corrupt database file: {0}")]
    CorruptFile(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Out of memory while allocating the slot table")]
    OutOfMemory,

    // -------------------------------------------------------------------------
    // Command Errors
    // -------------------------------------------------------------------------
    #[error("Usage error: {0}")]
    Usage(String),
}
