//! Storage Module
//!
//! Persists the slot table as one contiguous, fixed-size binary image.
//!
//! ## Responsibilities
//! - Create/truncate or open the database file
//! - Load the full image into a table, rejecting short files
//! - Rewrite the full image in one pass, then flush
//!
//! ## File Format
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │ Record 0                                             │
//! │ ┌────────┬──────────────┬────────────┬─────────────┐ │
//! │ │ Id (4) │ Occupied (4) │ Name (512) │ Email (512) │ │
//! │ └────────┴──────────────┴────────────┴─────────────┘ │
//! ├──────────────────────────────────────────────────────┤
//! │ Record 1                                             │
//! │ ...                                                  │
//! ├──────────────────────────────────────────────────────┤
//! │ Record 99                                            │
//! └──────────────────────────────────────────────────────┘
//! ```
//!
//! No header, magic, version, or checksum. Integers are little-endian,
//! text fields are NUL-terminated and zero-padded. A crash in the middle of
//! a write can leave a torn image behind; nothing here guards against that.

mod file;
pub mod format;

pub use file::StorageFile;
pub use format::{IMAGE_SIZE, RECORD_SIZE};
