//! # SlotDB
//!
//! A minimal fixed-slot record store backed by a single flat file:
//! - Exactly 100 fixed-position slots, each holding a name and an email
//! - Whole-table binary image, loaded and rewritten in one pass
//! - One session per file, persisted only on explicit `write`
//! - Typed errors for every fault, never a process exit
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                  CLI (slotdb FILE ACTION ..)                 │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                       Dispatch                               │
//! │             (one action → one session lifecycle)             │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                       Session                                │
//! │            (owns file handle + table exclusively)            │
//! └──────────┬──────────────────────────────────┬───────────────┘
//!            │                                  │
//!            ▼                                  ▼
//!   ┌─────────────────┐               ┌──────────────────┐
//!   │   Slot Table    │               │   Storage File   │
//!   │ (100 × Slot)    │◄── image ────►│ (103,200 bytes)  │
//!   └─────────────────┘               └──────────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod table;
pub mod storage;
pub mod session;
pub mod dispatch;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{SlotError, Result};
pub use config::{Config, SyncStrategy};
pub use session::{OpenMode, Session};
pub use table::{Slot, SlotTable};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of SlotDB
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
