//! Session Module
//!
//! Ties one open database file to one in-memory slot table.
//!
//! ## Responsibilities
//! - Open in create mode (fresh table, truncated file) or load an existing file
//! - Route slot operations to the table
//! - Persist the table only when `write` is called explicitly
//! - Release the file handle and table on `close` (or drop)

use std::path::Path;

use tracing::info;

use crate::config::Config;
use crate::error::Result;
use crate::storage::StorageFile;
use crate::table::{OccupiedIter, Slot, SlotTable};

/// How a session gets its initial table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenMode {
    /// Truncate the file and start from an empty table
    Create,

    /// Load the table from an existing file
    Existing,
}

/// An open database
///
/// ## Ownership
///
/// The session is the only owner of its file handle and its table. There is
/// no locking: two sessions on the same file at once is undefined behaviour,
/// and callers that need several writers must serialize open → mutate →
/// write → close themselves.
///
/// Closing consumes the session, so a closed session cannot be used or
/// closed again. Dropping it releases the same resources.
#[derive(Debug)]
pub struct Session {
    /// Session configuration
    config: Config,

    /// Backing file (exclusive)
    storage: StorageFile,

    /// In-memory table, the working copy until `write`
    table: SlotTable,
}

impl Session {
    /// Open a session with the given config
    ///
    /// - `Create`: truncate the file and build an empty table. The file holds
    ///   no image until `write` is called.
    /// - `Existing`: open the file and load its image. A missing or unreadable
    ///   file is an `Io` error, a short or malformed one `CorruptFile`.
    pub fn open(config: Config, mode: OpenMode) -> Result<Self> {
        let mut table = SlotTable::new()?;

        let storage = match mode {
            OpenMode::Create => {
                let storage = StorageFile::create(&config.path, config.sync_strategy)?;
                table.initialize();
                storage
            }
            OpenMode::Existing => {
                let mut storage = StorageFile::open(&config.path, config.sync_strategy)?;
                storage.load_into(&mut table)?;
                storage
            }
        };

        info!(
            path = %config.path.display(),
            ?mode,
            occupied = table.occupied_count(),
            "Session opened"
        );

        Ok(Self {
            config,
            storage,
            table,
        })
    }

    /// Create a new database at `path` (default config)
    pub fn open_create(path: impl AsRef<Path>) -> Result<Self> {
        Self::open(Config::with_path(path.as_ref()), OpenMode::Create)
    }

    /// Open the existing database at `path` (default config)
    pub fn open_existing(path: impl AsRef<Path>) -> Result<Self> {
        Self::open(Config::with_path(path.as_ref()), OpenMode::Existing)
    }

    // =========================================================================
    // Slot Operations
    // =========================================================================

    /// Get an occupied slot
    pub fn get(&self, id: usize) -> Result<&Slot> {
        self.table.get(id)
    }

    /// Fill an unoccupied slot (in memory only)
    pub fn set(&mut self, id: usize, name: &str, email: &str) -> Result<&Slot> {
        self.table.set(id, name, email)
    }

    /// Clear a slot (in memory only)
    pub fn delete(&mut self, id: usize) -> Result<()> {
        self.table.delete(id)
    }

    /// Occupied slots in ascending position order
    pub fn list(&self) -> OccupiedIter<'_> {
        self.table.iter_occupied()
    }

    /// Reset the in-memory table to all-unoccupied
    pub fn initialize(&mut self) {
        self.table.initialize();
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Persist the full table image
    pub fn write(&mut self) -> Result<()> {
        self.storage.write(&self.table)
    }

    /// Release the file handle and the table
    ///
    /// Unwritten changes are discarded.
    pub fn close(self) {
        info!(path = %self.config.path.display(), "Session closed");
        drop(self);
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// The in-memory table
    pub fn table(&self) -> &SlotTable {
        &self.table
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        self.storage.path()
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}
