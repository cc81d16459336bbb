//! Configuration for SlotDB
//!
//! Centralized configuration with sensible defaults.

use std::path::PathBuf;

/// Main configuration for a SlotDB session
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Storage Configuration
    // -------------------------------------------------------------------------
    /// Path of the database file holding the table image
    pub path: PathBuf,

    /// How hard `write` pushes the image towards the disk
    pub sync_strategy: SyncStrategy,
}

/// Durability strategy applied at the end of every image write
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SyncStrategy {
    /// Flush userspace buffers only
    #[default]
    Flush,

    /// Flush, then fsync file data and metadata
    SyncAll,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            path: PathBuf::from("./slotdb.db"),
            sync_strategy: SyncStrategy::Flush,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Default config pointing at `path`
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self::builder().path(path).build()
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the database file path
    pub fn path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.path = path.into();
        self
    }

    /// Set the sync strategy
    pub fn sync_strategy(mut self, strategy: SyncStrategy) -> Self {
        self.config.sync_strategy = strategy;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
