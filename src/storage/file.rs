//! Storage File
//!
//! Owns the database file handle and moves whole images in and out of it.
//!
//! ## Responsibilities
//! - `create`: open for writing, truncating any previous contents
//! - `open`: open an existing file for reading and rewriting
//! - `load_into`: read exactly one image into a table
//! - `write`: overwrite the file with one image, then flush

use std::fs::{File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::SyncStrategy;
use crate::error::{Result, SlotError};
use crate::table::SlotTable;

use super::format::{self, IMAGE_SIZE};

/// Handle on the single file holding the table image
#[derive(Debug)]
pub struct StorageFile {
    /// Path the file was opened from
    path: PathBuf,

    /// Open file handle, released on drop
    file: File,

    /// What `write` does after the image is handed to the OS
    sync_strategy: SyncStrategy,
}

impl StorageFile {
    /// Create or truncate the file
    ///
    /// Nothing is written yet; the caller persists an image with `write`.
    pub fn create(path: &Path, sync_strategy: SyncStrategy) -> Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .read(true)
            .write(true)
            .truncate(true)
            .open(path)?;

        debug!(path = %path.display(), "Created database file");

        Ok(Self {
            path: path.to_path_buf(),
            file,
            sync_strategy,
        })
    }

    /// Open an existing file without touching its contents
    pub fn open(path: &Path, sync_strategy: SyncStrategy) -> Result<Self> {
        let file = OpenOptions::new().read(true).write(true).open(path)?;

        debug!(path = %path.display(), "Opened database file");

        Ok(Self {
            path: path.to_path_buf(),
            file,
            sync_strategy,
        })
    }

    /// Read one full image from the start of the file into `table`
    ///
    /// A file shorter than [`IMAGE_SIZE`] fails with `CorruptFile`. On any
    /// failure `table` is left untouched.
    pub fn load_into(&mut self, table: &mut SlotTable) -> Result<()> {
        let mut image = Vec::new();
        image
            .try_reserve_exact(IMAGE_SIZE)
            .map_err(|_| SlotError::OutOfMemory)?;

        self.file.seek(SeekFrom::Start(0))?;
        (&mut self.file)
            .take(IMAGE_SIZE as u64)
            .read_to_end(&mut image)?;

        // Decode into a fresh table so a bad image never reaches the caller's
        *table = format::decode_image(&image)?;

        debug!(
            path = %self.path.display(),
            occupied = table.occupied_count(),
            "Loaded table image"
        );

        Ok(())
    }

    /// Rewrite the whole image from the start of the file, then flush
    pub fn write(&mut self, table: &SlotTable) -> Result<()> {
        let image = format::encode_image(table);

        self.file.seek(SeekFrom::Start(0))?;
        self.file.write_all(&image)?;
        self.file.flush()?;

        if self.sync_strategy == SyncStrategy::SyncAll {
            self.file.sync_all()?;
        }

        debug!(
            path = %self.path.display(),
            bytes = image.len(),
            occupied = table.occupied_count(),
            "Wrote table image"
        );

        Ok(())
    }

    /// Path this file was opened from
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Sync strategy applied by `write`
    pub fn sync_strategy(&self) -> SyncStrategy {
        self.sync_strategy
    }
}
