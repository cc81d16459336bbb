//! Tests for StorageFile
//!
//! These tests verify:
//! - create truncates and writes nothing by itself
//! - write produces exactly one image, overwriting prior contents
//! - load_into round-trips a table
//! - Short files are corrupt and leave the target table untouched
//! - Missing files are IO errors
//! - Generated tables survive write then load_into

use std::fs;
use std::path::PathBuf;

use proptest::prelude::*;
use slotdb::storage::{StorageFile, IMAGE_SIZE};
use slotdb::table::{SlotTable, CAPACITY};
use slotdb::{SlotError, SyncStrategy};
use tempfile::TempDir;

// =============================================================================
// Helper Functions
// =============================================================================

fn setup_temp_db() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("test.db");
    (temp_dir, path)
}

fn sample_table() -> SlotTable {
    let mut table = SlotTable::new().unwrap();
    table.set(3, "A", "a@x").unwrap();
    table.set(7, "B", "b@x").unwrap();
    table
}

// =============================================================================
// Create Tests
// =============================================================================

#[test]
fn test_create_makes_empty_file() {
    let (_temp, path) = setup_temp_db();

    let storage = StorageFile::create(&path, SyncStrategy::Flush).unwrap();

    assert!(path.exists());
    assert_eq!(fs::metadata(&path).unwrap().len(), 0);
    assert_eq!(storage.path(), path.as_path());
}

#[test]
fn test_create_truncates_existing() {
    let (_temp, path) = setup_temp_db();
    fs::write(&path, vec![1u8; 5000]).unwrap();

    let _storage = StorageFile::create(&path, SyncStrategy::Flush).unwrap();

    assert_eq!(fs::metadata(&path).unwrap().len(), 0);
}

// =============================================================================
// Write / Load Tests
// =============================================================================

#[test]
fn test_write_produces_full_image() {
    let (_temp, path) = setup_temp_db();
    let mut storage = StorageFile::create(&path, SyncStrategy::Flush).unwrap();

    storage.write(&sample_table()).unwrap();

    assert_eq!(fs::metadata(&path).unwrap().len(), IMAGE_SIZE as u64);
}

#[test]
fn test_write_then_load_round_trip() {
    let (_temp, path) = setup_temp_db();
    let table = sample_table();

    {
        let mut storage = StorageFile::create(&path, SyncStrategy::Flush).unwrap();
        storage.write(&table).unwrap();
    }

    let mut storage = StorageFile::open(&path, SyncStrategy::Flush).unwrap();
    let mut loaded = SlotTable::new().unwrap();
    storage.load_into(&mut loaded).unwrap();

    assert_eq!(loaded, table);
}

#[test]
fn test_round_trip_is_byte_identical() {
    let (_temp, path) = setup_temp_db();
    let mut storage = StorageFile::create(&path, SyncStrategy::Flush).unwrap();
    storage.write(&sample_table()).unwrap();
    let first = fs::read(&path).unwrap();

    let mut loaded = SlotTable::new().unwrap();
    storage.load_into(&mut loaded).unwrap();
    storage.write(&loaded).unwrap();
    let second = fs::read(&path).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_write_overwrites_previous_image() {
    let (_temp, path) = setup_temp_db();
    let mut storage = StorageFile::create(&path, SyncStrategy::Flush).unwrap();

    storage.write(&sample_table()).unwrap();
    let empty = SlotTable::new().unwrap();
    storage.write(&empty).unwrap();

    assert_eq!(fs::metadata(&path).unwrap().len(), IMAGE_SIZE as u64);

    let mut loaded = sample_table();
    storage.load_into(&mut loaded).unwrap();
    assert_eq!(loaded, empty);
}

#[test]
fn test_write_with_sync_all() {
    let (_temp, path) = setup_temp_db();
    let mut storage = StorageFile::create(&path, SyncStrategy::SyncAll).unwrap();
    assert_eq!(storage.sync_strategy(), SyncStrategy::SyncAll);

    storage.write(&sample_table()).unwrap();

    assert_eq!(fs::metadata(&path).unwrap().len(), IMAGE_SIZE as u64);
}

// =============================================================================
// Failure Tests
// =============================================================================

#[test]
fn test_open_missing_file_is_io_error() {
    let (_temp, path) = setup_temp_db();

    let result = StorageFile::open(&path, SyncStrategy::Flush);

    assert!(matches!(result, Err(SlotError::Io(_))));
}

#[test]
fn test_load_truncated_file_is_corrupt_and_keeps_table() {
    let (_temp, path) = setup_temp_db();
    {
        let mut storage = StorageFile::create(&path, SyncStrategy::Flush).unwrap();
        storage.write(&SlotTable::new().unwrap()).unwrap();
    }
    let image = fs::read(&path).unwrap();
    fs::write(&path, &image[..IMAGE_SIZE - 1]).unwrap();

    let mut storage = StorageFile::open(&path, SyncStrategy::Flush).unwrap();
    let mut target = sample_table();
    let result = storage.load_into(&mut target);

    assert!(matches!(result, Err(SlotError::CorruptFile(_))));
    assert_eq!(target, sample_table());
}

#[test]
fn test_load_empty_file_is_corrupt() {
    let (_temp, path) = setup_temp_db();
    fs::write(&path, b"").unwrap();

    let mut storage = StorageFile::open(&path, SyncStrategy::Flush).unwrap();
    let mut target = SlotTable::new().unwrap();

    assert!(matches!(
        storage.load_into(&mut target),
        Err(SlotError::CorruptFile(_))
    ));
}

#[test]
fn test_load_after_create_without_write_is_corrupt() {
    let (_temp, path) = setup_temp_db();
    let mut storage = StorageFile::create(&path, SyncStrategy::Flush).unwrap();
    let mut target = SlotTable::new().unwrap();

    assert!(matches!(
        storage.load_into(&mut target),
        Err(SlotError::CorruptFile(_))
    ));
}

// =============================================================================
// Generated Tables
// =============================================================================

fn text_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "\\PC{0,250}",
        ("a{505,511}", "[é€😀]{1,3}").prop_map(|(head, tail)| head + &tail),
    ]
}

fn table_strategy() -> impl Strategy<Value = SlotTable> {
    let rows = (any::<bool>(), text_strategy(), text_strategy());
    prop::collection::vec(rows, CAPACITY).prop_map(|rows| {
        let mut table = SlotTable::new().unwrap();
        for (id, (occupied, name, email)) in rows.into_iter().enumerate() {
            if occupied {
                table.set(id, &name, &email).unwrap();
            }
        }
        table
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn test_write_then_load_any_table(table in table_strategy()) {
        let (_temp, path) = setup_temp_db();
        let mut storage = StorageFile::create(&path, SyncStrategy::Flush).unwrap();
        storage.write(&table).unwrap();
        let first = fs::read(&path).unwrap();

        let mut loaded = SlotTable::new().unwrap();
        storage.load_into(&mut loaded).unwrap();
        prop_assert_eq!(&loaded, &table);

        storage.write(&loaded).unwrap();
        prop_assert_eq!(fs::read(&path).unwrap(), first);
    }
}
