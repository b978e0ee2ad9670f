use std::fs;

use roadmap_store::{ensure_dir, AtomicFileWriter, FileStore, KeyValueStore, StoreError};
use tempfile::TempDir;

#[test]
fn creates_missing_data_dir() {
    let temp = TempDir::new().unwrap();
    let new_dir = temp.path().join("data");
    assert!(!new_dir.exists());
    ensure_dir(&new_dir).unwrap();
    assert!(new_dir.is_dir());
}

#[test]
fn atomic_write_replaces_existing() {
    let temp = TempDir::new().unwrap();
    let writer = AtomicFileWriter::new(temp.path().to_path_buf());

    let first = writer.write("record.json", "hello").unwrap();
    assert_eq!(first.file_name().unwrap(), "record.json");
    assert_eq!(fs::read_to_string(&first).unwrap(), "hello");

    let second = writer.write("record.json", "world").unwrap();
    assert_eq!(first, second);
    assert_eq!(fs::read_to_string(&second).unwrap(), "world");
}

#[test]
fn no_partial_file_when_dir_is_a_file() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("not_a_dir");
    fs::write(&file_path, "x").unwrap();

    let store = FileStore::new(file_path.clone());
    assert!(store.set("fpc_theme", "dark").is_err());
    assert!(!file_path.with_file_name("fpc_theme.json").exists());
}

#[test]
fn file_store_get_set_delete() {
    let temp = TempDir::new().unwrap();
    let store = FileStore::new(temp.path().join("kv"));

    assert_eq!(store.get("fpc_theme").unwrap(), None);
    store.set("fpc_theme", "light").unwrap();
    assert_eq!(store.get("fpc_theme").unwrap().as_deref(), Some("light"));
    assert!(temp.path().join("kv").join("fpc_theme.json").is_file());

    store.delete("fpc_theme").unwrap();
    assert_eq!(store.get("fpc_theme").unwrap(), None);
    // Deleting twice is fine.
    store.delete("fpc_theme").unwrap();
}

#[test]
fn file_store_rejects_unsafe_keys() {
    let temp = TempDir::new().unwrap();
    let store = FileStore::new(temp.path());

    for key in ["../escape", "a/b", "", ".hidden", "with space"] {
        assert!(matches!(store.set(key, "x"), Err(StoreError::InvalidKey(_))));
    }
}
