use super::common::setup;
use crate::error::ThemeError;
use crate::utils::{ FileStorage, KeyValueStorage, MemoryStorage, ThemeStore, THEME_STORAGE_KEY };

#[test]
fn memory_storage_clones_share_entries() {
    let storage = MemoryStorage::new();
    let other = storage.clone();

    other.set_item("k", "v").unwrap();

    assert_eq!(storage.get_item("k").unwrap().as_deref(), Some("v"));
    assert_eq!(storage.get_item("missing").unwrap(), None);
}

#[test]
fn file_storage_missing_file_reads_as_empty() {
    let dir = tempfile::tempdir().unwrap();
    let storage = FileStorage::new(dir.path().join("storage.json"));

    assert_eq!(storage.get_item(THEME_STORAGE_KEY).unwrap(), None);
    assert!(!storage.path().exists());
}

#[test]
fn file_storage_creates_parent_dirs_and_keeps_other_keys() {
    setup();
    let dir = tempfile::tempdir().unwrap();
    let storage = FileStorage::new(dir.path().join("nested").join("storage.json"));

    storage.set_item("other", "kept").unwrap();
    storage.set_item(THEME_STORAGE_KEY, "{}").unwrap();

    assert_eq!(storage.get_item("other").unwrap().as_deref(), Some("kept"));
    assert_eq!(storage.get_item(THEME_STORAGE_KEY).unwrap().as_deref(), Some("{}"));
}

#[test]
fn file_storage_persists_theme_across_reopen() {
    setup();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("storage.json");

    let mut store = ThemeStore::load(FileStorage::new(&path)).unwrap();
    store.toggle().unwrap();
    drop(store);

    let reopened = ThemeStore::load(FileStorage::new(&path)).unwrap();
    assert!(reopened.is_dark());
}

#[test]
fn file_storage_corrupt_file_is_a_read_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("storage.json");
    std::fs::write(&path, "not json").unwrap();

    let err = FileStorage::new(&path).get_item(THEME_STORAGE_KEY).unwrap_err();

    assert!(matches!(err, ThemeError::Read(_)), "got {:?}", err);
}
