use std::path::PathBuf;

pub const STORAGE_PATH_VAR: &str = "DATARA_STORAGE_PATH";
const DEFAULT_STORAGE_PATH: &str = ".datara/storage.json";

/// Location of the file-backed preference store used by native builds.
pub fn get_storage_path() -> PathBuf {
    let path = std::env::var(STORAGE_PATH_VAR).unwrap_or_else(|_| {
        log::warn!("{} not set, using {}", STORAGE_PATH_VAR, DEFAULT_STORAGE_PATH);
        DEFAULT_STORAGE_PATH.to_string()
    });

    log::info!("Using preference storage at {}", path);
    PathBuf::from(path)
}
