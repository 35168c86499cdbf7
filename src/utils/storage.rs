use std::cell::RefCell;
use std::collections::HashMap;
use std::path::{ Path, PathBuf };
use std::rc::Rc;

use crate::error::ThemeError;

/// Synchronous string key-value storage, the shape of `window.localStorage`.
pub trait KeyValueStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, ThemeError>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), ThemeError>;
}

#[cfg(target_arch = "wasm32")]
pub type PlatformStorage = LocalStorage;

#[cfg(not(target_arch = "wasm32"))]
pub type PlatformStorage = FileStorage;

/// Browser `localStorage` for the current origin.
#[cfg(target_arch = "wasm32")]
pub struct LocalStorage {
    storage: web_sys::Storage,
}

#[cfg(target_arch = "wasm32")]
impl LocalStorage {
    pub fn open() -> Result<Self, ThemeError> {
        let window = web_sys::window()
            .ok_or_else(|| ThemeError::StorageUnavailable("no window".to_string()))?;
        let storage = window
            .local_storage()
            .map_err(|e| ThemeError::StorageUnavailable(js_message(&e)))?
            .ok_or_else(|| ThemeError::StorageUnavailable("localStorage disabled".to_string()))?;
        Ok(Self { storage })
    }
}

#[cfg(target_arch = "wasm32")]
impl KeyValueStorage for LocalStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, ThemeError> {
        self.storage.get_item(key).map_err(|e| ThemeError::Read(js_message(&e)))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), ThemeError> {
        self.storage.set_item(key, value).map_err(|e| ThemeError::Write(js_message(&e)))
    }
}

#[cfg(target_arch = "wasm32")]
fn js_message(value: &wasm_bindgen::JsValue) -> String {
    use wasm_bindgen::JsCast;

    value
        .dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .or_else(|| value.as_string())
        .unwrap_or_else(|| format!("{:?}", value))
}

/// A JSON object of string keys to string values kept in one file.
///
/// Every write rewrites the whole file, so the file always matches the
/// last successful `set_item`.
#[derive(Clone, Debug)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn open() -> Result<Self, ThemeError> {
        Ok(Self::new(crate::configs::get_storage_path()))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<HashMap<String, String>, ThemeError> {
        if !self.path.exists() {
            return Ok(HashMap::new());
        }
        let raw = std::fs::read_to_string(&self.path)?;
        serde_json::from_str(&raw)
            .map_err(|e| ThemeError::Read(format!("{}: {}", self.path.display(), e)))
    }
}

impl KeyValueStorage for FileStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, ThemeError> {
        Ok(self.load()?.remove(key))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), ThemeError> {
        let mut entries = self.load()?;
        entries.insert(key.to_string(), value.to_string());

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let encoded = serde_json::to_string_pretty(&entries).map_err(|e| ThemeError::Encode(e.to_string()))?;
        std::fs::write(&self.path, encoded).map_err(|e| ThemeError::Write(e.to_string()))
    }
}

/// In-process storage. Clones share the same entries.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_item(key: &str, value: &str) -> Self {
        let storage = Self::new();
        storage.entries.borrow_mut().insert(key.to_string(), value.to_string());
        storage
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, ThemeError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), ThemeError> {
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}
