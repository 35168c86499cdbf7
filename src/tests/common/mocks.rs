use std::cell::Cell;

use crate::error::ThemeError;
use crate::utils::{ KeyValueStorage, MemoryStorage };

/// Reads from an inner `MemoryStorage` but refuses writes once `fail_writes` is set.
#[derive(Clone, Default)]
pub struct FlakyStorage {
    pub inner: MemoryStorage,
    pub fail_writes: std::rc::Rc<Cell<bool>>,
}

impl FlakyStorage {
    pub fn new(inner: MemoryStorage) -> Self {
        Self { inner, fail_writes: Default::default() }
    }
}

impl KeyValueStorage for FlakyStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, ThemeError> {
        self.inner.get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), ThemeError> {
        if self.fail_writes.get() {
            return Err(ThemeError::Write("quota exceeded".to_string()));
        }
        self.inner.set_item(key, value)
    }
}

/// Storage whose every access fails.
pub struct UnavailableStorage;

impl KeyValueStorage for UnavailableStorage {
    fn get_item(&self, _key: &str) -> Result<Option<String>, ThemeError> {
        Err(ThemeError::Read("access denied".to_string()))
    }

    fn set_item(&self, _key: &str, _value: &str) -> Result<(), ThemeError> {
        Err(ThemeError::Write("access denied".to_string()))
    }
}
