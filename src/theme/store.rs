// Persisted theme preference.
//
// Values are stored as the raw session id ("light"/"dark") so the entry stays
// readable by plain page scripts.

use crate::error::{StoreError, StoreResult};
use std::cell::RefCell;
use std::collections::HashMap;

pub trait ThemeStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>>;
    fn set(&self, key: &str, value: &str) -> StoreResult<()>;
}

impl<T: ThemeStore + ?Sized> ThemeStore for Box<T> {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        (**self).set(key, value)
    }
}

/// Browser `localStorage`. Only obtainable through [`LocalThemeStore::available`].
#[derive(Clone, Copy, Debug)]
pub struct LocalThemeStore(());

impl LocalThemeStore {
    /// Probes `localStorage`, which throws when storage is disabled.
    pub fn available() -> Option<Self> {
        let window = web_sys::window()?;
        window
            .local_storage()
            .ok()
            .flatten()
            .map(|_| Self(()))
    }

    fn raw() -> web_sys::Storage {
        use gloo_storage::{LocalStorage, Storage};
        // probed in `available`, so `raw` does not throw here
        LocalStorage::raw()
    }
}

impl ThemeStore for LocalThemeStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        Self::raw()
            .get_item(key)
            .map_err(|e| StoreError::Rejected(format!("{:?}", e)))
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        Self::raw()
            .set_item(key, value)
            .map_err(|e| StoreError::Rejected(format!("{:?}", e)))
    }
}

/// Session-only store, used when `localStorage` is disabled.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
    read_only: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::new();
        store
            .entries
            .borrow_mut()
            .insert(key.to_owned(), value.to_owned());
        store
    }

    /// Every write fails, as with a full or locked-down storage.
    pub fn read_only(mut self) -> Self {
        self.read_only = true;
        self
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl ThemeStore for MemoryStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        if self.read_only {
            return Err(StoreError::Rejected("quota exceeded".into()));
        }
        self.entries
            .borrow_mut()
            .insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use claim::{assert_err, assert_none, assert_ok, assert_ok_eq};

    #[test]
    fn memory_store_round_trips_a_key() {
        let store = MemoryStore::new();
        assert_ok_eq!(store.get("theme"), None);
        assert_ok!(store.set("theme", "dark"));
        assert_ok_eq!(store.get("theme"), Some("dark".to_owned()));
        assert_ok!(store.set("theme", "light"));
        assert_ok_eq!(store.get("theme"), Some("light".to_owned()));
    }

    #[test]
    fn read_only_store_rejects_writes() {
        let store = MemoryStore::with_entry("theme", "dark").read_only();
        assert_err!(store.set("theme", "light"));
        assert_ok_eq!(store.get("theme"), Some("dark".to_owned()));
        assert_none!(store.get("other").unwrap());
    }

    #[test]
    fn boxed_store_delegates() {
        let store: Box<dyn ThemeStore> = Box::new(MemoryStore::new());
        assert_ok!(store.set("theme", "light"));
        assert_ok_eq!(store.get("theme"), Some("light".to_owned()));
    }
}
