//! Key-value storage seam.
//!
//! The stores never talk to the browser directly; they go through
//! [`KeyValueStore`] so tests can inject [`MemoryStore`] and the wasm
//! build can plug in localStorage.

use std::cell::RefCell;
use std::collections::HashMap;
use thiserror::Error;

#[cfg(target_arch = "wasm32")]
pub mod local;
#[cfg(target_arch = "wasm32")]
pub use local::LocalStorage;

/// Failure talking to the underlying key-value backend.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage backend is not available")]
    Unavailable,
    #[error("storage backend error: {0}")]
    Backend(String),
}

/// Opaque persistent string-keyed store with synchronous access, scoped
/// to one browser origin.
///
/// Methods take `&self`: backends are shared between stores via `Rc` and
/// manage their own interior mutability, mirroring how localStorage is
/// ambient shared state in the browser.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// In-memory backend for tests and non-browser targets.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}
