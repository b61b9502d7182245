//! Durable key-value storage for user preferences.
//!
//! The store only ever touches two string entries, so backends expose a tiny
//! string-keyed interface rather than a typed schema.

mod file;
mod memory;

pub use file::{default_preferences_path, FileStorage};
pub use memory::MemoryStorage;

use crate::error::StorageError;

/// Per-user persistent string storage surviving restarts.
pub trait PreferenceStorage: Send + Sync {
    /// Read one entry; `Ok(None)` when absent.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    /// Write one entry, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    /// Delete one entry; deleting a missing key is not an error.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

impl<S: PreferenceStorage + ?Sized> PreferenceStorage for std::sync::Arc<S> {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        (**self).remove(key)
    }
}

/// Backend that always fails; the store degrades to in-memory state.
#[derive(Debug, Clone, Default)]
pub struct UnavailableStorage {
    reason: String,
}

impl UnavailableStorage {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    fn err(&self) -> StorageError {
        StorageError::Unavailable(self.reason.clone())
    }
}

impl PreferenceStorage for UnavailableStorage {
    fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(self.err())
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(self.err())
    }

    fn remove(&self, _key: &str) -> Result<(), StorageError> {
        Err(self.err())
    }
}
