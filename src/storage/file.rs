//! TOML-file preference backend.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::config::config_root_dir;
use crate::error::StorageError;

use super::PreferenceStorage;

/// Returns the default preferences path (`~/.config/folio/preferences.toml`).
pub fn default_preferences_path() -> Option<PathBuf> {
    config_root_dir().map(|dir| dir.join("folio").join("preferences.toml"))
}

/// Flat `key = "value"` TOML file.
///
/// Every call re-reads the file so concurrent CLI invocations observe each
/// other's writes; unrelated keys are preserved on rewrite. Writes go to a
/// sibling temp file and are renamed into place, so readers never see a
/// truncated file.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Storage at the default per-user location.
    pub fn at_default_path() -> Result<Self, StorageError> {
        default_preferences_path().map(Self::new).ok_or_else(|| {
            StorageError::Unavailable(
                "unable to resolve config root for preference storage".to_string(),
            )
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<BTreeMap<String, String>, StorageError> {
        match std::fs::read_to_string(&self.path) {
            Ok(text) => Ok(toml::from_str(&text)?),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(err) => Err(StorageError::Io(err)),
        }
    }

    fn write(&self, entries: &BTreeMap<String, String>) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let text = toml::to_string(entries)?;
        let tmp_path = self.path.with_extension("toml.tmp");
        std::fs::write(&tmp_path, text)?;
        std::fs::rename(&tmp_path, &self.path)?;
        Ok(())
    }
}

impl PreferenceStorage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.load()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self.load()?;
        entries.insert(key.to_string(), value.to_string());
        self.write(&entries)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut entries = self.load()?;
        if entries.remove(key).is_some() {
            self.write(&entries)?;
        }
        Ok(())
    }
}
