//! Shared test fixtures for storage, config, and store test modules.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

static TEST_DIR_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Temporary directory fixture with best-effort cleanup.
#[derive(Debug)]
pub struct TestTempDir {
    path: PathBuf,
}

impl TestTempDir {
    /// Create a unique temporary directory with a readable prefix.
    pub fn new(prefix: &str) -> Self {
        let suffix = TEST_DIR_COUNTER.fetch_add(1, Ordering::Relaxed);
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis();
        let dir = std::env::temp_dir().join(format!(
            "folio-{prefix}-{}-{millis}-{suffix}",
            std::process::id()
        ));
        fs::create_dir_all(&dir).expect("failed to create temporary fixture directory");
        Self { path: dir }
    }

    /// Root directory path for this fixture.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Build a child path under the fixture root.
    pub fn child(&self, relative: &str) -> PathBuf {
        self.path.join(relative)
    }

    /// Write UTF-8 text to a child path, creating parent directories as needed.
    pub fn write_text(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.child(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("failed to create parent directories for fixture");
        }
        fs::write(&path, content).expect("failed to write fixture file");
        path
    }
}

impl Drop for TestTempDir {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.path);
    }
}

/// Preferences-file text holding the two default storage entries.
pub fn preferences_fixture(theme: &str, color: &str) -> String {
    format!("ui-color = \"{color}\"\nui-theme = \"{theme}\"\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{FileStorage, PreferenceStorage};

    #[test]
    fn temp_dir_fixture_writes_and_resolves_paths() {
        let fixture = TestTempDir::new("fixture");
        let file = fixture.write_text("nested/file.txt", "hello");
        assert!(file.starts_with(fixture.path()));
        assert_eq!(fs::read_to_string(file).unwrap(), "hello");
    }

    #[test]
    fn temp_dir_is_removed_on_drop() {
        let path = {
            let fixture = TestTempDir::new("drop");
            fixture.path().to_path_buf()
        };
        assert!(!path.exists());
    }

    #[test]
    fn preferences_fixture_is_readable_by_file_storage() {
        let fixture = TestTempDir::new("prefs-fixture");
        let path = fixture.write_text("preferences.toml", &preferences_fixture("dark", "#f00"));
        let storage = FileStorage::new(path);
        assert_eq!(storage.get("ui-theme").unwrap().as_deref(), Some("dark"));
        assert_eq!(storage.get("ui-color").unwrap().as_deref(), Some("#f00"));
    }
}
