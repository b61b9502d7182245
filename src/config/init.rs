//! Config-path helpers and default config initialization.
//!
//! Writes use create-new semantics so concurrent bootstraps never clobber a
//! user's file.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::ConfigError;

use super::defaults::{CONFIG_DIR_NAME, CONFIG_FILE_NAME, DEFAULT_FOLIO_CONFIG_TEMPLATE};
use super::ConfigInitResult;

/// Return the default per-user config path (`~/.config/folio/folio.toml`).
pub fn default_global_config_path() -> Option<PathBuf> {
    config_root_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}

/// Initialize `~/.config/folio/folio.toml`.
///
/// - Without `force`, returns `AlreadyInitialized` if the file exists.
/// - With `force`, backs up the existing file next to it under a timestamped
///   name, then rewrites it from the compiled template.
pub fn initialize_default_global_config(force: bool) -> Result<ConfigInitResult, ConfigError> {
    let path = default_global_config_path().ok_or_else(|| {
        ConfigError::Invalid(
            "unable to resolve default config path for ~/.config/folio/folio.toml".to_string(),
        )
    })?;
    initialize_config_at_path(&path, force)
}

/// Initialize a config file at an explicit path, with optional force overwrite.
pub fn initialize_config_at_path(
    path: &Path,
    force: bool,
) -> Result<ConfigInitResult, ConfigError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    if path.exists() {
        if !force {
            return Ok(ConfigInitResult::AlreadyInitialized {
                path: path.to_path_buf(),
            });
        }
        let backup_path = timestamped_backup_path(path);
        std::fs::copy(path, &backup_path)?;
        std::fs::write(path, DEFAULT_FOLIO_CONFIG_TEMPLATE)?;
        return Ok(ConfigInitResult::Overwritten {
            path: path.to_path_buf(),
            backup_path,
        });
    }

    match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(mut file) => {
            file.write_all(DEFAULT_FOLIO_CONFIG_TEMPLATE.as_bytes())?;
            Ok(ConfigInitResult::Created {
                path: path.to_path_buf(),
            })
        }
        Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => {
            Ok(ConfigInitResult::AlreadyInitialized {
                path: path.to_path_buf(),
            })
        }
        Err(e) => Err(ConfigError::Io(e)),
    }
}

/// Build a non-colliding backup path in the same directory as `path`.
fn timestamped_backup_path(path: &Path) -> PathBuf {
    let file_name = path
        .file_name()
        .map(|value| value.to_string_lossy().into_owned())
        .unwrap_or_else(|| CONFIG_FILE_NAME.to_string());
    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();

    for suffix in 0..1000usize {
        let candidate_name = if suffix == 0 {
            format!("{file_name}.{timestamp}.bak")
        } else {
            format!("{file_name}.{timestamp}.{suffix}.bak")
        };
        let candidate = path.with_file_name(candidate_name);
        if !candidate.exists() {
            return candidate;
        }
    }

    path.with_file_name(format!(
        "{file_name}.{timestamp}.{}.bak",
        std::process::id()
    ))
}

/// Resolve the base config directory from env/home conventions.
pub fn config_root_dir() -> Option<PathBuf> {
    if let Ok(path) = std::env::var("XDG_CONFIG_HOME") {
        let trimmed = path.trim();
        if !trimmed.is_empty() {
            return Some(PathBuf::from(trimmed));
        }
    }
    dirs::home_dir()
        .map(|home| home.join(".config"))
        .or_else(dirs::config_dir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{FileConfig, PreferencesConfig, StorageConfig};
    use crate::testsupport::TestTempDir;

    #[test]
    fn creates_template_when_missing() {
        let tmp = TestTempDir::new("init-create");
        let path = tmp.child("folio/folio.toml");
        let result = initialize_config_at_path(&path, false).expect("init");
        assert_eq!(result, ConfigInitResult::Created { path: path.clone() });
        let text = std::fs::read_to_string(&path).expect("read");
        assert!(text.contains("[preferences]"));
    }

    #[test]
    fn leaves_existing_file_without_force() {
        let tmp = TestTempDir::new("init-existing");
        let path = tmp.write_text("folio.toml", "[display]\ncolor = false\n");
        let result = initialize_config_at_path(&path, false).expect("init");
        assert_eq!(result, ConfigInitResult::AlreadyInitialized { path: path.clone() });
        assert_eq!(
            std::fs::read_to_string(&path).expect("read"),
            "[display]\ncolor = false\n"
        );
    }

    #[test]
    fn force_backs_up_then_overwrites() {
        let tmp = TestTempDir::new("init-force");
        let path = tmp.write_text("folio.toml", "old");
        let result = initialize_config_at_path(&path, true).expect("init");
        let backup_path = match result {
            ConfigInitResult::Overwritten { backup_path, .. } => backup_path,
            other => panic!("expected overwrite, got {other:?}"),
        };
        assert_eq!(std::fs::read_to_string(backup_path).expect("backup"), "old");
        assert_eq!(
            std::fs::read_to_string(&path).expect("read"),
            DEFAULT_FOLIO_CONFIG_TEMPLATE
        );
    }

    #[test]
    fn template_parses_to_defaults() {
        let parsed: FileConfig =
            toml::from_str(DEFAULT_FOLIO_CONFIG_TEMPLATE).expect("template parses");
        assert_eq!(parsed.preferences, PreferencesConfig::default());
        assert_eq!(parsed.storage, StorageConfig::default());
    }
}
