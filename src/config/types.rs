//! Configuration data model.
//!
//! Struct definitions plus default values; parsing and precedence live in
//! `config::loader` and `config::sources`.

use serde::Deserialize;
use std::path::PathBuf;

use crate::theme::{DisplayMode, Rgb};

use super::defaults::{DEFAULT_COLOR_STORAGE_KEY, DEFAULT_THEME_STORAGE_KEY};

/// Top-level runtime configuration.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    pub preferences: PreferencesConfig,
    pub storage: StorageConfig,
    pub display: DisplayConfig,
}

/// Values used when storage holds nothing (or nothing valid).
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct PreferencesConfig {
    pub default_mode: DisplayMode,
    pub default_color: Rgb,
}

/// Durable-storage key names and location.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct StorageConfig {
    /// Entry holding `light` / `dark` / `system`.
    #[serde(alias = "storage_key")]
    pub theme_key: String,
    /// Entry holding the accent hex string.
    #[serde(alias = "color_storage_key")]
    pub color_key: String,
    /// Preferences file; `~/.config/folio/preferences.toml` when unset.
    pub path: Option<PathBuf>,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            theme_key: DEFAULT_THEME_STORAGE_KEY.into(),
            color_key: DEFAULT_COLOR_STORAGE_KEY.into(),
            path: None,
        }
    }
}

/// Terminal rendering preferences.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct DisplayConfig {
    pub color: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self { color: true }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct FileConfig {
    pub(super) preferences: PreferencesConfig,
    pub(super) storage: StorageConfig,
    pub(super) display: DisplayConfig,
}

/// Where the effective config text came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Explicit `--config` path.
    Explicit(PathBuf),
    /// Local `./folio.toml`.
    Local,
    /// `~/.config/folio/folio.toml`.
    Global(PathBuf),
    /// No file found; built-in defaults.
    BuiltInDefaults,
}

impl ConfigSource {
    /// Short human-readable label.
    pub fn describe(&self) -> String {
        match self {
            Self::Explicit(path) | Self::Global(path) => path.display().to_string(),
            Self::Local => "./folio.toml".to_string(),
            Self::BuiltInDefaults => "built-in defaults".to_string(),
        }
    }
}

/// Configuration payload plus where it was loaded from.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: Config,
    pub source: ConfigSource,
}

/// Result of explicit config initialization (`folio init`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigInitResult {
    Created { path: PathBuf },
    AlreadyInitialized { path: PathBuf },
    Overwritten { path: PathBuf, backup_path: PathBuf },
}
