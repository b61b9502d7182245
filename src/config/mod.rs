//! Configuration loading from TOML files and environment variables.
//!
//! Config is loaded in this order of precedence (highest wins):
//! 1. Environment variables (`FOLIO_DEFAULT_MODE`, `FOLIO_DEFAULT_COLOR`,
//!    `FOLIO_STORAGE_PATH`)
//! 2. TOML file specified via --config CLI flag
//! 3. ./folio.toml in the current directory
//! 4. $XDG_CONFIG_HOME/folio/folio.toml (or ~/.config/folio/folio.toml)
//! 5. Built-in defaults

mod defaults;
mod env;
mod init;
mod loader;
mod sources;
mod types;

pub use defaults::{DEFAULT_COLOR_STORAGE_KEY, DEFAULT_THEME_STORAGE_KEY};
pub use env::{ENV_DEFAULT_COLOR, ENV_DEFAULT_MODE, ENV_STORAGE_PATH};
pub use init::{
    config_root_dir, default_global_config_path, initialize_config_at_path,
    initialize_default_global_config,
};
pub use loader::{load_config, load_config_with_source};
use types::FileConfig;
pub use types::{
    Config, ConfigInitResult, ConfigSource, DisplayConfig, LoadedConfig, PreferencesConfig,
    StorageConfig,
};
