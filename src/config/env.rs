//! Environment variable overrides.

use std::path::PathBuf;

use crate::error::ConfigError;
use crate::theme::{DisplayMode, Rgb};

use super::Config;

pub const ENV_DEFAULT_MODE: &str = "FOLIO_DEFAULT_MODE";
pub const ENV_DEFAULT_COLOR: &str = "FOLIO_DEFAULT_COLOR";
pub const ENV_STORAGE_PATH: &str = "FOLIO_STORAGE_PATH";

/// Apply `FOLIO_*` overrides on top of file-derived config.
pub(super) fn apply_runtime_env_overrides<FEnv>(
    config: &mut Config,
    env_lookup: &FEnv,
) -> Result<(), ConfigError>
where
    FEnv: Fn(&str) -> Option<String>,
{
    if let Some(mode) = non_empty(env_lookup, ENV_DEFAULT_MODE) {
        config.preferences.default_mode = mode.parse::<DisplayMode>().map_err(|err| {
            ConfigError::Invalid(format!("invalid {ENV_DEFAULT_MODE} value: {err}"))
        })?;
    }
    if let Some(color) = non_empty(env_lookup, ENV_DEFAULT_COLOR) {
        config.preferences.default_color = Rgb::from_hex(&color).map_err(|err| {
            ConfigError::Invalid(format!("invalid {ENV_DEFAULT_COLOR} value: {err}"))
        })?;
    }
    if let Some(path) = non_empty(env_lookup, ENV_STORAGE_PATH) {
        config.storage.path = Some(PathBuf::from(path));
    }
    Ok(())
}

fn non_empty<FEnv>(env_lookup: &FEnv, name: &str) -> Option<String>
where
    FEnv: Fn(&str) -> Option<String>,
{
    env_lookup(name)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
