//! Top-level config loading pipeline.

use std::path::{Path, PathBuf};

use crate::error::ConfigError;

use super::env::apply_runtime_env_overrides;
use super::init::config_root_dir;
use super::sources::read_config_text_with_sources;
use super::{Config, FileConfig, LoadedConfig};

/// Load configuration from disk and environment.
///
/// `path_override` is an explicit config file path (from --config flag).
pub fn load_config(path_override: Option<&str>) -> Result<Config, ConfigError> {
    Ok(load_config_with_source(path_override)?.config)
}

/// Load configuration and report which source supplied it.
pub fn load_config_with_source(path_override: Option<&str>) -> Result<LoadedConfig, ConfigError> {
    load_config_from_sources(
        path_override,
        |path| std::fs::read_to_string(path),
        |name| std::env::var(name).ok(),
        config_root_dir,
    )
}

pub(super) fn load_config_from_sources<FRead, FEnv, FRoot>(
    path_override: Option<&str>,
    read_file: FRead,
    env_lookup: FEnv,
    config_root: FRoot,
) -> Result<LoadedConfig, ConfigError>
where
    FRead: Fn(&Path) -> Result<String, std::io::Error>,
    FEnv: Fn(&str) -> Option<String>,
    FRoot: Fn() -> Option<PathBuf>,
{
    let (config_text, source) =
        read_config_text_with_sources(path_override, &read_file, &config_root)?;
    let parsed: FileConfig = toml::from_str(&config_text)?;
    let mut config = Config {
        preferences: parsed.preferences,
        storage: parsed.storage,
        display: parsed.display,
    };
    apply_runtime_env_overrides(&mut config, &env_lookup)?;
    validate(&mut config)?;
    tracing::debug!(source = %source.describe(), "configuration loaded");

    Ok(LoadedConfig { config, source })
}

/// Normalize storage keys and reject configurations that cannot work.
fn validate(config: &mut Config) -> Result<(), ConfigError> {
    config.storage.theme_key = config.storage.theme_key.trim().to_string();
    config.storage.color_key = config.storage.color_key.trim().to_string();
    if config.storage.theme_key.is_empty() || config.storage.color_key.is_empty() {
        return Err(ConfigError::Invalid(
            "storage.theme_key and storage.color_key must not be empty".to_string(),
        ));
    }
    if config.storage.theme_key == config.storage.color_key {
        return Err(ConfigError::Invalid(format!(
            "storage.theme_key and storage.color_key must differ (both `{}`)",
            config.storage.theme_key
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigSource;
    use crate::theme::{DisplayMode, Rgb, DEFAULT_ACCENT};

    fn load_text(text: &str, env: &[(&str, &str)]) -> Result<LoadedConfig, ConfigError> {
        let owned = text.to_string();
        let env: Vec<(String, String)> = env
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        load_config_from_sources(
            Some("/virtual/folio.toml"),
            move |_| Ok(owned.clone()),
            move |name| {
                env.iter()
                    .find(|(k, _)| k == name)
                    .map(|(_, v)| v.clone())
            },
            || None,
        )
    }

    #[test]
    fn empty_file_yields_defaults() {
        let loaded = load_text("", &[]).expect("load");
        assert_eq!(loaded.config, Config::default());
        assert_eq!(loaded.config.storage.theme_key, "ui-theme");
        assert_eq!(loaded.config.storage.color_key, "ui-color");
        assert_eq!(loaded.config.preferences.default_mode, DisplayMode::System);
        assert_eq!(loaded.config.preferences.default_color, DEFAULT_ACCENT);
        assert_eq!(
            loaded.source,
            ConfigSource::Explicit(PathBuf::from("/virtual/folio.toml"))
        );
    }

    #[test]
    fn parses_all_sections() {
        let text = r##"
[preferences]
default_mode = "dark"
default_color = "#f97316"

[storage]
theme_key = "portfolio-theme"
path = "/data/prefs.toml"

[display]
color = false
"##;
        let config = load_text(text, &[]).expect("load").config;
        assert_eq!(config.preferences.default_mode, DisplayMode::Dark);
        assert_eq!(config.preferences.default_color, Rgb::new(0xf9, 0x73, 0x16));
        assert_eq!(config.storage.theme_key, "portfolio-theme");
        assert_eq!(config.storage.color_key, "ui-color");
        assert_eq!(config.storage.path, Some(PathBuf::from("/data/prefs.toml")));
        assert!(!config.display.color);
    }

    #[test]
    fn accepts_provider_style_key_aliases() {
        let text = "[storage]\nstorage_key = \"a\"\ncolor_storage_key = \"b\"\n";
        let config = load_text(text, &[]).expect("load").config;
        assert_eq!(config.storage.theme_key, "a");
        assert_eq!(config.storage.color_key, "b");
    }

    #[test]
    fn rejects_invalid_default_color() {
        let err = load_text("[preferences]\ndefault_color = \"#12\"\n", &[]).expect_err("bad");
        assert!(matches!(err, ConfigError::Toml(_)), "got: {err}");
    }

    #[test]
    fn rejects_colliding_storage_keys() {
        let text = "[storage]\ntheme_key = \"same\"\ncolor_key = \"same\"\n";
        let err = load_text(text, &[]).expect_err("must fail");
        assert!(err.to_string().contains("must differ"), "got: {err}");
    }

    #[test]
    fn env_overrides_file_values() {
        let text = "[preferences]\ndefault_mode = \"light\"\n";
        let config = load_text(text, &[("FOLIO_DEFAULT_MODE", "system")])
            .expect("load")
            .config;
        assert_eq!(config.preferences.default_mode, DisplayMode::System);
    }
}
