//! Preferences survive a restart when backed by the on-disk file store.
//!
//! Each test works in its own temp directory and loads the shipped config
//! template through `--config`-style explicit paths.

use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use folio::config::{load_config, Config, ENV_DEFAULT_COLOR, ENV_DEFAULT_MODE, ENV_STORAGE_PATH};
use folio::storage::{FileStorage, PreferenceStorage};
use folio::store::PreferenceStore;
use folio::theme::{DisplayMode, EffectiveMode, FixedScheme, Rgb};

const TEMPLATE_FOLIO_TOML: &str = include_str!("../src/templates/folio.toml");

#[test]
fn preferences_rehydrate_after_restart() {
    let Some(config) = template_config() else {
        return;
    };
    let dir = temp_dir("rehydrate");
    let prefs = dir.join("preferences.toml");

    {
        let mut store = PreferenceStore::open(
            &config,
            FileStorage::new(&prefs),
            FixedScheme::new(EffectiveMode::Light),
        );
        store.set_display_mode(DisplayMode::Dark);
        store.set_accent_color("#ef4444").expect("valid color");
    }

    let text = fs::read_to_string(&prefs).expect("preferences written");
    assert!(text.contains("ui-theme = \"dark\""), "{text}");
    assert!(text.contains("ui-color = \"#ef4444\""), "{text}");

    let reopened = PreferenceStore::open(
        &config,
        FileStorage::new(&prefs),
        FixedScheme::new(EffectiveMode::Light),
    );
    assert_eq!(reopened.state().display_mode, DisplayMode::Dark);
    assert_eq!(reopened.state().accent_color, Rgb::new(0xef, 0x44, 0x44));
    assert_eq!(reopened.effective_mode(), EffectiveMode::Dark);
    assert_eq!(
        reopened.vars().get("--primary"),
        Some("rgb(239 68 68 / 1)")
    );

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn reload_picks_up_another_writer() {
    let Some(config) = template_config() else {
        return;
    };
    let dir = temp_dir("reload");
    let prefs = dir.join("preferences.toml");
    let scheme = Arc::new(FixedScheme::new(EffectiveMode::Dark));

    let mut watcher = PreferenceStore::open(&config, FileStorage::new(&prefs), Arc::clone(&scheme));
    assert_eq!(watcher.state().display_mode, DisplayMode::System);
    assert_eq!(watcher.effective_mode(), EffectiveMode::Dark);
    let mut updates = watcher.subscribe();

    let mut writer = PreferenceStore::open(&config, FileStorage::new(&prefs), Arc::clone(&scheme));
    writer.set_display_mode(DisplayMode::Light);

    assert!(watcher.reload());
    assert!(updates.has_changed().expect("publisher alive"));
    let snapshot = updates.borrow_and_update().clone();
    assert_eq!(snapshot.state.display_mode, DisplayMode::Light);
    assert_eq!(snapshot.vars.get("--primary"), Some("rgb(59 130 246 / 0.9)"));

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn corrupt_stored_values_fall_back_to_defaults() {
    let Some(config) = template_config() else {
        return;
    };
    let dir = temp_dir("corrupt");
    let prefs = dir.join("preferences.toml");
    let storage = FileStorage::new(&prefs);
    storage.set("ui-theme", "sepia").expect("write");
    storage.set("ui-color", "not-a-color").expect("write");

    let store = PreferenceStore::open(&config, storage, FixedScheme::new(EffectiveMode::Light));
    assert_eq!(store.state().display_mode, DisplayMode::System);
    assert_eq!(store.state().accent_color, Rgb::new(0x3b, 0x82, 0xf6));

    let _ = fs::remove_dir_all(&dir);
}

/// Load the shipped template; `None` when `FOLIO_*` overrides would skew it.
fn template_config() -> Option<Config> {
    let blocked: Vec<&str> = [ENV_DEFAULT_MODE, ENV_DEFAULT_COLOR, ENV_STORAGE_PATH]
        .into_iter()
        .filter(|key| {
            std::env::var(key)
                .ok()
                .is_some_and(|v| !v.trim().is_empty())
        })
        .collect();
    if !blocked.is_empty() {
        eprintln!("skipping: unset {} to run", blocked.join(", "));
        return None;
    }

    let dir = temp_dir("config");
    let path = dir.join("folio.toml");
    fs::write(&path, TEMPLATE_FOLIO_TOML).expect("write template");
    let config = load_config(Some(path.to_string_lossy().as_ref())).expect("load template config");
    let _ = fs::remove_dir_all(&dir);
    Some(config)
}

fn temp_dir(label: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    let dir = std::env::temp_dir().join(format!(
        "folio-it-{label}-{}-{nanos}",
        std::process::id()
    ));
    fs::create_dir_all(&dir).expect("create temp dir");
    dir
}
