//! Host color-scheme detection used to resolve `system` mode.

use std::process::Command;
use std::sync::RwLock;

use super::mode::EffectiveMode;

/// Environment variable that pins the host scheme (`light` or `dark`).
pub const COLOR_SCHEME_ENV: &str = "FOLIO_COLOR_SCHEME";

/// Source of the host environment's preferred color scheme.
pub trait SchemeProbe: Send + Sync {
    /// Scheme reported right now.
    fn current(&self) -> EffectiveMode;
}

/// Probe backed by the running platform.
///
/// `FOLIO_COLOR_SCHEME` wins when set to a valid value; otherwise the desktop
/// settings are queried, defaulting to light when nothing answers.
#[derive(Debug, Clone, Copy, Default)]
pub struct HostScheme;

impl SchemeProbe for HostScheme {
    fn current(&self) -> EffectiveMode {
        let env_value = std::env::var(COLOR_SCHEME_ENV).ok();
        if let Some(mode) = scheme_from_env_value(env_value.as_deref()) {
            return mode;
        }
        if detect_platform_dark() {
            EffectiveMode::Dark
        } else {
            EffectiveMode::Light
        }
    }
}

/// Probe with a caller-controlled answer.
#[derive(Debug, Default)]
pub struct FixedScheme {
    mode: RwLock<EffectiveMode>,
}

impl FixedScheme {
    pub fn new(mode: EffectiveMode) -> Self {
        Self {
            mode: RwLock::new(mode),
        }
    }

    /// Change what subsequent `current()` calls report.
    pub fn set(&self, mode: EffectiveMode) {
        if let Ok(mut guard) = self.mode.write() {
            *guard = mode;
        }
    }
}

impl SchemeProbe for FixedScheme {
    fn current(&self) -> EffectiveMode {
        self.mode
            .read()
            .map(|guard| *guard)
            .unwrap_or_default()
    }
}

impl<P: SchemeProbe + ?Sized> SchemeProbe for std::sync::Arc<P> {
    fn current(&self) -> EffectiveMode {
        (**self).current()
    }
}

fn scheme_from_env_value(value: Option<&str>) -> Option<EffectiveMode> {
    let value = value?.trim();
    if value.is_empty() {
        return None;
    }
    match value.parse() {
        Ok(mode) => Some(mode),
        Err(err) => {
            tracing::warn!("ignoring {COLOR_SCHEME_ENV}: {err}");
            None
        }
    }
}

#[cfg(target_os = "linux")]
fn detect_platform_dark() -> bool {
    if let Some(scheme) = run_probe("gsettings", &["get", "org.gnome.desktop.interface", "color-scheme"]) {
        if scheme.contains("prefer-dark") {
            return true;
        }
        if scheme.contains("prefer-light") {
            return false;
        }
    }
    run_probe("gsettings", &["get", "org.gnome.desktop.interface", "gtk-theme"])
        .is_some_and(|theme| theme.to_ascii_lowercase().contains("dark"))
}

#[cfg(target_os = "macos")]
fn detect_platform_dark() -> bool {
    // The key is absent (non-zero exit) in light mode.
    run_probe("defaults", &["read", "-g", "AppleInterfaceStyle"])
        .is_some_and(|style| style.to_ascii_lowercase().contains("dark"))
}

#[cfg(target_os = "windows")]
fn detect_platform_dark() -> bool {
    run_probe(
        "reg",
        &[
            "query",
            r"HKCU\Software\Microsoft\Windows\CurrentVersion\Themes\Personalize",
            "/v",
            "AppsUseLightTheme",
        ],
    )
    .is_some_and(|out| parse_apps_use_light_theme(&out) == Some(false))
}

#[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
fn detect_platform_dark() -> bool {
    false
}

/// Run a settings probe and return trimmed stdout on success.
#[allow(dead_code)]
fn run_probe(program: &str, args: &[&str]) -> Option<String> {
    let output = Command::new(program).args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    let text = String::from_utf8(output.stdout).ok()?;
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        tracing::debug!(program, probe = trimmed, "host scheme probe");
        Some(trimmed.to_string())
    }
}

/// Parse `reg query` output for `AppsUseLightTheme` (`0x0` means dark).
#[allow(dead_code)]
fn parse_apps_use_light_theme(output: &str) -> Option<bool> {
    output
        .lines()
        .find(|line| line.contains("AppsUseLightTheme"))
        .and_then(|line| line.split_whitespace().last())
        .and_then(|value| u32::from_str_radix(value.trim_start_matches("0x"), 16).ok())
        .map(|value| value != 0)
}
