//! Preference store: single source of truth for display mode and accent color.
//!
//! The store hydrates from durable storage once, resolves `system` mode
//! through a [`SchemeProbe`], derives presentation variables, and publishes a
//! fresh [`PreferenceSnapshot`] to subscribers after every effective change.
//! Storage failures never surface to callers; they are logged and the
//! in-memory state stays authoritative for the session.

use serde::Serialize;
use tokio::sync::watch;

use crate::config::{Config, StorageConfig};
use crate::error::ColorError;
use crate::storage::PreferenceStorage;
use crate::theme::{DisplayMode, EffectiveMode, PresentationVars, Rgb, SchemeProbe};

/// User preferences as stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PreferenceState {
    pub display_mode: DisplayMode,
    pub accent_color: Rgb,
}

/// What subscribers observe: stored state plus its rendered resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PreferenceSnapshot {
    pub state: PreferenceState,
    pub effective: EffectiveMode,
    pub vars: PresentationVars,
}

impl PreferenceSnapshot {
    fn build(state: PreferenceState, effective: EffectiveMode) -> Self {
        Self {
            state,
            effective,
            vars: PresentationVars::derive(state.accent_color, effective),
        }
    }
}

/// Shared preference state with controlled mutation and broadcast-on-change.
pub struct PreferenceStore {
    storage: Box<dyn PreferenceStorage>,
    probe: Box<dyn SchemeProbe>,
    keys: StorageConfig,
    defaults: PreferenceState,
    snapshot: PreferenceSnapshot,
    publisher: watch::Sender<PreferenceSnapshot>,
}

impl std::fmt::Debug for PreferenceStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PreferenceStore")
            .field("keys", &self.keys)
            .field("snapshot", &self.snapshot)
            .finish_non_exhaustive()
    }
}

impl PreferenceStore {
    /// Create the store, seeding state from `storage` or `config` defaults.
    pub fn open<S, P>(config: &Config, storage: S, probe: P) -> Self
    where
        S: PreferenceStorage + 'static,
        P: SchemeProbe + 'static,
    {
        let defaults = PreferenceState {
            display_mode: config.preferences.default_mode,
            accent_color: config.preferences.default_color,
        };
        let keys = config.storage.clone();
        let state = hydrate(&storage, &keys, defaults, defaults);
        let effective = state.display_mode.resolve(probe.current());
        let snapshot = PreferenceSnapshot::build(state, effective);
        let (publisher, _) = watch::channel(snapshot.clone());
        tracing::debug!(
            mode = %state.display_mode,
            effective = %effective,
            color = %state.accent_color,
            "preferences hydrated"
        );

        Self {
            storage: Box::new(storage),
            probe: Box::new(probe),
            keys,
            defaults,
            snapshot,
            publisher,
        }
    }

    /// Current stored preferences.
    pub fn state(&self) -> PreferenceState {
        self.snapshot.state
    }

    pub fn effective_mode(&self) -> EffectiveMode {
        self.snapshot.effective
    }

    pub fn vars(&self) -> &PresentationVars {
        &self.snapshot.vars
    }

    pub fn snapshot(&self) -> PreferenceSnapshot {
        self.snapshot.clone()
    }

    /// Receiver that always holds the latest snapshot.
    pub fn subscribe(&self) -> watch::Receiver<PreferenceSnapshot> {
        self.publisher.subscribe()
    }

    /// Persist and apply a new display mode.
    pub fn set_display_mode(&mut self, mode: DisplayMode) {
        self.persist(&self.keys.theme_key, mode.as_str());
        let state = PreferenceState {
            display_mode: mode,
            ..self.snapshot.state
        };
        self.apply(state);
    }

    /// Validate, persist, and apply a new accent color.
    ///
    /// Malformed input leaves both state and storage untouched.
    pub fn set_accent_color(&mut self, hex: &str) -> Result<(), ColorError> {
        let color = Rgb::from_hex(hex)?;
        self.set_accent_rgb(color);
        Ok(())
    }

    /// Persist and apply an already-decoded accent color.
    pub fn set_accent_rgb(&mut self, color: Rgb) {
        self.persist(&self.keys.color_key, &color.to_hex());
        let state = PreferenceState {
            accent_color: color,
            ..self.snapshot.state
        };
        self.apply(state);
    }

    /// Flip between light and dark; `system` toggles to light.
    pub fn toggle_display_mode(&mut self) -> DisplayMode {
        let next = self.snapshot.state.display_mode.toggled();
        self.set_display_mode(next);
        next
    }

    /// Re-read the host scheme; returns `true` when the effective mode changed.
    ///
    /// Only `system` mode is affected.
    pub fn refresh_scheme(&mut self) -> bool {
        let before = self.snapshot.effective;
        self.apply(self.snapshot.state);
        before != self.snapshot.effective
    }

    /// Re-read both entries from storage and apply them.
    ///
    /// Picks up writes made by other processes sharing the same storage.
    /// Entries that fail to read or parse keep their in-memory value; only an
    /// entry that is gone returns to its configured default.
    /// Returns `true` when the published snapshot changed.
    pub fn reload(&mut self) -> bool {
        let before = self.snapshot.clone();
        let state = hydrate(
            self.storage.as_ref(),
            &self.keys,
            self.defaults,
            self.snapshot.state,
        );
        self.apply(state);
        before != self.snapshot
    }

    /// Drop stored entries and return to configured defaults.
    pub fn reset(&mut self) {
        for key in [&self.keys.theme_key, &self.keys.color_key] {
            if let Err(err) = self.storage.remove(key) {
                tracing::warn!(key = %key, "failed to clear stored preference: {err}");
            }
        }
        self.apply(self.defaults);
    }

    /// Best-effort write; failures keep the session's in-memory state.
    fn persist(&self, key: &str, value: &str) {
        if let Err(err) = self.storage.set(key, value) {
            tracing::warn!(key, value, "preference not persisted: {err}");
        }
    }

    /// Resolve, re-derive, and publish when anything observable changed.
    fn apply(&mut self, state: PreferenceState) {
        let effective = state.display_mode.resolve(self.probe.current());
        if state == self.snapshot.state && effective == self.snapshot.effective {
            return;
        }
        self.snapshot = PreferenceSnapshot::build(state, effective);
        tracing::debug!(
            mode = %state.display_mode,
            effective = %effective,
            color = %state.accent_color,
            "preferences published"
        );
        self.publisher.send_replace(self.snapshot.clone());
    }
}

/// Read both entries field by field.
///
/// An entry that is absent takes its value from `defaults`. An entry that
/// cannot be read or does not parse keeps `current`, so a failing or
/// half-written store never discards what the session already holds.
fn hydrate(
    storage: &dyn PreferenceStorage,
    keys: &StorageConfig,
    defaults: PreferenceState,
    current: PreferenceState,
) -> PreferenceState {
    let display_mode = match read_entry(storage, &keys.theme_key) {
        Entry::Absent => defaults.display_mode,
        Entry::Unreadable => current.display_mode,
        Entry::Value(raw) => raw.parse::<DisplayMode>().unwrap_or_else(|err| {
            tracing::warn!(key = %keys.theme_key, "ignoring stored value: {err}");
            current.display_mode
        }),
    };
    let accent_color = match read_entry(storage, &keys.color_key) {
        Entry::Absent => defaults.accent_color,
        Entry::Unreadable => current.accent_color,
        Entry::Value(raw) => Rgb::from_hex(&raw).unwrap_or_else(|err| {
            tracing::warn!(key = %keys.color_key, "ignoring stored value: {err}");
            current.accent_color
        }),
    };

    PreferenceState {
        display_mode,
        accent_color,
    }
}

/// Outcome of reading one storage entry.
enum Entry {
    Value(String),
    Absent,
    Unreadable,
}

fn read_entry(storage: &dyn PreferenceStorage, key: &str) -> Entry {
    match storage.get(key) {
        Ok(Some(value)) => Entry::Value(value),
        Ok(None) => Entry::Absent,
        Err(err) => {
            tracing::warn!(key, "preference storage read failed: {err}");
            Entry::Unreadable
        }
    }
}
