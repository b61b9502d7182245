//! Stored display-mode preference and its rendered resolution.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ModeError;

/// User-selected display mode as stored in preferences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    Light,
    Dark,
    /// Follow the host environment's color scheme at evaluation time.
    #[default]
    System,
}

impl DisplayMode {
    /// Stable storage value.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::System => "system",
        }
    }

    pub fn all() -> &'static [DisplayMode] {
        &[Self::Light, Self::Dark, Self::System]
    }

    /// Resolve to the concrete mode used for rendering.
    pub fn resolve(self, host: EffectiveMode) -> EffectiveMode {
        match self {
            Self::Light => EffectiveMode::Light,
            Self::Dark => EffectiveMode::Dark,
            Self::System => host,
        }
    }

    /// Light/dark toggle: `light` flips to `dark`, everything else to `light`.
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark | Self::System => Self::Light,
        }
    }
}

impl fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DisplayMode {
    type Err = ModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        Self::all()
            .iter()
            .copied()
            .find(|mode| mode.as_str() == normalized)
            .ok_or_else(|| ModeError(s.to_string()))
    }
}

/// Concrete mode applied when rendering; `system` never appears here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EffectiveMode {
    #[default]
    Light,
    Dark,
}

impl EffectiveMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Root class name applied to the document element.
    pub fn class_name(self) -> &'static str {
        self.as_str()
    }
}

impl fmt::Display for EffectiveMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EffectiveMode {
    type Err = ModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            _ => Err(ModeError(s.to_string())),
        }
    }
}
