//! Unified error types for preference handling.

use std::fmt;

// ---------------------------------------------------------------------------
// ColorError
// ---------------------------------------------------------------------------

/// Errors arising from accent-color input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    /// Input was empty after trimming.
    Empty,
    /// Input was not a 3- or 6-digit hex color.
    InvalidColorFormat(String),
}

impl fmt::Display for ColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "color value cannot be empty"),
            Self::InvalidColorFormat(input) => write!(
                f,
                "invalid hex color `{input}` (expected #RGB or #RRGGBB)"
            ),
        }
    }
}

impl std::error::Error for ColorError {}

// ---------------------------------------------------------------------------
// ModeError
// ---------------------------------------------------------------------------

/// Unknown display-mode string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModeError(pub String);

impl fmt::Display for ModeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown display mode `{}` (expected light, dark, or system)",
            self.0
        )
    }
}

impl std::error::Error for ModeError {}

// ---------------------------------------------------------------------------
// StorageError
// ---------------------------------------------------------------------------

/// Errors from the durable preference storage layer.
#[derive(Debug)]
pub enum StorageError {
    Io(std::io::Error),
    /// Stored file exists but could not be decoded.
    Parse(String),
    /// Storage cannot be used at all (no resolvable location, disabled, ...).
    Unavailable(String),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "io: {e}"),
            Self::Parse(msg) => write!(f, "parse: {msg}"),
            Self::Unavailable(msg) => write!(f, "storage unavailable: {msg}"),
        }
    }
}

impl std::error::Error for StorageError {}

impl From<std::io::Error> for StorageError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<toml::de::Error> for StorageError {
    fn from(e: toml::de::Error) -> Self {
        Self::Parse(e.to_string())
    }
}

impl From<toml::ser::Error> for StorageError {
    fn from(e: toml::ser::Error) -> Self {
        Self::Parse(e.to_string())
    }
}

// ---------------------------------------------------------------------------
// ConfigError
// ---------------------------------------------------------------------------

/// Errors when loading or parsing configuration.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Toml(toml::de::Error),
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "io: {e}"),
            Self::Toml(e) => write!(f, "toml: {e}"),
            Self::Invalid(msg) => write!(f, "invalid config: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        Self::Toml(e)
    }
}

impl From<ColorError> for ConfigError {
    fn from(e: ColorError) -> Self {
        Self::Invalid(e.to_string())
    }
}

impl From<ModeError> for ConfigError {
    fn from(e: ModeError) -> Self {
        Self::Invalid(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_error_display() {
        assert_eq!(ColorError::Empty.to_string(), "color value cannot be empty");
        assert_eq!(
            ColorError::InvalidColorFormat("#12".into()).to_string(),
            "invalid hex color `#12` (expected #RGB or #RRGGBB)"
        );
    }

    #[test]
    fn mode_error_names_the_input() {
        let e = ModeError("sepia".into());
        assert!(e.to_string().contains("`sepia`"), "got: {e}");
    }

    #[test]
    fn storage_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let e = StorageError::from(io_err);
        let s = e.to_string();
        assert!(s.starts_with("io:"), "got: {s}");
        assert!(s.contains("denied"));
    }

    #[test]
    fn storage_error_unavailable_message() {
        let e = StorageError::Unavailable("no config directory".into());
        assert_eq!(e.to_string(), "storage unavailable: no config directory");
    }

    #[test]
    fn config_error_from_toml() {
        let toml_err: toml::de::Error = toml::from_str::<toml::Value>("x = [unclosed").unwrap_err();
        let e = ConfigError::from(toml_err);
        assert!(e.to_string().starts_with("toml:"));
    }

    #[test]
    fn config_error_from_color_error() {
        let e = ConfigError::from(ColorError::InvalidColorFormat("blue".into()));
        assert!(e.to_string().starts_with("invalid config:"), "got: {e}");
        assert!(e.to_string().contains("blue"));
    }
}
