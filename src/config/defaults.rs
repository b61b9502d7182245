//! Default configuration constants.

/// Embedded default `folio.toml` template written by `folio init`.
pub(super) const DEFAULT_FOLIO_CONFIG_TEMPLATE: &str = include_str!("../templates/folio.toml");
/// Storage entry for the display mode.
pub const DEFAULT_THEME_STORAGE_KEY: &str = "ui-theme";
/// Storage entry for the accent color.
pub const DEFAULT_COLOR_STORAGE_KEY: &str = "ui-color";
/// Config file name looked up locally and under the config root.
pub(super) const CONFIG_FILE_NAME: &str = "folio.toml";
/// Directory under the config root owned by this tool.
pub(super) const CONFIG_DIR_NAME: &str = "folio";
