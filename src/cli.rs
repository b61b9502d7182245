//! CLI argument parsing via clap.

use clap::{Parser, Subcommand};
use folio::theme::DisplayMode;

/// Inspect and change the portfolio's display mode and accent color.
#[derive(Debug, Parser)]
#[command(
    name = "folio",
    version = folio::build_info::VERSION,
    long_version = folio::build_info::LONG_VERSION,
    after_help = folio::build_info::HELP_BUILD_METADATA
)]
pub struct Args {
    /// Path to config file (default: ./folio.toml or ~/.config/folio/folio.toml).
    #[arg(short = 'c', long = "config")]
    pub config: Option<String>,

    /// Override the preferences file location.
    #[arg(long = "storage", value_name = "PATH")]
    pub storage: Option<String>,

    /// Disable color output.
    #[arg(long = "no-color")]
    pub no_color: bool,

    /// Emit machine-readable JSON on stdout instead of status lines.
    #[arg(long = "json")]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Show stored preferences, the effective mode, and derived variables.
    Show,
    /// Set the display mode.
    Mode {
        /// One of `light`, `dark`, or `system`.
        mode: DisplayMode,
    },
    /// Flip between light and dark (`system` switches to light).
    Toggle,
    /// Set the accent color.
    Color {
        /// Hex color (`#rrggbb` or `#rgb`), palette name, or palette index.
        selector: String,
    },
    /// List the predefined accent colors.
    Palette,
    /// Print the `:root` CSS block for the current preferences.
    Css,
    /// Clear stored preferences and return to configured defaults.
    Reset,
    /// Write the default config to ~/.config/folio/folio.toml.
    Init {
        /// Overwrite an existing config after writing a timestamped backup.
        #[arg(long = "force")]
        force: bool,
    },
    /// Print CSS again whenever stored preferences or the host scheme change.
    Watch {
        /// Seconds between storage and host-scheme polls.
        #[arg(long = "interval-secs", default_value_t = 2, value_parser = clap::value_parser!(u64).range(1..))]
        interval_secs: u64,
    },
}
