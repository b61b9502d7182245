//! Subcommand handlers used by the CLI entry point.

use std::path::Path;

use folio::config::ConfigSource;
use folio::render::RenderSink;
use folio::store::PreferenceStore;
use serde::Serialize;

use crate::cli::Command;

/// `init` command helpers.
pub(crate) mod init;
/// `show` / `css` output helpers.
pub(crate) mod show;
/// `mode` / `toggle` / `color` / `palette` / `reset` helpers.
pub(crate) mod theme;

/// Output settings shared by every handler.
pub(crate) struct CommandContext<'a> {
    pub(crate) renderer: &'a dyn RenderSink,
    pub(crate) json: bool,
    pub(crate) storage_path: Option<&'a Path>,
}

/// Run one store-backed subcommand. `init` and `watch` are routed by `main`.
pub(crate) fn dispatch(
    ctx: &CommandContext<'_>,
    store: &mut PreferenceStore,
    source: &ConfigSource,
    command: &Command,
) -> Result<(), String> {
    match command {
        Command::Show => show::handle_show_command(ctx, store, source),
        Command::Css => show::handle_css_command(ctx, store),
        Command::Mode { mode } => theme::handle_mode_command(ctx, store, *mode),
        Command::Toggle => theme::handle_toggle_command(ctx, store),
        Command::Color { selector } => theme::handle_color_command(ctx, store, selector),
        Command::Palette => theme::handle_palette_command(ctx, store),
        Command::Reset => theme::handle_reset_command(ctx, store),
        Command::Init { .. } | Command::Watch { .. } => {
            Err("internal error: command must be handled before opening the store".to_string())
        }
    }
}

/// Pretty-print a JSON payload on stdout.
pub(crate) fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), String> {
    let text = serde_json::to_string_pretty(value)
        .map_err(|err| format!("failed to encode JSON output: {err}"))?;
    println!("{text}");
    Ok(())
}
