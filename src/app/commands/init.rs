//! `folio init` helpers.

use std::path::Path;

use folio::config::{initialize_config_at_path, initialize_default_global_config, ConfigInitResult};

use super::CommandContext;

/// Write the default config template, to `--config` when given.
pub(crate) fn handle_init_command(
    ctx: &CommandContext<'_>,
    config_override: Option<&str>,
    force: bool,
) -> Result<(), String> {
    let result = match config_override {
        Some(path) => initialize_config_at_path(Path::new(path), force),
        None => initialize_default_global_config(force),
    }
    .map_err(|err| format!("failed to initialize config: {err}"))?;

    if ctx.json {
        let payload = match &result {
            ConfigInitResult::Created { path } => serde_json::json!({
                "status": "created",
                "path": path,
            }),
            ConfigInitResult::AlreadyInitialized { path } => serde_json::json!({
                "status": "already_initialized",
                "path": path,
            }),
            ConfigInitResult::Overwritten { path, backup_path } => serde_json::json!({
                "status": "overwritten",
                "path": path,
                "backup_path": backup_path,
            }),
        };
        return super::print_json(&payload);
    }

    match result {
        ConfigInitResult::Created { path } => {
            ctx.renderer.section("config initialized");
            ctx.renderer.field("path", &path.display().to_string());
        }
        ConfigInitResult::AlreadyInitialized { path } => {
            ctx.renderer.warn(&format!(
                "config already exists at {}; pass --force to overwrite",
                path.display()
            ));
        }
        ConfigInitResult::Overwritten { path, backup_path } => {
            ctx.renderer.section("config overwritten");
            ctx.renderer.field("path", &path.display().to_string());
            ctx.renderer.field("backup", &backup_path.display().to_string());
        }
    }
    Ok(())
}
