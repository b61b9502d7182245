//! Mode and accent-color command helpers.
//!
//! Handlers mutate the store, then report the new state through the shared
//! output path in `commands::show`.

use folio::render::RenderSink;
use folio::store::PreferenceStore;
use folio::theme::palette::{self, PALETTE};
use folio::theme::{DisplayMode, Rgb};

use super::show::report_state;
use super::CommandContext;

/// Handle `folio mode <light|dark|system>`.
pub(crate) fn handle_mode_command(
    ctx: &CommandContext<'_>,
    store: &mut PreferenceStore,
    mode: DisplayMode,
) -> Result<(), String> {
    store.set_display_mode(mode);
    report_state(ctx, store, &format!("display mode: {mode}"))
}

/// Handle `folio toggle`.
pub(crate) fn handle_toggle_command(
    ctx: &CommandContext<'_>,
    store: &mut PreferenceStore,
) -> Result<(), String> {
    let next = store.toggle_display_mode();
    report_state(ctx, store, &format!("display mode: {next}"))
}

/// Handle `folio color <selector>`.
pub(crate) fn handle_color_command(
    ctx: &CommandContext<'_>,
    store: &mut PreferenceStore,
    selector: &str,
) -> Result<(), String> {
    let color = resolve_color_selector(selector)?;
    store.set_accent_rgb(color);
    let label = match palette::find_by_color(color) {
        Some(entry) => format!("accent color: {} ({})", entry.name, color),
        None => format!("accent color: {color}"),
    };
    report_state(ctx, store, &label)
}

/// Handle `folio reset`.
pub(crate) fn handle_reset_command(
    ctx: &CommandContext<'_>,
    store: &mut PreferenceStore,
) -> Result<(), String> {
    store.reset();
    report_state(ctx, store, "preferences reset to defaults")
}

/// Handle `folio palette`.
pub(crate) fn handle_palette_command(
    ctx: &CommandContext<'_>,
    store: &PreferenceStore,
) -> Result<(), String> {
    let active = store.state().accent_color;
    if ctx.json {
        let rows: Vec<serde_json::Value> = PALETTE
            .iter()
            .enumerate()
            .map(|(idx, entry)| {
                serde_json::json!({
                    "index": idx + 1,
                    "name": entry.name,
                    "color": entry.color,
                    "active": entry.color == active,
                })
            })
            .collect();
        return super::print_json(&rows);
    }

    ctx.renderer.section("palette");
    for (label, color, is_active) in palette_rows(active) {
        ctx.renderer.swatch(&label, color, is_active);
    }
    if palette::find_by_color(active).is_none() {
        ctx.renderer.field("custom", &active.to_hex());
    }
    Ok(())
}

/// Build `index.name` labels with active markers for the palette listing.
pub(crate) fn palette_rows(active: Rgb) -> Vec<(String, Rgb, bool)> {
    PALETTE
        .iter()
        .enumerate()
        .map(|(idx, entry)| {
            (
                format!("{}.{}", idx + 1, entry.name),
                entry.color,
                entry.color == active,
            )
        })
        .collect()
}

/// Resolve a color selector as palette index, palette name, or hex value.
///
/// `#`-prefixed input is always hex. Bare digits of at most two characters
/// are palette indexes, so `123` still reads as the shorthand `#123`.
pub(crate) fn resolve_color_selector(selector: &str) -> Result<Rgb, String> {
    let trimmed = selector.trim();
    if trimmed.is_empty() {
        return Err("Usage: folio color <hex|name|index>".to_string());
    }

    if !trimmed.starts_with('#') {
        if trimmed.len() <= 2 {
            if let Ok(index) = trimmed.parse::<usize>() {
                if index == 0 || index > PALETTE.len() {
                    return Err(format!(
                        "Palette index out of range: {index}. Choose 1-{}.",
                        PALETTE.len()
                    ));
                }
                return Ok(PALETTE[index - 1].color);
            }
        }
        if let Some(entry) = palette::find_by_name(trimmed) {
            return Ok(entry.color);
        }
    }

    Rgb::from_hex(trimmed).map_err(|err| {
        format!("{err}. Use a hex color like #3b82f6 or a name from `folio palette`.")
    })
}
