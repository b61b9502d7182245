//! `show` and `css` output, plus the post-mutation report shared by all
//! state-changing commands.

use folio::config::ConfigSource;
use folio::store::PreferenceStore;
use folio::theme::palette;

use super::{print_json, CommandContext};

/// Handle `folio show` (also the default when no subcommand is given).
pub(crate) fn handle_show_command(
    ctx: &CommandContext<'_>,
    store: &PreferenceStore,
    source: &ConfigSource,
) -> Result<(), String> {
    if ctx.json {
        return print_json(&store.snapshot());
    }
    let state = store.state();
    ctx.renderer.section("preferences");
    ctx.renderer.field("display_mode", state.display_mode.as_str());
    ctx.renderer.field("effective_mode", store.effective_mode().as_str());
    ctx.renderer.field("root_class", store.effective_mode().class_name());
    ctx.renderer.field("accent_color", &accent_label(state.accent_color));
    ctx.renderer.field("config", &source.describe());
    if let Some(path) = ctx.storage_path {
        ctx.renderer.field("storage", &path.display().to_string());
    }
    render_variables(ctx, store);
    Ok(())
}

/// Handle `folio css`: the `:root` block on stdout.
pub(crate) fn handle_css_command(
    ctx: &CommandContext<'_>,
    store: &PreferenceStore,
) -> Result<(), String> {
    if ctx.json {
        return print_json(store.vars());
    }
    print!("{}", store.vars().to_css());
    Ok(())
}

/// Report state after a mutation: JSON snapshot, or a headline plus fields.
pub(crate) fn report_state(
    ctx: &CommandContext<'_>,
    store: &PreferenceStore,
    headline: &str,
) -> Result<(), String> {
    if ctx.json {
        return print_json(&store.snapshot());
    }
    ctx.renderer.section(headline);
    ctx.renderer.field("effective_mode", store.effective_mode().as_str());
    ctx.renderer
        .field("accent_color", &accent_label(store.state().accent_color));
    Ok(())
}

fn render_variables(ctx: &CommandContext<'_>, store: &PreferenceStore) {
    ctx.renderer.section("variables");
    for (name, value) in store.vars().iter() {
        ctx.renderer.field(name, value);
    }
}

fn accent_label(color: folio::theme::Rgb) -> String {
    match palette::find_by_color(color) {
        Some(entry) => format!("{color} ({})", entry.name),
        None => color.to_hex(),
    }
}
