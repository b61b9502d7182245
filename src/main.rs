//! CLI entry point for folio.

mod app;
mod cli;

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use folio::config::{load_config_with_source, LoadedConfig};
use folio::render::{RenderSink, Renderer};
use folio::storage::{default_preferences_path, FileStorage, PreferenceStorage, UnavailableStorage};
use folio::store::PreferenceStore;
use folio::theme::HostScheme;

use app::commands::{self, CommandContext};
use cli::Command;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    app::logging::initialize_logging();
    let args = cli::Args::parse();
    let command = args.command.clone().unwrap_or(Command::Show);

    // `init` must work even when the existing config is broken.
    if let Command::Init { force } = command {
        let renderer = Renderer::new(!args.no_color);
        let ctx = CommandContext {
            renderer: &renderer,
            json: args.json,
            storage_path: None,
        };
        let result = commands::init::handle_init_command(&ctx, args.config.as_deref(), force);
        exit_on_error(&renderer, result);
        return;
    }

    let LoadedConfig { config, source } = match load_config_with_source(args.config.as_deref()) {
        Ok(loaded) => loaded,
        Err(e) => {
            Renderer::new(!args.no_color).error(&e.to_string());
            std::process::exit(1);
        }
    };

    let renderer = Renderer::new(config.display.color && !args.no_color);
    let storage_path = args
        .storage
        .as_ref()
        .map(PathBuf::from)
        .or_else(|| config.storage.path.clone())
        .or_else(default_preferences_path);
    let storage: Arc<dyn PreferenceStorage> = match &storage_path {
        Some(path) => Arc::new(FileStorage::new(path.clone())),
        None => {
            renderer.warn("no preferences location available; changes last for this run only");
            Arc::new(UnavailableStorage::new("no home or config directory"))
        }
    };

    let mut store = PreferenceStore::open(&config, storage, HostScheme);
    let ctx = CommandContext {
        renderer: &renderer,
        json: args.json,
        storage_path: storage_path.as_deref(),
    };

    let result = match command {
        Command::Watch { interval_secs } => app::watch::run_watch(&ctx, store, interval_secs).await,
        other => commands::dispatch(&ctx, &mut store, &source, &other),
    };
    exit_on_error(&renderer, result);
}

fn exit_on_error(renderer: &dyn RenderSink, result: Result<(), String>) {
    if let Err(msg) = result {
        renderer.error(&msg);
        std::process::exit(1);
    }
}
