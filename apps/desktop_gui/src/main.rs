use std::{path::PathBuf, sync::Arc};

use anyhow::Context;
use clap::Parser;
use crossbeam_channel::bounded;
use eframe::egui;
use gist_client::GistClient;
use tracing_subscriber::EnvFilter;

mod backend_bridge;
mod config;
mod controller;
mod ui;

use backend_bridge::commands::BackendCommand;
use controller::events::UiEvent;
use ui::{EditorApp, EditorPreferences, StartupConfig, PREFERENCES_STORAGE_KEY};

/// Plain-text editor for puzzle-game scripts, with Gist loading.
#[derive(Parser, Debug)]
#[command(name = "puzzlescript-editor", version)]
struct Args {
    /// File to open on startup.
    path: Option<PathBuf>,
    /// Base URL of the Gists API.
    #[arg(long)]
    gist_api_url: Option<String>,
    #[arg(long)]
    request_timeout_secs: Option<u64>,
    /// TOML config file (defaults to ./puzzlescript_editor.toml when present).
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
    let args = Args::parse();

    let settings = config::load_settings(&config::CliOverrides {
        config_path: args.config,
        gist_api_url: args.gist_api_url,
        request_timeout_secs: args.request_timeout_secs,
    })?;
    tracing::info!(
        gist_api_url = %settings.gist_api_url,
        timeout_secs = settings.request_timeout_secs,
        "starting editor"
    );

    let gist_client = GistClient::new(&settings.gist_api_url, settings.request_timeout())
        .context("failed to build gist client")?;

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(16);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(64);
    backend_bridge::runtime::launch(cmd_rx, ui_tx, Arc::new(gist_client));

    let startup = StartupConfig {
        window_title: settings.window_title.clone(),
        open_path: args.path,
    };
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(settings.window_title.clone())
            .with_inner_size([900.0, 700.0])
            .with_min_inner_size([400.0, 300.0]),
        ..Default::default()
    };
    eframe::run_native(
        "puzzlescript-editor",
        options,
        Box::new(|cc| {
            let preferences = cc.storage.and_then(|storage| {
                storage
                    .get_string(PREFERENCES_STORAGE_KEY)
                    .map(|text| EditorPreferences::from_json(&text))
            });
            Ok(Box::new(EditorApp::new(cmd_tx, ui_rx, preferences, startup)))
        }),
    )
    .map_err(|err| anyhow::anyhow!("editor window failed: {err}"))
}
