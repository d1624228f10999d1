use std::{path::PathBuf, sync::Arc};

mod backend_bridge;
mod controller;
mod ui;

use anyhow::anyhow;
use clap::Parser;
use client_core::{config::load_settings, view::APP_TITLE, EmployeeSource, HttpEmployeeSource};
use crossbeam_channel::bounded;
use eframe::egui;
use tracing_subscriber::EnvFilter;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;
use crate::ui::DirectoryApp;

#[derive(Parser, Debug)]
#[command(name = "directory-gui", about = "Team Directory desktop client")]
struct Args {
    /// Employee list endpoint; overrides settings file and environment.
    #[arg(long)]
    endpoint: Option<String>,
    /// Settings file (defaults to ./directory.toml when present).
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
    let mut settings = load_settings(args.config.as_deref())?;
    if let Some(endpoint) = args.endpoint {
        settings.endpoint_url = endpoint;
    }
    let source: Arc<dyn EmployeeSource> =
        Arc::new(HttpEmployeeSource::new(&settings.endpoint_url)?);
    tracing::info!(endpoint = %settings.endpoint_url, "starting desktop directory");

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(64);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(256);
    backend_bridge::runtime::launch(source, cmd_rx, ui_tx);

    let debounce = settings.debounce();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(APP_TITLE)
            .with_inner_size([1024.0, 720.0])
            .with_min_inner_size([420.0, 360.0]),
        ..Default::default()
    };
    eframe::run_native(
        APP_TITLE,
        options,
        Box::new(move |_cc| Ok(Box::new(DirectoryApp::new(cmd_tx, ui_rx, debounce)))),
    )
    .map_err(|err| anyhow!("desktop window failed: {err}"))
}
