mod backend_bridge;
mod controller;
mod ui;

use clap::Parser;
use client_core::config::load_settings;
use crossbeam_channel::bounded;
use eframe::egui;
use tracing_subscriber::EnvFilter;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;
use crate::ui::{DashboardGuiApp, StartupConfig};

const APP_TITLE: &str = "Orbital Launch Tracker";

#[derive(Debug, Parser)]
#[command(name = "desktop_gui", about = "Desktop dashboard for historic orbital launches")]
struct Args {
    /// Launch API base URL (overrides dashboard.toml and environment).
    #[arg(long)]
    api_base_url: Option<String>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let settings = load_settings()?.with_override(args.api_base_url);
    tracing::info!(api_base_url = %settings.api_base_url, "starting dashboard");

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(256);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(2048);
    backend_bridge::runtime::launch(settings.api_base_url.clone(), cmd_rx, ui_tx);

    let startup = StartupConfig {
        api_base_url: settings.api_base_url,
    };
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(APP_TITLE)
            .with_inner_size([1100.0, 860.0])
            .with_min_inner_size([720.0, 560.0]),
        ..Default::default()
    };
    eframe::run_native(
        APP_TITLE,
        options,
        Box::new(move |_cc| Ok(Box::new(DashboardGuiApp::bootstrap(cmd_tx, ui_rx, startup)))),
    )
    .map_err(|err| anyhow::anyhow!("failed to run dashboard window: {err}"))
}
