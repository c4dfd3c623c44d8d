#![windows_subsystem = "windows"]

mod app;
mod settings;
mod theme;
mod ui;

use anyhow::Context as _;
use eframe::egui;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use app::LandingApp;
use settings::AppSettings;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    info!(
        version = env!("CARGO_PKG_VERSION"),
        build = env!("BUILD_INFO"),
        "starting zen-garden"
    );

    // Bad bundled copy or catalog means a broken build; refuse to open a half-rendered page
    let taxonomy = zen_garden_landing::load_reference().context("bundled landing content is invalid")?;
    let settings = AppSettings::load();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1120.0, 860.0])
            .with_min_inner_size([720.0, 520.0])
            .with_title("Auto Zen Garden"),
        ..Default::default()
    };

    eframe::run_native(
        "Auto Zen Garden",
        options,
        Box::new(move |cc| Ok(Box::new(LandingApp::new(cc, taxonomy, settings)))),
    )
    .map_err(|e| {
        error!("window loop failed: {}", e);
        anyhow::anyhow!("{}", e)
    })
}
