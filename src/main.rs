mod app;
mod camera;
mod color;
mod config;
mod data;
mod error;
mod figure;
mod pipeline;
mod runner;
mod state;
mod ui;

use anyhow::{anyhow, Context};
use app::ScatterApp;
use config::Config;
use eframe::egui;
use figure::{Figure, PlotStyle};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = Config::load().context("loading configuration")?;
    log::debug!("{config:?}");

    let cloud = pipeline::prepare(&config)?;
    let figure = Figure::from_cloud(cloud, PlotStyle::default());
    let title = figure.style.title.clone();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 800.0])
            .with_min_inner_size([500.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        &title,
        options,
        Box::new(|_cc| Ok(Box::new(ScatterApp::new(figure)))),
    )
    // Keep the full eframe error chain in the message.
    .map_err(|e| anyhow!(error::error_chain(&e)))
    .context("opening viewer window")
}
