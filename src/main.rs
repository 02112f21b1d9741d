//! Climascope - Interactive climate & economy indicator explorer
//!
//! Loads a wide country-indicator CSV, z-scores the indicator columns, and
//! links a CO2/energy scatter plot to a per-country profile chart.

mod charts;
mod config;
mod data;
mod gui;
mod stats;

use eframe::egui;
use gui::ClimascopeApp;

fn main() -> eframe::Result<()> {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1400.0, 800.0])
            .with_min_inner_size([1100.0, 650.0])
            .with_title("Climascope"),
        ..Default::default()
    };

    eframe::run_native(
        "Climascope",
        options,
        Box::new(|cc| Ok(Box::new(ClimascopeApp::new(cc)))),
    )
}
