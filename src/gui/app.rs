//! Climascope Main Application
//! Window shell wiring the loader thread, scatter view, and profile view.

use crate::charts::{scatter_points, ProfileChart, ScatterChart, ScatterPoint};
use crate::config::DatasetConfig;
use crate::data::{fetch, normalize, DataSource, Dataset};
use crate::gui::{PanelAction, SourcePanel};
use egui::RichText;
use std::sync::mpsc::{channel, Receiver, Sender};
use std::thread;

/// Load pipeline result from the background thread.
enum LoadResult {
    Progress(String),
    Complete(Box<Dataset>),
    Error(String),
}

/// Main application window.
///
/// Page-level state: `Loading` (a receiver is in flight) then `Ready`
/// (`dataset` installed, immutable). Hover state is per-frame: the profile
/// chart shows whichever point the scatter view reports as hovered.
pub struct ClimascopeApp {
    config: DatasetConfig,
    panel: SourcePanel,
    dataset: Option<Dataset>,
    points: Vec<ScatterPoint>,
    load_rx: Option<Receiver<LoadResult>>,
}

impl ClimascopeApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let config = DatasetConfig::load();
        let mut app = Self {
            panel: SourcePanel::new(config.url.clone()),
            config,
            dataset: None,
            points: Vec::new(),
            load_rx: None,
        };
        // The normalizer runs once at startup; reload/browse re-run it.
        let source = DataSource::Remote(app.config.url.clone());
        app.start_load(source);
        app
    }

    fn start_load(&mut self, source: DataSource) {
        if self.load_rx.is_some() {
            return; // A load is already in flight.
        }
        self.panel.is_loading = true;
        self.panel
            .set_status(&format!("Loading {}...", source.describe()));

        let (tx, rx) = channel();
        self.load_rx = Some(rx);
        let config = self.config.clone();

        thread::spawn(move || Self::run_load(tx, source, config));
    }

    /// Fetch and normalize (called from the background thread).
    fn run_load(tx: Sender<LoadResult>, source: DataSource, config: DatasetConfig) {
        let result = (|| -> anyhow::Result<Dataset> {
            let _ = tx.send(LoadResult::Progress("Fetching dataset...".to_string()));
            let df = fetch(&source)?;
            let _ = tx.send(LoadResult::Progress(
                "Normalizing indicators...".to_string(),
            ));
            Ok(normalize(&df, &config)?)
        })();

        match result {
            Ok(dataset) => {
                let _ = tx.send(LoadResult::Complete(Box::new(dataset)));
            }
            Err(e) => {
                log::warn!("dataset load failed: {e:#}");
                let _ = tx.send(LoadResult::Error(e.to_string()));
            }
        }
    }

    /// Drain results from the background load thread.
    fn check_load_results(&mut self) {
        let Some(rx) = self.load_rx.take() else {
            return;
        };
        let mut keep_receiver = true;

        while let Ok(result) = rx.try_recv() {
            match result {
                LoadResult::Progress(status) => self.panel.set_status(&status),
                LoadResult::Complete(dataset) => {
                    self.points = scatter_points(&dataset);
                    self.panel.set_status(&format!(
                        "Ready: {} countries, {} plotted, {} indicators",
                        dataset.records.len(),
                        self.points.len(),
                        dataset.derived.len(),
                    ));
                    self.dataset = Some(*dataset);
                    self.panel.is_loading = false;
                    keep_receiver = false;
                }
                LoadResult::Error(error) => {
                    // The charts stay empty; the status line carries the error.
                    self.panel.set_status(&format!("Error: {error}"));
                    self.panel.is_loading = false;
                    keep_receiver = false;
                }
            }
        }

        if keep_receiver {
            self.load_rx = Some(rx);
        }
    }

    fn handle_browse_csv(&mut self) {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("CSV Files", &["csv"])
            .pick_file()
        {
            self.start_load(DataSource::Local(path));
        }
    }
}

impl eframe::App for ClimascopeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.check_load_results();
        if self.load_rx.is_some() {
            ctx.request_repaint();
        }

        egui::TopBottomPanel::top("source_panel").show(ctx, |ui| {
            ui.add_space(4.0);
            match self.panel.show(ui) {
                PanelAction::Reload => {
                    let url = self.panel.url.clone();
                    self.start_load(DataSource::Remote(url));
                }
                PanelAction::BrowseCsv => self.handle_browse_csv(),
                PanelAction::None => {}
            }
            ui.add_space(4.0);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let Some(dataset) = &self.dataset else {
                ui.centered_and_justified(|ui| {
                    let text = if self.load_rx.is_some() {
                        "Loading..."
                    } else {
                        "No Data"
                    };
                    ui.label(RichText::new(text).size(20.0));
                });
                return;
            };

            ui.columns(2, |columns| {
                let hovered = {
                    let ui = &mut columns[0];
                    ui.label(
                        RichText::new("CO2 emissions vs. energy use")
                            .size(14.0)
                            .strong(),
                    );
                    ScatterChart::show(ui, dataset, &self.points)
                };

                let ui = &mut columns[1];
                ui.label(
                    RichText::new("Indicator profile (z-scores)")
                        .size(14.0)
                        .strong(),
                );
                match hovered.map(|i| &dataset.records[self.points[i].record]) {
                    Some(record) => ProfileChart::show(ui, dataset, record),
                    None => {
                        ui.centered_and_justified(|ui| {
                            ui.label(
                                RichText::new("Hover a country to see its profile").size(14.0),
                            );
                        });
                    }
                }
            });
        });
    }
}
