//! Source Panel Widget
//! Top strip with dataset source controls and load status.

use egui::{Color32, RichText};

/// Actions triggered by the source panel.
#[derive(Debug, Clone, PartialEq)]
pub enum PanelAction {
    None,
    Reload,
    BrowseCsv,
}

/// Dataset URL field, reload/browse buttons, and the status line.
pub struct SourcePanel {
    pub url: String,
    pub status: String,
    pub is_loading: bool,
}

impl SourcePanel {
    pub fn new(url: String) -> Self {
        Self {
            url,
            status: "Loading dataset...".to_string(),
            is_loading: false,
        }
    }

    /// Draw the panel and report what the user asked for.
    pub fn show(&mut self, ui: &mut egui::Ui) -> PanelAction {
        let mut action = PanelAction::None;

        ui.horizontal(|ui| {
            ui.label(
                RichText::new("🌍 Climascope")
                    .size(18.0)
                    .color(Color32::from_rgb(100, 149, 237)),
            );
            ui.separator();

            ui.label("Dataset URL:");
            let url_edit = egui::TextEdit::singleline(&mut self.url).desired_width(420.0);
            let submitted =
                ui.add(url_edit).lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

            ui.add_enabled_ui(!self.is_loading, |ui| {
                if ui.button("⟳ Reload").clicked() || submitted {
                    action = PanelAction::Reload;
                }
                if ui.button("📂 Browse").clicked() {
                    action = PanelAction::BrowseCsv;
                }
            });

            if self.is_loading {
                ui.spinner();
            }

            let status_color = if self.status.contains("Error") {
                Color32::from_rgb(220, 53, 69)
            } else if self.status.contains("Ready") {
                Color32::from_rgb(40, 167, 69)
            } else {
                Color32::GRAY
            };
            ui.label(RichText::new(&self.status).size(12.0).color(status_color));
        });

        action
    }

    /// Set the status line.
    pub fn set_status(&mut self, status: &str) {
        self.status = status.to_string();
    }
}
