//! Indicator Profile Chart
//! Bar chart of one country's z-scored indicators on a fixed global scale.

use crate::charts::palette::group_color;
use crate::data::{Dataset, DerivedColumn, Record};
use egui::RichText;
use egui_plot::{Bar, BarChart, Plot};

/// One bar: a slot on the fixed alphabetical domain plus the z-score.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileBar {
    pub slot: usize,
    pub label: String,
    pub value: f64,
}

/// Bars for one record. Missing values are omitted; slots stay fixed so bar
/// positions are comparable across records.
pub fn profile_bars(record: &Record, derived: &[DerivedColumn]) -> Vec<ProfileBar> {
    derived
        .iter()
        .enumerate()
        .filter_map(|(slot, column)| {
            let value = record.values.get(&column.name).copied().unwrap_or(f64::NAN);
            value.is_finite().then(|| ProfileBar {
                slot,
                label: column.display.clone(),
                value,
            })
        })
        .collect()
}

/// Draws the per-country indicator profile.
pub struct ProfileChart;

impl ProfileChart {
    /// Draw the z-score profile for one record. The y axis is clamped to the
    /// dataset-wide z range so bar heights stay comparable across countries,
    /// and the whole surface is redrawn each frame: only this record's bars
    /// exist after the call.
    pub fn show(ui: &mut egui::Ui, dataset: &Dataset, record: &Record) {
        ui.label(
            RichText::new(format!("Country: {}", record.name))
                .size(16.0)
                .strong(),
        );
        ui.add_space(4.0);

        let bars = profile_bars(record, &dataset.derived);
        let color = group_color(&record.group);
        let labels: Vec<String> = dataset.derived.iter().map(|c| c.display.clone()).collect();
        let height = ui.available_height() - 8.0;

        let mut plot = Plot::new("indicator_profile")
            .height(height)
            .x_axis_label("Indicator")
            .y_axis_label("Z-score")
            .allow_zoom(false)
            .allow_drag(false)
            .allow_scroll(false)
            .include_x(-0.5)
            .include_x(labels.len() as f64 - 0.5)
            .x_axis_formatter(move |mark, _range| {
                let idx = mark.value.round() as usize;
                if idx < labels.len() && (mark.value - idx as f64).abs() < 0.25 {
                    labels[idx].clone()
                } else {
                    String::new()
                }
            });
        if dataset.z_min.is_finite() && dataset.z_max.is_finite() {
            plot = plot.include_y(dataset.z_min).include_y(dataset.z_max);
        }

        plot.show(ui, |plot_ui| {
            let chart_bars: Vec<Bar> = bars
                .iter()
                .map(|bar| {
                    Bar::new(bar.slot as f64, bar.value)
                        .name(&bar.label)
                        .fill(color)
                })
                .collect();
            plot_ui.bar_chart(BarChart::new(chart_bars).width(0.8));
        });
    }
}
