//! Emissions Scatter Chart
//! CO2 vs. energy use per country, colored by income group. Hovering a point
//! highlights it, shows a tooltip, and selects the country for the profile
//! chart.

use crate::charts::palette::{group_color, INCOME_GROUPS, UNKNOWN_GROUP_COLOR};
use crate::data::Dataset;
use egui::{Id, RichText};
use egui_plot::{Corner, Legend, Plot, PlotPoints, Points};

/// Fraction of the visible axis span within which a point counts as hovered.
const HOVER_TOLERANCE: f64 = 0.025;

/// One renderable point: a record with both raw axes present.
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterPoint {
    /// Index into `Dataset::records`.
    pub record: usize,
    pub name: String,
    pub group: String,
    pub x: f64,
    pub y: f64,
}

/// Points for every record whose two raw values are present and numeric.
/// Records failing that are excluded here but stay in the record set.
pub fn scatter_points(dataset: &Dataset) -> Vec<ScatterPoint> {
    dataset
        .records
        .iter()
        .enumerate()
        .filter_map(|(record, r)| {
            let x = r.values.get(&dataset.raw_x).copied().unwrap_or(f64::NAN);
            let y = r.values.get(&dataset.raw_y).copied().unwrap_or(f64::NAN);
            (x.is_finite() && y.is_finite()).then(|| ScatterPoint {
                record,
                name: r.name.clone(),
                group: r.group.clone(),
                x,
                y,
            })
        })
        .collect()
}

/// Index of the point nearest to the pointer, if any lies within the
/// per-axis tolerances.
pub fn nearest_point(
    points: &[ScatterPoint],
    px: f64,
    py: f64,
    tol_x: f64,
    tol_y: f64,
) -> Option<usize> {
    if tol_x <= 0.0 || tol_y <= 0.0 {
        return None;
    }
    points
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let dx = (p.x - px) / tol_x;
            let dy = (p.y - py) / tol_y;
            (i, dx * dx + dy * dy)
        })
        .filter(|(_, d)| *d <= 1.0)
        .min_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(i, _)| i)
}

/// Draws the linked scatter view.
pub struct ScatterChart;

impl ScatterChart {
    /// Draw the scatter plot and return the hovered point index, if any.
    /// The tooltip is owned here and exists only while a point is hovered.
    pub fn show(ui: &mut egui::Ui, dataset: &Dataset, points: &[ScatterPoint]) -> Option<usize> {
        let height = ui.available_height() - 8.0;

        let response = Plot::new("emissions_scatter")
            .height(height)
            .x_axis_label(dataset.raw_x.as_str())
            .y_axis_label(dataset.raw_y.as_str())
            .allow_scroll(false)
            .legend(Legend::default().position(Corner::RightBottom))
            .show(ui, |plot_ui| {
                let bounds = plot_ui.plot_bounds();
                let hovered = plot_ui.pointer_coordinate().and_then(|pointer| {
                    nearest_point(
                        points,
                        pointer.x,
                        pointer.y,
                        bounds.width() * HOVER_TOLERANCE,
                        bounds.height() * HOVER_TOLERANCE,
                    )
                });

                for group in INCOME_GROUPS {
                    let series: Vec<[f64; 2]> = points
                        .iter()
                        .filter(|p| p.group == group)
                        .map(|p| [p.x, p.y])
                        .collect();
                    if series.is_empty() {
                        continue;
                    }
                    plot_ui.points(
                        Points::new(PlotPoints::from(series))
                            .color(group_color(group).gamma_multiply(0.6))
                            .radius(3.0)
                            .name(group),
                    );
                }

                // Labels outside the known set are still drawn, just without
                // a legend entry.
                let other: Vec<[f64; 2]> = points
                    .iter()
                    .filter(|p| !INCOME_GROUPS.contains(&p.group.as_str()))
                    .map(|p| [p.x, p.y])
                    .collect();
                if !other.is_empty() {
                    plot_ui.points(
                        Points::new(PlotPoints::from(other))
                            .color(UNKNOWN_GROUP_COLOR.gamma_multiply(0.6))
                            .radius(3.0),
                    );
                }

                // The hovered point is redrawn enlarged and fully opaque.
                if let Some(i) = hovered {
                    let p = &points[i];
                    plot_ui.points(
                        Points::new(PlotPoints::from(vec![[p.x, p.y]]))
                            .color(group_color(&p.group))
                            .radius(6.0),
                    );
                }

                hovered
            });

        if let Some(i) = response.inner {
            let p = &points[i];
            egui::show_tooltip_at_pointer(
                ui.ctx(),
                ui.layer_id(),
                Id::new("country_tooltip"),
                |ui| {
                    ui.label(RichText::new(&p.name).strong());
                    ui.label(format!("{}: {}", dataset.raw_x, p.x));
                    ui.label(format!("{}: {}", dataset.raw_y, p.y));
                },
            );
        }

        response.inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Record;
    use std::collections::HashMap;

    const X: &str = "Energy use per capita (kilograms of oil equivalent)";
    const Y: &str = "CO2 emissions per capita (metric tons)";

    fn record(name: &str, x: f64, y: f64) -> Record {
        let mut values = HashMap::new();
        values.insert(X.to_string(), x);
        values.insert(Y.to_string(), y);
        Record {
            name: name.to_string(),
            group: "Low income".to_string(),
            values,
        }
    }

    fn dataset(records: Vec<Record>) -> Dataset {
        Dataset {
            records,
            derived: Vec::new(),
            raw_x: X.to_string(),
            raw_y: Y.to_string(),
            z_min: -1.0,
            z_max: 1.0,
        }
    }

    #[test]
    fn test_records_without_both_raw_values_are_not_plotted() {
        let mut no_axis = record("Gamma", 1.0, 1.0);
        no_axis.values.remove(X);

        let ds = dataset(vec![
            record("Alpha", 500.0, 3.5),
            record("Beta", f64::NAN, 7.0),
            no_axis,
        ]);
        let points = scatter_points(&ds);

        // Excluded from the view, still present in the record set.
        assert_eq!(ds.records.len(), 3);
        assert_eq!(points.len(), 1);
        assert_eq!(points[0].name, "Alpha");
        assert_eq!(points[0].record, 0);
        assert_eq!((points[0].x, points[0].y), (500.0, 3.5));
    }

    #[test]
    fn test_nearest_point_picks_the_closest_within_tolerance() {
        let ds = dataset(vec![record("Alpha", 0.0, 0.0), record("Beta", 10.0, 10.0)]);
        let points = scatter_points(&ds);

        assert_eq!(nearest_point(&points, 1.0, 1.0, 2.0, 2.0), Some(0));
        assert_eq!(nearest_point(&points, 9.0, 9.5, 2.0, 2.0), Some(1));
        // Equidistant-ish but closer to Beta.
        assert_eq!(nearest_point(&points, 6.0, 6.0, 10.0, 10.0), Some(1));
    }

    #[test]
    fn test_nearest_point_outside_tolerance_is_none() {
        let ds = dataset(vec![record("Alpha", 0.0, 0.0)]);
        let points = scatter_points(&ds);

        assert_eq!(nearest_point(&points, 5.0, 0.0, 2.0, 2.0), None);
        assert_eq!(nearest_point(&points, 0.1, 0.1, 0.0, 2.0), None);
        assert_eq!(nearest_point(&[], 0.0, 0.0, 2.0, 2.0), None);
    }
}
