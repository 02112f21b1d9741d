//! Group Palette
//! Fixed categorical colors for the five income-group labels.

use egui::Color32;

/// The five income groups the dataset classifies countries into. This is a
/// configuration constant, not derived from the data.
pub const INCOME_GROUPS: [&str; 5] = [
    "Low income",
    "Lower middle income",
    "Upper middle income",
    "High income: OECD",
    "High income: nonOECD",
];

/// Categorical colors keyed to `INCOME_GROUPS` by position.
pub const GROUP_COLORS: [Color32; 5] = [
    Color32::from_rgb(31, 119, 180),  // Blue
    Color32::from_rgb(255, 127, 14),  // Orange
    Color32::from_rgb(44, 160, 44),   // Green
    Color32::from_rgb(214, 39, 40),   // Red
    Color32::from_rgb(148, 103, 189), // Purple
];

/// Fallback for labels outside the known set.
pub const UNKNOWN_GROUP_COLOR: Color32 = Color32::from_rgb(127, 127, 127);

/// Color for a group label.
pub fn group_color(group: &str) -> Color32 {
    INCOME_GROUPS
        .iter()
        .position(|g| *g == group)
        .map(|i| GROUP_COLORS[i])
        .unwrap_or(UNKNOWN_GROUP_COLOR)
}
