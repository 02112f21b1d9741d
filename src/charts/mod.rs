//! Charts module - linked scatter and profile views

mod bars;
mod palette;
mod scatter;

pub use bars::{profile_bars, ProfileBar, ProfileChart};
pub use palette::{group_color, INCOME_GROUPS};
pub use scatter::{nearest_point, scatter_points, ScatterChart, ScatterPoint};
