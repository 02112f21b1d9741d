//! GUI module - User interface components

mod app;
mod panel;

pub use app::ClimascopeApp;
pub use panel::{PanelAction, SourcePanel};
