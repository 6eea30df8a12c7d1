//! UI layer for the launch dashboard: app shell, panels, chart painter and theme.

pub mod app;
pub mod chart;
pub mod panels;
pub mod theme;

pub use app::{DashboardGuiApp, StartupConfig};
