pub mod chart_ui;
pub mod export_ui;
pub mod panel_trait;
pub mod status_ui;

pub use chart_ui::ChartPanel;
pub use export_ui::ExportPanel;
pub use panel_trait::{Panel, PanelState};
pub use status_ui::StatusPanel;
