//! Top-level entry point for running the dashboard as a native window.

use eframe::egui;

use crate::config::DashboardConfig;
use crate::sink::DashboardCommand;

use super::DashboardApp;

/// Launch the dashboard in a native window and block until it is closed.
///
/// The simulation loop is expected to run elsewhere (typically a producer
/// thread) and feed `rx` through a [`DashboardSink`](crate::DashboardSink).
pub fn run_dashboard(
    rx: std::sync::mpsc::Receiver<DashboardCommand>,
    mut cfg: DashboardConfig,
) -> eframe::Result<()> {
    let mut app = DashboardApp::new(rx);
    app.apply_config(&cfg);

    let title = cfg.title.clone();
    let mut opts = cfg
        .native_options
        .take()
        .unwrap_or_else(eframe::NativeOptions::default);

    // Wide layout unless the caller chose a size.
    if opts.viewport.inner_size.is_none() {
        opts.viewport = opts
            .viewport
            .clone()
            .with_inner_size(egui::vec2(1400.0, 900.0));
    }

    eframe::run_native(&title, opts, Box::new(|_cc| Ok(Box::new(app))))
}
