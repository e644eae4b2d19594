//! Native dashboard window.
//!
//! | Sub-module | Responsibility |
//! | ---------- | -------------- |
//! | this file  | [`DashboardApp`]: command ingestion and per-frame layout |
//! | [`run`]    | [`run_dashboard()`] entry point and window options |

mod run;

pub use run::run_dashboard;

use std::sync::mpsc::Receiver;
use std::time::Duration;

use eframe::egui;

use crate::panels::{ChartPanel, ExportPanel, Panel, StatusPanel};
use crate::sink::DashboardCommand;

/// Share of the window width given to the chart region; the status region gets the rest.
const CHART_WIDTH_SHARE: f32 = 0.75;

/// eframe application that renders whatever the simulation loop last sent.
pub struct DashboardApp {
    rx: Receiver<DashboardCommand>,
    pub chart: ChartPanel,
    pub status: StatusPanel,
    pub export: ExportPanel,
    pub headline: Option<String>,
    pub subheadline: Option<String>,
}

impl DashboardApp {
    pub fn new(rx: Receiver<DashboardCommand>) -> Self {
        Self {
            rx,
            chart: ChartPanel::default(),
            status: StatusPanel::default(),
            export: ExportPanel::default(),
            headline: None,
            subheadline: None,
        }
    }

    pub(crate) fn apply_config(&mut self, cfg: &crate::config::DashboardConfig) {
        self.headline = cfg.headline.clone();
        self.subheadline = cfg.subheadline.clone();
    }

    fn panels_mut(&mut self) -> [&mut dyn Panel; 3] {
        [&mut self.chart as &mut dyn Panel, &mut self.status, &mut self.export]
    }

    /// Route one command to the region it replaces.
    pub fn apply_command(&mut self, cmd: DashboardCommand) {
        let mut pending = Some(cmd);
        for panel in self.panels_mut() {
            if let Some(cmd) = pending.take() {
                pending = panel.apply(cmd);
            }
        }
        debug_assert!(pending.is_none(), "command not claimed by any panel");
    }

    /// Drain every pending command. Returns how many were applied.
    pub fn update_data(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(cmd) = self.rx.try_recv() {
            self.apply_command(cmd);
            applied += 1;
        }
        applied
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.update_data();

        if self.headline.is_some() || self.subheadline.is_some() {
            egui::TopBottomPanel::top("dashboard_header").show(ctx, |ui| {
                if let Some(headline) = &self.headline {
                    ui.heading(headline);
                }
                if let Some(sub) = &self.subheadline {
                    ui.label(sub);
                }
                ui.add_space(4.0);
            });
        }

        if self.export.is_offered() {
            egui::TopBottomPanel::bottom("dashboard_export").show(ctx, |ui| {
                self.export.render_panel(ui);
            });
        }

        let width = ctx.input(|i| i.content_rect()).width();
        egui::SidePanel::right("dashboard_status")
            .resizable(true)
            .default_width(width * (1.0 - CHART_WIDTH_SHARE))
            .show(ctx, |ui| {
                self.status.render_panel(ui);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.chart.render_panel(ui);
        });

        // Keep polling the channel even when the user is idle.
        ctx.request_repaint_after(Duration::from_millis(50));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SimulationConfig;
    use crate::simulation::Simulation;
    use crate::sink::channel_dashboard;

    #[test]
    fn drains_a_full_run_into_the_regions() {
        let (mut sink, rx) = channel_dashboard();
        let mut app = DashboardApp::new(rx);
        let cfg = SimulationConfig::immediate().with_seed(7).with_tick_count(5);
        Simulation::from_config(&cfg).run(&mut sink, &cfg).unwrap();

        // 5 chart + 5 status + 1 export
        assert_eq!(app.update_data(), 11);
        assert_eq!(app.chart.view().map(|v| v.len()), Some(5));
        assert_eq!(app.status.view().map(|s| s.time), Some(5));
        assert!(app.export.is_offered());
        assert_eq!(app.update_data(), 0);
    }

    #[test]
    fn export_section_hidden_until_offered() {
        let (_sink, rx) = channel_dashboard();
        let app = DashboardApp::new(rx);
        assert!(!app.export.is_offered());
        assert!(app.chart.view().is_none());
    }
}
