use egui::{Color32, RichText, Ui};

use super::panel_trait::{Panel, PanelState};
use crate::data::alerts::AlertSeverity;
use crate::data::status::StatusView;
use crate::sink::DashboardCommand;

fn severity_colors(severity: AlertSeverity) -> (Color32, Color32) {
    // (background, text)
    match severity {
        AlertSeverity::Error => (
            Color32::from_rgb(255, 224, 224),
            Color32::from_rgb(160, 20, 20),
        ),
        AlertSeverity::Warning => (
            Color32::from_rgb(255, 244, 214),
            Color32::from_rgb(140, 90, 0),
        ),
    }
}

/// Status region: current metrics and conditional torque alerts.
pub struct StatusPanel {
    pub state: PanelState,
    view: Option<StatusView>,
}

impl Default for StatusPanel {
    fn default() -> Self {
        Self {
            state: PanelState::new("Current Status", "⚙"),
            view: None,
        }
    }
}

impl StatusPanel {
    pub fn view(&self) -> Option<&StatusView> {
        self.view.as_ref()
    }
}

impl Panel for StatusPanel {
    fn state(&self) -> &PanelState {
        &self.state
    }

    fn apply(&mut self, cmd: DashboardCommand) -> Option<DashboardCommand> {
        match cmd {
            DashboardCommand::ReplaceStatus(view) => {
                self.view = Some(view);
                None
            }
            other => Some(other),
        }
    }

    fn render_panel(&mut self, ui: &mut Ui) {
        ui.heading(self.title_and_icon());
        let Some(view) = &self.view else {
            return;
        };
        for metric in view.metrics() {
            ui.add_space(6.0);
            ui.label(RichText::new(metric.label).small());
            ui.label(RichText::new(metric.value.to_string()).size(28.0).strong());
        }
        ui.add_space(10.0);
        for alert in &view.alerts {
            let (fill, text) = severity_colors(alert.severity());
            egui::Frame::group(ui.style()).fill(fill).show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.colored_label(text, alert.message());
            });
        }
    }
}
