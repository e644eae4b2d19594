use egui::{Color32, Ui};
use egui_plot::{Legend, Line, Plot};

use super::panel_trait::{Panel, PanelState};
use crate::data::chart::ChartView;
use crate::data::reading::Channel;
use crate::sink::DashboardCommand;

pub fn channel_color(channel: Channel) -> Color32 {
    match channel {
        Channel::Depth => Color32::from_rgb(31, 119, 180),
        Channel::Rpm => Color32::from_rgb(255, 127, 14),
        Channel::Torque => Color32::from_rgb(214, 39, 40),
    }
}

/// Chart region: the live multi-series line chart.
pub struct ChartPanel {
    pub state: PanelState,
    view: Option<ChartView>,
}

impl Default for ChartPanel {
    fn default() -> Self {
        Self {
            state: PanelState::new("Live Drilling Data", "📊"),
            view: None,
        }
    }
}

impl ChartPanel {
    pub fn view(&self) -> Option<&ChartView> {
        self.view.as_ref()
    }
}

impl Panel for ChartPanel {
    fn state(&self) -> &PanelState {
        &self.state
    }

    fn apply(&mut self, cmd: DashboardCommand) -> Option<DashboardCommand> {
        match cmd {
            DashboardCommand::ReplaceChart(view) => {
                self.view = Some(view);
                None
            }
            other => Some(other),
        }
    }

    fn render_panel(&mut self, ui: &mut Ui) {
        ui.heading(self.title_and_icon());
        let Some(view) = &self.view else {
            ui.label("Waiting for the first reading…");
            return;
        };
        Plot::new("drilling_chart")
            .legend(Legend::default())
            .allow_scroll(false)
            .x_axis_label("Time")
            .show(ui, |plot_ui| {
                for series in &view.series {
                    let line = Line::new(series.name(), series.xy())
                        .color(channel_color(series.channel))
                        .width(1.5);
                    plot_ui.line(line);
                }
            });
    }
}
