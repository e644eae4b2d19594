use egui::Ui;

use crate::sink::DashboardCommand;

/// Title and icon shared by every dashboard region.
#[derive(Debug, Clone, Copy)]
pub struct PanelState {
    pub title: &'static str,
    pub icon: &'static str,
}

impl PanelState {
    pub fn new(title: &'static str, icon: &'static str) -> Self {
        Self { title, icon }
    }
}

pub trait Panel {
    fn state(&self) -> &PanelState;

    fn title(&self) -> &'static str {
        self.state().title
    }

    fn icon(&self) -> &'static str {
        self.state().icon
    }

    /// Heading text: icon followed by title.
    fn title_and_icon(&self) -> String {
        format!("{} {}", self.icon(), self.title())
    }

    /// Take ownership of the command if it targets this region.
    ///
    /// Returns the command back when it is meant for some other panel.
    fn apply(&mut self, cmd: DashboardCommand) -> Option<DashboardCommand>;

    fn render_panel(&mut self, ui: &mut Ui);
}
