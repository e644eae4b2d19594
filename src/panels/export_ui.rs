use egui::Ui;
use log::{error, info};

use super::panel_trait::{Panel, PanelState};
use crate::data::export::ExportArtifact;
use crate::sink::DashboardCommand;

/// Export section: appears once the run is over and offers the CSV for download.
pub struct ExportPanel {
    pub state: PanelState,
    artifact: Option<ExportArtifact>,
}

impl Default for ExportPanel {
    fn default() -> Self {
        Self {
            state: PanelState::new("Export Data", "📂"),
            artifact: None,
        }
    }
}

impl ExportPanel {
    pub fn artifact(&self) -> Option<&ExportArtifact> {
        self.artifact.as_ref()
    }

    pub fn is_offered(&self) -> bool {
        self.artifact.is_some()
    }
}

impl Panel for ExportPanel {
    fn state(&self) -> &PanelState {
        &self.state
    }

    fn apply(&mut self, cmd: DashboardCommand) -> Option<DashboardCommand> {
        match cmd {
            DashboardCommand::OfferExport(artifact) => {
                self.artifact = Some(artifact);
                None
            }
            other => Some(other),
        }
    }

    fn render_panel(&mut self, ui: &mut Ui) {
        let Some(artifact) = &self.artifact else {
            return;
        };
        ui.heading(self.title_and_icon());
        ui.horizontal(|ui| {
            if ui
                .button("Download CSV")
                .on_hover_text(format!("Save {} ({})", artifact.file_name, artifact.mime))
                .clicked()
            {
                // Nothing is written unless the user confirms a location.
                if let Some(path) = rfd::FileDialog::new()
                    .set_file_name(&artifact.file_name)
                    .add_filter("CSV", &["csv"])
                    .save_file()
                {
                    match artifact.save_to(&path) {
                        Ok(()) => info!("saved {} readings to {:?}", artifact.row_count(), path),
                        Err(e) => error!("failed to save CSV export: {e}"),
                    }
                }
            }
            ui.label(format!("{} readings", artifact.row_count()));
        });
    }
}
