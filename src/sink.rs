//! Display sink: the seam between the simulation loop and whatever renders it.
//!
//! The loop issues one replacement per tick per region (chart, status) and a
//! single export offer at the end. [`DashboardSink`] forwards these as
//! [`DashboardCommand`]s over a channel to the egui window; a
//! `Vec<DashboardCommand>` records them in memory.

use std::sync::mpsc::{Receiver, Sender};

use crate::data::chart::ChartView;
use crate::data::export::ExportArtifact;
use crate::data::status::StatusView;
use crate::error::{DashboardError, Result};

/// Messages sent over the channel to drive the UI.
#[derive(Debug, Clone, PartialEq)]
pub enum DashboardCommand {
    /// Replace the chart region with a full-history chart.
    ReplaceChart(ChartView),
    /// Replace the status region with the latest metrics and alerts.
    ReplaceStatus(StatusView),
    /// Show the export section with a downloadable file.
    OfferExport(ExportArtifact),
}

/// Receiver of region replacements.
pub trait DisplaySink {
    fn replace_chart(&mut self, chart: ChartView) -> Result<()>;
    fn replace_status(&mut self, status: StatusView) -> Result<()>;
    fn offer_export(&mut self, artifact: ExportArtifact) -> Result<()>;
}

/// Convenience sender for feeding the dashboard window.
#[derive(Clone)]
pub struct DashboardSink {
    tx: Sender<DashboardCommand>,
}

impl DashboardSink {
    /// Send a raw command. Fails with [`DashboardError::SinkClosed`] once the UI is gone.
    pub fn send(&self, cmd: DashboardCommand) -> Result<()> {
        self.tx.send(cmd).map_err(|_| DashboardError::SinkClosed)
    }
}

impl DisplaySink for DashboardSink {
    fn replace_chart(&mut self, chart: ChartView) -> Result<()> {
        self.send(DashboardCommand::ReplaceChart(chart))
    }

    fn replace_status(&mut self, status: StatusView) -> Result<()> {
        self.send(DashboardCommand::ReplaceStatus(status))
    }

    fn offer_export(&mut self, artifact: ExportArtifact) -> Result<()> {
        self.send(DashboardCommand::OfferExport(artifact))
    }
}

/// Records every command in order; never fails.
impl DisplaySink for Vec<DashboardCommand> {
    fn replace_chart(&mut self, chart: ChartView) -> Result<()> {
        self.push(DashboardCommand::ReplaceChart(chart));
        Ok(())
    }

    fn replace_status(&mut self, status: StatusView) -> Result<()> {
        self.push(DashboardCommand::ReplaceStatus(status));
        Ok(())
    }

    fn offer_export(&mut self, artifact: ExportArtifact) -> Result<()> {
        self.push(DashboardCommand::OfferExport(artifact));
        Ok(())
    }
}

/// Create a new channel pair for the dashboard: `(DashboardSink, Receiver<DashboardCommand>)`.
pub fn channel_dashboard() -> (DashboardSink, Receiver<DashboardCommand>) {
    let (tx, rx) = std::sync::mpsc::channel();
    (DashboardSink { tx }, rx)
}
