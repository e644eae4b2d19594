//! Drilling dashboard crate root: re-exports and module wiring.
//!
//! A simulated drilling rig streams depth, RPM and torque readings into a live
//! egui chart with torque alerts, then offers the run as a CSV download.
//!
//! - `data`: readings, alert counter, chart/status snapshots and CSV export
//! - `simulation`: sensor sources and the tick loop
//! - `sink`: the display seam and the channel that feeds the window
//! - `panels`: chart, status and export regions
//! - `app`: the eframe application and `run_dashboard`
//! - `config`: tick count, delay, seed and window settings

pub mod app;
pub mod config;
pub mod data;
pub mod error;
pub mod panels;
pub mod simulation;
pub mod sink;

// Public re-exports for a compact external API
pub use app::{run_dashboard, DashboardApp};
pub use config::{DashboardConfig, SimulationConfig};
pub use data::alerts::{AlertState, StatusAlert};
pub use data::chart::{ChartView, PlotPoint};
pub use data::export::ExportArtifact;
pub use data::reading::{Reading, ReadingLog, SensorSample};
pub use data::status::StatusView;
pub use error::DashboardError;
pub use simulation::{RandomSensor, ScriptedSensor, SensorSource, Simulation, TickOutcome};
pub use sink::{channel_dashboard, DashboardCommand, DashboardSink, DisplaySink};
