//! Error type shared by the simulation loop, the display sink and the exporter.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DashboardError {
    /// Serializing readings to CSV failed.
    #[error("failed to encode CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The receiving side of the display channel is gone (window closed).
    #[error("display sink closed")]
    SinkClosed,
}

pub type Result<T> = std::result::Result<T, DashboardError>;
