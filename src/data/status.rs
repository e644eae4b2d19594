//! Point-in-time indicators for the status region.

use super::alerts::{AlertState, StatusAlert};
use super::reading::Reading;

/// A labelled value, rendered as a metric widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Metric {
    pub label: &'static str,
    pub value: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusView {
    pub time: u32,
    pub depth: u32,
    pub rpm: u32,
    pub torque: u32,
    pub alerts: Vec<StatusAlert>,
}

impl StatusView {
    /// Status after `reading` has been observed by `alerts`.
    pub fn new(reading: &Reading, alerts: &AlertState) -> Self {
        Self {
            time: reading.time,
            depth: reading.depth,
            rpm: reading.rpm,
            torque: reading.torque,
            alerts: alerts.alerts_for(reading.torque),
        }
    }

    pub fn metrics(&self) -> [Metric; 3] {
        [
            Metric {
                label: "Depth (m)",
                value: self.depth,
            },
            Metric {
                label: "RPM",
                value: self.rpm,
            },
            Metric {
                label: "Torque (Nm)",
                value: self.torque,
            },
        ]
    }

    pub fn has_high_torque(&self) -> bool {
        self.alerts
            .iter()
            .any(|a| matches!(a, StatusAlert::HighTorque { .. }))
    }

    pub fn is_escalated(&self) -> bool {
        self.alerts.contains(&StatusAlert::PredictiveFailure)
    }
}
