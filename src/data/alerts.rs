//! Torque alerts: the immediate high-torque check and the consecutive-run escalation.

/// Torque strictly above this value (Nm) raises a high-torque alert.
pub const HIGH_TORQUE_NM: u32 = 150;
/// Number of consecutive high-torque ticks that escalates to a predictive alert.
pub const ESCALATION_RUN: u32 = 3;

/// Whether a single torque value is above the alert threshold.
pub fn is_high_torque(torque: u32) -> bool {
    torque > HIGH_TORQUE_NM
}

/// Visual weight of an alert in the status region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertSeverity {
    Error,
    Warning,
}

/// A conditional alert shown below the status metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusAlert {
    /// Torque on the current tick exceeded [`HIGH_TORQUE_NM`].
    HighTorque { torque: u32 },
    /// At least [`ESCALATION_RUN`] consecutive ticks, ending now, had high torque.
    PredictiveFailure,
}

impl StatusAlert {
    pub fn message(&self) -> String {
        match self {
            StatusAlert::HighTorque { torque } => format!("⚠ High Torque Alert: {torque} Nm"),
            StatusAlert::PredictiveFailure => {
                "🔮 Predictive Alert: Possible Drill Failure Soon!".to_string()
            }
        }
    }

    pub fn severity(&self) -> AlertSeverity {
        match self {
            StatusAlert::HighTorque { .. } => AlertSeverity::Error,
            StatusAlert::PredictiveFailure => AlertSeverity::Warning,
        }
    }
}

/// Running count of consecutive high-torque ticks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AlertState {
    consecutive_high_torque: u32,
}

impl AlertState {
    /// Fold one tick's torque into the counter: increment on high torque, reset otherwise.
    pub fn observe(&mut self, torque: u32) {
        if is_high_torque(torque) {
            self.consecutive_high_torque = self.consecutive_high_torque.saturating_add(1);
        } else {
            self.consecutive_high_torque = 0;
        }
    }

    pub fn consecutive_high_torque(&self) -> u32 {
        self.consecutive_high_torque
    }

    pub fn is_escalated(&self) -> bool {
        self.consecutive_high_torque >= ESCALATION_RUN
    }

    /// Alerts for the tick that was just observed with `torque`.
    ///
    /// The immediate alert depends only on `torque`; the escalated one only on the counter.
    pub fn alerts_for(&self, torque: u32) -> Vec<StatusAlert> {
        let mut alerts = Vec::with_capacity(2);
        if is_high_torque(torque) {
            alerts.push(StatusAlert::HighTorque { torque });
        }
        if self.is_escalated() {
            alerts.push(StatusAlert::PredictiveFailure);
        }
        alerts
    }
}
