//! Configuration for the simulation loop and the dashboard window.

use std::time::Duration;

/// Ticks executed by a default run.
pub const DEFAULT_TICK_COUNT: u32 = 60;
/// Pause between ticks in a default run.
pub const DEFAULT_TICK_DELAY: Duration = Duration::from_millis(500);

/// Pacing and randomness of the simulation loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulationConfig {
    /// Number of ticks before the export is offered.
    pub tick_count: u32,
    /// Blocking pause after each tick. Zero skips the sleep entirely.
    pub tick_delay: Duration,
    /// Fixed seed for reproducible runs; `None` draws from OS entropy.
    pub seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            tick_count: DEFAULT_TICK_COUNT,
            tick_delay: DEFAULT_TICK_DELAY,
            seed: None,
        }
    }
}

impl SimulationConfig {
    /// Same tick count, no sleeping. Used for tests and headless runs.
    pub fn immediate() -> Self {
        Self {
            tick_delay: Duration::ZERO,
            ..Self::default()
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_tick_count(mut self, tick_count: u32) -> Self {
        self.tick_count = tick_count;
        self
    }
}

/// Top-level configuration passed to [`run_dashboard`](crate::run_dashboard).
pub struct DashboardConfig {
    pub simulation: SimulationConfig,
    /// Native window title.
    pub title: String,
    /// Heading shown at the top of the window.
    pub headline: Option<String>,
    /// Line shown below the headline.
    pub subheadline: Option<String>,
    /// Optional native window options. If `None`, a wide default window is used.
    pub native_options: Option<eframe::NativeOptions>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            simulation: SimulationConfig::default(),
            title: "Smart Drilling Dashboard".to_string(),
            headline: Some("⛏ Smart Drilling IoT Dashboard".to_string()),
            subheadline: Some(
                "Real-time monitoring of drilling parameters with predictive alerts.".to_string(),
            ),
            native_options: None,
        }
    }
}
