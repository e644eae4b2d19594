//! The simulation-and-display loop.
//!
//! Each tick samples a sensor source, appends a [`Reading`] to the log, updates
//! the alert counter, and pushes a full-history chart plus a status snapshot to
//! a [`DisplaySink`]. After the last tick the log is offered as CSV.

use std::collections::VecDeque;

use log::{debug, info, warn};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::config::SimulationConfig;
use crate::data::alerts::AlertState;
use crate::data::chart::ChartView;
use crate::data::export::ExportArtifact;
use crate::data::reading::{
    Reading, ReadingLog, SensorSample, DEPTH_STEP_RANGE, RPM_RANGE, TORQUE_RANGE,
};
use crate::data::status::StatusView;
use crate::error::Result;
use crate::sink::DisplaySink;

/// Anything that can produce one [`SensorSample`] per tick.
pub trait SensorSource {
    fn next_sample(&mut self) -> SensorSample;
}

/// Uniform random readings within the fixed sensor ranges.
///
/// Defaults to ChaCha8, whose output stream is stable across releases, so a
/// seed pins the whole run.
pub struct RandomSensor<R = ChaCha8Rng> {
    rng: R,
}

impl RandomSensor<ChaCha8Rng> {
    /// Reproducible source: the same seed always yields the same sequence.
    pub fn from_seed(seed: u64) -> Self {
        Self::new(ChaCha8Rng::seed_from_u64(seed))
    }

    /// Seeded from the thread-local generator.
    pub fn from_entropy() -> Self {
        Self::new(ChaCha8Rng::from_rng(&mut rand::rng()))
    }
}

impl<R: Rng> RandomSensor<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> SensorSource for RandomSensor<R> {
    fn next_sample(&mut self) -> SensorSample {
        // Draw order matters for seeded reproducibility.
        let depth_delta = self.rng.random_range(DEPTH_STEP_RANGE);
        let rpm = self.rng.random_range(RPM_RANGE);
        let torque = self.rng.random_range(TORQUE_RANGE);
        SensorSample {
            depth_delta,
            rpm,
            torque,
        }
    }
}

/// Replays a fixed list of samples, starting over when it runs out.
#[derive(Debug, Clone)]
pub struct ScriptedSensor {
    script: VecDeque<SensorSample>,
}

impl ScriptedSensor {
    /// Returns `None` for an empty script.
    pub fn new(samples: impl IntoIterator<Item = SensorSample>) -> Option<Self> {
        let script: VecDeque<SensorSample> = samples.into_iter().collect();
        if script.is_empty() {
            return None;
        }
        Some(Self { script })
    }
}

impl SensorSource for ScriptedSensor {
    fn next_sample(&mut self) -> SensorSample {
        let sample = self.script[0];
        self.script.rotate_left(1);
        sample
    }
}

/// What a single tick produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickOutcome {
    pub reading: Reading,
    pub status: StatusView,
}

/// All state of one run: sensor source, cumulative depth, log and alert counter.
pub struct Simulation<S = RandomSensor> {
    source: S,
    depth: u32,
    log: ReadingLog,
    alerts: AlertState,
}

impl Simulation<RandomSensor> {
    /// Seeded when `cfg.seed` is set, otherwise backed by OS entropy.
    pub fn from_config(cfg: &SimulationConfig) -> Self {
        let source = match cfg.seed {
            Some(seed) => RandomSensor::from_seed(seed),
            None => RandomSensor::from_entropy(),
        };
        Self::new(source)
    }
}

impl<S: SensorSource> Simulation<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            depth: 0,
            log: ReadingLog::new(),
            alerts: AlertState::default(),
        }
    }

    pub fn log(&self) -> &ReadingLog {
        &self.log
    }

    pub fn alerts(&self) -> &AlertState {
        &self.alerts
    }

    /// Sample, append and update alerts. Does not touch any display.
    pub fn tick(&mut self) -> TickOutcome {
        let sample = self.source.next_sample();
        self.depth += sample.depth_delta;

        let reading = self.log.append(self.depth, sample.rpm, sample.torque);
        self.alerts.observe(reading.torque);

        debug!(
            "tick {}: depth={} rpm={} torque={} high_torque_run={}",
            reading.time,
            reading.depth,
            reading.rpm,
            reading.torque,
            self.alerts.consecutive_high_torque()
        );
        if self.alerts.is_escalated() {
            warn!(
                "tick {}: torque above threshold for {} consecutive ticks",
                reading.time,
                self.alerts.consecutive_high_torque()
            );
        }

        TickOutcome {
            reading,
            status: StatusView::new(&reading, &self.alerts),
        }
    }

    /// Chart of the entire log so far.
    pub fn chart_view(&self) -> ChartView {
        ChartView::from_log(&self.log)
    }

    /// Run `cfg.tick_count` ticks against `sink`, then offer the CSV export.
    ///
    /// Each tick replaces the chart region, then the status region, then sleeps
    /// for `cfg.tick_delay`. Stops early only if the sink fails.
    pub fn run<D>(&mut self, sink: &mut D, cfg: &SimulationConfig) -> Result<ExportArtifact>
    where
        D: DisplaySink + ?Sized,
    {
        info!(
            "starting drilling simulation: {} ticks, {} ms apart",
            cfg.tick_count,
            cfg.tick_delay.as_millis()
        );
        for _ in 0..cfg.tick_count {
            let outcome = self.tick();
            sink.replace_chart(self.chart_view())?;
            sink.replace_status(outcome.status)?;
            if !cfg.tick_delay.is_zero() {
                std::thread::sleep(cfg.tick_delay);
            }
        }

        let artifact = ExportArtifact::from_log(&self.log)?;
        info!(
            "simulation finished after {} readings; offering {}",
            self.log.len(),
            artifact.file_name
        );
        sink.offer_export(artifact.clone())?;
        Ok(artifact)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(depth_delta: u32, torque: u32) -> SensorSample {
        SensorSample {
            depth_delta,
            rpm: 1000,
            torque,
        }
    }

    #[test]
    fn scripted_sensor_wraps_around() {
        let mut sensor = ScriptedSensor::new([sample(1, 60), sample(2, 70)]).unwrap();
        let torques: Vec<u32> = (0..5).map(|_| sensor.next_sample().torque).collect();
        assert_eq!(torques, vec![60, 70, 60, 70, 60]);
    }

    #[test]
    fn empty_script_is_rejected() {
        assert!(ScriptedSensor::new(Vec::new()).is_none());
    }

    #[test]
    fn tick_accumulates_depth_and_numbers_readings() {
        let script = ScriptedSensor::new([sample(3, 100), sample(1, 100)]).unwrap();
        let mut sim = Simulation::new(script);
        let first = sim.tick().reading;
        let second = sim.tick().reading;
        assert_eq!((first.time, first.depth), (1, 3));
        assert_eq!((second.time, second.depth), (2, 4));
        assert_eq!(sim.log().len(), 2);
    }
}
