//! Sensor readings and the append-only log that holds them.

use std::ops::Range;

use serde::{Deserialize, Serialize};

/// Per-tick depth increment, in metres.
pub const DEPTH_STEP_RANGE: Range<u32> = 1..5;
/// Rotary speed range.
pub const RPM_RANGE: Range<u32> = 800..1200;
/// Torque range, in Nm.
pub const TORQUE_RANGE: Range<u32> = 50..200;

/// One raw draw from a sensor source, before it is folded into a [`Reading`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SensorSample {
    pub depth_delta: u32,
    pub rpm: u32,
    pub torque: u32,
}

/// A single synthetic sensor sample at a given tick.
///
/// Field names serialize to the CSV header `Time,Depth,RPM,Torque`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reading {
    #[serde(rename = "Time")]
    pub time: u32,
    #[serde(rename = "Depth")]
    pub depth: u32,
    #[serde(rename = "RPM")]
    pub rpm: u32,
    #[serde(rename = "Torque")]
    pub torque: u32,
}

/// The three plotted channels of a [`Reading`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Depth,
    Rpm,
    Torque,
}

impl Channel {
    pub const ALL: &'static [Channel] = &[Channel::Depth, Channel::Rpm, Channel::Torque];

    /// Legend / column label.
    pub fn label(&self) -> &'static str {
        match self {
            Channel::Depth => "Depth",
            Channel::Rpm => "RPM",
            Channel::Torque => "Torque",
        }
    }

    pub fn value(&self, reading: &Reading) -> u32 {
        match self {
            Channel::Depth => reading.depth,
            Channel::Rpm => reading.rpm,
            Channel::Torque => reading.torque,
        }
    }
}

/// Ordered, append-only sequence of readings indexed by `time` (1-based).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReadingLog {
    readings: Vec<Reading>,
}

impl ReadingLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the newest reading, stamped with the next tick index, and return it.
    pub fn append(&mut self, depth: u32, rpm: u32, torque: u32) -> Reading {
        let reading = Reading {
            time: self.readings.len() as u32 + 1,
            depth,
            rpm,
            torque,
        };
        self.readings.push(reading);
        reading
    }

    pub fn len(&self) -> usize {
        self.readings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }

    /// Reading recorded at tick `time`, if any.
    pub fn get(&self, time: u32) -> Option<&Reading> {
        let idx = (time as usize).checked_sub(1)?;
        self.readings.get(idx)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Reading> {
        self.readings.iter()
    }

    pub fn as_slice(&self) -> &[Reading] {
        &self.readings
    }
}

impl<'a> IntoIterator for &'a ReadingLog {
    type Item = &'a Reading;
    type IntoIter = std::slice::Iter<'a, Reading>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
