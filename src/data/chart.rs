//! Full-history chart snapshot sent to the chart region on every tick.

use super::reading::{Channel, ReadingLog};

/// A single point on a plot: x is the tick index, y the channel value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotPoint {
    pub x: f64,
    pub y: f64,
}

/// One line of the chart.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub channel: Channel,
    pub points: Vec<PlotPoint>,
}

impl Series {
    pub fn name(&self) -> &'static str {
        self.channel.label()
    }

    /// Points in the `[x, y]` form egui_plot consumes.
    pub fn xy(&self) -> Vec<[f64; 2]> {
        self.points.iter().map(|p| [p.x, p.y]).collect()
    }
}

/// Multi-series line chart of depth, RPM and torque against time.
///
/// Always built from the whole log, so a replacement never loses history.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartView {
    pub series: Vec<Series>,
}

impl ChartView {
    pub fn from_log(log: &ReadingLog) -> Self {
        let series = Channel::ALL
            .iter()
            .map(|&channel| Series {
                channel,
                points: log
                    .iter()
                    .map(|r| PlotPoint {
                        x: r.time as f64,
                        y: channel.value(r) as f64,
                    })
                    .collect(),
            })
            .collect();
        Self { series }
    }

    /// Number of readings shown (every series has the same length).
    pub fn len(&self) -> usize {
        self.series.first().map_or(0, |s| s.points.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn series(&self, channel: Channel) -> Option<&Series> {
        self.series.iter().find(|s| s.channel == channel)
    }
}
