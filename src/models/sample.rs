// Metric channels, generated samples, and per-metric statistics

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// One generated row: a timestamp plus all four channel values, each in [0, 100].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricSample {
    pub timestamp: NaiveDateTime,
    pub cpu_usage: f64,
    pub ram_usage: f64,
    pub disk_usage: f64,
    pub network_usage: f64,
}

/// The four synthesized channels, with their static column/color/distribution mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Metric {
    Cpu,
    Ram,
    Disk,
    Network,
}

impl Metric {
    /// Report order: CPU and RAM on the top row, Disk and Network on the bottom.
    pub const ALL: [Metric; 4] = [Metric::Cpu, Metric::Ram, Metric::Disk, Metric::Network];

    pub fn label(self) -> &'static str {
        match self {
            Metric::Cpu => "CPU",
            Metric::Ram => "RAM",
            Metric::Disk => "Disk",
            Metric::Network => "Network",
        }
    }

    /// Column name in the tabular output.
    pub fn column(self) -> &'static str {
        match self {
            Metric::Cpu => "cpu_usage",
            Metric::Ram => "ram_usage",
            Metric::Disk => "disk_usage",
            Metric::Network => "network_usage",
        }
    }

    pub fn color(self) -> (u8, u8, u8) {
        match self {
            Metric::Cpu => (0x1f, 0x77, 0xb4),
            Metric::Ram => (0x2c, 0xa0, 0x2c),
            Metric::Disk => (0xff, 0x7f, 0x0e),
            Metric::Network => (0xd6, 0x27, 0x28),
        }
    }

    pub fn color_hex(self) -> String {
        let (r, g, b) = self.color();
        format!("#{r:02x}{g:02x}{b:02x}")
    }

    /// (mean, standard deviation) of the channel's normal distribution.
    pub fn distribution(self) -> (f64, f64) {
        match self {
            Metric::Cpu => (50.0, 15.0),
            Metric::Ram => (65.0, 12.0),
            Metric::Disk => (45.0, 10.0),
            Metric::Network => (55.0, 20.0),
        }
    }

    pub fn value(self, sample: &MetricSample) -> f64 {
        match self {
            Metric::Cpu => sample.cpu_usage,
            Metric::Ram => sample.ram_usage,
            Metric::Disk => sample.disk_usage,
            Metric::Network => sample.network_usage,
        }
    }
}

/// Scalar aggregates for one metric over a full series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MetricStats {
    pub mean: f64,
    pub max: f64,
    pub min: f64,
}
