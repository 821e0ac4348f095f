// Metrics report: validation, statistics, and the HTML-then-PNG save policy

mod html;
mod raster;
pub mod stats;

use std::path::Path;

use tracing::{info, warn};

use crate::error::{Error, Result};
use crate::models::{Metric, MetricSample, MetricStats};

pub use html::render_html;
pub use raster::{PNG_HEIGHT, PNG_WIDTH};

pub const DEFAULT_HTML_PATH: &str = "cpu_usage_report.html";
pub const DEFAULT_PNG_PATH: &str = "cpu_usage_report.png";

/// A validated series plus the per-metric statistics shown on every chart.
#[derive(Debug)]
pub struct MetricsReport {
    samples: Vec<MetricSample>,
    stats: Vec<(Metric, MetricStats)>,
}

impl MetricsReport {
    /// Fails with InvalidArgument on an empty series.
    pub fn new(samples: Vec<MetricSample>) -> Result<Self> {
        let stats = Metric::ALL
            .iter()
            .filter_map(|&m| stats::metric_stats(&samples, m).map(|s| (m, s)))
            .collect::<Vec<_>>();
        if stats.is_empty() {
            return Err(Error::InvalidArgument("series is empty".into()));
        }
        Ok(Self { samples, stats })
    }

    pub fn samples(&self) -> &[MetricSample] {
        &self.samples
    }

    /// Statistics in report order (CPU, RAM, Disk, Network).
    pub fn stats(&self) -> &[(Metric, MetricStats)] {
        &self.stats
    }

    /// Saves the interactive HTML document, then attempts the static PNG.
    /// HTML failures propagate; a PNG failure is downgraded to a warning
    /// because the HTML artifact has already been written.
    pub fn save(&self, html_path: &Path, png_path: &Path) -> Result<()> {
        html::save_html(self, html_path)?;
        info!(path = %html_path.display(), "saved HTML report");

        match raster::save_png(self, png_path) {
            Ok(()) => info!(path = %png_path.display(), "saved PNG report"),
            Err(e) => warn!(error = %e, path = %png_path.display(), "PNG export failed"),
        }
        Ok(())
    }
}

/// The three scalar annotations shown with each metric block.
pub(crate) fn stat_line(stats: &MetricStats) -> String {
    format!(
        "mean {:.1}%, max {:.1}%, min {:.1}%",
        stats.mean, stats.max, stats.min
    )
}
