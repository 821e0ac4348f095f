use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use sysreport::generator;
use sysreport::report::{DEFAULT_HTML_PATH, DEFAULT_PNG_PATH, MetricsReport};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::time::FormatTime;

struct LocalTimer;

impl FormatTime for LocalTimer {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> std::fmt::Result {
        write!(
            w,
            "{}",
            chrono::Local::now().format("%Y-%m-%dT%H:%M:%S%.3f%:z")
        )
    }
}

#[derive(Parser, Debug)]
#[command(version, about = "Generate a synthetic system-metrics report")]
struct Args {
    /// Number of hourly samples to generate
    #[arg(short = 'n', long, default_value_t = 200)]
    samples: usize,

    /// Interactive report output path
    #[arg(long, default_value = DEFAULT_HTML_PATH)]
    html: PathBuf,

    /// Static raster output path
    #[arg(long, default_value = DEFAULT_PNG_PATH)]
    png: PathBuf,

    /// Fixed RNG seed for a reproducible series
    #[arg(long)]
    seed: Option<u64>,

    /// Also write the generated table as pretty-printed JSON
    #[arg(long)]
    data_out: Option<PathBuf>,
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_timer(LocalTimer)
        .with_env_filter(filter)
        .init();

    let args = Args::parse();

    let samples = match args.seed {
        Some(seed) => generator::generate_seeded(args.samples, seed)?,
        None => generator::generate(args.samples)?,
    };
    tracing::info!(rows = samples.len(), "generated synthetic metrics");

    if let Some(path) = &args.data_out {
        std::fs::write(path, serde_json::to_string_pretty(&samples)?)?;
        tracing::info!(path = %path.display(), "wrote metrics table");
    }

    let report = MetricsReport::new(samples)?;
    report.save(&args.html, &args.png)?;

    for (metric, stats) in report.stats() {
        tracing::info!(
            "{:8} - Mean: {:6.1}%, Max: {:6.1}%, Min: {:6.1}%",
            metric.label(),
            stats.mean,
            stats.max,
            stats.min
        );
    }

    Ok(())
}
