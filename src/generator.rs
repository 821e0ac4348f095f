// Synthetic metrics synthesis: clipped normal draws per channel, hourly timestamps

use chrono::{Duration, NaiveDate, NaiveDateTime};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand_distr::{Distribution, Normal};

use crate::error::{Error, Result};
use crate::models::{Metric, MetricSample};

/// First timestamp of every generated series.
fn series_epoch() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 1, 1)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .expect("static epoch is valid")
}

/// Generates `n` hourly samples with OS-seeded randomness.
pub fn generate(n: usize) -> Result<Vec<MetricSample>> {
    generate_with_rng(n, &mut SmallRng::from_os_rng())
}

/// Deterministic variant for reproducible reports and tests.
pub fn generate_seeded(n: usize, seed: u64) -> Result<Vec<MetricSample>> {
    generate_with_rng(n, &mut SmallRng::seed_from_u64(seed))
}

fn generate_with_rng(n: usize, rng: &mut SmallRng) -> Result<Vec<MetricSample>> {
    if n < 1 {
        return Err(Error::InvalidArgument(format!(
            "sample count must be at least 1, got {n}"
        )));
    }

    let channels = Metric::ALL.map(|m| {
        let (mean, std_dev) = m.distribution();
        Normal::new(mean, std_dev)
            .map_err(|e| Error::InvalidArgument(format!("{} distribution: {e}", m.label())))
    });
    let [cpu, ram, disk, network] = channels;
    let (cpu, ram, disk, network) = (cpu?, ram?, disk?, network?);

    let epoch = series_epoch();
    let mut samples = Vec::with_capacity(n);
    for i in 0..n {
        samples.push(MetricSample {
            timestamp: epoch + Duration::hours(i as i64),
            cpu_usage: draw(&cpu, rng),
            ram_usage: draw(&ram, rng),
            disk_usage: draw(&disk, rng),
            network_usage: draw(&network, rng),
        });
    }
    Ok(samples)
}

/// One clipped draw: absolute value, then saturate into [0, 100].
fn draw(dist: &Normal<f64>, rng: &mut SmallRng) -> f64 {
    dist.sample(rng).abs().clamp(0.0, 100.0)
}
