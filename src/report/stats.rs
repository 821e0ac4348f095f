// Pure per-metric aggregation over a generated series

use crate::models::{Metric, MetricSample, MetricStats};

/// Mean/max/min for one metric. None when the series is empty.
pub fn metric_stats(samples: &[MetricSample], metric: Metric) -> Option<MetricStats> {
    if samples.is_empty() {
        return None;
    }
    let values: Vec<f64> = samples.iter().map(|s| metric.value(s)).collect();
    let mean = mean_f64(&values);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    Some(MetricStats { mean, max, min })
}

fn mean_f64(v: &[f64]) -> f64 {
    if v.is_empty() {
        return 0.0;
    }
    v.iter().sum::<f64>() / (v.len() as f64)
}
