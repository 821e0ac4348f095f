// Report tests: series validation, statistics, HTML-then-PNG save policy

mod common;

use sysreport::error::Error;
use sysreport::generator::generate_seeded;
use sysreport::models::Metric;
use sysreport::report::{MetricsReport, render_html};
use sysreport::report::stats::metric_stats;

#[test]
fn empty_series_is_rejected() {
    let err = MetricsReport::new(vec![]).unwrap_err();
    assert!(matches!(err, Error::InvalidArgument(_)), "got {err}");
}

#[test]
fn metric_stats_computes_mean_max_min() {
    let samples = vec![
        common::sample(0, 10.0, 60.0, 40.0, 50.0),
        common::sample(1, 20.0, 65.0, 45.0, 55.0),
        common::sample(2, 30.0, 70.0, 50.0, 60.0),
    ];
    let cpu = metric_stats(&samples, Metric::Cpu).unwrap();
    assert_eq!(cpu.mean, 20.0);
    assert_eq!(cpu.max, 30.0);
    assert_eq!(cpu.min, 10.0);

    let network = metric_stats(&samples, Metric::Network).unwrap();
    assert_eq!(network.mean, 55.0);
    assert_eq!(network.max, 60.0);
    assert_eq!(network.min, 50.0);
}

#[test]
fn metric_stats_on_empty_series_is_none() {
    assert!(metric_stats(&[], Metric::Disk).is_none());
}

#[test]
fn report_carries_stats_for_all_four_metrics_in_order() {
    let samples = generate_seeded(24, 3).unwrap();
    let report = MetricsReport::new(samples).unwrap();
    let metrics: Vec<Metric> = report.stats().iter().map(|(m, _)| *m).collect();
    assert_eq!(
        metrics,
        vec![Metric::Cpu, Metric::Ram, Metric::Disk, Metric::Network]
    );
}

#[test]
fn rendered_html_contains_every_metric_block() {
    let samples = generate_seeded(24, 3).unwrap();
    let report = MetricsReport::new(samples).unwrap();
    let html = render_html(&report);
    assert!(html.contains("<html"));
    for label in ["CPU", "RAM", "Disk", "Network"] {
        assert!(html.contains(label), "missing {label}");
    }
    // annotations carry one-decimal percentages
    assert!(html.contains("mean "));
    assert!(html.contains('%'));
}

#[test]
fn save_writes_html_and_tolerates_png_failure() {
    let dir = tempfile::tempdir().unwrap();
    let html_path = dir.path().join("report.html");
    // an unwritable PNG path must not fail the save
    let png_path = dir.path().join("no-such-dir").join("report.png");

    let samples = generate_seeded(24, 3).unwrap();
    let report = MetricsReport::new(samples).unwrap();
    report.save(&html_path, &png_path).unwrap();

    assert!(html_path.exists());
    assert!(std::fs::metadata(&html_path).unwrap().len() > 0);
}
