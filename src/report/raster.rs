// Static PNG export: plotters draws into an RGB buffer, the image crate encodes it

use std::path::Path;

use chrono::{Duration, NaiveDateTime};
use plotters::coord::Shift;
use plotters::coord::types::RangedDateTime;
use plotters::prelude::*;

use crate::error::{Error, Result};
use crate::models::{Metric, MetricSample, MetricStats};
use crate::report::{MetricsReport, stat_line};

/// Raster dimensions: 2x the 1100x800 logical report size.
pub const PNG_WIDTH: u32 = 2200;
pub const PNG_HEIGHT: u32 = 1600;

pub(crate) fn save_png(report: &MetricsReport, path: &Path) -> Result<()> {
    let mut buf = vec![0u8; (PNG_WIDTH * PNG_HEIGHT * 3) as usize];
    {
        let root =
            BitMapBackend::with_buffer(&mut buf, (PNG_WIDTH, PNG_HEIGHT)).into_drawing_area();
        root.fill(&WHITE).map_err(render_err)?;

        let title = format!(
            "System Metrics Report - {}",
            chrono::Local::now().format("%Y-%m-%d")
        );
        let canvas = root
            .titled(title.as_str(), ("sans-serif", 38))
            .map_err(render_err)?;

        let blocks = canvas.split_evenly((2, 2));
        for (block, (metric, stats)) in blocks.iter().zip(report.stats()) {
            draw_metric(block, report.samples(), *metric, *stats)?;
        }

        root.present().map_err(render_err)?;
    }

    let img = image::RgbImage::from_raw(PNG_WIDTH, PNG_HEIGHT, buf)
        .ok_or_else(|| Error::Render("raster buffer size mismatch".into()))?;
    img.save_with_format(path, image::ImageFormat::Png)?;
    Ok(())
}

fn draw_metric(
    block: &DrawingArea<BitMapBackend, Shift>,
    samples: &[MetricSample],
    metric: Metric,
    stats: MetricStats,
) -> Result<()> {
    let (r, g, b) = metric.color();
    let color = RGBColor(r, g, b);
    let caption = format!("{} ({})", metric.label(), stat_line(&stats));

    let (first, last) = x_span(samples);
    let mut chart = ChartBuilder::on(block)
        .caption(caption.as_str(), ("sans-serif", 26))
        .margin(16)
        .x_label_area_size(56)
        .y_label_area_size(80)
        .build_cartesian_2d(RangedDateTime::from(first..last), 0f64..100f64)
        .map_err(render_err)?;

    chart
        .configure_mesh()
        .x_labels(6)
        .x_label_formatter(&|ts: &NaiveDateTime| ts.format("%m-%d").to_string())
        .y_desc("Usage (%)")
        .label_style(("sans-serif", 20))
        .draw()
        .map_err(render_err)?;

    chart
        .draw_series(LineSeries::new(
            samples.iter().map(|s| (s.timestamp, metric.value(s))),
            &color,
        ))
        .map_err(render_err)?;
    Ok(())
}

/// X range of the series; a single-sample series gets an hour of width so the
/// coordinate range stays non-degenerate.
fn x_span(samples: &[MetricSample]) -> (NaiveDateTime, NaiveDateTime) {
    let first = samples[0].timestamp;
    let last = samples[samples.len() - 1].timestamp;
    if first == last {
        (first, first + Duration::hours(1))
    } else {
        (first, last)
    }
}

fn render_err<E: std::fmt::Display>(e: E) -> Error {
    Error::Render(e.to_string())
}
