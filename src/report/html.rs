// Interactive HTML export: one line trace per metric on a 2x2 subplot grid

use std::fs;
use std::path::Path;

use plotly::common::{Line, Mode, Title};
use plotly::layout::{Axis, GridPattern, LayoutGrid};
use plotly::{Layout, Plot, Scatter};

use crate::error::Result;
use crate::report::{MetricsReport, stat_line};

/// Renders the report as a self-contained HTML document.
pub fn render_html(report: &MetricsReport) -> String {
    build_plot(report).to_html()
}

pub(crate) fn save_html(report: &MetricsReport, path: &Path) -> Result<()> {
    fs::write(path, render_html(report))?;
    Ok(())
}

fn build_plot(report: &MetricsReport) -> Plot {
    let x: Vec<String> = report
        .samples()
        .iter()
        .map(|s| s.timestamp.format("%Y-%m-%d %H:%M:%S").to_string())
        .collect();

    let mut plot = Plot::new();
    for (i, (metric, stats)) in report.stats().iter().enumerate() {
        let y: Vec<f64> = report.samples().iter().map(|s| metric.value(s)).collect();
        let name = format!("{} ({})", metric.label(), stat_line(stats));
        let (x_axis, y_axis) = subplot_axes(i);
        let trace = Scatter::new(x.clone(), y)
            .mode(Mode::Lines)
            .name(name.as_str())
            .line(Line::new().color(metric.color_hex()))
            .x_axis(x_axis)
            .y_axis(y_axis);
        plot.add_trace(trace);
    }

    let title = format!(
        "System Metrics Report - {}",
        chrono::Local::now().format("%Y-%m-%d")
    );
    let layout = Layout::new()
        .title(Title::with_text(title))
        .grid(
            LayoutGrid::new()
                .rows(2)
                .columns(2)
                .pattern(GridPattern::Independent),
        )
        .width(1100)
        .height(800)
        .y_axis(usage_axis())
        .y_axis2(usage_axis())
        .y_axis3(usage_axis())
        .y_axis4(usage_axis());
    plot.set_layout(layout);
    plot
}

/// Axis pair for the i-th block of the 2x2 grid.
fn subplot_axes(i: usize) -> (&'static str, &'static str) {
    match i {
        0 => ("x", "y"),
        1 => ("x2", "y2"),
        2 => ("x3", "y3"),
        _ => ("x4", "y4"),
    }
}

fn usage_axis() -> Axis {
    Axis::new()
        .title(Title::with_text("Usage (%)"))
        .range(vec![0.0, 100.0])
}
