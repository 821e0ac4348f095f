// Shared test helpers

#![allow(dead_code)]

use std::path::Path;

use chrono::{Duration, NaiveDate, NaiveDateTime};
use image::{Rgb, RgbImage, Rgba, RgbaImage};
use sysreport::models::MetricSample;

pub fn epoch() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 1, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
}

pub fn sample(hour: i64, cpu: f64, ram: f64, disk: f64, network: f64) -> MetricSample {
    MetricSample {
        timestamp: epoch() + Duration::hours(hour),
        cpu_usage: cpu,
        ram_usage: ram,
        disk_usage: disk,
        network_usage: network,
    }
}

/// Writes an opaque RGB gradient PNG fixture.
pub fn write_rgb_png(path: &Path, width: u32, height: u32) {
    let img = RgbImage::from_fn(width, height, |x, y| {
        Rgb([(x % 256) as u8, (y % 256) as u8, 128])
    });
    img.save(path).expect("write RGB fixture");
}

/// Writes a PNG fixture with a semi-transparent alpha channel.
pub fn write_rgba_png(path: &Path, width: u32, height: u32) {
    let img = RgbaImage::from_fn(width, height, |x, y| {
        Rgba([(x % 256) as u8, (y % 256) as u8, 200, 100])
    });
    img.save(path).expect("write RGBA fixture");
}
