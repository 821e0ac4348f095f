// Domain models

mod compression;
mod sample;

pub use compression::{CompressionResult, DEFAULT_QUALITY, ResizeSpec, SourceInfo};
pub use sample::{Metric, MetricSample, MetricStats};
