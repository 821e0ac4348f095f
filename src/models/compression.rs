// Resize request and compression outcome models

use std::path::PathBuf;

use serde::Serialize;

use crate::compressor::OutputFormat;
use crate::error::{Error, Result};

pub const DEFAULT_QUALITY: u8 = 85;

/// Target bounding box plus encoding knobs for one compression run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResizeSpec {
    pub target_width: u32,
    pub target_height: u32,
    /// JPEG quality factor, always in [1, 100]. Ignored by lossless formats.
    pub quality: u8,
    pub maintain_aspect: bool,
}

impl ResizeSpec {
    /// Quality is clamped into [1, 100]; zero dimensions are rejected.
    pub fn new(target_width: u32, target_height: u32, quality: u8) -> Result<Self> {
        if target_width == 0 || target_height == 0 {
            return Err(Error::InvalidArgument(format!(
                "target dimensions must be positive, got {target_width}x{target_height}"
            )));
        }
        Ok(Self {
            target_width,
            target_height,
            quality: quality.clamp(1, 100),
            maintain_aspect: true,
        })
    }

    pub fn stretch(mut self) -> Self {
        self.maintain_aspect = false;
        self
    }
}

impl Default for ResizeSpec {
    /// 1080p box at the default quality, aspect preserved.
    fn default() -> Self {
        Self {
            target_width: 1920,
            target_height: 1080,
            quality: DEFAULT_QUALITY,
            maintain_aspect: true,
        }
    }
}

/// Source image facts read before compression: pixel dimensions and file size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SourceInfo {
    pub width: u32,
    pub height: u32,
    pub size_mb: f64,
}

/// Outcome of one compress call, for caller-side reporting.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompressionResult {
    pub source_width: u32,
    pub source_height: u32,
    pub target_width: u32,
    pub target_height: u32,
    pub source_size_mb: f64,
    pub output_size_mb: f64,
    /// source_size_mb / output_size_mb; 0 when the output size is 0.
    pub ratio: f64,
    pub output_path: PathBuf,
    pub format: OutputFormat,
}
