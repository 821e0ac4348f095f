// Image compression: decode, flatten, Lanczos resize, format-aware re-encode

mod format;
pub mod resize;

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::{CompressionType, FilterType as PngFilter, PngEncoder};
use image::imageops::FilterType;
use image::{DynamicImage, Rgb, RgbImage};
use tracing::debug;

use crate::error::{Error, Result};
use crate::models::{CompressionResult, ResizeSpec, SourceInfo};

pub use format::OutputFormat;
pub use resize::{BATCH_PRESETS, PRESETS, fit_dimensions, preset_dimensions};

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// Resizes and re-encodes one source image into target resolutions.
#[derive(Debug)]
pub struct ImageCompressor {
    source_path: PathBuf,
    spec: ResizeSpec,
}

impl ImageCompressor {
    /// Fails with NotFound when the source does not exist; nothing is written here.
    pub fn new(source_path: impl Into<PathBuf>, spec: ResizeSpec) -> Result<Self> {
        let source_path = source_path.into();
        if !source_path.exists() {
            return Err(Error::NotFound(source_path));
        }
        Ok(Self { source_path, spec })
    }

    /// Builds the compressor from a named resolution preset.
    pub fn from_preset(
        source_path: impl Into<PathBuf>,
        preset: &str,
        quality: u8,
    ) -> Result<Self> {
        let (width, height) = preset_dimensions(preset)?;
        Self::new(source_path, ResizeSpec::new(width, height, quality)?)
    }

    pub fn spec(&self) -> &ResizeSpec {
        &self.spec
    }

    /// Source dimensions and file size without a full decode.
    pub fn source_info(&self) -> Result<SourceInfo> {
        let (width, height) = image::image_dimensions(&self.source_path)?;
        let size_mb = fs::metadata(&self.source_path)?.len() as f64 / BYTES_PER_MB;
        Ok(SourceInfo {
            width,
            height,
            size_mb,
        })
    }

    /// Compresses into `output_path`. The format comes from the explicit
    /// argument or, failing that, from the output extension.
    pub fn compress(
        &self,
        output_path: impl AsRef<Path>,
        format: Option<OutputFormat>,
    ) -> Result<CompressionResult> {
        let output_path = output_path.as_ref();
        let format = match format {
            Some(f) => f,
            None => OutputFormat::from_path(output_path)?,
        };

        let source = self.source_info()?;
        let mut img = image::open(&self.source_path)?;

        // JPEG has no alpha channel: flatten onto an opaque white backdrop first
        if format == OutputFormat::Jpeg && img.color().has_alpha() {
            img = flatten_onto_white(&img);
        }

        let (width, height) = fit_dimensions(
            (source.width, source.height),
            (self.spec.target_width, self.spec.target_height),
            self.spec.maintain_aspect,
        )?;
        let resized = img.resize_exact(width, height, FilterType::Lanczos3);
        self.encode(&resized, output_path, format)?;

        let output_size_mb = fs::metadata(output_path)?.len() as f64 / BYTES_PER_MB;
        let ratio = if output_size_mb > 0.0 {
            source.size_mb / output_size_mb
        } else {
            0.0
        };
        debug!(
            source = %self.source_path.display(),
            output = %output_path.display(),
            %format,
            "compressed {}x{} -> {}x{}",
            source.width,
            source.height,
            width,
            height
        );

        Ok(CompressionResult {
            source_width: source.width,
            source_height: source.height,
            target_width: width,
            target_height: height,
            source_size_mb: source.size_mb,
            output_size_mb,
            ratio,
            output_path: output_path.to_path_buf(),
            format,
        })
    }

    /// Produces one output per batch preset (1080p, 720p, 480p) into
    /// `output_dir`, creating the directory if absent. Quality and aspect
    /// handling are inherited from this compressor's spec.
    pub fn compress_batch(
        &self,
        output_dir: impl AsRef<Path>,
        format: OutputFormat,
    ) -> Result<Vec<CompressionResult>> {
        let output_dir = output_dir.as_ref();
        fs::create_dir_all(output_dir)?;

        let mut results = Vec::with_capacity(BATCH_PRESETS.len());
        for preset in BATCH_PRESETS {
            let (width, height) = preset_dimensions(preset)?;
            let compressor = Self {
                source_path: self.source_path.clone(),
                spec: ResizeSpec {
                    target_width: width,
                    target_height: height,
                    ..self.spec.clone()
                },
            };
            let output = output_dir.join(format!("image_{preset}.{}", format.extension()));
            results.push(compressor.compress(output, Some(format))?);
        }
        Ok(results)
    }

    fn encode(&self, img: &DynamicImage, output_path: &Path, format: OutputFormat) -> Result<()> {
        match format {
            OutputFormat::Jpeg => {
                let mut writer = BufWriter::new(File::create(output_path)?);
                let encoder = JpegEncoder::new_with_quality(&mut writer, self.spec.quality);
                img.write_with_encoder(encoder)?;
                writer.flush()?;
            }
            OutputFormat::Png => {
                // Best compression stands in for the optimize-for-size flag
                let mut writer = BufWriter::new(File::create(output_path)?);
                let encoder = PngEncoder::new_with_quality(
                    &mut writer,
                    CompressionType::Best,
                    PngFilter::Adaptive,
                );
                img.write_with_encoder(encoder)?;
                writer.flush()?;
            }
            _ => img.save_with_format(output_path, format.into())?,
        }
        Ok(())
    }
}

/// Quick single-shot compression against a named preset.
pub fn compress_image(
    source: impl Into<PathBuf>,
    output: impl AsRef<Path>,
    preset: &str,
    quality: u8,
    maintain_aspect: bool,
) -> Result<CompressionResult> {
    let mut compressor = ImageCompressor::from_preset(source, preset, quality)?;
    compressor.spec.maintain_aspect = maintain_aspect;
    compressor.compress(output, None)
}

/// Full-opacity compositing: every pixel blended over white by its own alpha.
fn flatten_onto_white(img: &DynamicImage) -> DynamicImage {
    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();
    let mut flat = RgbImage::new(width, height);
    for (x, y, pixel) in rgba.enumerate_pixels() {
        let [r, g, b, a] = pixel.0;
        let a = u32::from(a);
        let blend = |c: u8| ((u32::from(c) * a + 255 * (255 - a) + 127) / 255) as u8;
        flat.put_pixel(x, y, Rgb([blend(r), blend(g), blend(b)]));
    }
    DynamicImage::ImageRgb8(flat)
}
