// Image compression CLI: one output path, or batch presets into a directory

use std::path::PathBuf;

use anyhow::{Result, bail};
use clap::Parser;
use sysreport::compressor::{ImageCompressor, OutputFormat, preset_dimensions};
use sysreport::models::{CompressionResult, DEFAULT_QUALITY, ResizeSpec};

#[derive(Parser, Debug)]
#[command(version, about = "Resize and recompress an image to standard resolutions")]
struct Args {
    /// Source image path
    source: PathBuf,

    /// Output path (omit when using --batch-dir)
    output: Option<PathBuf>,

    /// Target resolution preset (4K, 1440p, 1080p, 720p, 480p, 360p)
    #[arg(short, long, default_value = "1080p", conflicts_with_all = ["width", "height"])]
    resolution: String,

    /// Explicit target width in pixels
    #[arg(long, requires = "height")]
    width: Option<u32>,

    /// Explicit target height in pixels
    #[arg(long, requires = "width")]
    height: Option<u32>,

    /// JPEG quality factor (1-100)
    #[arg(short, long, default_value_t = DEFAULT_QUALITY)]
    quality: u8,

    /// Fill the target box exactly instead of preserving the aspect ratio
    #[arg(long)]
    stretch: bool,

    /// Output format override (jpeg, png, webp, gif, bmp); detected from the
    /// output extension when omitted
    #[arg(short, long)]
    format: Option<String>,

    /// Compress to the 1080p/720p/480p presets into this directory instead of
    /// producing a single output
    #[arg(long)]
    batch_dir: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let (target_width, target_height) = match (args.width, args.height) {
        (Some(w), Some(h)) => (w, h),
        _ => preset_dimensions(&args.resolution)?,
    };
    let mut spec = ResizeSpec::new(target_width, target_height, args.quality)?;
    if args.stretch {
        spec = spec.stretch();
    }

    let compressor = ImageCompressor::new(&args.source, spec)?;
    let format = args
        .format
        .as_deref()
        .map(OutputFormat::from_name)
        .transpose()?;

    if let Some(dir) = &args.batch_dir {
        let results = compressor.compress_batch(dir, format.unwrap_or(OutputFormat::Jpeg))?;
        println!("Generated {} compressed versions:", results.len());
        for result in &results {
            print_result(result);
        }
    } else {
        let Some(output) = &args.output else {
            bail!("an output path is required unless --batch-dir is set");
        };
        print_result(&compressor.compress(output, format)?);
    }

    Ok(())
}

fn print_result(r: &CompressionResult) {
    println!(
        "  {}x{} -> {}x{} {} ({:.2}MB -> {:.2}MB, {:.2}x smaller): {}",
        r.source_width,
        r.source_height,
        r.target_width,
        r.target_height,
        r.format,
        r.source_size_mb,
        r.output_size_mb,
        r.ratio,
        r.output_path.display()
    );
}
