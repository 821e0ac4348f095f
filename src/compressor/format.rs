// Output format table: extension detection and encoder mapping

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Encodable output formats. Quality applies to JPEG only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OutputFormat {
    Jpeg,
    Png,
    WebP,
    Gif,
    Bmp,
}

/// Extension table; lookups lowercase the extension first.
const EXTENSIONS: [(&str, OutputFormat); 6] = [
    ("jpg", OutputFormat::Jpeg),
    ("jpeg", OutputFormat::Jpeg),
    ("png", OutputFormat::Png),
    ("webp", OutputFormat::WebP),
    ("gif", OutputFormat::Gif),
    ("bmp", OutputFormat::Bmp),
];

impl OutputFormat {
    /// Detects the format from the path's extension, case-insensitively.
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .ok_or_else(|| {
                Error::UnsupportedFormat(format!(
                    "{} has no file extension; supported: {}",
                    path.display(),
                    supported_extensions()
                ))
            })?
            .to_ascii_lowercase();
        EXTENSIONS
            .iter()
            .find(|(e, _)| *e == ext)
            .map(|(_, f)| *f)
            .ok_or_else(|| {
                Error::UnsupportedFormat(format!(
                    ".{ext}; supported: {}",
                    supported_extensions()
                ))
            })
    }

    /// Parses a CLI format string such as "jpg", "JPEG" or "png".
    pub fn from_name(name: &str) -> Result<Self> {
        match name.to_ascii_lowercase().as_str() {
            "jpg" | "jpeg" => Ok(OutputFormat::Jpeg),
            "png" => Ok(OutputFormat::Png),
            "webp" => Ok(OutputFormat::WebP),
            "gif" => Ok(OutputFormat::Gif),
            "bmp" => Ok(OutputFormat::Bmp),
            other => Err(Error::UnsupportedFormat(format!(
                "{other}; supported: jpeg, png, webp, gif, bmp"
            ))),
        }
    }

    /// Canonical extension for generated file names.
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Jpeg => "jpg",
            OutputFormat::Png => "png",
            OutputFormat::WebP => "webp",
            OutputFormat::Gif => "gif",
            OutputFormat::Bmp => "bmp",
        }
    }

    /// True for formats that honor the quality factor.
    pub fn uses_quality(self) -> bool {
        matches!(self, OutputFormat::Jpeg)
    }
}

impl From<OutputFormat> for image::ImageFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Jpeg => image::ImageFormat::Jpeg,
            OutputFormat::Png => image::ImageFormat::Png,
            OutputFormat::WebP => image::ImageFormat::WebP,
            OutputFormat::Gif => image::ImageFormat::Gif,
            OutputFormat::Bmp => image::ImageFormat::Bmp,
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OutputFormat::Jpeg => "JPEG",
            OutputFormat::Png => "PNG",
            OutputFormat::WebP => "WEBP",
            OutputFormat::Gif => "GIF",
            OutputFormat::Bmp => "BMP",
        };
        f.write_str(name)
    }
}

fn supported_extensions() -> String {
    EXTENSIONS
        .iter()
        .map(|(e, _)| format!(".{e}"))
        .collect::<Vec<_>>()
        .join(", ")
}
