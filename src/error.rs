// Library error taxonomy. Binaries wrap these in anyhow at the top level.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// Rejected input: bad sample count, zero dimension, unknown preset, empty series.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Source image does not exist. Checked before any output path is touched.
    #[error("image not found: {}", .0.display())]
    NotFound(PathBuf),

    /// No explicit output format and the extension is not in the format table.
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("image processing failed: {0}")]
    Image(#[from] image::ImageError),

    #[error("chart rendering failed: {0}")]
    Render(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
