// Resolution presets and aspect-preserving fit arithmetic

use crate::error::{Error, Result};

/// Standard video resolutions. Keys are case-sensitive.
pub const PRESETS: [(&str, (u32, u32)); 6] = [
    ("4K", (3840, 2160)),
    ("1440p", (2560, 1440)),
    ("1080p", (1920, 1080)),
    ("720p", (1280, 720)),
    ("480p", (854, 480)),
    ("360p", (640, 360)),
];

/// Presets produced by batch mode, largest first.
pub const BATCH_PRESETS: [&str; 3] = ["1080p", "720p", "480p"];

pub fn preset_dimensions(name: &str) -> Result<(u32, u32)> {
    PRESETS
        .iter()
        .find(|(key, _)| *key == name)
        .map(|(_, dims)| *dims)
        .ok_or_else(|| {
            let available = PRESETS
                .iter()
                .map(|(key, _)| *key)
                .collect::<Vec<_>>()
                .join(", ");
            Error::InvalidArgument(format!("unknown preset '{name}'; available: {available}"))
        })
}

/// Final output dimensions for a source fitted into a target box.
///
/// With `maintain_aspect` the result never exceeds the box in either dimension
/// and keeps the source ratio up to integer rounding: a relatively wider source
/// keeps the target width and derives the height, otherwise the target height
/// is kept and the width derived. Without it the box is returned unchanged,
/// which may distort. Zero source dimensions are rejected.
pub fn fit_dimensions(
    source: (u32, u32),
    target: (u32, u32),
    maintain_aspect: bool,
) -> Result<(u32, u32)> {
    let (src_w, src_h) = source;
    let (target_w, target_h) = target;
    if src_w == 0 || src_h == 0 {
        return Err(Error::InvalidArgument(format!(
            "source dimensions must be positive, got {src_w}x{src_h}"
        )));
    }
    if !maintain_aspect {
        return Ok(target);
    }

    let src_aspect = f64::from(src_w) / f64::from(src_h);
    let target_aspect = f64::from(target_w) / f64::from(target_h);
    let (w, h) = if src_aspect > target_aspect {
        // Source is wider, fit to width
        (target_w, (f64::from(target_w) / src_aspect).floor() as u32)
    } else {
        // Source is taller, fit to height
        ((f64::from(target_h) * src_aspect).floor() as u32, target_h)
    };
    // Extreme ratios can round a derived dimension down to zero pixels
    Ok((w.max(1), h.max(1)))
}
