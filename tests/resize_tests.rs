// Dimension math tests: aspect branches, preset table, spec validation

use sysreport::compressor::{fit_dimensions, preset_dimensions};
use sysreport::error::Error;
use sysreport::models::ResizeSpec;

#[test]
fn matching_aspect_fills_the_box_exactly() {
    // 16:9 source into the 1080p box stays 16:9
    let dims = fit_dimensions((3840, 2160), (1920, 1080), true).unwrap();
    assert_eq!(dims, (1920, 1080));
}

#[test]
fn wider_source_fits_to_width() {
    // 2:1 source into a 16:9 box keeps the width and derives the height
    let dims = fit_dimensions((4000, 2000), (1920, 1080), true).unwrap();
    assert_eq!(dims, (1920, 960));
}

#[test]
fn taller_source_fits_to_height() {
    // 1:2 source into a 16:9 box keeps the height and derives the width
    let dims = fit_dimensions((1000, 2000), (1920, 1080), true).unwrap();
    assert_eq!(dims, (540, 1080));
}

#[test]
fn stretch_returns_the_box_unchanged() {
    let dims = fit_dimensions((4000, 2000), (1920, 1080), false).unwrap();
    assert_eq!(dims, (1920, 1080));
}

#[test]
fn fitted_result_never_exceeds_the_box_and_keeps_the_ratio() {
    let cases = [
        ((3840, 2160), (1280, 720)),
        ((2000, 3000), (854, 480)),
        ((640, 480), (2560, 1440)),
        ((1234, 771), (640, 360)),
        ((5000, 300), (1920, 1080)),
    ];
    for (source, target) in cases {
        let (w, h) = fit_dimensions(source, target, true).unwrap();
        assert!(w <= target.0 && h <= target.1, "{source:?} -> {w}x{h}");
        let source_aspect = source.0 as f64 / source.1 as f64;
        let fitted_aspect = w as f64 / h as f64;
        // One pixel of rounding on the derived dimension
        assert!(
            (fitted_aspect - source_aspect).abs() <= source_aspect / h.min(w) as f64,
            "{source:?} -> {w}x{h}: aspect {fitted_aspect} vs {source_aspect}"
        );
    }
}

#[test]
fn zero_source_dimension_is_rejected() {
    let err = fit_dimensions((100, 0), (1920, 1080), true).unwrap_err();
    assert!(matches!(err, Error::InvalidArgument(_)), "got {err}");
    let err = fit_dimensions((0, 100), (1920, 1080), true).unwrap_err();
    assert!(matches!(err, Error::InvalidArgument(_)), "got {err}");
}

#[test]
fn preset_table_resolves_known_names() {
    assert_eq!(preset_dimensions("4K").unwrap(), (3840, 2160));
    assert_eq!(preset_dimensions("1440p").unwrap(), (2560, 1440));
    assert_eq!(preset_dimensions("1080p").unwrap(), (1920, 1080));
    assert_eq!(preset_dimensions("720p").unwrap(), (1280, 720));
    assert_eq!(preset_dimensions("480p").unwrap(), (854, 480));
    assert_eq!(preset_dimensions("360p").unwrap(), (640, 360));
}

#[test]
fn preset_keys_are_case_sensitive() {
    assert!(preset_dimensions("4k").is_err());
}

#[test]
fn unknown_preset_error_lists_all_valid_names() {
    let err = preset_dimensions("8K").unwrap_err();
    let msg = err.to_string();
    for name in ["4K", "1440p", "1080p", "720p", "480p", "360p"] {
        assert!(msg.contains(name), "missing {name} in: {msg}");
    }
}

#[test]
fn resize_spec_rejects_zero_dimensions() {
    assert!(ResizeSpec::new(0, 1080, 85).is_err());
    assert!(ResizeSpec::new(1920, 0, 85).is_err());
}

#[test]
fn resize_spec_clamps_quality() {
    assert_eq!(ResizeSpec::new(1920, 1080, 0).unwrap().quality, 1);
    assert_eq!(ResizeSpec::new(1920, 1080, 200).unwrap().quality, 100);
    assert_eq!(ResizeSpec::new(1920, 1080, 85).unwrap().quality, 85);
}
