//! Pixel and mask primitives used by the detection pipeline.
//!
//! These reproduce the exact semantics of the classical image operations the
//! two-pass cell isolation relies on: binary-inverted thresholding, filled
//! contour drawing and per-pixel XOR.

use image::{GrayImage, Luma};
use imageproc::contours::Contour;
use imageproc::drawing::draw_polygon_mut;
use imageproc::edges::canny;

use crate::settings::DetectionSettings;

/// Applies a binary-inverted threshold.
///
/// Pixels with intensity at or below `threshold` map to `max_val`, all others
/// to 0, turning dark ruling lines into a bright mask.
pub(crate) fn binary_inverted_threshold(input: &GrayImage, threshold: u8, max_val: u8) -> GrayImage {
    let mut out = GrayImage::new(input.width(), input.height());
    for (dst, src) in out.pixels_mut().zip(input.pixels()) {
        dst.0[0] = if src.0[0] <= threshold { max_val } else { 0 };
    }
    out
}

/// Per-pixel XOR of two equally sized masks.
pub(crate) fn bitwise_xor(a: &GrayImage, b: &GrayImage) -> GrayImage {
    debug_assert_eq!(a.dimensions(), b.dimensions());
    let mut out = GrayImage::new(a.width(), a.height());
    for ((dst, pa), pb) in out.pixels_mut().zip(a.pixels()).zip(b.pixels()) {
        dst.0[0] = pa.0[0] ^ pb.0[0];
    }
    out
}

/// Fills the given contour polygons onto `mask` with full intensity.
///
/// Degenerate contours with fewer than three points cover no area and are
/// skipped.
pub(crate) fn fill_contours(mask: &mut GrayImage, contours: &[Contour<i32>]) {
    for contour in contours {
        if contour.points.len() < 3 {
            continue;
        }
        draw_polygon_mut(mask, &contour.points, Luma([255u8]));
    }
}

/// Runs Canny edge detection with the configured hysteresis thresholds.
///
/// The aperture size and gradient norm fields of the settings are accepted
/// for configuration parity but the underlying implementation uses a fixed
/// 3x3 Sobel aperture.
pub(crate) fn canny_filter(input: &GrayImage, settings: &DetectionSettings) -> GrayImage {
    canny(input, settings.canny_threshold1, settings.canny_threshold2)
}
