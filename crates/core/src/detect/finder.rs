//! Grid detection pipeline.
//!
//! Isolates interior table cells with a two-pass contour trick: an inverted
//! threshold turns ruling lines into a bright mask, the filled external
//! contour of that mask is XORed back in to erase the outer border, and the
//! connected blobs that remain are exactly the cell interiors. Alternative
//! approaches (line-intersection grids, Hough transforms) produce different
//! rectangle sets; the sequence here must not be reordered.

use image::GrayImage;
use tracing::debug;

use crate::diagnostics::DiagnosticSink;
use crate::error::Result;
use crate::settings::DetectionSettings;

use super::contours::{approx_bounding_rect, external_contours};
use super::grid::sort_reading_order;
use super::ops::{binary_inverted_threshold, bitwise_xor, canny_filter, fill_contours};
use super::types::CellRect;

/// Detects cell bounding rectangles in a grayscale page raster.
///
/// Returns rectangles in reading order (ascending `y`, then `x`). A blank or
/// zero-sized image yields an empty list, not an error. When `sink` is
/// supplied, every intermediate mask and one overlay per final rectangle is
/// emitted under a stable stage name.
pub fn detect_cell_rects(
    image: &GrayImage,
    settings: &DetectionSettings,
    mut sink: Option<&mut dyn DiagnosticSink>,
) -> Result<Vec<CellRect>> {
    if image.width() == 0 || image.height() == 0 {
        return Ok(Vec::new());
    }

    if let Some(s) = sink.as_deref_mut() {
        s.emit("original_grayscaled", image)?;
    }

    let bit = binary_inverted_threshold(image, settings.bit_threshold, settings.bit_max_val);
    if let Some(s) = sink.as_deref_mut() {
        s.emit("binary_inverted_threshold", &bit)?;
    }

    // First pass: trace the outer border of the table.
    let contours = if settings.canny_enabled {
        let edges = canny_filter(image, settings);
        let contours = external_contours(&edges);
        if let Some(s) = sink.as_deref_mut() {
            s.emit("canny1", &edges)?;
        }
        contours
    } else {
        external_contours(&bit)
    };

    let mut contour_mask = bit.clone();
    fill_contours(&mut contour_mask, &contours);
    if let Some(s) = sink.as_deref_mut() {
        s.emit("contour_mask", &contour_mask)?;
    }

    // Erase the border; interior cells survive as separate blobs.
    let xored = bitwise_xor(&bit, &contour_mask);
    if let Some(s) = sink.as_deref_mut() {
        s.emit("xored", &xored)?;
    }

    // Second pass: one external contour per cell blob.
    let cell_contours = if settings.canny_enabled {
        let edges = canny_filter(&xored, settings);
        let contours = external_contours(&edges);
        if let Some(s) = sink.as_deref_mut() {
            s.emit("canny2", &edges)?;
        }
        contours
    } else {
        external_contours(&xored)
    };

    if let Some(s) = sink.as_deref_mut() {
        let mut final_mask = image.clone();
        fill_contours(&mut final_mask, &cell_contours);
        s.emit("final_contours", &final_mask)?;
    }

    let mut rects: Vec<CellRect> = cell_contours
        .iter()
        .filter_map(|c| approx_bounding_rect(c, settings.approx_epsilon_scale))
        .collect();
    sort_reading_order(&mut rects);

    debug!(
        width = image.width(),
        height = image.height(),
        cells = rects.len(),
        "grid detection finished"
    );

    if let Some(s) = sink {
        for (i, rect) in rects.iter().enumerate() {
            let mut overlay = image.clone();
            imageproc::drawing::draw_hollow_rect_mut(
                &mut overlay,
                imageproc::rect::Rect::at(rect.x, rect.y).of_size(rect.width, rect.height),
                image::Luma([0u8]),
            );
            s.emit(&format!("box_{i:03}"), &overlay)?;
        }
    }

    Ok(rects)
}
