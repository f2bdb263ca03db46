//! External contour extraction and polygon approximation.

use image::GrayImage;
use imageproc::contours::{BorderType, Contour, find_contours};
use imageproc::geometry::{approximate_polygon_dp, arc_length};
use imageproc::point::Point;

use super::types::CellRect;

/// Traces the external contours of a binary mask.
///
/// External means outer borders with no enclosing contour, i.e. the top-level
/// boundaries of foreground blobs. Hole borders and blobs nested inside holes
/// are dropped.
pub(crate) fn external_contours(mask: &GrayImage) -> Vec<Contour<i32>> {
    find_contours::<i32>(mask)
        .into_iter()
        .filter(|c| c.border_type == BorderType::Outer && c.parent.is_none())
        .collect()
}

/// Approximates a contour with a Douglas-Peucker polygon and returns the
/// axis-aligned bounding rectangle of the result.
///
/// The approximation epsilon is the closed contour perimeter scaled by
/// `epsilon_scale`. Contours too short to form a polygon are bounded
/// directly; empty contours yield `None`.
pub(crate) fn approx_bounding_rect(contour: &Contour<i32>, epsilon_scale: f64) -> Option<CellRect> {
    if contour.points.is_empty() {
        return None;
    }
    if contour.points.len() < 3 {
        return Some(bounding_rect(&contour.points));
    }
    let epsilon = arc_length(&contour.points, true) * epsilon_scale;
    let approx = approximate_polygon_dp(&contour.points, epsilon, true);
    if approx.is_empty() {
        Some(bounding_rect(&contour.points))
    } else {
        Some(bounding_rect(&approx))
    }
}

/// Smallest axis-aligned rectangle enclosing all points, with width and
/// height inclusive of both extremes.
pub(crate) fn bounding_rect(points: &[Point<i32>]) -> CellRect {
    let mut min_x = i32::MAX;
    let mut min_y = i32::MAX;
    let mut max_x = i32::MIN;
    let mut max_y = i32::MIN;
    for p in points {
        min_x = min_x.min(p.x);
        min_y = min_y.min(p.y);
        max_x = max_x.max(p.x);
        max_y = max_y.max(p.y);
    }
    CellRect::new(
        min_x,
        min_y,
        (max_x - min_x + 1) as u32,
        (max_y - min_y + 1) as u32,
    )
}
