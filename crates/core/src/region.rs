//! Pixel-space to document-space coordinate mapping.
//!
//! Detected rectangles live in rendered pixel space; text regions are
//! registered in document space. The two differ by the DPI ratio
//! `NATIVE_DPI / rendering_dpi`.

use serde::Serialize;

use crate::detect::CellRect;

/// Axis-aligned rectangle in document-space coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct DocRect {
    pub x: i64,
    pub y: i64,
    pub width: i64,
    pub height: i64,
}

/// A document-space rectangle tagged with its grid position.
///
/// The `(row, col)` pair is the stable identifier correlating detected
/// geometry with extracted text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DocRegion {
    pub row: usize,
    pub col: usize,
    pub rect: DocRect,
}

impl DocRegion {
    /// Region name used with the text extraction collaborator: `r{row}c{col}`.
    pub fn id(&self) -> String {
        region_id(self.row, self.col)
    }
}

/// Formats the region name for a grid position.
pub fn region_id(row: usize, col: usize) -> String {
    format!("r{row}c{col}")
}

/// Scales a pixel-space rectangle into document space.
///
/// Each component is multiplied by `ratio` and truncated toward zero. Pure
/// and stateless; linear in the ratio.
pub fn map_rect(rect: CellRect, ratio: f64) -> DocRect {
    DocRect {
        x: (f64::from(rect.x) * ratio) as i64,
        y: (f64::from(rect.y) * ratio) as i64,
        width: (f64::from(rect.width) * ratio) as i64,
        height: (f64::from(rect.height) * ratio) as i64,
    }
}

/// Maps grouped rows of rectangles into tagged document-space regions,
/// assigning row and column indices in grid order.
pub fn map_rows(rows: &[Vec<CellRect>], ratio: f64) -> Vec<DocRegion> {
    let mut regions = Vec::with_capacity(rows.iter().map(Vec::len).sum());
    for (row, rects) in rows.iter().enumerate() {
        for (col, &rect) in rects.iter().enumerate() {
            regions.push(DocRegion {
                row,
                col,
                rect: map_rect(rect, ratio),
            });
        }
    }
    regions
}
