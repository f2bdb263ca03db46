//! Geometry types produced by grid detection.

use serde::Serialize;

/// Axis-aligned cell bounding rectangle in rendered pixel space.
///
/// Width and height are inclusive of both extreme pixels, matching the
/// bounding-rectangle convention of the contour pipeline (`max - min + 1`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct CellRect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl CellRect {
    pub fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Exclusive right edge.
    pub fn right(&self) -> i32 {
        self.x + self.width as i32
    }

    /// Exclusive bottom edge.
    pub fn bottom(&self) -> i32 {
        self.y + self.height as i32
    }
}
