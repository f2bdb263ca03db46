//! Grid detection: raster page image to ordered cell rectangles.
//!
//! `finder` runs the contour pipeline, `grid` orders and groups the
//! resulting rectangles, `ops` and `contours` hold the underlying mask and
//! contour primitives.

mod contours;
mod finder;
mod grid;
mod ops;
mod types;

pub use finder::detect_cell_rects;
pub use grid::{group_rows, sort_reading_order};
pub use types::CellRect;

#[cfg(test)]
mod detection_tests {
    use image::{GrayImage, Luma};

    use super::{CellRect, detect_cell_rects, group_rows};
    use crate::settings::DetectionSettings;

    /// Draws a table of `rows` x `cols` bordered cells onto a white canvas.
    /// Ruling lines are 3 pixels thick and fully connected.
    fn draw_grid(width: u32, height: u32, rows: u32, cols: u32) -> GrayImage {
        let mut img = GrayImage::from_pixel(width, height, Luma([255u8]));
        let left = 10u32;
        let top = 10u32;
        let right = width - 10;
        let bottom = height - 10;
        let cell_w = (right - left) / cols;
        let cell_h = (bottom - top) / rows;

        for i in 0..=cols {
            let x0 = if i == cols { right - 3 } else { left + i * cell_w };
            for x in x0..x0 + 3 {
                for y in top..bottom {
                    img.put_pixel(x, y, Luma([0]));
                }
            }
        }
        for j in 0..=rows {
            let y0 = if j == rows { bottom - 3 } else { top + j * cell_h };
            for y in y0..y0 + 3 {
                for x in left..right {
                    img.put_pixel(x, y, Luma([0]));
                }
            }
        }
        img
    }

    #[test]
    fn detects_all_cells_of_a_drawn_grid() {
        let img = draw_grid(320, 240, 3, 4);
        let settings = DetectionSettings::default();
        let rects = detect_cell_rects(&img, &settings, None).unwrap();
        assert_eq!(rects.len(), 12);
    }

    #[test]
    fn two_by_three_grid_groups_into_two_rows() {
        let img = draw_grid(310, 210, 2, 3);
        let settings = DetectionSettings::default();
        let rects = detect_cell_rects(&img, &settings, None).unwrap();
        assert_eq!(rects.len(), 6);

        let rows = group_rows(&rects);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].len(), 3);
        assert_eq!(rows[1].len(), 3);
        // Reading order: first row above the second, columns left to right.
        assert!(rows[0][0].y < rows[1][0].y);
        assert!(rows[0][0].x < rows[0][1].x && rows[0][1].x < rows[0][2].x);
    }

    #[test]
    fn detection_is_deterministic() {
        let img = draw_grid(300, 300, 4, 2);
        let settings = DetectionSettings::default();
        let first = detect_cell_rects(&img, &settings, None).unwrap();
        let second = detect_cell_rects(&img, &settings, None).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn blank_image_yields_no_rectangles() {
        let img = GrayImage::from_pixel(200, 200, Luma([255u8]));
        let settings = DetectionSettings::default();
        let rects = detect_cell_rects(&img, &settings, None).unwrap();
        assert!(rects.is_empty());
    }

    #[test]
    fn zero_sized_image_yields_no_rectangles() {
        let img = GrayImage::new(0, 0);
        let settings = DetectionSettings::default();
        assert!(detect_cell_rects(&img, &settings, None).unwrap().is_empty());
    }

    #[test]
    fn cells_lie_inside_the_table_border() {
        let img = draw_grid(320, 240, 2, 2);
        let settings = DetectionSettings::default();
        let rects = detect_cell_rects(&img, &settings, None).unwrap();
        assert_eq!(rects.len(), 4);
        for rect in &rects {
            assert!(rect.x >= 10 && rect.right() <= 310);
            assert!(rect.y >= 10 && rect.bottom() <= 230);
            assert!(rect.width > 50 && rect.height > 50);
        }
    }

    #[test]
    fn rect_edges_are_exclusive_of_width() {
        let rect = CellRect::new(5, 7, 10, 20);
        assert_eq!(rect.right(), 15);
        assert_eq!(rect.bottom(), 27);
    }
}
