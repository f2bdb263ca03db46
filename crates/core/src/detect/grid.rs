//! Row grouping and reading order.

use indexmap::IndexMap;

use super::types::CellRect;

/// Sorts rectangles into reading order: ascending `y`, then ascending `x`.
///
/// This replaces the scan-order assumption of contour tracing with an
/// explicit, deterministic ordering.
pub fn sort_reading_order(rects: &mut [CellRect]) {
    rects.sort_by_key(|r| (r.y, r.x));
}

/// Partitions rectangles into rows by exact equality of their `y` coordinate.
///
/// Row order follows the order in which distinct `y` values first appear in
/// the input; within a row, rectangles keep their original relative order.
/// The total rectangle count is always preserved. Zero rectangles produce
/// zero rows.
pub fn group_rows(rects: &[CellRect]) -> Vec<Vec<CellRect>> {
    let mut rows: IndexMap<i32, Vec<CellRect>> = IndexMap::new();
    for &rect in rects {
        rows.entry(rect.y).or_default().push(rect);
    }
    rows.into_values().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(x: i32, y: i32) -> CellRect {
        CellRect::new(x, y, 10, 10)
    }

    #[test]
    fn groups_by_exact_y() {
        let rects = vec![rect(0, 5), rect(20, 5), rect(0, 30), rect(40, 5)];
        let rows = group_rows(&rects);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], vec![rect(0, 5), rect(20, 5), rect(40, 5)]);
        assert_eq!(rows[1], vec![rect(0, 30)]);
    }

    #[test]
    fn row_order_follows_first_appearance() {
        // Row y=30 appears before y=5 in the input, so it comes first.
        let rects = vec![rect(0, 30), rect(0, 5), rect(20, 30)];
        let rows = group_rows(&rects);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0][0].y, 30);
        assert_eq!(rows[1][0].y, 5);
    }

    #[test]
    fn count_preserved_across_k_rows() {
        let mut rects = Vec::new();
        for y in [0, 17, 34, 51] {
            for x in [0, 25, 50] {
                rects.push(rect(x, y));
            }
        }
        let rows = group_rows(&rects);
        assert_eq!(rows.len(), 4);
        assert_eq!(rows.iter().map(Vec::len).sum::<usize>(), rects.len());
    }

    #[test]
    fn empty_input_yields_no_rows() {
        assert!(group_rows(&[]).is_empty());
    }

    #[test]
    fn reading_order_sorts_by_y_then_x() {
        let mut rects = vec![rect(40, 20), rect(0, 20), rect(10, 0)];
        sort_reading_order(&mut rects);
        assert_eq!(rects, vec![rect(10, 0), rect(0, 20), rect(40, 20)]);
    }
}
