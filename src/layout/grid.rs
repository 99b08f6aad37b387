//! # Grid Placement
//!
//! Fixed-column grid for card-style layouts. Supports:
//! - Equal-width columns separated by `spacing`
//! - Row-major auto-placement in input order
//! - Rows as tall as their tallest item
//!
//! Widths are always overwritten with the cell width. Heights are kept, so
//! rows of differing heights leave gaps; there is no masonry packing.

use super::{Frame, LayoutOptions};
use crate::model::Element;

/// Width of one column: the available width minus the gaps between
/// columns, split evenly and floored.
pub fn cell_width(available_width: i64, spacing: i64, columns: i64) -> i64 {
    (available_width - spacing * (columns - 1)).div_euclid(columns)
}

/// Compute the x-offset for a column, relative to the left padding edge.
pub fn column_x_offset(col: i64, cell_width: i64, spacing: i64) -> i64 {
    col * (cell_width + spacing)
}

/// Place `indices` into a grid of `options.columns` columns.
pub fn place_grid(
    elements: &mut [Element],
    indices: &[usize],
    frame: &Frame,
    options: &LayoutOptions,
) {
    // `LayoutOptions::validate` rejects this; clamp so the division holds.
    let columns = options.columns.max(1);
    let cell = cell_width(frame.available_width, options.spacing, columns);

    let mut row_y = options.start_offset.unwrap_or(frame.padding.top);
    let mut row_height = 0;
    let mut col = 0;

    for &i in indices {
        if col == columns {
            row_y += row_height + options.spacing;
            row_height = 0;
            col = 0;
        }

        let el = &mut elements[i];
        el.x = frame.padding.left + column_x_offset(col, cell, options.spacing);
        el.y = row_y;
        el.width = cell;
        row_height = row_height.max(el.height);

        col += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::Direction;
    use crate::model::Edges;

    fn grid_opts(columns: i64) -> LayoutOptions {
        LayoutOptions {
            columns,
            ..LayoutOptions::new(Direction::Grid)
        }
    }

    #[test]
    fn test_cell_width_floors() {
        // 361 - 16 = 345, / 2 = 172.5 -> 172
        assert_eq!(cell_width(361, 16, 2), 172);
        assert_eq!(cell_width(300, 0, 3), 100);
        assert_eq!(cell_width(100, 0, 1), 100);
    }

    #[test]
    fn test_column_x_offset() {
        assert_eq!(column_x_offset(0, 172, 16), 0);
        assert_eq!(column_x_offset(1, 172, 16), 188);
        assert_eq!(column_x_offset(2, 100, 10), 220);
    }

    #[test]
    fn test_row_major_placement() {
        let mut els = vec![
            Element::new("a", 0, 0, 50, 100),
            Element::new("b", 0, 0, 50, 60),
            Element::new("c", 0, 0, 50, 40),
        ];
        let frame = Frame::new(393, 852, Edges::uniform(16));
        place_grid(&mut els, &[0, 1, 2], &frame, &grid_opts(2));

        assert_eq!((els[0].x, els[0].y, els[0].width), (16, 16, 172));
        assert_eq!((els[1].x, els[1].y, els[1].width), (204, 16, 172));
        // Second row starts below the tallest item of the first.
        assert_eq!((els[2].x, els[2].y), (16, 16 + 100 + 16));
        // Heights are never stretched.
        assert_eq!(els[1].height, 60);
    }

    #[test]
    fn test_three_columns_start_offset() {
        let mut els: Vec<Element> = (0..4)
            .map(|i| Element::new(format!("card{}", i), 0, 0, 10, 80))
            .collect();
        let frame = Frame::new(1440, 900, Edges::uniform(40));
        let opts = LayoutOptions {
            spacing: 24,
            start_offset: Some(120),
            ..grid_opts(3)
        };
        place_grid(&mut els, &[0, 1, 2, 3], &frame, &opts);

        // (1360 - 48) / 3 = 437.33 -> 437
        assert_eq!(els[0].width, 437);
        assert_eq!(els[2].x, 40 + 2 * (437 + 24));
        assert_eq!(els[2].y, 120);
        assert_eq!((els[3].x, els[3].y), (40, 120 + 80 + 24));
    }

    #[test]
    fn test_zero_columns_clamped() {
        let mut els = vec![
            Element::new("a", 0, 0, 50, 30),
            Element::new("b", 0, 0, 50, 30),
        ];
        let frame = Frame::new(200, 200, Edges::uniform(0));
        place_grid(&mut els, &[0, 1], &frame, &grid_opts(0));
        assert_eq!(els[0].width, 200);
        assert_eq!(els[1].y, 30 + 16);
    }
}
