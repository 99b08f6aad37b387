//! # Flow Placement
//!
//! Single-axis placement for the vertical and horizontal directions. A
//! cursor walks the main axis in input order; each element is placed at
//! the cursor, then the cursor advances by the element's main-axis size
//! plus `spacing`. The cross axis is resolved per element from `align`.

use super::{center_offset, Align, Frame, LayoutOptions};
use crate::model::Element;

/// Cross-axis placement: `(position, size)` for an element whose current
/// cross size is `size`, given the padding at the leading cross edge and
/// the available cross extent.
fn cross_axis(align: Align, leading: i64, available: i64, size: i64) -> (i64, i64) {
    match align {
        Align::Stretch => (leading, available),
        Align::Center => (leading + center_offset(available, size), size),
        Align::Start => (leading, size),
    }
}

/// Stack `indices` top to bottom.
pub fn place_vertical(
    elements: &mut [Element],
    indices: &[usize],
    frame: &Frame,
    options: &LayoutOptions,
) {
    let mut cursor = options.start_offset.unwrap_or(frame.padding.top);
    for &i in indices {
        let el = &mut elements[i];
        let (x, width) = cross_axis(
            options.align,
            frame.padding.left,
            frame.available_width,
            el.width,
        );
        el.x = x;
        el.width = width;
        el.y = cursor;
        cursor += el.height + options.spacing;
    }
}

/// Lay `indices` out left to right.
pub fn place_horizontal(
    elements: &mut [Element],
    indices: &[usize],
    frame: &Frame,
    options: &LayoutOptions,
) {
    let mut cursor = options.start_offset.unwrap_or(frame.padding.left);
    for &i in indices {
        let el = &mut elements[i];
        let (y, height) = cross_axis(
            options.align,
            frame.padding.top,
            frame.available_height,
            el.height,
        );
        el.y = y;
        el.height = height;
        el.x = cursor;
        cursor += el.width + options.spacing;
    }
}
