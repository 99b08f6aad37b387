//! # Arranger
//!
//! Recomputes element positions so they flow in one direction (or a
//! fixed-column grid) inside a padded canvas.
//!
//! The algorithm is a single pass in input order:
//!
//! 1. Pinned elements (`zIndex >= 10`) are copied through unchanged.
//! 2. If `elementIds` is given, elements not in it are copied through too.
//!    Pinning wins over the allow-list.
//! 3. The remaining elements are handed, in input order, to the flow or
//!    grid placer, which writes new geometry onto fresh copies.
//!
//! Nothing is reordered to save space. This is flow placement, not
//! packing.

pub mod flow;
pub mod grid;

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{LayoutError, Result};
use crate::model::{Edges, Element};

/// Gap between consecutive flow items when none is given.
pub const DEFAULT_SPACING: i64 = 16;
/// Grid column count when none is given.
pub const DEFAULT_COLUMNS: i64 = 2;

/// Main flow direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Vertical,
    Horizontal,
    Grid,
}

/// Cross-axis alignment. Ignored in grid mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    /// Fill the available cross-axis extent.
    Stretch,
    /// Center on the cross axis, size unchanged.
    Center,
    /// Pin to the leading padding edge, size unchanged.
    #[default]
    Start,
}

/// Padding as either one value for all sides or a per-edge record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Padding {
    Uniform(i64),
    Edges(Edges),
}

impl Default for Padding {
    fn default() -> Self {
        Padding::Edges(Edges::default())
    }
}

impl Padding {
    pub fn normalize(&self) -> Edges {
        match self {
            Padding::Uniform(v) => Edges::uniform(*v),
            Padding::Edges(e) => *e,
        }
    }
}

/// Arranger configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutOptions {
    #[serde(default)]
    pub direction: Direction,
    #[serde(default = "default_spacing")]
    pub spacing: i64,
    #[serde(default)]
    pub padding: Padding,
    #[serde(default)]
    pub align: Align,
    /// Grid only.
    #[serde(default = "default_columns")]
    pub columns: i64,
    /// When present, only these elements are repositioned.
    #[serde(default, alias = "element_ids", skip_serializing_if = "Option::is_none")]
    pub element_ids: Option<Vec<String>>,
    /// Replaces the leading coordinate on the main axis (`padding.top` for
    /// vertical and grid, `padding.left` for horizontal).
    #[serde(default, alias = "start_offset", skip_serializing_if = "Option::is_none")]
    pub start_offset: Option<i64>,
}

fn default_spacing() -> i64 {
    DEFAULT_SPACING
}

fn default_columns() -> i64 {
    DEFAULT_COLUMNS
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            direction: Direction::default(),
            spacing: DEFAULT_SPACING,
            padding: Padding::default(),
            align: Align::default(),
            columns: DEFAULT_COLUMNS,
            element_ids: None,
            start_offset: None,
        }
    }
}

impl LayoutOptions {
    pub fn new(direction: Direction) -> Self {
        Self {
            direction,
            ..Default::default()
        }
    }

    /// Reject options the engine would otherwise treat as undefined
    /// behavior. The engine itself never calls this.
    pub fn validate(&self) -> Result<()> {
        if self.direction == Direction::Grid && self.columns <= 0 {
            return Err(LayoutError::InvalidOptions(format!(
                "grid layout needs at least one column, got {}",
                self.columns
            )));
        }
        Ok(())
    }
}

/// The padded region elements are laid out into.
#[derive(Debug, Clone, Copy)]
pub struct Frame {
    pub padding: Edges,
    pub available_width: i64,
    pub available_height: i64,
}

impl Frame {
    fn new(screen_width: i64, screen_height: i64, padding: Edges) -> Self {
        Self {
            padding,
            available_width: screen_width - padding.horizontal(),
            available_height: screen_height - padding.vertical(),
        }
    }
}

/// Arrange `elements` on a `screen_width` x `screen_height` canvas.
///
/// Returns a new vector of the same length and order. Only the geometry of
/// participating elements changes; pinned and filtered-out elements are
/// returned as-is.
pub fn arrange(
    elements: &[Element],
    screen_width: i64,
    screen_height: i64,
    options: &LayoutOptions,
) -> Vec<Element> {
    let mut result = elements.to_vec();
    if result.is_empty() {
        return result;
    }

    let allowed: Option<HashSet<&str>> = options
        .element_ids
        .as_ref()
        .map(|ids| ids.iter().map(String::as_str).collect());

    let participants: Vec<usize> = elements
        .iter()
        .enumerate()
        .filter(|(_, el)| !el.is_pinned())
        .filter(|(_, el)| allowed.as_ref().map_or(true, |ids| ids.contains(el.id.as_str())))
        .map(|(i, _)| i)
        .collect();

    let frame = Frame::new(screen_width, screen_height, options.padding.normalize());

    match options.direction {
        Direction::Vertical => flow::place_vertical(&mut result, &participants, &frame, options),
        Direction::Horizontal => {
            flow::place_horizontal(&mut result, &participants, &frame, options)
        }
        Direction::Grid => grid::place_grid(&mut result, &participants, &frame, options),
    }

    tracing::debug!(
        direction = ?options.direction,
        total = elements.len(),
        arranged = participants.len(),
        "arranged elements"
    );

    result
}

/// Offset that centers `size` within `available`, rounding halves up.
pub(crate) fn center_offset(available: i64, size: i64) -> i64 {
    (available - size + 1).div_euclid(2)
}
