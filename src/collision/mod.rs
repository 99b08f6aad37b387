//! # Collision Resolver
//!
//! Pushes apart elements whose bounding boxes collide by accident, while
//! leaving compositional overlaps alone: a label inside a card, a progress
//! fill drawn at the origin of its track, content sitting on a full-bleed
//! background.
//!
//! ## Algorithm
//!
//! Elements are split into layers by exact `zIndex`; layers never interact.
//! Within a layer, elements are visited in input order and each one is
//! tested against every element already resolved before it:
//!
//! 1. No AABB intersection: nothing to do.
//! 2. Intersection that [`classify`] recognizes as intentional: leave it.
//! 3. Otherwise it is a sibling conflict. Move the candidate down to
//!    `resolved.bottom + GAP` and start the scan over, since the move can
//!    create a new collision with any earlier element.
//!
//! A candidate only ever moves down, so the scan terminates once it clears
//! the lowest resolved bottom it collides with. Input order is the only
//! tie-break. Resolved elements never move again, which makes a
//! conflict-free layer a fixed point.

use std::collections::BTreeMap;

use crate::model::{Element, Rect};

/// Minimum vertical separation after a sibling push, in pixels.
pub const GAP: i64 = 8;

/// Elements at least this percentage of the screen width are backdrops.
pub const FULL_BLEED_PERCENT: i64 = 95;

/// How an intersecting pair is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlap {
    /// Both share the exact same origin (e.g. a progress fill over its track).
    SameOrigin,
    /// One of the two spans (nearly) the whole screen width.
    FullBleed,
    /// One box sits inside the other and is strictly narrower.
    Contained,
    /// Two independent blocks competing for the same space.
    Sibling,
}

impl Overlap {
    /// Intentional overlaps are preserved; only siblings get pushed.
    pub fn is_intentional(self) -> bool {
        self != Overlap::Sibling
    }
}

/// Whether `width` counts as full-bleed on a `screen_width` canvas.
pub fn is_full_bleed(width: i64, screen_width: i64) -> bool {
    width * 100 >= screen_width * FULL_BLEED_PERCENT
}

/// Classify an intersecting pair. Checks run in priority order and the
/// first match wins.
///
/// Equal-width containment is not [`Overlap::Contained`]: a full-width
/// track under a card of the same width is its own block.
pub fn classify(candidate: &Rect, resolved: &Rect, screen_width: i64) -> Overlap {
    if candidate.x == resolved.x && candidate.y == resolved.y {
        return Overlap::SameOrigin;
    }

    if is_full_bleed(candidate.width, screen_width) || is_full_bleed(resolved.width, screen_width)
    {
        return Overlap::FullBleed;
    }

    let nested = (resolved.contains(candidate) && candidate.width < resolved.width)
        || (candidate.contains(resolved) && resolved.width < candidate.width);
    if nested {
        return Overlap::Contained;
    }

    Overlap::Sibling
}

/// Resolve unintended overlaps on a screen `screen_width` pixels wide.
///
/// Returns a new vector of the same length and order. Only `y` ever
/// changes. Pinned elements are returned as-is and take no part in
/// collision tests.
pub fn resolve_overlaps(elements: &[Element], screen_width: i64) -> Vec<Element> {
    let mut result = elements.to_vec();

    let mut layers: BTreeMap<i64, Vec<usize>> = BTreeMap::new();
    for (i, el) in elements.iter().enumerate() {
        if !el.is_pinned() {
            layers.entry(el.z_index).or_default().push(i);
        }
    }

    let mut pushes = 0;
    for (z_index, layer) in &layers {
        pushes += resolve_layer(&mut result, layer, screen_width, *z_index);
    }

    if pushes > 0 {
        tracing::debug!(
            total = elements.len(),
            layers = layers.len(),
            pushes,
            "resolved overlaps"
        );
    }

    result
}

/// Sweep one z-layer in input order. Returns the number of pushes made.
fn resolve_layer(
    elements: &mut [Element],
    layer: &[usize],
    screen_width: i64,
    z_index: i64,
) -> usize {
    let mut resolved: Vec<usize> = Vec::with_capacity(layer.len());
    let mut pushes = 0;

    for &i in layer {
        while let Some(blocker) = first_conflict(elements, i, &resolved, screen_width) {
            let new_y = elements[blocker].rect().bottom() + GAP;
            tracing::debug!(
                id = %elements[i].id,
                blocker = %elements[blocker].id,
                z_index,
                from = elements[i].y,
                to = new_y,
                "sibling conflict, pushing down"
            );
            elements[i].y = new_y;
            pushes += 1;
        }
        resolved.push(i);
    }

    pushes
}

/// The first resolved element (in order) that `elements[i]` has a sibling
/// conflict with.
fn first_conflict(
    elements: &[Element],
    i: usize,
    resolved: &[usize],
    screen_width: i64,
) -> Option<usize> {
    let candidate = elements[i].rect();
    resolved.iter().copied().find(|&r| {
        let other = elements[r].rect();
        if !candidate.intersects(&other) {
            return false;
        }
        let kind = classify(&candidate, &other, screen_width);
        if kind.is_intentional() {
            tracing::trace!(
                id = %elements[i].id,
                with = %elements[r].id,
                ?kind,
                "intentional overlap kept"
            );
        }
        !kind.is_intentional()
    })
}
