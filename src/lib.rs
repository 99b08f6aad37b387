//! # Mockup Layout
//!
//! The positioning engine behind a wireframe authoring tool.
//!
//! A mockup screen is a flat list of rectangles. Two things keep such a
//! list tidy, and they are independent of each other:
//!
//! - **Arranging**: flow elements top-to-bottom, left-to-right, or into a
//!   fixed-column grid, with padding, spacing and alignment.
//! - **Resolving overlaps**: push apart elements that collide by accident,
//!   while keeping the overlaps a designer meant (a label inside a card, a
//!   progress fill over its track, content on a full-bleed background).
//!
//! Both are pure functions over [`Element`] slices. They never mutate their
//! input and return a fresh vector with the same ids in the same order.
//!
//! ## Architecture
//!
//! ```text
//! Input (JSON screen / element list)
//!       ↓
//!   [model]      — Elements, edges, bounding boxes
//!       ↓
//!   [layout]     — Arranger: vertical / horizontal / grid flow
//!       ↓
//!   [collision]  — Per-layer overlap resolution
//!       ↓
//!   [screen]     — Validation and write-back by id
//! ```
//!
//! Elements with `zIndex >= 10` are pinned and pass through both stages
//! untouched.

pub mod collision;
pub mod error;
pub mod layout;
pub mod model;
pub mod screen;

pub use collision::resolve_overlaps;
pub use error::{LayoutError, Result};
pub use layout::{arrange, LayoutOptions};
pub use model::{Element, Screen};

/// Arrange a screen described as JSON. `options_json` may be empty, in
/// which case the defaults apply. Returns the updated screen as JSON.
pub fn arrange_json(screen_json: &str, options_json: &str) -> Result<String> {
    let screen: Screen = serde_json::from_str(screen_json)?;
    let options = parse_options(options_json)?;
    let arranged = screen::arrange_screen(&screen, &options)?;
    Ok(serde_json::to_string(&arranged)?)
}

/// Resolve overlaps on a screen described as JSON. Returns the updated
/// screen as JSON.
pub fn resolve_json(screen_json: &str) -> Result<String> {
    let screen: Screen = serde_json::from_str(screen_json)?;
    let resolved = screen::resolve_screen(&screen)?;
    Ok(serde_json::to_string(&resolved)?)
}

/// Parse layout options, treating blank input as all defaults.
pub fn parse_options(options_json: &str) -> Result<LayoutOptions> {
    if options_json.trim().is_empty() {
        return Ok(LayoutOptions::default());
    }
    Ok(serde_json::from_str(options_json)?)
}
