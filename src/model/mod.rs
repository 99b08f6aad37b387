//! # Element Model
//!
//! The input representation shared by both engine functions. A screen is a
//! flat list of positioned rectangles, each carrying an opaque payload
//! (`type` and `properties`) that the engine copies through untouched.
//!
//! Coordinates are integer pixels with the origin at the canvas's top-left,
//! x increasing right and y increasing down.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Elements at or above this z-index are pinned: neither the arranger nor
/// the collision resolver ever moves them (e.g. a fixed navigation bar).
pub const PINNED_THRESHOLD: i64 = 10;

/// A positioned UI element on a mockup screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Element {
    /// Unique within the set being processed. Used to correlate results.
    pub id: String,

    /// Component kind (e.g. "rectangle", "text", "button"). Opaque.
    #[serde(rename = "type", default)]
    pub kind: String,

    pub x: i64,
    pub y: i64,
    pub width: i64,
    pub height: i64,

    /// Stacking order. Also selects the collision layer.
    #[serde(default, alias = "z_index")]
    pub z_index: i64,

    /// Component-specific properties. Opaque.
    #[serde(default = "empty_properties")]
    pub properties: Value,
}

fn empty_properties() -> Value {
    Value::Object(Default::default())
}

impl Element {
    /// Build an element with an empty payload.
    pub fn new(id: impl Into<String>, x: i64, y: i64, width: i64, height: i64) -> Self {
        Self {
            id: id.into(),
            kind: String::new(),
            x,
            y,
            width,
            height,
            z_index: 0,
            properties: empty_properties(),
        }
    }

    pub fn with_z_index(mut self, z_index: i64) -> Self {
        self.z_index = z_index;
        self
    }

    pub fn is_pinned(&self) -> bool {
        self.z_index >= PINNED_THRESHOLD
    }

    pub fn rect(&self) -> Rect {
        Rect {
            x: self.x,
            y: self.y,
            width: self.width,
            height: self.height,
        }
    }

    /// True if `other` has the same x/y/width/height as `self`.
    pub fn same_geometry(&self, other: &Element) -> bool {
        self.rect() == other.rect()
    }

    /// Copy x/y/width/height from `other`, leaving everything else alone.
    pub fn set_geometry(&mut self, other: &Element) {
        self.x = other.x;
        self.y = other.y;
        self.width = other.width;
        self.height = other.height;
    }
}

/// An axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: i64,
    pub y: i64,
    pub width: i64,
    pub height: i64,
}

impl Rect {
    pub fn right(&self) -> i64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> i64 {
        self.y + self.height
    }

    /// Strict overlap on both axes. Rectangles that only share an edge do
    /// not intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }

    /// `other` lies entirely inside `self`. Shared edges count as inside.
    pub fn contains(&self, other: &Rect) -> bool {
        self.x <= other.x
            && other.right() <= self.right()
            && self.y <= other.y
            && other.bottom() <= self.bottom()
    }
}

/// Edge values (top, right, bottom, left) in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edges {
    #[serde(default = "default_edge")]
    pub top: i64,
    #[serde(default = "default_edge")]
    pub right: i64,
    #[serde(default = "default_edge")]
    pub bottom: i64,
    #[serde(default = "default_edge")]
    pub left: i64,
}

/// Padding used when a caller gives none, and for edges missing from a
/// per-edge record.
pub const DEFAULT_PADDING: i64 = 16;

fn default_edge() -> i64 {
    DEFAULT_PADDING
}

impl Default for Edges {
    fn default() -> Self {
        Edges::uniform(DEFAULT_PADDING)
    }
}

impl Edges {
    pub fn uniform(v: i64) -> Self {
        Self {
            top: v,
            right: v,
            bottom: v,
            left: v,
        }
    }

    pub fn horizontal(&self) -> i64 {
        self.left + self.right
    }

    pub fn vertical(&self) -> i64 {
        self.top + self.bottom
    }
}

/// A persisted screen as the storage layer hands it over: canvas bounds
/// plus its element list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Screen {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub width: i64,
    pub height: i64,
    #[serde(default)]
    pub elements: Vec<Element>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_json_defaults() {
        let el: Element =
            serde_json::from_str(r#"{"id":"a","x":1,"y":2,"width":3,"height":4}"#).unwrap();
        assert_eq!(el.z_index, 0);
        assert_eq!(el.kind, "");
        assert!(el.properties.is_object());
    }

    #[test]
    fn test_element_accepts_snake_case_z_index() {
        let el: Element = serde_json::from_str(
            r#"{"id":"nav","type":"rectangle","x":0,"y":0,"width":1440,"height":60,"z_index":10}"#,
        )
        .unwrap();
        assert_eq!(el.z_index, 10);
        assert!(el.is_pinned());
        let out = serde_json::to_value(&el).unwrap();
        assert_eq!(out["zIndex"], 10);
        assert_eq!(out["type"], "rectangle");
    }

    #[test]
    fn test_pinned_threshold_boundary() {
        assert!(!Element::new("a", 0, 0, 1, 1).with_z_index(9).is_pinned());
        assert!(Element::new("a", 0, 0, 1, 1).with_z_index(10).is_pinned());
    }

    #[test]
    fn test_rect_touching_edges_do_not_intersect() {
        let a = Rect { x: 0, y: 0, width: 10, height: 10 };
        let b = Rect { x: 10, y: 0, width: 10, height: 10 };
        let c = Rect { x: 0, y: 10, width: 10, height: 10 };
        assert!(!a.intersects(&b));
        assert!(!a.intersects(&c));
        assert!(a.intersects(&Rect { x: 9, y: 9, width: 5, height: 5 }));
    }

    #[test]
    fn test_rect_contains_is_inclusive() {
        let outer = Rect { x: 0, y: 0, width: 100, height: 50 };
        assert!(outer.contains(&Rect { x: 0, y: 0, width: 100, height: 50 }));
        assert!(outer.contains(&Rect { x: 10, y: 10, width: 20, height: 40 }));
        assert!(!outer.contains(&Rect { x: 90, y: 10, width: 20, height: 10 }));
    }

    #[test]
    fn test_partial_edges_fill_defaults() {
        let e: Edges = serde_json::from_str(r#"{"top": 40}"#).unwrap();
        assert_eq!(e.top, 40);
        assert_eq!(e.left, DEFAULT_PADDING);
        assert_eq!(e.horizontal(), 32);
    }
}
