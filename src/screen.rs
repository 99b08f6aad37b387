//! Screen-level operations for the storage and tool layers.
//!
//! The engine functions assume sanitized input. These wrappers do the
//! validation a caller owes them, run the engine, and write the returned
//! geometry back onto the stored elements by id.

use std::collections::HashMap;

use crate::collision::resolve_overlaps;
use crate::error::{LayoutError, Result};
use crate::layout::{arrange, LayoutOptions};
use crate::model::{Element, Screen};

impl Screen {
    pub fn new(width: i64, height: i64, elements: Vec<Element>) -> Self {
        Self {
            id: None,
            name: None,
            width,
            height,
            elements,
        }
    }

    /// Both canvas dimensions must be positive.
    pub fn validate(&self) -> Result<()> {
        if self.width <= 0 || self.height <= 0 {
            return Err(LayoutError::InvalidScreen {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }
}

/// Validate, arrange, and return the updated screen.
pub fn arrange_screen(screen: &Screen, options: &LayoutOptions) -> Result<Screen> {
    screen.validate()?;
    options.validate()?;
    let arranged = arrange(&screen.elements, screen.width, screen.height, options);
    Ok(with_geometry(screen, &arranged))
}

/// Validate, resolve overlaps, and return the updated screen.
pub fn resolve_screen(screen: &Screen) -> Result<Screen> {
    screen.validate()?;
    let resolved = resolve_overlaps(&screen.elements, screen.width);
    Ok(with_geometry(screen, &resolved))
}

/// Arrange, then resolve whatever collisions the flow left behind.
pub fn tidy_screen(screen: &Screen, options: &LayoutOptions) -> Result<Screen> {
    screen.validate()?;
    options.validate()?;
    let arranged = arrange(&screen.elements, screen.width, screen.height, options);
    let resolved = resolve_overlaps(&arranged, screen.width);
    Ok(with_geometry(screen, &resolved))
}

fn with_geometry(screen: &Screen, updated: &[Element]) -> Screen {
    let mut out = screen.clone();
    apply_geometry(&mut out.elements, updated);
    out
}

/// Copy `x/y/width/height` from `updated` onto the `stored` elements with
/// the same id. Ids with no stored counterpart are ignored. Returns how
/// many stored elements actually changed.
pub fn apply_geometry(stored: &mut [Element], updated: &[Element]) -> usize {
    let by_id: HashMap<&str, &Element> = updated.iter().map(|el| (el.id.as_str(), el)).collect();

    let mut changed = 0;
    for el in stored.iter_mut() {
        if let Some(new) = by_id.get(el.id.as_str()) {
            if !el.same_geometry(new) {
                el.set_geometry(new);
                changed += 1;
            }
        }
    }
    changed
}

/// Ids whose geometry differs between `before` and `after`, in `before`
/// order.
pub fn changed_ids(before: &[Element], after: &[Element]) -> Vec<String> {
    let by_id: HashMap<&str, &Element> = after.iter().map(|el| (el.id.as_str(), el)).collect();
    before
        .iter()
        .filter(|el| {
            by_id
                .get(el.id.as_str())
                .is_some_and(|new| !el.same_geometry(new))
        })
        .map(|el| el.id.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::Direction;
    use serde_json::json;

    #[test]
    fn test_validate_rejects_non_positive() {
        assert!(Screen::new(0, 852, vec![]).validate().is_err());
        assert!(Screen::new(393, -1, vec![]).validate().is_err());
        assert!(Screen::new(393, 852, vec![]).validate().is_ok());
    }

    #[test]
    fn test_apply_geometry_keeps_payload() {
        let mut stored = vec![Element {
            kind: "text".into(),
            properties: json!({"content": "Hello"}),
            ..Element::new("t", 0, 0, 100, 20).with_z_index(3)
        }];
        let updated = vec![
            Element::new("t", 16, 40, 361, 20),
            Element::new("unknown", 1, 1, 1, 1),
        ];
        let changed = apply_geometry(&mut stored, &updated);
        assert_eq!(changed, 1);
        assert_eq!((stored[0].x, stored[0].y, stored[0].width), (16, 40, 361));
        assert_eq!(stored[0].kind, "text");
        assert_eq!(stored[0].z_index, 3);
        assert_eq!(stored[0].properties["content"], "Hello");
    }

    #[test]
    fn test_apply_geometry_counts_only_changes() {
        let mut stored = vec![Element::new("a", 16, 16, 100, 40)];
        let same = stored.clone();
        assert_eq!(apply_geometry(&mut stored, &same), 0);
    }

    #[test]
    fn test_changed_ids_in_input_order() {
        let before = vec![
            Element::new("a", 0, 0, 10, 10),
            Element::new("b", 0, 0, 10, 10),
            Element::new("c", 0, 0, 10, 10),
        ];
        let mut after = before.clone();
        after[2].y = 5;
        after[0].x = 5;
        assert_eq!(changed_ids(&before, &after), vec!["a", "c"]);
    }

    #[test]
    fn test_arrange_screen_rejects_zero_columns() {
        let screen = Screen::new(393, 852, vec![Element::new("a", 0, 0, 10, 10)]);
        let opts = LayoutOptions {
            columns: 0,
            ..LayoutOptions::new(Direction::Grid)
        };
        assert!(matches!(
            arrange_screen(&screen, &opts),
            Err(LayoutError::InvalidOptions(_))
        ));
    }

    #[test]
    fn test_tidy_matches_arrange_for_clean_flow() {
        // A flow never overlaps its own items, so tidy equals arrange here.
        let screen = Screen::new(
            393,
            852,
            vec![
                Element::new("a", 0, 0, 100, 40),
                Element::new("b", 0, 0, 100, 40),
            ],
        );
        let opts = LayoutOptions::new(Direction::Horizontal);
        let arranged = arrange_screen(&screen, &opts).unwrap();
        let tidied = tidy_screen(&screen, &opts).unwrap();
        assert_eq!(arranged, tidied);
    }
}
