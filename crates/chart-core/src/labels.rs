// File: crates/chart-core/src/labels.rs
// Summary: Point label placement: fixed marker offset plus a declarative per-key override list.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::geometry::{Point, Rect};

/// Extra translation for the label of the record ranked `key`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LabelOverride {
    pub key: u32,
    pub dx: f64,
    pub dy: f64,
}

impl LabelOverride {
    pub const fn new(key: u32, dx: f64, dy: f64) -> Self {
        Self { key, dx, dy }
    }

    /// Overrides that keep the crowded upper-right labels of the trails chart
    /// from colliding with their neighbours.
    pub fn defaults() -> Vec<Self> {
        vec![
            Self::new(6, -190.0, 0.0),
            Self::new(8, -150.0, 0.0),
            Self::new(10, -150.0, 0.0),
            Self::new(11, -170.0, -20.0),
        ]
    }
}

/// Resolved position of one label, in bounds-group coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LabelPlacement {
    pub key: u32,
    /// Text anchor (baseline start) before the override translation.
    pub anchor: Point,
    /// Override translation, `(0, 0)` when none applies.
    pub shift: (f64, f64),
}

impl LabelPlacement {
    /// Where the text actually draws once the shift is applied.
    pub fn origin(&self) -> Point {
        self.anchor.offset(self.shift.0, self.shift.1)
    }
}

/// Place labels for markers given as `(key, marker)` pairs. Overrides naming a
/// key with no marker are ignored.
pub fn place_labels(
    markers: &[(u32, Point)],
    offset: (f64, f64),
    overrides: &[LabelOverride],
) -> Vec<LabelPlacement> {
    for o in overrides {
        if !markers.iter().any(|(k, _)| *k == o.key) {
            warn!(key = o.key, "label override names no record; ignored");
        }
    }
    markers
        .iter()
        .map(|&(key, marker)| {
            // Last matching override wins.
            let shift = overrides
                .iter()
                .rev()
                .find(|o| o.key == key)
                .map(|o| (o.dx, o.dy))
                .unwrap_or((0.0, 0.0));
            LabelPlacement { key, anchor: marker.offset(offset.0, offset.1), shift }
        })
        .collect()
}

/// Approximate extent of a single-line label drawn from baseline `origin`.
/// Glyphs average ~0.6em wide; ascent ~0.8em and descent ~0.25em.
pub fn text_box(origin: Point, text: &str, font_size: f64) -> Rect {
    let w = text.chars().count() as f64 * font_size * 0.6;
    Rect::from_ltrb(origin.x, origin.y - font_size * 0.8, origin.x + w, origin.y + font_size * 0.25)
}
