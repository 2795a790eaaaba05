// File: crates/chart-core/src/types.rs
// Summary: Canvas dimensions and margins; the bounded plot area is derived from them.

use serde::{Deserialize, Serialize};

/// Default surface width in pixels.
pub const WIDTH: f64 = 700.0;
/// Default surface height in pixels.
pub const HEIGHT: f64 = 800.0;

/// Screen margins, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Margins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Margins {
    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self { top, right, bottom, left }
    }
    /// Total horizontal margin (left + right).
    pub fn hsum(&self) -> f64 { self.left + self.right }
    /// Total vertical margin (top + bottom).
    pub fn vsum(&self) -> f64 { self.top + self.bottom }
}

impl Default for Margins {
    fn default() -> Self {
        // Large top margin leaves room for the title block.
        Self::new(140.0, 90.0, 0.0, 50.0)
    }
}

/// Overall canvas size plus margins.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Dimensions {
    pub width: f64,
    pub height: f64,
    pub margin: Margins,
}

impl Dimensions {
    pub const fn new(width: f64, height: f64, margin: Margins) -> Self {
        Self { width, height, margin }
    }

    /// Width of the plot area inside the margins.
    pub fn bounded_width(&self) -> f64 { self.width - self.margin.hsum() }

    /// Height of the plot area inside the margins.
    pub fn bounded_height(&self) -> f64 { self.height - self.margin.vsum() }
}

impl Default for Dimensions {
    fn default() -> Self {
        Self::new(WIDTH, HEIGHT, Margins::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_bounds() {
        let d = Dimensions::default();
        assert_eq!(d.bounded_width(), 560.0);
        assert_eq!(d.bounded_height(), 660.0);
    }

    #[test]
    fn custom_margins() {
        let d = Dimensions::new(400.0, 300.0, Margins::new(10.0, 20.0, 30.0, 40.0));
        assert_eq!(d.bounded_width(), 340.0);
        assert_eq!(d.bounded_height(), 260.0);
    }
}
