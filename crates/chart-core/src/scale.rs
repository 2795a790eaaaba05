// File: crates/chart-core/src/scale.rs
// Summary: Linear scales mapping rank keys and elevations to plot-area pixels.

use serde::{Deserialize, Serialize};

use crate::types::Dimensions;

/// Continuous linear map from `domain` to `range` by proportional interpolation.
/// Ranges may be inverted (`range.0 > range.1`).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    pub fn domain(&self) -> (f64, f64) { self.domain }
    pub fn range(&self) -> (f64, f64) { self.range }

    /// Map a domain value to the range. Values outside the domain extrapolate.
    /// A degenerate domain maps everything to the range midpoint.
    #[inline]
    pub fn map(&self, v: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let span = d1 - d0;
        let t = if span == 0.0 { 0.5 } else { (v - d0) / span };
        r0 + t * (r1 - r0)
    }

    /// Inverse of [`map`](Self::map). A degenerate range returns the domain midpoint.
    #[inline]
    pub fn invert(&self, px: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let span = r1 - r0;
        let t = if span == 0.0 { 0.5 } else { (px - r0) / span };
        d0 + t * (d1 - d0)
    }
}

/// Which bounded extent the vertical scale's range starts from.
///
/// The published chart maps elevations onto `[bounded_width, 0]`; that is kept
/// as the default so the output matches it pixel for pixel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VerticalRange {
    #[default]
    BoundedWidth,
    BoundedHeight,
}

impl VerticalRange {
    pub fn extent(self, dims: &Dimensions) -> f64 {
        match self {
            VerticalRange::BoundedWidth => dims.bounded_width(),
            VerticalRange::BoundedHeight => dims.bounded_height(),
        }
    }
}

/// Rank key -> horizontal pixel within the bounded area.
pub fn horizontal_scale(key_extent: (u32, u32), dims: &Dimensions) -> LinearScale {
    LinearScale::new(
        (key_extent.0 as f64, key_extent.1 as f64),
        (0.0, dims.bounded_width()),
    )
}

/// Elevation (m) -> vertical pixel within the bounded area; higher is up.
pub fn vertical_scale(y_domain: (f64, f64), policy: VerticalRange, dims: &Dimensions) -> LinearScale {
    LinearScale::new(y_domain, (policy.extent(dims), 0.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_and_inverts() {
        let s = LinearScale::new((0.0, 10.0), (100.0, 200.0));
        assert_eq!(s.map(0.0), 100.0);
        assert_eq!(s.map(5.0), 150.0);
        assert_eq!(s.map(20.0), 300.0);
        assert_eq!(s.invert(150.0), 5.0);
    }

    #[test]
    fn inverted_range() {
        let s = LinearScale::new((1500.0, 18000.0), (560.0, 0.0));
        assert_eq!(s.map(1500.0), 560.0);
        assert_eq!(s.map(18000.0), 0.0);
        assert!(s.map(9000.0) < s.map(8000.0));
    }

    #[test]
    fn degenerate_domain_hits_midpoint() {
        let s = LinearScale::new((1.0, 1.0), (0.0, 560.0));
        assert_eq!(s.map(1.0), 280.0);
        assert_eq!(s.map(7.0), 280.0);
    }

    #[test]
    fn vertical_policy_extent() {
        let d = Dimensions::default();
        assert_eq!(VerticalRange::BoundedWidth.extent(&d), 560.0);
        assert_eq!(VerticalRange::BoundedHeight.extent(&d), 660.0);
    }
}
