// File: crates/chart-core/src/config.rs
// Summary: Chart configuration with defaults matching the published trails chart; TOML loading.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::grid::linspace;
use crate::labels::LabelOverride;
use crate::scale::VerticalRange;
use crate::theme::{self, Theme};
use crate::types::Dimensions;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    pub dimensions: Dimensions,
    /// Elevation domain of the vertical scale, meters.
    pub y_domain: (f64, f64),
    pub vertical_range: VerticalRange,
    pub marker_radius: f64,
    pub axis: AxisConfig,
    pub labels: LabelConfig,
    pub title: TextBlock,
    pub subtitle: TextBlock,
    pub caption: TextBlock,
    pub tooltip: TooltipConfig,
    pub theme: String,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            dimensions: Dimensions::default(),
            y_domain: (1500.0, 18000.0),
            vertical_range: VerticalRange::BoundedWidth,
            marker_radius: 4.0,
            axis: AxisConfig::default(),
            labels: LabelConfig::default(),
            title: TextBlock::new("Washington Trails", 449.0, 55.0),
            subtitle: TextBlock::new(
                "Avg. highest point (m) above sea level of trails per Washington region",
                700.0,
                95.0,
            ),
            caption: TextBlock::new(
                "Tidy Tuesday Week 48 | Viz: @pedro_drocha | Source: TidyX Crew (Ellis Hughes & Patrick Ward)",
                485.0,
                750.0,
            ),
            tooltip: TooltipConfig::default(),
            theme: "light".to_string(),
        }
    }
}

impl ChartConfig {
    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    pub fn theme(&self) -> Theme {
        theme::find(&self.theme)
    }
}

/// Right-oriented value axis placed inside the bounds group.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AxisConfig {
    pub tick_values: Vec<f64>,
    /// Horizontal translation of the axis group within the bounds.
    pub offset_x: f64,
    /// Gridlines run left across the bounded width plus this many pixels.
    pub gridline_extension: f64,
    pub tick_padding: f64,
}

impl Default for AxisConfig {
    fn default() -> Self {
        Self {
            tick_values: linspace(1500.0, 17500.0, 9),
            offset_x: 600.0,
            gridline_extension: 60.0,
            tick_padding: 3.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelConfig {
    /// Offset of each label from its marker.
    pub offset: (f64, f64),
    pub overrides: Vec<LabelOverride>,
}

impl Default for LabelConfig {
    fn default() -> Self {
        Self {
            offset: (10.0, 10.0),
            overrides: LabelOverride::defaults(),
        }
    }
}

/// Static text anchored at its end (`text-anchor="end"`).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TextBlock {
    pub text: String,
    pub x: f64,
    pub y: f64,
}

impl TextBlock {
    pub fn new(text: impl Into<String>, x: f64, y: f64) -> Self {
        Self { text: text.into(), x, y }
    }
}

impl Default for TextBlock {
    fn default() -> Self { Self::new("", 0.0, 0.0) }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TooltipConfig {
    pub fade_ms: f64,
    pub rating_decimals: usize,
}

impl Default for TooltipConfig {
    fn default() -> Self {
        Self { fade_ms: 500.0, rating_decimals: 2 }
    }
}
