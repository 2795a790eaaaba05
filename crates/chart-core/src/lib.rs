// File: crates/chart-core/src/lib.rs
// Summary: Core library entry point; exports the trails chart pipeline (load, rank, scale, scene, hover).

pub mod error;
pub mod types;
pub mod geometry;
pub mod grid;
pub mod record;
pub mod rank;
pub mod scale;
pub mod scene;
pub mod svg;
pub mod axis;
pub mod labels;
pub mod theme;
pub mod config;
pub mod chart;
pub mod interaction;
pub mod html;

pub use error::{ChartError, Result};
pub use types::{Dimensions, Margins};
pub use geometry::{Point, Rect};
pub use record::{load_trails, read_trails, LoaderOptions, TrailRecord};
pub use rank::rank_by_highpoint;
pub use scale::{LinearScale, VerticalRange};
pub use scene::{Element, Scene};
pub use labels::LabelOverride;
pub use theme::{Rgba, Theme};
pub use config::ChartConfig;
pub use chart::TrailChart;
pub use interaction::{HoverController, HoverEvent, HoverState, Tooltip, TooltipPlacement};
pub use html::HostDocument;
