// File: crates/chart-core/src/chart.rs
// Summary: TrailChart: ranks the dataset, derives scales and builds the scene in one linear pass.

use std::path::Path;

use tracing::debug;

use crate::axis::RightAxis;
use crate::config::{ChartConfig, TextBlock};
use crate::error::{ChartError, Result};
use crate::geometry::Point;
use crate::interaction::HoverController;
use crate::labels::{place_labels, LabelPlacement};
use crate::rank::{key_extent, rank_by_highpoint};
use crate::record::{load_trails, LoaderOptions, TrailRecord};
use crate::scale::{horizontal_scale, vertical_scale, LinearScale};
use crate::scene::{Element, Scene};
use crate::svg::{self, fmt_num};
use crate::theme::Theme;
use crate::types::Dimensions;

/// A fully built chart. The ranked dataset is frozen once this exists.
#[derive(Clone, Debug)]
pub struct TrailChart {
    records: Vec<TrailRecord>,
    config: ChartConfig,
    x_scale: LinearScale,
    y_scale: LinearScale,
    labels: Vec<LabelPlacement>,
    scene: Scene,
}

impl TrailChart {
    /// Rank `records` and build the scene. Fails on an empty dataset.
    pub fn build(records: Vec<TrailRecord>, config: ChartConfig) -> Result<Self> {
        let records = rank_by_highpoint(records);
        let extent = key_extent(&records).ok_or(ChartError::EmptyDataset)?;

        let dims = config.dimensions;
        let x_scale = horizontal_scale(extent, &dims);
        let y_scale = vertical_scale(config.y_domain, config.vertical_range, &dims);
        debug!(
            records = records.len(),
            bounded_width = dims.bounded_width(),
            bounded_height = dims.bounded_height(),
            vertical_range = ?config.vertical_range,
            "building trail chart"
        );

        let markers: Vec<(u32, Point)> = records
            .iter()
            .map(|r| (r.key, Point::new(x_scale.map(r.key as f64), y_scale.map(r.mean_highpoint_m))))
            .collect();
        let labels = place_labels(&markers, config.labels.offset, &config.labels.overrides);

        let mut chart = Self {
            records,
            config,
            x_scale,
            y_scale,
            labels,
            scene: Scene::new(dims.width, dims.height),
        };
        chart.scene = chart.build_scene(&markers);
        Ok(chart)
    }

    /// Load, rank and build in one step.
    pub fn from_csv(path: impl AsRef<Path>, loader: &LoaderOptions, config: ChartConfig) -> Result<Self> {
        let records = load_trails(path, loader)?;
        Self::build(records, config)
    }

    fn build_scene(&self, markers: &[(u32, Point)]) -> Scene {
        let dims = self.config.dimensions;
        let mut scene = Scene::new(dims.width, dims.height);

        let mut bounds = Element::new("g").attr("class", "bounds").attr(
            "transform",
            format!("translate({},{})", fmt_num(dims.margin.left), fmt_num(dims.margin.top)),
        );

        let points: Vec<Point> = markers.iter().map(|(_, p)| *p).collect();
        bounds.children.push(Element::new("path").attr("d", line_path(&points)).attr("class", "line"));

        for (key, p) in markers {
            bounds.children.push(
                Element::new("circle")
                    .attr("class", "dots")
                    .attr("data-key", key.to_string())
                    .num("cx", p.x)
                    .num("cy", p.y)
                    .num("r", self.config.marker_radius),
            );
        }

        for (label, record) in self.labels.iter().zip(&self.records) {
            let mut text = Element::new("text")
                .attr("id", format!("label{}", label.key))
                .attr("class", "label")
                .num("x", label.anchor.x)
                .num("y", label.anchor.y)
                .with_text(record.region.clone());
            if label.shift != (0.0, 0.0) {
                text.set_attr(
                    "transform",
                    format!("translate({},{})", fmt_num(label.shift.0), fmt_num(label.shift.1)),
                );
            }
            bounds.children.push(text);
        }

        // Axis is appended last and then pushed behind the data by raising
        // the data layers over it.
        let axis = RightAxis::new(self.y_scale, &self.config.axis, dims.bounded_width());
        let axis_group = axis
            .build("y-axis")
            .attr("transform", format!("translate({},0)", fmt_num(self.config.axis.offset_x)));
        bounds.children.push(axis_group);

        scene.root_mut().children.push(bounds);
        for class in ["line", "dots", "label"] {
            scene.raise(class);
        }

        for (class, block) in [
            ("title", &self.config.title),
            ("subtitle", &self.config.subtitle),
            ("caption", &self.config.caption),
        ] {
            scene.root_mut().children.push(static_text(class, block));
        }
        scene
    }

    pub fn records(&self) -> &[TrailRecord] { &self.records }
    pub fn config(&self) -> &ChartConfig { &self.config }
    pub fn dimensions(&self) -> Dimensions { self.config.dimensions }
    pub fn theme(&self) -> Theme { self.config.theme() }
    pub fn x_scale(&self) -> LinearScale { self.x_scale }
    pub fn y_scale(&self) -> LinearScale { self.y_scale }
    pub fn labels(&self) -> &[LabelPlacement] { &self.labels }
    pub fn scene(&self) -> &Scene { &self.scene }

    /// Marker position of the record at rank-order `index`, in bounds coordinates.
    pub fn marker(&self, index: usize) -> Option<Point> {
        let r = self.records.get(index)?;
        Some(Point::new(self.x_scale.map(r.key as f64), self.y_scale.map(r.mean_highpoint_m)))
    }

    /// Serialized SVG with the theme stylesheet embedded.
    pub fn to_svg(&self) -> String {
        svg::to_svg(&self.scene, &self.theme())
    }

    /// Hover state machine over this chart's labels.
    pub fn hover_controller(&self) -> HoverController {
        HoverController::new(self)
    }
}

fn static_text(class: &str, block: &TextBlock) -> Element {
    Element::new("text")
        .num("x", block.x)
        .attr("text-anchor", "end")
        .num("y", block.y)
        .attr("class", class)
        .with_text(block.text.clone())
}

/// Polyline path data through `points` in order.
pub fn line_path(points: &[Point]) -> String {
    let mut d = String::new();
    for (i, p) in points.iter().enumerate() {
        d.push(if i == 0 { 'M' } else { 'L' });
        d.push_str(&fmt_num(p.x));
        d.push(',');
        d.push_str(&fmt_num(p.y));
    }
    if points.len() == 1 {
        d.push('Z');
    }
    d
}
