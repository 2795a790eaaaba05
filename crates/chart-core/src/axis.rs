// File: crates/chart-core/src/axis.rs
// Summary: Right-oriented value axis: domain path, ticks with gridlines and formatted labels.

use crate::config::AxisConfig;
use crate::grid::format_thousands;
use crate::scale::LinearScale;
use crate::scene::Element;
use crate::svg::fmt_num;

/// Axis whose labels sit to the right of the axis line. A negative tick size
/// turns the tick marks into gridlines reaching back across the plot.
#[derive(Clone, Debug)]
pub struct RightAxis {
    pub scale: LinearScale,
    pub tick_values: Vec<f64>,
    pub tick_size: f64,
    pub tick_padding: f64,
}

impl RightAxis {
    pub fn new(scale: LinearScale, cfg: &AxisConfig, bounded_width: f64) -> Self {
        Self {
            scale,
            tick_values: cfg.tick_values.clone(),
            tick_size: -(bounded_width + cfg.gridline_extension),
            tick_padding: cfg.tick_padding,
        }
    }

    /// Pixel offset of every tick along the axis.
    pub fn tick_positions(&self) -> Vec<f64> {
        self.tick_values.iter().map(|&v| self.scale.map(v)).collect()
    }

    /// Build the axis group. The caller positions it with a transform.
    pub fn build(&self, class: &str) -> Element {
        let (r0, r1) = self.scale.range();
        let outer = self.tick_size;
        let mut g = Element::new("g")
            .attr("class", class)
            .attr("fill", "none")
            .attr("font-size", "10")
            .attr("font-family", "sans-serif")
            .attr("text-anchor", "start");

        g.children.push(
            Element::new("path")
                .attr("class", "domain")
                .attr("stroke", "currentColor")
                .attr("d", format!("M{},{}H0V{}H{}", fmt_num(outer), fmt_num(r0), fmt_num(r1), fmt_num(outer))),
        );

        let text_x = self.tick_size.max(0.0) + self.tick_padding;
        for (&v, y) in self.tick_values.iter().zip(self.tick_positions()) {
            g.children.push(
                Element::new("g")
                    .attr("class", "tick")
                    .attr("opacity", "1")
                    .attr("transform", format!("translate(0,{})", fmt_num(y)))
                    .with_child(
                        Element::new("line")
                            .attr("stroke", "currentColor")
                            .num("x2", self.tick_size),
                    )
                    .with_child(
                        Element::new("text")
                            .attr("fill", "currentColor")
                            .num("x", text_x)
                            .attr("dy", "0.32em")
                            .with_text(format_thousands(v)),
                    ),
            );
        }
        g
    }
}
