// File: crates/chart-core/src/interaction.rs
// Summary: Label hover state machine driving tooltip content, placement and opacity fades.
// Notes:
// - Time is passed in by the caller (milliseconds, any monotonic origin), so a
//   fade can be sampled at any instant without waiting on a clock.
// - A new fade starts from the opacity visible at that instant and replaces the
//   running one; there is no queue.

use crate::chart::TrailChart;
use crate::geometry::{Point, Rect};
use crate::grid::format_fixed;
use crate::labels::text_box;

/// Cubic ease-in-out over normalized time.
pub fn cubic_in_out(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0) * 2.0;
    if t <= 1.0 {
        t * t * t / 2.0
    } else {
        let t = t - 2.0;
        (t * t * t + 2.0) / 2.0
    }
}

/// Timed opacity transition.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Fade {
    pub from: f64,
    pub to: f64,
    pub start_ms: f64,
    pub duration_ms: f64,
}

impl Fade {
    /// A finished fade resting at `value`.
    pub const fn settled(value: f64) -> Self {
        Self { from: value, to: value, start_ms: 0.0, duration_ms: 0.0 }
    }

    pub fn value_at(&self, now_ms: f64) -> f64 {
        if self.duration_ms <= 0.0 || now_ms >= self.start_ms + self.duration_ms {
            return self.to;
        }
        if now_ms <= self.start_ms {
            return self.from;
        }
        let t = (now_ms - self.start_ms) / self.duration_ms;
        self.from + (self.to - self.from) * cubic_in_out(t)
    }
}

/// Tooltip anchor: the pointer position, with the box shifted left by half its
/// width and up by its full height.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TooltipPlacement {
    pub x: f64,
    pub y: f64,
}

impl TooltipPlacement {
    pub fn css_transform(&self) -> String {
        format!("translate(calc(-50% + {}px), calc(-100% + {}px))", self.x, self.y)
    }

    /// Resolved top-left corner for a tooltip box of `width x height`.
    pub fn top_left(&self, width: f64, height: f64) -> Point {
        Point::new(self.x - width / 2.0, self.y - height)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Tooltip {
    pub rating: String,
    pub features: String,
    pub placement: TooltipPlacement,
    fade: Fade,
}

impl Tooltip {
    fn hidden() -> Self {
        Self {
            rating: String::new(),
            features: String::new(),
            placement: TooltipPlacement { x: 0.0, y: 0.0 },
            fade: Fade::settled(0.0),
        }
    }

    pub fn opacity(&self, now_ms: f64) -> f64 { self.fade.value_at(now_ms) }
    pub fn fade(&self) -> Fade { self.fade }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HoverState {
    Idle,
    /// `index` is the label's position in marker order.
    Hovered { index: usize },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HoverEvent {
    Enter { index: usize },
    Leave { index: usize },
}

/// Hit area and tooltip payload for one label.
#[derive(Clone, Debug, PartialEq)]
pub struct LabelTarget {
    pub key: u32,
    /// Surface coordinates (bounds translation applied).
    pub hit: Rect,
    pub mean_rating: f64,
    pub features: String,
}

#[derive(Clone, Debug)]
pub struct HoverController {
    targets: Vec<LabelTarget>,
    state: HoverState,
    tooltip: Tooltip,
    fade_ms: f64,
    rating_decimals: usize,
}

impl HoverController {
    pub fn new(chart: &TrailChart) -> Self {
        let dims = chart.dimensions();
        let font_size = chart.theme().label_size as f64;
        // Labels and records share marker order.
        let targets = chart
            .labels()
            .iter()
            .zip(chart.records())
            .map(|(label, record)| LabelTarget {
                key: record.key,
                hit: text_box(label.origin(), &record.region, font_size)
                    .translate(dims.margin.left, dims.margin.top),
                mean_rating: record.mean_rating,
                features: record.features.clone(),
            })
            .collect();
        let tip = chart.config().tooltip;
        Self::from_targets(targets, tip.fade_ms, tip.rating_decimals)
    }

    pub fn from_targets(targets: Vec<LabelTarget>, fade_ms: f64, rating_decimals: usize) -> Self {
        Self { targets, state: HoverState::Idle, tooltip: Tooltip::hidden(), fade_ms, rating_decimals }
    }

    pub fn state(&self) -> HoverState { self.state }
    pub fn tooltip(&self) -> &Tooltip { &self.tooltip }
    pub fn targets(&self) -> &[LabelTarget] { &self.targets }

    /// Topmost label under `p`. Later labels draw over earlier ones.
    pub fn hit_test(&self, p: Point) -> Option<usize> {
        self.targets.iter().rposition(|t| t.hit.contains(p))
    }

    /// idle/hovered -> hovered on `index`. Returns false for an unknown index.
    pub fn pointer_enter(&mut self, index: usize, pointer: Point, now_ms: f64) -> bool {
        let Some(target) = self.targets.get(index) else {
            return false;
        };
        self.tooltip.rating = format_fixed(target.mean_rating, self.rating_decimals);
        self.tooltip.features = target.features.clone();
        self.tooltip.placement = TooltipPlacement { x: pointer.x, y: pointer.y };
        self.start_fade(1.0, now_ms);
        self.state = HoverState::Hovered { index };
        true
    }

    /// hovered -> idle. Leaving while idle still restarts the fade toward 0.
    pub fn pointer_leave(&mut self, now_ms: f64) {
        self.start_fade(0.0, now_ms);
        self.state = HoverState::Idle;
    }

    /// Route a pointer move through hit testing and emit the resulting
    /// leave/enter transitions, in that order.
    pub fn pointer_move(&mut self, pointer: Point, now_ms: f64) -> Vec<HoverEvent> {
        let hit = self.hit_test(pointer);
        let mut events = Vec::new();
        match (self.state, hit) {
            (HoverState::Hovered { index }, Some(i)) if i == index => {}
            (HoverState::Hovered { index }, _) => {
                self.pointer_leave(now_ms);
                events.push(HoverEvent::Leave { index });
            }
            (HoverState::Idle, _) => {}
        }
        if let (HoverState::Idle, Some(i)) = (self.state, hit) {
            self.pointer_enter(i, pointer, now_ms);
            events.push(HoverEvent::Enter { index: i });
        }
        events
    }

    fn start_fade(&mut self, to: f64, now_ms: f64) {
        let from = self.tooltip.fade.value_at(now_ms);
        self.tooltip.fade = Fade { from, to, start_ms: now_ms, duration_ms: self.fade_ms };
    }
}
