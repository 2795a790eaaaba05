// File: crates/chart-core/tests/interaction.rs
// Purpose: Hover state machine on a real chart: hit areas, tooltip content, fades with injected time.

use proptest::prelude::*;
use trail_chart_core::{ChartConfig, HoverEvent, HoverState, LoaderOptions, Point, TrailChart, TrailRecord};

fn fixture() -> TrailChart {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/../../hike_trails.csv");
    TrailChart::from_csv(path, &LoaderOptions::default(), ChartConfig::default()).expect("fixture chart")
}

fn center(chart: &TrailChart, index: usize) -> Point {
    let hit = chart.hover_controller().targets()[index].hit;
    Point::new((hit.left + hit.right) / 2.0, (hit.top + hit.bottom) / 2.0)
}

#[test]
fn hit_areas_sit_on_labels_in_surface_space() {
    let chart = fixture();
    let hover = chart.hover_controller();
    assert_eq!(hover.targets().len(), chart.records().len());

    // Label 1 has no override: its box starts at marker + offset + margins.
    let m = chart.marker(0).unwrap();
    let hit = hover.targets()[0].hit;
    assert!((hit.left - (m.x + 10.0 + 50.0)).abs() < 1e-9);
    assert!(hit.top < m.y + 10.0 + 140.0 && hit.bottom > m.y + 10.0 + 140.0);

    // Label 6 is shifted 190px left.
    let m6 = chart.marker(5).unwrap();
    assert!((hover.targets()[5].hit.left - (m6.x + 10.0 - 190.0 + 50.0)).abs() < 1e-9);
}

#[test]
fn hover_shows_record_details() {
    let chart = fixture();
    let mut hover = chart.hover_controller();
    let p = center(&chart, 0);
    let index = hover.hit_test(p).expect("pointer over a label");

    let events = hover.pointer_move(p, 1000.0);
    assert_eq!(events, vec![HoverEvent::Enter { index }]);
    assert_eq!(hover.state(), HoverState::Hovered { index });

    let record = &chart.records()[index];
    assert_eq!(hover.tooltip().rating, format!("{:.2}", record.mean_rating));
    assert_eq!(hover.tooltip().features, record.features);
    assert_eq!(hover.tooltip().placement.x, p.x);
    assert_eq!(hover.tooltip().placement.y, p.y);

    assert_eq!(hover.tooltip().opacity(1000.0), 0.0);
    assert!(hover.tooltip().opacity(1250.0) > 0.0);
    assert_eq!(hover.tooltip().opacity(1500.0), 1.0);

    let events = hover.pointer_move(Point::new(-10.0, -10.0), 2000.0);
    assert_eq!(events, vec![HoverEvent::Leave { index }]);
    assert_eq!(hover.state(), HoverState::Idle);
    assert_eq!(hover.tooltip().opacity(2500.0), 0.0);
}

#[test]
fn rapid_reentry_restarts_fade() {
    let chart = fixture();
    let mut hover = chart.hover_controller();
    let p = center(&chart, 0);
    hover.pointer_enter(0, p, 0.0);
    hover.pointer_leave(100.0);
    let dipped = hover.tooltip().opacity(150.0);
    hover.pointer_enter(0, p, 150.0);
    let fade = hover.tooltip().fade();
    assert_eq!(fade.from, dipped);
    assert_eq!(fade.to, 1.0);
    assert_eq!(fade.start_ms, 150.0);
    assert_eq!(hover.tooltip().opacity(650.0), 1.0);
}

#[test]
fn fade_duration_comes_from_config() {
    let mut config = ChartConfig::default();
    config.tooltip.fade_ms = 100.0;
    config.tooltip.rating_decimals = 1;
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/../../hike_trails.csv");
    let chart = TrailChart::from_csv(path, &LoaderOptions::default(), config).unwrap();
    let mut hover = chart.hover_controller();
    hover.pointer_enter(0, Point::new(0.0, 0.0), 0.0);
    assert_eq!(hover.tooltip().opacity(100.0), 1.0);
    assert_eq!(hover.tooltip().rating, format!("{:.1}", chart.records()[0].mean_rating));
}

#[test]
fn rating_ties_round_up() {
    let recs = vec![
        TrailRecord::new("A", 2000.0, 3.125, "f"),
        TrailRecord::new("B", 3000.0, 3.875, "g"),
    ];
    let chart = TrailChart::build(recs, ChartConfig::default()).unwrap();
    let mut hover = chart.hover_controller();
    hover.pointer_enter(0, Point::new(0.0, 0.0), 0.0);
    assert_eq!(hover.tooltip().rating, "3.13");
    hover.pointer_enter(1, Point::new(0.0, 0.0), 10.0);
    assert_eq!(hover.tooltip().rating, "3.88");
}

proptest! {
    // After any pointer path, hover is on iff the pointer is over a label, and
    // once the fade settles the tooltip is fully shown or fully hidden.
    #[test]
    fn visibility_tracks_pointer(path in prop::collection::vec((0.0f64..700.0, 0.0f64..800.0), 1..40)) {
        let chart = fixture();
        let mut hover = chart.hover_controller();
        let mut now = 0.0;
        for (x, y) in path {
            let p = Point::new(x, y);
            hover.pointer_move(p, now);
            let over = hover.hit_test(p);
            match hover.state() {
                HoverState::Hovered { index } => prop_assert_eq!(Some(index), over),
                HoverState::Idle => prop_assert_eq!(None, over),
            }
            let settled = hover.tooltip().opacity(now + 500.0);
            prop_assert_eq!(settled, if over.is_some() { 1.0 } else { 0.0 });
            now += 37.0;
        }
    }
}
