// File: crates/chart-core/tests/host_page.rs
// Purpose: Mounting the chart into a host page and the user-visible error states.

use trail_chart_core::{ChartConfig, ChartError, HostDocument, LoaderOptions, TrailChart, TrailRecord};

fn fixture() -> TrailChart {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/../../hike_trails.csv");
    TrailChart::from_csv(path, &LoaderOptions::default(), ChartConfig::default()).expect("fixture chart")
}

#[test]
fn mounts_svg_inside_wrapper() {
    let chart = fixture();
    let page = HostDocument::default().mount(&chart).unwrap();

    let wrapper = page.find("<div id=\"wrapper\">").expect("wrapper");
    let svg = page.find("<svg ").expect("svg");
    let tooltip = page.find("<div id=\"tooltip\">").expect("tooltip");
    assert!(wrapper < svg && svg < tooltip);

    let script = page.find("<script>").expect("script");
    assert!(script < page.find("</body>").unwrap());
    assert!(page.contains("opacity 500ms ease-in-out"));
}

#[test]
fn labels_carry_tooltip_payload() {
    let chart = fixture();
    let page = HostDocument::default().mount(&chart).unwrap();
    for r in chart.records() {
        assert!(page.contains(&format!("data-rating=\"{:.2}\"", r.mean_rating)), "{}", r.region);
    }
    // features are attribute-escaped, commas kept
    assert!(page.contains("data-features=\"Glaciers, Mountain views, Wildflowers/Meadows\""));
}

#[test]
fn page_rating_rounds_ties_up() {
    let chart = TrailChart::build(vec![TrailRecord::new("A", 2000.0, 3.625, "f")], ChartConfig::default()).unwrap();
    let page = HostDocument::default().mount(&chart).unwrap();
    assert!(page.contains("data-rating=\"3.63\""));
}

#[test]
fn mount_does_not_touch_chart_scene() {
    let chart = fixture();
    let before = chart.scene().clone();
    HostDocument::default().mount(&chart).unwrap();
    assert_eq!(&before, chart.scene());
}

#[test]
fn custom_template_without_rating_fails() {
    let chart = fixture();
    let doc = HostDocument::new(
        "<html><body><div id=\"wrapper\"></div><div id=\"tooltip\"><p id=\"features\"></p></div></body></html>",
    );
    let err = doc.mount(&chart).unwrap_err();
    assert!(matches!(err, ChartError::MissingHostElement("rating")));
}

#[test]
fn error_page_needs_wrapper() {
    let doc = HostDocument::new("<html><body></body></html>");
    assert!(matches!(doc.error_page("boom"), Err(ChartError::MissingHostElement("wrapper"))));
}

#[test]
fn load_failure_renders_nothing() {
    let err = TrailChart::from_csv("no/such/hike_trails.csv", &LoaderOptions::default(), ChartConfig::default())
        .unwrap_err();
    assert!(matches!(err, ChartError::Io(_)));
    let page = HostDocument::default().error_page(&err.to_string()).unwrap();
    assert!(page.contains("class=\"error\""));
    assert!(!page.contains("<svg"));
}

#[test]
fn data_id_is_not_the_wrapper() {
    let chart = fixture();
    let doc = HostDocument::new(
        "<html><body><div data-id=\"wrapper\"></div><div id=\"tooltip\"><b id=\"rating\"></b><p id=\"features\"></p></div></body></html>",
    );
    assert!(matches!(doc.validate(), Err(ChartError::MissingHostElement("wrapper"))));
    assert!(matches!(doc.mount(&chart), Err(ChartError::MissingHostElement("wrapper"))));
}
