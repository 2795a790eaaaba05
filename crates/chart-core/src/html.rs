// File: crates/chart-core/src/html.rs
// Summary: Host page contract: mounts the chart SVG into #wrapper and wires the #tooltip hover script.

use crate::chart::TrailChart;
use crate::error::{ChartError, Result};
use crate::grid::format_fixed;
use crate::svg::{escape, fmt_num, to_svg};

/// Element ids the host page must provide.
pub const REQUIRED_IDS: [&str; 4] = ["wrapper", "tooltip", "rating", "features"];

const DEFAULT_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Washington Trails</title>
<style>
  body { margin: 0; background: #faf8f3; font-family: Helvetica, Arial, sans-serif; }
  #wrapper { position: relative; width: 700px; margin: 0 auto; }
  #tooltip {
    position: fixed; top: 0; left: 0; opacity: 0; pointer-events: none;
    max-width: 260px; padding: 8px 12px; background: #fff; border: 1px solid #ddd;
    border-radius: 4px; font-size: 13px; box-shadow: 0 2px 6px rgba(0, 0, 0, 0.15);
  }
  #wrapper .error { color: #a33; padding: 40px; font-size: 16px; }
</style>
</head>
<body>
<div id="wrapper"></div>
<div id="tooltip">
  <div>Avg. rating: <strong id="rating"></strong></div>
  <div id="features"></div>
</div>
</body>
</html>
"#;

/// HTML page the chart is mounted into.
#[derive(Clone, Debug)]
pub struct HostDocument {
    template: String,
}

impl Default for HostDocument {
    fn default() -> Self {
        Self { template: DEFAULT_TEMPLATE.to_string() }
    }
}

impl HostDocument {
    pub fn new(template: impl Into<String>) -> Self {
        Self { template: template.into() }
    }

    pub fn template(&self) -> &str { &self.template }

    /// Check every required id is present.
    pub fn validate(&self) -> Result<()> {
        for id in REQUIRED_IDS {
            if find_id(&self.template, id).is_none() {
                return Err(ChartError::MissingHostElement(id));
            }
        }
        Ok(())
    }

    /// Page with the chart inside `#wrapper` and the hover script attached.
    pub fn mount(&self, chart: &TrailChart) -> Result<String> {
        self.validate()?;

        let mut scene = chart.scene().clone();
        let decimals = chart.config().tooltip.rating_decimals;
        for record in chart.records() {
            if let Some(label) = scene.find_by_id_mut(&format!("label{}", record.key)) {
                label.set_attr("data-rating", format_fixed(record.mean_rating, decimals));
                label.set_attr("data-features", record.features.clone());
            }
        }
        let svg = to_svg(&scene, &chart.theme());
        let page = insert_into(&self.template, "wrapper", &svg)?;
        Ok(insert_script(&page, &hover_script(chart.config().tooltip.fade_ms)))
    }

    /// Page with a visible error message inside `#wrapper`. Only needs the
    /// wrapper element, so it also works for pages that failed validation.
    pub fn error_page(&self, message: &str) -> Result<String> {
        let body = format!("<p class=\"error\">{}</p>", escape(message));
        insert_into(&self.template, "wrapper", &body)
    }
}

/// Byte offset just past the opening tag of the element with `id`. Only a
/// standalone `id` attribute counts; `data-id="..."` and the like do not.
fn find_id(html: &str, id: &str) -> Option<usize> {
    let at = [format!("id=\"{id}\""), format!("id='{id}'")]
        .iter()
        .filter_map(|needle| {
            html.match_indices(needle.as_str())
                .map(|(i, _)| i)
                .find(|&i| i > 0 && html.as_bytes()[i - 1].is_ascii_whitespace())
        })
        .min()?;
    html[at..].find('>').map(|gt| at + gt + 1)
}

fn insert_into(html: &str, id: &'static str, content: &str) -> Result<String> {
    let pos = find_id(html, id).ok_or(ChartError::MissingHostElement(id))?;
    let mut out = String::with_capacity(html.len() + content.len() + 2);
    out.push_str(&html[..pos]);
    out.push('\n');
    out.push_str(content);
    out.push_str(&html[pos..]);
    Ok(out)
}

fn insert_script(html: &str, script: &str) -> String {
    match html.rfind("</body>") {
        Some(pos) => format!("{}{}{}", &html[..pos], script, &html[pos..]),
        None => format!("{html}{script}"),
    }
}

fn hover_script(fade_ms: f64) -> String {
    format!(
        r#"<script>
(function () {{
  var tooltip = document.getElementById('tooltip');
  var rating = document.getElementById('rating');
  var features = document.getElementById('features');
  tooltip.style.opacity = 0;
  tooltip.style.transition = 'opacity {ms}ms ease-in-out';
  document.querySelectorAll('#wrapper .label').forEach(function (label) {{
    label.addEventListener('mouseenter', function (event) {{
      rating.textContent = label.dataset.rating;
      features.textContent = label.dataset.features;
      tooltip.style.transform = 'translate(calc(-50% + ' + event.clientX + 'px), calc(-100% + ' + event.clientY + 'px))';
      tooltip.style.opacity = 1;
    }});
    label.addEventListener('mouseleave', function () {{
      tooltip.style.opacity = 0;
    }});
  }});
}})();
</script>
"#,
        ms = fmt_num(fade_ms)
    )
}
