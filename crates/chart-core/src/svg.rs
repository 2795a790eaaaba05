// File: crates/chart-core/src/svg.rs
// Summary: SVG serialization for scenes (number formatting, escaping, embedded stylesheet).

use std::fmt::Write as _;

use crate::scene::{Element, Scene};
use crate::theme::Theme;

const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// Compact number formatting for attributes: integers print without a
/// fractional part, everything else keeps at most three decimals.
pub fn fmt_num(v: f64) -> String {
    if !v.is_finite() {
        return "0".to_string();
    }
    let r = (v * 1000.0).round() / 1000.0;
    if r == r.trunc() {
        // avoid "-0"
        return format!("{}", r as i64);
    }
    let s = format!("{r:.3}");
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}

/// Escape text and attribute content for XML.
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Serialize `scene` as a standalone SVG document styled by `theme`.
pub fn to_svg(scene: &Scene, theme: &Theme) -> String {
    let mut out = String::new();
    write_element(&mut out, scene.root(), 0, theme);
    out
}

fn write_element(out: &mut String, e: &Element, depth: usize, theme: &Theme) {
    let pad = "  ".repeat(depth);
    let _ = write!(out, "{pad}<{}", e.tag);
    for (k, v) in &e.attrs {
        let _ = write!(out, " {k}=\"{}\"", escape(v));
    }
    if depth == 0 && e.tag == "svg" {
        let _ = write!(out, " xmlns=\"{SVG_NS}\"");
    }

    let has_style = depth == 0;
    if e.children.is_empty() && e.text.is_none() && !has_style {
        out.push_str("/>\n");
        return;
    }
    out.push('>');

    if let Some(text) = &e.text {
        if e.children.is_empty() && !has_style {
            let _ = writeln!(out, "{}</{}>", escape(text), e.tag);
            return;
        }
        out.push_str(&escape(text));
    }
    out.push('\n');

    if has_style {
        let _ = writeln!(out, "{pad}  <style>");
        for line in theme.stylesheet().lines() {
            let _ = writeln!(out, "{pad}    {line}");
        }
        let _ = writeln!(out, "{pad}  </style>");
    }
    for c in &e.children {
        write_element(out, c, depth + 1, theme);
    }
    let _ = writeln!(out, "{pad}</{}>", e.tag);
}
