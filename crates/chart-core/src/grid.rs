// File: crates/chart-core/src/grid.rs
// Summary: Simple grid/tick layout helpers.

pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 { return vec![start, end]; }
    let step = (end - start) / (steps as f64 - 1.0);
    (0..steps).map(|i| start + step * i as f64).collect()
}

/// Format a tick value the way the axis prints it: no decimals for whole
/// numbers, comma thousands separators (`17500` -> `17,500`).
pub fn format_thousands(v: f64) -> String {
    let fixed = format!("{:.2}", v.abs());
    let (int_part, dec_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let mut out = String::with_capacity(int_part.len() + int_part.len() / 3 + 4);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    let dec = dec_part.trim_end_matches('0');
    if !dec.is_empty() {
        out.push('.');
        out.push_str(dec);
    }
    if v < 0.0 && out != "0" { format!("-{out}") } else { out }
}

/// Fixed-point text with `decimals` digits. Ties round away from zero
/// (`3.125` -> `3.13`), not to even.
pub fn format_fixed(v: f64, decimals: usize) -> String {
    let scale = 10f64.powi(decimals as i32);
    let rounded = (v * scale).round() / scale;
    format!("{:.*}", decimals, rounded)
}
