// File: crates/chart-core/src/theme.rs
// Summary: Light/Dark theming for the trails chart (SVG stylesheet and raster colors).

/// Straight (non-premultiplied) RGBA color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self { Self { r, g, b, a: 255 } }
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self { Self { r, g, b, a } }

    /// `#rrggbb`, or `rgba(...)` when not opaque.
    pub fn to_css(&self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("rgba({}, {}, {}, {:.3})", self.r, self.g, self.b, self.a as f64 / 255.0)
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub font_family: &'static str,
    pub background: Rgba,
    pub line_stroke: Rgba,
    pub line_width: f32,
    pub dot_fill: Rgba,
    pub label_fill: Rgba,
    pub label_size: f32,
    pub grid: Rgba,
    pub axis_text: Rgba,
    pub axis_size: f32,
    pub title_fill: Rgba,
    pub title_size: f32,
    pub subtitle_fill: Rgba,
    pub subtitle_size: f32,
    pub caption_fill: Rgba,
    pub caption_size: f32,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            font_family: "Helvetica, Arial, sans-serif",
            background: Rgba::rgb(250, 248, 243),
            line_stroke: Rgba::rgb(93, 122, 86),
            line_width: 2.0,
            dot_fill: Rgba::rgb(44, 74, 56),
            label_fill: Rgba::rgb(51, 51, 51),
            label_size: 12.0,
            grid: Rgba::rgb(221, 221, 221),
            axis_text: Rgba::rgb(136, 136, 136),
            axis_size: 10.0,
            title_fill: Rgba::rgb(29, 59, 42),
            title_size: 36.0,
            subtitle_fill: Rgba::rgb(85, 85, 85),
            subtitle_size: 14.0,
            caption_fill: Rgba::rgb(136, 136, 136),
            caption_size: 10.0,
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: Rgba::rgb(18, 18, 20),
            line_stroke: Rgba::rgb(64, 160, 255),
            dot_fill: Rgba::rgb(235, 235, 245),
            label_fill: Rgba::rgb(210, 210, 220),
            grid: Rgba::rgb(40, 40, 45),
            axis_text: Rgba::rgb(150, 150, 160),
            title_fill: Rgba::rgb(235, 235, 245),
            subtitle_fill: Rgba::rgb(180, 180, 190),
            caption_fill: Rgba::rgb(150, 150, 160),
            ..Self::light()
        }
    }

    /// Stylesheet for the class names the scene uses.
    pub fn stylesheet(&self) -> String {
        format!(
            "svg {{ background: {bg}; font-family: {font}; }}\n\
             .line {{ fill: none; stroke: {line}; stroke-width: {lw}px; }}\n\
             .dots {{ fill: {dot}; }}\n\
             .label {{ fill: {label}; font-size: {ls}px; cursor: default; }}\n\
             .y-axis .tick line {{ stroke: {grid}; }}\n\
             .y-axis .domain {{ display: none; }}\n\
             .y-axis text {{ fill: {axis}; font-size: {as_}px; }}\n\
             .title {{ fill: {title}; font-size: {ts}px; font-weight: bold; }}\n\
             .subtitle {{ fill: {sub}; font-size: {ss}px; }}\n\
             .caption {{ fill: {cap}; font-size: {cs}px; }}",
            bg = self.background.to_css(),
            font = self.font_family,
            line = self.line_stroke.to_css(),
            lw = self.line_width,
            dot = self.dot_fill.to_css(),
            label = self.label_fill.to_css(),
            ls = self.label_size,
            grid = self.grid.to_css(),
            axis = self.axis_text.to_css(),
            as_ = self.axis_size,
            title = self.title_fill.to_css(),
            ts = self.title_size,
            sub = self.subtitle_fill.to_css(),
            ss = self.subtitle_size,
            cap = self.caption_fill.to_css(),
            cs = self.caption_size,
        )
    }
}

impl Default for Theme {
    fn default() -> Self { Self::light() }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    for t in presets() { if t.name.eq_ignore_ascii_case(name) { return t; } }
    Theme::light()
}
