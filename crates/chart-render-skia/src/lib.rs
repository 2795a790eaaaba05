// File: crates/chart-render-skia/src/lib.rs
// Summary: Skia CPU raster backend: draws a trail chart Scene and returns RGBA8 pixels or PNG bytes.

use std::io::Cursor;
use std::path::Path;

use skia_safe as skia;
use thiserror::Error;
use tracing::debug;
use trail_chart_core::{Element, Rgba, Scene, Theme};

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to create raster surface {0}x{1}")]
    Surface(i32, i32),
    #[error("failed to read back surface pixels")]
    ReadPixels,
    #[error("png encode failed: {0}")]
    Encode(#[from] image::ImageError),
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, RenderError>;

/// Straight-alpha RGBA8 pixels, row-major.
pub struct RgbaFrame {
    pub pixels: Vec<u8>,
    pub width: u32,
    pub height: u32,
    pub stride: usize,
}

pub struct SkiaRenderer {
    theme: Theme,
    draw_text: bool,
}

impl SkiaRenderer {
    pub fn new(theme: Theme) -> Self {
        Self { theme, draw_text: true }
    }

    /// Skip text; font availability varies across machines.
    pub fn without_text(mut self) -> Self {
        self.draw_text = false;
        self
    }

    pub fn render_rgba8(&self, scene: &Scene) -> Result<RgbaFrame> {
        let w = scene.width().round().max(1.0) as i32;
        let h = scene.height().round().max(1.0) as i32;
        let mut surface =
            skia::surfaces::raster_n32_premul((w, h)).ok_or(RenderError::Surface(w, h))?;

        {
            let canvas = surface.canvas();
            canvas.clear(color(self.theme.background));
            let painter = Painter::new(&self.theme, self.draw_text);
            for child in &scene.root().children {
                painter.draw(canvas, child, false);
            }
        }

        let info = skia::ImageInfo::new(
            (w, h),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None,
        );
        let stride = w as usize * 4;
        let mut pixels = vec![0u8; stride * h as usize];
        if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            return Err(RenderError::ReadPixels);
        }
        debug!(width = w, height = h, "rasterized scene");
        Ok(RgbaFrame { pixels, width: w as u32, height: h as u32, stride })
    }

    pub fn render_png_bytes(&self, scene: &Scene) -> Result<Vec<u8>> {
        let frame = self.render_rgba8(scene)?;
        let img = image::RgbaImage::from_raw(frame.width, frame.height, frame.pixels)
            .ok_or(RenderError::ReadPixels)?;
        let mut out = Vec::new();
        img.write_to(&mut Cursor::new(&mut out), image::ImageFormat::Png)?;
        Ok(out)
    }

    /// Render to a PNG file, creating parent directories.
    pub fn render_to_png(&self, scene: &Scene, output_png_path: impl AsRef<Path>) -> Result<()> {
        let bytes = self.render_png_bytes(scene)?;
        if let Some(parent) = output_png_path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(output_png_path, bytes)?;
        Ok(())
    }
}

// ---- helpers ----------------------------------------------------------------

fn color(c: Rgba) -> skia::Color {
    skia::Color::from_argb(c.a, c.r, c.g, c.b)
}

struct Painter<'a> {
    theme: &'a Theme,
    draw_text: bool,
    typeface: Option<skia::Typeface>,
}

impl<'a> Painter<'a> {
    fn new(theme: &'a Theme, draw_text: bool) -> Self {
        let typeface = if draw_text {
            skia::FontMgr::default().legacy_make_typeface(None::<&str>, skia::FontStyle::default())
        } else {
            None
        };
        Self { theme, draw_text, typeface }
    }

    fn font(&self, size: f32) -> skia::Font {
        match &self.typeface {
            Some(tf) => skia::Font::from_typeface(tf.clone(), size),
            None => {
                let mut font = skia::Font::default();
                font.set_size(size);
                font
            }
        }
    }

    fn draw(&self, canvas: &skia::Canvas, e: &Element, in_axis: bool) {
        let in_axis = in_axis || e.has_class("y-axis");
        let (dx, dy) = e.translation();
        canvas.save();
        canvas.translate((dx as f32, dy as f32));

        match e.tag.as_str() {
            "path" if e.has_class("line") => self.draw_line_path(canvas, e),
            "circle" => self.draw_circle(canvas, e),
            "line" if in_axis => self.draw_gridline(canvas, e),
            "text" if self.draw_text => self.draw_label(canvas, e, in_axis),
            _ => {}
        }
        for child in &e.children {
            self.draw(canvas, child, in_axis);
        }
        canvas.restore();
    }

    fn draw_line_path(&self, canvas: &skia::Canvas, e: &Element) {
        let points = parse_polyline(e.get_attr("d").unwrap_or(""));
        let Some(&(x0, y0)) = points.first() else { return };
        let mut path = skia::Path::new();
        path.move_to((x0, y0));
        for &(x, y) in points.iter().skip(1) {
            path.line_to((x, y));
        }

        let mut stroke = skia::Paint::default();
        stroke.set_anti_alias(true);
        stroke.set_style(skia::paint::Style::Stroke);
        stroke.set_stroke_width(self.theme.line_width);
        stroke.set_color(color(self.theme.line_stroke));
        canvas.draw_path(&path, &stroke);
    }

    fn draw_circle(&self, canvas: &skia::Canvas, e: &Element) {
        let cx = e.num_attr("cx").unwrap_or(0.0) as f32;
        let cy = e.num_attr("cy").unwrap_or(0.0) as f32;
        let r = e.num_attr("r").unwrap_or(0.0) as f32;
        let mut fill = skia::Paint::default();
        fill.set_anti_alias(true);
        fill.set_style(skia::paint::Style::Fill);
        fill.set_color(color(self.theme.dot_fill));
        canvas.draw_circle((cx, cy), r, &fill);
    }

    fn draw_gridline(&self, canvas: &skia::Canvas, e: &Element) {
        let x1 = e.num_attr("x1").unwrap_or(0.0) as f32;
        let y1 = e.num_attr("y1").unwrap_or(0.0) as f32;
        let x2 = e.num_attr("x2").unwrap_or(0.0) as f32;
        let y2 = e.num_attr("y2").unwrap_or(0.0) as f32;
        let mut paint = skia::Paint::default();
        paint.set_color(color(self.theme.grid));
        paint.set_anti_alias(true);
        paint.set_stroke_width(1.0);
        canvas.draw_line((x1, y1), (x2, y2), &paint);
    }

    fn draw_label(&self, canvas: &skia::Canvas, e: &Element, in_axis: bool) {
        let Some(text) = e.text.as_deref() else { return };
        let t = self.theme;
        let (fill, size) = if in_axis {
            (t.axis_text, t.axis_size)
        } else if e.has_class("title") {
            (t.title_fill, t.title_size)
        } else if e.has_class("subtitle") {
            (t.subtitle_fill, t.subtitle_size)
        } else if e.has_class("caption") {
            (t.caption_fill, t.caption_size)
        } else {
            (t.label_fill, t.label_size)
        };

        let mut paint = skia::Paint::default();
        paint.set_anti_alias(true);
        paint.set_color(color(fill));
        let font = self.font(size);

        let (width, _) = font.measure_str(text, Some(&paint));
        canvas.draw_str(text, text_origin(e, size, width), &font, &paint);
    }
}

/// Baseline start of a text element whose rendered run is `width` wide.
/// Applies an em-based `dy` and `text-anchor` (`middle`, `end`).
fn text_origin(e: &Element, font_size: f32, width: f32) -> (f32, f32) {
    let mut x = e.num_attr("x").unwrap_or(0.0) as f32;
    let mut y = e.num_attr("y").unwrap_or(0.0) as f32;
    if let Some(dy) = e.get_attr("dy") {
        match dy.strip_suffix("em") {
            Some(em) => y += em.parse::<f32>().unwrap_or(0.0) * font_size,
            None => y += e.num_attr("dy").unwrap_or(0.0) as f32,
        }
    }
    match e.get_attr("text-anchor") {
        Some("end") => x -= width,
        Some("middle") => x -= width / 2.0,
        _ => {}
    }
    (x, y)
}

/// Vertices of an `M x,y L x,y ...` polyline; a trailing `Z` is ignored.
fn parse_polyline(d: &str) -> Vec<(f32, f32)> {
    d.split(|c| c == 'M' || c == 'L' || c == 'Z')
        .filter_map(|seg| {
            let (x, y) = seg.trim().split_once(',')?;
            Some((x.trim().parse().ok()?, y.trim().parse().ok()?))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn polyline_points() {
        assert_eq!(parse_polyline("M0,10L5.5,-2L7,3"), vec![(0.0, 10.0), (5.5, -2.0), (7.0, 3.0)]);
        assert_eq!(parse_polyline("M1,2Z"), vec![(1.0, 2.0)]);
        assert!(parse_polyline("").is_empty());
    }

    #[test]
    fn end_anchor_shifts_by_run_width() {
        let title = Element::new("text").attr("x", "449").attr("y", "55").attr("text-anchor", "end");
        assert_eq!(text_origin(&title, 36.0, 300.0), (149.0, 55.0));
        let mid = Element::new("text").attr("x", "100").attr("text-anchor", "middle");
        assert_eq!(text_origin(&mid, 12.0, 40.0), (80.0, 0.0));
    }

    #[test]
    fn dy_in_em_scales_with_font() {
        let tick = Element::new("text").attr("x", "3").attr("dy", "0.32em");
        let (x, y) = text_origin(&tick, 10.0, 25.0);
        assert_eq!(x, 3.0);
        assert!((y - 3.2).abs() < 1e-5);
        let px = Element::new("text").attr("y", "10").attr("dy", "4");
        assert_eq!(text_origin(&px, 10.0, 0.0), (0.0, 14.0));
    }

    #[test]
    fn theme_color_maps_channels() {
        let c = color(Rgba::rgba(1, 2, 3, 4));
        assert_eq!((c.r(), c.g(), c.b(), c.a()), (1, 2, 3, 4));
    }
}
