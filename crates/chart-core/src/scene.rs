// File: crates/chart-core/src/scene.rs
// Summary: Owned scene graph (SVG-shaped element tree) with id/class queries and draw-order raise.

use crate::svg::fmt_num;

/// One node of the scene. Attribute order is kept so serialized output is stable.
#[derive(Clone, Debug, PartialEq)]
pub struct Element {
    pub tag: String,
    pub attrs: Vec<(String, String)>,
    pub text: Option<String>,
    pub children: Vec<Element>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self { tag: tag.into(), attrs: Vec::new(), text: None, children: Vec::new() }
    }

    /// Builder form of [`set_attr`](Self::set_attr).
    pub fn attr(mut self, name: &str, value: impl Into<String>) -> Self {
        self.set_attr(name, value);
        self
    }

    /// Builder for numeric attributes, formatted compactly.
    pub fn num(self, name: &str, value: f64) -> Self {
        self.attr(name, fmt_num(value))
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    pub fn set_attr(&mut self, name: &str, value: impl Into<String>) {
        let value = value.into();
        match self.attrs.iter_mut().find(|(k, _)| k == name) {
            Some((_, v)) => *v = value,
            None => self.attrs.push((name.to_string(), value)),
        }
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs.iter().find(|(k, _)| k == name).map(|(_, v)| v.as_str())
    }

    pub fn num_attr(&self, name: &str) -> Option<f64> {
        self.get_attr(name).and_then(|v| v.trim().trim_end_matches("px").parse().ok())
    }

    pub fn id(&self) -> Option<&str> { self.get_attr("id") }

    pub fn has_class(&self, class: &str) -> bool {
        self.get_attr("class")
            .map(|c| c.split_whitespace().any(|c| c == class))
            .unwrap_or(false)
    }

    /// Offset from a `translate(x,y)` transform, `(0, 0)` when absent.
    pub fn translation(&self) -> (f64, f64) {
        self.get_attr("transform").and_then(parse_translate).unwrap_or((0.0, 0.0))
    }

    fn walk<'a>(&'a self, out: &mut Vec<&'a Element>, pred: &dyn Fn(&Element) -> bool) {
        if pred(self) {
            out.push(self);
        }
        for c in &self.children {
            c.walk(out, pred);
        }
    }

    fn find_mut(&mut self, pred: &dyn Fn(&Element) -> bool) -> Option<&mut Element> {
        if pred(self) {
            return Some(self);
        }
        self.children.iter_mut().find_map(|c| c.find_mut(pred))
    }

    /// Move children carrying `class` to the end of this node, keeping their
    /// relative order; recurses into the remaining children.
    fn raise_class(&mut self, class: &str) -> usize {
        let (raised, mut kept): (Vec<_>, Vec<_>) =
            self.children.drain(..).partition(|c| c.has_class(class));
        let mut moved = raised.len();
        for c in kept.iter_mut() {
            moved += c.raise_class(class);
        }
        kept.extend(raised);
        self.children = kept;
        moved
    }
}

/// Parse `translate(x,y)` / `translate(xpx, ypx)` / `translate(x)`.
pub fn parse_translate(s: &str) -> Option<(f64, f64)> {
    let inner = s.trim().strip_prefix("translate(")?.strip_suffix(')')?;
    let mut parts = inner
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|p| !p.is_empty())
        .map(|p| p.trim_end_matches("px").parse::<f64>());
    let x = parts.next()?.ok()?;
    let y = match parts.next() {
        Some(v) => v.ok()?,
        None => 0.0,
    };
    Some((x, y))
}

/// The full set of visual elements for one render pass.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    root: Element,
}

impl Scene {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            root: Element::new("svg").num("width", width).num("height", height),
        }
    }

    pub fn root(&self) -> &Element { &self.root }
    pub fn root_mut(&mut self) -> &mut Element { &mut self.root }

    pub fn width(&self) -> f64 { self.root.num_attr("width").unwrap_or(0.0) }
    pub fn height(&self) -> f64 { self.root.num_attr("height").unwrap_or(0.0) }

    pub fn find_by_id(&self, id: &str) -> Option<&Element> {
        let mut out = Vec::new();
        self.root.walk(&mut out, &|e: &Element| e.id() == Some(id));
        out.into_iter().next()
    }

    pub fn find_by_id_mut(&mut self, id: &str) -> Option<&mut Element> {
        self.root.find_mut(&|e: &Element| e.id() == Some(id))
    }

    /// All elements carrying `class`, in document order.
    pub fn select_all(&self, class: &str) -> Vec<&Element> {
        let mut out = Vec::new();
        self.root.walk(&mut out, &|e: &Element| e.has_class(class));
        out
    }

    /// Move every element with `class` to the end of its parent so it draws
    /// last. Returns how many elements moved.
    pub fn raise(&mut self, class: &str) -> usize {
        self.root.raise_class(class)
    }
}
