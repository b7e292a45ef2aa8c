//! SVG output surface.
//!
//! Filled arcs become `<circle>` elements and filled rects become `<rect>`.
//! A clear covering the whole surface starts a new document body.

use beads_core::Surface;
use std::f64::consts::TAU;
use std::fmt::Write;

pub struct SvgSurface {
    width: f64,
    height: f64,
    background: Option<String>,
    body: String,
    fill_style: String,
    path: Vec<(f64, f64, f64)>,
}

impl SvgSurface {
    pub fn new(width: f64, height: f64, background: Option<&str>) -> Self {
        Self {
            width,
            height,
            background: background.map(str::to_string),
            body: String::new(),
            fill_style: "#000".to_string(),
            path: Vec::new(),
        }
    }

    /// Number of shapes emitted since the last full clear.
    pub fn shape_count(&self) -> usize {
        self.body.lines().count()
    }

    /// Complete SVG document for the current contents.
    pub fn finish(&self) -> String {
        let mut out = String::with_capacity(self.body.len() + 256);
        _ = writeln!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            w = self.width,
            h = self.height
        );
        if let Some(bg) = &self.background {
            _ = writeln!(out, r#"<rect width="100%" height="100%" fill="{}"/>"#, escape(bg));
        }
        out.push_str(&self.body);
        out.push_str("</svg>\n");
        out
    }
}

impl Surface for SvgSurface {
    fn clear_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        if x <= 0.0 && y <= 0.0 && x + w >= self.width && y + h >= self.height {
            self.body.clear();
        } else {
            log::debug!("[svg] partial clear ({x},{y},{w},{h}) ignored");
        }
    }

    fn begin_path(&mut self) {
        self.path.clear();
    }

    fn arc(&mut self, cx: f64, cy: f64, radius: f64, start_angle: f64, end_angle: f64) {
        if (end_angle - start_angle).abs() >= TAU {
            self.path.push((cx, cy, radius));
        } else {
            log::debug!("[svg] partial arc ignored");
        }
    }

    fn set_fill_style(&mut self, color: &str) {
        self.fill_style.clear();
        self.fill_style.push_str(color);
    }

    fn fill(&mut self) {
        let fill = escape(&self.fill_style);
        for &(cx, cy, r) in &self.path {
            _ = writeln!(
                self.body,
                r#"<circle cx="{cx:.3}" cy="{cy:.3}" r="{r:.3}" fill="{fill}"/>"#
            );
        }
    }

    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        let fill = escape(&self.fill_style);
        _ = writeln!(
            self.body,
            r#"<rect x="{x:.3}" y="{y:.3}" width="{w:.3}" height="{h:.3}" fill="{fill}"/>"#
        );
    }
}

// Colors pass through uninterpreted; only keep them from breaking the markup.
fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
}
