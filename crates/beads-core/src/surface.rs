//! Immediate-mode 2D drawing surface the renderers paint onto.
//!
//! Mirrors the subset of the canvas 2D API the renderers need. Frontends
//! implement it over a real canvas or an output format; [`DrawRecorder`] keeps
//! the calls in memory.

use std::f64::consts::TAU;

pub trait Surface {
    fn clear_rect(&mut self, x: f64, y: f64, w: f64, h: f64);
    fn begin_path(&mut self);
    fn arc(&mut self, cx: f64, cy: f64, radius: f64, start_angle: f64, end_angle: f64);
    fn set_fill_style(&mut self, color: &str);
    fn fill(&mut self);
    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64);
}

/// Full filled circle as one path.
#[inline]
pub fn fill_circle(surface: &mut dyn Surface, cx: f64, cy: f64, radius: f64, color: &str) {
    surface.begin_path();
    surface.arc(cx, cy, radius, 0.0, TAU);
    surface.set_fill_style(color);
    surface.fill();
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCall {
    ClearRect { x: f64, y: f64, w: f64, h: f64 },
    BeginPath,
    Arc { cx: f64, cy: f64, radius: f64, start: f64, end: f64 },
    FillStyle(String),
    Fill,
    FillRect { x: f64, y: f64, w: f64, h: f64 },
}

/// Surface that records every call in order.
#[derive(Clone, Debug, Default)]
pub struct DrawRecorder {
    pub calls: Vec<DrawCall>,
}

impl DrawRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.calls.clear();
    }

    /// Arcs issued since the last clear, as `(cx, cy, radius)`.
    pub fn circles(&self) -> Vec<(f64, f64, f64)> {
        self.calls
            .iter()
            .filter_map(|c| match *c {
                DrawCall::Arc { cx, cy, radius, .. } => Some((cx, cy, radius)),
                _ => None,
            })
            .collect()
    }

    pub fn fill_styles(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                DrawCall::FillStyle(s) => Some(s.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn count(&self, pred: impl Fn(&DrawCall) -> bool) -> usize {
        self.calls.iter().filter(|c| pred(*c)).count()
    }
}

impl Surface for DrawRecorder {
    fn clear_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        self.calls.push(DrawCall::ClearRect { x, y, w, h });
    }

    fn begin_path(&mut self) {
        self.calls.push(DrawCall::BeginPath);
    }

    fn arc(&mut self, cx: f64, cy: f64, radius: f64, start: f64, end: f64) {
        self.calls.push(DrawCall::Arc {
            cx,
            cy,
            radius,
            start,
            end,
        });
    }

    fn set_fill_style(&mut self, color: &str) {
        self.calls.push(DrawCall::FillStyle(color.to_string()));
    }

    fn fill(&mut self) {
        self.calls.push(DrawCall::Fill);
    }

    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        self.calls.push(DrawCall::FillRect { x, y, w, h });
    }
}
