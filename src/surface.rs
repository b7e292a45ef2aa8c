use beads_core::Surface;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// [`Surface`] over a canvas 2D rendering context.
pub struct CanvasSurface {
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasSurface {
    /// Grab the canvas' 2D context. `None` while the context is unavailable.
    pub fn acquire(canvas: &web::HtmlCanvasElement) -> Option<Self> {
        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .ok()?;
        Some(Self { ctx })
    }
}

impl Surface for CanvasSurface {
    fn clear_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        self.ctx.clear_rect(x, y, w, h);
    }

    fn begin_path(&mut self) {
        self.ctx.begin_path();
    }

    fn arc(&mut self, cx: f64, cy: f64, radius: f64, start_angle: f64, end_angle: f64) {
        _ = self.ctx.arc(cx, cy, radius, start_angle, end_angle);
    }

    fn set_fill_style(&mut self, color: &str) {
        #[allow(deprecated)]
        self.ctx.set_fill_style(&JsValue::from_str(color));
    }

    fn fill(&mut self) {
        self.ctx.fill();
    }

    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        self.ctx.fill_rect(x, y, w, h);
    }
}
