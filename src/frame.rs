use crate::constants::FRAME_STATS_INTERVAL;
use crate::dom;
use crate::surface::CanvasSurface;
use beads_core::{Scene, Surface};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub scene: Scene,
    pub canvas: web::HtmlCanvasElement,
    // acquired lazily; frames are skipped until the 2D context exists
    pub surface: Option<CanvasSurface>,
    pub resized: Rc<RefCell<bool>>,

    pub frames: u64,
    pub busy_secs: f64,
    pub last_report: Instant,
}

impl FrameContext {
    pub fn new(scene: Scene, canvas: web::HtmlCanvasElement, resized: Rc<RefCell<bool>>) -> Self {
        Self {
            scene,
            canvas,
            surface: None,
            resized,
            frames: 0,
            busy_secs: 0.0,
            last_report: Instant::now(),
        }
    }

    pub fn frame(&mut self, timestamp_ms: f64) {
        let started = Instant::now();

        if std::mem::take(&mut *self.resized.borrow_mut()) {
            if let Some(vp) = dom::sync_canvas_backing_size(&self.canvas) {
                log::info!(
                    "[frame] viewport {:.0}x{:.0} @{:.2}",
                    vp.width,
                    vp.height,
                    vp.scale
                );
                self.scene.set_viewport(vp);
            }
        }

        if self.surface.is_none() {
            self.surface = CanvasSurface::acquire(&self.canvas);
        }
        let surface = self.surface.as_mut().map(|s| s as &mut dyn Surface);
        if !self.scene.frame(surface, timestamp_ms) {
            return;
        }

        self.frames += 1;
        self.busy_secs += started.elapsed().as_secs_f64();
        if self.frames % FRAME_STATS_INTERVAL == 0 {
            let wall = self.last_report.elapsed().as_secs_f64();
            log::debug!(
                "[frame] {} frames: avg draw {:.2} ms, {:.1} fps, field rebuilds {}",
                FRAME_STATS_INTERVAL,
                self.busy_secs * 1000.0 / FRAME_STATS_INTERVAL as f64,
                FRAME_STATS_INTERVAL as f64 / wall.max(1e-6),
                self.scene.field_rebuilds()
            );
            self.busy_secs = 0.0;
            self.last_report = Instant::now();
        }
    }
}

type TickClosure = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// Drive `frame_ctx` from `requestAnimationFrame` for the lifetime of the page.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: TickClosure = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move |timestamp_ms: f64| {
        frame_ctx.borrow_mut().frame(timestamp_ms);
        request_frame(&tick_clone);
    }) as Box<dyn FnMut(f64)>));
    request_frame(&tick);
}

fn request_frame(tick: &TickClosure) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
