#![cfg(target_arch = "wasm32")]
use beads_core::{LayoutParameters, Scene};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod overlay;
mod surface;

// Resize only flags the frame loop; the viewport is re-read on the next tick.
fn wire_canvas_resize(resized: &Rc<RefCell<bool>>) {
    let flag = resized.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        *flag.borrow_mut() = true;
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("beads-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas_el = document
        .get_element_by_id(constants::CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", constants::CANVAS_ID))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    let viewport = dom::sync_canvas_backing_size(&canvas)
        .ok_or_else(|| anyhow::anyhow!("cannot size canvas"))?;
    let resized = Rc::new(RefCell::new(false));
    wire_canvas_resize(&resized);

    let theme = dom::preferred_theme();
    let mut params = LayoutParameters::for_viewport(&viewport, theme);
    let overrides = dom::page_overrides();
    if let Err(e) = params.apply_overrides(overrides) {
        log::warn!("[params] ignoring query overrides: {e}");
    }
    log::info!(
        "[params] {} • viewport {:.0}x{:.0} @{:.2} • {}",
        params.summary(),
        viewport.width,
        viewport.height,
        viewport.scale,
        theme.name()
    );

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext::new(
        Scene::new(params, viewport),
        canvas,
        resized,
    )));
    if let Some(panel) = overlay::HintPanel::find(&document) {
        let ctx = frame_ctx.borrow();
        panel.refresh(ctx.scene.params(), ctx.scene.mode());
    }

    events::wire_global_keydown(frame_ctx.clone());

    // Scheduler binding: one frame per display refresh
    frame::start_loop(frame_ctx);
    Ok(())
}
