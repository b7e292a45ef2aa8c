use super::keys::{action_for_key, suppresses_default, KeyAction};
use crate::frame::FrameContext;
use crate::overlay::HintPanel;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

fn hint_panel() -> Option<HintPanel> {
    HintPanel::find(&crate::dom::window_document()?)
}

/// Refresh the hint panel after a parameter or mode change.
fn update_hint_after_change(ctx: &Rc<RefCell<FrameContext>>) {
    if let Some(panel) = hint_panel() {
        let ctx = ctx.borrow();
        panel.refresh(ctx.scene.params(), ctx.scene.mode());
    }
}

pub fn handle_global_keydown(ev: &web::KeyboardEvent, ctx: &Rc<RefCell<FrameContext>>) {
    // leave browser shortcuts alone
    if ev.ctrl_key() || ev.meta_key() || ev.alt_key() {
        return;
    }
    let key = ev.key();
    let Some(action) = action_for_key(&key) else {
        return;
    };
    if suppresses_default(&key) {
        ev.prevent_default();
    }
    match action {
        KeyAction::Adjust(adjust) => {
            ctx.borrow_mut().scene.apply(adjust);
            log::info!("[keys] {:?} -> {}", adjust, ctx.borrow().scene.params().summary());
            update_hint_after_change(ctx);
        }
        KeyAction::ToggleMode => {
            let mode = ctx.borrow_mut().scene.toggle_mode();
            log::info!("[keys] render mode {:?}", mode);
            update_hint_after_change(ctx);
        }
        KeyAction::ToggleOverlay => {
            if let Some(panel) = hint_panel() {
                panel.toggle();
            }
        }
        KeyAction::ToggleFullscreen => {
            if let Some(doc) = crate::dom::window_document() {
                if doc.fullscreen_element().is_some() {
                    _ = doc.exit_fullscreen();
                } else {
                    _ = ctx.borrow().canvas.request_fullscreen();
                }
            }
        }
    }
}

pub fn wire_global_keydown(ctx: Rc<RefCell<FrameContext>>) {
    if let Some(window) = web::window() {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
                handle_global_keydown(&ev, &ctx);
            }) as Box<dyn FnMut(_)>);
        _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
