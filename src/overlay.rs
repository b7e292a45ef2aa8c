use crate::constants::HINT_OVERLAY_ID;
use crate::events::hint_text;
use beads_core::{LayoutParameters, RenderMode};
use wasm_bindgen::JsCast;
use web_sys as web;

/// Parameter readout in the corner of the page, driven by the `hidden` attribute.
pub struct HintPanel {
    el: web::HtmlElement,
}

impl HintPanel {
    pub fn find(document: &web::Document) -> Option<Self> {
        let el = document
            .get_element_by_id(HINT_OVERLAY_ID)?
            .dyn_into::<web::HtmlElement>()
            .ok()?;
        Some(Self { el })
    }

    pub fn toggle(&self) {
        self.el.set_hidden(!self.el.hidden());
    }

    /// Rewrite the readout and bring the panel back into view.
    pub fn refresh(&self, params: &LayoutParameters, mode: RenderMode) {
        self.el.set_text_content(Some(&hint_text(params, mode)));
        self.el.set_hidden(false);
    }
}
