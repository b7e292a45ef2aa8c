use crate::constants::DARK_SCHEME_QUERY;
use beads_core::{query_pairs, Theme, Viewport};
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Match the canvas backing store to its CSS size times the device pixel
/// ratio, and report the resulting viewport.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) -> Option<Viewport> {
    let w = web::window()?;
    let dpr = w.device_pixel_ratio();
    let rect = canvas.get_bounding_client_rect();
    let w_px = (rect.width() * dpr) as u32;
    let h_px = (rect.height() * dpr) as u32;
    canvas.set_width(w_px.max(1));
    canvas.set_height(h_px.max(1));
    Some(Viewport {
        width: rect.width(),
        height: rect.height(),
        scale: dpr,
    })
}

/// Theme from the user's color-scheme preference; light when unavailable.
pub fn preferred_theme() -> Theme {
    let dark = web::window()
        .and_then(|w| w.match_media(DARK_SCHEME_QUERY).ok().flatten())
        .map(|mql| mql.matches())
        .unwrap_or(false);
    if dark {
        Theme::Dark
    } else {
        Theme::Light
    }
}

/// Page query overrides as `(key, value)` pairs.
///
/// The raw search string is split on `&` and `=` first; each key and value is
/// then decoded on its own, with `+` read as a space. A malformed query or an
/// undecodable part is logged and yields no overrides.
pub fn page_overrides() -> Vec<(String, String)> {
    let Some(search) = web::window().and_then(|w| w.location().search().ok()) else {
        return Vec::new();
    };
    let pairs = match query_pairs(&search) {
        Ok(pairs) => pairs,
        Err(e) => {
            log::warn!("[dom] malformed query {search:?}: {e}");
            return Vec::new();
        }
    };
    let decoded: Option<Vec<(String, String)>> = pairs
        .into_iter()
        .map(|(key, value)| Some((decode_query_part(key)?, decode_query_part(value)?)))
        .collect();
    decoded.unwrap_or_default()
}

fn decode_query_part(part: &str) -> Option<String> {
    let spaced = part.replace('+', " ");
    match js_sys::decode_uri_component(&spaced) {
        Ok(s) => s.as_string(),
        Err(e) => {
            log::warn!("[dom] undecodable query part {part:?}: {e:?}");
            None
        }
    }
}
