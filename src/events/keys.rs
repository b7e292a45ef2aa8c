// Pure key → action mapping for the keyboard parameter panel.
// Kept free of web-sys so host tests can include it directly.

use beads_core::{LayoutParameters, ParamAdjust, RenderMode};

pub const SPACING_STEP: f64 = 1.0;
pub const ROTATION_STEP: f64 = 0.005;
pub const BEAD_RADIUS_STEP: f64 = 1.0;
pub const OUTER_RADIUS_STEP: f64 = 10.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum KeyAction {
    Adjust(ParamAdjust),
    ToggleMode,
    ToggleOverlay,
    ToggleFullscreen,
}

#[inline]
pub fn action_for_key(key: &str) -> Option<KeyAction> {
    let adjust = match key {
        "[" => ParamAdjust::Spacing(-SPACING_STEP),
        "]" => ParamAdjust::Spacing(SPACING_STEP),
        "-" | "_" => ParamAdjust::Rings(-1),
        "=" | "+" => ParamAdjust::Rings(1),
        "," => ParamAdjust::Rotation(-ROTATION_STEP),
        "." => ParamAdjust::Rotation(ROTATION_STEP),
        "<" => ParamAdjust::OuterRadius(-OUTER_RADIUS_STEP),
        ">" => ParamAdjust::OuterRadius(OUTER_RADIUS_STEP),
        "ArrowUp" => ParamAdjust::BeadRadius(BEAD_RADIUS_STEP),
        "ArrowDown" => ParamAdjust::BeadRadius(-BEAD_RADIUS_STEP),
        "c" | "C" => ParamAdjust::ToggleCenterBead,
        " " => ParamAdjust::ToggleAnimation,
        "t" | "T" => ParamAdjust::ToggleTheme,
        "n" | "N" => return Some(KeyAction::ToggleMode),
        "h" | "H" => return Some(KeyAction::ToggleOverlay),
        "Enter" => return Some(KeyAction::ToggleFullscreen),
        _ => return None,
    };
    Some(KeyAction::Adjust(adjust))
}

/// Keys whose browser default (scrolling) should be suppressed.
#[inline]
pub fn suppresses_default(key: &str) -> bool {
    matches!(key, " " | "ArrowUp" | "ArrowDown" | "Enter")
}

/// Readout shown in the hint panel for the current layout and render mode.
pub fn hint_text(params: &LayoutParameters, mode: RenderMode) -> String {
    let body = match mode {
        RenderMode::Beads => params.summary(),
        RenderMode::Noise => "noise field".to_string(),
    };
    format!("{body} • {} • h hides", params.theme.name())
}
