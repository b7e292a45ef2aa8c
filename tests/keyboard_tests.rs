// Host-side tests for the keyboard parameter panel mapping.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod keys {
    include!("../src/events/keys.rs");
}

use beads_core::{LayoutParameters, ParamAdjust, RenderMode, Theme};
use keys::*;

#[test]
fn bracket_keys_adjust_spacing() {
    assert_eq!(
        action_for_key("["),
        Some(KeyAction::Adjust(ParamAdjust::Spacing(-SPACING_STEP)))
    );
    assert_eq!(
        action_for_key("]"),
        Some(KeyAction::Adjust(ParamAdjust::Spacing(SPACING_STEP)))
    );
}

#[test]
fn ring_keys_accept_shifted_variants() {
    for key in ["-", "_"] {
        assert_eq!(
            action_for_key(key),
            Some(KeyAction::Adjust(ParamAdjust::Rings(-1)))
        );
    }
    for key in ["=", "+"] {
        assert_eq!(
            action_for_key(key),
            Some(KeyAction::Adjust(ParamAdjust::Rings(1)))
        );
    }
}

#[test]
fn toggles_are_case_insensitive() {
    for (lower, upper) in [("c", "C"), ("t", "T"), ("n", "N"), ("h", "H")] {
        assert_eq!(action_for_key(lower), action_for_key(upper));
        assert!(action_for_key(lower).is_some());
    }
    assert_eq!(action_for_key("n"), Some(KeyAction::ToggleMode));
    assert_eq!(action_for_key("h"), Some(KeyAction::ToggleOverlay));
    assert_eq!(action_for_key("Enter"), Some(KeyAction::ToggleFullscreen));
}

#[test]
fn unmapped_keys_do_nothing() {
    for key in ["q", "Shift", "Tab", "7", ""] {
        assert_eq!(action_for_key(key), None, "key {key:?}");
    }
}

#[test]
fn space_toggles_animation_and_suppresses_scroll() {
    assert_eq!(
        action_for_key(" "),
        Some(KeyAction::Adjust(ParamAdjust::ToggleAnimation))
    );
    assert!(suppresses_default(" "));
    assert!(suppresses_default("ArrowUp"));
    assert!(!suppresses_default("["));
}

#[test]
fn rotation_keys_round_trip_to_start() {
    let mut params = LayoutParameters::default();
    let start = params.rotation;
    for key in [".", ".", ",", ","] {
        if let Some(KeyAction::Adjust(adjust)) = action_for_key(key) {
            params.apply(adjust);
        }
    }
    assert!((params.rotation - start).abs() < 1e-12);
}

#[test]
fn arrow_keys_never_push_bead_radius_negative() {
    let mut params = LayoutParameters::default();
    for _ in 0..100 {
        if let Some(KeyAction::Adjust(adjust)) = action_for_key("ArrowDown") {
            params.apply(adjust);
        }
    }
    assert_eq!(params.bead_radius, 0.0);
}

#[test]
fn hint_text_follows_mode_and_theme() {
    let mut params = LayoutParameters::default();
    let beads = hint_text(&params, RenderMode::Beads);
    assert!(beads.starts_with(&params.summary()));
    assert!(beads.contains("light"));

    params.set_theme(Theme::Dark);
    let noise = hint_text(&params, RenderMode::Noise);
    assert!(noise.starts_with("noise field"));
    assert!(noise.contains("dark"));
    assert!(!noise.contains("rings"));
}
