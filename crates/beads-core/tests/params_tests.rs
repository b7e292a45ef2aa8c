// Parameter defaults, panel adjustments, query overrides and the field cache.

use beads_core::*;
use glam::DVec2;

#[test]
fn defaults_follow_viewport() {
    let vp = Viewport {
        width: 1024.0,
        height: 768.0,
        scale: 2.0,
    };
    let p = LayoutParameters::for_viewport(&vp, Theme::Light);
    assert_eq!(p.spacing, 40.0);
    assert_eq!(p.outer_ring_radius, 1024.0);
    assert_eq!(p.num_rings, 5);
    assert_eq!(p.bead_radius, 15.0);
    assert_eq!(p.rotation, 0.0);
    assert!(p.draw_center_bead);
    assert!(p.animation_running);
    assert_eq!(p.color1.as_str(), "#000");
    assert_eq!(p.color2.as_str(), "#080593");
    assert_eq!(vp.center(), DVec2::new(1024.0, 768.0));
}

#[test]
fn dark_theme_swaps_default_foreground() {
    let p = LayoutParameters::for_viewport(&Viewport::default(), Theme::Dark);
    assert_eq!(p.color1.as_str(), "#fff");

    let mut custom = LayoutParameters {
        color1: Color::from("#f00"),
        ..LayoutParameters::default()
    };
    custom.apply(ParamAdjust::ToggleTheme);
    assert_eq!(custom.theme, Theme::Dark);
    assert_eq!(custom.color1.as_str(), "#f00");
}

#[test]
fn adjustments_clamp_to_valid_ranges() {
    let mut p = LayoutParameters::default();
    p.apply(ParamAdjust::Rings(-100));
    assert_eq!(p.num_rings, 0);
    p.apply(ParamAdjust::Rings(10_000));
    assert_eq!(p.num_rings, MAX_NUM_RINGS);
    p.apply(ParamAdjust::BeadRadius(-1_000.0));
    assert_eq!(p.bead_radius, 0.0);
    p.apply(ParamAdjust::Spacing(-1_000.0));
    assert!(p.spacing > 0.0);
    p.apply(ParamAdjust::ToggleCenterBead);
    assert!(!p.draw_center_bead);
    p.apply(ParamAdjust::Rotation(0.25));
    assert_eq!(p.rotation, 0.25);
}

#[test]
fn query_overrides_apply() {
    let mut p = LayoutParameters::default();
    p.apply_query("?spacing=12.5&rings=7&bead=3&rotation=0.1&center=0&anim=off&color1=#123456&outer=250")
        .unwrap();
    assert_eq!(p.spacing, 12.5);
    assert_eq!(p.num_rings, 7);
    assert_eq!(p.bead_radius, 3.0);
    assert_eq!(p.rotation, 0.1);
    assert!(!p.draw_center_bead);
    assert!(!p.animation_running);
    assert_eq!(p.color1.as_str(), "#123456");
    assert_eq!(p.outer_ring_radius, 250.0);
}

#[test]
fn query_is_all_or_nothing() {
    let mut p = LayoutParameters::default();
    let before = p.clone();
    let err = p.apply_query("rings=9&spacing=abc").unwrap_err();
    assert_eq!(
        err,
        ParamError::InvalidValue {
            key: "spacing".into(),
            value: "abc".into()
        }
    );
    assert_eq!(p, before);
}

#[test]
fn query_rejects_bad_input() {
    let mut p = LayoutParameters::default();
    assert!(matches!(
        p.apply_query("speed=3"),
        Err(ParamError::UnknownKey(k)) if k == "speed"
    ));
    assert!(matches!(
        p.apply_query("spacing=-4"),
        Err(ParamError::OutOfRange { key: "spacing", .. })
    ));
    assert!(matches!(
        p.apply_query("rings"),
        Err(ParamError::MissingValue(_))
    ));
    assert!(p.apply_query("theme=sepia").is_err());
    assert!(p.apply_query("").is_ok());
}

#[test]
fn query_pairs_split_before_decoding() {
    let pairs = query_pairs("?color1=%23f00&&rings=3&color2=a%26b%3Dc").unwrap();
    assert_eq!(
        pairs,
        vec![("color1", "%23f00"), ("rings", "3"), ("color2", "a%26b%3Dc")]
    );
    assert!(matches!(
        query_pairs("rings=3&bead"),
        Err(ParamError::MissingValue(p)) if p == "bead"
    ));
    assert!(query_pairs("").unwrap().is_empty());
}

#[test]
fn decoded_overrides_keep_separators_inside_values() {
    let mut p = LayoutParameters::default();
    // what a frontend hands over after decoding `color2=a%26b%3Dc` per part
    p.apply_overrides([("color2", "a&b=c"), ("rings", "4")]).unwrap();
    assert_eq!(p.color2.as_str(), "a&b=c");
    assert_eq!(p.num_rings, 4);

    let before = p.clone();
    let owned = vec![
        ("rings".to_string(), "2".to_string()),
        ("bead".to_string(), "x".to_string()),
    ];
    assert!(p.apply_overrides(owned).is_err());
    assert_eq!(p, before);
}

#[test]
fn unedited_viewport_defaults_follow_resize() {
    let old = Viewport {
        width: 800.0,
        height: 600.0,
        scale: 1.0,
    };
    let new = Viewport {
        width: 1280.0,
        height: 720.0,
        scale: 2.0,
    };
    let mut p = LayoutParameters::for_viewport(&old, Theme::Light);
    p.follow_viewport(&old, &new);
    assert_eq!(p, LayoutParameters::for_viewport(&new, Theme::Light));
}

#[test]
fn edited_viewport_defaults_stay_put() {
    let old = Viewport::default();
    let new = Viewport {
        width: 1280.0,
        height: 720.0,
        scale: 2.0,
    };
    let mut p = LayoutParameters::for_viewport(&old, Theme::Light);
    p.apply(ParamAdjust::Spacing(5.0));
    p.follow_viewport(&old, &new);
    assert_eq!(p.spacing, 25.0);
    assert_eq!(p.outer_ring_radius, 1280.0);

    let mut q = LayoutParameters::for_viewport(&old, Theme::Light);
    q.apply_query("outer=300").unwrap();
    q.follow_viewport(&old, &new);
    assert_eq!(q.spacing, 40.0);
    assert_eq!(q.outer_ring_radius, 300.0);
}

#[test]
fn scene_resize_rebuilds_with_new_defaults() {
    let old = Viewport::default();
    let mut scene = Scene::new(LayoutParameters::for_viewport(&old, Theme::Light), old);
    let mut rec = DrawRecorder::new();
    scene.frame(Some(&mut rec), 0.0);
    let new = Viewport {
        width: 400.0,
        height: 400.0,
        scale: 1.0,
    };
    scene.set_viewport(new);
    assert_eq!(scene.params().outer_ring_radius, 400.0);
    assert_eq!(scene.params().spacing, 20.0);
    scene.frame(Some(&mut rec), 16.0);
    assert_eq!(scene.field_rebuilds(), 2);
}

#[test]
fn cache_reuses_field_until_layout_changes() {
    let mut cache = FieldCache::new();
    let mut p = LayoutParameters::default();
    let center = DVec2::new(400.0, 300.0);

    let first = cache.get(&p, center).clone();
    let fp = cache.fingerprint();
    cache.get(&p, center);
    assert_eq!(cache.rebuilds(), 1);

    p.draw_center_bead = !p.draw_center_bead;
    p.animation_running = !p.animation_running;
    cache.get(&p, center);
    assert_eq!(cache.rebuilds(), 1);

    p.color2 = Color::from("#abcdef");
    let second = cache.get(&p, center).clone();
    assert_eq!(cache.rebuilds(), 2);
    assert_ne!(cache.fingerprint(), fp);
    assert_eq!(first.bead_count(), second.bead_count());

    cache.get(&p, DVec2::new(10.0, 10.0));
    assert_eq!(cache.rebuilds(), 3);

    cache.invalidate();
    cache.get(&p, DVec2::new(10.0, 10.0));
    assert_eq!(cache.rebuilds(), 4);
}

#[test]
fn nan_parameters_do_not_rebuild_every_frame() {
    let mut cache = FieldCache::new();
    let p = LayoutParameters {
        rotation: f64::NAN,
        ..LayoutParameters::default()
    };
    cache.get(&p, DVec2::ZERO);
    cache.get(&p, DVec2::ZERO);
    assert_eq!(cache.rebuilds(), 1);
}

#[test]
fn layout_key_fingerprint_is_stable() {
    let p = LayoutParameters::default();
    let a = LayoutKey::new(&p, DVec2::ZERO).fingerprint();
    let b = LayoutKey::new(&p.clone(), DVec2::ZERO).fingerprint();
    assert_eq!(a, b);
}

#[test]
fn value_noise_stays_in_range() {
    let noise = ValueNoise::new(7);
    let mut y = -20.0;
    while y < 20.0 {
        let mut x = -20.0;
        while x < 20.0 {
            let v = noise.noise(x, y);
            assert!((-1.0..=1.0).contains(&v));
            x += 0.73;
        }
        y += 0.91;
    }
    assert_eq!(noise.noise(3.3, 4.4), ValueNoise::new(7).noise(3.3, 4.4));
    assert_eq!(noise.noise(f64::INFINITY, 0.0), 0.0);
}

#[test]
fn gray_hex_maps_extremes() {
    assert_eq!(gray_hex(-1.0), "#000000");
    assert_eq!(gray_hex(1.0), "#ffffff");
    assert_eq!(gray_hex(0.0), "#808080");
}
