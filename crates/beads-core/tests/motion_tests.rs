// Bead motion and the animation clock.

use beads_core::*;

fn motion(index: f64) -> Motion {
    Motion::new(15.0, index, Color::from("#000"), Color::from("#080593"))
}

#[test]
fn index_zero_at_time_zero_is_collapsed_and_color1() {
    let m = motion(0.0);
    let s = m.sample(0.0);
    assert_eq!(s.radius, 0.0);
    assert_eq!(s.color.as_str(), "#000");
}

#[test]
fn radius_stays_within_base_radius() {
    for index in [0.0, 1.0, 2.5, 7.0, 61.0, 400.0] {
        let m = motion(index);
        let mut t = -50.0;
        while t < 50.0 {
            let r = m.sample(t).radius;
            assert!((0.0..=15.0).contains(&r), "index={index} t={t} radius={r}");
            t += 0.037;
        }
    }
}

#[test]
fn negative_level_selects_color2() {
    let m = motion(0.0);
    // ln(2) * t = 3π/2 puts the sine at its minimum
    let t = 1.5 * std::f64::consts::PI / std::f64::consts::LN_2;
    let s = m.sample(t);
    assert!(m.level(t) < 0.0);
    assert_eq!(s.color.as_str(), "#080593");
    assert!((s.radius - 15.0).abs() < 1e-9);
}

#[test]
fn frequency_varies_with_index() {
    assert!((motion(0.0).frequency() - 2f64.ln()).abs() < 1e-12);
    assert!(motion(5.0).frequency() > motion(1.0).frequency());
}

#[test]
fn small_negative_index_uses_plain_log() {
    // one rotation step backwards puts the first bead just below zero
    let index = starting_angle(-0.005, 1);
    assert!(index > -2.0 && index < 0.0);
    let m = motion(index);
    assert!((m.frequency() - (index + 2.0).ln()).abs() < 1e-12);
    assert!((m.frequency() - 0.67731).abs() < 1e-4);
}

#[test]
fn index_at_or_below_minus_two_stays_collapsed() {
    for index in [-2.0, -6.0, -1e9] {
        let m = motion(index);
        assert_eq!(m.frequency(), 0.0);
        let s = m.sample(3.0);
        assert_eq!(s.radius, 0.0);
        assert_eq!(s.color.as_str(), "#000");
    }
}

#[test]
fn negative_rotation_field_has_finite_radii() {
    let params = LayoutParameters {
        rotation: -0.5,
        num_rings: 3,
        spacing: 10.0,
        outer_ring_radius: 100.0,
        ..LayoutParameters::default()
    };
    let field = BeadField::build(&params, glam::DVec2::ZERO);
    assert!(!field.is_empty());
    for bead in field.beads() {
        assert!(bead.motion.sample(7.5).radius.is_finite());
    }
}

#[test]
fn clock_is_zero_before_start() {
    let clock = AnimationClock::new();
    assert!(!clock.is_started());
    assert_eq!(clock.elapsed_seconds(12_345.0), 0.0);
}

#[test]
fn clock_converts_milliseconds_to_seconds() {
    let mut clock = AnimationClock::new();
    assert_eq!(clock.tick(1_000.0), 0.0);
    assert!((clock.tick(3_500.0) - 2.5).abs() < 1e-12);
}

#[test]
fn clock_start_is_latched_once() {
    let mut clock = AnimationClock::new();
    clock.start_at(200.0);
    clock.start_at(900.0);
    assert_eq!(clock.start_ms(), Some(200.0));
    assert!((clock.elapsed_seconds(1_200.0) - 1.0).abs() < 1e-12);
}
