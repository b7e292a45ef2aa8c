//! Ring geometry: how many beads fit around a ring and where they sit.

use crate::constants::MAX_BEADS_PER_RING;
use glam::DVec2;
use std::f64::consts::TAU;

/// Angle subtended by a chord of length `spacing` on a ring of `ring_radius`.
///
/// Returns `None` for degenerate rings: non-positive radius or spacing, or a
/// spacing wider than the ring's diameter (where `asin` is undefined).
#[inline]
pub fn angular_spacing(spacing: f64, ring_radius: f64) -> Option<f64> {
    if !(ring_radius > 0.0) || !(spacing > 0.0) {
        return None;
    }
    let half_chord = spacing / (2.0 * ring_radius);
    if !half_chord.is_finite() || half_chord > 1.0 {
        return None;
    }
    Some(2.0 * half_chord.asin())
}

/// Number of beads that fit evenly around the ring. Degenerate rings hold zero.
pub fn point_count(spacing: f64, ring_radius: f64) -> usize {
    let Some(step) = angular_spacing(spacing, ring_radius) else {
        return 0;
    };
    let count = (TAU / step).floor();
    if !(count >= 0.0) || !count.is_finite() {
        return 0;
    }
    let count = count as usize;
    if count > MAX_BEADS_PER_RING {
        log::warn!(
            "[geometry] ring r={ring_radius:.2} wants {count} beads at spacing {spacing:.3}; clamped to {MAX_BEADS_PER_RING}"
        );
        return MAX_BEADS_PER_RING;
    }
    count
}

/// Loop offset applied to a ring: `rotation` turns per ring index.
#[inline]
pub fn starting_angle(rotation: f64, ring_index: u32) -> f64 {
    rotation * TAU * ring_index as f64
}

/// A placed bead slot: surface position plus the loop index that produced it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RingPoint {
    pub position: DVec2,
    /// Loop variable, offset by the ring's starting angle; fractional when
    /// `rotation` is.
    pub index: f64,
}

/// Place beads around a ring centred on `center`.
///
/// The loop variable runs over `[start, count + start)` in unit steps and the
/// angle is taken from the loop variable itself, so a fractional start rotates
/// the points by a fraction of one slot. Accumulated floating error may yield
/// one extra point; iteration never exceeds `count + 1`.
pub fn ring_points(
    center: DVec2,
    ring_radius: f64,
    spacing: f64,
    rotation: f64,
    ring_index: u32,
) -> Vec<RingPoint> {
    let count = point_count(spacing, ring_radius);
    if count == 0 {
        return Vec::new();
    }
    let start = starting_angle(rotation, ring_index);
    let end = count as f64 + start;
    let slot = TAU / count as f64;

    let mut points = Vec::with_capacity(count + 1);
    let mut i = start;
    while i < end && points.len() <= count {
        let angle = i * slot;
        points.push(RingPoint {
            position: center + DVec2::new(angle.cos(), angle.sin()) * ring_radius,
            index: i,
        });
        i += 1.0;
    }
    points
}
