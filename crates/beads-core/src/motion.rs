//! Per-bead time modulation.

use crate::params::Color;

/// Instantaneous bead state at some elapsed time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MotionSample<'a> {
    pub radius: f64,
    pub color: &'a Color,
}

/// Closed-form pulse: `level = sin(ln(index + 2) * t)`, radius `|level| * base`,
/// `color2` while the level is negative and `color1` otherwise.
///
/// Built once per bead at layout time; the frequency term differs per index so
/// neighbouring beads do not pulse in lockstep.
#[derive(Clone, Debug, PartialEq)]
pub struct Motion {
    base_radius: f64,
    frequency: f64,
    color1: Color,
    color2: Color,
}

impl Motion {
    pub fn new(base_radius: f64, bead_index: f64, color1: Color, color2: Color) -> Self {
        Self {
            base_radius,
            frequency: frequency_for_index(bead_index),
            color1,
            color2,
        }
    }

    #[inline]
    pub fn level(&self, t: f64) -> f64 {
        (self.frequency * t).sin()
    }

    #[inline]
    pub fn sample(&self, t: f64) -> MotionSample<'_> {
        let level = self.level(t);
        MotionSample {
            radius: (level * self.base_radius).abs(),
            color: if level < 0.0 {
                &self.color2
            } else {
                &self.color1
            },
        }
    }

    pub fn base_radius(&self) -> f64 {
        self.base_radius
    }

    pub fn frequency(&self) -> f64 {
        self.frequency
    }
}

// Indices at or below -2 (large negative rotation) have no logarithm; such
// beads get zero frequency and stay collapsed.
#[inline]
fn frequency_for_index(bead_index: f64) -> f64 {
    let arg = bead_index + 2.0;
    if arg > 0.0 {
        arg.ln()
    } else {
        0.0
    }
}
