//! Alternate renderer: a grid of cells shaded by a 2D noise field.
//!
//! Shares nothing with the bead pipeline except the clock and the surface.

use crate::constants::*;
use crate::params::Viewport;
use crate::surface::Surface;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Scalar field sampled at surface coordinates; output lies in `[-1, 1]`.
pub trait NoiseField {
    fn noise(&self, x: f64, y: f64) -> f64;
}

/// Seeded lattice value noise with smoothstep interpolation.
#[derive(Clone, Debug)]
pub struct ValueNoise {
    values: Vec<f64>,
    perm: Vec<usize>,
}

impl ValueNoise {
    pub fn new(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let values = (0..NOISE_LATTICE_SIZE)
            .map(|_| rng.gen_range(-1.0_f64..=1.0))
            .collect();
        let mut perm: Vec<usize> = (0..NOISE_LATTICE_SIZE).collect();
        perm.shuffle(&mut rng);
        Self { values, perm }
    }

    #[inline]
    fn lattice(&self, ix: i64, iy: i64) -> f64 {
        let n = NOISE_LATTICE_SIZE as i64;
        let xi = ix.rem_euclid(n) as usize;
        let yi = iy.rem_euclid(n) as usize;
        self.values[self.perm[(self.perm[xi] + yi) % NOISE_LATTICE_SIZE]]
    }
}

impl Default for ValueNoise {
    fn default() -> Self {
        Self::new(NOISE_SEED)
    }
}

impl NoiseField for ValueNoise {
    fn noise(&self, x: f64, y: f64) -> f64 {
        if !x.is_finite() || !y.is_finite() {
            return 0.0;
        }
        let (x0, y0) = (x.floor(), y.floor());
        let (sx, sy) = (smoothstep(x - x0), smoothstep(y - y0));
        let (ix, iy) = (x0 as i64, y0 as i64);
        let top = lerp(self.lattice(ix, iy), self.lattice(ix + 1, iy), sx);
        let bottom = lerp(self.lattice(ix, iy + 1), self.lattice(ix + 1, iy + 1), sx);
        lerp(top, bottom, sy).clamp(-1.0, 1.0)
    }
}

#[inline]
fn smoothstep(t: f64) -> f64 {
    t * t * (3.0 - 2.0 * t)
}

#[inline]
fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

#[derive(Clone, Debug)]
pub struct NoiseRenderer<N: NoiseField> {
    field: N,
    pub cell_size: f64,
    pub frequency: f64,
    /// Horizontal drift of the sample window, in lattice units per second.
    pub drift_per_sec: f64,
}

impl<N: NoiseField> NoiseRenderer<N> {
    pub fn new(field: N) -> Self {
        Self {
            field,
            cell_size: NOISE_CELL_SIZE,
            frequency: NOISE_FREQUENCY,
            drift_per_sec: NOISE_DRIFT_PER_SEC,
        }
    }

    pub fn render(&self, surface: &mut dyn Surface, viewport: &Viewport, elapsed_seconds: f64) {
        let (w, h) = (viewport.surface_width(), viewport.surface_height());
        surface.clear_rect(0.0, 0.0, w, h);

        let cell = self.cell_size.max(1.0);
        let drift = self.drift_per_sec * elapsed_seconds;
        let mut y = 0.0;
        while y < h {
            let mut x = 0.0;
            while x < w {
                let v = self.field.noise(x * self.frequency + drift, y * self.frequency);
                surface.set_fill_style(&gray_hex(v));
                surface.fill_rect(x, y, cell, cell);
                x += cell;
            }
            y += cell;
        }
    }
}

/// Map a noise value in `[-1, 1]` to a `#rrggbb` gray.
pub fn gray_hex(v: f64) -> String {
    let shade = (((v.clamp(-1.0, 1.0) + 1.0) * 0.5) * 255.0).round() as u8;
    format!("#{shade:02x}{shade:02x}{shade:02x}")
}
