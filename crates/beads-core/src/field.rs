//! Bead field: every ring of beads for one layout snapshot.
//!
//! A field is rebuilt, never mutated, when the layout changes. Building is a
//! pure function of the parameters and the surface center.

use crate::constants::MAX_TOTAL_BEADS;
use crate::geometry::ring_points;
use crate::motion::Motion;
use crate::params::{Color, LayoutParameters};
use glam::DVec2;
use smallvec::SmallVec;

#[derive(Clone, Debug, PartialEq)]
pub struct Bead {
    pub position: DVec2,
    pub base_radius: f64,
    pub motion: Motion,
    pub static_color: Color,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Ring {
    pub radius: f64,
    /// Angular sweep order.
    pub beads: Vec<Bead>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct BeadField {
    rings: SmallVec<[Ring; 8]>,
    center_bead: Bead,
}

/// Radius of ring `ring_index`: evenly stepped inwards from the outer ring.
#[inline]
pub fn ring_radius(outer_ring_radius: f64, num_rings: u32, ring_index: u32) -> f64 {
    outer_ring_radius - ring_index as f64 * (outer_ring_radius / num_rings as f64)
}

impl BeadField {
    pub fn build(params: &LayoutParameters, center: DVec2) -> Self {
        let static_color = Color::from(params.theme.fallback_color());
        let make_bead = |position: DVec2, index: f64| Bead {
            position,
            base_radius: params.bead_radius,
            motion: Motion::new(
                params.bead_radius,
                index,
                params.color1.clone(),
                params.color2.clone(),
            ),
            static_color: static_color.clone(),
        };

        // Rings are filled outermost first until the field budget runs out;
        // later rings keep their radius but hold no beads.
        let mut remaining = MAX_TOTAL_BEADS;
        let rings = (0..params.num_rings)
            .map(|ring_index| {
                let radius = ring_radius(params.outer_ring_radius, params.num_rings, ring_index);
                if remaining == 0 {
                    return Ring {
                        radius,
                        beads: Vec::new(),
                    };
                }
                // first generated ring already carries one step of rotation
                let points = ring_points(
                    center,
                    radius,
                    params.spacing,
                    params.rotation,
                    ring_index + 1,
                );
                if points.len() > remaining {
                    log::warn!(
                        "[field] bead budget {MAX_TOTAL_BEADS} reached at ring {ring_index}; dropping {} beads",
                        points.len() - remaining
                    );
                }
                let beads: Vec<Bead> = points
                    .into_iter()
                    .take(remaining)
                    .map(|p| make_bead(p.position, p.index))
                    .collect();
                remaining -= beads.len();
                Ring { radius, beads }
            })
            .collect();

        let field = Self {
            rings,
            center_bead: make_bead(center, 0.0),
        };
        log::debug!(
            "[field] built rings={} beads={} spacing={:.2} outer={:.1}",
            field.rings.len(),
            field.bead_count(),
            params.spacing,
            params.outer_ring_radius
        );
        field
    }

    /// Rings from outermost to innermost.
    pub fn rings(&self) -> &[Ring] {
        &self.rings
    }

    /// Bead at the surface center, index 0; drawn only when the layout asks for it.
    pub fn center_bead(&self) -> &Bead {
        &self.center_bead
    }

    pub fn beads(&self) -> impl Iterator<Item = &Bead> + '_ {
        self.rings.iter().flat_map(|r| r.beads.iter())
    }

    /// Ring beads only; the center bead is not counted.
    pub fn bead_count(&self) -> usize {
        self.rings.iter().map(|r| r.beads.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.bead_count() == 0
    }
}
