use crate::field::{Bead, BeadField};
use crate::params::{LayoutParameters, Viewport};
use crate::surface::{fill_circle, Surface};

/// Paints a precomputed [`BeadField`] for one frame.
///
/// Does no geometry of its own: positions come from the field, radii and
/// colors from each bead's motion (animated) or its static values.
#[derive(Clone, Copy, Debug)]
pub struct FrameRenderer {
    viewport: Viewport,
}

impl FrameRenderer {
    pub fn new(viewport: Viewport) -> Self {
        Self { viewport }
    }

    /// Draw one frame. Returns `false` without drawing when there is no surface yet.
    pub fn render(
        &self,
        surface: Option<&mut dyn Surface>,
        field: &BeadField,
        params: &LayoutParameters,
        elapsed_seconds: f64,
    ) -> bool {
        let Some(surface) = surface else {
            return false;
        };

        surface.clear_rect(
            0.0,
            0.0,
            self.viewport.surface_width(),
            self.viewport.surface_height(),
        );

        let animate = params.animation_running;
        for bead in field.beads() {
            draw_bead(surface, bead, animate, elapsed_seconds);
        }
        if params.draw_center_bead {
            draw_bead(surface, field.center_bead(), animate, elapsed_seconds);
        }
        true
    }
}

#[inline]
fn draw_bead(surface: &mut dyn Surface, bead: &Bead, animate: bool, t: f64) {
    let (x, y) = (bead.position.x, bead.position.y);
    if animate {
        let sample = bead.motion.sample(t);
        fill_circle(surface, x, y, sample.radius, sample.color.as_str());
    } else {
        fill_circle(surface, x, y, bead.base_radius, bead.static_color.as_str());
    }
}
