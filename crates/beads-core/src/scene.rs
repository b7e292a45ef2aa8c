//! Per-frame orchestration shared by the web and native frontends.
//!
//! A [`Scene`] owns the live parameters, the cached bead field and the clock.
//! The host scheduler calls [`Scene::frame`] once per refresh.

use crate::cache::FieldCache;
use crate::clock::AnimationClock;
use crate::error::ParamResult;
use crate::noise::{NoiseRenderer, ValueNoise};
use crate::params::{LayoutParameters, ParamAdjust, Viewport};
use crate::render::FrameRenderer;
use crate::surface::Surface;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RenderMode {
    #[default]
    Beads,
    Noise,
}

impl RenderMode {
    pub fn toggled(self) -> Self {
        match self {
            RenderMode::Beads => RenderMode::Noise,
            RenderMode::Noise => RenderMode::Beads,
        }
    }
}

pub struct Scene {
    params: LayoutParameters,
    viewport: Viewport,
    mode: RenderMode,
    cache: FieldCache,
    clock: AnimationClock,
    noise: NoiseRenderer<ValueNoise>,
}

impl Scene {
    pub fn new(params: LayoutParameters, viewport: Viewport) -> Self {
        Self {
            params,
            viewport,
            mode: RenderMode::default(),
            cache: FieldCache::new(),
            clock: AnimationClock::new(),
            noise: NoiseRenderer::new(ValueNoise::default()),
        }
    }

    /// Run one frame. Skips silently (returns `false`) while no surface exists;
    /// the clock starts on the first frame that has one.
    pub fn frame(&mut self, surface: Option<&mut dyn Surface>, timestamp_ms: f64) -> bool {
        let Some(surface) = surface else {
            return false;
        };
        let elapsed = self.clock.tick(timestamp_ms);
        match self.mode {
            RenderMode::Beads => {
                let field = self.cache.get(&self.params, self.viewport.center());
                FrameRenderer::new(self.viewport).render(Some(surface), field, &self.params, elapsed)
            }
            RenderMode::Noise => {
                self.noise.render(surface, &self.viewport, elapsed);
                true
            }
        }
    }

    pub fn params(&self) -> &LayoutParameters {
        &self.params
    }

    /// Replace the parameter snapshot; the field follows on the next frame.
    pub fn set_params(&mut self, params: LayoutParameters) {
        self.params = params;
    }

    pub fn apply(&mut self, adjust: ParamAdjust) {
        self.params.apply(adjust);
    }

    pub fn apply_query(&mut self, query: &str) -> ParamResult<()> {
        self.params.apply_query(query)
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Resize; viewport-derived defaults the user has not edited follow along.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.params.follow_viewport(&self.viewport, &viewport);
        self.viewport = viewport;
    }

    pub fn mode(&self) -> RenderMode {
        self.mode
    }

    pub fn toggle_mode(&mut self) -> RenderMode {
        self.mode = self.mode.toggled();
        self.mode
    }

    pub fn clock(&self) -> &AnimationClock {
        &self.clock
    }

    pub fn field_rebuilds(&self) -> u64 {
        self.cache.rebuilds()
    }
}
