//! Layout parameters supplied by the parameter panel and the host.
//!
//! The core treats a [`LayoutParameters`] snapshot as read-only. Frontends own
//! the live copy, edit it through [`ParamAdjust`] or query-style overrides, and
//! hand a reference to the renderer each frame.

use crate::constants::*;
use crate::error::{ParamError, ParamResult};
use glam::DVec2;
use std::fmt;
use std::sync::Arc;

/// Fill style string handed to the surface untouched (`#rgb`, `#rrggbb`, ...).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Color(Arc<str>);

impl Color {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Color {
    fn from(s: &str) -> Self {
        Self(Arc::from(s))
    }
}

impl From<String> for Color {
    fn from(s: String) -> Self {
        Self(Arc::from(s))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Color scheme chosen by the host (e.g. from `prefers-color-scheme`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn default_color1(self) -> &'static str {
        match self {
            Theme::Light => DEFAULT_COLOR_1,
            Theme::Dark => DARK_COLOR_1,
        }
    }

    /// Fill used for every bead while the animation is stopped.
    pub fn fallback_color(self) -> &'static str {
        match self {
            Theme::Light => LIGHT_FALLBACK_COLOR,
            Theme::Dark => DARK_FALLBACK_COLOR,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

/// Host-supplied drawing area: logical size plus device pixel multiplier.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub scale: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            scale: 1.0,
        }
    }
}

impl Viewport {
    /// Physical surface width in pixels.
    #[inline]
    pub fn surface_width(&self) -> f64 {
        self.width * self.scale
    }

    /// Physical surface height in pixels.
    #[inline]
    pub fn surface_height(&self) -> f64 {
        self.height * self.scale
    }

    /// Center of the physical surface; rings and the center bead are placed around it.
    #[inline]
    pub fn center(&self) -> DVec2 {
        DVec2::new(self.surface_width() * 0.5, self.surface_height() * 0.5)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct LayoutParameters {
    pub spacing: f64,
    pub outer_ring_radius: f64,
    pub num_rings: u32,
    pub bead_radius: f64,
    /// Fraction of a full turn applied per ring index.
    pub rotation: f64,
    pub draw_center_bead: bool,
    pub animation_running: bool,
    pub color1: Color,
    pub color2: Color,
    pub theme: Theme,
}

impl Default for LayoutParameters {
    fn default() -> Self {
        Self::for_viewport(&Viewport::default(), Theme::default())
    }
}

impl LayoutParameters {
    /// Panel defaults for a given host viewport.
    pub fn for_viewport(viewport: &Viewport, theme: Theme) -> Self {
        Self {
            spacing: DEFAULT_SPACING_PER_SCALE * viewport.scale,
            outer_ring_radius: viewport.width,
            num_rings: DEFAULT_NUM_RINGS,
            bead_radius: DEFAULT_BEAD_RADIUS,
            rotation: DEFAULT_ROTATION,
            draw_center_bead: DEFAULT_DRAW_CENTER_BEAD,
            animation_running: DEFAULT_ANIMATION_RUNNING,
            color1: Color::from(theme.default_color1()),
            color2: Color::from(DEFAULT_COLOR_2),
            theme,
        }
    }

    /// Apply one panel adjustment, clamping to the valid range.
    pub fn apply(&mut self, adjust: ParamAdjust) {
        match adjust {
            ParamAdjust::Spacing(delta) => {
                self.spacing = (self.spacing + delta).max(MIN_SPACING);
            }
            ParamAdjust::Rings(delta) => {
                let rings = self.num_rings as i64 + delta as i64;
                self.num_rings = rings.clamp(0, MAX_NUM_RINGS as i64) as u32;
            }
            ParamAdjust::Rotation(delta) => {
                self.rotation += delta;
            }
            ParamAdjust::BeadRadius(delta) => {
                self.bead_radius = (self.bead_radius + delta).max(0.0);
            }
            ParamAdjust::OuterRadius(delta) => {
                self.outer_ring_radius = (self.outer_ring_radius + delta).max(0.0);
            }
            ParamAdjust::ToggleCenterBead => self.draw_center_bead = !self.draw_center_bead,
            ParamAdjust::ToggleAnimation => self.animation_running = !self.animation_running,
            ParamAdjust::ToggleTheme => self.set_theme(self.theme.toggled()),
        }
    }

    /// Switch theme; a `color1` still at the old theme's default follows the new one.
    pub fn set_theme(&mut self, theme: Theme) {
        if self.color1.as_str() == self.theme.default_color1() {
            self.color1 = Color::from(theme.default_color1());
        }
        self.theme = theme;
    }

    /// Re-derive the viewport-dependent defaults after a resize.
    ///
    /// `spacing` and `outer_ring_radius` follow the new viewport only while
    /// they still hold the value `old` would have given them; edited values
    /// stay put.
    pub fn follow_viewport(&mut self, old: &Viewport, new: &Viewport) {
        if self.spacing == DEFAULT_SPACING_PER_SCALE * old.scale {
            self.spacing = DEFAULT_SPACING_PER_SCALE * new.scale;
        }
        if self.outer_ring_radius == old.width {
            self.outer_ring_radius = new.width;
        }
    }

    /// Apply `key=value` overrides separated by `&` (a leading `?` is ignored).
    ///
    /// Keys: `spacing`, `outer`, `rings`, `bead`, `rotation`, `center`, `anim`,
    /// `color1`, `color2`, `theme`. The query is taken as already decoded; use
    /// [`query_pairs`] plus [`Self::apply_overrides`] when keys or values may
    /// carry escaped `&` or `=`. Either every override applies or none does.
    pub fn apply_query(&mut self, query: &str) -> ParamResult<()> {
        self.apply_overrides(query_pairs(query)?)
    }

    /// Apply already split and decoded overrides, all or nothing.
    pub fn apply_overrides<I, K, V>(&mut self, pairs: I) -> ParamResult<()>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut next = self.clone();
        for (key, value) in pairs {
            next.apply_override(key.as_ref().trim(), value.as_ref().trim())?;
        }
        *self = next;
        Ok(())
    }

    fn apply_override(&mut self, key: &str, value: &str) -> ParamResult<()> {
        match key {
            "spacing" => {
                let v = parse_f64(key, value)?;
                if v <= 0.0 {
                    return Err(out_of_range("spacing", v, "> 0"));
                }
                self.spacing = v;
            }
            "outer" => {
                let v = parse_f64(key, value)?;
                if v < 0.0 {
                    return Err(out_of_range("outer", v, ">= 0"));
                }
                self.outer_ring_radius = v;
            }
            "rings" => {
                let v: u32 = value.parse().map_err(|_| invalid(key, value))?;
                if v > MAX_NUM_RINGS {
                    return Err(out_of_range("rings", v as f64, "<= 512"));
                }
                self.num_rings = v;
            }
            "bead" => {
                let v = parse_f64(key, value)?;
                if v < 0.0 {
                    return Err(out_of_range("bead", v, ">= 0"));
                }
                self.bead_radius = v;
            }
            "rotation" => self.rotation = parse_f64(key, value)?,
            "center" => self.draw_center_bead = parse_bool(key, value)?,
            "anim" => self.animation_running = parse_bool(key, value)?,
            "color1" | "color2" => {
                if value.is_empty() {
                    return Err(invalid(key, value));
                }
                if key == "color1" {
                    self.color1 = Color::from(value);
                } else {
                    self.color2 = Color::from(value);
                }
            }
            "theme" => {
                let theme = match value {
                    "light" => Theme::Light,
                    "dark" => Theme::Dark,
                    _ => return Err(invalid(key, value)),
                };
                self.set_theme(theme);
            }
            _ => return Err(ParamError::UnknownKey(key.to_string())),
        }
        Ok(())
    }

    /// One-line description for overlays and logs.
    pub fn summary(&self) -> String {
        format!(
            "rings {} • spacing {:.1} • bead {:.1} • rotation {:.3} • outer {:.0} • {}{}",
            self.num_rings,
            self.spacing,
            self.bead_radius,
            self.rotation,
            self.outer_ring_radius,
            if self.animation_running {
                "animated"
            } else {
                "static"
            },
            if self.draw_center_bead { " • center" } else { "" },
        )
    }
}

/// Split a raw query string into `(key, value)` pairs without decoding them.
///
/// A leading `?` and empty segments are skipped; a segment without `=` is an
/// error. Splitting happens before any decoding so escaped separators stay
/// inside their value.
pub fn query_pairs(query: &str) -> ParamResult<Vec<(&str, &str)>> {
    query
        .trim_start_matches('?')
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            pair.split_once('=')
                .ok_or_else(|| ParamError::MissingValue(pair.to_string()))
        })
        .collect()
}

/// Single live edit issued by the parameter panel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ParamAdjust {
    Spacing(f64),
    Rings(i32),
    Rotation(f64),
    BeadRadius(f64),
    OuterRadius(f64),
    ToggleCenterBead,
    ToggleAnimation,
    ToggleTheme,
}

// Smallest spacing reachable through panel adjustments.
const MIN_SPACING: f64 = 1.0;

fn parse_f64(key: &str, value: &str) -> ParamResult<f64> {
    value
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| invalid(key, value))
}

fn parse_bool(key: &str, value: &str) -> ParamResult<bool> {
    match value {
        "1" | "true" | "on" | "yes" => Ok(true),
        "0" | "false" | "off" | "no" => Ok(false),
        _ => Err(invalid(key, value)),
    }
}

fn invalid(key: &str, value: &str) -> ParamError {
    ParamError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
    }
}

fn out_of_range(key: &'static str, value: f64, expected: &'static str) -> ParamError {
    ParamError::OutOfRange {
        key,
        value,
        expected,
    }
}
