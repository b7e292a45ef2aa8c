// Layout and animation defaults shared by the web and native frontends.

// Parameter panel defaults
pub const DEFAULT_SPACING_PER_SCALE: f64 = 20.0; // spacing = this * device scale
pub const DEFAULT_NUM_RINGS: u32 = 5;
pub const DEFAULT_BEAD_RADIUS: f64 = 15.0;
pub const DEFAULT_ROTATION: f64 = 0.0; // fraction of a full turn per ring index
pub const DEFAULT_DRAW_CENTER_BEAD: bool = true;
pub const DEFAULT_ANIMATION_RUNNING: bool = true;

// Palette
pub const DEFAULT_COLOR_1: &str = "#000";
pub const DEFAULT_COLOR_2: &str = "#080593";
pub const DARK_COLOR_1: &str = "#fff";
pub const LIGHT_FALLBACK_COLOR: &str = "#000"; // static (non-animated) bead fill
pub const DARK_FALLBACK_COLOR: &str = "#fff";

// Geometry guards
pub const MAX_BEADS_PER_RING: usize = 20_000; // keeps a single rebuild bounded
pub const MAX_NUM_RINGS: u32 = 512;
pub const MAX_TOTAL_BEADS: usize = 200_000; // whole field, all rings together

// Clock
pub const MS_PER_SECOND: f64 = 1000.0;

// Noise renderer
pub const NOISE_CELL_SIZE: f64 = 8.0; // surface pixels per noise cell
pub const NOISE_FREQUENCY: f64 = 0.01; // lattice cells per surface pixel
pub const NOISE_DRIFT_PER_SEC: f64 = 0.0; // zero keeps the field static
pub const NOISE_SEED: u64 = 42;
pub const NOISE_LATTICE_SIZE: usize = 256;
