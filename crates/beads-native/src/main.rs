//! Headless renderer: runs the bead pipeline at a fixed frame rate and writes
//! each frame as an SVG file.
//!
//! ```text
//! beads-native [--frames N] [--fps F] [--out DIR] [--size WxH] [--scale S]
//!              [--noise] [key=value ...]
//! ```
//! `key=value` pairs use the same keys as the web query string
//! (`spacing`, `rings`, `bead`, `rotation`, `center`, `anim`, `theme`, ...).

mod svg;

use anyhow::{anyhow, bail, Context};
use beads_core::{LayoutParameters, RenderMode, Scene, Theme, Viewport};
use instant::Instant;
use std::path::PathBuf;
use svg::SvgSurface;

const DEFAULT_FRAMES: u32 = 60;
const DEFAULT_FPS: f64 = 30.0;
const DEFAULT_OUT_DIR: &str = "frames";
const LIGHT_BACKGROUND: &str = "#fff";
const DARK_BACKGROUND: &str = "#000";

#[derive(Debug, Clone, PartialEq)]
struct Options {
    frames: u32,
    fps: f64,
    out_dir: PathBuf,
    viewport: Viewport,
    noise: bool,
    overrides: Vec<String>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            frames: DEFAULT_FRAMES,
            fps: DEFAULT_FPS,
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
            viewport: Viewport::default(),
            noise: false,
            overrides: Vec::new(),
        }
    }
}

fn parse_args(args: impl IntoIterator<Item = String>) -> anyhow::Result<Options> {
    let mut opts = Options::default();
    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        let mut value = |name: &str| {
            args.next()
                .ok_or_else(|| anyhow!("{name} expects a value"))
        };
        match arg.as_str() {
            "--frames" => opts.frames = value("--frames")?.parse().context("--frames")?,
            "--fps" => {
                opts.fps = value("--fps")?.parse().context("--fps")?;
                if !(opts.fps > 0.0) {
                    bail!("--fps must be positive");
                }
            }
            "--out" => opts.out_dir = PathBuf::from(value("--out")?),
            "--size" => {
                let size = value("--size")?;
                let (w, h) = size
                    .split_once('x')
                    .ok_or_else(|| anyhow!("--size expects WxH, got {size}"))?;
                opts.viewport.width = w.parse().context("--size width")?;
                opts.viewport.height = h.parse().context("--size height")?;
            }
            "--scale" => opts.viewport.scale = value("--scale")?.parse().context("--scale")?,
            "--noise" => opts.noise = true,
            other if other.contains('=') => opts.overrides.push(other.to_string()),
            other => bail!("unknown argument `{other}`"),
        }
    }
    Ok(opts)
}

fn build_scene(opts: &Options) -> anyhow::Result<Scene> {
    let mut params = LayoutParameters::for_viewport(&opts.viewport, Theme::Light);
    params
        .apply_query(&opts.overrides.join("&"))
        .context("invalid parameter override")?;
    log::info!("[params] {}", params.summary());

    let mut scene = Scene::new(params, opts.viewport);
    if opts.noise {
        scene.toggle_mode();
    }
    Ok(scene)
}

fn run(opts: &Options) -> anyhow::Result<()> {
    let mut scene = build_scene(opts)?;
    std::fs::create_dir_all(&opts.out_dir)
        .with_context(|| format!("creating {}", opts.out_dir.display()))?;

    let background = match scene.params().theme {
        Theme::Light => LIGHT_BACKGROUND,
        Theme::Dark => DARK_BACKGROUND,
    };
    let vp = scene.viewport();
    let mut surface = SvgSurface::new(vp.surface_width(), vp.surface_height(), Some(background));

    let started = Instant::now();
    let frame_ms = 1000.0 / opts.fps;
    for i in 0..opts.frames {
        scene.frame(Some(&mut surface), i as f64 * frame_ms);
        let path = opts.out_dir.join(format!("frame_{i:04}.svg"));
        std::fs::write(&path, surface.finish())
            .with_context(|| format!("writing {}", path.display()))?;
        log::debug!("[frame] {} shapes -> {}", surface.shape_count(), path.display());
    }
    log::info!(
        "[done] {} {} frames in {:.2}s, field rebuilds {}",
        opts.frames,
        match scene.mode() {
            RenderMode::Beads => "bead",
            RenderMode::Noise => "noise",
        },
        started.elapsed().as_secs_f64(),
        scene.field_rebuilds()
    );
    Ok(())
}

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let result = parse_args(std::env::args().skip(1)).and_then(|opts| run(&opts));
    if let Err(e) = result {
        log::error!("{e:#}");
        std::process::exit(1);
    }
}
