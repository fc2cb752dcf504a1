//! Headless driver: runs the progressive sampler for a number of ticks and
//! writes what a display would show to a PNG.

mod rasterizer;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use glint_core::{load_scene, Scene};
use glint_renderer::{Camera, CameraConfig, Command};

use crate::rasterizer::Canvas;

#[derive(Parser, Debug)]
#[command(name = "glint_viewer", version, about = "Progressive ray tracer for planar patch scenes")]
struct Args {
    /// Scene description (JSON). Renders the built-in demo when omitted
    #[arg(short, long)]
    scene: Option<PathBuf>,

    /// Comma separated commands, one per tick (e.g. forward,turn-left)
    #[arg(short, long, value_delimiter = ',')]
    commands: Vec<Command>,

    /// Maximum number of ticks; stops early once the render settles
    #[arg(short, long, default_value_t = 10_000)]
    frames: usize,

    /// Output image
    #[arg(short, long, default_value = "glint.png")]
    output: PathBuf,

    /// Trace on a single thread
    #[arg(long)]
    sequential: bool,

    #[arg(long, default_value = "info")]
    log_level: log::LevelFilter,
}

fn load(args: &Args) -> Result<(Scene, CameraConfig)> {
    let Some(path) = &args.scene else {
        log::info!("No scene given, using the demo scene");
        return Ok((Scene::demo(), CameraConfig::default()));
    };

    let file = load_scene(path).with_context(|| format!("Failed to load scene {}", path.display()))?;
    let config = match file.camera {
        Some(value) => serde_json::from_value(value).context("Invalid camera settings")?,
        None => CameraConfig::default(),
    };
    Ok((file.scene, config))
}

fn log_pose(camera: &Camera) {
    let pose = camera.pose();
    log::info!(
        "Pose: {:.2}, {:.2}, {:.2}, {:.3}, {:.3}",
        pose.position.x,
        pose.position.y,
        pose.position.z,
        pose.orientation.yaw,
        pose.orientation.pitch
    );
}

fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::Builder::from_default_env()
        .filter_level(args.log_level)
        .init();

    log::info!("Starting Glint Viewer");

    let (scene, mut config) = load(&args)?;
    if args.sequential {
        config = config.with_parallel(false);
    }

    let mut camera = Camera::new(config, scene.viewpoint);
    let mut canvas = Canvas::for_config(&config);
    let (width, height) = canvas.image().dimensions();
    log::info!(
        "Rendering '{}' at {}x{} ({} surfaces, {} lights)",
        scene.name,
        width,
        height,
        scene.surface_count(),
        scene.light_count()
    );
    log_pose(&camera);

    let mut ticks = 0;
    for frame in 0..args.frames {
        let command = args.commands.get(frame).copied().unwrap_or_default();
        let report = camera.tick(&scene.surfaces, &scene.lights, command);
        canvas.draw(camera.sample_grid());
        ticks += 1;

        if report.reset {
            log::debug!("'{}' moved the camera", command);
            log_pose(&camera);
        }
        if report.refined {
            let progress = camera.progress();
            log::debug!("Pass {}/{} (footprint {})", progress.level, progress.levels, progress.footprint);
        }
        if camera.is_complete() && frame + 1 >= args.commands.len() {
            break;
        }
    }

    let progress = camera.progress();
    log::info!(
        "Stopped after {} ticks: pass {}/{}, column {}/{}{}",
        ticks,
        progress.level,
        progress.levels,
        progress.cursor,
        progress.columns,
        if camera.is_complete() { " (settled)" } else { "" }
    );
    log_pose(&camera);

    canvas.save(&args.output)?;
    log::info!("Wrote {}", args.output.display());

    Ok(())
}
