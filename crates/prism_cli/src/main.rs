use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use prism_core::{load_scene, SceneDescription};
use prism_renderer::{build_scene, render, RenderConfig, DEFAULT_BUCKET_SIZE, DEFAULT_RECURSION_DEPTH};

/// Built-in scene rendered when no scene file is given
const DEMO_SCENE: &str = include_str!("../scenes/demo.json");

/// Render a scene with the Prism ray tracer
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Scene description (JSON). Renders the built-in demo scene when omitted
    #[arg(short, long)]
    scene: Option<PathBuf>,

    /// Output image; the format follows the extension
    #[arg(short, long, default_value = "render.png")]
    output: PathBuf,

    /// Override the scene's image width
    #[arg(long)]
    width: Option<u32>,

    /// Override the scene's image height
    #[arg(long)]
    height: Option<u32>,

    /// Samples per pixel
    #[arg(long, default_value_t = 1)]
    samples: u32,

    /// Maximum reflection/refraction bounces
    #[arg(long, default_value_t = DEFAULT_RECURSION_DEPTH)]
    depth: u32,

    /// Bucket size in pixels
    #[arg(long, default_value_t = DEFAULT_BUCKET_SIZE)]
    bucket_size: u32,

    /// Seed for sample jitter
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = if args.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();

    log::info!("Starting Prism");
    let start = Instant::now();

    let (scene, base_dir) = match &args.scene {
        Some(path) => {
            let scene = load_scene(path)
                .with_context(|| format!("Failed to load scene {}", path.display()))?;
            let base_dir = path.parent().unwrap_or(Path::new(".")).to_path_buf();
            (scene, base_dir)
        }
        None => {
            log::info!("No scene given, rendering the demo scene");
            let scene = SceneDescription::from_json(DEMO_SCENE).context("Invalid demo scene")?;
            (scene, PathBuf::from("."))
        }
    };

    let (world, mut camera) = build_scene(&scene, &base_dir).context("Failed to build scene")?;

    if args.width.is_some() || args.height.is_some() {
        let width = args.width.unwrap_or(camera.image_width);
        let height = args.height.unwrap_or(camera.image_height);
        camera = camera.with_resolution(width, height);
    }

    let config = RenderConfig {
        samples_per_pixel: args.samples.max(1),
        max_depth: args.depth,
        bucket_size: args.bucket_size,
        seed: args.seed,
    };

    let image = render(&camera, &world, &config);
    image
        .save(&args.output)
        .with_context(|| format!("Failed to save {}", args.output.display()))?;

    log::info!("Done in {:.2?}", start.elapsed());
    Ok(())
}
