use std::error::Error;
use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;

use solari::{frame, RenderConfig, Renderer, Scene, ShadowMode};

/// Render a JSON scene description to an image file.
#[derive(Debug, Parser)]
#[command(name = "solari", version)]
struct Args {
    /// Scene description (JSON).
    scene: PathBuf,

    /// Output image, format picked from the extension.
    #[arg(short, long, default_value = "out.png")]
    output: PathBuf,

    #[arg(long, default_value_t = 640)]
    width: u32,

    #[arg(long, default_value_t = 480)]
    height: u32,

    /// Divide the film into this many pixels instead of the image width.
    #[arg(long)]
    reference_width: Option<u32>,

    /// Let every model cast shadows, not just the one being shaded.
    #[arg(long)]
    scene_shadows: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let scene = Scene::load(&args.scene)?;

    let renderer = Renderer::new(RenderConfig {
        reference_width: args.reference_width,
        shadows: if args.scene_shadows {
            ShadowMode::Scene
        } else {
            ShadowMode::SelfOnly
        },
    });

    log::info!("Start drawing ...");
    let now = Instant::now();

    let pixels = renderer.render(&scene, args.width, args.height);

    log::info!("Finished, elapsed: {:.3} ms", now.elapsed().as_secs_f64() * 1000.0);

    frame::save(&args.output, &pixels, args.width, args.height)?;

    Ok(())
}
