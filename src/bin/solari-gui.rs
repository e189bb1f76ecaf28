use std::error::Error;
use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;
use rand::{rngs::StdRng, Rng, SeedableRng};
use sdl2::{event::Event, gfx::framerate::FPSManager, keyboard::Keycode, pixels::PixelFormatEnum};

use solari::{
    geometry::Sphere,
    scalar::PI,
    Material, Model, PointLight, RenderConfig, Renderer, Scene, ShadowMode, Vec3,
};

/// Live preview: re-renders the scene every frame while the camera spins.
#[derive(Debug, Parser)]
#[command(name = "solari-gui", version)]
struct Args {
    /// Scene description (JSON). A field of random spheres when omitted.
    scene: Option<PathBuf>,

    #[arg(long, default_value_t = 640)]
    width: u32,

    #[arg(long, default_value_t = 480)]
    height: u32,

    /// Let every model cast shadows, not just the one being shaded.
    #[arg(long)]
    scene_shadows: bool,
}

fn demo_scene() -> Scene {
    let mut scene = Scene::default();
    scene.camera_mut().focal_length = 0.018;

    // Seeded so every run shows the same field.
    let mut rng = StdRng::seed_from_u64(0x5EED);
    for _ in 0..50 {
        let radius = rng.gen_range(1..=4) as f64;
        let mut center = Vec3::new(
            rng.gen_range(-10..10) as f64,
            rng.gen_range(-10..10) as f64,
            rng.gen_range(-25..25) as f64,
        );
        // Keep the eye outside every sphere.
        if center.z.abs() < radius {
            center.z += radius.copysign(center.z);
        }

        let color = Vec3::new(rng.gen::<f64>(), rng.gen::<f64>(), rng.gen::<f64>());

        scene.add_model(Model::new(Sphere::with_center(radius, center), Material::new(color)));
    }

    scene.add_light(PointLight::new(Vec3::ZERO, 1.0));
    scene
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let (width, height) = (args.width, args.height);

    let mut scene = match &args.scene {
        Some(path) => Scene::load(path)?,
        None => demo_scene(),
    };

    let renderer = Renderer::new(RenderConfig {
        reference_width: None,
        shadows: if args.scene_shadows {
            ShadowMode::Scene
        } else {
            ShadowMode::SelfOnly
        },
    });

    let ctx = sdl2::init()?;
    let video = ctx.video()?;
    let window = video.window("Solari", width, height).position_centered().build()?;

    let mut canvas = window.into_canvas().accelerated().present_vsync().build()?;
    let texture_creator = canvas.texture_creator();
    let mut texture = texture_creator.create_texture_streaming(PixelFormatEnum::ARGB8888, width, height)?;
    canvas.clear();

    let mut fps = FPSManager::new();
    fps.set_framerate(25)?;

    let mut events = ctx.event_pump()?;
    'mainloop: loop {
        for event in events.poll_iter() {
            match event {
                Event::Quit { .. }
                | Event::KeyDown {
                    keycode: Some(Keycode::Escape),
                    ..
                }
                | Event::KeyDown {
                    keycode: Some(Keycode::Q), ..
                } => break 'mainloop,
                _event => {}
            }
        }

        let now = Instant::now();
        let pixels = renderer.render(&scene, width, height);
        log::debug!("frame rendered in {:.3} ms", now.elapsed().as_secs_f64() * 1000.0);

        texture.with_lock(None, |buf, pitch| {
            for (row, line) in pixels.chunks_exact(width as usize).zip(buf.chunks_mut(pitch)) {
                for (pixel, out) in row.iter().zip(line.chunks_exact_mut(4)) {
                    out.copy_from_slice(&pixel.to_ne_bytes());
                }
            }
        })?;

        canvas.clear();
        canvas.copy(&texture, None, None)?;
        canvas.present();

        scene.camera_mut().transform.rotate(Vec3::UP, PI / 90.0);
        fps.delay();
    }

    Ok(())
}
