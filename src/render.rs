//! Turns a scene into a frame of packed pixels.
//!
//! Every pixel gets one primary ray. The nearest hit is shaded with direct
//! diffuse lighting from the scene's point lights, everything else is black.
//! Scanlines are independent and rendered in parallel.

use std::time::Instant;

use rayon::prelude::*;

use crate::{
    geometry::Model,
    light::PointLight,
    scalar::EPSILON,
    scene::Scene,
    vec3::Vec3,
    Intersection, Ray,
};

/// Opaque black, the color of pixels that hit nothing.
pub const BACKGROUND: u32 = 0xFF00_0000;

/// How lights are tested for visibility.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ShadowMode {
    /// Shadow rays are tested against the shaded model only, and the shading
    /// normal is the one the light ray sees first. Other models never cast
    /// shadows.
    SelfOnly,
    /// Shadow rays are tested against the whole scene; any hit between the
    /// light and the shaded point blocks the light.
    Scene,
}

impl Default for ShadowMode {
    fn default() -> Self {
        ShadowMode::SelfOnly
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct RenderConfig {
    /// Number of pixels the film width is divided into. `None` uses the
    /// width of the frame being rendered, which keeps the field of view the
    /// same at any resolution.
    pub reference_width: Option<u32>,
    pub shadows: ShadowMode,
}

#[derive(Copy, Clone, Debug, Default)]
pub struct Renderer {
    config: RenderConfig,
}

impl Renderer {
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    /// Renders a `width` x `height` frame.
    ///
    /// The result is row-major, top row first, one `0xAARRGGBB` value per
    /// pixel with alpha always `0xFF`. The scene is only read, so the output
    /// is identical for identical inputs no matter how rows get scheduled.
    pub fn render(&self, scene: &Scene, width: u32, height: u32) -> Vec<u32> {
        let mut pixels = vec![BACKGROUND; width as usize * height as usize];
        if pixels.is_empty() {
            return pixels;
        }

        let reference_width = self.config.reference_width.filter(|&w| w > 0).unwrap_or(width);
        let camera = scene.camera();

        let now = Instant::now();

        pixels.par_chunks_mut(width as usize).enumerate().for_each(|(y, row)| {
            for (x, pixel) in row.iter_mut().enumerate() {
                let ray = camera.primary_ray(x as u32, y as u32, width, height, reference_width);
                *pixel = self.trace(scene, &ray);
            }

            log::trace!("rendered row {}", y);
        });

        log::debug!(
            "rendered {}x{} frame in {:.3} ms",
            width,
            height,
            now.elapsed().as_secs_f64() * 1000.0
        );

        pixels
    }

    /// Color of a single primary ray.
    pub fn trace(&self, scene: &Scene, ray: &Ray<f64>) -> u32 {
        match closest_intersection(scene.models(), ray) {
            Some((model, intersection)) => {
                let intensity = self.lighting(scene, model, &intersection);
                pack_argb(model.material.surface_color.scale(intensity))
            }
            None => BACKGROUND,
        }
    }

    /// Total light reaching `intersection` on `model`, clamped to `[0, 1]`.
    fn lighting(&self, scene: &Scene, model: &Model, intersection: &Intersection) -> f64 {
        let intensity: f64 = scene
            .lights()
            .iter()
            .map(|light| match self.config.shadows {
                ShadowMode::SelfOnly => self_lit(model, intersection, light),
                ShadowMode::Scene => scene_lit(scene.models(), intersection, light),
            })
            .sum();

        intensity.max(0.0).min(1.0)
    }
}

/// Renders with the default configuration.
pub fn render(scene: &Scene, width: u32, height: u32) -> Vec<u32> {
    Renderer::default().render(scene, width, height)
}

/// Nearest model hit by `ray`; ties keep the model that comes first.
pub fn closest_intersection<'a>(models: &'a [Model], ray: &Ray<f64>) -> Option<(&'a Model, Intersection)> {
    let mut closest: Option<(&Model, Intersection)> = None;

    for model in models {
        if let Some(intersection) = model.intersection(ray) {
            if closest.map_or(true, |(_, c)| intersection.distance < c.distance) {
                closest = Some((model, intersection));
            }
        }
    }

    closest
}

fn self_lit(model: &Model, intersection: &Intersection, light: &PointLight) -> f64 {
    let direction = (light.position() - intersection.position).unit();
    let ray = Ray::new(light.position(), -direction);

    match model.intersection(&ray) {
        Some(lit) => lit.normal.unit().dot(&direction).max(0.0) * light.intensity,
        None => 0.0,
    }
}

fn scene_lit(models: &[Model], intersection: &Intersection, light: &PointLight) -> f64 {
    let to_light = light.position() - intersection.position;
    let distance = to_light.len();
    let direction = to_light.unit();
    let ray = Ray::new(light.position(), -direction);

    let blocked = models.iter().any(|model| model.occludes(&ray, distance - EPSILON));

    if blocked {
        0.0
    } else {
        intersection.normal.unit().dot(&direction).max(0.0) * light.intensity
    }
}

/// Packs a linear color into `0xFFRRGGBB`.
///
/// Channels are clamped to `[0, 1]` first so an over-bright material can't
/// carry into its neighbour, then scaled to `[0, 255]` and truncated.
pub fn pack_argb(color: Vec3<f64>) -> u32 {
    let c = color.clamp(0.0, 1.0);

    let r = (c.x * 255.0) as u32;
    let g = (c.y * 255.0) as u32;
    let b = (c.z * 255.0) as u32;

    BACKGROUND | r << 16 | g << 8 | b
}
