use std::path::Path;

use crate::{camera::Camera, description::SceneDescription, geometry::Model, light::PointLight, Result};

/// Everything the renderer needs: models, lights and the camera.
///
/// Models and lights are append-only. Their order is just iteration order,
/// the renderer picks the nearest hit regardless.
#[derive(Debug, Default)]
pub struct Scene {
    camera: Camera,
    models: Vec<Model>,
    lights: Vec<PointLight>,
}

impl Scene {
    pub fn new(camera: Camera) -> Self {
        Self {
            camera,
            models: Vec::new(),
            lights: Vec::new(),
        }
    }

    /// Reads a JSON scene description, see `description::SceneDescription`.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let description = SceneDescription::load(path)?;
        let base = path.parent().unwrap_or_else(|| Path::new(""));

        let scene = description.build(base)?;
        log::info!(
            "loaded scene {:?}: {} models, {} lights",
            path,
            scene.models.len(),
            scene.lights.len()
        );

        Ok(scene)
    }

    pub fn add_model(&mut self, model: Model) {
        self.models.push(model);
    }

    pub fn add_light(&mut self, light: PointLight) {
        self.lights.push(light);
    }

    #[inline]
    pub fn models(&self) -> &[Model] {
        &self.models
    }

    /// Mutable access for moving models between frames.
    #[inline]
    pub fn models_mut(&mut self) -> &mut [Model] {
        &mut self.models
    }

    #[inline]
    pub fn lights(&self) -> &[PointLight] {
        &self.lights
    }

    #[inline]
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    #[inline]
    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }
}
