use crate::{transform::Transform, vec3::Vec3};

/// Omnidirectional light. Only its transform's position matters.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct PointLight {
    pub transform: Transform,
    pub intensity: f64,
}

impl PointLight {
    pub fn new(position: Vec3<f64>, intensity: f64) -> Self {
        Self {
            transform: Transform::at(position),
            intensity,
        }
    }

    #[inline]
    pub fn position(&self) -> Vec3<f64> {
        self.transform.position
    }
}
