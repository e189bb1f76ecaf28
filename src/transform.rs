use crate::{quaternion::Quaternion, vec3::Vec3};

/// Placement of a scene object: where it is and how it is turned.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Transform {
    pub position: Vec3<f64>,
    pub rotation: Quaternion,
}

impl Transform {
    pub fn new(position: Vec3<f64>, rotation: Quaternion) -> Self {
        Self { position, rotation }
    }

    pub fn at(position: Vec3<f64>) -> Self {
        Self::new(position, Quaternion::IDENTITY)
    }

    /// The object's local up axis in world space.
    #[inline]
    pub fn up(&self) -> Vec3<f64> {
        Vec3::UP * self.rotation
    }

    /// Composes an extra rotation of `angle` radians about `axis` onto the
    /// current one. The increment is right-multiplied, so it acts in the
    /// object's local frame.
    pub fn rotate(&mut self, axis: Vec3<f64>, angle: f64) {
        self.rotation = self.rotation * Quaternion::from_axis(axis, angle);
    }

    /// Maps a point from object space into world space: rotate, then translate.
    #[inline]
    pub fn apply(&self, point: Vec3<f64>) -> Vec3<f64> {
        point * self.rotation + self.position
    }
}
