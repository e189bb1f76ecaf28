use crate::vec3::Vec3;

/// Four component vector.
///
/// Mostly used as an axis-angle carrier: `(axis.x, axis.y, axis.z, angle)`.
/// Deserializes from a plain `[x, y, z, w]` array.
#[derive(Copy, Clone, Debug, Deserialize, PartialEq)]
pub struct Vec4<T>([T; 4]);

impl<T> Vec4<T> {
    #[inline]
    pub fn new(x: T, y: T, z: T, w: T) -> Self {
        Vec4([x, y, z, w])
    }

    #[inline]
    pub fn w(&self) -> &T {
        &self.0[3]
    }
}

impl<T: Copy> Vec4<T> {
    #[inline]
    pub fn xyz(&self) -> Vec3<T> {
        Vec3::new(self.0[0], self.0[1], self.0[2])
    }
}

impl Vec4<f64> {
    /// Packs an axis and an angle (radians) into one vector.
    #[inline]
    pub fn axis_angle(axis: Vec3<f64>, angle: f64) -> Self {
        Vec4::new(axis.x, axis.y, axis.z, angle)
    }
}
