//! Rotation quaternions.

use std::ops::Mul;

use crate::{vec3::Vec3, vec4::Vec4};

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Quaternion {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub w: f64,
}

impl Default for Quaternion {
    fn default() -> Self {
        Quaternion::IDENTITY
    }
}

impl Quaternion {
    pub const IDENTITY: Quaternion = Quaternion::new(0.0, 0.0, 0.0, 1.0);

    #[inline]
    pub const fn new(x: f64, y: f64, z: f64, w: f64) -> Self {
        Self { x, y, z, w }
    }

    /// Builds a rotation from `(axis.x, axis.y, axis.z, angle)`.
    ///
    /// The axis is normalized here, callers may pass any non-zero length. A zero
    /// axis gives the identity rotation.
    pub fn from_axis_angle(axis_angle: Vec4<f64>) -> Self {
        let axis = axis_angle.xyz().unit();
        if axis == Vec3::ZERO {
            return Quaternion::IDENTITY;
        }

        let half = axis_angle.w() * 0.5;
        let a = axis.scale(half.sin());

        Quaternion::new(a.x, a.y, a.z, half.cos())
    }

    #[inline]
    pub fn from_axis(axis: Vec3<f64>, angle: f64) -> Self {
        Quaternion::from_axis_angle(Vec4::axis_angle(axis, angle))
    }

    #[inline]
    pub fn xyz(&self) -> Vec3<f64> {
        Vec3::new(self.x, self.y, self.z)
    }

    #[inline]
    pub fn conjugate(&self) -> Quaternion {
        Quaternion::new(-self.x, -self.y, -self.z, self.w)
    }

    #[inline]
    pub fn len(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z + self.w * self.w).sqrt()
    }

    pub fn unit(&self) -> Quaternion {
        let len = self.len();
        if len == 0.0 || !len.is_finite() {
            return Quaternion::IDENTITY;
        }

        Quaternion::new(self.x / len, self.y / len, self.z / len, self.w / len)
    }

    #[inline]
    pub fn pitch(&self) -> f64 {
        let Quaternion { x, y, z, w } = *self;
        (2.0 * (w * x + y * z)).atan2(w * w - x * x - y * y + z * z)
    }

    #[inline]
    pub fn yaw(&self) -> f64 {
        let Quaternion { x, y, z, w } = *self;
        // Clamped so rounding noise near the poles can't push asin out of domain.
        (-2.0 * (x * z - w * y)).max(-1.0).min(1.0).asin()
    }

    #[inline]
    pub fn roll(&self) -> f64 {
        let Quaternion { x, y, z, w } = *self;
        (2.0 * (x * y + w * z)).atan2(w * w + x * x - y * y - z * z)
    }

    /// Euler angles in radians, `(pitch, yaw, roll)`.
    pub fn to_pitch_yaw_roll(&self) -> (f64, f64, f64) {
        (self.pitch(), self.yaw(), self.roll())
    }
}

/// Hamilton product: `a * b` applies `b` first, then `a`.
impl Mul for Quaternion {
    type Output = Quaternion;

    fn mul(self, o: Quaternion) -> Self::Output {
        Quaternion::new(
            self.w * o.x + self.x * o.w + self.y * o.z - self.z * o.y,
            self.w * o.y + self.y * o.w + self.z * o.x - self.x * o.z,
            self.w * o.z + self.z * o.w + self.x * o.y - self.y * o.x,
            self.w * o.w - self.x * o.x - self.y * o.y - self.z * o.z,
        )
    }
}

/// Rotates a vector, same as `q * v * q⁻¹` for a unit quaternion.
impl Mul<Vec3<f64>> for Quaternion {
    type Output = Vec3<f64>;

    fn mul(self, v: Vec3<f64>) -> Self::Output {
        let qv = self.xyz();
        let uv = qv.cross(&v);
        let uuv = qv.cross(&uv);

        v + uv.scale(2.0 * self.w) + uuv.scale(2.0)
    }
}

impl Mul<Quaternion> for Vec3<f64> {
    type Output = Vec3<f64>;

    #[inline]
    fn mul(self, q: Quaternion) -> Self::Output {
        q * self
    }
}
