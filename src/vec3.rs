use std::ops::{Add, Mul, Neg, Sub};

#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Vec3<T> {
    pub x: T,
    pub y: T,
    pub z: T,
}

impl<T> Vec3<T> {
    #[inline]
    pub const fn new(x: T, y: T, z: T) -> Self {
        Self { x, y, z }
    }
}

impl<T: Copy> From<[T; 3]> for Vec3<T> {
    #[inline]
    fn from(v: [T; 3]) -> Self {
        Vec3::new(v[0], v[1], v[2])
    }
}

impl<T: Copy + Mul<Output = T>> Vec3<T> {
    #[inline]
    pub fn scale(&self, factor: T) -> Vec3<T> {
        Vec3 {
            x: self.x * factor,
            y: self.y * factor,
            z: self.z * factor,
        }
    }
}

impl<T: Copy + Add<Output = T> + Mul<Output = T>> Vec3<T> {
    #[inline]
    pub fn dot(&self, other: &Vec3<T>) -> T {
        self.x * other.x + self.y * other.y + self.z * other.z
    }
}

impl<T: Copy + Sub<Output = T> + Mul<Output = T>> Vec3<T> {
    #[inline]
    pub fn cross(&self, other: &Vec3<T>) -> Vec3<T> {
        Vec3 {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }
}

impl Vec3<f64> {
    pub const ZERO: Vec3<f64> = Vec3::new(0.0, 0.0, 0.0);
    pub const UP: Vec3<f64> = Vec3::new(0.0, 1.0, 0.0);

    #[inline]
    pub fn len(&self) -> f64 {
        self.dot(self).sqrt()
    }

    /// Returns the unit vector pointing the same way.
    ///
    /// A zero-length (or non-finite) vector has no direction, so the result is
    /// `Vec3::ZERO` instead of a vector full of NaNs.
    #[inline]
    pub fn unit(&self) -> Vec3<f64> {
        let len = self.len();

        if len == 0.0 || !len.is_finite() {
            return Vec3::ZERO;
        }

        Vec3 {
            x: self.x / len,
            y: self.y / len,
            z: self.z / len,
        }
    }

    #[inline]
    pub fn inverse(&self) -> Vec3<f64> {
        Vec3 {
            x: -self.x,
            y: -self.y,
            z: -self.z,
        }
    }

    /// Clamps every component into `[lo, hi]`.
    #[inline]
    pub fn clamp(&self, lo: f64, hi: f64) -> Vec3<f64> {
        Vec3 {
            x: self.x.max(lo).min(hi),
            y: self.y.max(lo).min(hi),
            z: self.z.max(lo).min(hi),
        }
    }
}

impl<T: Add<Output = T>> Add for Vec3<T> {
    type Output = Vec3<T>;

    #[inline]
    fn add(self, other: Vec3<T>) -> Self::Output {
        Vec3 {
            x: self.x + other.x,
            y: self.y + other.y,
            z: self.z + other.z,
        }
    }
}

impl<T: Sub<Output = T>> Sub for Vec3<T> {
    type Output = Vec3<T>;

    #[inline]
    fn sub(self, other: Vec3<T>) -> Self::Output {
        Vec3 {
            x: self.x - other.x,
            y: self.y - other.y,
            z: self.z - other.z,
        }
    }
}

impl Mul<f64> for Vec3<f64> {
    type Output = Vec3<f64>;

    #[inline]
    fn mul(self, factor: f64) -> Self::Output {
        self.scale(factor)
    }
}

impl Neg for Vec3<f64> {
    type Output = Vec3<f64>;

    #[inline]
    fn neg(self) -> Self::Output {
        self.inverse()
    }
}
