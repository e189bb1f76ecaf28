use crate::vec3::Vec3;

/// Half-line starting at `origin`.
///
/// The direction is kept exactly as given: it is *not* normalized here, so code
/// that needs a unit direction has to call `unit()` itself.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Ray<T> {
    origin: Vec3<T>,
    direction: Vec3<T>,
}

impl Ray<f64> {
    pub fn new(origin: Vec3<f64>, direction: Vec3<f64>) -> Self {
        Self { origin, direction }
    }

    #[inline]
    pub fn origin(&self) -> Vec3<f64> {
        self.origin
    }

    #[inline]
    pub fn direction(&self) -> &Vec3<f64> {
        &self.direction
    }

    /// Point at parameter `t`, measured in units of the direction's length.
    #[inline]
    pub fn offset(&self, t: f64) -> Vec3<f64> {
        self.origin + self.direction.scale(t)
    }
}
