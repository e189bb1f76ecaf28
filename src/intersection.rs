use crate::vec3::Vec3;

/// Where a ray met a surface.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Intersection {
    /// Ray parameter of the hit. Not guaranteed to be non-negative for every
    /// primitive, see `geometry::triangle::intersect`.
    pub distance: f64,
    pub position: Vec3<f64>,
    pub normal: Vec3<f64>,
}

impl Intersection {
    pub fn new(distance: f64, position: Vec3<f64>, normal: Vec3<f64>) -> Self {
        Self {
            distance,
            position,
            normal,
        }
    }
}
