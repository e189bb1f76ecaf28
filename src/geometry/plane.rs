use crate::{geometry::Geometry, scalar::EPSILON, transform::Transform, vec3::Vec3, Intersection, Ray};

///
///
/// Infinite plane through its transform's position.
///
/// The normal is always world up, `(0, 1, 0)`: rotating the transform moves
/// nothing but the anchor point. Only rays travelling along the normal
/// (`n · d > EPSILON`) can hit it, so it is visible from below and invisible
/// from above.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Plane {
    pub transform: Transform,
}

impl Plane {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn through(point: Vec3<f64>) -> Self {
        Self {
            transform: Transform::at(point),
        }
    }
}

impl Geometry for Plane {
    fn intersection(&self, ray: &Ray<f64>) -> Option<Intersection> {
        let normal = Vec3::UP;
        let denominator = normal.dot(ray.direction());

        if denominator > EPSILON {
            let p0r0 = self.transform.position - ray.origin();
            let t = p0r0.dot(&normal) / denominator;

            if t >= 0.0 {
                return Some(Intersection::new(t, ray.offset(t), normal));
            }
        }

        None
    }

    fn transform(&self) -> &Transform {
        &self.transform
    }

    fn transform_mut(&mut self) -> &mut Transform {
        &mut self.transform
    }
}
