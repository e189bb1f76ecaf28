use crate::{geometry::Geometry, transform::Transform, vec3::Vec3, Intersection, Ray};

/// Sphere centered at its transform's position.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Sphere {
    pub transform: Transform,
    radius: f64,
    radius2: f64,
}

impl Sphere {
    pub fn new(radius: f64) -> Self {
        Self {
            transform: Transform::default(),
            radius,
            radius2: radius * radius,
        }
    }

    pub fn with_center(radius: f64, center: Vec3<f64>) -> Self {
        let mut sphere = Sphere::new(radius);
        sphere.transform.position = center;
        sphere
    }

    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    #[inline]
    pub fn center(&self) -> Vec3<f64> {
        self.transform.position
    }
}

impl Default for Sphere {
    fn default() -> Self {
        Sphere::new(2.0)
    }
}

impl Geometry for Sphere {
    /// Geometric solution.
    ///
    /// A ray whose closest approach to the center lies behind its origin
    /// (`tca < 0`) is treated as a miss, even when the origin is inside the
    /// sphere and the ray would leave through the far side.
    fn intersection(&self, ray: &Ray<f64>) -> Option<Intersection> {
        let l = self.center() - ray.origin();

        let tca = l.dot(ray.direction());
        if tca < 0.0 {
            return None;
        }

        let d2 = l.dot(&l) - tca * tca;
        if d2 > self.radius2 {
            return None;
        }

        let thc = (self.radius2 - d2).sqrt();
        let mut t0 = tca - thc;
        let mut t1 = tca + thc;

        if t0 > t1 {
            std::mem::swap(&mut t0, &mut t1);
        }

        if t0 < 0.0 {
            t0 = t1;
            if t0 < 0.0 {
                return None;
            }
        }

        let position = ray.origin() + ray.direction().unit().scale(t0);
        let normal = (position - self.center()).unit();

        Some(Intersection::new(t0, position, normal))
    }

    fn transform(&self) -> &Transform {
        &self.transform
    }

    fn transform_mut(&mut self) -> &mut Transform {
        &mut self.transform
    }
}
