//! Single triangles and the ray/triangle test shared with meshes.

use crate::{geometry::Geometry, scalar::EPSILON, transform::Transform, vec3::Vec3, Intersection, Ray};

/// Raw result of the ray/triangle test.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TriangleHit {
    /// Ray parameter. May be negative: hits behind the origin are reported.
    pub t: f64,
    /// Barycentric weight of `v1`.
    pub u: f64,
    /// Barycentric weight of `v2`.
    pub v: f64,
}

/// Möller–Trumbore, double-sided.
///
/// Rejects rays parallel to the triangle (`|det| < EPSILON`) and points
/// outside it, nothing else.
pub fn intersect(v0: Vec3<f64>, v1: Vec3<f64>, v2: Vec3<f64>, ray: &Ray<f64>) -> Option<TriangleHit> {
    let v0v1 = v1 - v0;
    let v0v2 = v2 - v0;
    let pvec = ray.direction().cross(&v0v2);
    let det = v0v1.dot(&pvec);

    if det.abs() < EPSILON {
        return None;
    }

    let inv_det = 1.0 / det;
    let tvec = ray.origin() - v0;
    let u = tvec.dot(&pvec) * inv_det;
    if u < 0.0 || u > 1.0 {
        return None;
    }

    let qvec = tvec.cross(&v0v1);
    let v = ray.direction().dot(&qvec) * inv_det;
    if v < 0.0 || u + v > 1.0 {
        return None;
    }

    let t = v0v2.dot(&qvec) * inv_det;

    Some(TriangleHit { t, u, v })
}

/// Flat normal of a triangle, following the `v0 -> v1 -> v2` winding.
#[inline]
pub fn face_normal(v0: Vec3<f64>, v1: Vec3<f64>, v2: Vec3<f64>) -> Vec3<f64> {
    (v1 - v0).cross(&(v2 - v0)).unit()
}

#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Triangle {
    pub transform: Transform,
    /// Object space corners.
    vertices: [Vec3<f64>; 3],
}

impl Triangle {
    pub fn new(v0: Vec3<f64>, v1: Vec3<f64>, v2: Vec3<f64>) -> Self {
        Self {
            transform: Transform::default(),
            vertices: [v0, v1, v2],
        }
    }

    #[inline]
    pub fn vertices(&self) -> &[Vec3<f64>; 3] {
        &self.vertices
    }
}

impl Geometry for Triangle {
    fn intersection(&self, ray: &Ray<f64>) -> Option<Intersection> {
        let [v0, v1, v2] = self.vertices;
        let v0 = self.transform.apply(v0);
        let v1 = self.transform.apply(v1);
        let v2 = self.transform.apply(v2);

        intersect(v0, v1, v2, ray).map(|hit| Intersection::new(hit.t, ray.offset(hit.t), face_normal(v0, v1, v2)))
    }

    fn transform(&self) -> &Transform {
        &self.transform
    }

    fn transform_mut(&mut self) -> &mut Transform {
        &mut self.transform
    }
}
