use crate::{material::Material, ray::Ray, transform::Transform, Intersection};

mod mesh;
mod plane;
mod sphere;
pub mod triangle;

pub use self::mesh::TriangleMesh;
pub use self::plane::Plane;
pub use self::sphere::Sphere;
pub use self::triangle::Triangle;

/// A shape a ray can hit.
///
/// Implementations work in world space, placing themselves with their own
/// transform at intersection time, so moving a shape between frames is just a
/// matter of editing `transform_mut()`.
pub trait Geometry {
    fn intersection(&self, ray: &Ray<f64>) -> Option<Intersection>;

    /// Whether the shape covers any point of `ray` with `0 <= t < max_distance`.
    fn occludes(&self, ray: &Ray<f64>, max_distance: f64) -> bool {
        self.intersection(ray)
            .map_or(false, |hit| hit.distance >= 0.0 && hit.distance < max_distance)
    }

    fn transform(&self) -> &Transform;
    fn transform_mut(&mut self) -> &mut Transform;
}

/// Geometry paired with the material it is shaded with.
pub struct Model {
    pub geometry: Box<dyn Geometry + Send + Sync>,
    pub material: Material,
}

impl Model {
    pub fn new<G>(geometry: G, material: Material) -> Self
    where
        G: Geometry + Send + Sync + 'static,
    {
        Self {
            geometry: Box::new(geometry),
            material,
        }
    }

    #[inline]
    pub fn intersection(&self, ray: &Ray<f64>) -> Option<Intersection> {
        self.geometry.intersection(ray)
    }

    #[inline]
    pub fn occludes(&self, ray: &Ray<f64>, max_distance: f64) -> bool {
        self.geometry.occludes(ray, max_distance)
    }
}

impl std::fmt::Debug for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Model")
            .field("transform", self.geometry.transform())
            .field("material", &self.material)
            .finish()
    }
}
