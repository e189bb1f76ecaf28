//! A small CPU ray tracer.
//!
//! Build a [`Scene`] out of spheres, planes, triangles and meshes, add point
//! lights, and [`render`] it into a buffer of packed `0xAARRGGBB` pixels.
//!
//! ```no_run
//! use solari::{geometry::Sphere, Material, Model, PointLight, Scene, Vec3};
//!
//! let mut scene = Scene::default();
//! scene.add_model(Model::new(
//!     Sphere::with_center(1.0, Vec3::new(0.0, 0.0, 5.0)),
//!     Material::new(Vec3::new(1.0, 0.2, 0.2)),
//! ));
//! scene.add_light(PointLight::new(Vec3::ZERO, 1.0));
//!
//! let pixels = solari::render(&scene, 640, 480);
//! solari::frame::save("out.png", &pixels, 640, 480).unwrap();
//! ```

#[macro_use]
extern crate serde_derive;

pub mod camera;
pub mod description;
mod error;
pub mod frame;
pub mod geometry;
mod intersection;
pub mod light;
pub mod material;
pub mod obj;
pub mod quaternion;
pub mod ray;
pub mod render;
pub mod scalar;
pub mod scene;
pub mod transform;
pub mod vec3;
pub mod vec4;

pub use crate::camera::Camera;
pub use crate::error::{Error, Result};
pub use crate::geometry::{Geometry, Model};
pub use crate::intersection::Intersection;
pub use crate::light::PointLight;
pub use crate::material::Material;
pub use crate::quaternion::Quaternion;
pub use crate::ray::Ray;
pub use crate::render::{render, RenderConfig, Renderer, ShadowMode};
pub use crate::scene::Scene;
pub use crate::transform::Transform;
pub use crate::vec3::Vec3;
pub use crate::vec4::Vec4;
