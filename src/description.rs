//! JSON scene files.
//!
//! ```json
//! {
//!     "camera": { "rotation": [0, 1, 0, 0.3], "focal_length": 0.018 },
//!     "lights": [ { "position": [0, 0, 0], "intensity": 1.0 } ],
//!     "models": [
//!         {
//!             "geometry": { "type": "sphere", "radius": 1.0 },
//!             "transform": { "position": [0, 0, 5] },
//!             "material": { "color": [1.0, 0.2, 0.2] }
//!         },
//!         { "geometry": { "type": "mesh", "path": "teapot.obj" } }
//!     ]
//! }
//! ```
//!
//! Rotations are axis-angle quadruples `[x, y, z, radians]`. Every field other
//! than a model's `geometry` may be left out. Relative mesh paths are resolved
//! against the directory of the scene file.

use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use crate::{
    camera::Camera,
    geometry::{Geometry, Model, Plane, Sphere, Triangle, TriangleMesh},
    light::PointLight,
    material::Material,
    obj,
    quaternion::Quaternion,
    scene::Scene,
    transform::Transform,
    vec3::Vec3,
    vec4::Vec4,
    Error, Result,
};

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct SceneDescription {
    pub camera: CameraDescription,
    pub lights: Vec<LightDescription>,
    pub models: Vec<ModelDescription>,
}

#[derive(Copy, Clone, Debug, Deserialize)]
#[serde(default)]
pub struct CameraDescription {
    pub position: [f64; 3],
    pub rotation: Option<Vec4<f64>>,
    pub film_width: f64,
    pub focal_length: f64,
}

impl Default for CameraDescription {
    fn default() -> Self {
        let camera = Camera::default();
        Self {
            position: [0.0; 3],
            rotation: None,
            film_width: camera.film_width,
            focal_length: camera.focal_length,
        }
    }
}

#[derive(Copy, Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct TransformDescription {
    pub position: [f64; 3],
    pub rotation: Option<Vec4<f64>>,
}

impl From<TransformDescription> for Transform {
    fn from(d: TransformDescription) -> Self {
        let rotation = d.rotation.map(Quaternion::from_axis_angle).unwrap_or_default();
        Transform::new(Vec3::from(d.position), rotation)
    }
}

#[derive(Copy, Clone, Debug, Deserialize)]
pub struct LightDescription {
    #[serde(default)]
    pub position: [f64; 3],
    #[serde(default = "unit_intensity")]
    pub intensity: f64,
}

fn unit_intensity() -> f64 {
    1.0
}

#[derive(Clone, Debug, Deserialize)]
pub struct ModelDescription {
    pub geometry: GeometryDescription,
    #[serde(default)]
    pub transform: TransformDescription,
    #[serde(default)]
    pub material: Material,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GeometryDescription {
    Sphere {
        #[serde(default = "default_radius")]
        radius: f64,
    },
    Plane,
    Triangle {
        vertices: [[f64; 3]; 3],
    },
    Mesh {
        path: PathBuf,
    },
    PolySphere {
        #[serde(default = "default_radius")]
        radius: f64,
        #[serde(default = "default_divisions")]
        divisions: usize,
    },
}

fn default_radius() -> f64 {
    2.0
}

fn default_divisions() -> usize {
    16
}

impl SceneDescription {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|err| Error::io(path, err))?;

        Ok(serde_json::from_reader(BufReader::new(file))?)
    }

    pub fn parse(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Assembles the scene, loading mesh files relative to `base`.
    pub fn build(&self, base: &Path) -> Result<Scene> {
        let mut camera = Camera {
            film_width: self.camera.film_width,
            focal_length: self.camera.focal_length,
            ..Camera::default()
        };
        camera.transform = TransformDescription {
            position: self.camera.position,
            rotation: self.camera.rotation,
        }
        .into();

        let mut scene = Scene::new(camera);

        for light in &self.lights {
            scene.add_light(PointLight::new(Vec3::from(light.position), light.intensity));
        }

        for model in &self.models {
            let geometry = model.geometry.build(base, model.transform.into())?;
            scene.add_model(Model {
                geometry,
                material: model.material,
            });
        }

        Ok(scene)
    }
}

impl GeometryDescription {
    fn build(&self, base: &Path, transform: Transform) -> Result<Box<dyn Geometry + Send + Sync>> {
        let mut geometry: Box<dyn Geometry + Send + Sync> = match self {
            GeometryDescription::Sphere { radius } => Box::new(Sphere::new(*radius)),
            GeometryDescription::Plane => Box::new(Plane::new()),
            GeometryDescription::Triangle { vertices: [a, b, c] } => {
                Box::new(Triangle::new(Vec3::from(*a), Vec3::from(*b), Vec3::from(*c)))
            }
            GeometryDescription::Mesh { path } => {
                let model = obj::load(base.join(path))?;
                Box::new(TriangleMesh::from_obj(&model)?)
            }
            GeometryDescription::PolySphere { radius, divisions } => {
                Box::new(TriangleMesh::poly_sphere(*radius, *divisions))
            }
        };

        *geometry.transform_mut() = transform;

        Ok(geometry)
    }
}
