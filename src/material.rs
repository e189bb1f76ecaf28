use serde::{Deserialize, Deserializer};

use crate::vec3::Vec3;

fn deserialize_color<'de, D>(de: D) -> Result<Vec3<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let (r, g, b) = Deserialize::deserialize(de)?;
    let color = Vec3::new(r, g, b);

    Ok(color)
}

fn white() -> Vec3<f64> {
    Vec3::new(1.0, 1.0, 1.0)
}

#[derive(Copy, Clone, Debug, Deserialize, PartialEq)]
pub struct Material {
    /// Linear RGB, each channel expected in `[0, 1]`.
    #[serde(rename = "color", deserialize_with = "deserialize_color", default = "white")]
    pub surface_color: Vec3<f64>,
}

impl Material {
    pub fn new(surface_color: Vec3<f64>) -> Self {
        Self { surface_color }
    }
}

impl Default for Material {
    fn default() -> Self {
        Material::new(white())
    }
}
