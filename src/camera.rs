use crate::{ray::Ray, transform::Transform, vec3::Vec3};

/// Pinhole camera sitting at the world origin.
///
/// Only the rotation of the transform steers the view, the position is not
/// applied to primary rays.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Camera {
    pub transform: Transform,
    /// Width of the film plane, together with the focal length sets the field
    /// of view.
    pub film_width: f64,
    /// Distance from the eye to the film plane along local +z.
    pub focal_length: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            transform: Transform::default(),
            film_width: 0.035,
            focal_length: 0.05,
        }
    }
}

impl Camera {
    /// Primary ray through pixel `(x, y)` of a `width` x `height` image.
    ///
    /// The film is divided into `reference_width` pixels horizontally. Passing
    /// the image width keeps the field of view fixed across resolutions.
    pub fn primary_ray(&self, x: u32, y: u32, width: u32, height: u32, reference_width: u32) -> Ray<f64> {
        let pixel_step = self.film_width / f64::from(reference_width);

        let px = (f64::from(x) - f64::from(width) / 2.0) * pixel_step;
        let py = (f64::from(y) - f64::from(height) / 2.0) * pixel_step;
        let pixel = Vec3::new(px, py, self.focal_length);

        Ray::new(Vec3::ZERO, pixel.unit() * self.transform.rotation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scalar::{EPSILON, HALF_PI};
    use approx::assert_abs_diff_eq;

    #[test]
    fn center_pixel_looks_forward() {
        let camera = Camera::default();
        let ray = camera.primary_ray(320, 240, 640, 480, 640);

        assert_eq!(Vec3::ZERO, ray.origin());
        assert_eq!(Vec3::new(0.0, 0.0, 1.0), *ray.direction());
    }

    #[test]
    fn edge_pixel_spans_half_the_film() {
        let camera = Camera::default();
        let ray = camera.primary_ray(0, 240, 640, 480, 640);

        let d = ray.direction();
        assert_abs_diff_eq!(-0.0175 / 0.05, d.x / d.z, epsilon = 1e-9);
    }

    #[test]
    fn reference_width_scales_the_step() {
        let camera = Camera::default();
        let narrow = camera.primary_ray(0, 60, 160, 120, 160);
        let fixed = camera.primary_ray(0, 60, 160, 120, 640);

        assert_abs_diff_eq!(-0.35, narrow.direction().x / narrow.direction().z, epsilon = 1e-9);
        assert_abs_diff_eq!(-0.35 / 4.0, fixed.direction().x / fixed.direction().z, epsilon = 1e-9);
    }

    #[test]
    fn rotation_steers_the_ray() {
        let mut camera = Camera::default();
        camera.transform.rotate(Vec3::UP, HALF_PI);
        camera.transform.position = Vec3::new(100.0, 0.0, 0.0);

        let ray = camera.primary_ray(320, 240, 640, 480, 640);
        assert_eq!(Vec3::ZERO, ray.origin());
        assert_abs_diff_eq!(1.0, ray.direction().x, epsilon = EPSILON);
        assert_abs_diff_eq!(0.0, ray.direction().z, epsilon = EPSILON);
    }
}
