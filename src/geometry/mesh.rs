//! Model that contains one or more triangles.

use crate::{
    geometry::{
        triangle::{face_normal, intersect},
        Geometry,
    },
    obj::ObjModel,
    scalar::{HALF_PI, PI},
    transform::Transform,
    vec3::Vec3,
    Error, Intersection, Ray, Result,
};

/// Triangle soup sharing one vertex array.
///
/// Polygons are fan-triangulated on construction. Every ray is tested against
/// every triangle.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TriangleMesh {
    pub transform: Transform,
    vertices: Vec<Vec3<f64>>,
    /// Three entries per triangle, indexing `vertices`.
    indices: Vec<usize>,
}

impl TriangleMesh {
    /// Builds a mesh from polygons given as 0-based vertex index lists.
    ///
    /// A face `[a, b, c, d, ...]` becomes the fan `(a, b, c), (a, c, d), ...`.
    /// Faces with fewer than three corners produce no triangles.
    pub fn new<F>(vertices: Vec<Vec3<f64>>, faces: &[F]) -> Result<Self>
    where
        F: AsRef<[usize]>,
    {
        let capacity = faces.iter().map(|f| f.as_ref().len().saturating_sub(2) * 3).sum();
        let mut indices = Vec::with_capacity(capacity);

        for (face_id, face) in faces.iter().enumerate() {
            let face = face.as_ref();

            if let Some(&index) = face.iter().find(|&&index| index >= vertices.len()) {
                return Err(Error::FaceIndex {
                    face: face_id,
                    index,
                    vertices: vertices.len(),
                });
            }

            fan(face, &mut indices);
        }

        Ok(Self {
            transform: Transform::default(),
            vertices,
            indices,
        })
    }

    /// Builds a mesh from a parsed model file, whose face indices are 1-based.
    pub fn from_obj(model: &ObjModel) -> Result<Self> {
        let mut faces = Vec::with_capacity(model.faces.len());

        for (face_id, face) in model.faces.iter().enumerate() {
            let face = face
                .iter()
                .map(|&index| {
                    index.checked_sub(1).ok_or_else(|| Error::FaceIndex {
                        face: face_id,
                        index,
                        vertices: model.vertices.len(),
                    })
                })
                .collect::<Result<Vec<usize>>>()?;
            faces.push(face);
        }

        TriangleMesh::new(model.vertices.clone(), &faces)
    }

    /// UV sphere of `divisions` rings by `divisions` segments, wound so the
    /// face normals point outwards.
    pub fn poly_sphere(radius: f64, divisions: usize) -> Self {
        let divisions = divisions.max(3);
        let rings = divisions - 1;

        let du = PI / divisions as f64;
        let dv = 2.0 * PI / divisions as f64;

        let mut vertices = Vec::with_capacity(rings * divisions + 2);
        vertices.push(Vec3::new(0.0, -radius, 0.0));
        for i in 1..=rings {
            let u = -HALF_PI + du * i as f64;
            for j in 0..divisions {
                let v = -PI + dv * j as f64;
                vertices.push(Vec3::new(radius * u.cos() * v.cos(), radius * u.sin(), radius * u.cos() * v.sin()));
            }
        }
        vertices.push(Vec3::new(0.0, radius, 0.0));

        let bottom = 0;
        let top = vertices.len() - 1;
        let ring = |i: usize, j: usize| 1 + i * divisions + j % divisions;

        let mut faces: Vec<Vec<usize>> = Vec::with_capacity(divisions * divisions);
        for j in 0..divisions {
            faces.push(vec![bottom, ring(0, j), ring(0, j + 1)]);
        }
        for i in 1..rings {
            for j in 0..divisions {
                faces.push(vec![ring(i - 1, j), ring(i, j), ring(i, j + 1), ring(i - 1, j + 1)]);
            }
        }
        for j in 0..divisions {
            faces.push(vec![ring(rings - 1, j), top, ring(rings - 1, j + 1)]);
        }

        let mut indices = Vec::with_capacity(faces.len() * 6);
        for face in &faces {
            fan(face, &mut indices);
        }

        Self {
            transform: Transform::default(),
            vertices,
            indices,
        }
    }

    #[inline]
    pub fn vertices(&self) -> &[Vec3<f64>] {
        &self.vertices
    }

    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// World space corners of triangle `id`.
    fn corners(&self, id: usize) -> [Vec3<f64>; 3] {
        let tri = &self.indices[id * 3..id * 3 + 3];
        [
            self.transform.apply(self.vertices[tri[0]]),
            self.transform.apply(self.vertices[tri[1]]),
            self.transform.apply(self.vertices[tri[2]]),
        ]
    }
}

fn fan(face: &[usize], indices: &mut Vec<usize>) {
    for j in 1..face.len().saturating_sub(1) {
        indices.extend_from_slice(&[face[0], face[j], face[j + 1]]);
    }
}

impl Geometry for TriangleMesh {
    fn intersection(&self, ray: &Ray<f64>) -> Option<Intersection> {
        let mut nearest: Option<(f64, [Vec3<f64>; 3])> = None;

        for id in 0..self.triangle_count() {
            let [v0, v1, v2] = self.corners(id);

            if let Some(hit) = intersect(v0, v1, v2, ray) {
                // Strict comparison: on a tie the earlier triangle stays.
                if nearest.map_or(true, |(t, _)| hit.t < t) {
                    nearest = Some((hit.t, [v0, v1, v2]));
                }
            }
        }

        nearest.map(|(t, [v0, v1, v2])| Intersection::new(t, ray.offset(t), face_normal(v0, v1, v2)))
    }

    /// Checks every triangle on its own, so one behind the ray origin can't
    /// hide another in front of it.
    fn occludes(&self, ray: &Ray<f64>, max_distance: f64) -> bool {
        (0..self.triangle_count()).any(|id| {
            let [v0, v1, v2] = self.corners(id);
            intersect(v0, v1, v2, ray).map_or(false, |hit| hit.t >= 0.0 && hit.t < max_distance)
        })
    }

    fn transform(&self) -> &Transform {
        &self.transform
    }

    fn transform_mut(&mut self) -> &mut Transform {
        &mut self.transform
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scalar::EPSILON;
    use approx::assert_abs_diff_eq;

    fn quad() -> Vec<Vec3<f64>> {
        vec![
            Vec3::new(-1.0, -1.0, 0.0),
            Vec3::new(1.0, -1.0, 0.0),
            Vec3::new(1.0, 1.0, 0.0),
            Vec3::new(-1.0, 1.0, 0.0),
        ]
    }

    #[test]
    fn fan_triangulation() {
        let vertices = (0..5).map(|i| Vec3::new(i as f64, 0.0, 0.0)).collect();
        let mesh = TriangleMesh::new(vertices, &[vec![0, 1, 2, 3, 4]]).unwrap();

        assert_eq!(3, mesh.triangle_count());
        assert_eq!(vec![0, 1, 2, 0, 2, 3, 0, 3, 4], mesh.indices);
    }

    #[test]
    fn degenerate_faces_are_skipped() {
        let mesh = TriangleMesh::new(quad(), &[vec![0, 1], vec![]]).unwrap();
        assert_eq!(0, mesh.triangle_count());
    }

    #[test]
    fn out_of_range_index_is_rejected() {
        match TriangleMesh::new(quad(), &[vec![0, 1, 4]]) {
            Err(Error::FaceIndex { face: 0, index: 4, vertices: 4 }) => {}
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn obj_indices_are_one_based() {
        let model = ObjModel {
            vertices: quad(),
            faces: vec![vec![1, 2, 3], vec![1, 3, 4]],
        };

        let mesh = TriangleMesh::from_obj(&model).unwrap();
        assert_eq!(vec![0, 1, 2, 0, 2, 3], mesh.indices);

        let broken = ObjModel {
            vertices: quad(),
            faces: vec![vec![0, 1, 2]],
        };
        assert!(TriangleMesh::from_obj(&broken).is_err());
    }

    #[test]
    fn nearest_triangle_wins() {
        let vertices = vec![
            Vec3::new(-1.0, -1.0, 9.0),
            Vec3::new(1.0, -1.0, 9.0),
            Vec3::new(0.0, 1.0, 9.0),
            Vec3::new(-1.0, -1.0, 4.0),
            Vec3::new(1.0, -1.0, 4.0),
            Vec3::new(0.0, 1.0, 4.0),
        ];
        let mesh = TriangleMesh::new(vertices, &[vec![0, 1, 2], vec![3, 4, 5]]).unwrap();
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, 1.0));

        let hit = mesh.intersection(&ray).unwrap();
        assert_abs_diff_eq!(4.0, hit.distance, epsilon = EPSILON);
        assert_abs_diff_eq!(4.0, hit.position.z, epsilon = EPSILON);
    }

    fn screens() -> TriangleMesh {
        let vertices = vec![
            Vec3::new(-1.0, -1.0, -1.0),
            Vec3::new(1.0, -1.0, -1.0),
            Vec3::new(0.0, 1.0, -1.0),
            Vec3::new(-1.0, -1.0, 1.0),
            Vec3::new(1.0, -1.0, 1.0),
            Vec3::new(0.0, 1.0, 1.0),
        ];
        TriangleMesh::new(vertices, &[vec![0, 1, 2], vec![3, 4, 5]]).unwrap()
    }

    #[test]
    fn occlusion_skips_triangles_behind_the_origin() {
        let mesh = screens();
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, 1.0));

        // The nearest hit is the triangle behind the origin.
        assert_abs_diff_eq!(-1.0, mesh.intersection(&ray).unwrap().distance, epsilon = EPSILON);

        assert!(mesh.occludes(&ray, 9.0));
        assert!(!mesh.occludes(&ray, 0.5));
    }

    #[test]
    fn occlusion_needs_a_triangle_ahead() {
        let mesh = screens();
        let ray = Ray::new(Vec3::new(0.0, 0.0, 2.0), Vec3::new(0.0, 0.0, 1.0));

        assert!(!mesh.occludes(&ray, 100.0));
    }

    #[test]
    fn tie_keeps_first_triangle() {
        // Two coplanar triangles sharing the hit point, opposite windings.
        let vertices = vec![
            Vec3::new(-1.0, -1.0, 3.0),
            Vec3::new(1.0, -1.0, 3.0),
            Vec3::new(0.0, 1.0, 3.0),
        ];
        let mesh = TriangleMesh::new(vertices, &[vec![0, 1, 2], vec![1, 0, 2]]).unwrap();
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, 1.0));

        let hit = mesh.intersection(&ray).unwrap();
        assert_abs_diff_eq!(1.0, hit.normal.z, epsilon = EPSILON);
    }

    #[test]
    fn mesh_follows_transform() {
        let mut mesh = TriangleMesh::new(quad(), &[vec![0, 1, 2, 3]]).unwrap();
        mesh.transform.position = Vec3::new(0.0, 0.0, 6.0);
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, 1.0));

        let hit = mesh.intersection(&ray).unwrap();
        assert_abs_diff_eq!(6.0, hit.distance, epsilon = EPSILON);
    }

    #[test]
    fn poly_sphere_looks_like_a_sphere() {
        let mut sphere = TriangleMesh::poly_sphere(1.0, 24);
        sphere.transform.position = Vec3::new(0.0, 0.0, 5.0);

        assert_eq!(24 * 23 + 2, sphere.vertices().len());
        assert_eq!(2 * 24 + 2 * 24 * 22, sphere.triangle_count());

        // Slightly off axis so the ray doesn't go exactly through a vertex.
        let ray = Ray::new(Vec3::new(0.013, 0.021, 0.0), Vec3::new(0.0, 0.0, 1.0));
        let hit = sphere.intersection(&ray).unwrap();

        assert!(hit.distance > 4.0 - 0.05 && hit.distance < 4.0 + 0.05);
        // Facing back at the viewer.
        assert!(hit.normal.z < -0.9);
    }

    #[test]
    fn poly_sphere_normals_point_outwards() {
        let sphere = TriangleMesh::poly_sphere(2.0, 8);

        for id in 0..sphere.triangle_count() {
            let [v0, v1, v2] = sphere.corners(id);
            let centroid = (v0 + v1 + v2).scale(1.0 / 3.0);
            assert!(face_normal(v0, v1, v2).dot(&centroid) > 0.0, "triangle {} faces inwards", id);
        }
    }
}
