use crate::matrix::Matrix4;
use crate::ray::{HitRecord, Ray};
use crate::shapes::{BoundingBox, CullMode, Triangle};
use crate::vector::Vector3;

/// A static triangle mesh with a cached world transform.
///
/// `transformed_positions`/`transformed_normals`/the transformed AABB are
/// derived state: they reflect the transform as of the last
/// [`TriangleMesh::update_transforms`] call. Callers that mutate the
/// translation/rotation/scale must call `update_transforms` (and
/// `update_aabb`, which `update_transforms` already does) before the next
/// intersection test, exactly as the source's explicit cache-invalidation
/// discipline requires.
pub struct TriangleMesh {
    positions: Vec<Vector3>,
    /// One face normal per triangle, not per vertex.
    normals: Vec<Vector3>,
    indices: Vec<usize>,
    cull_mode: CullMode,
    material_index: u8,

    translation: Vector3,
    rotation_degrees: Vector3,
    scale: Vector3,

    local_aabb: BoundingBox,

    transformed_positions: Vec<Vector3>,
    transformed_normals: Vec<Vector3>,
    transformed_aabb: BoundingBox,
}

impl TriangleMesh {
    pub fn new(
        positions: Vec<Vector3>,
        normals: Vec<Vector3>,
        indices: Vec<usize>,
        cull_mode: CullMode,
        material_index: u8,
    ) -> TriangleMesh {
        assert_eq!(indices.len() % 3, 0, "mesh index count must be a multiple of 3");
        assert_eq!(normals.len(), indices.len() / 3, "one face normal is required per triangle");

        let local_aabb = BoundingBox::from_points(positions.iter().copied());
        let triangle_count = indices.len() / 3;

        let mut mesh = TriangleMesh {
            positions,
            normals,
            indices,
            cull_mode,
            material_index,
            translation: Vector3::ZERO,
            rotation_degrees: Vector3::ZERO,
            scale: Vector3::new(1.0, 1.0, 1.0),
            local_aabb,
            transformed_positions: Vec::with_capacity(triangle_count * 3),
            transformed_normals: Vec::with_capacity(triangle_count),
            transformed_aabb: local_aabb,
        };
        mesh.update_transforms();
        mesh
    }

    pub fn set_translation(&mut self, translation: Vector3) {
        self.translation = translation;
    }

    pub fn set_rotation_degrees(&mut self, pitch: f32, yaw: f32, roll: f32) {
        self.rotation_degrees = Vector3::new(pitch, yaw, roll);
    }

    pub fn set_scale(&mut self, scale: Vector3) {
        self.scale = scale;
    }

    fn rotation_matrix(&self) -> Matrix4 {
        Matrix4::rotation(self.rotation_degrees.x, self.rotation_degrees.y, self.rotation_degrees.z)
    }

    /// The full T*R*S transform: scale applied first, then rotation, then
    /// translation.
    fn transform_matrix(&self) -> Matrix4 {
        Matrix4::scale(self.scale) * self.rotation_matrix() * Matrix4::translation(self.translation)
    }

    /// Rebuilds `transformed_positions`/`transformed_normals` and the
    /// transformed AABB from the current translation/rotation/scale.
    pub fn update_transforms(&mut self) {
        let m = self.transform_matrix();
        let rotation = self.rotation_matrix();

        self.transformed_positions.clear();
        self.transformed_positions
            .extend(self.positions.iter().map(|p| m.transform_point(*p)));

        self.transformed_normals.clear();
        self.transformed_normals
            .extend(self.normals.iter().map(|n| rotation.transform_direction(*n).normalized()));

        self.update_aabb();
    }

    pub fn update_aabb(&mut self) {
        self.transformed_aabb = BoundingBox::from_points(self.transformed_positions.iter().copied());
    }

    fn triangle(&self, triangle_index: usize) -> Triangle {
        let base = triangle_index * 3;
        Triangle {
            v0: self.transformed_positions[self.indices[base]],
            v1: self.transformed_positions[self.indices[base + 1]],
            v2: self.transformed_positions[self.indices[base + 2]],
            normal: self.transformed_normals[triangle_index],
            cull_mode: self.cull_mode,
            material_index: self.material_index,
        }
    }

    fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn closest_hit(&self, ray: &Ray) -> Option<HitRecord> {
        if !self.transformed_aabb.hits(ray) {
            return None;
        }

        let mut closest: Option<HitRecord> = None;
        for i in 0..self.triangle_count() {
            if let Some(hit) = self.triangle(i).closest_hit(ray) {
                if closest.map_or(true, |best| hit.t < best.t) {
                    closest = Some(hit);
                }
            }
        }
        closest
    }

    pub fn any_hit(&self, ray: &Ray) -> bool {
        if !self.transformed_aabb.hits(ray) {
            return false;
        }
        (0..self.triangle_count()).any(|i| self.triangle(i).any_hit(ray))
    }
}
