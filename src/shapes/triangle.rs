use crate::mathutil;
use crate::ray::{HitRecord, Ray};
use crate::shapes::CullMode;
use crate::vector::Vector3;

const CULL_EPSILON: f32 = 1e-6;

#[derive(Debug, Clone, Copy)]
pub struct Triangle {
    pub v0: Vector3,
    pub v1: Vector3,
    pub v2: Vector3,
    pub normal: Vector3,
    pub cull_mode: CullMode,
    pub material_index: u8,
}

impl Triangle {
    pub fn new(v0: Vector3, v1: Vector3, v2: Vector3, cull_mode: CullMode, material_index: u8) -> Triangle {
        let normal = (v1 - v0).cross(v2 - v0).normalized();
        Triangle {
            v0,
            v1,
            v2,
            normal,
            cull_mode,
            material_index,
        }
    }

    /// `for_shadow` selects the any-hit cull rule, which is the closest-hit
    /// rule with Back/Front swapped: a shadow ray travels from the surface
    /// toward the light, so what counted as a front face for the primary ray
    /// now needs to count as a back face for occlusion purposes.
    fn passes_cull(&self, n_dot_d: f32, for_shadow: bool) -> bool {
        match (self.cull_mode, for_shadow) {
            (CullMode::BackFaceCulling, false) => n_dot_d <= 0.0,
            (CullMode::BackFaceCulling, true) => n_dot_d >= 0.0,
            (CullMode::FrontFaceCulling, false) => n_dot_d > 0.0,
            (CullMode::FrontFaceCulling, true) => n_dot_d < 0.0,
            (CullMode::NoCulling, _) => !mathutil::are_equal(n_dot_d, 0.0, CULL_EPSILON),
        }
    }

    fn hit(&self, ray: &Ray, for_shadow: bool) -> Option<HitRecord> {
        let n_dot_d = self.normal.dot(ray.direction);
        if !self.passes_cull(n_dot_d, for_shadow) {
            return None;
        }

        let t = (self.v0 - ray.origin).dot(self.normal) / n_dot_d;
        if t < ray.min || t > ray.max {
            return None;
        }

        let p = ray.at(t);
        let edges = [(self.v0, self.v1), (self.v1, self.v2), (self.v2, self.v0)];
        for (a, b) in edges {
            let edge = b - a;
            let to_point = p - a;
            if edge.cross(to_point).dot(self.normal) < 0.0 {
                return None;
            }
        }

        Some(HitRecord::new(p, self.normal, self.material_index, t))
    }

    pub fn closest_hit(&self, ray: &Ray) -> Option<HitRecord> {
        self.hit(ray, false)
    }

    pub fn any_hit(&self, ray: &Ray) -> bool {
        self.hit(ray, true).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::ApproxEq;

    fn unit_triangle_in_xy_plane(cull_mode: CullMode) -> Triangle {
        // This winding's normal faces -Z.
        Triangle::new(
            Vector3::new(-1.0, -1.0, 0.0),
            Vector3::new(0.0, 1.0, 0.0),
            Vector3::new(1.0, -1.0, 0.0),
            cull_mode,
            0,
        )
    }

    #[test]
    fn ray_through_the_middle_hits() {
        let tri = unit_triangle_in_xy_plane(CullMode::NoCulling);
        let r = Ray::primary(Vector3::new(0.0, 0.0, -3.0), Vector3::UNIT_Z);
        let hit = tri.closest_hit(&r).expect("expected a hit");
        assert_approx_eq!(hit.t, 3.0);
        assert_approx_eq!(hit.normal, tri.normal);
    }

    #[test]
    fn ray_outside_the_edges_misses() {
        let tri = unit_triangle_in_xy_plane(CullMode::NoCulling);
        let r = Ray::primary(Vector3::new(5.0, 5.0, -3.0), Vector3::UNIT_Z);
        assert!(tri.closest_hit(&r).is_none());
    }

    #[test]
    fn back_face_culling_rejects_hit_from_behind() {
        let tri = unit_triangle_in_xy_plane(CullMode::BackFaceCulling);
        let r = Ray::primary(Vector3::new(0.0, 0.0, 3.0), -Vector3::UNIT_Z);
        assert!(tri.closest_hit(&r).is_none());
        assert!(tri.any_hit(&r), "shadow ray should see the culled back face");
    }

    #[test]
    fn front_face_culling_rejects_hit_from_the_front() {
        let tri = unit_triangle_in_xy_plane(CullMode::FrontFaceCulling);
        let r = Ray::primary(Vector3::new(0.0, 0.0, -3.0), Vector3::UNIT_Z);
        assert!(tri.closest_hit(&r).is_none());
        assert!(tri.any_hit(&r));
    }
}
