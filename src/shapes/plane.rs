use crate::ray::{HitRecord, Ray};
use crate::vector::Vector3;

#[derive(Debug, Clone, Copy)]
pub struct Plane {
    pub origin: Vector3,
    pub normal: Vector3,
    pub material_index: u8,
}

impl Plane {
    pub fn new(origin: Vector3, normal: Vector3, material_index: u8) -> Plane {
        Plane {
            origin,
            normal,
            material_index,
        }
    }

    fn t_in_range(&self, ray: &Ray) -> Option<f32> {
        let denom = ray.direction.dot(self.normal);
        let t = (self.origin - ray.origin).dot(self.normal) / denom;
        if t >= ray.min && t <= ray.max {
            Some(t)
        } else {
            None
        }
    }

    pub fn closest_hit(&self, ray: &Ray) -> Option<HitRecord> {
        self.t_in_range(ray)
            .map(|t| HitRecord::new(ray.at(t), self.normal, self.material_index, t))
    }

    pub fn any_hit(&self, ray: &Ray) -> bool {
        self.t_in_range(ray).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::ApproxEq;

    #[test]
    fn ray_straight_down_hits_ground_plane() {
        let p = Plane::new(Vector3::ZERO, Vector3::UNIT_Y, 0);
        let r = Ray::primary(Vector3::new(0.0, 2.0, 0.0), -Vector3::UNIT_Y);
        let hit = p.closest_hit(&r).expect("expected a hit");
        assert_approx_eq!(hit.t, 2.0);
        assert_approx_eq!(hit.origin, Vector3::ZERO);
        assert_approx_eq!(hit.normal, Vector3::UNIT_Y);
    }

    #[test]
    fn ray_parallel_to_plane_misses() {
        let p = Plane::new(Vector3::ZERO, Vector3::UNIT_Y, 0);
        let r = Ray::primary(Vector3::new(0.0, 2.0, 0.0), Vector3::UNIT_Z);
        assert!(p.closest_hit(&r).is_none());
    }

    #[test]
    fn hit_outside_ray_interval_is_rejected() {
        let p = Plane::new(Vector3::ZERO, Vector3::UNIT_Y, 0);
        let r = Ray::new(Vector3::new(0.0, 2.0, 0.0), -Vector3::UNIT_Y, 0.0, 1.0);
        assert!(p.closest_hit(&r).is_none());
    }
}
