use crate::mathutil::square;
use crate::ray::{HitRecord, Ray};
use crate::vector::Vector3;

#[derive(Debug, Clone, Copy)]
pub struct Sphere {
    pub origin: Vector3,
    pub radius: f32,
    pub material_index: u8,
}

impl Sphere {
    pub fn new(origin: Vector3, radius: f32, material_index: u8) -> Sphere {
        assert!(radius > 0.0, "sphere radius must be positive");
        Sphere {
            origin,
            radius,
            material_index,
        }
    }

    /// Returns the nearer of the two roots that lies within `[ray.min, ray.max]`,
    /// or `None` if neither does.
    fn nearest_t_in_range(&self, ray: &Ray) -> Option<f32> {
        let oc = self.origin - ray.origin;
        let a = ray.direction.dot(ray.direction);
        let b = ray.direction.dot(oc);
        let c = oc.dot(oc) - square(self.radius);
        let discriminant = b * b - a * c;
        if discriminant <= 0.0 {
            return None;
        }

        let sqrt_d = discriminant.sqrt();
        let t_near = (b - sqrt_d) / a;
        if t_near >= ray.min && t_near <= ray.max {
            return Some(t_near);
        }

        let t_far = (b + sqrt_d) / a;
        if t_far >= ray.min && t_far <= ray.max {
            return Some(t_far);
        }

        None
    }

    fn hit_record_for_t(&self, ray: &Ray, t: f32) -> HitRecord {
        let origin = ray.at(t);
        let normal = (origin - self.origin).normalized();
        HitRecord::new(origin, normal, self.material_index, t)
    }

    pub fn closest_hit(&self, ray: &Ray) -> Option<HitRecord> {
        self.nearest_t_in_range(ray).map(|t| self.hit_record_for_t(ray, t))
    }

    pub fn any_hit(&self, ray: &Ray) -> bool {
        self.nearest_t_in_range(ray).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::ApproxEq;

    #[test]
    fn ray_through_center_hits_near_side() {
        let s = Sphere::new(Vector3::ZERO, 1.0, 0);
        let r = Ray::primary(Vector3::new(0.0, 0.0, -3.0), Vector3::UNIT_Z);
        let hit = s.closest_hit(&r).expect("expected a hit");
        assert_approx_eq!(hit.t, 2.0);
        assert_approx_eq!(hit.origin, Vector3::new(0.0, 0.0, -1.0));
        assert_approx_eq!(hit.normal, Vector3::new(0.0, 0.0, -1.0));
    }

    #[test]
    fn ray_missing_the_sphere_misses() {
        let s = Sphere::new(Vector3::ZERO, 1.0, 0);
        let r = Ray::primary(Vector3::new(5.0, 5.0, -5.0), Vector3::UNIT_Z);
        assert!(s.closest_hit(&r).is_none());
        assert!(!s.any_hit(&r));
    }

    #[test]
    fn ray_starting_inside_hits_far_side_only() {
        let s = Sphere::new(Vector3::ZERO, 1.0, 0);
        let r = Ray::primary(Vector3::ZERO, Vector3::UNIT_Z);
        let hit = s.closest_hit(&r).expect("expected a hit");
        assert_approx_eq!(hit.t, 1.0);
    }

    #[test]
    fn hit_behind_ray_min_is_rejected() {
        let s = Sphere::new(Vector3::ZERO, 1.0, 0);
        let mut r = Ray::primary(Vector3::new(0.0, 0.0, -3.0), Vector3::UNIT_Z);
        r.min = 3.0;
        assert!(s.closest_hit(&r).is_none());
    }
}
