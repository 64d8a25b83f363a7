use crate::vector::Vector3;

/// A ray with a bounded parametric interval `[min, max]`.
///
/// `direction` is expected to already be unit-length by every intersection
/// routine in this crate. `inverse_direction` is cached for the mesh AABB
/// slab test, which otherwise divides by each component of `direction` once
/// per axis per candidate mesh.
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    pub origin: Vector3,
    pub direction: Vector3,
    pub min: f32,
    pub max: f32,
    pub inverse_direction: Vector3,
}

/// Minimum t for shadow rays, large enough to step past the surface they
/// originate from without visibly biasing the shadow boundary.
pub const SHADOW_BIAS: f32 = 1e-4;

impl Ray {
    pub fn new(origin: Vector3, direction: Vector3, min: f32, max: f32) -> Ray {
        Ray {
            origin,
            direction,
            min,
            max,
            inverse_direction: Vector3::new(1.0 / direction.x, 1.0 / direction.y, 1.0 / direction.z),
        }
    }

    pub fn primary(origin: Vector3, direction: Vector3) -> Ray {
        Ray::new(origin, direction, 0.0, f32::INFINITY)
    }

    /// A shadow ray from a shaded surface point toward a light, biased off the
    /// surface along its normal to avoid self-intersection.
    pub fn shadow(hit_origin: Vector3, hit_normal: Vector3, direction: Vector3, max: f32) -> Ray {
        Ray::new(hit_origin + hit_normal * SHADOW_BIAS, direction, SHADOW_BIAS, max)
    }

    pub fn at(&self, t: f32) -> Vector3 {
        self.origin + self.direction * t
    }
}

/// The result of a closest-hit query. `did_hit == false` means the rest of
/// the fields are meaningless; callers must check it before reading them.
#[derive(Debug, Clone, Copy)]
pub struct HitRecord {
    pub did_hit: bool,
    pub origin: Vector3,
    pub normal: Vector3,
    pub material_index: u8,
    pub t: f32,
}

impl HitRecord {
    pub const NONE: HitRecord = HitRecord {
        did_hit: false,
        origin: Vector3::ZERO,
        normal: Vector3::ZERO,
        material_index: 0,
        t: f32::INFINITY,
    };

    pub fn new(origin: Vector3, normal: Vector3, material_index: u8, t: f32) -> HitRecord {
        HitRecord {
            did_hit: true,
            origin,
            normal,
            material_index,
            t,
        }
    }
}

impl Default for HitRecord {
    fn default() -> HitRecord {
        HitRecord::NONE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::ApproxEq;

    #[test]
    fn at_follows_parametric_line() {
        let r = Ray::primary(Vector3::new(0.0, 0.0, -3.0), Vector3::UNIT_Z);
        assert_approx_eq!(r.at(2.0), Vector3::new(0.0, 0.0, -1.0));
    }

    #[test]
    fn shadow_ray_is_biased_off_the_surface() {
        let hit_origin = Vector3::new(0.0, 0.0, 0.0);
        let normal = Vector3::UNIT_Y;
        let r = Ray::shadow(hit_origin, normal, Vector3::UNIT_Y, 5.0);
        assert_approx_eq!(r.min, SHADOW_BIAS);
        assert_approx_eq!(r.max, 5.0);
        assert_approx_eq!(r.origin, Vector3::new(0.0, SHADOW_BIAS, 0.0));
    }

    #[test]
    fn default_hit_record_did_not_hit() {
        assert!(!HitRecord::default().did_hit);
    }
}
