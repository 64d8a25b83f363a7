use crate::ray::Ray;
use crate::vector::Vector3;

/// An axis-aligned bounding box, stored as its low and high corners.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min: Vector3,
    pub max: Vector3,
}

impl BoundingBox {
    pub fn new(min: Vector3, max: Vector3) -> BoundingBox {
        BoundingBox { min, max }
    }

    pub fn from_points<I: IntoIterator<Item = Vector3>>(points: I) -> BoundingBox {
        let mut min = Vector3::new(f32::INFINITY, f32::INFINITY, f32::INFINITY);
        let mut max = Vector3::new(f32::NEG_INFINITY, f32::NEG_INFINITY, f32::NEG_INFINITY);
        for p in points {
            min.x = min.x.min(p.x);
            min.y = min.y.min(p.y);
            min.z = min.z.min(p.z);
            max.x = max.x.max(p.x);
            max.y = max.y.max(p.y);
            max.z = max.z.max(p.z);
        }
        BoundingBox { min, max }
    }

    /// Slab test: folds per-axis tmin/tmax into an overall interval and
    /// rejects if it's empty or entirely behind the ray. Division by a zero
    /// direction component is intentional — it produces ±infinity, which the
    /// min/max folding still resolves correctly.
    pub fn hits(&self, ray: &Ray) -> bool {
        let mut tmin = f32::NEG_INFINITY;
        let mut tmax = f32::INFINITY;

        for axis in 0..3 {
            let (low, high, origin, inv_dir) = match axis {
                0 => (self.min.x, self.max.x, ray.origin.x, ray.inverse_direction.x),
                1 => (self.min.y, self.max.y, ray.origin.y, ray.inverse_direction.y),
                _ => (self.min.z, self.max.z, ray.origin.z, ray.inverse_direction.z),
            };
            let t0 = (low - origin) * inv_dir;
            let t1 = (high - origin) * inv_dir;
            let (t0, t1) = if t0 <= t1 { (t0, t1) } else { (t1, t0) };
            tmin = tmin.max(t0);
            tmax = tmax.min(t1);
        }

        !(tmax <= 0.0 || tmax < tmin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ray_through_the_box_hits() {
        let bb = BoundingBox::new(Vector3::new(-1.0, -1.0, -1.0), Vector3::new(1.0, 1.0, 1.0));
        let r = Ray::primary(Vector3::new(0.0, 0.0, -5.0), Vector3::UNIT_Z);
        assert!(bb.hits(&r));
    }

    #[test]
    fn ray_missing_the_box_misses() {
        let bb = BoundingBox::new(Vector3::new(-1.0, -1.0, -1.0), Vector3::new(1.0, 1.0, 1.0));
        let r = Ray::primary(Vector3::new(5.0, 5.0, -5.0), Vector3::UNIT_Z);
        assert!(!bb.hits(&r));
    }

    #[test]
    fn box_entirely_behind_the_ray_misses() {
        let bb = BoundingBox::new(Vector3::new(-1.0, -1.0, -1.0), Vector3::new(1.0, 1.0, 1.0));
        let r = Ray::primary(Vector3::new(0.0, 0.0, 5.0), Vector3::UNIT_Z);
        assert!(!bb.hits(&r));
    }

    #[test]
    fn ray_parallel_to_a_slab_and_outside_it_misses() {
        let bb = BoundingBox::new(Vector3::new(-1.0, -1.0, -1.0), Vector3::new(1.0, 1.0, 1.0));
        let r = Ray::primary(Vector3::new(0.0, 5.0, -5.0), Vector3::UNIT_Z);
        assert!(!bb.hits(&r));
    }
}
