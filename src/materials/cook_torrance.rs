use crate::color::ColorRGB;
use crate::materials::{brdf, Material};
use crate::vector::Vector3;

pub struct CookTorrance {
    pub albedo: ColorRGB,
    /// Treated as a continuous float in [0,1], not a boolean, even though
    /// metal/plastic presets in the scene catalog only ever pass 0.0 or 1.0.
    pub metalness: f32,
    pub roughness: f32,
}

impl CookTorrance {
    pub fn new(albedo: ColorRGB, metalness: f32, roughness: f32) -> CookTorrance {
        CookTorrance {
            albedo,
            metalness,
            roughness,
        }
    }
}

impl Material for CookTorrance {
    fn shade(&self, normal: Vector3, light_dir: Vector3, view_dir: Vector3) -> ColorRGB {
        brdf::cook_torrance(self.albedo, self.metalness, self.roughness, normal, view_dir, light_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::ApproxEq;

    #[test]
    fn grazing_angle_never_produces_nan() {
        let m = CookTorrance::new(ColorRGB::WHITE, 1.0, 0.1);
        let c = m.shade(Vector3::UNIT_Y, Vector3::UNIT_X, Vector3::UNIT_X);
        assert!(!c.r.is_nan() && !c.g.is_nan() && !c.b.is_nan());
        assert_approx_eq!(c, ColorRGB::BLACK);
    }

    #[test]
    fn straight_on_light_and_view_produce_a_non_negative_response() {
        let m = CookTorrance::new(ColorRGB::new(0.75, 0.75, 0.75), 0.0, 0.5);
        let c = m.shade(Vector3::UNIT_Y, Vector3::UNIT_Y, Vector3::UNIT_Y);
        assert!(c.r >= 0.0 && c.g >= 0.0 && c.b >= 0.0);
    }
}
