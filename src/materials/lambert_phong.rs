use crate::color::ColorRGB;
use crate::materials::{brdf, Material};
use crate::vector::Vector3;

pub struct LambertPhong {
    pub albedo: ColorRGB,
    pub kd: f32,
    pub ks: f32,
    pub phong_exponent: f32,
}

impl LambertPhong {
    pub fn new(albedo: ColorRGB, kd: f32, ks: f32, phong_exponent: f32) -> LambertPhong {
        LambertPhong {
            albedo,
            kd,
            ks,
            phong_exponent,
        }
    }
}

impl Material for LambertPhong {
    fn shade(&self, normal: Vector3, light_dir: Vector3, view_dir: Vector3) -> ColorRGB {
        brdf::lambert(self.albedo, self.kd) + brdf::phong(self.ks, self.phong_exponent, light_dir, view_dir, normal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::ApproxEq;

    #[test]
    fn perfect_mirror_reflection_direction_maximizes_specular() {
        let m = LambertPhong::new(ColorRGB::BLACK, 0.0, 1.0, 1.0);
        let normal = Vector3::UNIT_Y;
        let light_dir = Vector3::UNIT_Y;
        let view_dir = -Vector3::UNIT_Y;
        let c = m.shade(normal, light_dir, view_dir);
        assert_approx_eq!(c, ColorRGB::WHITE);
    }

    #[test]
    fn reflection_pointing_away_from_viewer_contributes_nothing() {
        let m = LambertPhong::new(ColorRGB::BLACK, 0.0, 1.0, 1.0);
        let normal = Vector3::UNIT_Y;
        let light_dir = Vector3::UNIT_Y;
        let view_dir = Vector3::UNIT_Y;
        let c = m.shade(normal, light_dir, view_dir);
        assert_approx_eq!(c, ColorRGB::BLACK);
    }
}
