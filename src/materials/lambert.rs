use crate::color::ColorRGB;
use crate::materials::{brdf, Material};
use crate::vector::Vector3;

pub struct Lambert {
    pub albedo: ColorRGB,
    pub kd: f32,
}

impl Lambert {
    pub fn new(albedo: ColorRGB, kd: f32) -> Lambert {
        Lambert { albedo, kd }
    }
}

impl Material for Lambert {
    fn shade(&self, _normal: Vector3, _light_dir: Vector3, _view_dir: Vector3) -> ColorRGB {
        brdf::lambert(self.albedo, self.kd)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::ApproxEq;
    use std::f32::consts::PI;

    #[test]
    fn returns_albedo_scaled_by_kd_over_pi() {
        let m = Lambert::new(ColorRGB::WHITE, 1.0);
        let c = m.shade(Vector3::UNIT_Y, Vector3::UNIT_Y, Vector3::UNIT_Y);
        assert_approx_eq!(c, ColorRGB::new(1.0 / PI, 1.0 / PI, 1.0 / PI));
    }
}
