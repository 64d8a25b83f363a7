use crate::color::ColorRGB;
use crate::materials::Material;
use crate::vector::Vector3;

pub struct SolidColor {
    pub color: ColorRGB,
}

impl SolidColor {
    pub fn new(color: ColorRGB) -> SolidColor {
        SolidColor { color }
    }
}

impl Material for SolidColor {
    fn shade(&self, _normal: Vector3, _light_dir: Vector3, _view_dir: Vector3) -> ColorRGB {
        self.color
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::ApproxEq;

    #[test]
    fn ignores_directions_entirely() {
        let m = SolidColor::new(ColorRGB::RED);
        assert_approx_eq!(
            m.shade(Vector3::UNIT_Y, Vector3::UNIT_X, Vector3::UNIT_Z),
            ColorRGB::RED
        );
    }
}
