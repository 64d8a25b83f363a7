mod brdf;
mod cook_torrance;
mod lambert;
mod lambert_phong;
mod solid_color;

pub use self::cook_torrance::CookTorrance;
pub use self::lambert::Lambert;
pub use self::lambert_phong::LambertPhong;
pub use self::solid_color::SolidColor;

use crate::color::ColorRGB;
use crate::vector::Vector3;

/// A shading capability: given a hit's normal and the unit light/view
/// directions, returns the BRDF value for that configuration.
///
/// `light_dir` and `view_dir` are unit vectors in world space; `view_dir`
/// points from the surface toward the camera, `light_dir` from the surface
/// toward the light.
pub trait Material: Send + Sync {
    fn shade(&self, normal: Vector3, light_dir: Vector3, view_dir: Vector3) -> ColorRGB;
}
