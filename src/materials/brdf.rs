//! Free-standing reflectance functions shared by the material variants.

use std::f32::consts::PI;

use crate::color::ColorRGB;
use crate::mathutil::square;
use crate::vector::Vector3;

/// Clamp applied to every normal-dot-something term before it's used as a
/// divisor, so grazing angles degrade to black instead of producing NaN.
const MIN_DOT: f32 = 1e-4;

pub fn lambert(albedo: ColorRGB, kd: f32) -> ColorRGB {
    albedo * kd / PI
}

/// `reflect` is the light direction mirrored about the surface normal;
/// `view_dir` points from the surface toward the viewer.
pub fn phong(ks: f32, exponent: f32, light_dir: Vector3, view_dir: Vector3, normal: Vector3) -> ColorRGB {
    let reflect = light_dir - normal * 2.0 * normal.dot(light_dir);
    let specular_term = reflect.dot(view_dir).max(0.0).powf(exponent);
    ColorRGB::WHITE * ks * specular_term
}

pub fn fresnel_schlick(cos_theta: f32, f0: ColorRGB) -> ColorRGB {
    f0 + (ColorRGB::WHITE - f0) * (1.0 - cos_theta).clamp(0.0, 1.0).powi(5)
}

/// Trowbridge-Reitz GGX normal distribution, UE4 remapping (`a = roughness²`).
pub fn distribution_ggx(n_dot_h: f32, roughness: f32) -> f32 {
    let a = square(roughness);
    let a2 = square(a);
    let n_dot_h2 = square(n_dot_h);
    let denom = n_dot_h2 * (a2 - 1.0) + 1.0;
    a2 / (PI * square(denom)).max(MIN_DOT)
}

fn geometry_schlick_ggx(n_dot_x: f32, k: f32) -> f32 {
    n_dot_x / (n_dot_x * (1.0 - k) + k)
}

/// Smith's method: direct geometric shadowing-masking term as the product of
/// the view-side and light-side Schlick-GGX terms.
pub fn geometry_smith(n_dot_v: f32, n_dot_l: f32, roughness: f32) -> f32 {
    let a = square(roughness);
    let k = square(a + 1.0) / 8.0;
    geometry_schlick_ggx(n_dot_v, k) * geometry_schlick_ggx(n_dot_l, k)
}

/// Cook-Torrance microfacet specular + Lambertian diffuse, metalness-weighted.
/// Returns black when either `n·v` or `n·l` is non-positive.
pub fn cook_torrance(
    albedo: ColorRGB,
    metalness: f32,
    roughness: f32,
    normal: Vector3,
    view_dir: Vector3,
    light_dir: Vector3,
) -> ColorRGB {
    let n_dot_v = normal.dot(view_dir);
    let n_dot_l = normal.dot(light_dir);
    if n_dot_v <= 0.0 || n_dot_l <= 0.0 {
        return ColorRGB::BLACK;
    }
    let n_dot_v = n_dot_v.max(MIN_DOT);
    let n_dot_l = n_dot_l.max(MIN_DOT);

    let h = (view_dir + light_dir).normalized();
    let n_dot_h = normal.dot(h).max(0.0);
    let h_dot_v = h.dot(view_dir).max(0.0);

    let f0 = ColorRGB::new(0.04, 0.04, 0.04).lerp(albedo, metalness);
    let f = fresnel_schlick(h_dot_v, f0);
    let d = distribution_ggx(n_dot_h, roughness);
    let g = geometry_smith(n_dot_v, n_dot_l, roughness);

    let specular = f * (d * g / (4.0 * n_dot_v * n_dot_l).max(MIN_DOT));
    let diffuse = (ColorRGB::WHITE - f) * (1.0 - metalness) * albedo / PI;

    diffuse + specular
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::ApproxEq;

    #[test]
    fn lambert_of_white_albedo_and_full_kd_is_one_over_pi() {
        let c = lambert(ColorRGB::WHITE, 1.0);
        assert_approx_eq!(c, ColorRGB::new(1.0 / PI, 1.0 / PI, 1.0 / PI));
    }

    #[test]
    fn cook_torrance_at_grazing_angle_is_black() {
        let normal = Vector3::UNIT_Y;
        let view = Vector3::UNIT_X;
        let light = Vector3::UNIT_X;
        let c = cook_torrance(ColorRGB::WHITE, 0.5, 0.5, normal, view, light);
        assert_approx_eq!(c, ColorRGB::BLACK);
    }

    #[test]
    fn fresnel_at_normal_incidence_returns_f0() {
        let f0 = ColorRGB::new(0.04, 0.04, 0.04);
        assert_approx_eq!(fresnel_schlick(1.0, f0), f0);
    }
}
