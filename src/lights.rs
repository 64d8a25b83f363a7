use crate::color::ColorRGB;
use crate::vector::Vector3;

/// A light source. Point lights attenuate by inverse-square distance and
/// cast shadows with a finite ray extent; directional lights are constant
/// over the whole scene and cast shadows with unbounded extent.
#[derive(Debug, Clone, Copy)]
pub enum Light {
    Point {
        origin: Vector3,
        intensity: f32,
        color: ColorRGB,
    },
    Directional {
        direction: Vector3,
        intensity: f32,
        color: ColorRGB,
    },
}

impl Light {
    /// Unnormalized vector from `p` toward the light. For a point light its
    /// magnitude doubles as the distance to the light, used as the
    /// shadow-ray max; directional lights have no meaningful distance and
    /// the caller must use `+infinity` for the shadow-ray max instead.
    pub fn direction_to_light(&self, p: Vector3) -> Vector3 {
        match *self {
            Light::Point { origin, .. } => origin - p,
            Light::Directional { direction, .. } => direction,
        }
    }

    /// Incident radiance at `p`, ignoring occlusion.
    pub fn radiance(&self, p: Vector3) -> ColorRGB {
        match *self {
            Light::Point { origin, intensity, color } => {
                let distance_squared = (origin - p).length_squared();
                color * intensity / distance_squared
            }
            Light::Directional { intensity, color, .. } => color * intensity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::ApproxEq;

    #[test]
    fn point_light_direction_points_toward_the_light() {
        let light = Light::Point {
            origin: Vector3::new(0.0, 5.0, 0.0),
            intensity: 1.0,
            color: ColorRGB::WHITE,
        };
        let dir = light.direction_to_light(Vector3::ZERO);
        assert_approx_eq!(dir, Vector3::new(0.0, 5.0, 0.0));
    }

    #[test]
    fn point_light_radiance_follows_inverse_square_law() {
        let light = Light::Point {
            origin: Vector3::new(0.0, 2.0, 0.0),
            intensity: 4.0,
            color: ColorRGB::WHITE,
        };
        let near = light.radiance(Vector3::new(0.0, 1.0, 0.0));
        let far = light.radiance(Vector3::new(0.0, 0.0, 0.0));
        assert_approx_eq!(near, ColorRGB::new(4.0, 4.0, 4.0));
        assert_approx_eq!(far, ColorRGB::new(1.0, 1.0, 1.0));
    }

    #[test]
    fn directional_light_radiance_is_independent_of_position() {
        let light = Light::Directional {
            direction: Vector3::UNIT_Y,
            intensity: 2.0,
            color: ColorRGB::WHITE,
        };
        assert_approx_eq!(light.radiance(Vector3::ZERO), light.radiance(Vector3::new(100.0, 0.0, 0.0)));
    }
}
