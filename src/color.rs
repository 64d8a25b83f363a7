use std::ops::{Add, AddAssign, Div, Mul, Sub};

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ColorRGB {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl ColorRGB {
    pub const fn new(r: f32, g: f32, b: f32) -> ColorRGB {
        ColorRGB { r, g, b }
    }

    pub const BLACK: ColorRGB = ColorRGB::new(0.0, 0.0, 0.0);
    pub const WHITE: ColorRGB = ColorRGB::new(1.0, 1.0, 1.0);
    pub const RED: ColorRGB = ColorRGB::new(1.0, 0.0, 0.0);
    pub const GREEN: ColorRGB = ColorRGB::new(0.0, 1.0, 0.0);
    pub const BLUE: ColorRGB = ColorRGB::new(0.0, 0.0, 1.0);
    pub const YELLOW: ColorRGB = ColorRGB::new(1.0, 1.0, 0.0);
    pub const MAGENTA: ColorRGB = ColorRGB::new(1.0, 0.0, 1.0);

    fn max_component(self) -> f32 {
        self.r.max(self.g).max(self.b)
    }

    /// Clamps the color to [0,1] per channel while preserving relative hue:
    /// if any channel exceeds 1, the whole color is divided by its max channel.
    pub fn max_to_one(self) -> ColorRGB {
        let max = self.max_component();
        if max > 1.0 {
            self / max
        } else {
            self
        }
    }

    pub fn lerp(self, rhs: ColorRGB, t: f32) -> ColorRGB {
        self + (rhs - self) * t
    }

    pub fn to_bytes(self) -> [u8; 3] {
        let c = self.max_to_one();
        [
            (c.r * 255.0) as u8,
            (c.g * 255.0) as u8,
            (c.b * 255.0) as u8,
        ]
    }
}

impl Add for ColorRGB {
    type Output = ColorRGB;

    fn add(self, rhs: ColorRGB) -> ColorRGB {
        ColorRGB::new(self.r + rhs.r, self.g + rhs.g, self.b + rhs.b)
    }
}

impl AddAssign for ColorRGB {
    fn add_assign(&mut self, rhs: ColorRGB) {
        self.r += rhs.r;
        self.g += rhs.g;
        self.b += rhs.b;
    }
}

impl Sub for ColorRGB {
    type Output = ColorRGB;

    fn sub(self, rhs: ColorRGB) -> ColorRGB {
        ColorRGB::new(self.r - rhs.r, self.g - rhs.g, self.b - rhs.b)
    }
}

impl Mul for ColorRGB {
    type Output = ColorRGB;

    fn mul(self, rhs: ColorRGB) -> ColorRGB {
        ColorRGB::new(self.r * rhs.r, self.g * rhs.g, self.b * rhs.b)
    }
}

impl Mul<f32> for ColorRGB {
    type Output = ColorRGB;

    fn mul(self, rhs: f32) -> ColorRGB {
        ColorRGB::new(self.r * rhs, self.g * rhs, self.b * rhs)
    }
}

impl Mul<ColorRGB> for f32 {
    type Output = ColorRGB;

    fn mul(self, rhs: ColorRGB) -> ColorRGB {
        rhs * self
    }
}

impl Div<f32> for ColorRGB {
    type Output = ColorRGB;

    fn div(self, rhs: f32) -> ColorRGB {
        ColorRGB::new(self.r / rhs, self.g / rhs, self.b / rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::ApproxEq;

    #[test]
    fn add() {
        let a = ColorRGB::new(0.1, 0.2, 0.3);
        let b = ColorRGB::new(0.4, 0.5, 0.6);
        assert_approx_eq!(a + b, ColorRGB::new(0.5, 0.7, 0.9));
    }

    #[test]
    fn mul_color() {
        let a = ColorRGB::new(0.1, 0.2, 0.3);
        let b = ColorRGB::new(0.4, 0.5, 0.6);
        assert_approx_eq!(a * b, ColorRGB::new(0.04, 0.1, 0.18));
    }

    #[test]
    fn mul_f32() {
        let c = ColorRGB::new(0.1, 0.2, 0.3);
        assert_approx_eq!(c * 2.0, ColorRGB::new(0.2, 0.4, 0.6));
    }

    #[test]
    fn max_to_one_preserves_hue_when_clamping() {
        let c = ColorRGB::new(2.0, 1.0, 0.0);
        let clamped = c.max_to_one();
        assert_approx_eq!(clamped, ColorRGB::new(1.0, 0.5, 0.0));
    }

    #[test]
    fn max_to_one_is_idempotent() {
        let c = ColorRGB::new(3.0, 6.0, 0.5);
        let once = c.max_to_one();
        let twice = once.max_to_one();
        assert_approx_eq!(once, twice);
        assert!(twice.r.max(twice.g).max(twice.b) <= 1.0);
    }

    #[test]
    fn max_to_one_leaves_in_range_colors_untouched() {
        let c = ColorRGB::new(0.2, 0.4, 0.6);
        assert_approx_eq!(c.max_to_one(), c);
    }
}
