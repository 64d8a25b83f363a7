use std::fmt::Debug;

use crate::color::ColorRGB;
use crate::matrix::Matrix4;
use crate::vector::Vector3;

const TEST_EPSILON: f32 = 0.0001;

pub trait ApproxEq: Debug {
    fn approx_eq(&self, other: &Self) -> bool;
}

impl ApproxEq for f32 {
    fn approx_eq(&self, other: &Self) -> bool {
        if self.is_nan() || other.is_nan() {
            return false;
        }
        (*self - *other).abs() < TEST_EPSILON
    }
}

impl<T> ApproxEq for [T]
where
    T: ApproxEq,
{
    fn approx_eq(&self, other: &Self) -> bool {
        if self.len() != other.len() {
            return false;
        }
        self.iter().zip(other.iter()).all(|(a, b)| a.approx_eq(b))
    }
}

impl<T> ApproxEq for Vec<T>
where
    T: ApproxEq,
{
    fn approx_eq(&self, other: &Self) -> bool {
        self.as_slice().approx_eq(other.as_slice())
    }
}

impl ApproxEq for Vector3 {
    fn approx_eq(&self, other: &Self) -> bool {
        [self.x, self.y, self.z].approx_eq(&[other.x, other.y, other.z])
    }
}

impl ApproxEq for ColorRGB {
    fn approx_eq(&self, other: &Self) -> bool {
        [self.r, self.g, self.b].approx_eq(&[other.r, other.g, other.b])
    }
}

impl ApproxEq for Matrix4 {
    fn approx_eq(&self, other: &Self) -> bool {
        (0..4).all(|i| self.row(i).approx_eq(&other.row(i)))
    }
}

macro_rules! assert_approx_eq {
    ($a:expr, $b:expr) => {
        if !$a.approx_eq(&$b) {
            panic!(
                "assertion failed: `(left == right)`\n   left: `{:?}`,\n  right: `{:?}`",
                $a, $b,
            )
        }
    };
}
