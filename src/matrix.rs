use std::ops::Mul;

use crate::vector::{Vector3, Vector4};

/// A row-major 4x4 homogeneous transform.
///
/// Row vectors are multiplied on the left (`v * M`): row 0-2 hold the
/// transformed basis vectors and row 3 holds the translation, so
/// `transform_point`/`transform_direction` read as
/// `v.x*row0 + v.y*row1 + v.z*row2 [+ row3]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix4 {
    rows: [Vector4; 4],
}

impl Matrix4 {
    pub const IDENTITY: Matrix4 = Matrix4 {
        rows: [
            Vector4::new(1.0, 0.0, 0.0, 0.0),
            Vector4::new(0.0, 1.0, 0.0, 0.0),
            Vector4::new(0.0, 0.0, 1.0, 0.0),
            Vector4::new(0.0, 0.0, 0.0, 1.0),
        ],
    };

    pub const fn from_rows(r0: Vector4, r1: Vector4, r2: Vector4, r3: Vector4) -> Matrix4 {
        Matrix4 {
            rows: [r0, r1, r2, r3],
        }
    }

    /// The matrix whose first three rows are `right`, `up`, `forward` and whose
    /// fourth row is `origin` — the camera-to-world basis of §4.5.
    pub fn from_basis(right: Vector3, up: Vector3, forward: Vector3, origin: Vector3) -> Matrix4 {
        Matrix4::from_rows(
            Vector4::new(right.x, right.y, right.z, 0.0),
            Vector4::new(up.x, up.y, up.z, 0.0),
            Vector4::new(forward.x, forward.y, forward.z, 0.0),
            Vector4::new(origin.x, origin.y, origin.z, 1.0),
        )
    }

    pub fn row(&self, i: usize) -> [f32; 4] {
        let r = self.rows[i];
        [r.x, r.y, r.z, r.w]
    }

    pub fn translation(t: Vector3) -> Matrix4 {
        Matrix4::from_rows(
            Vector4::new(1.0, 0.0, 0.0, 0.0),
            Vector4::new(0.0, 1.0, 0.0, 0.0),
            Vector4::new(0.0, 0.0, 1.0, 0.0),
            Vector4::new(t.x, t.y, t.z, 1.0),
        )
    }

    pub fn scale(s: Vector3) -> Matrix4 {
        Matrix4::from_rows(
            Vector4::new(s.x, 0.0, 0.0, 0.0),
            Vector4::new(0.0, s.y, 0.0, 0.0),
            Vector4::new(0.0, 0.0, s.z, 0.0),
            Vector4::new(0.0, 0.0, 0.0, 1.0),
        )
    }

    pub fn rotation_x(degrees: f32) -> Matrix4 {
        let (sin, cos) = degrees.to_radians().sin_cos();
        Matrix4::from_rows(
            Vector4::new(1.0, 0.0, 0.0, 0.0),
            Vector4::new(0.0, cos, sin, 0.0),
            Vector4::new(0.0, -sin, cos, 0.0),
            Vector4::new(0.0, 0.0, 0.0, 1.0),
        )
    }

    pub fn rotation_y(degrees: f32) -> Matrix4 {
        let (sin, cos) = degrees.to_radians().sin_cos();
        Matrix4::from_rows(
            Vector4::new(cos, 0.0, -sin, 0.0),
            Vector4::new(0.0, 1.0, 0.0, 0.0),
            Vector4::new(sin, 0.0, cos, 0.0),
            Vector4::new(0.0, 0.0, 0.0, 1.0),
        )
    }

    pub fn rotation_z(degrees: f32) -> Matrix4 {
        let (sin, cos) = degrees.to_radians().sin_cos();
        Matrix4::from_rows(
            Vector4::new(cos, sin, 0.0, 0.0),
            Vector4::new(-sin, cos, 0.0, 0.0),
            Vector4::new(0.0, 0.0, 1.0, 0.0),
            Vector4::new(0.0, 0.0, 0.0, 1.0),
        )
    }

    /// Rotation about X, then Y, then Z, composed so that applying the result
    /// to a vector is equivalent to applying RotX, then RotY, then RotZ.
    pub fn rotation(pitch_degrees: f32, yaw_degrees: f32, roll_degrees: f32) -> Matrix4 {
        Matrix4::rotation_x(pitch_degrees) * Matrix4::rotation_y(yaw_degrees) * Matrix4::rotation_z(roll_degrees)
    }

    pub fn transpose(&self) -> Matrix4 {
        let mut t = [[0.0f32; 4]; 4];
        for i in 0..4 {
            let r = self.row(i);
            for (j, value) in r.iter().enumerate() {
                t[j][i] = *value;
            }
        }
        Matrix4::from_rows(
            Vector4::new(t[0][0], t[0][1], t[0][2], t[0][3]),
            Vector4::new(t[1][0], t[1][1], t[1][2], t[1][3]),
            Vector4::new(t[2][0], t[2][1], t[2][2], t[2][3]),
            Vector4::new(t[3][0], t[3][1], t[3][2], t[3][3]),
        )
    }

    pub fn transpose_in_place(&mut self) {
        *self = self.transpose();
    }

    /// Applies only the rotation/scale part of the matrix (ignores translation).
    pub fn transform_direction(&self, v: Vector3) -> Vector3 {
        Vector3::new(
            v.x * self.rows[0].x + v.y * self.rows[1].x + v.z * self.rows[2].x,
            v.x * self.rows[0].y + v.y * self.rows[1].y + v.z * self.rows[2].y,
            v.x * self.rows[0].z + v.y * self.rows[1].z + v.z * self.rows[2].z,
        )
    }

    /// Applies the full affine transform, including translation.
    pub fn transform_point(&self, v: Vector3) -> Vector3 {
        self.transform_direction(v) + Vector3::new(self.rows[3].x, self.rows[3].y, self.rows[3].z)
    }
}

impl Mul for Matrix4 {
    type Output = Matrix4;

    fn mul(self, rhs: Matrix4) -> Matrix4 {
        let mut result = [[0.0f32; 4]; 4];
        for i in 0..4 {
            let a = self.row(i);
            for j in 0..4 {
                result[i][j] =
                    a[0] * rhs.row(0)[j] + a[1] * rhs.row(1)[j] + a[2] * rhs.row(2)[j] + a[3] * rhs.row(3)[j];
            }
        }
        Matrix4::from_rows(
            Vector4::new(result[0][0], result[0][1], result[0][2], result[0][3]),
            Vector4::new(result[1][0], result[1][1], result[1][2], result[1][3]),
            Vector4::new(result[2][0], result[2][1], result[2][2], result[2][3]),
            Vector4::new(result[3][0], result[3][1], result[3][2], result[3][3]),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::ApproxEq;

    #[test]
    fn identity_transforms_are_no_ops() {
        let v = Vector3::new(1.0, 2.0, 3.0);
        assert_approx_eq!(Matrix4::IDENTITY.transform_point(v), v);
        assert_approx_eq!(Matrix4::IDENTITY.transform_direction(v), v);
    }

    #[test]
    fn translation_moves_points_but_not_directions() {
        let t = Matrix4::translation(Vector3::new(1.0, 2.0, 3.0));
        let p = Vector3::new(0.0, 0.0, 0.0);
        assert_approx_eq!(t.transform_point(p), Vector3::new(1.0, 2.0, 3.0));
        assert_approx_eq!(t.transform_direction(p), Vector3::ZERO);
    }

    #[test]
    fn rotation_y_90_maps_unit_z_to_unit_x() {
        let r = Matrix4::rotation_y(90.0);
        let result = r.transform_direction(Vector3::UNIT_Z);
        assert_approx_eq!(result, Vector3::UNIT_X);
    }

    #[test]
    fn transpose_is_involution() {
        let m = Matrix4::rotation_y(37.0) * Matrix4::translation(Vector3::new(1.0, -2.0, 4.0));
        assert_approx_eq!(m.transpose().transpose(), m);
    }

    #[test]
    fn scale_scales_each_axis_independently() {
        let s = Matrix4::scale(Vector3::new(2.0, 3.0, 4.0));
        assert_approx_eq!(s.transform_direction(Vector3::new(1.0, 1.0, 1.0)), Vector3::new(2.0, 3.0, 4.0));
    }
}
