//! Dense 3x3 `f32` matrix.
//!
//! # Convention
//!
//! Cells are addressed `(row, column)` and vectors are treated as columns:
//!
//! ```text
//! | m00 m01 m02 |   | x |   | row0 . v |
//! | m10 m11 m12 | * | y | = | row1 . v |
//! | m20 m21 m22 |   | z |   | row2 . v |
//! ```
//!
//! There is no `Vector3 * Matrix3`; only the matrix-on-the-left form exists.
//!
//! # Zero by default
//!
//! [`Matrix3::default`] is the **zero** matrix, not the identity. Start from
//! [`Matrix3::IDENTITY`] or one of the factories when a neutral element is
//! needed.
//!
//! # Degenerate cases
//!
//! [`Matrix3::row`] and [`Matrix3::column`] return [`Vector3::ZERO`] for an
//! index outside `0..3`. [`Matrix3::inverse`] does not check for singularity:
//! with a zero determinant the cells come out infinite or NaN, exactly as
//! IEEE-754 division produces them.

use std::fmt;
use std::ops::{Add, Mul, Sub};

use super::Vector3;

const ROWS: usize = 3;
const COLS: usize = 3;

/// A 3x3 linear transform.
///
/// # Example
///
/// ```
/// use spincube::{Matrix3, Vector3};
///
/// let quarter_turn = Matrix3::rotation_z(std::f32::consts::FRAC_PI_2);
/// let v = quarter_turn * Vector3::new(1.0, 0.0, 0.0);
///
/// assert!((v.x - 0.0).abs() < 1e-6);
/// assert!((v.y - 1.0).abs() < 1e-6);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Matrix3 {
    m: [[f32; COLS]; ROWS],
}

impl Matrix3 {
    pub const ZERO: Self = Self {
        m: [[0.0; COLS]; ROWS],
    };

    pub const IDENTITY: Self = Self {
        m: [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]],
    };

    /// Builds a matrix from nine cells in row-major order.
    #[allow(clippy::too_many_arguments)]
    pub const fn new(
        a11: f32,
        a12: f32,
        a13: f32,
        a21: f32,
        a22: f32,
        a23: f32,
        a31: f32,
        a32: f32,
        a33: f32,
    ) -> Self {
        Self {
            m: [[a11, a12, a13], [a21, a22, a23], [a31, a32, a33]],
        }
    }

    /// Builds a matrix whose rows are the given vectors.
    pub const fn from_rows(row1: Vector3, row2: Vector3, row3: Vector3) -> Self {
        Self {
            m: [row1.to_array(), row2.to_array(), row3.to_array()],
        }
    }

    /// Cell at `(row, column)`. Panics outside `0..3` like any array index.
    pub fn get(&self, row: usize, column: usize) -> f32 {
        self.m[row][column]
    }

    /// Row `index` as a vector, or [`Vector3::ZERO`] if `index` is not in `0..3`.
    pub fn row(&self, index: i32) -> Vector3 {
        match usize::try_from(index) {
            Ok(i) if i < ROWS => Vector3::from_array(self.m[i]),
            _ => Vector3::ZERO,
        }
    }

    /// Column `index` as a vector, or [`Vector3::ZERO`] if `index` is not in `0..3`.
    pub fn column(&self, index: i32) -> Vector3 {
        match usize::try_from(index) {
            Ok(j) if j < COLS => Vector3::new(self.m[0][j], self.m[1][j], self.m[2][j]),
            _ => Vector3::ZERO,
        }
    }

    pub fn transpose(&self) -> Matrix3 {
        let mut result = Matrix3::ZERO;
        for i in 0..ROWS {
            for j in 0..COLS {
                result.m[j][i] = self.m[i][j];
            }
        }
        result
    }

    /// Cofactor expansion along the first row.
    pub fn determinant(&self) -> f32 {
        let [[a, b, c], [d, e, f], [g, h, i]] = self.m;
        a * e * i + b * f * g + c * d * h - c * e * g - b * d * i - a * f * h
    }

    /// Adjugate scaled by the reciprocal determinant.
    ///
    /// A singular matrix is not detected: `1.0 / 0.0` is infinite and the
    /// result is full of `inf`/`NaN`. Check [`Matrix3::determinant`] first if
    /// that matters.
    pub fn inverse(&self) -> Matrix3 {
        let m = &self.m;

        let adjugate = Matrix3::new(
            m[2][2] * m[1][1] - m[2][1] * m[1][2],
            m[2][1] * m[0][2] - m[2][2] * m[0][1],
            m[1][2] * m[0][1] - m[1][1] * m[0][2],
            m[2][0] * m[1][2] - m[2][2] * m[1][0],
            m[2][2] * m[0][0] - m[2][0] * m[0][2],
            m[1][0] * m[0][2] - m[1][2] * m[0][0],
            m[2][1] * m[1][0] - m[2][0] * m[1][1],
            m[2][0] * m[0][1] - m[2][1] * m[0][0],
            m[1][1] * m[0][0] - m[1][0] * m[0][1],
        );

        adjugate * (1.0 / self.determinant())
    }

    /// Counter-clockwise rotation about the X axis.
    pub fn rotation_x(angle_radians: f32) -> Matrix3 {
        let (sin, cos) = angle_radians.sin_cos();
        Matrix3::new(1.0, 0.0, 0.0, 0.0, cos, -sin, 0.0, sin, cos)
    }

    /// Counter-clockwise rotation about the Y axis.
    pub fn rotation_y(angle_radians: f32) -> Matrix3 {
        let (sin, cos) = angle_radians.sin_cos();
        Matrix3::new(cos, 0.0, sin, 0.0, 1.0, 0.0, -sin, 0.0, cos)
    }

    /// Counter-clockwise rotation about the Z axis.
    pub fn rotation_z(angle_radians: f32) -> Matrix3 {
        let (sin, cos) = angle_radians.sin_cos();
        Matrix3::new(cos, -sin, 0.0, sin, cos, 0.0, 0.0, 0.0, 1.0)
    }

    /// Uniform scale: `factor` on the diagonal, zero elsewhere.
    pub fn scale(factor: f32) -> Matrix3 {
        Matrix3::new(factor, 0.0, 0.0, 0.0, factor, 0.0, 0.0, 0.0, factor)
    }

    /// 2D translation by `(displacement.x, displacement.y)` in homogeneous
    /// coordinates.
    ///
    /// This is **not** a 3D translation. The operand's `z` plays the role of
    /// the homogeneous `w`, so the result is only a translation when `z == 1`;
    /// for any other `z` the offset is scaled by `z`. `displacement.z` is
    /// ignored.
    ///
    /// ```
    /// use spincube::{Matrix3, Vector3};
    ///
    /// let t = Matrix3::translation(Vector3::new(2.0, 3.0, 0.0));
    /// assert_eq!(t * Vector3::new(1.0, 1.0, 1.0), Vector3::new(3.0, 4.0, 1.0));
    /// ```
    pub fn translation(displacement: Vector3) -> Matrix3 {
        Matrix3::new(
            1.0,
            0.0,
            displacement.x,
            0.0,
            1.0,
            displacement.y,
            0.0,
            0.0,
            1.0,
        )
    }

    fn zip_with(self, rhs: Matrix3, op: impl Fn(f32, f32) -> f32) -> Matrix3 {
        let mut result = Matrix3::ZERO;
        for i in 0..ROWS {
            for j in 0..COLS {
                result.m[i][j] = op(self.m[i][j], rhs.m[i][j]);
            }
        }
        result
    }
}

impl Add for Matrix3 {
    type Output = Matrix3;

    fn add(self, rhs: Matrix3) -> Matrix3 {
        self.zip_with(rhs, |a, b| a + b)
    }
}

impl Sub for Matrix3 {
    type Output = Matrix3;

    fn sub(self, rhs: Matrix3) -> Matrix3 {
        self.zip_with(rhs, |a, b| a - b)
    }
}

/// Composition: `(a * b) * v == a * (b * v)`.
impl Mul for Matrix3 {
    type Output = Matrix3;

    fn mul(self, rhs: Matrix3) -> Matrix3 {
        let mut result = Matrix3::ZERO;
        for i in 0..ROWS {
            let row = self.row(i as i32);
            for j in 0..COLS {
                result.m[i][j] = row.dot(rhs.column(j as i32));
            }
        }
        result
    }
}

impl Mul<Vector3> for Matrix3 {
    type Output = Vector3;

    fn mul(self, v: Vector3) -> Vector3 {
        Vector3::new(
            v.dot(self.row(0)),
            v.dot(self.row(1)),
            v.dot(self.row(2)),
        )
    }
}

impl Mul<f32> for Matrix3 {
    type Output = Matrix3;

    fn mul(self, scalar: f32) -> Matrix3 {
        let mut result = self;
        for cell in result.m.iter_mut().flatten() {
            *cell *= scalar;
        }
        result
    }
}

impl fmt::Display for Matrix3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, row) in self.m.iter().enumerate() {
            write!(f, "{}, {}, {}", row[0], row[1], row[2])?;
            if i < ROWS - 1 {
                write!(f, "|\n|")?;
            }
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn assert_matrix_close(a: Matrix3, b: Matrix3, epsilon: f32) {
        for i in 0..3 {
            for j in 0..3 {
                assert_abs_diff_eq!(a.get(i, j), b.get(i, j), epsilon = epsilon);
            }
        }
    }

    fn assert_vector_close(a: Vector3, b: Vector3, epsilon: f32) {
        assert_abs_diff_eq!(a.x, b.x, epsilon = epsilon);
        assert_abs_diff_eq!(a.y, b.y, epsilon = epsilon);
        assert_abs_diff_eq!(a.z, b.z, epsilon = epsilon);
    }

    fn sample() -> Matrix3 {
        Matrix3::new(2.0, 0.0, 1.0, 1.0, 3.0, 2.0, 1.0, 1.0, 2.0)
    }

    #[test]
    fn default_is_zero_not_identity() {
        assert_eq!(Matrix3::default(), Matrix3::ZERO);
        assert_ne!(Matrix3::default(), Matrix3::IDENTITY);
    }

    #[test]
    fn from_rows_matches_scalar_constructor() {
        let m = Matrix3::from_rows(
            Vector3::new(1.0, 2.0, 3.0),
            Vector3::new(4.0, 5.0, 6.0),
            Vector3::new(7.0, 8.0, 9.0),
        );
        assert_eq!(m, Matrix3::new(1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0));
        assert_eq!(m.row(1), Vector3::new(4.0, 5.0, 6.0));
        assert_eq!(m.column(2), Vector3::new(3.0, 6.0, 9.0));
    }

    #[test]
    fn row_and_column_out_of_range_are_zero() {
        let m = sample();
        assert_eq!(m.row(5), Vector3::ZERO);
        assert_eq!(m.row(3), Vector3::ZERO);
        assert_eq!(m.column(-1), Vector3::ZERO);
        assert_eq!(m.row(-1), Vector3::ZERO);
    }

    #[test]
    fn add_sub_and_scalar() {
        let m = sample();
        assert_eq!(m - m, Matrix3::ZERO);
        assert_eq!(m + m, m * 2.0);
    }

    #[test]
    fn multiplication_is_not_commutative() {
        let a = Matrix3::rotation_x(0.5);
        let b = Matrix3::rotation_y(0.5);
        assert_ne!(a * b, b * a);
        assert_matrix_close(sample() * Matrix3::IDENTITY, sample(), 0.0);
    }

    #[test]
    fn transpose_swaps_rows_and_columns() {
        let m = Matrix3::new(1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0);
        let t = m.transpose();
        assert_eq!(t.row(0), m.column(0));
        assert_eq!(t.transpose(), m);
    }

    #[test]
    fn determinant_of_known_matrix() {
        assert_eq!(sample().determinant(), 6.0);
        assert_eq!(Matrix3::scale(2.0).determinant(), 8.0);
        assert_eq!(Matrix3::ZERO.determinant(), 0.0);
    }

    #[test]
    fn inverse_composes_to_identity() {
        let m = sample();
        assert_matrix_close(m * m.inverse(), Matrix3::IDENTITY, 1e-5);

        let r = Matrix3::rotation_z(0.7) * Matrix3::scale(3.0);
        assert_matrix_close(r * r.inverse(), Matrix3::IDENTITY, 1e-5);
    }

    #[test]
    fn singular_inverse_is_not_finite() {
        let inv = Matrix3::ZERO.inverse();
        for i in 0..3 {
            for j in 0..3 {
                assert!(!inv.get(i, j).is_finite());
            }
        }
    }

    #[test]
    fn zero_rotation_is_identity() {
        assert_eq!(Matrix3::rotation_x(0.0), Matrix3::IDENTITY);
        let v = Vector3::new(0.3, -1.2, 4.5);
        assert_vector_close(Matrix3::rotation_x(0.0) * v, v, 1e-7);
    }

    #[test]
    fn rotation_round_trip() {
        let theta = 1.234;
        let v = Vector3::new(1.0, 2.0, 3.0);
        let back = Matrix3::rotation_z(theta) * Matrix3::rotation_z(-theta) * v;
        assert_vector_close(back, v, 1e-5);
    }

    #[test]
    fn quarter_turns_follow_right_hand_rule() {
        use std::f32::consts::FRAC_PI_2;

        let x = Vector3::new(1.0, 0.0, 0.0);
        let y = Vector3::new(0.0, 1.0, 0.0);
        let z = Vector3::new(0.0, 0.0, 1.0);

        assert_vector_close(Matrix3::rotation_x(FRAC_PI_2) * y, z, 1e-6);
        assert_vector_close(Matrix3::rotation_y(FRAC_PI_2) * z, x, 1e-6);
        assert_vector_close(Matrix3::rotation_z(FRAC_PI_2) * x, y, 1e-6);
        assert_vector_close(
            Matrix3::rotation_x(FRAC_PI_2) * Vector3::new(1.0, 2.0, 3.0),
            Vector3::new(1.0, -3.0, 2.0),
            1e-5,
        );
    }

    #[test]
    fn scale_is_diagonal() {
        let s = Matrix3::scale(1.5);
        assert_eq!(s * Vector3::new(2.0, -4.0, 1.0), Vector3::new(3.0, -6.0, 1.5));
        assert_eq!(s.get(0, 1), 0.0);
    }

    #[test]
    fn translation_needs_homogeneous_one() {
        let t = Matrix3::translation(Vector3::new(2.0, 3.0, 99.0));
        assert_eq!(t * Vector3::new(1.0, 1.0, 1.0), Vector3::new(3.0, 4.0, 1.0));
        // With z = 2 the offset is doubled: not a plain translation.
        assert_eq!(t * Vector3::new(0.0, 0.0, 2.0), Vector3::new(4.0, 6.0, 2.0));
    }

    #[test]
    fn display_format() {
        assert_eq!(
            Matrix3::IDENTITY.to_string(),
            "[1, 0, 0|\n|0, 1, 0|\n|0, 0, 1]"
        );
    }
}
