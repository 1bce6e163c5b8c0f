//! Named conversions between [`Vector3`] and `glam` vector types.
//!
//! The core types never convert implicitly. Every crossing into the render or
//! input layers goes through one of these functions so the narrowing rules
//! (dropped `z`, truncation toward zero, sign removal) stay visible at the
//! call site.

use glam::{IVec2, IVec3, UVec2, Vec2, Vec3};

use super::{Matrix3, Vector3};

impl Vector3 {
    pub fn from_glam(v: Vec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }

    /// Lifts a 2D vector into the `z = 0` plane.
    pub fn from_vec2(v: Vec2) -> Self {
        Self::new(v.x, v.y, 0.0)
    }

    pub fn from_ivec3(v: IVec3) -> Self {
        Self::new(v.x as f32, v.y as f32, v.z as f32)
    }

    /// Lifts an integer 2D vector into the `z = 0` plane.
    pub fn from_ivec2(v: IVec2) -> Self {
        Self::new(v.x as f32, v.y as f32, 0.0)
    }

    /// Lifts an unsigned 2D vector (e.g. a window size) into the `z = 0` plane.
    pub fn from_uvec2(v: UVec2) -> Self {
        Self::new(v.x as f32, v.y as f32, 0.0)
    }

    pub fn to_glam(self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }

    /// Drops `z`.
    pub fn to_vec2(self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Truncates each component toward zero.
    pub fn to_ivec3(self) -> IVec3 {
        IVec3::new(self.x as i32, self.y as i32, self.z as i32)
    }

    /// Drops `z` and truncates toward zero.
    pub fn to_ivec2(self) -> IVec2 {
        IVec2::new(self.x as i32, self.y as i32)
    }

    /// Drops `z`, takes absolute values, then truncates toward zero.
    ///
    /// `[2.4, -2.6, 3.0]` becomes `(2, 2)`.
    pub fn to_uvec2(self) -> UVec2 {
        UVec2::new(self.x.abs() as u32, self.y.abs() as u32)
    }
}

impl Matrix3 {
    /// Converts to a column-major `glam::Mat3` describing the same transform.
    pub fn to_glam(&self) -> glam::Mat3 {
        glam::Mat3::from_cols(
            self.column(0).to_glam(),
            self.column(1).to_glam(),
            self.column(2).to_glam(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn narrowing_rules() {
        let v = Vector3::new(2.4, -2.6, 3.0);

        assert_eq!(v.to_vec2(), Vec2::new(2.4, -2.6));
        assert_eq!(v.to_ivec2(), IVec2::new(2, -2));
        assert_eq!(v.to_ivec3(), IVec3::new(2, -2, 3));
        assert_eq!(v.to_uvec2(), UVec2::new(2, 2));
    }

    #[test]
    fn two_dimensional_sources_land_on_z_zero() {
        assert_eq!(Vector3::from_vec2(Vec2::new(1.5, 2.0)), Vector3::new(1.5, 2.0, 0.0));
        assert_eq!(Vector3::from_ivec2(IVec2::new(-3, 4)), Vector3::new(-3.0, 4.0, 0.0));
        assert_eq!(Vector3::from_uvec2(UVec2::new(800, 600)), Vector3::new(800.0, 600.0, 0.0));
        assert_eq!(Vector3::from_ivec3(IVec3::new(1, 2, 3)), Vector3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn glam_round_trip() {
        let v = Vector3::new(0.25, -8.0, 3.5);
        assert_eq!(Vector3::from_glam(v.to_glam()), v);
    }

    #[test]
    fn matrix_agrees_with_glam() {
        let m = Matrix3::rotation_y(0.4) * Matrix3::scale(2.0);
        let v = Vector3::new(1.0, 2.0, 3.0);

        let ours = m * v;
        let theirs = m.to_glam() * v.to_glam();

        assert_abs_diff_eq!(ours.x, theirs.x, epsilon = 1e-5);
        assert_abs_diff_eq!(ours.y, theirs.y, epsilon = 1e-5);
        assert_abs_diff_eq!(ours.z, theirs.z, epsilon = 1e-5);
    }
}
