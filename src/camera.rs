use glam::{Mat4, Vec3};

use crate::math::Vector3;

/// The fixed perspective the cube is viewed through.
///
/// The eye sits at the origin looking down -Z; the cube is pushed
/// `distance` units into the screen before its own offset is applied.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Camera {
    pub fov: f32, // radians
    pub near: f32,
    pub far: f32,
    pub distance: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            fov: 45f32.to_radians(),
            near: 1.0,
            far: 500.0,
            distance: 8.0,
        }
    }
}

impl Camera {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_fov(mut self, fov_degrees: f32) -> Self {
        self.fov = fov_degrees.to_radians();
        self
    }

    pub fn at_distance(mut self, distance: f32) -> Self {
        self.distance = distance;
        self
    }

    /// Perspective projection for the given aspect ratio.
    pub fn projection(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh(self.fov, aspect, self.near, self.far)
    }

    /// Places the cube in front of the eye, moved by its accumulated `offset`.
    pub fn model(&self, offset: Vector3) -> Mat4 {
        Mat4::from_translation(Vec3::new(0.0, 0.0, -self.distance) + offset.to_glam())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn model_applies_distance_then_offset() {
        let camera = Camera::new();
        let m = camera.model(Vector3::new(0.25, -0.5, 0.0));
        let p = m.transform_point3(Vec3::ZERO);

        assert_abs_diff_eq!(p.x, 0.25);
        assert_abs_diff_eq!(p.y, -0.5);
        assert_abs_diff_eq!(p.z, -8.0);
    }

    #[test]
    fn cube_center_projects_to_screen_center() {
        let camera = Camera::new();
        let clip = camera.projection(800.0 / 600.0)
            * camera.model(Vector3::ZERO)
            * glam::Vec4::new(0.0, 0.0, 0.0, 1.0);
        let ndc = clip.truncate() / clip.w;

        assert_abs_diff_eq!(ndc.x, 0.0);
        assert_abs_diff_eq!(ndc.y, 0.0);
        assert!((0.0..=1.0).contains(&ndc.z));
    }
}
