//! Per-frame application of incremental transforms to the cube.
//!
//! There is no stored orientation. Each frame, every active rotation or scale
//! control builds a small matrix and that matrix is multiplied straight into
//! all eight stored coordinates. Whatever the cube looks like now is the
//! product of every increment applied since startup.
//!
//! Two consequences worth knowing:
//!
//! - Several active controls make several full passes over the buffer, one
//!   per matrix, in [`Control`] declaration order. Holding D and X gives
//!   `scale(1.0001) * (rotation_y(0.001) * v)`, not a blend.
//! - Float error accumulates. After many thousands of frames the corners are
//!   no longer an exact rotation of the original cube. This is left as is.
//!
//! Translation controls do not touch the coordinates. They move a separate
//! [`CubeState::offset`] that the renderer applies as a model matrix.

use crate::controls::{Control, ControlState};
use crate::cube::CubeVertices;
use crate::math::{Matrix3, Vector3};

/// Per-frame increment sizes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransformSteps {
    /// Rotation per frame, radians.
    pub rotation: f32,
    /// Offset per frame, world units.
    pub translation: f32,
    /// Scale factor per frame while shrinking.
    pub scale_down: f32,
    /// Scale factor per frame while growing.
    pub scale_up: f32,
}

impl Default for TransformSteps {
    fn default() -> Self {
        Self {
            rotation: 0.001,
            translation: 0.001,
            scale_down: 0.9999,
            scale_up: 1.0001,
        }
    }
}

/// What a single control contributes in one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Increment {
    /// Multiplied into every vertex coordinate.
    Linear(Matrix3),
    /// Added to the accumulated draw offset.
    Offset(Vector3),
}

impl TransformSteps {
    pub fn increment(&self, control: Control) -> Increment {
        let r = self.rotation;
        let t = self.translation;

        match control {
            Control::RotateYNeg => Increment::Linear(Matrix3::rotation_y(-r)),
            Control::RotateYPos => Increment::Linear(Matrix3::rotation_y(r)),
            Control::RotateXNeg => Increment::Linear(Matrix3::rotation_x(-r)),
            Control::RotateXPos => Increment::Linear(Matrix3::rotation_x(r)),
            Control::RotateZPos => Increment::Linear(Matrix3::rotation_z(r)),
            Control::RotateZNeg => Increment::Linear(Matrix3::rotation_z(-r)),
            Control::TranslateUp => Increment::Offset(Vector3::new(0.0, t, 0.0)),
            Control::TranslateDown => Increment::Offset(Vector3::new(0.0, -t, 0.0)),
            Control::TranslateLeft => Increment::Offset(Vector3::new(-t, 0.0, 0.0)),
            Control::TranslateRight => Increment::Offset(Vector3::new(t, 0.0, 0.0)),
            Control::ScaleDown => Increment::Linear(Matrix3::scale(self.scale_down)),
            Control::ScaleUp => Increment::Linear(Matrix3::scale(self.scale_up)),
        }
    }
}

/// Left-multiplies every coordinate in `vertices` by `matrix`, in place.
///
/// Colors are untouched and the vertex count never changes.
pub fn apply_matrix(vertices: &mut CubeVertices, matrix: &Matrix3) {
    for vertex in vertices.iter_mut() {
        let transformed = *matrix * vertex.position();
        vertex.set_position(transformed);
    }
}

/// Everything the frame loop mutates: the vertex buffer and the draw offset.
///
/// Owned by the application and lent out by `&mut`. The protocol writes it in
/// [`apply`](Self::apply); the renderer reads it afterwards in the same frame.
#[derive(Clone, Debug, PartialEq)]
pub struct CubeState {
    pub vertices: CubeVertices,
    /// Accumulated translation, applied at draw time.
    pub offset: Vector3,
    pub steps: TransformSteps,
}

impl Default for CubeState {
    fn default() -> Self {
        Self::new(TransformSteps::default())
    }
}

impl CubeState {
    pub fn new(steps: TransformSteps) -> Self {
        Self {
            vertices: CubeVertices::new(),
            offset: Vector3::ZERO,
            steps,
        }
    }

    /// Runs one frame of the protocol for the given controls.
    ///
    /// Returns the number of full vertex passes performed (one per active
    /// rotation or scale control).
    pub fn apply(&mut self, controls: &ControlState) -> usize {
        if controls.is_empty() {
            return 0;
        }
        tracing::trace!(?controls, "applying controls");

        let mut passes = 0;
        for control in controls.active() {
            match self.steps.increment(control) {
                Increment::Linear(matrix) => {
                    apply_matrix(&mut self.vertices, &matrix);
                    passes += 1;
                }
                Increment::Offset(delta) => self.offset += delta,
            }
        }
        passes
    }

    /// Puts the cube back at its starting pose and position.
    pub fn reset(&mut self) {
        self.vertices = CubeVertices::new();
        self.offset = Vector3::ZERO;
    }
}
