//! # Spincube
//!
//! **A rainbow cube you spin with the keyboard.**
//!
//! Underneath the window sits a tiny 3D math core, [`Vector3`] and
//! [`Matrix3`], and a per-frame protocol that multiplies small rotation and
//! scale matrices straight into the cube's eight stored corners.
//!
//! ## Quick Start
//!
//! ```no_run
//! fn main() -> spincube::Result<()> {
//!     spincube::run(spincube::AppConfig::new().title("Spincube"))
//! }
//! ```
//!
//! ## Without a window
//!
//! The protocol is plain data and can be driven directly:
//!
//! ```
//! use spincube::{Control, ControlState, CubeState, Matrix3};
//!
//! let mut cube = CubeState::default();
//! let start = cube.vertices.positions();
//!
//! cube.apply(&ControlState::new().with(Control::RotateYPos));
//!
//! let expected = Matrix3::rotation_y(0.001) * start[0];
//! assert_eq!(cube.vertices.positions()[0], expected);
//! ```
//!
//! ## Controls
//!
//! | Keys  | Effect |
//! |-------|--------|
//! | A / D | rotate about Y |
//! | W / S | rotate about X |
//! | Q / E | rotate about Z |
//! | Arrows| move   |
//! | Z / X | shrink / grow |
//! | R     | reset  |
//! | Esc   | quit   |

mod app;
mod camera;
mod controls;
mod cube;
mod cube_pass;
mod error;
mod gpu;
mod input;
pub mod math;
mod rainbow;
mod shader;
mod transform;

pub use app::{AppConfig, run};
pub use camera::Camera;
pub use controls::{Control, ControlState};
pub use cube::{CUBE_INDICES, CubeVertices, VERTEX_COUNT, Vertex};
pub use cube_pass::{CubePass, CubeUniforms};
pub use error::{Error, Result};
pub use gpu::GpuContext;
pub use input::{Input, KeyBindings};
pub use math::{Matrix3, Vector3};
pub use rainbow::Rainbow;
pub use shader::{CUBE_SHADER, ShaderSource};
pub use transform::{CubeState, Increment, TransformSteps, apply_matrix};

// Re-export commonly used winit types for convenience
pub use winit::keyboard::KeyCode;
