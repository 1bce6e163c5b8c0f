//! The cube's vertex data: eight colored corners and a fixed triangle list.
//!
//! # Vertex Layout
//!
//! [`Vertex`] is uploaded to the GPU as-is (28 bytes per vertex):
//!
//! | Attribute  | Format    | Offset | Shader Location |
//! |------------|-----------|--------|-----------------|
//! | coordinate | Float32x3 | 0      | 0               |
//! | color      | Float32x4 | 12     | 1               |
//!
//! # Corners
//!
//! ```text
//!        5 -------- 6
//!       /|         /|
//!      0 -------- 2 |        y
//!      | 4 -------|-7        |
//!      |/         |/         +-- x
//!      1 -------- 3         /
//!                          z
//! ```
//!
//! Front faces wind counter-clockwise when seen from outside the cube.

use crate::math::Vector3;

/// Number of corners in the cube. The buffer never grows or shrinks.
pub const VERTEX_COUNT: usize = 8;

/// Triangle list over [`CubeVertices`], two triangles per face.
pub const CUBE_INDICES: [u16; 36] = [
    1, 3, 0, //
    3, 2, 0, //
    5, 4, 0, //
    4, 1, 0, //
    7, 6, 3, //
    6, 2, 3, //
    6, 5, 2, //
    5, 0, 2, //
    5, 6, 4, //
    6, 7, 4, //
    4, 7, 1, //
    1, 7, 3, //
];

/// A cube corner: position plus RGBA color.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub coordinate: [f32; 3],
    pub color: [f32; 4],
}

impl Vertex {
    pub const LAYOUT: wgpu::VertexBufferLayout<'static> = wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<Vertex>() as u64,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &[
            // coordinate
            wgpu::VertexAttribute {
                offset: 0,
                shader_location: 0,
                format: wgpu::VertexFormat::Float32x3,
            },
            // color
            wgpu::VertexAttribute {
                offset: 12,
                shader_location: 1,
                format: wgpu::VertexFormat::Float32x4,
            },
        ],
    };

    pub const fn new(coordinate: [f32; 3], color: [f32; 4]) -> Self {
        Self { coordinate, color }
    }

    /// The stored coordinate as a math vector.
    pub fn position(&self) -> Vector3 {
        Vector3::from_array(self.coordinate)
    }

    pub fn set_position(&mut self, position: Vector3) {
        self.coordinate = position.to_array();
    }
}

const RED: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
const GREEN: [f32; 4] = [0.0, 1.0, 0.0, 1.0];
const BLUE: [f32; 4] = [0.0, 0.0, 1.0, 1.0];

/// The eight-vertex buffer the transform protocol rewrites every frame.
///
/// Backed by a fixed-size array, so the vertex count is enforced by the type.
#[derive(Clone, Debug, PartialEq)]
pub struct CubeVertices {
    vertices: [Vertex; VERTEX_COUNT],
}

impl Default for CubeVertices {
    fn default() -> Self {
        Self {
            vertices: [
                Vertex::new([-0.5, 0.5, 0.5], RED),
                Vertex::new([-0.5, -0.5, 0.5], RED),
                Vertex::new([0.5, 0.5, 0.5], RED),
                Vertex::new([0.5, -0.5, 0.5], GREEN),
                Vertex::new([-0.5, -0.5, -0.5], GREEN),
                Vertex::new([-0.5, 0.5, -0.5], GREEN),
                Vertex::new([0.5, 0.5, -0.5], BLUE),
                Vertex::new([0.5, -0.5, -0.5], BLUE),
            ],
        }
    }
}

impl CubeVertices {
    /// A unit cube centered on the origin.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_vertices(vertices: [Vertex; VERTEX_COUNT]) -> Self {
        Self { vertices }
    }

    pub fn as_slice(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn iter(&self) -> impl Iterator<Item = &Vertex> {
        self.vertices.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Vertex> {
        self.vertices.iter_mut()
    }

    /// All corner positions, in buffer order.
    pub fn positions(&self) -> [Vector3; VERTEX_COUNT] {
        self.vertices.map(|v| v.position())
    }

    /// Raw bytes for GPU upload.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }
}
