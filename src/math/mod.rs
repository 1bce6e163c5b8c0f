//! Small 3D math core: [`Vector3`], [`Matrix3`] and the conversions that
//! connect them to the `glam` types used by the windowing and GPU layers.
//!
//! Nothing in here can fail. Degenerate inputs (zero-length vectors, zero
//! divisors, singular matrices, out-of-range indices) resolve to documented
//! sentinel values; see the module docs of [`vector3`] and [`matrix3`].

pub mod interop;
pub mod matrix3;
pub mod vector3;

pub use matrix3::Matrix3;
pub use vector3::Vector3;
