//! Errors raised by the window, GPU and shader layers.
//!
//! The math core never fails; only the application shell returns these.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for application operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while starting or running the demo.
#[derive(Debug, Error)]
pub enum Error {
    /// The winit event loop could not be created or exited abnormally.
    #[error("event loop error: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),

    /// The window could not be created.
    #[error("failed to create window: {0}")]
    CreateWindow(#[from] winit::error::OsError),

    /// wgpu could not create a surface for the window.
    #[error("failed to create surface: {0}")]
    CreateSurface(#[from] wgpu::CreateSurfaceError),

    /// No adapter compatible with the surface was found.
    #[error("no suitable GPU adapter: {0}")]
    RequestAdapter(#[from] wgpu::RequestAdapterError),

    /// The adapter refused to create a device.
    #[error("failed to create device: {0}")]
    RequestDevice(#[from] wgpu::RequestDeviceError),

    /// A shader file could not be read.
    #[error("failed to read shader '{path}': {source}")]
    ShaderIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// WGSL failed validation or the pipeline could not be built.
    #[error("shader compilation failed: {0}")]
    ShaderCompile(String),
}
