//! WGSL source for the cube pass, embedded or loaded from disk.
//!
//! A file-backed [`ShaderSource`] remembers the file's modification time and
//! can be polled once per frame with [`ShaderSource::check_reload`]. The cube
//! pass rebuilds its pipeline when that returns `true` and keeps the previous
//! pipeline if the new source fails to compile.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use crate::error::{Error, Result};

/// The shader compiled into the binary.
pub const CUBE_SHADER: &str = include_str!("shaders/cube.wgsl");

/// Where the cube shader comes from.
pub struct ShaderSource {
    origin: Origin,
    source: String,
}

enum Origin {
    Embedded,
    File {
        path: PathBuf,
        last_modified: SystemTime,
    },
}

impl ShaderSource {
    /// The built-in cube shader.
    pub fn embedded() -> Self {
        Self {
            origin: Origin::Embedded,
            source: CUBE_SHADER.to_string(),
        }
    }

    /// Load a shader from the given file path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let io_err = |source| Error::ShaderIo {
            path: path.clone(),
            source,
        };

        let source = fs::read_to_string(&path).map_err(io_err)?;
        let last_modified = fs::metadata(&path)
            .and_then(|m| m.modified())
            .map_err(io_err)?;

        tracing::debug!(path = %path.display(), "loaded shader from disk");
        Ok(Self {
            origin: Origin::File {
                path,
                last_modified,
            },
            source,
        })
    }

    /// Loads `path` if given, falling back to the embedded shader on error.
    pub fn load_or_embedded(path: Option<&Path>) -> Self {
        match path.map(Self::from_file) {
            Some(Ok(shader)) => shader,
            Some(Err(e)) => {
                tracing::warn!("{e}; using built-in shader");
                Self::embedded()
            }
            None => Self::embedded(),
        }
    }

    /// Check if the shader file has been modified and reload if so.
    /// Returns `true` if the shader was reloaded. Always `false` when embedded.
    pub fn check_reload(&mut self) -> bool {
        let Origin::File {
            path,
            last_modified,
        } = &mut self.origin
        else {
            return false;
        };

        let Ok(modified) = fs::metadata(&*path).and_then(|m| m.modified()) else {
            return false;
        };

        if modified > *last_modified {
            if let Ok(source) = fs::read_to_string(&*path) {
                tracing::info!(path = %path.display(), "reloading shader");
                self.source = source;
                *last_modified = modified;
                return true;
            }
        }

        false
    }

    /// Get the current shader source.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Get the shader file path, if file-backed.
    pub fn path(&self) -> Option<&Path> {
        match &self.origin {
            Origin::Embedded => None,
            Origin::File { path, .. } => Some(path),
        }
    }
}
