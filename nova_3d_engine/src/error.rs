//! Error types for the Nova3D engine
//!
//! This module defines the error types used throughout the engine,
//! including device failures, resource creation and renderer protocol misuse.

use std::fmt;
use crate::renderer::SceneState;

/// Result type for Nova3D engine operations
pub type Result<T> = std::result::Result<T, Error>;

/// Nova3D engine errors
#[derive(Debug, Clone)]
pub enum Error {
    /// Backend-specific error (device, command queue, etc.)
    BackendError(String),

    /// Out of GPU memory
    OutOfMemory,

    /// Invalid resource (texture, buffer, pipeline, etc.)
    InvalidResource(String),

    /// Initialization failed (renderer, pipelines, framebuffers)
    InitializationFailed(String),

    /// Scene-construction call issued in a state that does not allow it
    ProtocolViolation {
        /// Renderer operation that was called (e.g. "submit_mesh")
        operation: &'static str,
        /// State the renderer was in when the call happened
        state: SceneState,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::BackendError(msg) => write!(f, "Backend error: {}", msg),
            Error::OutOfMemory => write!(f, "Out of GPU memory"),
            Error::InvalidResource(msg) => write!(f, "Invalid resource: {}", msg),
            Error::InitializationFailed(msg) => write!(f, "Initialization failed: {}", msg),
            Error::ProtocolViolation { operation, state } => {
                write!(f, "Renderer protocol violation: {} called while {:?}", operation, state)
            }
        }
    }
}

impl std::error::Error for Error {}

// ===== ERROR MACROS =====

/// Log an ERROR message and build an `Error::BackendError` with the same text
///
/// # Example
///
/// ```ignore
/// let tex = device.create_texture(&desc)
///     .map_err(|e| engine_err!("nova3d::Framebuffer", "Failed to create depth texture: {}", e))?;
/// ```
#[macro_export]
macro_rules! engine_err {
    ($source:expr, $($arg:tt)*) => {{
        let message = format!($($arg)*);
        $crate::engine_error!($source, "{}", message);
        $crate::nova3d::Error::BackendError(message)
    }};
}

/// Log an ERROR message and return early with an `Error::BackendError`
///
/// # Example
///
/// ```ignore
/// if mip_levels == 0 {
///     engine_bail!("nova3d::BloomRenderer", "Bloom texture needs at least one mip level");
/// }
/// ```
#[macro_export]
macro_rules! engine_bail {
    ($source:expr, $($arg:tt)*) => {
        return Err($crate::engine_err!($source, $($arg)*))
    };
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
