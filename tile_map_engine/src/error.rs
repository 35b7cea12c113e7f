//! Error types for the tile map engine
//!
//! This module defines the error types used throughout the engine,
//! including rendering, resource creation, and tile data validation.

use std::fmt;

/// Result type for tile map engine operations
pub type Result<T> = std::result::Result<T, Error>;

/// Tile map engine errors
#[derive(Debug, Clone)]
pub enum Error {
    /// Backend-specific error (draw submission, GPU resource creation)
    BackendError(String),

    /// Out of GPU memory
    OutOfMemory,

    /// Invalid resource (raster buffer, render target, texture)
    InvalidResource(String),

    /// Initialization failed (renderer, subsystems)
    InitializationFailed(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::BackendError(msg) => write!(f, "Backend error: {}", msg),
            Error::OutOfMemory => write!(f, "Out of GPU memory"),
            Error::InvalidResource(msg) => write!(f, "Invalid resource: {}", msg),
            Error::InitializationFailed(msg) => write!(f, "Initialization failed: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

/// Build an `Error::InvalidResource`, logging it through the engine logger.
///
/// # Example
///
/// ```ignore
/// return Err(engine_err!("tilemap::RasterData", "buffer length {} != {}", got, want));
/// ```
#[macro_export]
macro_rules! engine_err {
    ($source:expr, $($arg:tt)*) => {{
        let msg = format!($($arg)*);
        $crate::engine_error!($source, "{}", msg);
        $crate::tilemap::Error::InvalidResource(msg)
    }};
}

/// Log and return an `Error::InvalidResource` from the current function.
///
/// # Example
///
/// ```ignore
/// if pixels.len() != expected {
///     engine_bail!("tilemap::RasterData", "buffer length {} != {}", pixels.len(), expected);
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
