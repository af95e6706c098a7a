//! Error types for the webgl-kit core.

use thiserror::Error;

/// Errors produced by surface generation, color parsing and export.
#[derive(Debug, Error)]
pub enum KitError {
    /// Width or height was zero, or the pixel buffer size overflowed.
    #[error("invalid dimensions: width and height must be non-zero")]
    InvalidDimensions,

    /// A pixel buffer did not match `width * height * 4` bytes.
    #[error("pixel buffer length {got} does not match {width}x{height} RGBA ({expected} bytes)")]
    BufferSizeMismatch {
        width: usize,
        height: usize,
        expected: usize,
        got: usize,
    },

    /// A color string could not be parsed.
    #[error("invalid color: {0}")]
    InvalidColor(String),

    /// A requested surface name is not registered.
    #[error("unknown surface: {0}")]
    UnknownSurface(String),

    /// Writing a surface to disk failed.
    #[error("i/o error: {0}")]
    Io(String),
}
