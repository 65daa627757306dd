//! Error types for pulse-viz operations.

use std::io;
use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in pulse-viz operations.
#[derive(Error, Debug)]
pub enum Error {
    /// The renderer has no drawing surface bound to it.
    #[error("drawing surface unavailable")]
    SurfaceUnavailable,

    /// Invalid dimensions for a surface or framebuffer.
    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions {
        /// Width value.
        width: u32,
        /// Height value.
        height: u32,
    },

    /// Scale domain error (degenerate domain).
    #[error("Scale domain error: {0}")]
    ScaleDomain(String),

    /// I/O error (file operations, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// PNG encoding error.
    #[error("PNG encoding error: {0}")]
    PngEncoding(#[from] png::EncodingError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidDimensions {
            width: 0,
            height: 100,
        };
        assert!(err.to_string().contains("Invalid dimensions"));
    }

    #[test]
    fn test_surface_unavailable_display() {
        let err = Error::SurfaceUnavailable;
        assert!(err.to_string().contains("unavailable"));
    }

}
