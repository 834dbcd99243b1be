//! Error types for cvd-core operations.

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur constructing core buffer types.
#[derive(Debug, Error)]
pub enum Error {
    /// Pixel buffer length does not match the stated dimensions.
    #[error("dimension mismatch: {width}x{height} needs {expected} pixels, got {got}")]
    DimensionMismatch {
        /// Image width in pixels.
        width: u32,
        /// Image height in pixels.
        height: u32,
        /// Expected pixel count (width * height).
        expected: usize,
        /// Actual pixel count supplied.
        got: usize,
    },
}
