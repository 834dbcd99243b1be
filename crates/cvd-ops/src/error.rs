//! Error types for pipeline operations.

use thiserror::Error;

/// Result type for pipeline operations.
pub type OpsResult<T> = Result<T, OpsError>;

/// Errors that can occur while dispatching operations.
#[derive(Debug, Error)]
pub enum OpsError {
    /// LUT baking or serialization failed.
    #[error(transparent)]
    Lut(#[from] cvd_lut::LutError),

    /// Image encoding failed.
    #[error(transparent)]
    Io(#[from] cvd_io::IoError),

    /// Output buffer construction failed.
    #[error(transparent)]
    Core(#[from] cvd_core::Error),
}
