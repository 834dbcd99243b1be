//! # cvd-core
//!
//! Core types for colour-vision-deficiency (CVD) processing.
//!
//! This crate provides the foundational value types used throughout the
//! cvd-rs workspace:
//!
//! - [`Color`] - Normalized floating-point RGB triple
//! - [`Mat3`] - 3x3 matrix for linear colour transforms
//! - [`Rgba8`] - 8-bit RGBA pixel with alpha pass-through conversions
//! - [`ImageBuf`] - Owned RGBA8 image buffer with checked dimensions
//!
//! ## Crate Structure
//!
//! This crate is the foundation of cvd-rs and has no internal dependencies.
//! All other cvd-rs crates depend on `cvd-core`:
//!
//! ```text
//! cvd-core (this crate)
//!    ^
//!    |
//!    +-- cvd-sim (deficiency simulation and correction)
//!    +-- cvd-lut (cube LUT baking and serialization)
//!    +-- cvd-io  (image I/O)
//!    +-- cvd-ops (bulk transforms and dispatch)
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod color;
pub mod error;
pub mod image;
pub mod pixel;

pub use color::{Color, Mat3};
pub use error::{Error, Result};
pub use image::ImageBuf;
pub use pixel::Rgba8;
