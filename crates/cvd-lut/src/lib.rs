//! # cvd-lut
//!
//! Cube LUT types and serialization for the cvd-rs pipeline.
//!
//! A [`CubeLut`] is a dense N³ table of 8-bit RGBA cells indexed by
//! quantized (r, g, b) grid coordinates. [`bake`] samples an arbitrary
//! per-colour transform over the grid; the [`csv`] and [`packed`] modules
//! serialize the result into the two interchange formats.
//!
//! # Grid convention
//!
//! Grid coordinate `i` samples the source channel value at the midpoint of
//! the i-th of N equal sub-intervals of [0, 255]:
//! `i * (256 / N) + (256 / N) / 2`, clamped to the 8-bit range. Application
//! inverts that: channel value `v` selects grid index `v * N / 256`. Both
//! serializers traverse cells with r outermost and b fastest-varying, the
//! same order the cube is stored in, so CSV and binary exports are
//! index-consistent.
//!
//! # Usage
//!
//! ```rust
//! use cvd_lut::{bake, CubeLut};
//!
//! // Bake a channel-inverting transform into a 16^3 cube.
//! let lut = bake(16, |c| cvd_core::Color::new(1.0 - c.r, 1.0 - c.g, 1.0 - c.b)).unwrap();
//! assert_eq!(lut.entry_count(), 4096);
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod bake;
mod cube;
mod error;
pub mod csv;
pub mod packed;

pub use bake::bake;
pub use cube::{grid_index, grid_value, CubeLut, Interpolation, DEFAULT_SIZE};
pub use error::{LutError, LutResult};
