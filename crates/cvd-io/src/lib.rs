//! # cvd-io
//!
//! Image I/O for the cvd-rs pipeline.
//!
//! Only PNG is supported: input images decode to RGBA8
//! ([`ImageBuf`](cvd_core::ImageBuf)), outputs encode as 8-bit RGBA.
//! Decode failures surface as typed [`IoError`]s so the caller can treat an
//! unreadable input as fatal before any processing starts.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
pub mod png;

pub use error::{IoError, IoResult};
