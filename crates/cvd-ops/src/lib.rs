//! # cvd-ops
//!
//! Image-level operations and dispatch for the cvd-rs pipeline.
//!
//! [`transform_pixels`] and [`apply_lut`] are the two strategies for turning
//! an input image into a processed one - direct per-pixel evaluation of the
//! colour transform, or a lookup through a baked cube. [`dispatch`] fans a
//! requested (operation, deficiency selection) out into concrete runs:
//! bake, optional image render, and LUT export.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod dispatch;
mod error;
mod transform;

pub use dispatch::{dispatch, DispatchOptions};
pub use error::{OpsError, OpsResult};
pub use transform::{apply_lut, produce_image, transform_pixels, RenderPath};
