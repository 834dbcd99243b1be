//! # cvd-sim
//!
//! Colour-vision-deficiency modelling: dichromacy simulation, daltonization,
//! and correction.
//!
//! All three operations share one shape - a pure function from a normalized
//! [`Color`](cvd_core::Color) plus a [`Deficiency`] and a strength to a new
//! colour - and the rest of the workspace only ever consumes them through
//! that shape (see [`transform_for`]). Swapping in a different colorimetric
//! model means replacing this crate, nothing else.
//!
//! # Model
//!
//! Colours are projected into LMS cone space, the cone channel missing for
//! the given dichromat subtype is reconstructed from the two remaining ones,
//! and the result is blended with the original by `strength` before
//! projecting back to RGB ([`simulate`]). Daltonization computes the error a
//! deficient viewer cannot see and redistributes it into the channels they
//! can ([`daltonize`], [`correct`]).
//!
//! # Usage
//!
//! ```rust
//! use cvd_core::Color;
//! use cvd_sim::{simulate, Deficiency};
//!
//! let seen = simulate(Color::new(0.8, 0.2, 0.1), Deficiency::Protanope, 1.0);
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod deficiency;
mod lms;
mod op;
mod simulate;

pub use deficiency::{Deficiency, Selection};
pub use lms::{lms_from_rgb, rgb_from_lms};
pub use op::{transform_for, Operation};
pub use simulate::{correct, daltonize, simulate};
