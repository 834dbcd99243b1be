//! Bulk pixel transforms.
//!
//! Both paths here are embarrassingly data-parallel: every output pixel
//! depends only on its own input pixel, so rayon parallelism changes
//! nothing observable (collect preserves order, cells never overlap).

use cvd_core::{Color, ImageBuf, Rgba8};
use cvd_lut::CubeLut;
use rayon::prelude::*;

use crate::OpsResult;

/// Applies a per-colour transform directly to every pixel.
///
/// Each pixel is decoded to a normalized colour, transformed, and
/// re-encoded with its original alpha.
pub fn transform_pixels<F>(xform: F, src: &[Rgba8]) -> Vec<Rgba8>
where
    F: Fn(Color) -> Color + Sync,
{
    src.par_iter()
        .map(|&px| Rgba8::from_color_with_alpha(xform(px.to_color()), px.a))
        .collect()
}

/// Maps every pixel through a cube LUT (nearest lookup).
pub fn apply_lut(lut: &CubeLut, src: &[Rgba8]) -> Vec<Rgba8> {
    src.par_iter().map(|&px| lut.apply(px)).collect()
}

/// How an output image is produced from an input image.
///
/// Both strategies yield a transformed image of identical shape; they
/// differ in internals only. `Lut` quantizes through the baked cube,
/// `Direct` evaluates the colour transform per pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderPath {
    /// Map pixels through the baked cube LUT.
    #[default]
    Lut,
    /// Evaluate the colour transform on every pixel (the "no LUT" mode).
    Direct,
}

/// Produces the output image for one dispatch step.
pub fn produce_image<F>(
    path: RenderPath,
    xform: F,
    lut: &CubeLut,
    image: &ImageBuf,
) -> OpsResult<ImageBuf>
where
    F: Fn(Color) -> Color + Sync,
{
    let pixels = match path {
        RenderPath::Lut => apply_lut(lut, image.pixels()),
        RenderPath::Direct => transform_pixels(xform, image.pixels()),
    };
    Ok(ImageBuf::from_pixels(image.width(), image.height(), pixels)?)
}
