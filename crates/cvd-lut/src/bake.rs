//! Baking a per-colour transform into a cube LUT.

use cvd_core::{Color, Rgba8};

use crate::cube::{grid_value, CubeLut};
use crate::{LutError, LutResult};

/// Samples `xform` over an N³ grid to produce a [`CubeLut`].
///
/// Every cell (r, g, b) is populated by reconstructing the representative
/// 8-bit colour for that cell (see [`grid_value`](crate::grid_value)),
/// normalizing it, applying the transform, and re-encoding with alpha fixed
/// fully opaque. The transform is assumed total over the input domain;
/// the only failure is a size outside [1, 256].
///
/// Baking is deterministic: the same `size` and transform always produce a
/// byte-identical cube.
pub fn bake<F>(size: usize, xform: F) -> LutResult<CubeLut>
where
    F: Fn(Color) -> Color,
{
    if size == 0 || size > 256 {
        return Err(LutError::InvalidSize(format!(
            "cube size must be in [1, 256], got {size}"
        )));
    }

    let mut data = Vec::with_capacity(size * size * size);
    for r in 0..size {
        for g in 0..size {
            for b in 0..size {
                let base = Rgba8::opaque(
                    grid_value(r, size),
                    grid_value(g, size),
                    grid_value(b, size),
                );
                data.push(Rgba8::from_color(xform(base.to_color())));
            }
        }
    }

    CubeLut::from_data(data, size)
}
