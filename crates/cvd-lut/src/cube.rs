//! 3-dimensional colour lookup table.
//!
//! A cube LUT maps quantized 8-bit RGB input to RGBA output through a dense
//! N³ table of cells. Cells are stored r-major with b fastest-varying, so
//! the in-memory order is exactly the traversal order the serializers use.

use cvd_core::{Color, Rgba8};

use crate::{LutError, LutResult};

/// Default cube size per axis.
///
/// Matches the grid the reference tool shipped with; any size in [1, 256]
/// is accepted at runtime.
pub const DEFAULT_SIZE: usize = 32;

/// Representative 8-bit channel value for grid index `i` at cube size `size`.
///
/// The value is the midpoint of the i-th of `size` equal sub-intervals of
/// [0, 255]: `i * (256 / size) + (256 / size) / 2`, clamped to the 8-bit
/// range. Integer arithmetic keeps the result reproducible for a given size.
#[inline]
pub fn grid_value(i: usize, size: usize) -> u8 {
    let scale = 256 / size;
    let offset = scale / 2;
    (i * scale + offset).min(255) as u8
}

/// Grid index selected by 8-bit channel value `v` at cube size `size`.
///
/// Inverse of [`grid_value`]: the index of the sub-interval of [0, 255]
/// containing `v`. Always in [0, size).
#[inline]
pub fn grid_index(v: u8, size: usize) -> usize {
    v as usize * size / 256
}

/// Interpolation method for LUT application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Interpolation {
    /// Nearest cell (no interpolation). Matches the reference applicator.
    #[default]
    Nearest,

    /// Trilinear blend of the 8 surrounding cells.
    Trilinear,
}

/// A dense N³ colour lookup table of 8-bit RGBA cells.
///
/// # Example
///
/// ```rust
/// use cvd_lut::bake;
///
/// let lut = bake(16, |c| c).unwrap();
/// let px = cvd_core::Rgba8::new(200, 100, 50, 128);
/// let out = lut.apply(px);
/// assert_eq!(out.a, 128); // alpha passes through
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CubeLut {
    /// Cells in r-major order: `idx = (r * size + g) * size + b`.
    data: Vec<Rgba8>,
    size: usize,
}

impl CubeLut {
    /// Creates a cube from raw cell data.
    ///
    /// Data must be r-major (b fastest) with exactly `size³` entries, for a
    /// size in [1, 256].
    pub fn from_data(data: Vec<Rgba8>, size: usize) -> LutResult<Self> {
        if size == 0 || size > 256 {
            return Err(LutError::InvalidSize(format!(
                "cube size must be in [1, 256], got {size}"
            )));
        }
        let expected = size * size * size;
        if data.len() != expected {
            return Err(LutError::InvalidSize(format!(
                "expected {} cells for size {}, got {}",
                expected,
                size,
                data.len()
            )));
        }
        Ok(Self { data, size })
    }

    /// Cube size per axis.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Total number of cells (`size³`).
    #[inline]
    pub fn entry_count(&self) -> usize {
        self.data.len()
    }

    /// Borrows the cells in traversal order (r outer, g middle, b inner).
    #[inline]
    pub fn data(&self) -> &[Rgba8] {
        &self.data
    }

    #[inline]
    fn index(&self, r: usize, g: usize, b: usize) -> usize {
        (r * self.size + g) * self.size + b
    }

    /// Cell at grid position (r, g, b).
    #[inline]
    pub fn get(&self, r: usize, g: usize, b: usize) -> Rgba8 {
        self.data[self.index(r, g, b)]
    }

    /// Maps a pixel through the cube with nearest lookup.
    ///
    /// Alpha is taken from the input pixel, untouched.
    #[inline]
    pub fn apply(&self, px: Rgba8) -> Rgba8 {
        self.apply_with(px, Interpolation::Nearest)
    }

    /// Maps a pixel through the cube with the given interpolation.
    ///
    /// Alpha is taken from the input pixel, untouched.
    pub fn apply_with(&self, px: Rgba8, interp: Interpolation) -> Rgba8 {
        match interp {
            Interpolation::Nearest => self.apply_nearest(px),
            Interpolation::Trilinear => self.apply_trilinear(px),
        }
    }

    fn apply_nearest(&self, px: Rgba8) -> Rgba8 {
        let n = self.size;
        let cell = self.get(grid_index(px.r, n), grid_index(px.g, n), grid_index(px.b, n));
        Rgba8::new(cell.r, cell.g, cell.b, px.a)
    }

    fn apply_trilinear(&self, px: Rgba8) -> Rgba8 {
        let n = self.size;
        let scale = (256 / n) as f32;

        // Continuous grid coordinate in the midpoint-sample convention:
        // cell i is centred at channel value (i + 0.5) * scale.
        let coord = |v: u8| {
            let t = (v as f32 / scale - 0.5).clamp(0.0, (n - 1) as f32);
            let i0 = t.floor() as usize;
            let i1 = (i0 + 1).min(n - 1);
            (i0, i1, t - i0 as f32)
        };

        let (r0, r1, rf) = coord(px.r);
        let (g0, g1, gf) = coord(px.g);
        let (b0, b1, bf) = coord(px.b);

        let lerp = |a: Color, b: Color, t: f32| a + (b - a) * t;

        let c00 = lerp(self.get(r0, g0, b0).to_color(), self.get(r0, g0, b1).to_color(), bf);
        let c01 = lerp(self.get(r0, g1, b0).to_color(), self.get(r0, g1, b1).to_color(), bf);
        let c10 = lerp(self.get(r1, g0, b0).to_color(), self.get(r1, g0, b1).to_color(), bf);
        let c11 = lerp(self.get(r1, g1, b0).to_color(), self.get(r1, g1, b1).to_color(), bf);

        let c0 = lerp(c00, c01, gf);
        let c1 = lerp(c10, c11, gf);

        Rgba8::from_color_with_alpha(lerp(c0, c1, rf), px.a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bake;

    #[test]
    fn grid_value_midpoints() {
        // 16 sub-intervals of width 16: midpoints 8, 24, ..., 248.
        assert_eq!(grid_value(0, 16), 8);
        assert_eq!(grid_value(1, 16), 24);
        assert_eq!(grid_value(15, 16), 248);

        // 32 sub-intervals of width 8: midpoints 4, 12, ..., 252.
        assert_eq!(grid_value(0, 32), 4);
        assert_eq!(grid_value(31, 32), 252);
    }

    #[test]
    fn grid_index_inverts_grid_value() {
        for size in [3, 16, 32, 64] {
            for i in 0..size {
                assert_eq!(grid_index(grid_value(i, size), size), i, "size {size} index {i}");
            }
        }
    }

    #[test]
    fn grid_index_covers_full_range() {
        for size in [16, 32] {
            assert_eq!(grid_index(0, size), 0);
            assert_eq!(grid_index(255, size), size - 1);
        }
    }

    #[test]
    fn from_data_rejects_wrong_length() {
        let err = CubeLut::from_data(vec![Rgba8::default(); 7], 2);
        assert!(matches!(err, Err(LutError::InvalidSize(_))));
    }

    #[test]
    fn from_data_rejects_out_of_range_sizes() {
        let err = CubeLut::from_data(Vec::new(), 0);
        assert!(matches!(err, Err(LutError::InvalidSize(_))));
        let err = CubeLut::from_data(vec![Rgba8::default(); 8], 300);
        assert!(matches!(err, Err(LutError::InvalidSize(_))));
    }

    #[test]
    fn nearest_apply_preserves_alpha() {
        let lut = bake(16, |c| c).unwrap();
        let out = lut.apply(Rgba8::new(10, 200, 30, 99));
        assert_eq!(out.a, 99);
    }

    #[test]
    fn nearest_apply_returns_cell_colour() {
        let lut = bake(16, |c| c).unwrap();
        // 100 falls in sub-interval 6 (96..112), whose midpoint is 104.
        let out = lut.apply(Rgba8::opaque(100, 100, 100));
        assert_eq!((out.r, out.g, out.b), (104, 104, 104));
    }

    #[test]
    fn trilinear_identity_at_cell_midpoint() {
        let lut = bake(16, |c| c).unwrap();
        let px = Rgba8::opaque(104, 8, 248);
        let out = lut.apply_with(px, Interpolation::Trilinear);
        assert_eq!((out.r, out.g, out.b), (104, 8, 248));
    }

    #[test]
    fn trilinear_blends_between_cells() {
        let lut = bake(16, |c| c).unwrap();
        // 112 sits halfway between the midpoints 104 and 120.
        let out = lut.apply_with(Rgba8::opaque(112, 112, 112), Interpolation::Trilinear);
        assert_eq!((out.r, out.g, out.b), (112, 112, 112));
    }
}
