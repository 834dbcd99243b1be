//! Dichromacy simulation and the two error-redistribution corrections.

use cvd_core::{Color, Mat3};

use crate::lms::{lms_from_rgb, rgb_from_lms};
use crate::Deficiency;

// Dichromat projections in LMS space: the missing cone response is
// reconstructed as a linear combination of the two surviving ones, the
// other rows are identity.
const PROTANOPE_PROJECTION: Mat3 = Mat3::from_rows([
    [0.0, 2.02344, -2.52581],
    [0.0, 1.0, 0.0],
    [0.0, 0.0, 1.0],
]);

const DEUTERANOPE_PROJECTION: Mat3 = Mat3::from_rows([
    [1.0, 0.0, 0.0],
    [0.494207, 0.0, 1.24827],
    [0.0, 0.0, 1.0],
]);

const TRITANOPE_PROJECTION: Mat3 = Mat3::from_rows([
    [1.0, 0.0, 0.0],
    [0.0, 1.0, 0.0],
    [-0.395913, 0.801109, 0.0],
]);

// Fidaner error redistribution: the invisible red-green error is shifted
// into the green and blue channels.
const DALTONIZE_REDISTRIBUTION: Mat3 = Mat3::from_rows([
    [0.0, 0.0, 0.0],
    [0.7, 1.0, 0.0],
    [0.7, 0.0, 1.0],
]);

// Correction variant: weights the short-wavelength channel harder so the
// lost contrast lands on the blue-yellow axis.
const CORRECT_REDISTRIBUTION: Mat3 = Mat3::from_rows([
    [0.0, 0.0, 0.0],
    [0.5, 1.0, 0.0],
    [1.0, 0.0, 1.0],
]);

impl Deficiency {
    /// LMS-space projection replacing the affected cone channel.
    pub(crate) fn projection(self) -> Mat3 {
        match self {
            Deficiency::Protanope => PROTANOPE_PROJECTION,
            Deficiency::Deuteranope => DEUTERANOPE_PROJECTION,
            Deficiency::Tritanope => TRITANOPE_PROJECTION,
        }
    }
}

/// Simulates how a dichromat perceives a colour.
///
/// The colour is taken to LMS, the affected cone channel is replaced by its
/// projection onto the surviving two, and the result is blended with the
/// original response by `strength`: 0.0 leaves the colour unchanged, 1.0
/// means the affected channel contributes nothing of its own.
pub fn simulate(c: Color, deficiency: Deficiency, strength: f32) -> Color {
    let lms = lms_from_rgb(c);
    let dichromat = deficiency.projection() * lms;
    rgb_from_lms(lms + (dichromat - lms) * strength)
}

/// Daltonizes a colour for a dichromat viewer (Fidaner).
///
/// The perceptual error `c - simulate(c)` is redistributed into the
/// channels the viewer still resolves. The result is deliberately not
/// clamped; out-of-gamut values carry information for downstream stages.
pub fn daltonize(c: Color, deficiency: Deficiency, strength: f32) -> Color {
    let err = c - simulate(c, deficiency, strength);
    c + DALTONIZE_REDISTRIBUTION * err
}

/// Corrects a colour for a dichromat viewer.
///
/// Same error-redistribution shape as [`daltonize`], with a modulation that
/// pushes more of the lost red-green contrast into the short-wavelength
/// channel. Unclamped, like [`daltonize`].
pub fn correct(c: Color, deficiency: Deficiency, strength: f32) -> Color {
    let err = c - simulate(c, deficiency, strength);
    c + CORRECT_REDISTRIBUTION * err
}
