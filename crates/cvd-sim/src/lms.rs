//! LMS cone-space conversion.
//!
//! LMS aligns the colour representation to the three human photoreceptor
//! response curves (Long/Medium/Short wavelength), which is where dichromacy
//! is naturally expressed: a missing cone class is a missing axis.
//!
//! The matrices are the Viénot et al. RGB-LMS pair commonly used for
//! dichromat simulation.

use cvd_core::{Color, Mat3};

/// RGB to LMS cone response.
pub const LMS_FROM_RGB: Mat3 = Mat3::from_rows([
    [17.8824, 43.5161, 4.11935],
    [3.45565, 27.1554, 3.86714],
    [0.0299566, 0.184309, 1.46709],
]);

/// LMS cone response back to RGB. Inverse of [`LMS_FROM_RGB`].
pub const RGB_FROM_LMS: Mat3 = Mat3::from_rows([
    [0.0809444479, -0.130504409, 0.116721066],
    [-0.0102485335, 0.0540193266, -0.113614708],
    [-0.000365296938, -0.00412161469, 0.693511405],
]);

/// Converts a normalized RGB colour to LMS cone responses.
///
/// The returned [`Color`] carries (L, M, S) in its three channels.
#[inline]
pub fn lms_from_rgb(c: Color) -> Color {
    LMS_FROM_RGB * c
}

/// Converts LMS cone responses back to normalized RGB.
#[inline]
pub fn rgb_from_lms(lms: Color) -> Color {
    RGB_FROM_LMS * lms
}
