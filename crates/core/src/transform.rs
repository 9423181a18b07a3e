//! Pure conversions between sRGB, linear RGB, OKLab and OKLCh.
//!
//! The chain is `Srgb <-> LinearRgb <-> OkLab <-> OkLch`. Steps that can leave
//! the sRGB gamut return `Result` and fail with
//! [`ColorError::NotRepresentable`] when a channel would have to be negative;
//! the pure matrix and polar steps are infallible.
//!
//! The matrices are Björn Ottosson's published OKLab constants; the linear RGB
//! and LMS pair invert each other to ~1e-10.

use glam::{DMat3, DVec3};

use crate::color::{LinearRgb, OkLab, OkLch, Srgb};
use crate::error::ColorError;

/// Linear sRGB to cone response (LMS), row-major.
pub const RGB_TO_LMS: [[f64; 3]; 3] = [
    [0.4122214708, 0.5363325363, 0.0514459929],
    [0.2119034982, 0.6806995451, 0.1073969566],
    [0.0883024619, 0.2817188376, 0.6299787005],
];

/// Non-linear LMS' to (L, a, b), row-major.
pub const LMS_TO_LAB: [[f64; 3]; 3] = [
    [0.2104542553, 0.7936177850, -0.0040720468],
    [1.9779984951, -2.4285922050, 0.4505937099],
    [0.0259040371, 0.7827717662, -0.8086757660],
];

/// (L, a, b) back to non-linear LMS', row-major.
pub const LAB_TO_LMS: [[f64; 3]; 3] = [
    [1.0, 0.3963377774, 0.2158037573],
    [1.0, -0.1055613458, -0.0638541728],
    [1.0, -0.0894841775, -1.2914855480],
];

/// LMS back to linear sRGB, row-major.
pub const LMS_TO_RGB: [[f64; 3]; 3] = [
    [4.0767416621, -3.3077115913, 0.2309699292],
    [-1.2684380046, 2.6097574011, -0.3413193965],
    [-0.0041960863, -0.7034186147, 1.7076147010],
];

/// Chroma below this is treated as achromatic and gets hue 0.
const ACHROMATIC_CHROMA: f64 = 1e-10;

/// Negative channels down to this size are rounding noise from the matrix
/// round-trip and clamp to 0; anything below is out of gamut.
pub const GAMUT_EPSILON: f64 = 1e-6;

/// Builds a glam matrix from a row-major table.
fn row_major(rows: &[[f64; 3]; 3]) -> DMat3 {
    // glam reads each inner array as a column
    DMat3::from_cols_array_2d(rows).transpose()
}

// -- gamma --

/// Decodes one gamma-encoded sRGB component to linear light.
pub fn srgb_component_to_linear(c: f64) -> f64 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Encodes one linear-light component with the sRGB transfer curve.
pub fn linear_component_to_srgb(c: f64) -> f64 {
    if c <= 0.0031308 {
        12.92 * c
    } else {
        1.055 * c.powf(1.0 / 2.4) - 0.055
    }
}

/// True if a channel is NaN, infinite, or negative beyond rounding noise.
fn outside_gamut(channels: [f64; 3]) -> bool {
    channels
        .iter()
        .any(|&c| !c.is_finite() || c < -GAMUT_EPSILON)
}

/// Converts sRGB to linear RGB, clamping the result to [0, 1].
///
/// Returns `ColorError::NotRepresentable` if any input channel is negative
/// (beyond [`GAMUT_EPSILON`]) or not finite.
pub fn srgb_to_linear(c: Srgb) -> Result<LinearRgb, ColorError> {
    if outside_gamut([c.r, c.g, c.b]) {
        return Err(ColorError::NotRepresentable);
    }
    let decode = |v: f64| srgb_component_to_linear(v).clamp(0.0, 1.0);
    Ok(LinearRgb {
        r: decode(c.r),
        g: decode(c.g),
        b: decode(c.b),
    })
}

/// Converts linear RGB to sRGB, clamping the result to [0, 1].
///
/// Returns `ColorError::NotRepresentable` if any input channel is negative,
/// which happens for OKLCh points outside the sRGB gamut, or not finite.
pub fn linear_to_srgb(c: LinearRgb) -> Result<Srgb, ColorError> {
    if outside_gamut([c.r, c.g, c.b]) {
        return Err(ColorError::NotRepresentable);
    }
    let encode = |v: f64| linear_component_to_srgb(v).clamp(0.0, 1.0);
    Ok(Srgb {
        r: encode(c.r),
        g: encode(c.g),
        b: encode(c.b),
    })
}

// -- OKLab --

/// Converts linear RGB to OKLab.
///
/// Uses the real cube root, which keeps the sign of negative LMS values
/// instead of producing NaN.
pub fn linear_to_oklab(c: LinearRgb) -> OkLab {
    let lms = row_major(&RGB_TO_LMS) * DVec3::new(c.r, c.g, c.b);
    let lms_ = DVec3::new(lms.x.cbrt(), lms.y.cbrt(), lms.z.cbrt());
    let lab = row_major(&LMS_TO_LAB) * lms_;
    OkLab {
        l: lab.x,
        a: lab.y,
        b: lab.z,
    }
}

/// Converts OKLab to linear RGB. The result is not clamped and may leave
/// [0, 1] for out-of-gamut colors.
pub fn oklab_to_linear(c: OkLab) -> LinearRgb {
    let lms_ = row_major(&LAB_TO_LMS) * DVec3::new(c.l, c.a, c.b);
    let lms = lms_ * lms_ * lms_;
    let rgb = row_major(&LMS_TO_RGB) * lms;
    LinearRgb {
        r: rgb.x,
        g: rgb.y,
        b: rgb.z,
    }
}

/// sRGB to OKLab via linear RGB.
pub fn srgb_to_oklab(c: Srgb) -> Result<OkLab, ColorError> {
    srgb_to_linear(c).map(linear_to_oklab)
}

// -- OKLCh --

/// Normalizes a hue angle to [0, 360).
pub fn normalize_hue(h: f64) -> f64 {
    let wrapped = h.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

/// Converts OKLab to OKLCh.
///
/// Achromatic colors (chroma below 1e-10) get hue 0 rather than whatever
/// `atan2` returns for signed zeros, so grays are stable across round-trips.
pub fn oklab_to_oklch(c: OkLab) -> OkLch {
    let chroma = c.a.hypot(c.b);
    let h = if chroma < ACHROMATIC_CHROMA {
        0.0
    } else {
        normalize_hue(c.b.atan2(c.a).to_degrees())
    };
    OkLch { l: c.l, c: chroma, h }
}

/// Converts OKLCh to OKLab.
pub fn oklch_to_oklab(c: OkLch) -> OkLab {
    let (sin, cos) = c.h.to_radians().sin_cos();
    OkLab {
        l: c.l,
        a: c.c * cos,
        b: c.c * sin,
    }
}

// -- chains --

/// sRGB -> linear -> OKLab -> OKLCh.
pub fn srgb_to_oklch(c: Srgb) -> Result<OkLch, ColorError> {
    srgb_to_oklab(c).map(oklab_to_oklch)
}

/// OKLCh -> OKLab -> linear RGB, unclamped.
pub fn oklch_to_linear(c: OkLch) -> LinearRgb {
    oklab_to_linear(oklch_to_oklab(c))
}

/// OKLCh -> sRGB with output clamped to [0, 1].
///
/// Returns `ColorError::NotRepresentable` if the point needs a negative
/// linear channel.
pub fn oklch_to_srgb(c: OkLch) -> Result<Srgb, ColorError> {
    linear_to_srgb(oklch_to_linear(c))
}

/// OKLCh -> sRGB by clipping the linear value into [0, 1] first.
///
/// Never fails. This is the basic clipping used to draw colors that
/// [`oklch_to_srgb`] rejects; it is not a hue-preserving gamut map. A NaN
/// channel draws as 0.
pub fn oklch_to_srgb_clipped(c: OkLch) -> Srgb {
    let lin = oklch_to_linear(c);
    let clip = |v: f64| if v.is_nan() { 0.0 } else { v.clamp(0.0, 1.0) };
    let encode = |v: f64| linear_component_to_srgb(clip(v)).clamp(0.0, 1.0);
    Srgb {
        r: encode(lin.r),
        g: encode(lin.g),
        b: encode(lin.b),
    }
}
