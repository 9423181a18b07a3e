//! WCAG relative luminance and contrast.

use crate::color::Srgb;
use crate::error::ColorError;
use crate::transform::srgb_to_linear;

/// Rec. 709 channel weights for (R, G, B) in linear light.
pub const LUMINANCE_WEIGHTS: [f64; 3] = [0.2126, 0.7152, 0.0722];

/// Flare term WCAG adds to both luminances before taking a ratio.
pub const CONTRAST_OFFSET: f64 = 0.05;

/// Relative luminance of an sRGB color, in [0, 1].
///
/// Returns `ColorError::NotRepresentable` if a channel is negative.
pub fn relative_luminance(rgb: Srgb) -> Result<f64, ColorError> {
    let lin = srgb_to_linear(rgb)?;
    let [wr, wg, wb] = LUMINANCE_WEIGHTS;
    Ok(wr * lin.r + wg * lin.g + wb * lin.b)
}

/// `luminance + 0.05`, the quantity compared in a contrast ratio.
pub fn contrast_term(luminance: f64) -> f64 {
    luminance + CONTRAST_OFFSET
}

/// WCAG contrast ratio between two luminances, lighter over darker.
///
/// Symmetric in its arguments; ranges from 1 (identical) to 21 (black on
/// white).
pub fn contrast_ratio(a: f64, b: f64) -> f64 {
    let (hi, lo) = if a >= b { (a, b) } else { (b, a) };
    contrast_term(hi) / contrast_term(lo)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-6;

    #[test]
    fn black_has_zero_luminance() {
        assert_eq!(relative_luminance(Srgb::new(0.0, 0.0, 0.0)).unwrap(), 0.0);
    }

    #[test]
    fn white_has_unit_luminance() {
        let l = relative_luminance(Srgb::new(1.0, 1.0, 1.0)).unwrap();
        assert!((l - 1.0).abs() < EPSILON, "got {l}");
    }

    #[test]
    fn primaries_match_channel_weights() {
        let r = relative_luminance(Srgb::new(1.0, 0.0, 0.0)).unwrap();
        let g = relative_luminance(Srgb::new(0.0, 1.0, 0.0)).unwrap();
        let b = relative_luminance(Srgb::new(0.0, 0.0, 1.0)).unwrap();
        assert!((r - 0.2126).abs() < EPSILON, "red {r}");
        assert!((g - 0.7152).abs() < EPSILON, "green {g}");
        assert!((b - 0.0722).abs() < EPSILON, "blue {b}");
    }

    #[test]
    fn negative_channel_is_not_representable() {
        assert_eq!(
            relative_luminance(Srgb::new(-0.1, 0.5, 0.5)),
            Err(ColorError::NotRepresentable)
        );
    }

    #[test]
    fn contrast_term_adds_offset() {
        assert!((contrast_term(0.0) - 0.05).abs() < 1e-12);
    }

    #[test]
    fn black_on_white_is_21() {
        assert!((contrast_ratio(1.0, 0.0) - 21.0).abs() < 1e-9);
        assert!((contrast_ratio(0.0, 1.0) - 21.0).abs() < 1e-9);
    }

    #[test]
    fn identical_luminance_is_1() {
        assert!((contrast_ratio(0.3, 0.3) - 1.0).abs() < 1e-12);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn luminance_stays_in_unit_range(
                r in 0.0_f64..=1.0,
                g in 0.0_f64..=1.0,
                b in 0.0_f64..=1.0,
            ) {
                let l = relative_luminance(Srgb { r, g, b }).unwrap();
                prop_assert!((0.0..=1.0 + 1e-12).contains(&l), "luminance {l}");
            }

            #[test]
            fn contrast_ratio_is_bounded_and_symmetric(a in 0.0_f64..=1.0, b in 0.0_f64..=1.0) {
                let ratio = contrast_ratio(a, b);
                prop_assert!((1.0..=21.0 + 1e-9).contains(&ratio), "ratio {ratio}");
                prop_assert_eq!(ratio.to_bits(), contrast_ratio(b, a).to_bits());
            }
        }
    }
}
