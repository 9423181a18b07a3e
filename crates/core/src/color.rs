//! The four vector types a color passes through: `Srgb`, `LinearRgb`, `OkLab`
//! and `OkLch`.
//!
//! Every type is exactly three `f64` channels. Conversions between them live
//! in [`crate::transform`]; this module only handles hex parsing, byte
//! quantisation and serialization.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ColorError;

/// Gamma-encoded sRGB color with components in [0, 1].
///
/// Serializes as an uppercase hex string `"#RRGGBB"`. The hex round-trip has
/// 8-bit quantization (1/255 precision loss).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Srgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

/// Linear-light RGB (gamma-decoded), proportional to physical intensity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearRgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

/// OKLab perceptual color space: lightness plus two opponent axes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OkLab {
    pub l: f64,
    pub a: f64,
    pub b: f64,
}

/// OKLCh, the polar form of OKLab. `h` is in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OkLch {
    pub l: f64,
    pub c: f64,
    pub h: f64,
}

impl OkLch {
    /// Shorthand constructor in (lightness, chroma, hue) order.
    pub fn new(l: f64, c: f64, h: f64) -> Self {
        Self { l, c, h }
    }
}

impl Srgb {
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Parses a hex color string `"#rrggbb"` (case insensitive).
    ///
    /// The leading `#` is required. Returns `ColorError::InvalidFormat` for
    /// anything other than `#` followed by exactly six hex digits.
    pub fn from_hex(hex: &str) -> Result<Srgb, ColorError> {
        let digits = hex
            .strip_prefix('#')
            .ok_or_else(|| ColorError::InvalidFormat(format!("{hex:?} is missing the leading '#'")))?;
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ColorError::InvalidFormat(format!(
                "{hex:?} is not '#' followed by 6 hex digits"
            )));
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16)
                .map(|v| f64::from(v) / 255.0)
                .map_err(|e| ColorError::InvalidFormat(format!("{hex:?}: {e}")))
        };
        Ok(Srgb {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        })
    }

    /// Quantizes the color to 8 bits per channel.
    ///
    /// Components are clamped to [0, 1] and rounded to the nearest byte.
    pub fn to_rgb8(self) -> [u8; 3] {
        let q = |c: f64| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        [q(self.r), q(self.g), q(self.b)]
    }

    /// Converts the color to an uppercase hex string like `"#C0FFEE"`.
    pub fn to_hex(self) -> String {
        let [r, g, b] = self.to_rgb8();
        format!("#{r:02X}{g:02X}{b:02X}")
    }

    /// Returns true if every channel lies in [0, 1].
    pub fn in_unit_cube(self) -> bool {
        [self.r, self.g, self.b]
            .iter()
            .all(|c| (0.0..=1.0).contains(c))
    }
}

impl FromStr for Srgb {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Srgb::from_hex(s)
    }
}

impl fmt::Display for Srgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl Serialize for Srgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Srgb {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Srgb::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn from_hex_parses_red() {
        let red = Srgb::from_hex("#ff0000").unwrap();
        assert!(approx_eq(red.r, 1.0));
        assert!(approx_eq(red.g, 0.0));
        assert!(approx_eq(red.b, 0.0));
    }

    #[test]
    fn from_hex_is_case_insensitive() {
        let upper = Srgb::from_hex("#FF00AA").unwrap();
        let lower = Srgb::from_hex("#ff00aa").unwrap();
        assert_eq!(upper, lower);
    }

    #[test]
    fn from_hex_parses_arbitrary_color() {
        let color = Srgb::from_hex("#804020").unwrap();
        assert!(approx_eq(color.r, 0x80 as f64 / 255.0));
        assert!(approx_eq(color.g, 0x40 as f64 / 255.0));
        assert!(approx_eq(color.b, 0x20 as f64 / 255.0));
    }

    #[test]
    fn from_hex_requires_leading_hash() {
        assert!(matches!(
            Srgb::from_hex("00ff00"),
            Err(ColorError::InvalidFormat(_))
        ));
    }

    #[test]
    fn from_hex_rejects_malformed_input() {
        for bad in ["", "#", "#fff", "#ff00ff00", "#gggggg", "#+f+f+f", "#ff 00f", "#ffé000"] {
            assert!(
                matches!(Srgb::from_hex(bad), Err(ColorError::InvalidFormat(_))),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn to_hex_is_uppercase() {
        let color = Srgb::from_hex("#c0ffee").unwrap();
        assert_eq!(color.to_hex(), "#C0FFEE");
    }

    #[test]
    fn to_hex_known_values() {
        assert_eq!(Srgb::new(0.0, 0.0, 0.0).to_hex(), "#000000");
        assert_eq!(Srgb::new(1.0, 1.0, 1.0).to_hex(), "#FFFFFF");
        assert_eq!(
            Srgb::new(0x80 as f64 / 255.0, 0x40 as f64 / 255.0, 0x20 as f64 / 255.0).to_hex(),
            "#804020"
        );
    }

    #[test]
    fn to_hex_clamps_out_of_range() {
        assert_eq!(Srgb::new(1.5, -0.1, 0.5).to_hex(), "#FF0080");
    }

    #[test]
    fn to_rgb8_rounds_to_nearest() {
        assert_eq!(Srgb::new(0.999, 0.002, 0.5).to_rgb8(), [255, 1, 128]);
    }

    #[test]
    fn in_unit_cube_detects_out_of_range() {
        assert!(Srgb::new(0.0, 0.5, 1.0).in_unit_cube());
        assert!(!Srgb::new(-0.01, 0.5, 1.0).in_unit_cube());
        assert!(!Srgb::new(0.0, 0.5, 1.01).in_unit_cube());
    }

    #[test]
    fn from_str_delegates_to_from_hex() {
        let parsed: Srgb = "#00FF00".parse().unwrap();
        assert!(approx_eq(parsed.g, 1.0));
        assert!("green".parse::<Srgb>().is_err());
    }

    #[test]
    fn srgb_serializes_as_hex_string() {
        let json = serde_json::to_string(&Srgb::new(1.0, 0.0, 0.0)).unwrap();
        assert_eq!(json, "\"#FF0000\"");
    }

    #[test]
    fn srgb_deserialize_rejects_invalid_hex() {
        let result: Result<Srgb, _> = serde_json::from_str("\"not-a-color\"");
        assert!(result.is_err());
    }

    #[test]
    fn oklch_serializes_with_named_channels() {
        let json = serde_json::to_value(OkLch::new(0.5, 0.1, 42.0)).unwrap();
        assert_eq!(json["l"], 0.5);
        assert_eq!(json["c"], 0.1);
        assert_eq!(json["h"], 42.0);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn hex_round_trip_within_quantization(
                r in 0.0_f64..=1.0,
                g in 0.0_f64..=1.0,
                b in 0.0_f64..=1.0,
            ) {
                let original = Srgb { r, g, b };
                let round_tripped = Srgb::from_hex(&original.to_hex()).unwrap();
                let max_err = 0.5 / 255.0 + 1e-10;
                prop_assert!((round_tripped.r - r).abs() < max_err, "r: {} vs {}", round_tripped.r, r);
                prop_assert!((round_tripped.g - g).abs() < max_err, "g: {} vs {}", round_tripped.g, g);
                prop_assert!((round_tripped.b - b).abs() < max_err, "b: {} vs {}", round_tripped.b, b);
            }
        }
    }
}
